//! The block builder.
//!
//! [`BlockBuilder`] accumulates an ordered list of blocks for one app. Every
//! `add_*` call appends exactly one block, assigning `app_id` and a
//! `block_id` when the caller left it out. The `new_*` factories build
//! elements and text objects for embedding in a later `add_*` call and
//! never touch the accumulated list.
//!
//! # Example
//!
//! ```
//! use uikit_builder::{BlockBuilder, SectionBlockParams};
//!
//! let mut builder = BlockBuilder::new("app-1");
//! let text = builder.new_plain_text_object("hi", false);
//! builder
//!     .add_divider_block()
//!     .add_section_block(SectionBlockParams::new(text));
//!
//! assert_eq!(builder.len(), 2);
//! assert!(builder.blocks().iter().all(|b| b.app_id() == "app-1"));
//! ```

use tracing::{debug, trace};
use uikit_schema::{
    ActionsBlock, Block, ButtonElement, CodeEditorBlock, CodeEditorElement, ConditionalBlock,
    ConditionalBlockFilters, ContextBlock, DividerBlock, ImageBlock, ImageElement, InputBlock,
    MultiStaticSelectElement, OverflowMenuElement, PlainTextInputElement, SectionBlock,
    StaticSelectElement, TextObject,
};

use crate::{
    ActionsBlockParams, ButtonElementParams, CodeEditorBlockParams, ContextBlockParams,
    IdGenerator, ImageBlockParams, InputBlockParams, MultiStaticSelectElementParams,
    OverflowMenuElementParams, PlainTextInputElementParams, SectionBlockParams,
    StaticSelectElementParams, UuidGenerator,
};

/// Fluent accumulator of blocks bound to one app.
#[derive(Debug, Clone)]
pub struct BlockBuilder<G = UuidGenerator> {
    app_id: String,
    blocks: Vec<Block>,
    ids: G,
}

impl BlockBuilder {
    /// Create a builder that generates random UUIDs.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self::with_generator(app_id, UuidGenerator::default())
    }
}

impl<G: IdGenerator> BlockBuilder<G> {
    /// Create a builder drawing identifiers from `ids`.
    pub fn with_generator(app_id: impl Into<String>, ids: G) -> Self {
        Self {
            app_id: app_id.into(),
            blocks: Vec::new(),
            ids,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The accumulated blocks, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    pub fn add_section_block(&mut self, params: SectionBlockParams) -> &mut Self {
        let SectionBlockParams {
            block_id,
            text,
            accessory,
            fields,
        } = params;

        self.push_block(SectionBlock {
            app_id: String::new(),
            block_id: block_id.unwrap_or_default(),
            text,
            accessory,
            fields,
        })
    }

    pub fn add_image_block(&mut self, params: ImageBlockParams) -> &mut Self {
        let ImageBlockParams {
            block_id,
            image_url,
            alt_text,
            title,
        } = params;

        self.push_block(ImageBlock {
            app_id: String::new(),
            block_id: block_id.unwrap_or_default(),
            image_url,
            alt_text,
            title,
        })
    }

    pub fn add_divider_block(&mut self) -> &mut Self {
        self.push_block(DividerBlock::default())
    }

    pub fn add_actions_block(&mut self, params: ActionsBlockParams) -> &mut Self {
        self.push_block(ActionsBlock {
            app_id: String::new(),
            block_id: params.block_id.unwrap_or_default(),
            elements: params.elements,
        })
    }

    pub fn add_context_block(&mut self, params: ContextBlockParams) -> &mut Self {
        self.push_block(ContextBlock {
            app_id: String::new(),
            block_id: params.block_id.unwrap_or_default(),
            elements: params.elements,
        })
    }

    pub fn add_input_block(&mut self, params: InputBlockParams) -> &mut Self {
        let InputBlockParams {
            block_id,
            label,
            element,
            hint,
            optional,
        } = params;

        self.push_block(InputBlock {
            app_id: String::new(),
            block_id: block_id.unwrap_or_default(),
            label,
            element,
            hint,
            optional,
        })
    }

    /// Append a block that renders `render` only when `when` holds.
    ///
    /// `render` may be a finished list of blocks or another builder, whose
    /// blocks are taken as they stand at call time. Nested blocks keep the
    /// identifiers they already have.
    pub fn add_conditional_block(
        &mut self,
        render: impl IntoBlocks,
        when: Option<ConditionalBlockFilters>,
    ) -> &mut Self {
        let render = render.into_blocks();
        debug!(children = render.len(), "adopting conditional render tree");

        self.push_block(ConditionalBlock {
            app_id: String::new(),
            block_id: String::new(),
            render,
            when,
        })
    }

    pub fn add_code_editor_block(&mut self, params: CodeEditorBlockParams) -> &mut Self {
        let CodeEditorBlockParams {
            block_id,
            value,
            language,
            read_only,
        } = params;

        self.push_block(CodeEditorBlock {
            app_id: String::new(),
            block_id: block_id.unwrap_or_default(),
            value,
            language,
            read_only,
        })
    }

    fn push_block(&mut self, block: impl Into<Block>) -> &mut Self {
        let mut block = block.into();

        if block.block_id().is_empty() {
            block.set_block_id(self.ids.generate());
        }
        block.set_app_id(self.app_id.as_str());

        trace!(
            block_type = %block.block_type(),
            block_id = block.block_id(),
            position = self.blocks.len(),
            "appended block"
        );
        self.blocks.push(block);
        self
    }

    // =========================================================================
    // Text objects
    // =========================================================================

    pub fn new_plain_text_object(&self, text: impl Into<String>, emoji: bool) -> TextObject {
        TextObject::PlainText {
            text: text.into(),
            emoji,
        }
    }

    pub fn new_markdown_text_object(&self, text: impl Into<String>) -> TextObject {
        TextObject::markdown(text)
    }

    // =========================================================================
    // Elements
    // =========================================================================

    pub fn new_button_element(&self, params: ButtonElementParams) -> ButtonElement {
        ButtonElement {
            action_id: self.action_id(params.action_id),
            text: params.text,
            value: params.value,
            url: params.url,
            style: params.style,
        }
    }

    /// Image elements are display-only and get no action id.
    pub fn new_image_element(&self, element: ImageElement) -> ImageElement {
        element
    }

    pub fn new_overflow_menu_element(
        &self,
        params: OverflowMenuElementParams,
    ) -> OverflowMenuElement {
        OverflowMenuElement {
            action_id: self.action_id(params.action_id),
            options: params.options,
        }
    }

    pub fn new_plain_text_input_element(
        &self,
        params: PlainTextInputElementParams,
    ) -> PlainTextInputElement {
        PlainTextInputElement {
            action_id: self.action_id(params.action_id),
            placeholder: params.placeholder,
            initial_value: params.initial_value,
            multiline: params.multiline,
            min_length: params.min_length,
            max_length: params.max_length,
            dispatch_action_config: params.dispatch_action_config,
        }
    }

    pub fn new_static_select_element(
        &self,
        params: StaticSelectElementParams,
    ) -> StaticSelectElement {
        StaticSelectElement {
            action_id: self.action_id(params.action_id),
            placeholder: params.placeholder,
            options: params.options,
            initial_value: params.initial_value,
            dispatch_action_config: params.dispatch_action_config,
        }
    }

    pub fn new_multi_static_select_element(
        &self,
        params: MultiStaticSelectElementParams,
    ) -> MultiStaticSelectElement {
        MultiStaticSelectElement {
            action_id: self.action_id(params.action_id),
            placeholder: params.placeholder,
            options: params.options,
            initial_value: params.initial_value,
            dispatch_action_config: params.dispatch_action_config,
        }
    }

    /// Code editor elements are display-only and get no action id.
    pub fn new_code_editor_element(&self, element: CodeEditorElement) -> CodeEditorElement {
        element
    }

    fn action_id(&self, supplied: Option<String>) -> String {
        supplied
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.ids.generate())
    }
}

/// Anything that can supply the nested sequence of a conditional block.
pub trait IntoBlocks {
    fn into_blocks(self) -> Vec<Block>;
}

impl IntoBlocks for Vec<Block> {
    fn into_blocks(self) -> Vec<Block> {
        self
    }
}

impl IntoBlocks for &[Block] {
    fn into_blocks(self) -> Vec<Block> {
        self.to_vec()
    }
}

impl<G: IdGenerator> IntoBlocks for BlockBuilder<G> {
    fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl<G: IdGenerator> IntoBlocks for &BlockBuilder<G> {
    fn into_blocks(self) -> Vec<Block> {
        self.blocks.clone()
    }
}
