//! Block types: the top-level layout units of a document.
//!
//! Every block carries the owning app's identifier and a block identifier.
//! Both default to empty when deserialized so that a missing identifier can
//! be reported by the document checker rather than as a parse failure.

use serde::{Deserialize, Serialize};

use crate::{BlockElement, TextObject};

/// Any top-level block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section(SectionBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
    Actions(ActionsBlock),
    Context(ContextBlock),
    Input(InputBlock),
    Conditional(ConditionalBlock),
    CodeEditor(CodeEditorBlock),
}

/// Expands `$body` once per variant with `$b` bound to the inner record.
macro_rules! each_block {
    ($block:expr, $b:ident => $body:expr) => {
        match $block {
            Block::Section($b) => $body,
            Block::Divider($b) => $body,
            Block::Image($b) => $body,
            Block::Actions($b) => $body,
            Block::Context($b) => $body,
            Block::Input($b) => $body,
            Block::Conditional($b) => $body,
            Block::CodeEditor($b) => $body,
        }
    };
}

impl Block {
    /// Get the discriminant of this block.
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Section(_) => BlockType::Section,
            Block::Divider(_) => BlockType::Divider,
            Block::Image(_) => BlockType::Image,
            Block::Actions(_) => BlockType::Actions,
            Block::Context(_) => BlockType::Context,
            Block::Input(_) => BlockType::Input,
            Block::Conditional(_) => BlockType::Conditional,
            Block::CodeEditor(_) => BlockType::CodeEditor,
        }
    }

    pub fn app_id(&self) -> &str {
        each_block!(self, b => &b.app_id)
    }

    pub fn block_id(&self) -> &str {
        each_block!(self, b => &b.block_id)
    }

    pub fn set_app_id(&mut self, app_id: impl Into<String>) {
        each_block!(self, b => b.app_id = app_id.into())
    }

    pub fn set_block_id(&mut self, block_id: impl Into<String>) {
        each_block!(self, b => b.block_id = block_id.into())
    }

    /// Nested blocks rendered by a conditional block; empty for all others.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Conditional(b) => &b.render,
            _ => &[],
        }
    }

    /// Elements held directly by this block, in field order.
    ///
    /// Text objects in a context block are skipped. Elements inside nested
    /// conditional blocks are not included.
    pub fn elements(&self) -> Vec<&BlockElement> {
        match self {
            Block::Section(b) => b.accessory.iter().collect(),
            Block::Actions(b) => b.elements.iter().collect(),
            Block::Context(b) => b
                .elements
                .iter()
                .filter_map(|e| match e {
                    ContextElement::Element(element) => Some(element),
                    ContextElement::Text(_) => None,
                })
                .collect(),
            Block::Input(b) => vec![&b.element],
            Block::Divider(_) | Block::Image(_) | Block::Conditional(_) | Block::CodeEditor(_) => {
                Vec::new()
            }
        }
    }
}

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Section,
    Divider,
    Image,
    Actions,
    Context,
    Input,
    Conditional,
    CodeEditor,
}

impl BlockType {
    /// Get the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Section => "section",
            BlockType::Divider => "divider",
            BlockType::Image => "image",
            BlockType::Actions => "actions",
            BlockType::Context => "context",
            BlockType::Input => "input",
            BlockType::Conditional => "conditional",
            BlockType::CodeEditor => "code_editor",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub text: TextObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<BlockElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TextObject>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub image_url: String,
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
}

/// A row of interactive elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub elements: Vec<BlockElement>,
}

/// Secondary information, mixing text and images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub elements: Vec<ContextElement>,
}

/// An entry of a context block: either a text object or an element.
///
/// Both sides carry their own `type` tag, so the wire form is untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextElement {
    Text(TextObject),
    Element(BlockElement),
}

impl From<TextObject> for ContextElement {
    fn from(text: TextObject) -> Self {
        ContextElement::Text(text)
    }
}

impl From<BlockElement> for ContextElement {
    fn from(element: BlockElement) -> Self {
        ContextElement::Element(element)
    }
}

impl From<crate::ImageElement> for ContextElement {
    fn from(image: crate::ImageElement) -> Self {
        ContextElement::Element(image.into())
    }
}

/// A labelled input control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub label: TextObject,
    pub element: BlockElement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<TextObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// A nested block sequence shown only when `when` holds.
///
/// `render` may itself contain conditional blocks; no depth limit applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub render: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<ConditionalBlockFilters>,
}

// Dropping `render` recursively would overflow the stack on deep trees, so
// nested conditionals are flattened onto a heap stack and freed in a loop.
impl Drop for ConditionalBlock {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.render);
        while let Some(mut block) = pending.pop() {
            if let Block::Conditional(inner) = &mut block {
                pending.append(&mut inner.render);
            }
        }
    }
}

/// Conditions under which a conditional block is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalBlockFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Vec<RenderEngine>>,
}

impl ConditionalBlockFilters {
    /// Filter matching only the given engines.
    pub fn engines(engines: impl IntoIterator<Item = RenderEngine>) -> Self {
        Self {
            engine: Some(engines.into_iter().collect()),
        }
    }
}

/// Client surface that renders a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderEngine {
    #[serde(rename = "rocket.chat")]
    RocketChat,
    #[serde(rename = "livechat")]
    Livechat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEditorBlock {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub block_id: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

macro_rules! impl_from_block {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Block {
                fn from(block: $ty) -> Self {
                    Block::$variant(block)
                }
            }
        )*
    };
}

impl_from_block! {
    SectionBlock => Section,
    DividerBlock => Divider,
    ImageBlock => Image,
    ActionsBlock => Actions,
    ContextBlock => Context,
    InputBlock => Input,
    ConditionalBlock => Conditional,
    CodeEditorBlock => CodeEditor,
}
