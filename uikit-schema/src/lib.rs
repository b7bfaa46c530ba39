//! Type definitions for UIKit documents.
//!
//! A document is an ordered list of [`Block`]s. Some blocks hold
//! [`BlockElement`]s (buttons, selects, inputs, images) and most hold
//! [`TextObject`]s. Each of the three families is a closed tagged union
//! whose discriminant serializes as a `type` field:
//!
//! ```text
//! Block ─┬─ section ─── TextObject, accessory: BlockElement
//!        ├─ actions ─── [BlockElement]
//!        ├─ context ─── [TextObject | BlockElement]
//!        ├─ input ───── label: TextObject, element: BlockElement
//!        └─ conditional ─ render: [Block]
//! ```
//!
//! The types carry data only; assembling a document with identifiers
//! assigned is the job of the `uikit-builder` crate.

mod blocks;
mod elements;
mod objects;

pub use blocks::{
    ActionsBlock, Block, BlockType, CodeEditorBlock, ConditionalBlock, ConditionalBlockFilters,
    ContextBlock, ContextElement, DividerBlock, ImageBlock, InputBlock, RenderEngine,
    SectionBlock,
};
pub use elements::{
    BlockElement, BlockElementType, ButtonElement, ButtonStyle, CodeEditorElement, DispatchAction,
    ImageElement, MultiStaticSelectElement, OverflowMenuElement, PlainTextInputElement,
    StaticSelectElement,
};
pub use objects::{OptionObject, TextObject, TextObjectType};
