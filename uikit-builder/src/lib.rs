//! Fluent builder for UIKit block documents.
//!
//! This crate assembles the types from `uikit-schema` into documents while
//! enforcing the identifier rules:
//! - every block carries the builder's app id and a non-empty block id
//! - every interactive or input element carries a non-empty action id
//!
//! # Module Organization
//!
//! - [`BlockBuilder`] - `add_*` methods for blocks, `new_*` factories for
//!   elements and text objects
//! - params - caller-facing inputs, one per block and actionable element
//! - [`IdGenerator`] - pluggable identifier source ([`UuidGenerator`] by default)
//! - [`walk()`] - depth-first traversal and id lookups over nested documents
//! - [`document`] - JSON encoding with depth and identifier checking
//! - `testing` - deterministic ids for tests (feature-gated)

mod builder;
pub mod document;
mod error;
mod ids;
mod params;
mod walk;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{BlockBuilder, IntoBlocks};
pub use error::{Error, Result};
pub use ids::{IdGenerator, UuidGenerator};
pub use params::{
    ActionsBlockParams, ButtonElementParams, CodeEditorBlockParams, ContextBlockParams,
    ImageBlockParams, InputBlockParams, MultiStaticSelectElementParams, OverflowMenuElementParams,
    PlainTextInputElementParams, SectionBlockParams, StaticSelectElementParams,
};
pub use uikit_schema::*;
pub use walk::{Walk, action_ids, find_action, find_block, walk};
