//! Text objects and other small records embedded in blocks and elements.

use serde::{Deserialize, Serialize};

/// Displayed text, either plain or markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextObject {
    /// Plain text, optionally rendering emoji shortcodes.
    #[serde(rename = "plain_text")]
    PlainText {
        text: String,
        #[serde(default)]
        emoji: bool,
    },
    /// Markdown-formatted text.
    #[serde(rename = "mrkdwn")]
    Markdown { text: String },
}

impl TextObject {
    /// Plain text without emoji rendering.
    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        TextObject::Markdown { text: text.into() }
    }

    /// The raw text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text, .. } | TextObject::Markdown { text } => text,
        }
    }

    /// Get the wire tag for this text object.
    pub fn type_tag(&self) -> TextObjectType {
        match self {
            TextObject::PlainText { .. } => TextObjectType::PlainText,
            TextObject::Markdown { .. } => TextObjectType::Markdown,
        }
    }
}

/// Discriminant of a [`TextObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextObjectType {
    PlainText,
    Markdown,
}

impl TextObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextObjectType::PlainText => "plain_text",
            TextObjectType::Markdown => "mrkdwn",
        }
    }
}

/// One selectable entry of an overflow menu or select element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionObject {
    pub text: TextObject,
    pub value: String,
}

impl OptionObject {
    pub fn new(text: TextObject, value: impl Into<String>) -> Self {
        Self {
            text,
            value: value.into(),
        }
    }
}
