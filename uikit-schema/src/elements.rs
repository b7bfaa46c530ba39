//! Element types: the leaf controls nested inside blocks.
//!
//! Interactive and input elements carry an `action_id` that a dispatcher
//! uses to route a user interaction back to the element. Image and code
//! editor elements are display-only and have no such field.

use serde::{Deserialize, Serialize};

use crate::{OptionObject, TextObject};

/// Any element that can be nested inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockElement {
    Button(ButtonElement),
    Image(ImageElement),
    #[serde(rename = "overflow")]
    OverflowMenu(OverflowMenuElement),
    PlainTextInput(PlainTextInputElement),
    StaticSelect(StaticSelectElement),
    MultiStaticSelect(MultiStaticSelectElement),
    CodeEditor(CodeEditorElement),
}

impl BlockElement {
    /// Get the discriminant of this element.
    pub fn element_type(&self) -> BlockElementType {
        match self {
            BlockElement::Button(_) => BlockElementType::Button,
            BlockElement::Image(_) => BlockElementType::Image,
            BlockElement::OverflowMenu(_) => BlockElementType::OverflowMenu,
            BlockElement::PlainTextInput(_) => BlockElementType::PlainTextInput,
            BlockElement::StaticSelect(_) => BlockElementType::StaticSelect,
            BlockElement::MultiStaticSelect(_) => BlockElementType::MultiStaticSelect,
            BlockElement::CodeEditor(_) => BlockElementType::CodeEditor,
        }
    }

    /// The action identifier, or `None` for display-only elements.
    pub fn action_id(&self) -> Option<&str> {
        match self {
            BlockElement::Button(e) => Some(e.action_id.as_str()),
            BlockElement::OverflowMenu(e) => Some(e.action_id.as_str()),
            BlockElement::PlainTextInput(e) => Some(e.action_id.as_str()),
            BlockElement::StaticSelect(e) => Some(e.action_id.as_str()),
            BlockElement::MultiStaticSelect(e) => Some(e.action_id.as_str()),
            BlockElement::Image(_) | BlockElement::CodeEditor(_) => None,
        }
    }
}

/// Discriminant of a [`BlockElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockElementType {
    Button,
    Image,
    OverflowMenu,
    PlainTextInput,
    StaticSelect,
    MultiStaticSelect,
    CodeEditor,
}

impl BlockElementType {
    /// Get the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockElementType::Button => "button",
            BlockElementType::Image => "image",
            BlockElementType::OverflowMenu => "overflow",
            BlockElementType::PlainTextInput => "plain_text_input",
            BlockElementType::StaticSelect => "static_select",
            BlockElementType::MultiStaticSelect => "multi_static_select",
            BlockElementType::CodeEditor => "code_editor",
        }
    }

    /// Returns true if elements of this type carry an action id.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, BlockElementType::Image | BlockElementType::CodeEditor)
    }
}

impl std::fmt::Display for BlockElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// When an input element should dispatch an action without a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchAction {
    OnCharacterEntered,
    OnItemSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonElement {
    #[serde(default)]
    pub action_id: String,
    pub text: TextObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub image_url: String,
    pub alt_text: String,
}

impl ImageElement {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// A compact menu of options behind a single control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverflowMenuElement {
    #[serde(default)]
    pub action_id: String,
    pub options: Vec<OptionObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainTextInputElement {
    #[serde(default)]
    pub action_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<Vec<DispatchAction>>,
}

/// Single-choice select over a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticSelectElement {
    #[serde(default)]
    pub action_id: String,
    pub placeholder: TextObject,
    pub options: Vec<OptionObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<Vec<DispatchAction>>,
}

/// Multiple-choice select over a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiStaticSelectElement {
    #[serde(default)]
    pub action_id: String,
    pub placeholder: TextObject,
    pub options: Vec<OptionObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<Vec<DispatchAction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEditorElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
}

macro_rules! impl_from_element {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for BlockElement {
                fn from(element: $ty) -> Self {
                    BlockElement::$variant(element)
                }
            }
        )*
    };
}

impl_from_element! {
    ButtonElement => Button,
    ImageElement => Image,
    OverflowMenuElement => OverflowMenu,
    PlainTextInputElement => PlainTextInput,
    StaticSelectElement => StaticSelect,
    MultiStaticSelectElement => MultiStaticSelect,
    CodeEditorElement => CodeEditor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(action_id: &str) -> BlockElement {
        ButtonElement {
            action_id: action_id.into(),
            text: TextObject::plain("Go"),
            value: None,
            url: None,
            style: Some(ButtonStyle::Primary),
        }
        .into()
    }

    #[test]
    fn test_element_type_tags() {
        assert_eq!(BlockElementType::OverflowMenu.as_str(), "overflow");
        assert_eq!(BlockElementType::PlainTextInput.as_str(), "plain_text_input");
        assert_eq!(
            BlockElementType::MultiStaticSelect.as_str(),
            "multi_static_select"
        );
        assert_eq!(BlockElementType::CodeEditor.as_str(), "code_editor");
    }

    #[test]
    fn test_actionable_types() {
        assert!(BlockElementType::Button.is_actionable());
        assert!(BlockElementType::StaticSelect.is_actionable());
        assert!(!BlockElementType::Image.is_actionable());
        assert!(!BlockElementType::CodeEditor.is_actionable());
    }

    #[test]
    fn test_action_id_accessor() {
        assert_eq!(button("press").action_id(), Some("press"));
        let image: BlockElement = ImageElement::new("https://x/y.png", "y").into();
        assert_eq!(image.action_id(), None);
        assert_eq!(image.element_type(), BlockElementType::Image);
    }

    #[test]
    fn test_button_serializes_camel_case_without_absent_fields() {
        let json = serde_json::to_value(button("press")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "button",
                "actionId": "press",
                "text": { "type": "plain_text", "text": "Go", "emoji": false },
                "style": "primary"
            })
        );
    }

    #[test]
    fn test_image_element_has_no_action_id_field() {
        let image: BlockElement = ImageElement::new("https://x/y.png", "alt").into();
        let json = serde_json::to_value(image).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "image", "imageUrl": "https://x/y.png", "altText": "alt" })
        );
    }

    #[test]
    fn test_deserialize_overflow_tag() {
        let element: BlockElement = serde_json::from_str(
            r#"{"type":"overflow","actionId":"menu","options":[{"text":{"type":"mrkdwn","text":"a"},"value":"a"}]}"#,
        )
        .unwrap();
        assert_eq!(element.element_type(), BlockElementType::OverflowMenu);
        assert_eq!(element.action_id(), Some("menu"));
    }

    #[test]
    fn test_dispatch_action_tags() {
        let json = serde_json::to_value(vec![
            DispatchAction::OnCharacterEntered,
            DispatchAction::OnItemSelected,
        ])
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!(["on_character_entered", "on_item_selected"])
        );
    }
}
