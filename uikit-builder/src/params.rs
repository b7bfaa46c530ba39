//! Caller-facing inputs for the builder's `add_*` and `new_*` methods.
//!
//! Each params struct mirrors its record minus the `type` discriminant.
//! Blocks drop `app_id` (the builder always sets it) and make `block_id`
//! optional. Actionable elements make `action_id` optional. A `None` or
//! empty identifier is replaced by a generated one.

use uikit_schema::{
    BlockElement, ButtonStyle, ContextElement, DispatchAction, OptionObject, TextObject,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlockParams {
    pub block_id: Option<String>,
    pub text: TextObject,
    pub accessory: Option<BlockElement>,
    pub fields: Option<Vec<TextObject>>,
}

impl SectionBlockParams {
    pub fn new(text: TextObject) -> Self {
        Self {
            block_id: None,
            text,
            accessory: None,
            fields: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn accessory(mut self, accessory: impl Into<BlockElement>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }

    pub fn field(mut self, field: TextObject) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlockParams {
    pub block_id: Option<String>,
    pub image_url: String,
    pub alt_text: String,
    pub title: Option<TextObject>,
}

impl ImageBlockParams {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            block_id: None,
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn title(mut self, title: TextObject) -> Self {
        self.title = Some(title);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsBlockParams {
    pub block_id: Option<String>,
    pub elements: Vec<BlockElement>,
}

impl ActionsBlockParams {
    pub fn new(elements: Vec<BlockElement>) -> Self {
        Self {
            block_id: None,
            elements,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn element(mut self, element: impl Into<BlockElement>) -> Self {
        self.elements.push(element.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextBlockParams {
    pub block_id: Option<String>,
    pub elements: Vec<ContextElement>,
}

impl ContextBlockParams {
    pub fn new(elements: Vec<ContextElement>) -> Self {
        Self {
            block_id: None,
            elements,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn element(mut self, element: impl Into<ContextElement>) -> Self {
        self.elements.push(element.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBlockParams {
    pub block_id: Option<String>,
    pub label: TextObject,
    pub element: BlockElement,
    pub hint: Option<TextObject>,
    pub optional: Option<bool>,
}

impl InputBlockParams {
    pub fn new(label: TextObject, element: impl Into<BlockElement>) -> Self {
        Self {
            block_id: None,
            label,
            element: element.into(),
            hint: None,
            optional: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn hint(mut self, hint: TextObject) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEditorBlockParams {
    pub block_id: Option<String>,
    pub value: String,
    pub language: Option<String>,
    pub read_only: Option<bool>,
}

impl CodeEditorBlockParams {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonElementParams {
    pub action_id: Option<String>,
    pub text: TextObject,
    pub value: Option<String>,
    pub url: Option<String>,
    pub style: Option<ButtonStyle>,
}

impl ButtonElementParams {
    pub fn new(text: TextObject) -> Self {
        Self {
            action_id: None,
            text,
            value: None,
            url: None,
            style: None,
        }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowMenuElementParams {
    pub action_id: Option<String>,
    pub options: Vec<OptionObject>,
}

impl OverflowMenuElementParams {
    pub fn new(options: Vec<OptionObject>) -> Self {
        Self {
            action_id: None,
            options,
        }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTextInputElementParams {
    pub action_id: Option<String>,
    pub placeholder: Option<TextObject>,
    pub initial_value: Option<String>,
    pub multiline: Option<bool>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub dispatch_action_config: Option<Vec<DispatchAction>>,
}

impl PlainTextInputElementParams {
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: TextObject) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSelectElementParams {
    pub action_id: Option<String>,
    pub placeholder: TextObject,
    pub options: Vec<OptionObject>,
    pub initial_value: Option<String>,
    pub dispatch_action_config: Option<Vec<DispatchAction>>,
}

impl StaticSelectElementParams {
    pub fn new(placeholder: TextObject, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: None,
            placeholder,
            options,
            initial_value: None,
            dispatch_action_config: None,
        }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiStaticSelectElementParams {
    pub action_id: Option<String>,
    pub placeholder: TextObject,
    pub options: Vec<OptionObject>,
    pub initial_value: Option<Vec<String>>,
    pub dispatch_action_config: Option<Vec<DispatchAction>>,
}

impl MultiStaticSelectElementParams {
    pub fn new(placeholder: TextObject, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: None,
            placeholder,
            options,
            initial_value: None,
            dispatch_action_config: None,
        }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn initial_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_value = Some(values.into_iter().map(Into::into).collect());
        self
    }
}
