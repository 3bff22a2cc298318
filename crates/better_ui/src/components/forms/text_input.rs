use better_ui_core::{option_set, Element, OptionSet};
use serde::Deserialize;

use super::field::{
    control_wrapper, render_field, FieldConfig, FieldContext, FieldOptions, InputRenderer,
};
use crate::render::Component;

option_set! {
    /// `type` of a single-line text input
    pub enum TextType: "type" {
        #[default]
        Text => "text",
        Email => "email",
        Url => "url",
        Tel => "tel",
        Search => "search",
    }
}

/// Single-line text input
#[derive(Clone, Debug, Deserialize)]
pub struct TextInput {
    #[serde(flatten)]
    field: FieldConfig,
    #[serde(default, rename = "type")]
    input_type: TextType,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    autocomplete: Option<String>,
}

impl TextInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldConfig::new(name),
            input_type: TextType::default(),
            value: None,
            autocomplete: None,
        }
    }

    pub fn input_type(mut self, input_type: TextType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }
}

impl FieldOptions for TextInput {
    fn field_mut(&mut self) -> &mut FieldConfig {
        &mut self.field
    }
}

impl InputRenderer for TextInput {
    fn field(&self) -> &FieldConfig {
        &self.field
    }

    fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
        let input = ctx
            .input(self.input_type.as_str())
            .attr_opt("value", self.value.clone())
            .attr_opt("autocomplete", self.autocomplete.clone())
            .class(ctx.control_classes(&[]));
        control_wrapper().child(input)
    }
}

impl Component for TextInput {
    fn render(&self) -> Element {
        render_field(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_input() {
        let element = TextInput::new("user[email]")
            .input_type(TextType::Email)
            .value("ada@example.com")
            .placeholder("you@example.com")
            .render();
        let input = element.find(|e| e.tag() == "input").unwrap();
        assert_eq!(input.attr_value("type"), Some("email"));
        assert_eq!(input.attr_value("name"), Some("user[email]"));
        assert_eq!(input.attr_value("value"), Some("ada@example.com"));
        assert_eq!(input.attr_value("placeholder"), Some("you@example.com"));
    }

    #[test]
    fn test_value_is_escaped() {
        let html = TextInput::new("q").value(r#""><script>"#).to_html();
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn test_deserialize() {
        let input: TextInput = toml::from_str(
            r#"name = "site"
type = "url"
label = "Website"
errors = ["is not a URL"]"#,
        )
        .unwrap();
        let element = input.render();
        let control = element.find(|e| e.tag() == "input").unwrap();
        assert_eq!(control.attr_value("type"), Some("url"));
        assert_eq!(control.attr_value("aria-invalid"), Some("true"));

        let err = toml::from_str::<TextInput>(r#"name = "site"
type = "color""#)
        .unwrap_err();
        assert!(err.to_string().contains("invalid type \"color\""));
    }
}
