use better_ui_core::{el, option_set, ComponentState, Element};
use serde::Deserialize;

use super::field::{render_field, FieldConfig, FieldContext, FieldOptions, InputRenderer};
use crate::render::Component;

option_set! {
    /// Which directions the user may resize the textarea in
    pub enum Resize: "resize" {
        None => "none",
        #[default]
        Vertical => "vertical",
        Horizontal => "horizontal",
        Both => "both",
    }
}

impl Resize {
    fn class(self) -> &'static str {
        match self {
            Resize::None => "resize-none",
            Resize::Vertical => "resize-y",
            Resize::Horizontal => "resize-x",
            Resize::Both => "resize",
        }
    }
}

fn default_rows() -> u32 {
    4
}

/// Multi-line text input
#[derive(Clone, Debug, Deserialize)]
pub struct Textarea {
    #[serde(flatten)]
    field: FieldConfig,
    #[serde(default)]
    value: Option<String>,
    #[serde(default = "default_rows")]
    rows: u32,
    #[serde(default)]
    cols: Option<u32>,
    #[serde(default)]
    maxlength: Option<u32>,
    #[serde(default)]
    resize: Resize,
}

impl Textarea {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldConfig::new(name),
            value: None,
            rows: default_rows(),
            cols: None,
            maxlength: None,
            resize: Resize::default(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn maxlength(mut self, maxlength: u32) -> Self {
        self.maxlength = Some(maxlength);
        self
    }

    pub fn resize(mut self, resize: Resize) -> Self {
        self.resize = resize;
        self
    }
}

impl FieldOptions for Textarea {
    fn field_mut(&mut self) -> &mut FieldConfig {
        &mut self.field
    }
}

impl InputRenderer for Textarea {
    fn field(&self) -> &FieldConfig {
        &self.field
    }

    fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
        let textarea = el("textarea")
            .attr("name", self.field.name.clone())
            .attr("id", ctx.id.clone())
            .attr("rows", self.rows.to_string())
            .attr_opt("cols", self.cols.map(|cols| cols.to_string()))
            .attr_opt("maxlength", self.maxlength.map(|max| max.to_string()))
            .attr_opt("placeholder", self.field.placeholder.clone())
            .bool_attr("disabled", self.field.disabled)
            .bool_attr("readonly", self.field.readonly)
            .bool_attr("required", self.field.required)
            .attr_opt(
                "aria-invalid",
                (ctx.state == ComponentState::Error).then_some("true"),
            )
            .attr_opt("aria-describedby", ctx.described_by.clone())
            .class(ctx.control_classes(&[self.resize.class()]));

        match &self.value {
            Some(value) => textarea.text(value.clone()),
            None => textarea,
        }
    }
}

impl Component for Textarea {
    fn render(&self) -> Element {
        render_field(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textarea_of(element: &Element) -> &Element {
        element.find(|e| e.tag() == "textarea").unwrap()
    }

    #[test]
    fn test_textarea_attributes() {
        let element = Textarea::new("post[body]")
            .rows(8)
            .maxlength(500)
            .value("Hello <world>")
            .render();
        let textarea = textarea_of(&element);

        assert!(!textarea.has_attr("type"));
        assert_eq!(textarea.attr_value("rows"), Some("8"));
        assert_eq!(textarea.attr_value("maxlength"), Some("500"));
        assert_eq!(textarea.attr_value("id"), Some("post_body"));
        assert_eq!(textarea.text_content(), "Hello <world>");
        assert!(textarea.has_class("resize-y"));
        assert!(element.to_html().contains("Hello &lt;world&gt;</textarea>"));
    }

    #[test]
    fn test_resize_classes() {
        for (resize, class) in [
            (Resize::None, "resize-none"),
            (Resize::Horizontal, "resize-x"),
            (Resize::Both, "resize"),
        ] {
            let element = Textarea::new("notes").resize(resize).render();
            let textarea = textarea_of(&element);
            assert!(textarea.has_class(class));
            assert!(!textarea.has_class("resize-y"));
        }
    }

    #[test]
    fn test_error_state() {
        let element = Textarea::new("bio").error("is too long").render();
        let textarea = textarea_of(&element);
        assert_eq!(textarea.attr_value("aria-invalid"), Some("true"));
        assert_eq!(textarea.attr_value("aria-describedby"), Some("bio_error"));
    }

    #[test]
    fn test_deserialize() {
        let textarea: Textarea = toml::from_str(
            r#"name = "bio"
rows = 3
resize = "none""#,
        )
        .unwrap();
        assert!(textarea.to_html().contains(r#"rows="3""#));

        let err = toml::from_str::<Textarea>(r#"name = "bio"
resize = "diagonal""#)
        .unwrap_err();
        assert!(err.to_string().contains("invalid resize \"diagonal\""));
    }
}
