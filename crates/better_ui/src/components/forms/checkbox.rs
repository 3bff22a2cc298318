//! Checkbox and its per-variant tables
//!
//! A checkbox renders its own `<label>` around the box so the label text
//! is clickable. A hidden input carrying the unchecked value precedes the
//! box, so an unchecked checkbox still submits its name.

use better_ui_core::{class_names, el, option_set, ComponentState, Element, Size, Variant};
use serde::Deserialize;

use super::field::{
    render_field, Chrome, FieldConfig, FieldContext, FieldOptions, InputRenderer,
};
use crate::render::Component;

option_set! {
    /// Side of the box the label text sits on
    pub enum LabelPosition: "label_position" {
        Left => "left",
        #[default]
        Right => "right",
    }
}

const BOX_BASE: &str = "shrink-0 rounded border border-grayscale-300 bg-white transition-colors focus:ring-2 focus:ring-offset-0";

/// Checked color and focus ring of the box
pub(crate) fn box_variant(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "text-primary-600 focus:ring-primary-500/30",
        Variant::Secondary => "text-secondary-600 focus:ring-secondary-500/30",
        Variant::Accent => "text-accent-600 focus:ring-accent-500/30",
        Variant::Success => "text-success-600 focus:ring-success-500/30",
        Variant::Danger => "text-danger-600 focus:ring-danger-500/30",
        Variant::Warning => "text-warning-600 focus:ring-warning-500/30",
        Variant::Info => "text-info-600 focus:ring-info-500/30",
        Variant::Light => "text-grayscale-400 focus:ring-grayscale-300/30",
        Variant::Dark => "text-grayscale-900 focus:ring-grayscale-700/30",
    }
}

/// Box dimensions per size
pub(crate) fn box_size(size: Size) -> &'static str {
    match size {
        Size::Xs => "w-3 h-3",
        Size::Sm => "w-3.5 h-3.5",
        Size::Md => "w-4 h-4",
        Size::Lg => "w-5 h-5",
        Size::Xl => "w-6 h-6",
    }
}

/// State fragment of the box, exactly one per state
pub(crate) fn box_state(state: ComponentState) -> &'static str {
    match state {
        ComponentState::Disabled => "opacity-50 cursor-not-allowed",
        ComponentState::Readonly => "cursor-default pointer-events-none",
        ComponentState::Error => "border-danger-500 cursor-pointer",
        ComponentState::Normal => "cursor-pointer",
    }
}

/// Text color of the label beside the box
pub(crate) fn inline_label_state(state: ComponentState) -> &'static str {
    match state {
        ComponentState::Disabled => "text-grayscale-400 cursor-not-allowed",
        ComponentState::Readonly | ComponentState::Normal => "text-grayscale-700",
        ComponentState::Error => "text-danger-700",
    }
}

/// Merged classes of one checkbox box
pub(crate) fn resolve(variant: Variant, size: Size, state: ComponentState) -> Vec<&'static str> {
    vec![
        BOX_BASE,
        box_variant(variant),
        box_size(size),
        box_state(state),
    ]
}

fn default_value() -> String {
    "1".to_string()
}

fn default_unchecked_value() -> String {
    "0".to_string()
}

/// Single checkbox with an inline label
#[derive(Clone, Debug, Deserialize)]
pub struct Checkbox {
    #[serde(flatten)]
    field: FieldConfig,
    #[serde(default)]
    checked: bool,
    #[serde(default = "default_value")]
    value: String,
    #[serde(default = "default_unchecked_value")]
    unchecked_value: String,
    #[serde(default)]
    variant: Variant,
    #[serde(default)]
    label_position: LabelPosition,
}

impl Checkbox {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldConfig::new(name),
            checked: false,
            value: default_value(),
            unchecked_value: default_unchecked_value(),
            variant: Variant::default(),
            label_position: LabelPosition::default(),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Value submitted when checked
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Value submitted when unchecked
    pub fn unchecked_value(mut self, value: impl Into<String>) -> Self {
        self.unchecked_value = value.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }
}

impl FieldOptions for Checkbox {
    fn field_mut(&mut self) -> &mut FieldConfig {
        &mut self.field
    }
}

impl InputRenderer for Checkbox {
    fn field(&self) -> &FieldConfig {
        &self.field
    }

    fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
        let hidden = el("input")
            .attr("type", "hidden")
            .attr("name", self.field.name.clone())
            .attr("value", self.unchecked_value.clone())
            .bool_attr("disabled", self.field.disabled);

        let input = ctx
            .input("checkbox")
            .attr("value", self.value.clone())
            .bool_attr("checked", self.checked)
            .class(class_names![
                resolve(self.variant, self.field.size, ctx.state),
                self.field.class.as_deref(),
            ]);

        let text = self.field.label.as_ref().map(|label| {
            let required = self.field.required.then(|| {
                el("span")
                    .class("ml-0.5 text-danger-500")
                    .attr("aria-hidden", "true")
                    .text("*")
            });
            el("span")
                .class(class_names![
                    "font-medium",
                    ctx.size.text,
                    inline_label_state(ctx.state),
                ])
                .text(label.clone())
                .child_opt(required)
        });

        let label = el("label")
            .attr("for", ctx.id.clone())
            .class(class_names!["inline-flex items-center", ctx.size.gap])
            .child(hidden);
        match self.label_position {
            LabelPosition::Left => label.child_opt(text).child(input),
            LabelPosition::Right => label.child(input).child_opt(text),
        }
    }

    fn chrome(&self) -> Chrome {
        Chrome::InlineLabel
    }
}

impl Component for Checkbox {
    fn render(&self) -> Element {
        render_field(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox_of(element: &Element) -> &Element {
        element.find_by_attr("type", "checkbox").unwrap()
    }

    #[test]
    fn test_variant_table_is_total() {
        for &variant in <Variant as better_ui_core::OptionSet>::ALL {
            let classes = box_variant(variant);
            assert!(classes.starts_with("text-"));
            assert!(classes.contains("focus:ring-"));
        }
    }

    #[test]
    fn test_checkbox_markup() {
        let element = Checkbox::new("user[terms]")
            .label("Accept terms")
            .checked(true)
            .variant(Variant::Success)
            .render();

        let hidden = element.find_by_attr("type", "hidden").unwrap();
        assert_eq!(hidden.attr_value("name"), Some("user[terms]"));
        assert_eq!(hidden.attr_value("value"), Some("0"));

        let input = checkbox_of(&element);
        assert_eq!(input.attr_value("value"), Some("1"));
        assert_eq!(input.attr_value("id"), Some("user_terms"));
        assert!(input.has_attr("checked"));
        assert!(input.has_class("text-success-600"));
        assert!(input.has_class("w-4"));

        let label = element.find(|e| e.tag() == "label").unwrap();
        assert_eq!(label.attr_value("for"), Some("user_terms"));
        assert_eq!(label.text_content(), "Accept terms");
    }

    #[test]
    fn test_label_position() {
        let right = Checkbox::new("a").label("Text").to_html();
        assert!(right.find(r#"type="checkbox""#) < right.find("Text"));

        let left = Checkbox::new("a")
            .label("Text")
            .label_position(LabelPosition::Left)
            .to_html();
        assert!(left.find("Text") < left.find(r#"type="checkbox""#));
    }

    #[test]
    fn test_disabled_beats_errors() {
        let element = Checkbox::new("a").disabled(true).error("must be accepted").render();
        let input = checkbox_of(&element);
        assert!(input.has_class("cursor-not-allowed"));
        assert!(!input.has_class("border-danger-500"));
        assert!(element.find_by_attr("id", "a_error").is_none());
    }

    #[test]
    fn test_error_state() {
        let element = Checkbox::new("a").error("must be accepted").render();
        let input = checkbox_of(&element);
        assert!(input.has_class("border-danger-500"));
        assert_eq!(input.attr_value("aria-invalid"), Some("true"));
    }

    #[test]
    fn test_deserialize() {
        let checkbox: Checkbox = toml::from_str(
            r#"name = "newsletter"
value = "yes"
label_position = "left"
variant = "info""#,
        )
        .unwrap();
        let element = checkbox.render();
        assert_eq!(checkbox_of(&element).attr_value("value"), Some("yes"));

        let err = toml::from_str::<Checkbox>(r#"name = "a"
label_position = "top""#)
        .unwrap_err();
        assert!(err.to_string().contains("invalid label_position \"top\""));
    }
}
