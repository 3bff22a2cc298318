use better_ui_core::Element;
use serde::Deserialize;

use super::field::{
    adornment, control_wrapper, icon_padding, render_field, FieldConfig, FieldContext,
    FieldOptions, InputRenderer, Side,
};
use crate::components::icon::Icon;
use crate::render::Component;

/// Hides the browser's native stepper buttons
const HIDE_SPINNER: &str = "[appearance:textfield] [&::-webkit-inner-spin-button]:appearance-none [&::-webkit-outer-spin-button]:appearance-none";

fn default_true() -> bool {
    true
}

/// Numeric input with optional bounds and icons
#[derive(Clone, Debug, Deserialize)]
pub struct NumberInput {
    #[serde(flatten)]
    field: FieldConfig,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default)]
    step: Option<f64>,
    #[serde(default = "default_true")]
    show_spinner: bool,
    #[serde(default)]
    prefix_icon: Option<Icon>,
    #[serde(default)]
    suffix_icon: Option<Icon>,
}

impl NumberInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldConfig::new(name),
            value: None,
            min: None,
            max: None,
            step: None,
            show_spinner: true,
            prefix_icon: None,
            suffix_icon: None,
        }
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Show the browser's stepper buttons
    pub fn show_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    pub fn prefix_icon(mut self, icon: Icon) -> Self {
        self.prefix_icon = Some(icon);
        self
    }

    pub fn suffix_icon(mut self, icon: Icon) -> Self {
        self.suffix_icon = Some(icon);
        self
    }
}

/// Shortest decimal form: `0`, `10`, `0.5`
fn format_number(value: f64) -> String {
    format!("{value}")
}

impl FieldOptions for NumberInput {
    fn field_mut(&mut self) -> &mut FieldConfig {
        &mut self.field
    }
}

impl InputRenderer for NumberInput {
    fn field(&self) -> &FieldConfig {
        &self.field
    }

    fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
        let (pad_leading, pad_trailing) = icon_padding(self.field.size);
        let mut extra = Vec::new();
        if self.prefix_icon.is_some() {
            extra.push(pad_leading);
        }
        if self.suffix_icon.is_some() {
            extra.push(pad_trailing);
        }
        if !self.show_spinner {
            extra.push(HIDE_SPINNER);
        }

        let input = ctx
            .input("number")
            .attr_opt("value", self.value.map(format_number))
            .attr_opt("min", self.min.map(format_number))
            .attr_opt("max", self.max.map(format_number))
            .attr_opt("step", self.step.map(format_number))
            .class(ctx.control_classes(&extra));

        control_wrapper()
            .child_opt(
                self.prefix_icon
                    .map(|icon| adornment(icon, Side::Leading, &ctx.size)),
            )
            .child(input)
            .child_opt(
                self.suffix_icon
                    .map(|icon| adornment(icon, Side::Trailing, &ctx.size)),
            )
    }
}

impl Component for NumberInput {
    fn render(&self) -> Element {
        render_field(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_of(element: &Element) -> &Element {
        element.find(|e| e.tag() == "input").unwrap()
    }

    #[test]
    fn test_bounds_and_hidden_spinner() {
        let element = NumberInput::new("qty")
            .min(0.0)
            .max(10.0)
            .step(0.5)
            .show_spinner(false)
            .render();
        let input = input_of(&element);

        assert_eq!(input.attr_value("type"), Some("number"));
        assert_eq!(input.attr_value("min"), Some("0"));
        assert_eq!(input.attr_value("max"), Some("10"));
        assert_eq!(input.attr_value("step"), Some("0.5"));
        assert!(input.has_class("[appearance:textfield]"));
        assert!(input.has_class("[&::-webkit-inner-spin-button]:appearance-none"));
        assert!(input.has_class("[&::-webkit-outer-spin-button]:appearance-none"));

        let html = element.to_html();
        assert!(html.contains(r#"min="0" max="10" step="0.5""#));
    }

    #[test]
    fn test_spinner_shown_by_default() {
        let element = NumberInput::new("qty").value(3.0).render();
        let input = input_of(&element);
        assert_eq!(input.attr_value("value"), Some("3"));
        assert!(!input.has_class("[appearance:textfield]"));
        assert!(!input.has_attr("min"));
    }

    #[test]
    fn test_icons_pad_the_control() {
        let element = NumberInput::new("price")
            .prefix_icon(Icon::DollarSign)
            .suffix_icon(Icon::Percent)
            .render();
        let input = input_of(&element);
        assert!(input.has_class("pl-9"));
        assert!(input.has_class("pr-9"));
        assert!(input.has_class("px-3"));

        let html = element.to_html();
        let dollar = html.find(better_ui_icons::DOLLAR_SIGN).unwrap();
        let control = html.find("<input").unwrap();
        let percent = html.find(better_ui_icons::PERCENT).unwrap();
        assert!(dollar < control && control < percent);
    }

    #[test]
    fn test_deserialize_integer_bounds() {
        let input: NumberInput = toml::from_str(
            r#"name = "qty"
min = 0
max = 10
step = 0.5
show_spinner = false"#,
        )
        .unwrap();
        let html = input.to_html();
        assert!(html.contains(r#"min="0" max="10" step="0.5""#));
    }
}
