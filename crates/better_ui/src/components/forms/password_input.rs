use better_ui_behaviors::password::{
    Visibility, CONTROLLER, ICON_CLASS, ICON_TARGET, INPUT_TARGET, TARGET_ATTR, TOGGLE_ACTION,
    TOGGLE_TARGET,
};
use better_ui_core::{class_names, el, Element};
use better_ui_icons::to_svg;
use serde::Deserialize;

use super::field::{
    adornment, icon_padding, render_field, FieldConfig, FieldContext, FieldOptions,
    InputRenderer, Side,
};
use crate::components::icon::Icon;
use crate::render::Component;

const TOGGLE_CLASSES: &str = "absolute inset-y-0 right-0 flex items-center pr-3 text-grayscale-400 hover:text-grayscale-600 focus:outline-none focus-visible:text-grayscale-600";

/// Password input with a visibility toggle
///
/// The toggle is only rendered while the field accepts input. The suffix
/// position is reserved for it, so only a prefix icon can be configured.
#[derive(Clone, Debug, Deserialize)]
pub struct PasswordInput {
    #[serde(flatten)]
    field: FieldConfig,
    #[serde(default)]
    prefix_icon: Option<Icon>,
    #[serde(default)]
    autocomplete: Option<String>,
}

impl PasswordInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldConfig::new(name),
            prefix_icon: None,
            autocomplete: None,
        }
    }

    pub fn prefix_icon(mut self, icon: Icon) -> Self {
        self.prefix_icon = Some(icon);
        self
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    fn render_toggle(&self, ctx: &FieldContext<'_>) -> Element {
        let visibility = Visibility::default();
        el("button")
            .attr("type", "button")
            .class(TOGGLE_CLASSES)
            .attr(TARGET_ATTR, TOGGLE_TARGET)
            .attr("data-action", TOGGLE_ACTION)
            .attr("aria-controls", ctx.id.clone())
            .attr("aria-label", visibility.toggle_label())
            .attr("aria-pressed", "false")
            .child(
                el("span")
                    .attr(TARGET_ATTR, ICON_TARGET)
                    .class(class_names!["block", ctx.size.icon])
                    .raw(to_svg(visibility.icon(), ICON_CLASS)),
            )
    }
}

impl FieldOptions for PasswordInput {
    fn field_mut(&mut self) -> &mut FieldConfig {
        &mut self.field
    }
}

impl InputRenderer for PasswordInput {
    fn field(&self) -> &FieldConfig {
        &self.field
    }

    fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
        let toggle = ctx.state.is_interactive().then(|| self.render_toggle(ctx));
        let (pad_leading, pad_trailing) = icon_padding(self.field.size);

        let input = ctx
            .input(Visibility::default().input_type())
            .attr(TARGET_ATTR, INPUT_TARGET)
            .attr_opt("autocomplete", self.autocomplete.clone())
            .class(ctx.control_classes(&[
                if self.prefix_icon.is_some() { pad_leading } else { "" },
                if toggle.is_some() { pad_trailing } else { "" },
            ]));

        el("div")
            .class("relative flex items-center")
            .attr("data-controller", CONTROLLER)
            .child_opt(
                self.prefix_icon
                    .map(|icon| adornment(icon, Side::Leading, &ctx.size)),
            )
            .child(input)
            .child_opt(toggle)
    }
}

impl Component for PasswordInput {
    fn render(&self) -> Element {
        render_field(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use better_ui_behaviors::PasswordToggle;

    #[test]
    fn test_toggle_markup() {
        let element = PasswordInput::new("user[password]").label("Password").render();

        let input = element.find_by_attr(TARGET_ATTR, INPUT_TARGET).unwrap();
        assert_eq!(input.attr_value("type"), Some("password"));
        assert!(input.has_class("pr-9"));

        let toggle = element.find_by_attr(TARGET_ATTR, TOGGLE_TARGET).unwrap();
        assert_eq!(toggle.attr_value("aria-controls"), Some("user_password"));
        assert_eq!(toggle.attr_value("aria-pressed"), Some("false"));
        assert!(toggle.to_html().contains(better_ui_icons::EYE));
    }

    #[test]
    fn test_no_toggle_when_disabled_or_readonly() {
        for field in [
            PasswordInput::new("pw").disabled(true),
            PasswordInput::new("pw").readonly(true),
        ] {
            let element = field.render();
            assert!(element.find_by_attr(TARGET_ATTR, TOGGLE_TARGET).is_none());
            let input = element.find_by_attr(TARGET_ATTR, INPUT_TARGET).unwrap();
            assert!(!input.has_class("pr-9"));
        }
    }

    #[test]
    fn test_toggle_cycle_on_rendered_field() {
        let mut element = PasswordInput::new("pw").render();
        let mut toggle = PasswordToggle::from_element(&element);
        assert!(toggle.is_actionable());

        toggle.toggle();
        toggle.apply(&mut element);
        let input = element.find_by_attr(TARGET_ATTR, INPUT_TARGET).unwrap();
        assert_eq!(input.attr_value("type"), Some("text"));
        let button = element.find_by_attr(TARGET_ATTR, TOGGLE_TARGET).unwrap();
        assert!(button.to_html().contains(better_ui_icons::EYE_OFF));

        toggle.toggle();
        toggle.apply(&mut element);
        let input = element.find_by_attr(TARGET_ATTR, INPUT_TARGET).unwrap();
        assert_eq!(input.attr_value("type"), Some("password"));
    }

    #[test]
    fn test_error_keeps_toggle() {
        let element = PasswordInput::new("pw").error("is too short").render();
        assert!(element.find_by_attr(TARGET_ATTR, TOGGLE_TARGET).is_some());
    }
}
