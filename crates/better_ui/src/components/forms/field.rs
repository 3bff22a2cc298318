//! Shared form field chrome
//!
//! Every input renders inside the same chrome: wrapper, label, the control
//! itself, hint and error messages. The control is produced by an
//! [`InputRenderer`]; the chrome is produced once by [`render_field`], so
//! ids, `aria-describedby` wiring and state precedence are identical for
//! every input kind.

use better_ui_core::{class_names, el, ComponentState, Element, Size, SizeRecord};
use serde::Deserialize;

use crate::components::icon::Icon;

/// Options shared by every form field
#[derive(Clone, Debug, Deserialize)]
pub struct FieldConfig {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) label: Option<String>,
    #[serde(default)]
    pub(crate) hint: Option<String>,
    #[serde(default)]
    pub(crate) placeholder: Option<String>,
    #[serde(default)]
    pub(crate) errors: Vec<String>,
    #[serde(default)]
    pub(crate) disabled: bool,
    #[serde(default)]
    pub(crate) readonly: bool,
    #[serde(default)]
    pub(crate) required: bool,
    #[serde(default)]
    pub(crate) size: Size,
    /// Extra classes for the control
    #[serde(default)]
    pub(crate) class: Option<String>,
    /// Extra classes for the wrapper
    #[serde(default)]
    pub(crate) wrapper_class: Option<String>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: None,
            hint: None,
            placeholder: None,
            errors: Vec::new(),
            disabled: false,
            readonly: false,
            required: false,
            size: Size::default(),
            class: None,
            wrapper_class: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit id, or one derived from the name
    pub fn input_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| sanitize_id(&self.name))
    }

    pub fn state(&self) -> ComponentState {
        ComponentState::resolve(self.disabled, self.readonly, !self.errors.is_empty())
    }
}

/// Builder methods for the shared field options
pub trait FieldOptions: Sized {
    fn field_mut(&mut self) -> &mut FieldConfig;

    fn id(mut self, id: impl Into<String>) -> Self {
        self.field_mut().id = Some(id.into());
        self
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.field_mut().label = Some(label.into());
        self
    }

    fn hint(mut self, hint: impl Into<String>) -> Self {
        self.field_mut().hint = Some(hint.into());
        self
    }

    fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field_mut().placeholder = Some(placeholder.into());
        self
    }

    /// Add a validation error message
    fn error(mut self, error: impl Into<String>) -> Self {
        self.field_mut().errors.push(error.into());
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.field_mut().disabled = disabled;
        self
    }

    fn readonly(mut self, readonly: bool) -> Self {
        self.field_mut().readonly = readonly;
        self
    }

    fn required(mut self, required: bool) -> Self {
        self.field_mut().required = required;
        self
    }

    fn size(mut self, size: Size) -> Self {
        self.field_mut().size = size;
        self
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        self.field_mut().class = Some(class.into());
        self
    }

    fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.field_mut().wrapper_class = Some(class.into());
        self
    }
}

/// Derive an element id from a form field name
///
/// `user[email]` becomes `user_email`, `user[tags][]` becomes `user_tags_`.
pub fn sanitize_id(name: &str) -> String {
    let mut id: String = name
        .replace("][", "_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if id.ends_with('_') {
        id.pop();
    }
    id
}

/// How the chrome presents the label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    /// `<label for>` above the control
    Labelled,
    /// The control renders its own label beside it
    InlineLabel,
    /// `<fieldset>` with a `<legend>`, for groups of controls
    Fieldset,
}

/// Everything a control needs from the chrome
#[derive(Debug)]
pub struct FieldContext<'a> {
    pub field: &'a FieldConfig,
    pub id: String,
    pub state: ComponentState,
    pub size: SizeRecord,
    /// Space separated hint and error ids
    pub described_by: Option<String>,
}

impl FieldContext<'_> {
    /// Start an `<input>` with the shared attributes
    pub fn input(&self, input_type: &str) -> Element {
        let field = self.field;
        el("input")
            .attr("type", input_type.to_string())
            .attr("name", field.name.clone())
            .attr("id", self.id.clone())
            .attr_opt("placeholder", field.placeholder.clone())
            .bool_attr("disabled", field.disabled)
            .bool_attr("readonly", field.readonly)
            .bool_attr("required", field.required)
            .attr_opt(
                "aria-invalid",
                (self.state == ComponentState::Error).then_some("true"),
            )
            .attr_opt("aria-describedby", self.described_by.clone())
    }

    /// Merged classes for a text-like control
    pub fn control_classes(&self, extra: &[&'static str]) -> String {
        class_names![
            CONTROL_BASE,
            self.size.padding,
            self.size.text,
            state_classes(self.state),
            extra,
            self.field.class.as_deref(),
        ]
    }
}

/// Renders the control of one input kind
pub trait InputRenderer {
    fn field(&self) -> &FieldConfig;

    /// Build the control (input plus adornments)
    fn render_control(&self, ctx: &FieldContext<'_>) -> Element;

    fn chrome(&self) -> Chrome {
        Chrome::Labelled
    }
}

const CONTROL_BASE: &str = "block w-full rounded-lg border bg-white text-grayscale-900 placeholder:text-grayscale-400 shadow-sm transition-colors focus:outline-none focus:ring-2";

/// State fragments for text-like controls, exactly one per state
pub fn state_classes(state: ComponentState) -> &'static str {
    match state {
        ComponentState::Disabled => {
            "bg-grayscale-50 border-grayscale-200 text-grayscale-400 cursor-not-allowed"
        }
        ComponentState::Readonly => {
            "bg-grayscale-50 border-grayscale-200 text-grayscale-700 cursor-default focus:ring-0"
        }
        ComponentState::Error => {
            "border-danger-500 text-danger-900 placeholder:text-danger-300 focus:border-danger-500 focus:ring-danger-500/20"
        }
        ComponentState::Normal => {
            "border-grayscale-300 focus:border-primary-500 focus:ring-primary-500/20"
        }
    }
}

fn label_classes(state: ComponentState) -> &'static str {
    match state {
        ComponentState::Disabled => "text-grayscale-400",
        ComponentState::Readonly | ComponentState::Normal => "text-grayscale-700",
        ComponentState::Error => "text-danger-700",
    }
}

/// Size fragments of text-like controls
pub fn size_record(size: Size) -> SizeRecord {
    match size {
        Size::Xs => SizeRecord {
            padding: "px-2 py-1",
            text: "text-xs",
            icon: "w-3.5 h-3.5",
            gap: "gap-1",
        },
        Size::Sm => SizeRecord {
            padding: "px-2.5 py-1.5",
            text: "text-sm",
            icon: "w-4 h-4",
            gap: "gap-1",
        },
        Size::Md => SizeRecord {
            padding: "px-3 py-2",
            text: "text-sm",
            icon: "w-4 h-4",
            gap: "gap-1.5",
        },
        Size::Lg => SizeRecord {
            padding: "px-4 py-2.5",
            text: "text-base",
            icon: "w-5 h-5",
            gap: "gap-1.5",
        },
        Size::Xl => SizeRecord {
            padding: "px-4 py-3",
            text: "text-lg",
            icon: "w-5 h-5",
            gap: "gap-2",
        },
    }
}

/// Left and right padding that clears an icon inside the control
pub fn icon_padding(size: Size) -> (&'static str, &'static str) {
    match size {
        Size::Xs => ("pl-7", "pr-7"),
        Size::Sm => ("pl-8", "pr-8"),
        Size::Md => ("pl-9", "pr-9"),
        Size::Lg => ("pl-10", "pr-10"),
        Size::Xl => ("pl-11", "pr-11"),
    }
}

/// Side of the control an adornment sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Leading,
    Trailing,
}

/// Decorative icon positioned inside the control
pub fn adornment(icon: Icon, side: Side, size: &SizeRecord) -> Element {
    let position = match side {
        Side::Leading => "left-0 pl-3",
        Side::Trailing => "right-0 pr-3",
    };
    el("span")
        .class(class_names![
            "pointer-events-none absolute inset-y-0 flex items-center text-grayscale-400",
            position,
        ])
        .child(icon.node(size.icon))
}

/// Positioning wrapper around a control and its adornments
pub fn control_wrapper() -> Element {
    el("div").class("relative flex items-center")
}

/// Render an input inside the shared chrome
pub fn render_field(input: &dyn InputRenderer) -> Element {
    let field = input.field();
    let id = field.input_id();
    let state = field.state();
    let size = size_record(field.size);

    let hint_id = field.hint.as_ref().map(|_| format!("{id}_hint"));
    // Errors are only shown while the field accepts input
    let error_id = (state == ComponentState::Error).then(|| format!("{id}_error"));
    let described_by = match (&hint_id, &error_id) {
        (Some(hint), Some(error)) => Some(format!("{hint} {error}")),
        (Some(hint), None) => Some(hint.clone()),
        (None, Some(error)) => Some(error.clone()),
        (None, None) => None,
    };

    let chrome = input.chrome();
    let ctx = FieldContext {
        field,
        id: id.clone(),
        state,
        size,
        described_by,
    };
    let control = input.render_control(&ctx);

    let label = field.label.as_ref().and_then(|text| {
        let classes = class_names!["block font-medium", size.text, label_classes(state)];
        let required = field.required.then(|| {
            el("span")
                .class("ml-0.5 text-danger-500")
                .attr("aria-hidden", "true")
                .text("*")
        });
        match chrome {
            Chrome::Labelled => Some(
                el("label")
                    .attr("for", id.clone())
                    .class(classes)
                    .text(text.clone())
                    .child_opt(required),
            ),
            Chrome::Fieldset => Some(
                el("legend")
                    .class(class_names![classes, "mb-1"])
                    .text(text.clone())
                    .child_opt(required),
            ),
            Chrome::InlineLabel => None,
        }
    });

    let hint = field.hint.as_ref().zip(hint_id).map(|(hint, hint_id)| {
        el("p")
            .attr("id", hint_id)
            .class("text-xs text-grayscale-500")
            .text(hint.clone())
    });

    let errors = error_id.map(|error_id| {
        el("div")
            .attr("id", error_id)
            .class("space-y-0.5")
            .children(
                field
                    .errors
                    .iter()
                    .map(|error| el("p").class("text-xs text-danger-600").text(error.clone())),
            )
    });

    let wrapper = match chrome {
        Chrome::Fieldset => el("fieldset"),
        Chrome::Labelled | Chrome::InlineLabel => el("div"),
    };
    wrapper
        .class(class_names![
            "flex flex-col",
            size.gap,
            field.wrapper_class.as_deref(),
        ])
        .child_opt(label)
        .child(control)
        .child_opt(hint)
        .child_opt(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(FieldConfig);

    impl InputRenderer for Plain {
        fn field(&self) -> &FieldConfig {
            &self.0
        }

        fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
            ctx.input("text").class(ctx.control_classes(&[]))
        }
    }

    impl FieldOptions for Plain {
        fn field_mut(&mut self) -> &mut FieldConfig {
            &mut self.0
        }
    }

    fn input_of(element: &Element) -> &Element {
        element.find(|e| e.tag() == "input").unwrap()
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("email"), "email");
        assert_eq!(sanitize_id("user[email]"), "user_email");
        assert_eq!(sanitize_id("user[address][city]"), "user_address_city");
        assert_eq!(sanitize_id("user[tags][]"), "user_tags_");
        assert_eq!(sanitize_id("first name"), "first_name");
    }

    #[test]
    fn test_label_hint_and_error_wiring() {
        let field = Plain(FieldConfig::new("user[email]"))
            .label("Email")
            .hint("We never share it")
            .error("is invalid")
            .required(true);
        let element = render_field(&field);

        let label = element.find(|e| e.tag() == "label").unwrap();
        assert_eq!(label.attr_value("for"), Some("user_email"));
        assert_eq!(label.text_content(), "Email*");

        let input = input_of(&element);
        assert_eq!(input.attr_value("id"), Some("user_email"));
        assert_eq!(input.attr_value("aria-invalid"), Some("true"));
        assert_eq!(
            input.attr_value("aria-describedby"),
            Some("user_email_hint user_email_error")
        );
        assert!(input.has_attr("required"));
        assert!(input.has_class("border-danger-500"));
        assert!(element.find_by_attr("id", "user_email_error").is_some());
    }

    #[test]
    fn test_disabled_beats_errors() {
        let field = Plain(FieldConfig::new("name"))
            .disabled(true)
            .error("can't be blank");
        let element = render_field(&field);
        let input = input_of(&element);

        assert!(input.has_class("cursor-not-allowed"));
        assert!(input.has_class("bg-grayscale-50"));
        assert!(!input.has_class("border-danger-500"));
        assert!(!input.has_attr("aria-invalid"));
        assert!(element.find_by_attr("id", "name_error").is_none());
    }

    #[test]
    fn test_readonly_beats_errors() {
        let field = Plain(FieldConfig::new("name"))
            .readonly(true)
            .error("can't be blank");
        let element = render_field(&field);
        let input = input_of(&element);
        assert!(input.has_attr("readonly"));
        assert!(input.has_class("cursor-default"));
        assert!(!input.has_class("border-danger-500"));
    }

    #[test]
    fn test_explicit_id_and_overrides() {
        let field = Plain(FieldConfig::new("q"))
            .id("search")
            .size(Size::Lg)
            .class("rounded-full")
            .wrapper_class("max-w-sm");
        let element = render_field(&field);
        assert!(element.has_class("max-w-sm"));
        let input = input_of(&element);
        assert_eq!(input.attr_value("id"), Some("search"));
        assert!(input.has_class("rounded-full"));
        assert!(!input.has_class("rounded-lg"));
        assert!(input.has_class("px-4"));
    }

    #[test]
    fn test_state_fragments_are_exclusive() {
        let error = state_classes(ComponentState::Error);
        for state in [
            ComponentState::Disabled,
            ComponentState::Readonly,
            ComponentState::Normal,
        ] {
            assert!(!state_classes(state).contains("danger"));
            assert_ne!(state_classes(state), error);
        }
    }
}
