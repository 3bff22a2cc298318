use better_ui_core::{class_names, el, option_set, ComponentState, Element, Variant};
use serde::Deserialize;

use super::checkbox::{inline_label_state, resolve};
use super::field::{
    render_field, sanitize_id, Chrome, FieldConfig, FieldContext, FieldOptions, InputRenderer,
};
use crate::render::Component;

option_set! {
    /// Direction the checkboxes flow in
    pub enum Orientation: "orientation" {
        #[default]
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
}

impl Orientation {
    fn class(self) -> &'static str {
        match self {
            Orientation::Vertical => "flex flex-col gap-2",
            Orientation::Horizontal => "flex flex-row flex-wrap gap-4",
        }
    }
}

/// One entry of a checkbox group
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "ChoiceRepr")]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A bare value is its own label
impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

impl From<(&str, &str)> for Choice {
    fn from((label, value): (&str, &str)) -> Self {
        Self::new(label, value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChoiceRepr {
    Value(String),
    Pair(String, String),
    Entry { label: String, value: String },
}

impl From<ChoiceRepr> for Choice {
    fn from(repr: ChoiceRepr) -> Self {
        match repr {
            ChoiceRepr::Value(value) => Self {
                label: value.clone(),
                value,
            },
            ChoiceRepr::Pair(label, value) | ChoiceRepr::Entry { label, value } => {
                Self { label, value }
            }
        }
    }
}

/// Several checkboxes submitted under one array name
///
/// Checkboxes are named `{name}[]`. A hidden empty value precedes them so
/// the field is submitted even when nothing is selected.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckboxGroup {
    #[serde(flatten)]
    field: FieldConfig,
    #[serde(default)]
    collection: Vec<Choice>,
    #[serde(default)]
    selected: Vec<String>,
    #[serde(default)]
    variant: Variant,
    #[serde(default)]
    orientation: Orientation,
}

impl CheckboxGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldConfig::new(name),
            collection: Vec::new(),
            selected: Vec::new(),
            variant: Variant::default(),
            orientation: Orientation::default(),
        }
    }

    /// Append a choice: a bare value, a `(label, value)` pair or a [`Choice`]
    pub fn choice(mut self, choice: impl Into<Choice>) -> Self {
        self.collection.push(choice.into());
        self
    }

    pub fn choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        self.collection.extend(choices.into_iter().map(Into::into));
        self
    }

    /// Mark a value as checked
    pub fn select(mut self, value: impl Into<String>) -> Self {
        self.selected.push(value.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    fn render_choice(&self, ctx: &FieldContext<'_>, name: &str, choice: &Choice) -> Element {
        let field = &self.field;
        let id = format!("{}_{}", ctx.id, sanitize_id(&choice.value));
        let input = el("input")
            .attr("type", "checkbox")
            .attr("name", name.to_string())
            .attr("id", id.clone())
            .attr("value", choice.value.clone())
            .bool_attr("checked", self.selected.contains(&choice.value))
            .bool_attr("disabled", field.disabled)
            .bool_attr("readonly", field.readonly)
            .attr_opt(
                "aria-invalid",
                (ctx.state == ComponentState::Error).then_some("true"),
            )
            .attr_opt("aria-describedby", ctx.described_by.clone())
            .class(class_names![
                resolve(self.variant, field.size, ctx.state),
                field.class.as_deref(),
            ]);

        el("label")
            .attr("for", id)
            .class(class_names!["inline-flex items-center", ctx.size.gap])
            .child(input)
            .child(
                el("span")
                    .class(class_names![ctx.size.text, inline_label_state(ctx.state)])
                    .text(choice.label.clone()),
            )
    }
}

impl FieldOptions for CheckboxGroup {
    fn field_mut(&mut self) -> &mut FieldConfig {
        &mut self.field
    }
}

impl InputRenderer for CheckboxGroup {
    fn field(&self) -> &FieldConfig {
        &self.field
    }

    fn render_control(&self, ctx: &FieldContext<'_>) -> Element {
        let name = format!("{}[]", self.field.name);
        let hidden = el("input")
            .attr("type", "hidden")
            .attr("name", name.clone())
            .attr("value", "")
            .bool_attr("disabled", self.field.disabled);

        el("div")
            .attr("id", ctx.id.clone())
            .class(self.orientation.class())
            .child(hidden)
            .children(
                self.collection
                    .iter()
                    .map(|choice| self.render_choice(ctx, &name, choice)),
            )
    }

    fn chrome(&self) -> Chrome {
        Chrome::Fieldset
    }
}

impl Component for CheckboxGroup {
    fn render(&self) -> Element {
        render_field(self)
    }
}
