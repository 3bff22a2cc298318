//! Action message banner
//!
//! Shows the outcome of an action (flash messages, validation summaries).
//! A dismissible or auto-dismissing banner carries the
//! `bui-action-messages` controller markup consumed by
//! [`DismissController`](better_ui_behaviors::DismissController).
//!
//! # Example
//!
//! ```rust
//! use better_ui::prelude::*;
//!
//! let html = bui::action_messages(["Saved", "Emails sent"])
//!     .variant(Variant::Success)
//!     .dismissible(true)
//!     .auto_dismiss(5.0)
//!     .to_html();
//!
//! assert!(html.contains(r#"data-bui-action-messages-auto-dismiss-value="5.0""#));
//! assert!(html.contains("bui-action-messages#dismiss"));
//! ```

use better_ui_behaviors::dismiss::{AUTO_DISMISS_ATTR, CONTROLLER, DISMISS_ACTION};
use better_ui_core::{class_names, el, one_or_many, option_set, Element, Node, Variant};
use serde::Deserialize;

use crate::components::icon::{icon_span, Icon};
use crate::render::Component;

option_set! {
    /// Visual treatment of a message banner
    pub enum MessagesStyle: "style" {
        Solid => "solid",
        /// Tinted background
        #[default]
        Soft => "soft",
        Outline => "outline",
        Ghost => "ghost",
    }
}

const BASE: &str = "rounded-lg p-4 transition-opacity duration-300";
const DISMISS_BASE: &str =
    "shrink-0 inline-flex items-center justify-center rounded-md p-1 transition-colors focus:outline-none focus-visible:ring-2";

fn solid(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-primary-600 text-white",
        Variant::Secondary => "bg-secondary-600 text-white",
        Variant::Accent => "bg-accent-600 text-white",
        Variant::Success => "bg-success-600 text-white",
        Variant::Danger => "bg-danger-600 text-white",
        Variant::Warning => "bg-warning-600 text-white",
        Variant::Info => "bg-info-600 text-white",
        Variant::Light => "bg-grayscale-100 text-grayscale-800",
        Variant::Dark => "bg-grayscale-900 text-white",
    }
}

fn soft(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-primary-50 text-primary-800",
        Variant::Secondary => "bg-secondary-50 text-secondary-800",
        Variant::Accent => "bg-accent-50 text-accent-800",
        Variant::Success => "bg-success-50 text-success-800",
        Variant::Danger => "bg-danger-50 text-danger-800",
        Variant::Warning => "bg-warning-50 text-warning-800",
        Variant::Info => "bg-info-50 text-info-800",
        // Neutral tint, distinct from the solid light background
        Variant::Light => "bg-grayscale-50 text-grayscale-700",
        Variant::Dark => "bg-grayscale-100 text-grayscale-900",
    }
}

fn outline(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-white border border-primary-300 text-primary-800",
        Variant::Secondary => "bg-white border border-secondary-300 text-secondary-800",
        Variant::Accent => "bg-white border border-accent-300 text-accent-800",
        Variant::Success => "bg-white border border-success-300 text-success-800",
        Variant::Danger => "bg-white border border-danger-300 text-danger-800",
        Variant::Warning => "bg-white border border-warning-300 text-warning-800",
        Variant::Info => "bg-white border border-info-300 text-info-800",
        Variant::Light => "bg-white border border-grayscale-200 text-grayscale-700",
        Variant::Dark => "bg-white border border-grayscale-800 text-grayscale-900",
    }
}

fn ghost(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "text-primary-700",
        Variant::Secondary => "text-secondary-700",
        Variant::Accent => "text-accent-700",
        Variant::Success => "text-success-700",
        Variant::Danger => "text-danger-700",
        Variant::Warning => "text-warning-700",
        Variant::Info => "text-info-700",
        Variant::Light => "text-grayscale-700",
        Variant::Dark => "text-grayscale-900",
    }
}

fn dismiss_classes(style: MessagesStyle) -> &'static str {
    match style {
        MessagesStyle::Solid => "text-white/80 hover:text-white hover:bg-white/10 focus-visible:ring-white/50",
        MessagesStyle::Soft | MessagesStyle::Outline | MessagesStyle::Ghost => {
            "opacity-70 hover:opacity-100 hover:bg-black/5 focus-visible:ring-black/20"
        }
    }
}

/// Severity icon shown before the messages
pub fn icon_for(variant: Variant) -> Icon {
    match variant {
        Variant::Success => Icon::CircleCheck,
        Variant::Danger => Icon::CircleX,
        Variant::Warning => Icon::TriangleAlert,
        Variant::Primary
        | Variant::Secondary
        | Variant::Accent
        | Variant::Info
        | Variant::Light
        | Variant::Dark => Icon::Info,
    }
}

/// Class fragments for the banner root
pub fn resolve(variant: Variant, style: MessagesStyle) -> Vec<&'static str> {
    let style = match style {
        MessagesStyle::Solid => solid(variant),
        MessagesStyle::Soft => soft(variant),
        MessagesStyle::Outline => outline(variant),
        MessagesStyle::Ghost => ghost(variant),
    };
    vec![BASE, style]
}

/// Message banner configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActionMessages {
    messages: Vec<String>,
    title: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    content: Vec<Node>,
    variant: Variant,
    style: MessagesStyle,
    dismissible: bool,
    /// Seconds before the banner dismisses itself
    auto_dismiss: Option<f64>,
    show_icon: bool,
    id: Option<String>,
    class: Option<String>,
}

impl Default for ActionMessages {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            title: None,
            content: Vec::new(),
            variant: Variant::default(),
            style: MessagesStyle::default(),
            dismissible: false,
            auto_dismiss: None,
            show_icon: true,
            id: None,
            class: None,
        }
    }
}

impl ActionMessages {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append content after the messages
    pub fn child(mut self, content: impl Into<Node>) -> Self {
        self.content.push(content.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn style(mut self, style: MessagesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Dismiss automatically after `seconds`; zero or less disables it
    pub fn auto_dismiss(mut self, seconds: f64) -> Self {
        self.auto_dismiss = Some(seconds);
        self
    }

    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        class_names![resolve(self.variant, self.style), self.class.as_deref()]
    }

    fn auto_dismiss_seconds(&self) -> Option<f64> {
        self.auto_dismiss
            .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
    }

    fn has_controller(&self) -> bool {
        self.dismissible || self.auto_dismiss_seconds().is_some()
    }

    fn render_messages(&self) -> Option<Element> {
        match self.messages.as_slice() {
            [] => None,
            [message] => Some(el("p").class("text-sm").text(message.clone())),
            messages => Some(
                el("ul")
                    .class("list-disc list-inside text-sm space-y-1")
                    .children(
                        messages
                            .iter()
                            .map(|message| el("li").text(message.clone())),
                    ),
            ),
        }
    }

    fn render_dismiss(&self) -> Element {
        el("button")
            .attr("type", "button")
            .class(class_names![DISMISS_BASE, dismiss_classes(self.style)])
            .attr("data-action", DISMISS_ACTION)
            .attr("aria-label", "Dismiss")
            .child(Icon::X.node("w-4 h-4"))
    }
}

impl Component for ActionMessages {
    fn should_render(&self) -> bool {
        !self.messages.is_empty() || self.title.is_some() || !self.content.is_empty()
    }

    fn render(&self) -> Element {
        let icon = self
            .show_icon
            .then(|| icon_span(icon_for(self.variant), "shrink-0 w-5 h-5"));
        let title = self.title.as_ref().map(|title| {
            el("h3")
                .class("text-sm font-semibold mb-1")
                .text(title.clone())
        });
        let body = el("div")
            .class("flex-1 min-w-0")
            .child_opt(title)
            .child_opt(self.render_messages())
            .children(self.content.iter().cloned());

        let controller = self.has_controller();
        el("div")
            .attr_opt("id", self.id.clone())
            .attr("role", "alert")
            .class(self.classes())
            .attr_opt("data-controller", controller.then_some(CONTROLLER))
            .attr_opt(
                AUTO_DISMISS_ATTR,
                self.auto_dismiss_seconds().map(|seconds| format!("{seconds:?}")),
            )
            .child(
                el("div")
                    .class("flex items-start gap-3")
                    .child_opt(icon)
                    .child(body)
                    .child_opt(self.dismissible.then(|| self.render_dismiss())),
            )
    }
}
