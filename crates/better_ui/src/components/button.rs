//! Button component
//!
//! Renders a `<button>` (or an `<a>` in link mode) styled by variant, style
//! and size. Every button carries the `bui-button` controller markup so the
//! loading behaviour can swap its content for a spinner.
//!
//! # Example
//!
//! ```rust
//! use better_ui::prelude::*;
//!
//! let html = bui::button("Delete")
//!     .variant(Variant::Danger)
//!     .style(ButtonStyle::Outline)
//!     .size(Size::Sm)
//!     .to_html();
//!
//! assert!(html.contains("border-danger-600"));
//! assert!(html.contains("Delete"));
//! ```

use better_ui_behaviors::loading::{
    CONTENT_TARGET, CONTROLLER, SERVER_DISABLED_ATTR, SHOW_LOADER_ON_CLICK_ATTR, SPINNER_TARGET,
    TARGET_ATTR,
};
use better_ui_core::{
    class_names, el, one_or_many, option_set, Element, Node, Size, SizeRecord, Variant,
};
use serde::Deserialize;

use crate::components::icon::Icon;
use crate::components::link::{with_method, Method};
use crate::render::Component;

option_set! {
    /// Visual treatment of a button
    pub enum ButtonStyle: "style" {
        /// Filled background
        #[default]
        Solid => "solid",
        /// Colored border, transparent background
        Outline => "outline",
        /// Text only, background on hover
        Ghost => "ghost",
        /// Tinted background
        Soft => "soft",
    }
}

option_set! {
    /// `type` attribute of a `<button>`
    pub enum ButtonType: "type" {
        #[default]
        Button => "button",
        Submit => "submit",
        Reset => "reset",
    }
}

option_set! {
    /// Side of the label the icon sits on
    pub enum IconPosition: "icon_position" {
        #[default]
        Left => "left",
        Right => "right",
    }
}

const BASE: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-colors duration-200 cursor-pointer focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2";
const DISABLED: &str = "opacity-50 cursor-not-allowed";

fn solid(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-primary-600 text-white hover:bg-primary-700 focus-visible:ring-primary-500",
        Variant::Secondary => "bg-secondary-600 text-white hover:bg-secondary-700 focus-visible:ring-secondary-500",
        Variant::Accent => "bg-accent-600 text-white hover:bg-accent-700 focus-visible:ring-accent-500",
        Variant::Success => "bg-success-600 text-white hover:bg-success-700 focus-visible:ring-success-500",
        Variant::Danger => "bg-danger-600 text-white hover:bg-danger-700 focus-visible:ring-danger-500",
        Variant::Warning => "bg-warning-600 text-white hover:bg-warning-700 focus-visible:ring-warning-500",
        Variant::Info => "bg-info-600 text-white hover:bg-info-700 focus-visible:ring-info-500",
        Variant::Light => "bg-grayscale-100 text-grayscale-900 hover:bg-grayscale-200 focus-visible:ring-grayscale-300",
        Variant::Dark => "bg-grayscale-900 text-white hover:bg-grayscale-800 focus-visible:ring-grayscale-700",
    }
}

fn outline(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "border border-primary-600 text-primary-600 hover:bg-primary-50 focus-visible:ring-primary-500",
        Variant::Secondary => "border border-secondary-600 text-secondary-600 hover:bg-secondary-50 focus-visible:ring-secondary-500",
        Variant::Accent => "border border-accent-600 text-accent-600 hover:bg-accent-50 focus-visible:ring-accent-500",
        Variant::Success => "border border-success-600 text-success-600 hover:bg-success-50 focus-visible:ring-success-500",
        Variant::Danger => "border border-danger-600 text-danger-600 hover:bg-danger-50 focus-visible:ring-danger-500",
        Variant::Warning => "border border-warning-600 text-warning-600 hover:bg-warning-50 focus-visible:ring-warning-500",
        Variant::Info => "border border-info-600 text-info-600 hover:bg-info-50 focus-visible:ring-info-500",
        Variant::Light => "border border-grayscale-300 text-grayscale-700 hover:bg-grayscale-50 focus-visible:ring-grayscale-300",
        Variant::Dark => "border border-grayscale-900 text-grayscale-900 hover:bg-grayscale-100 focus-visible:ring-grayscale-700",
    }
}

fn ghost(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "text-primary-600 hover:bg-primary-50 focus-visible:ring-primary-500",
        Variant::Secondary => "text-secondary-600 hover:bg-secondary-50 focus-visible:ring-secondary-500",
        Variant::Accent => "text-accent-600 hover:bg-accent-50 focus-visible:ring-accent-500",
        Variant::Success => "text-success-600 hover:bg-success-50 focus-visible:ring-success-500",
        Variant::Danger => "text-danger-600 hover:bg-danger-50 focus-visible:ring-danger-500",
        Variant::Warning => "text-warning-600 hover:bg-warning-50 focus-visible:ring-warning-500",
        Variant::Info => "text-info-600 hover:bg-info-50 focus-visible:ring-info-500",
        Variant::Light => "text-grayscale-700 hover:bg-grayscale-100 focus-visible:ring-grayscale-300",
        Variant::Dark => "text-grayscale-900 hover:bg-grayscale-100 focus-visible:ring-grayscale-700",
    }
}

fn soft(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-primary-50 text-primary-700 hover:bg-primary-100 focus-visible:ring-primary-500",
        Variant::Secondary => "bg-secondary-50 text-secondary-700 hover:bg-secondary-100 focus-visible:ring-secondary-500",
        Variant::Accent => "bg-accent-50 text-accent-700 hover:bg-accent-100 focus-visible:ring-accent-500",
        Variant::Success => "bg-success-50 text-success-700 hover:bg-success-100 focus-visible:ring-success-500",
        Variant::Danger => "bg-danger-50 text-danger-700 hover:bg-danger-100 focus-visible:ring-danger-500",
        Variant::Warning => "bg-warning-50 text-warning-700 hover:bg-warning-100 focus-visible:ring-warning-500",
        Variant::Info => "bg-info-50 text-info-700 hover:bg-info-100 focus-visible:ring-info-500",
        Variant::Light => "bg-grayscale-50 text-grayscale-700 hover:bg-grayscale-100 focus-visible:ring-grayscale-300",
        Variant::Dark => "bg-grayscale-200 text-grayscale-900 hover:bg-grayscale-300 focus-visible:ring-grayscale-700",
    }
}

/// Size fragments of a button
pub fn size_record(size: Size) -> SizeRecord {
    match size {
        Size::Xs => SizeRecord {
            padding: "px-2.5 py-1.5",
            text: "text-xs",
            icon: "w-3.5 h-3.5",
            gap: "gap-1",
        },
        Size::Sm => SizeRecord {
            padding: "px-3 py-2",
            text: "text-sm",
            icon: "w-4 h-4",
            gap: "gap-1.5",
        },
        Size::Md => SizeRecord {
            padding: "px-4 py-2.5",
            text: "text-sm",
            icon: "w-4 h-4",
            gap: "gap-2",
        },
        Size::Lg => SizeRecord {
            padding: "px-5 py-3",
            text: "text-base",
            icon: "w-5 h-5",
            gap: "gap-2",
        },
        Size::Xl => SizeRecord {
            padding: "px-6 py-3.5",
            text: "text-lg",
            icon: "w-5 h-5",
            gap: "gap-2.5",
        },
    }
}

/// Class fragments for a button, before state and overrides
pub fn resolve(variant: Variant, style: ButtonStyle, size: Size) -> Vec<&'static str> {
    let style = match style {
        ButtonStyle::Solid => solid(variant),
        ButtonStyle::Outline => outline(variant),
        ButtonStyle::Ghost => ghost(variant),
        ButtonStyle::Soft => soft(variant),
    };
    let size = size_record(size);
    vec![BASE, style, size.padding, size.text, size.gap]
}

/// Button configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Button {
    label: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    content: Vec<Node>,
    variant: Variant,
    style: ButtonStyle,
    size: Size,
    #[serde(rename = "type")]
    button_type: ButtonType,
    icon: Option<Icon>,
    icon_position: IconPosition,
    disabled: bool,
    show_loader: bool,
    show_loader_on_click: bool,
    href: Option<String>,
    target: Option<String>,
    rel: Option<String>,
    method: Option<Method>,
    id: Option<String>,
    class: Option<String>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render in the loading state
    pub fn show_loader(mut self, show_loader: bool) -> Self {
        self.show_loader = show_loader;
        self
    }

    /// Swap to the spinner when clicked
    pub fn show_loader_on_click(mut self, show: bool) -> Self {
        self.show_loader_on_click = show;
        self
    }

    /// Render as a link
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// HTTP method for link mode
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Extra classes, merged last
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Append content after the label
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.content.push(child.into());
        self
    }

    fn is_busy(&self) -> bool {
        self.disabled || self.show_loader
    }

    /// Final merged class string
    pub fn classes(&self) -> String {
        class_names![
            resolve(self.variant, self.style, self.size),
            self.is_busy().then_some(DISABLED),
            self.class.as_deref(),
        ]
    }

    fn render_spinner(&self, size: &SizeRecord) -> Element {
        el("span")
            .attr(TARGET_ATTR, SPINNER_TARGET)
            .class(class_names![
                "inline-flex items-center",
                (!self.show_loader).then_some("hidden"),
            ])
            .child(Icon::LoaderCircle.node(&class_names!["animate-spin", size.icon]))
    }

    fn render_content(&self, size: &SizeRecord) -> Element {
        let icon = self
            .icon
            .map(|icon| icon.node(&class_names!["shrink-0", size.icon]));
        let (leading, trailing) = match self.icon_position {
            IconPosition::Left => (icon, None),
            IconPosition::Right => (None, icon),
        };

        el("span")
            .attr(TARGET_ATTR, CONTENT_TARGET)
            .class(class_names![
                "inline-flex items-center",
                size.gap,
                self.show_loader.then_some("hidden"),
            ])
            .child_opt(leading)
            .child_opt(self.label.clone())
            .children(self.content.iter().cloned())
            .child_opt(trailing)
    }
}

impl Component for Button {
    fn render(&self) -> Element {
        let size = size_record(self.size);
        let busy = self.is_busy();

        let root = match &self.href {
            Some(href) => {
                let link = el("a")
                    .attr_opt("href", (!busy).then(|| href.clone()))
                    .attr_opt("target", self.target.clone())
                    .attr_opt("tabindex", busy.then_some("-1"));
                with_method(link, self.method, self.rel.as_deref())
            }
            None => el("button")
                .attr("type", self.button_type.to_string())
                .bool_attr("disabled", busy),
        };

        root.attr_opt("id", self.id.clone())
            .class(self.classes())
            .attr("data-controller", CONTROLLER)
            .attr(SHOW_LOADER_ON_CLICK_ATTR, self.show_loader_on_click.to_string())
            .bool_attr(SERVER_DISABLED_ATTR, self.disabled)
            .attr_opt("aria-disabled", busy.then_some("true"))
            .attr_opt("aria-busy", self.show_loader.then_some("true"))
            .child(self.render_spinner(&size))
            .child(self.render_content(&size))
    }
}
