use better_ui_core::{class_names, el, Element};
use serde::Deserialize;

use super::DrawerVariant;
use crate::components::icon::{icon_span, Icon};
use crate::components::link::{with_method, Method};
use crate::render::Component;

const BASE: &str =
    "flex items-center gap-3 px-3 py-2 text-sm font-medium rounded-lg transition-colors";
const BADGE_BASE: &str =
    "ml-auto inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium";

fn item_classes(variant: DrawerVariant, active: bool) -> &'static str {
    match (variant, active) {
        (DrawerVariant::Light, true) => "bg-grayscale-100 text-grayscale-900",
        (DrawerVariant::Light, false) => {
            "text-grayscale-600 hover:bg-grayscale-50 hover:text-grayscale-900"
        }
        (DrawerVariant::Dark, true) => "bg-grayscale-800 text-white",
        (DrawerVariant::Dark, false) => "text-grayscale-300 hover:bg-grayscale-800 hover:text-white",
        (DrawerVariant::Primary, true) => "bg-primary-800 text-white",
        (DrawerVariant::Primary, false) => "text-primary-100 hover:bg-primary-600 hover:text-white",
    }
}

fn badge_classes(variant: DrawerVariant) -> &'static str {
    match variant {
        DrawerVariant::Light => "bg-grayscale-200 text-grayscale-700",
        DrawerVariant::Dark => "bg-grayscale-700 text-grayscale-100",
        DrawerVariant::Primary => "bg-primary-500 text-white",
    }
}

/// Class fragments for a nav item
pub fn resolve(variant: DrawerVariant, active: bool) -> Vec<&'static str> {
    vec![BASE, item_classes(variant, active)]
}

/// Sidebar navigation link
///
/// An item without an explicit variant takes the palette of the group or
/// sidebar rendering it.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    label: String,
    href: String,
    #[serde(default)]
    variant: Option<DrawerVariant>,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    icon: Option<Icon>,
    #[serde(default)]
    badge: Option<String>,
    #[serde(default)]
    method: Option<Method>,
    #[serde(default)]
    class: Option<String>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            variant: None,
            active: false,
            icon: None,
            badge: None,
            method: None,
            class: None,
        }
    }

    pub fn variant(mut self, variant: DrawerVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        self.classes_in(DrawerVariant::default())
    }

    fn classes_in(&self, inherited: DrawerVariant) -> String {
        let variant = self.variant.unwrap_or(inherited);
        class_names![resolve(variant, self.active), self.class.as_deref()]
    }

    /// Render with the enclosing palette, unless the item sets its own
    pub(crate) fn render_in(&self, inherited: DrawerVariant) -> Element {
        let variant = self.variant.unwrap_or(inherited);
        let icon = self.icon.map(|icon| icon_span(icon, "shrink-0 w-5 h-5"));
        let badge = self.badge.as_ref().map(|badge| {
            el("span")
                .class(class_names![BADGE_BASE, badge_classes(variant)])
                .text(badge.clone())
        });

        let link = el("a")
            .attr("href", self.href.clone())
            .class(self.classes_in(inherited))
            .attr_opt("aria-current", self.active.then_some("page"));

        with_method(link, self.method, None)
            .child_opt(icon)
            .child(el("span").class("flex-1 truncate").text(self.label.clone()))
            .child_opt(badge)
    }
}

impl Component for NavItem {
    fn render(&self) -> Element {
        self.render_in(DrawerVariant::default())
    }
}
