use better_ui_core::{class_names, el, one_or_many, option_set, Element, Node};
use serde::Deserialize;

use crate::components::icon::Icon;
use crate::render::Component;

option_set! {
    /// Palette of the drawer header
    pub enum HeaderVariant: "variant" {
        #[default]
        Light => "light",
        Dark => "dark",
        Transparent => "transparent",
        Primary => "primary",
    }
}

option_set! {
    /// Header bar height
    pub enum HeaderHeight: "height" {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

const BASE: &str = "w-full flex items-center shrink-0";
const STICKY: &str = "sticky top-0 z-40";

fn variant_classes(variant: HeaderVariant) -> &'static str {
    match variant {
        HeaderVariant::Light => "bg-white border-b border-grayscale-200 text-grayscale-900",
        HeaderVariant::Dark => "bg-grayscale-900 border-b border-grayscale-800 text-white",
        HeaderVariant::Transparent => "bg-transparent text-grayscale-900",
        HeaderVariant::Primary => "bg-primary-600 text-white",
    }
}

fn height_classes(height: HeaderHeight) -> &'static str {
    match height {
        HeaderHeight::Sm => "h-14",
        HeaderHeight::Md => "h-16",
        HeaderHeight::Lg => "h-20",
    }
}

fn menu_button_classes(variant: HeaderVariant) -> &'static str {
    match variant {
        HeaderVariant::Light | HeaderVariant::Transparent => {
            "text-grayscale-600 hover:bg-grayscale-100"
        }
        HeaderVariant::Dark => "text-grayscale-300 hover:bg-grayscale-800",
        HeaderVariant::Primary => "text-primary-100 hover:bg-primary-700",
    }
}

/// Class fragments for the header root
pub fn resolve(variant: HeaderVariant, height: HeaderHeight) -> Vec<&'static str> {
    vec![BASE, variant_classes(variant), height_classes(height)]
}

/// Drawer header bar
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Header {
    variant: HeaderVariant,
    height: HeaderHeight,
    sticky: bool,
    #[serde(deserialize_with = "one_or_many")]
    logo: Vec<Node>,
    #[serde(deserialize_with = "one_or_many")]
    nav: Vec<Node>,
    #[serde(deserialize_with = "one_or_many")]
    actions: Vec<Node>,
    #[serde(deserialize_with = "one_or_many")]
    mobile_menu: Vec<Node>,
    class: Option<String>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: HeaderVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn height(mut self, height: HeaderHeight) -> Self {
        self.height = height;
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn logo(mut self, content: impl Into<Node>) -> Self {
        self.logo.push(content.into());
        self
    }

    /// Desktop navigation, hidden on small screens
    pub fn nav(mut self, content: impl Into<Node>) -> Self {
        self.nav.push(content.into());
        self
    }

    pub fn actions(mut self, content: impl Into<Node>) -> Self {
        self.actions.push(content.into());
        self
    }

    /// Small-screen menu content, shown behind a menu button
    pub fn mobile_menu(mut self, content: impl Into<Node>) -> Self {
        self.mobile_menu.push(content.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        class_names![
            resolve(self.variant, self.height),
            self.sticky.then_some(STICKY),
            self.class.as_deref(),
        ]
    }

    fn render_mobile_menu(&self) -> Option<Element> {
        if self.mobile_menu.is_empty() {
            return None;
        }
        let summary = el("summary")
            .class(class_names![
                "list-none inline-flex items-center justify-center rounded-md p-2 cursor-pointer",
                menu_button_classes(self.variant),
            ])
            .attr("aria-label", "Open menu")
            .child(Icon::Menu.node("w-5 h-5"));
        Some(
            el("details")
                .class("relative lg:hidden")
                .child(summary)
                .child(
                    el("div")
                        .class("absolute right-0 mt-2 w-64 rounded-lg bg-white text-grayscale-900 shadow-lg p-2")
                        .children(self.mobile_menu.iter().cloned()),
                ),
        )
    }
}

impl Component for Header {
    fn render(&self) -> Element {
        let slot = |class: &'static str, content: &[Node]| {
            (!content.is_empty()).then(|| el("div").class(class).children(content.iter().cloned()))
        };

        el("header").class(self.classes()).child(
            el("div")
                .class("flex items-center justify-between w-full gap-4 px-4")
                .child_opt(slot("flex items-center shrink-0", self.logo.as_slice()))
                .child_opt(slot("hidden lg:flex items-center gap-6 flex-1", self.nav.as_slice()))
                .child_opt(slot("flex items-center gap-3", self.actions.as_slice()))
                .child_opt(self.render_mobile_menu()),
        )
    }
}
