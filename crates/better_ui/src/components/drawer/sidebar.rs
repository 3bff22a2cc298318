use better_ui_core::{class_names, el, one_or_many, option_set, Element, Node};
use serde::Deserialize;

use super::{DrawerVariant, NavGroup};
use crate::render::Component;

option_set! {
    /// Edge of the screen the sidebar is attached to
    pub enum SidebarPosition: "position" {
        #[default]
        Left => "left",
        Right => "right",
    }
}

option_set! {
    /// Sidebar width
    pub enum SidebarWidth: "width" {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

const BASE: &str = "flex flex-col h-full shrink-0";
const COLLAPSIBLE: &str = "transition-[width] duration-300";

fn variant_classes(variant: DrawerVariant) -> &'static str {
    match variant {
        DrawerVariant::Light => "bg-white border-grayscale-200 text-grayscale-700",
        DrawerVariant::Dark => "bg-grayscale-900 border-grayscale-800 text-grayscale-300",
        DrawerVariant::Primary => "bg-primary-700 border-primary-800 text-primary-100",
    }
}

fn section_border(variant: DrawerVariant) -> &'static str {
    match variant {
        DrawerVariant::Light => "border-grayscale-200",
        DrawerVariant::Dark => "border-grayscale-800",
        DrawerVariant::Primary => "border-primary-800",
    }
}

fn position_classes(position: SidebarPosition) -> &'static str {
    match position {
        SidebarPosition::Left => "border-r",
        SidebarPosition::Right => "border-l",
    }
}

fn width_classes(width: SidebarWidth) -> &'static str {
    match width {
        SidebarWidth::Sm => "w-56",
        SidebarWidth::Md => "w-64",
        SidebarWidth::Lg => "w-72",
    }
}

/// Class fragments for the sidebar root
pub fn resolve(
    variant: DrawerVariant,
    position: SidebarPosition,
    width: SidebarWidth,
) -> Vec<&'static str> {
    vec![
        BASE,
        variant_classes(variant),
        position_classes(position),
        width_classes(width),
    ]
}

/// Drawer sidebar
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sidebar {
    variant: DrawerVariant,
    position: SidebarPosition,
    width: SidebarWidth,
    collapsible: bool,
    #[serde(deserialize_with = "one_or_many")]
    header: Vec<Node>,
    groups: Vec<NavGroup>,
    #[serde(deserialize_with = "one_or_many")]
    nav: Vec<Node>,
    #[serde(deserialize_with = "one_or_many")]
    footer: Vec<Node>,
    class: Option<String>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: DrawerVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn position(mut self, position: SidebarPosition) -> Self {
        self.position = position;
        self
    }

    pub fn width(mut self, width: SidebarWidth) -> Self {
        self.width = width;
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn header(mut self, content: impl Into<Node>) -> Self {
        self.header.push(content.into());
        self
    }

    pub fn group(mut self, group: NavGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Free-form navigation content, after the groups
    pub fn nav(mut self, content: impl Into<Node>) -> Self {
        self.nav.push(content.into());
        self
    }

    pub fn footer(mut self, content: impl Into<Node>) -> Self {
        self.footer.push(content.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> String {
        class_names![
            resolve(self.variant, self.position, self.width),
            self.collapsible.then_some(COLLAPSIBLE),
            self.class.as_deref(),
        ]
    }
}

impl Component for Sidebar {
    fn render(&self) -> Element {
        let border = section_border(self.variant);
        let header = (!self.header.is_empty()).then(|| {
            el("div")
                .class(class_names!["p-4 border-b", border])
                .children(self.header.iter().cloned())
        });
        let footer = (!self.footer.is_empty()).then(|| {
            el("div")
                .class(class_names!["p-4 border-t", border])
                .children(self.footer.iter().cloned())
        });
        let nav = el("nav")
            .class("flex-1 overflow-y-auto p-4 space-y-6")
            .children(self.groups.iter().map(|group| group.render_in(self.variant)))
            .children(self.nav.iter().cloned());

        el("aside")
            .class(self.classes())
            .attr_opt("data-collapsible", self.collapsible.then_some("true"))
            .attr_opt("aria-expanded", self.collapsible.then_some("true"))
            .child_opt(header)
            .child(nav)
            .child_opt(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::drawer::NavItem;
    use better_ui_core::OptionSet;

    #[test]
    fn test_every_combination_resolves() {
        for &variant in DrawerVariant::ALL {
            for &position in SidebarPosition::ALL {
                for &width in SidebarWidth::ALL {
                    assert_eq!(resolve(variant, position, width).len(), 4);
                }
            }
        }
    }

    #[test]
    fn test_right_dark_sidebar() {
        let sidebar = Sidebar::new()
            .variant(DrawerVariant::Dark)
            .position(SidebarPosition::Right)
            .width(SidebarWidth::Lg)
            .render();
        assert_eq!(sidebar.tag(), "aside");
        for class in ["border-l", "w-72", "bg-grayscale-900"] {
            assert!(sidebar.has_class(class), "missing {class}");
        }
        assert!(!sidebar.has_attr("data-collapsible"));
    }

    #[test]
    fn test_sections_and_groups() {
        let sidebar = Sidebar::new()
            .collapsible(true)
            .header("Acme")
            .group(NavGroup::new().item(NavItem::new("Home", "/")))
            .footer("v1.2")
            .render();

        assert_eq!(sidebar.attr_value("data-collapsible"), Some("true"));
        let nav = sidebar.find(|e| e.tag() == "nav").unwrap();
        assert_eq!(nav.find_all(|e| e.tag() == "a").len(), 1);
        assert_eq!(sidebar.text_content(), "AcmeHomev1.2");
    }

    #[test]
    fn test_groups_and_items_take_the_sidebar_palette() {
        let sidebar = Sidebar::new()
            .variant(DrawerVariant::Dark)
            .group(NavGroup::new().title("Main").item(NavItem::new("Home", "/")))
            .group(
                NavGroup::new()
                    .variant(DrawerVariant::Primary)
                    .item(NavItem::new("Billing", "/billing")),
            )
            .render();

        let links = sidebar.find_all(|e| e.tag() == "a");
        assert!(links[0].has_class("text-grayscale-300"));
        assert!(!links[0].has_class("text-grayscale-600"));
        assert!(links[1].has_class("text-primary-100"));
        let title = sidebar.find(|e| e.tag() == "h3").unwrap();
        assert!(title.has_class("text-grayscale-400"));
    }
}
