use better_ui_core::{class_names, el, Element};
use serde::Deserialize;

use super::{DrawerVariant, NavItem};
use crate::render::Component;

fn title_classes(variant: DrawerVariant) -> &'static str {
    match variant {
        DrawerVariant::Light => "text-grayscale-500",
        DrawerVariant::Dark => "text-grayscale-400",
        DrawerVariant::Primary => "text-primary-200",
    }
}

/// Titled group of nav items
///
/// Items take the group's palette. A group without an explicit variant
/// takes the palette of the sidebar rendering it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavGroup {
    title: Option<String>,
    items: Vec<NavItem>,
    variant: Option<DrawerVariant>,
    class: Option<String>,
}

impl NavGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn item(mut self, item: NavItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = NavItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn variant(mut self, variant: DrawerVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Render with the enclosing palette, unless the group sets its own
    pub(crate) fn render_in(&self, inherited: DrawerVariant) -> Element {
        let variant = self.variant.unwrap_or(inherited);
        let title = self.title.as_ref().map(|title| {
            el("h3")
                .class(class_names![
                    "px-3 mb-2 text-xs font-semibold uppercase tracking-wider",
                    title_classes(variant),
                ])
                .text(title.clone())
        });

        el("div")
            .class(class_names!["space-y-1", self.class.as_deref()])
            .child_opt(title)
            .child(
                el("ul")
                    .class("space-y-1")
                    .children(
                        self.items
                            .iter()
                            .map(|item| el("li").child(item.render_in(variant))),
                    ),
            )
    }
}

impl Component for NavGroup {
    fn render(&self) -> Element {
        self.render_in(DrawerVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_renders_items_in_order() {
        let group = NavGroup::new()
            .title("Workspace")
            .variant(DrawerVariant::Primary)
            .item(NavItem::new("Projects", "/projects"))
            .item(NavItem::new("Members", "/members"))
            .render();

        let title = group.find(|e| e.tag() == "h3").unwrap();
        assert!(title.has_class("text-primary-200"));
        let links = group.find_all(|e| e.tag() == "a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].attr_value("href"), Some("/projects"));
        assert_eq!(links[1].text_content(), "Members");
    }

    #[test]
    fn test_items_take_the_group_palette() {
        let group = NavGroup::new()
            .variant(DrawerVariant::Dark)
            .item(NavItem::new("Home", "/"))
            .item(NavItem::new("Billing", "/billing").variant(DrawerVariant::Light))
            .render();

        let links = group.find_all(|e| e.tag() == "a");
        assert!(links[0].has_class("text-grayscale-300"));
        assert!(!links[0].has_class("text-grayscale-600"));
        assert!(links[1].has_class("text-grayscale-600"));
    }

    #[test]
    fn test_untitled_group() {
        let group = NavGroup::new().render();
        assert!(group.find(|e| e.tag() == "h3").is_none());
    }
}
