use better_ui_core::{class_names, el, one_or_many, option_set, Element, Node};
use serde::Deserialize;

use super::{Header, Sidebar, SidebarPosition};
use crate::render::Component;

option_set! {
    /// Screen width from which the sidebar is shown
    pub enum SidebarBreakpoint: "sidebar_breakpoint" {
        Md => "md",
        #[default]
        Lg => "lg",
        Xl => "xl",
    }
}

fn breakpoint_classes(breakpoint: SidebarBreakpoint) -> &'static str {
    match breakpoint {
        SidebarBreakpoint::Md => "hidden md:flex",
        SidebarBreakpoint::Lg => "hidden lg:flex",
        SidebarBreakpoint::Xl => "hidden xl:flex",
    }
}

fn direction_classes(position: SidebarPosition) -> &'static str {
    match position {
        SidebarPosition::Left => "flex-row",
        SidebarPosition::Right => "flex-row-reverse",
    }
}

/// Application shell: header, sidebar and main content
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    sidebar_position: SidebarPosition,
    sidebar_breakpoint: SidebarBreakpoint,
    header: Option<Header>,
    sidebar: Option<Sidebar>,
    #[serde(deserialize_with = "one_or_many")]
    main: Vec<Node>,
    class: Option<String>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sidebar_position(mut self, position: SidebarPosition) -> Self {
        self.sidebar_position = position;
        self
    }

    pub fn sidebar_breakpoint(mut self, breakpoint: SidebarBreakpoint) -> Self {
        self.sidebar_breakpoint = breakpoint;
        self
    }

    pub fn header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    pub fn sidebar(mut self, sidebar: Sidebar) -> Self {
        self.sidebar = Some(sidebar);
        self
    }

    /// Append main content
    pub fn main(mut self, content: impl Into<Node>) -> Self {
        self.main.push(content.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Layout {
    fn render(&self) -> Element {
        // The layout decides which edge the sidebar sits on
        let sidebar = self.sidebar.as_ref().map(|sidebar| {
            el("div")
                .class(class_names![
                    breakpoint_classes(self.sidebar_breakpoint),
                    "shrink-0"
                ])
                .child(sidebar.clone().position(self.sidebar_position).render())
        });

        el("div")
            .class(class_names!["flex flex-col h-screen", self.class.as_deref()])
            .child_opt(self.header.as_ref().map(Component::render))
            .child(
                el("div")
                    .class(class_names![
                        "flex flex-1 overflow-hidden",
                        direction_classes(self.sidebar_position),
                    ])
                    .child_opt(sidebar)
                    .child(
                        el("main")
                            .class("flex-1 overflow-y-auto")
                            .children(self.main.iter().cloned()),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_composes_sections() {
        let layout = Layout::new()
            .header(Header::new().logo("Acme"))
            .sidebar(Sidebar::new().header("Menu"))
            .main("Welcome")
            .render();

        assert!(layout.find(|e| e.tag() == "header").is_some());
        assert!(layout.find(|e| e.tag() == "aside").is_some());
        let main = layout.find(|e| e.tag() == "main").unwrap();
        assert_eq!(main.text_content(), "Welcome");
    }

    #[test]
    fn test_sidebar_position_and_breakpoint() {
        let layout = Layout::new()
            .sidebar(Sidebar::new())
            .sidebar_position(SidebarPosition::Right)
            .sidebar_breakpoint(SidebarBreakpoint::Md)
            .render();

        let row = layout.find(|e| e.has_class("flex-row-reverse")).unwrap();
        let wrapper = row.child_nodes()[0].as_element().unwrap();
        assert!(wrapper.has_class("md:flex"));
        assert!(wrapper.has_class("hidden"));
        let aside = layout.find(|e| e.tag() == "aside").unwrap();
        assert!(aside.has_class("border-l"));
    }

    #[test]
    fn test_layout_without_sidebar() {
        let layout = Layout::new().main("Only content").render();
        assert!(layout.find(|e| e.tag() == "aside").is_none());
    }

    #[test]
    fn test_deserialize_nested() {
        let layout: Layout = toml::from_str(
            r#"sidebar_breakpoint = "xl"
main = ["Body"]

[sidebar]
variant = "dark"

[[sidebar.groups]]
title = "Main"
items = [{ label = "Home", href = "/" }]"#,
        )
        .unwrap();
        let html = layout.to_html();
        assert!(html.contains("xl:flex"));
        assert!(html.contains(r#"href="/""#));

        let err = toml::from_str::<Layout>(r#"sidebar_breakpoint = "2xl""#).unwrap_err();
        assert!(err.to_string().contains("invalid sidebar_breakpoint"));
    }
}
