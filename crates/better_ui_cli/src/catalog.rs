//! Catalog of every enumerated option, per component

use better_ui::{
    ButtonStyle, ButtonType, CardStyle, DrawerVariant, HeaderHeight, HeaderVariant, Icon,
    IconPosition, LabelPosition, MessagesStyle, Method, OptionSet, Orientation, Resize, Size,
    SidebarBreakpoint, SidebarPosition, SidebarWidth, TextType, Variant,
};
use serde::Serialize;

/// One enumerated option of one component
#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    pub component: &'static str,
    pub field: &'static str,
    pub default: &'static str,
    pub allowed: Vec<&'static str>,
}

fn entry<T: OptionSet + Default>(component: &'static str) -> OptionEntry {
    renamed::<T>(component, T::FIELD)
}

/// An option exposed under a different parameter name
fn renamed<T: OptionSet + Default>(component: &'static str, field: &'static str) -> OptionEntry {
    OptionEntry {
        component,
        field,
        default: T::default().as_str(),
        allowed: T::allowed(),
    }
}

/// Component names accepted by page files, in catalog order
pub const COMPONENTS: &[&str] = &[
    "button",
    "card",
    "action_messages",
    "drawer_header",
    "drawer_sidebar",
    "drawer_layout",
    "nav_item",
    "nav_group",
    "text_input",
    "number_input",
    "password_input",
    "textarea",
    "checkbox",
    "checkbox_group",
];

/// Every enumerated option of every component
pub fn catalog() -> Vec<OptionEntry> {
    vec![
        entry::<Variant>("button"),
        entry::<ButtonStyle>("button"),
        entry::<Size>("button"),
        entry::<ButtonType>("button"),
        entry::<IconPosition>("button"),
        entry::<Icon>("button"),
        entry::<Method>("button"),
        entry::<Variant>("card"),
        entry::<CardStyle>("card"),
        entry::<Size>("card"),
        entry::<Variant>("action_messages"),
        entry::<MessagesStyle>("action_messages"),
        entry::<HeaderVariant>("drawer_header"),
        entry::<HeaderHeight>("drawer_header"),
        entry::<DrawerVariant>("drawer_sidebar"),
        entry::<SidebarPosition>("drawer_sidebar"),
        entry::<SidebarWidth>("drawer_sidebar"),
        renamed::<SidebarPosition>("drawer_layout", "sidebar_position"),
        entry::<SidebarBreakpoint>("drawer_layout"),
        entry::<DrawerVariant>("nav_item"),
        entry::<Icon>("nav_item"),
        entry::<Method>("nav_item"),
        entry::<DrawerVariant>("nav_group"),
        entry::<Size>("text_input"),
        entry::<TextType>("text_input"),
        entry::<Size>("number_input"),
        renamed::<Icon>("number_input", "prefix_icon"),
        renamed::<Icon>("number_input", "suffix_icon"),
        entry::<Size>("password_input"),
        renamed::<Icon>("password_input", "prefix_icon"),
        entry::<Size>("textarea"),
        entry::<Resize>("textarea"),
        entry::<Size>("checkbox"),
        entry::<Variant>("checkbox"),
        entry::<LabelPosition>("checkbox"),
        entry::<Size>("checkbox_group"),
        entry::<Variant>("checkbox_group"),
        entry::<Orientation>("checkbox_group"),
    ]
}

/// Options of one component, `None` for an unknown component
pub fn options_for(component: &str) -> Option<Vec<OptionEntry>> {
    if !COMPONENTS.contains(&component) {
        return None;
    }
    Some(
        catalog()
            .into_iter()
            .filter(|entry| entry.component == component)
            .collect(),
    )
}
