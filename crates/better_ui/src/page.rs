//! Page files
//!
//! A page is a TOML list of component configurations rendered in order:
//!
//! ```toml
//! title = "Settings"
//!
//! [[components]]
//! component = "action_messages"
//! messages = ["Saved"]
//! variant = "success"
//!
//! [[components]]
//! component = "button"
//! label = "Continue"
//! ```

use better_ui_core::{DefaultsConfig, OptionSet};
use serde::Deserialize;
use thiserror::Error;

use crate::components::{
    ActionMessages, Button, Card, Checkbox, CheckboxGroup, Header, Layout, NavGroup, NavItem,
    NumberInput, PasswordInput, Sidebar, TextInput, Textarea,
};
use crate::render::Component;

/// Errors from reading a page file
#[derive(Error, Debug)]
pub enum PageError {
    #[error("failed to parse page: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One component of a page, tagged by `component`
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum PageEntry {
    Button(Button),
    Card(Card),
    ActionMessages(ActionMessages),
    DrawerHeader(Header),
    DrawerSidebar(Sidebar),
    DrawerLayout(Layout),
    NavItem(NavItem),
    NavGroup(NavGroup),
    TextInput(TextInput),
    NumberInput(NumberInput),
    PasswordInput(PasswordInput),
    Textarea(Textarea),
    Checkbox(Checkbox),
    CheckboxGroup(CheckboxGroup),
}

/// Components taking the configured default variant
const VARIANT_DEFAULTED: &[&str] = &["button", "card", "action_messages"];

/// Components taking the configured default size
const SIZE_DEFAULTED: &[&str] = &[
    "button",
    "card",
    "text_input",
    "number_input",
    "password_input",
    "textarea",
    "checkbox",
    "checkbox_group",
];

impl PageEntry {
    fn component(&self) -> &dyn Component {
        match self {
            PageEntry::Button(c) => c,
            PageEntry::Card(c) => c,
            PageEntry::ActionMessages(c) => c,
            PageEntry::DrawerHeader(c) => c,
            PageEntry::DrawerSidebar(c) => c,
            PageEntry::DrawerLayout(c) => c,
            PageEntry::NavItem(c) => c,
            PageEntry::NavGroup(c) => c,
            PageEntry::TextInput(c) => c,
            PageEntry::NumberInput(c) => c,
            PageEntry::PasswordInput(c) => c,
            PageEntry::Textarea(c) => c,
            PageEntry::Checkbox(c) => c,
            PageEntry::CheckboxGroup(c) => c,
        }
    }
}

impl Component for PageEntry {
    fn render(&self) -> better_ui_core::Element {
        self.component().render()
    }

    fn should_render(&self) -> bool {
        self.component().should_render()
    }
}

/// An ordered list of components
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Page {
    pub title: Option<String>,
    pub components: Vec<PageEntry>,
}

impl Page {
    /// Parse a page, leaving unset options at their built-in defaults
    pub fn from_toml_str(content: &str) -> Result<Self, PageError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a page, filling unset `variant` and `size` options from the
    /// configured defaults
    pub fn from_toml_str_with_defaults(
        content: &str,
        defaults: &DefaultsConfig,
    ) -> Result<Self, PageError> {
        let mut table: toml::Table = toml::from_str(content)?;
        if let Some(toml::Value::Array(components)) = table.get_mut("components") {
            for entry in components.iter_mut() {
                if let toml::Value::Table(entry) = entry {
                    apply_defaults(entry, defaults);
                }
            }
        }
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Render every component that has something to show, one per line
    pub fn render(&self) -> String {
        let html: Vec<String> = self
            .components
            .iter()
            .filter(|entry| entry.should_render())
            .map(Component::to_html)
            .collect();
        tracing::debug!(
            components = self.components.len(),
            rendered = html.len(),
            "rendered page"
        );
        html.join("\n")
    }
}

fn apply_defaults(entry: &mut toml::Table, defaults: &DefaultsConfig) {
    let Some(kind) = entry.get("component").and_then(toml::Value::as_str) else {
        return;
    };
    let kind = kind.to_string();
    if VARIANT_DEFAULTED.contains(&kind.as_str()) && !entry.contains_key("variant") {
        entry.insert("variant".into(), defaults.variant.as_str().into());
    }
    if SIZE_DEFAULTED.contains(&kind.as_str()) && !entry.contains_key("size") {
        entry.insert("size".into(), defaults.size.as_str().into());
    }
}
