//! # BetterUi
//!
//! Tailwind-styled UI components rendered to HTML.
//!
//! - **Components**: buttons, cards, action message banners, drawer layout
//!   and form inputs, each a builder that is also a serde config
//! - **Class resolution**: every option maps to literal Tailwind class
//!   fragments, merged so a caller's `class` override wins per property
//! - **Validation**: enumerated options reject unknown values with
//!   [`InvalidOption`]
//! - **Behaviours**: the rendered markup carries the data attributes read by
//!   the state machines in `better_ui_behaviors`
//!
//! ## Example
//!
//! ```rust
//! use better_ui::prelude::*;
//!
//! let card = bui::card()
//!     .title("Account")
//!     .body("Signed in")
//!     .variant(Variant::Info)
//!     .to_html();
//! assert!(card.contains("Account"));
//!
//! let email = bui::text_input("user[email]")
//!     .label("Email")
//!     .error("is invalid")
//!     .to_html();
//! assert!(email.contains(r#"aria-invalid="true""#));
//! ```

pub mod components;
pub mod page;
pub mod render;

pub use better_ui_core::{
    class_names, merge, BetterUiConfig, ComponentState, Element, InvalidOption, Node, OptionSet,
    Size, Variant,
};
pub use components::*;
pub use page::{Page, PageEntry, PageError};
pub use render::Component;

/// Component constructors with a `bui::` prefix
pub mod bui {
    use crate::components::*;

    pub fn button(label: impl Into<String>) -> Button {
        Button::new(label)
    }

    pub fn card() -> Card {
        Card::new()
    }

    pub fn action_messages<I, S>(messages: I) -> ActionMessages
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ActionMessages::new(messages)
    }

    pub fn drawer_header() -> Header {
        Header::new()
    }

    pub fn drawer_sidebar() -> Sidebar {
        Sidebar::new()
    }

    pub fn drawer_layout() -> Layout {
        Layout::new()
    }

    pub fn nav_item(label: impl Into<String>, href: impl Into<String>) -> NavItem {
        NavItem::new(label, href)
    }

    pub fn nav_group() -> NavGroup {
        NavGroup::new()
    }

    pub fn text_input(name: impl Into<String>) -> TextInput {
        TextInput::new(name)
    }

    pub fn number_input(name: impl Into<String>) -> NumberInput {
        NumberInput::new(name)
    }

    pub fn password_input(name: impl Into<String>) -> PasswordInput {
        PasswordInput::new(name)
    }

    pub fn textarea(name: impl Into<String>) -> Textarea {
        Textarea::new(name)
    }

    pub fn checkbox(name: impl Into<String>) -> Checkbox {
        Checkbox::new(name)
    }

    pub fn checkbox_group(name: impl Into<String>) -> CheckboxGroup {
        CheckboxGroup::new(name)
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bui;
    pub use crate::components::*;
    pub use crate::render::Component;
    pub use better_ui_core::{ComponentState, OptionSet, Size, Variant};
}
