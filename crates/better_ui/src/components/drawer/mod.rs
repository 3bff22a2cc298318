//! Drawer layout family
//!
//! An application shell: a [`Header`] across the top, a [`Sidebar`] holding
//! [`NavGroup`]s of [`NavItem`]s, and the main content, composed by
//! [`Layout`]. The sidebar, groups and items share the [`DrawerVariant`]
//! palette; the header adds a transparent treatment.

mod header;
mod layout;
mod nav_group;
mod nav_item;
mod sidebar;

use better_ui_core::option_set;

pub use header::{Header, HeaderHeight, HeaderVariant};
pub use layout::{Layout, SidebarBreakpoint};
pub use nav_group::NavGroup;
pub use nav_item::NavItem;
pub use sidebar::{Sidebar, SidebarPosition, SidebarWidth};

option_set! {
    /// Palette of the sidebar and its navigation
    pub enum DrawerVariant: "variant" {
        #[default]
        Light => "light",
        Dark => "dark",
        Primary => "primary",
    }
}
