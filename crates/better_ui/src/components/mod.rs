//! BetterUi components
//!
//! Each component follows the same pattern:
//! - A struct that is both the builder and the serde config
//! - Option sets for its enumerated options
//! - A `resolve` function mapping options to class fragments
//! - A [`Component`](crate::render::Component) impl producing the element tree

pub mod action_messages;
pub mod button;
pub mod card;
pub mod drawer;
pub mod forms;
pub mod icon;
pub mod link;

pub use action_messages::{ActionMessages, MessagesStyle};
pub use button::{Button, ButtonStyle, ButtonType, IconPosition};
pub use card::{Card, CardStyle};
pub use drawer::{
    DrawerVariant, Header, HeaderHeight, HeaderVariant, Layout, NavGroup, NavItem, Sidebar,
    SidebarBreakpoint, SidebarPosition, SidebarWidth,
};
pub use forms::{
    Checkbox, CheckboxGroup, Choice, FieldOptions, LabelPosition, NumberInput, Orientation,
    PasswordInput, Resize, TextInput, TextType, Textarea,
};
pub use icon::Icon;
pub use link::Method;
