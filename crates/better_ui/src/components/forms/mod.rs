//! Form inputs
//!
//! Every input composes the shared field chrome from [`field`] with its own
//! control. Common options (label, hint, errors, state, size) come from
//! [`FieldOptions`]; disabled and readonly take precedence over errors.

mod checkbox;
mod checkbox_group;
pub mod field;
mod number_input;
mod password_input;
mod text_input;
mod textarea;

pub use checkbox::{Checkbox, LabelPosition};
pub use checkbox_group::{CheckboxGroup, Choice, Orientation};
pub use field::{FieldConfig, FieldOptions};
pub use number_input::NumberInput;
pub use password_input::PasswordInput;
pub use text_input::{TextInput, TextType};
pub use textarea::{Resize, Textarea};
