//! BetterUi Core
//!
//! This crate provides the shared vocabulary every BetterUi component is
//! built from:
//!
//! - **Option Sets**: enumerated render options with a validation gate
//!   that rejects out-of-domain strings with [`InvalidOption`]
//! - **Tokens**: the 9-variant color vocabulary, sizes and derived
//!   component state
//! - **Class Merging**: Tailwind-aware class merging (last class wins per
//!   CSS property group)
//! - **HTML Tree**: a small element tree rendered to escaped HTML
//! - **Configuration**: `better_ui.toml` loading
//!
//! # Example
//!
//! ```rust
//! use better_ui_core::{merge, Variant};
//!
//! let classes = merge(["px-4 py-2", "px-6"]);
//! assert_eq!(classes, "py-2 px-6");
//!
//! let variant: Variant = "danger".parse().unwrap();
//! assert_eq!(variant, Variant::Danger);
//! assert!("purple".parse::<Variant>().is_err());
//! ```

pub mod class_merge;
pub mod config;
pub mod html;
pub mod option;
pub mod tokens;

pub use class_merge::{merge, IntoClasses};
pub use config::{BehaviourConfig, BetterUiConfig, ConfigError, DefaultsConfig, CONFIG_FILE_NAME};
pub use html::{el, one_or_many, Element, Node};
pub use option::{validate, InvalidOption, OptionSet};
pub use tokens::{ComponentState, Size, SizeRecord, Variant};

#[doc(hidden)]
pub use serde;
