//! Enumerated render options and the validation gate
//!
//! Every enumerated parameter a component accepts (variant, style, size,
//! orientation, HTTP method, ...) is an [`OptionSet`]: a closed enum with a
//! literal string per member. Strings coming from outside Rust code (page
//! files, configuration, user input) pass through [`validate`], which is the
//! only way to turn a string into an option value.
//!
//! Option sets are declared with [`option_set!`](crate::option_set):
//!
//! ```rust
//! use better_ui_core::option_set;
//! use better_ui_core::OptionSet;
//!
//! option_set! {
//!     /// Text alignment
//!     pub enum Align: "align" {
//!         #[default]
//!         Start => "start",
//!         End => "end",
//!     }
//! }
//!
//! assert_eq!(Align::ALL.len(), 2);
//! assert_eq!("end".parse::<Align>().unwrap(), Align::End);
//! assert_eq!(
//!     "middle".parse::<Align>().unwrap_err().to_string(),
//!     "invalid align \"middle\", must be one of: start, end"
//! );
//! ```

use thiserror::Error;

/// A closed set of literal option values
pub trait OptionSet: Copy + Eq + std::fmt::Debug + 'static {
    /// Parameter name used in error messages
    const FIELD: &'static str;

    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// The literal string for this member
    fn as_str(&self) -> &'static str;

    /// Literal strings of every member, in declaration order
    fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(|option| option.as_str()).collect()
    }
}

/// An enumerated parameter was outside its allowed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} {value:?}, must be one of: {}", .allowed.join(", "))]
pub struct InvalidOption {
    /// Parameter name (`variant`, `size`, ...)
    pub field: &'static str,
    /// The rejected value
    pub value: String,
    /// Every allowed value
    pub allowed: Vec<&'static str>,
}

impl InvalidOption {
    /// Build the error for a rejected value of `T`
    pub fn new<T: OptionSet>(value: impl Into<String>) -> Self {
        Self {
            field: T::FIELD,
            value: value.into(),
            allowed: T::allowed(),
        }
    }
}

/// Validate `value` against the allowed set of `T`
///
/// Matching is exact: option literals are lowercase and case-sensitive.
pub fn validate<T: OptionSet>(value: &str) -> Result<T, InvalidOption> {
    T::ALL
        .iter()
        .copied()
        .find(|option| option.as_str() == value)
        .ok_or_else(|| {
            tracing::debug!(field = T::FIELD, value, "rejected option value");
            InvalidOption::new::<T>(value)
        })
}

/// Declare an enumerated option set
///
/// Generates the enum plus [`OptionSet`], `Display`, `FromStr`,
/// `TryFrom<&str>`, `TryFrom<String>` and serde impls that route every
/// string through [`validate`].
#[macro_export]
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::option::OptionSet for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<$name as $crate::option::OptionSet>::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::option::InvalidOption;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::option::validate(value)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::option::InvalidOption;

            fn try_from(value: &str) -> ::std::result::Result<Self, Self::Error> {
                $crate::option::validate(value)
            }
        }

        impl ::std::convert::TryFrom<::std::string::String> for $name {
            type Error = $crate::option::InvalidOption;

            fn try_from(value: ::std::string::String) -> ::std::result::Result<Self, Self::Error> {
                $crate::option::validate(&value)
            }
        }

        impl ::std::convert::From<$name> for &'static str {
            fn from(value: $name) -> Self {
                <$name as $crate::option::OptionSet>::as_str(&value)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(<$name as $crate::option::OptionSet>::as_str(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value =
                    <::std::string::String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                $crate::option::validate(&value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}
