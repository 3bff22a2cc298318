//! Shared design vocabulary
//!
//! Components own their class tables, but they all speak the same
//! vocabulary: the 9 semantic [`Variant`]s, the 5 [`Size`] steps and the
//! derived [`ComponentState`].

use crate::option_set;

option_set! {
    /// Semantic color category, independent of visual treatment
    pub enum Variant: "variant" {
        /// Brand color, the default call to action
        #[default]
        Primary => "primary",
        /// Secondary brand color
        Secondary => "secondary",
        /// Accent color for highlights
        Accent => "accent",
        /// Positive outcome - green
        Success => "success",
        /// Destructive or failed outcome - red
        Danger => "danger",
        /// Caution - amber
        Warning => "warning",
        /// Neutral information - blue
        Info => "info",
        /// Low-contrast neutral on light surfaces
        Light => "light",
        /// High-contrast neutral
        Dark => "dark",
    }
}

impl Variant {
    /// Conventional palette shade for documentation and previews
    ///
    /// Not used to compute classes: class tables spell out every token.
    pub fn shade(&self) -> u16 {
        match self {
            Variant::Light => 50,
            Variant::Dark => 900,
            Variant::Warning => 400,
            _ => 500,
        }
    }
}

option_set! {
    /// Component size step
    pub enum Size: "size" {
        /// Extra small
        Xs => "xs",
        /// Small
        Sm => "sm",
        /// Medium (default)
        #[default]
        Md => "md",
        /// Large
        Lg => "lg",
        /// Extra large
        Xl => "xl",
    }
}

/// Class fragments selected by a [`Size`]
///
/// Every component keeps its own table of these records; the record shape
/// is the only thing shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeRecord {
    /// Padding utilities
    pub padding: &'static str,
    /// Font size utility
    pub text: &'static str,
    /// Icon width/height utilities
    pub icon: &'static str,
    /// Gap between inline children
    pub gap: &'static str,
}

/// Interaction state derived from a component's flags
///
/// Precedence is fixed: disabled > readonly > error > normal. The states
/// are mutually exclusive, so a component styles exactly one of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentState {
    Disabled,
    Readonly,
    Error,
    #[default]
    Normal,
}

impl ComponentState {
    /// Derive the state from flags using the fixed precedence
    pub fn resolve(disabled: bool, readonly: bool, has_errors: bool) -> Self {
        if disabled {
            ComponentState::Disabled
        } else if readonly {
            ComponentState::Readonly
        } else if has_errors {
            ComponentState::Error
        } else {
            ComponentState::Normal
        }
    }

    /// Returns true if the control accepts user input
    pub fn is_interactive(&self) -> bool {
        matches!(self, ComponentState::Error | ComponentState::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionSet;

    #[test]
    fn test_variant_set_has_nine_members() {
        assert_eq!(Variant::ALL.len(), 9);
        assert_eq!(
            Variant::allowed(),
            vec![
                "primary",
                "secondary",
                "accent",
                "success",
                "danger",
                "warning",
                "info",
                "light",
                "dark"
            ]
        );
    }

    #[test]
    fn test_variant_shades() {
        assert_eq!(Variant::Primary.shade(), 500);
        assert_eq!(Variant::Light.shade(), 50);
        assert_eq!(Variant::Dark.shade(), 900);
    }

    #[test]
    fn test_size_default_is_md() {
        assert_eq!(Size::default(), Size::Md);
        assert_eq!("xl".parse::<Size>(), Ok(Size::Xl));
        assert!("xxl".parse::<Size>().is_err());
    }

    #[test]
    fn test_state_precedence() {
        assert_eq!(
            ComponentState::resolve(true, true, true),
            ComponentState::Disabled
        );
        assert_eq!(
            ComponentState::resolve(false, true, true),
            ComponentState::Readonly
        );
        assert_eq!(
            ComponentState::resolve(false, false, true),
            ComponentState::Error
        );
        assert_eq!(
            ComponentState::resolve(false, false, false),
            ComponentState::Normal
        );
    }

    #[test]
    fn test_state_interactivity() {
        assert!(!ComponentState::Disabled.is_interactive());
        assert!(!ComponentState::Readonly.is_interactive());
        assert!(ComponentState::Error.is_interactive());
        assert!(ComponentState::Normal.is_interactive());
    }
}
