//! Password visibility toggle

use better_ui_core::Element;
use better_ui_icons::{to_svg, EYE, EYE_OFF};

use crate::root::RootRef;
use crate::transitions::{event_types, StateTransitions};

/// `data-controller` value of a password field wrapper
pub const CONTROLLER: &str = "bui-password";
/// Target marker attribute
pub const TARGET_ATTR: &str = "data-bui-password-target";
pub const INPUT_TARGET: &str = "input";
pub const TOGGLE_TARGET: &str = "toggle";
/// Wrapper around the toggle's icon
pub const ICON_TARGET: &str = "icon";
/// `data-action` value of the toggle button
pub const TOGGLE_ACTION: &str = "click->bui-password#toggle";
/// Class of the icon SVG inside the icon target
pub const ICON_CLASS: &str = "w-full h-full";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Obscured,
    Revealed,
}

impl StateTransitions for Visibility {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (Visibility::Obscured, event_types::TOGGLE) => Some(Visibility::Revealed),
            (Visibility::Revealed, event_types::TOGGLE) => Some(Visibility::Obscured),
            _ => None,
        }
    }
}

impl Visibility {
    /// Input `type` attribute for this visibility
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Obscured => "password",
            Visibility::Revealed => "text",
        }
    }

    /// Icon for the toggle: the action the next press performs
    pub fn icon(self) -> &'static str {
        match self {
            Visibility::Obscured => EYE,
            Visibility::Revealed => EYE_OFF,
        }
    }

    /// Accessible label for the toggle
    pub fn toggle_label(self) -> &'static str {
        match self {
            Visibility::Obscured => "Show password",
            Visibility::Revealed => "Hide password",
        }
    }
}

fn is_root(element: &Element) -> bool {
    element.attr_value("data-controller") == Some(CONTROLLER)
}

/// Toggle controller for one password field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordToggle {
    visibility: Visibility,
    actionable: bool,
    root: Option<RootRef>,
}

impl PasswordToggle {
    /// Create a toggle; a non-actionable toggle ignores presses
    pub fn new(actionable: bool) -> Self {
        Self {
            visibility: Visibility::Obscured,
            actionable,
            root: None,
        }
    }

    /// Create a toggle for the first password field in the tree
    pub fn from_element(element: &Element) -> Self {
        match RootRef::first(element, is_root) {
            Some(root) => Self::from_root(element, root),
            None => Self::new(false),
        }
    }

    /// Create one toggle per password field in the tree, in document order
    pub fn all_from_element(element: &Element) -> Vec<Self> {
        RootRef::all(element, is_root)
            .into_iter()
            .map(|root| Self::from_root(element, root))
            .collect()
    }

    /// Create a toggle bound to one password field
    ///
    /// The toggle is actionable when the toggle target exists and the input
    /// is neither disabled nor readonly.
    pub fn from_root(tree: &Element, root: RootRef) -> Self {
        let Some(field) = root.get(tree, is_root) else {
            return Self::new(false);
        };
        let has_toggle = field.find_by_attr(TARGET_ATTR, TOGGLE_TARGET).is_some();
        let input_editable = field
            .find_by_attr(TARGET_ATTR, INPUT_TARGET)
            .is_some_and(|input| !input.has_attr("disabled") && !input.has_attr("readonly"));
        Self {
            root: Some(root),
            ..Self::new(has_toggle && input_editable)
        }
    }

    /// Press the toggle, returning the new visibility
    pub fn toggle(&mut self) -> Option<Visibility> {
        if !self.actionable {
            return None;
        }
        let next = self.visibility.on_event(event_types::TOGGLE)?;
        tracing::debug!(from = ?self.visibility, to = ?next, "password visibility toggled");
        self.visibility = next;
        Some(next)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_actionable(&self) -> bool {
        self.actionable
    }

    pub fn input_type(&self) -> &'static str {
        self.visibility.input_type()
    }

    pub fn icon(&self) -> &'static str {
        self.visibility.icon()
    }

    /// The field this toggle is bound to, if it was built from markup
    pub fn root(&self) -> Option<&RootRef> {
        self.root.as_ref()
    }

    /// Reflect the visibility onto the bound field: input type, toggle icon
    /// and toggle accessibility attributes
    pub fn apply(&self, tree: &mut Element) {
        let Some(bound) = &self.root else {
            return;
        };
        let Some(root) = bound.get_mut(tree, is_root) else {
            return;
        };
        if let Some(input) = root.find_by_attr_mut(TARGET_ATTR, INPUT_TARGET) {
            input.set_attr("type", self.input_type());
        }
        if let Some(toggle) = root.find_by_attr_mut(TARGET_ATTR, TOGGLE_TARGET) {
            let revealed = self.visibility == Visibility::Revealed;
            toggle.set_attr("aria-pressed", revealed.to_string());
            toggle.set_attr("aria-label", self.visibility.toggle_label());
            if let Some(icon) = toggle.find_by_attr_mut(TARGET_ATTR, ICON_TARGET) {
                icon.set_children(vec![better_ui_core::Node::raw(to_svg(
                    self.icon(),
                    ICON_CLASS,
                ))]);
            }
        }
    }
}
