//! Loading behaviour for buttons
//!
//! A button opted into `show_loader_on_click` swaps its content for a
//! spinner and disables itself when clicked (standalone buttons) or when
//! its form submits (submit buttons inside a form). Submission lifecycle
//! events return it to idle, unless the server rendered it disabled, in
//! which case it stays disabled.

use better_ui_core::Element;

use crate::root::RootRef;
use crate::transitions::{event_types, StateTransitions};

/// `data-controller` value of a loading-capable button
pub const CONTROLLER: &str = "bui-button";
/// `"true"` when the button shows the spinner on click
pub const SHOW_LOADER_ON_CLICK_ATTR: &str = "data-bui-button-show-loader-on-click-value";
/// Present when the server rendered the button disabled
pub const SERVER_DISABLED_ATTR: &str = "data-bui-button-server-disabled";
/// Target marker attribute
pub const TARGET_ATTR: &str = "data-bui-button-target";
pub const SPINNER_TARGET: &str = "spinner";
pub const CONTENT_TARGET: &str = "content";

const HIDDEN_CLASS: &str = "hidden";

/// Button loading lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Disabled,
}

impl StateTransitions for LoadingState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (LoadingState::Idle, LOADING_START) => Some(LoadingState::Loading),
            (LoadingState::Loading, SUBMIT_END | FRAME_LOAD | BEFORE_STREAM_RENDER) => {
                Some(LoadingState::Idle)
            }
            (LoadingState::Loading, SERVER_LOCK) => Some(LoadingState::Disabled),
            _ => None,
        }
    }
}

/// What the host should do with a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Let the click through (navigation, form submission)
    Proceed,
    /// Swallow the click; the button is loading or disabled
    Suppressed,
}

fn is_root(element: &Element) -> bool {
    element.attr_value("data-controller") == Some(CONTROLLER)
}

/// Loading controller for one button element
#[derive(Debug)]
pub struct LoadingController {
    state: LoadingState,
    root: Option<RootRef>,
    show_loader_on_click: bool,
    submits_form: bool,
    server_disabled: bool,
    connected: bool,
}

impl LoadingController {
    pub fn new(show_loader_on_click: bool, submits_form: bool) -> Self {
        Self {
            state: LoadingState::Idle,
            root: None,
            show_loader_on_click,
            submits_form,
            server_disabled: false,
            connected: false,
        }
    }

    /// Mark the button as disabled by the server
    ///
    /// The current state is kept; the marker only makes the next submission
    /// lifecycle event settle in `Disabled` instead of `Idle`.
    pub fn with_server_disabled(mut self, server_disabled: bool) -> Self {
        self.server_disabled = server_disabled;
        self
    }

    /// Create a controller for the first button in the tree
    ///
    /// `inside_form` tells whether the button sits inside a form; only submit
    /// buttons inside a form wait for the submit event to start loading.
    pub fn from_element(element: &Element, inside_form: bool) -> Self {
        match RootRef::first(element, is_root) {
            Some(root) => Self::from_root(element, root, inside_form),
            None => Self::new(false, false),
        }
    }

    /// Create one controller per button in the tree, in document order
    pub fn all_from_element(element: &Element, inside_form: bool) -> Vec<Self> {
        RootRef::all(element, is_root)
            .into_iter()
            .map(|root| Self::from_root(element, root, inside_form))
            .collect()
    }

    /// Create a controller bound to one button
    ///
    /// A button rendered `disabled` (or `aria-disabled` for links) starts in
    /// `Disabled`.
    pub fn from_root(tree: &Element, root: RootRef, inside_form: bool) -> Self {
        let Some(button) = root.get(tree, is_root) else {
            return Self::new(false, false);
        };

        let show_loader_on_click = button.attr_value(SHOW_LOADER_ON_CLICK_ATTR) == Some("true");
        let submits_form = inside_form && button.attr_value("type") == Some("submit");
        let server_disabled = button.has_attr(SERVER_DISABLED_ATTR);
        let rendered_disabled =
            button.has_attr("disabled") || button.attr_value("aria-disabled") == Some("true");

        let mut controller = Self::new(show_loader_on_click, submits_form)
            .with_server_disabled(server_disabled);
        if rendered_disabled {
            controller.state = LoadingState::Disabled;
        }
        controller.root = Some(root);
        controller
    }

    pub fn connect(&mut self) {
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Handle a click on the button
    pub fn click(&mut self) -> ClickOutcome {
        if self.state != LoadingState::Idle {
            tracing::trace!(state = ?self.state, "click suppressed");
            return ClickOutcome::Suppressed;
        }
        if self.connected && self.show_loader_on_click && !self.submits_form {
            self.transition(event_types::LOADING_START);
        }
        ClickOutcome::Proceed
    }

    /// Handle the enclosing form's submit event
    pub fn form_submit(&mut self) -> bool {
        if !(self.connected && self.show_loader_on_click && self.submits_form) {
            return false;
        }
        self.transition(event_types::LOADING_START)
    }

    /// Handle a submission lifecycle event
    ///
    /// Accepts `SUBMIT_END`, `FRAME_LOAD` and `BEFORE_STREAM_RENDER`; other
    /// events are ignored. A server-disabled button settles in `Disabled`
    /// instead of `Idle`.
    pub fn lifecycle(&mut self, event: u32) -> bool {
        use event_types::*;
        if !self.connected || !matches!(event, SUBMIT_END | FRAME_LOAD | BEFORE_STREAM_RENDER) {
            return false;
        }
        let event = if self.server_disabled { SERVER_LOCK } else { event };
        self.transition(event)
    }

    fn transition(&mut self, event: u32) -> bool {
        let Some(next) = self.state.on_event(event) else {
            return false;
        };
        tracing::debug!(from = ?self.state, to = ?next, event, "loading transition");
        self.state = next;
        true
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadingState::Loading
    }

    /// Returns true while the button must not accept clicks
    pub fn is_disabled(&self) -> bool {
        self.state != LoadingState::Idle
    }

    pub fn is_server_disabled(&self) -> bool {
        self.server_disabled
    }

    /// The button this controller is bound to, if it was built from markup
    pub fn root(&self) -> Option<&RootRef> {
        self.root.as_ref()
    }

    /// Reflect the current state onto the bound button
    ///
    /// Sets `disabled`/`aria-disabled` and swaps the spinner and content
    /// targets.
    pub fn apply(&self, tree: &mut Element) {
        let disabled = self.is_disabled();
        let loading = self.is_loading();

        let Some(bound) = &self.root else {
            return;
        };
        let Some(root) = bound.get_mut(tree, is_root) else {
            return;
        };
        root.set_bool_attr("disabled", disabled);
        if disabled {
            root.set_attr("aria-disabled", "true");
        } else {
            root.remove_attr("aria-disabled");
        }
        if let Some(spinner) = root.find_by_attr_mut(TARGET_ATTR, SPINNER_TARGET) {
            spinner.toggle_class(HIDDEN_CLASS, !loading);
        }
        if let Some(content) = root.find_by_attr_mut(TARGET_ATTR, CONTENT_TARGET) {
            content.toggle_class(HIDDEN_CLASS, loading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use better_ui_core::el;
    use event_types::*;

    fn button(kind: &str, show_loader: bool) -> Element {
        el("button")
            .attr("type", kind.to_string())
            .attr("data-controller", CONTROLLER)
            .attr(SHOW_LOADER_ON_CLICK_ATTR, show_loader.to_string())
            .child(
                el("span")
                    .attr(TARGET_ATTR, SPINNER_TARGET)
                    .class("hidden"),
            )
            .child(el("span").attr(TARGET_ATTR, CONTENT_TARGET).text("Save"))
    }

    fn connected(element: &Element, inside_form: bool) -> LoadingController {
        let mut controller = LoadingController::from_element(element, inside_form);
        controller.connect();
        controller
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(
            LoadingState::Idle.on_event(LOADING_START),
            Some(LoadingState::Loading)
        );
        for event in [SUBMIT_END, FRAME_LOAD, BEFORE_STREAM_RENDER] {
            assert_eq!(LoadingState::Loading.on_event(event), Some(LoadingState::Idle));
            assert_eq!(LoadingState::Idle.on_event(event), None);
        }
        assert_eq!(
            LoadingState::Loading.on_event(SERVER_LOCK),
            Some(LoadingState::Disabled)
        );
        assert_eq!(LoadingState::Disabled.on_event(LOADING_START), None);
    }

    #[test]
    fn test_standalone_click_starts_loading() {
        let mut element = button("button", true);
        let mut controller = connected(&element, false);

        assert_eq!(controller.click(), ClickOutcome::Proceed);
        assert!(controller.is_loading());

        controller.apply(&mut element);
        assert!(element.has_attr("disabled"));
        assert_eq!(element.attr_value("aria-disabled"), Some("true"));
        let spinner = element.find_by_attr(TARGET_ATTR, SPINNER_TARGET).unwrap();
        assert!(!spinner.has_class("hidden"));
        let content = element.find_by_attr(TARGET_ATTR, CONTENT_TARGET).unwrap();
        assert!(content.has_class("hidden"));
    }

    #[test]
    fn test_click_while_loading_is_suppressed() {
        let element = button("button", true);
        let mut controller = connected(&element, false);
        controller.click();
        assert_eq!(controller.click(), ClickOutcome::Suppressed);
        assert!(controller.is_loading());
    }

    #[test]
    fn test_click_while_disabled_is_suppressed() {
        let element = button("button", true).bool_attr("disabled", true);
        let mut controller = connected(&element, false);
        assert_eq!(controller.state(), LoadingState::Disabled);
        assert_eq!(controller.click(), ClickOutcome::Suppressed);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_without_loader_click_proceeds() {
        let element = button("button", false);
        let mut controller = connected(&element, false);
        assert_eq!(controller.click(), ClickOutcome::Proceed);
        assert_eq!(controller.state(), LoadingState::Idle);
    }

    #[test]
    fn test_submit_button_waits_for_form_submit() {
        let element = button("submit", true);
        let mut controller = connected(&element, true);

        assert_eq!(controller.click(), ClickOutcome::Proceed);
        assert_eq!(controller.state(), LoadingState::Idle);

        assert!(controller.form_submit());
        assert!(controller.is_loading());

        assert!(controller.lifecycle(SUBMIT_END));
        assert_eq!(controller.state(), LoadingState::Idle);
    }

    #[test]
    fn test_submit_button_outside_form_loads_on_click() {
        let element = button("submit", true);
        let mut controller = connected(&element, false);
        assert!(!controller.form_submit());
        controller.click();
        assert!(controller.is_loading());
    }

    #[test]
    fn test_lifecycle_resets_to_idle() {
        for event in [SUBMIT_END, FRAME_LOAD, BEFORE_STREAM_RENDER] {
            let mut element = button("button", true);
            let mut controller = connected(&element, false);
            controller.click();
            assert!(controller.lifecycle(event));
            assert_eq!(controller.state(), LoadingState::Idle);

            controller.apply(&mut element);
            assert!(!element.has_attr("disabled"));
            assert!(!element.has_attr("aria-disabled"));
            let spinner = element.find_by_attr(TARGET_ATTR, SPINNER_TARGET).unwrap();
            assert!(spinner.has_class("hidden"));
        }
    }

    #[test]
    fn test_server_disabled_stays_disabled() {
        let mut controller = LoadingController::new(true, false).with_server_disabled(true);
        assert_eq!(controller.state(), LoadingState::Idle);
        controller.connect();
        assert_eq!(controller.click(), ClickOutcome::Proceed);
        assert!(controller.is_loading());

        assert!(controller.lifecycle(FRAME_LOAD));
        assert_eq!(controller.state(), LoadingState::Disabled);
        assert_eq!(controller.click(), ClickOutcome::Suppressed);
        assert!(!controller.lifecycle(SUBMIT_END));
    }

    #[test]
    fn test_server_marker_without_disabled_attr_settles_disabled() {
        let mut element = button("button", true).bool_attr(SERVER_DISABLED_ATTR, true);
        let mut controller = connected(&element, false);
        assert!(controller.is_server_disabled());
        assert_eq!(controller.state(), LoadingState::Idle);

        controller.click();
        assert!(controller.lifecycle(BEFORE_STREAM_RENDER));
        controller.apply(&mut element);
        assert!(element.has_attr("disabled"));
        assert_eq!(element.attr_value("aria-disabled"), Some("true"));
    }

    #[test]
    fn test_each_button_patches_only_itself() {
        let mut form = el("form")
            .child(button("button", true).attr("id", "save"))
            .child(button("button", true));
        let mut controllers = LoadingController::all_from_element(&form, false);
        assert_eq!(controllers.len(), 2);
        assert_eq!(controllers[0].root(), Some(&RootRef::Id("save".into())));
        assert_eq!(controllers[1].root(), Some(&RootRef::Path(vec![1])));

        controllers[1].connect();
        controllers[1].click();
        for controller in &controllers {
            controller.apply(&mut form);
        }

        let buttons = form.find_all(is_root);
        assert!(!buttons[0].has_attr("disabled"));
        assert!(buttons[1].has_attr("disabled"));
    }

    #[test]
    fn test_aria_disabled_link_starts_disabled() {
        let link = el("a")
            .attr("data-controller", CONTROLLER)
            .attr("aria-disabled", "true")
            .bool_attr(SERVER_DISABLED_ATTR, true);
        let mut controller = connected(&link, false);
        assert_eq!(controller.state(), LoadingState::Disabled);
        assert_eq!(controller.click(), ClickOutcome::Suppressed);
    }

    #[test]
    fn test_server_disabled_marker_read_from_element() {
        let element = button("button", true)
            .bool_attr("disabled", true)
            .bool_attr(SERVER_DISABLED_ATTR, true);
        let controller = LoadingController::from_element(&element, false);
        assert!(controller.is_server_disabled());
        assert!(controller.is_disabled());
    }

    #[test]
    fn test_unrelated_events_ignored() {
        let element = button("button", true);
        let mut controller = connected(&element, false);
        assert!(!controller.lifecycle(TOGGLE));
        controller.click();
        assert!(!controller.lifecycle(DISMISS));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_disconnected_ignores_events() {
        let element = button("button", true);
        let mut controller = LoadingController::from_element(&element, false);
        controller.click();
        assert_eq!(controller.state(), LoadingState::Idle);
    }
}
