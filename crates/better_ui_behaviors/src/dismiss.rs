//! Dismiss / auto-dismiss behaviour for message banners
//!
//! ```text
//!             DISMISS | TIMER_EXPIRED          FADE_COMPLETE
//!   Visible ───────────────────────► Dismissing ─────────────► Removed
//! ```
//!
//! Connecting a visible banner starts the auto-dismiss countdown when one is
//! configured. Entering `Dismissing` cancels the countdown, applies the
//! opacity transition and schedules the fade timer; the fade timer moves the
//! banner to `Removed`, which detaches it from the tree. Because `Dismissing`
//! has no `DISMISS`/`TIMER_EXPIRED` transition, a manual dismiss racing the
//! countdown starts exactly one removal sequence.

use std::time::Duration;

use better_ui_core::Element;

use crate::root::RootRef;
use crate::timer::{TimerId, TimerQueue};
use crate::transitions::{event_types, StateTransitions};

/// `data-controller` value of a dismissible banner
pub const CONTROLLER: &str = "bui-action-messages";
/// Auto-dismiss delay in seconds
pub const AUTO_DISMISS_ATTR: &str = "data-bui-action-messages-auto-dismiss-value";
/// `data-action` value of the dismiss control
pub const DISMISS_ACTION: &str = "bui-action-messages#dismiss";
/// Default opacity transition length
pub const DEFAULT_FADE: Duration = Duration::from_millis(300);
/// Class applied while fading out
pub const FADING_CLASS: &str = "opacity-0";

/// Banner lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DismissState {
    #[default]
    Visible,
    Dismissing,
    Removed,
}

impl StateTransitions for DismissState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (DismissState::Visible, DISMISS | TIMER_EXPIRED) => Some(DismissState::Dismissing),
            (DismissState::Dismissing, FADE_COMPLETE) => Some(DismissState::Removed),
            _ => None,
        }
    }
}

fn is_root(element: &Element) -> bool {
    element.attr_value("data-controller") == Some(CONTROLLER)
}

/// Dismiss controller for one banner element
#[derive(Debug)]
pub struct DismissController {
    state: DismissState,
    root: Option<RootRef>,
    auto_dismiss: Option<Duration>,
    fade: Duration,
    countdown: Option<TimerId>,
    fade_timer: Option<TimerId>,
    connected: bool,
    removal_sequences: u32,
}

impl DismissController {
    /// Create a controller; a zero auto-dismiss delay disables the countdown
    pub fn new(auto_dismiss: Option<Duration>) -> Self {
        Self {
            state: DismissState::Visible,
            root: None,
            auto_dismiss: auto_dismiss.filter(|delay| !delay.is_zero()),
            fade: DEFAULT_FADE,
            countdown: None,
            fade_timer: None,
            connected: false,
            removal_sequences: 0,
        }
    }

    /// Create a controller for the first banner in the tree
    pub fn from_element(element: &Element) -> Self {
        match RootRef::first(element, is_root) {
            Some(root) => Self::from_root(element, root),
            None => Self::new(None),
        }
    }

    /// Create one controller per banner in the tree, in document order
    pub fn all_from_element(element: &Element) -> Vec<Self> {
        RootRef::all(element, is_root)
            .into_iter()
            .map(|root| Self::from_root(element, root))
            .collect()
    }

    /// Create a controller bound to one banner
    ///
    /// Reads the auto-dismiss seconds from the banner. Missing, non-numeric,
    /// non-positive or out-of-range values mean no countdown.
    pub fn from_root(tree: &Element, root: RootRef) -> Self {
        let auto_dismiss = root
            .get(tree, is_root)
            .and_then(|banner| banner.attr_value(AUTO_DISMISS_ATTR))
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| *seconds > 0.0)
            .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok());
        Self {
            root: Some(root),
            ..Self::new(auto_dismiss)
        }
    }

    /// Override the fade duration
    pub fn with_fade_duration(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Attach to the tree, starting the countdown if configured
    pub fn connect(&mut self, timers: &mut TimerQueue) {
        if self.connected {
            return;
        }
        self.connected = true;

        if self.state == DismissState::Visible {
            if let Some(delay) = self.auto_dismiss {
                tracing::debug!(?delay, "auto-dismiss countdown started");
                self.countdown = Some(timers.schedule(delay));
            }
        }
    }

    /// Explicit dismiss action; returns true if it started the removal
    pub fn dismiss(&mut self, timers: &mut TimerQueue) -> bool {
        if !self.connected {
            return false;
        }
        self.transition(event_types::DISMISS, timers)
    }

    /// Deliver a fired timer; ids this controller does not own are ignored
    pub fn handle_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> bool {
        if !self.connected {
            return false;
        }
        if self.countdown == Some(id) {
            self.countdown = None;
            return self.transition(event_types::TIMER_EXPIRED, timers);
        }
        if self.fade_timer == Some(id) {
            self.fade_timer = None;
            return self.transition(event_types::FADE_COMPLETE, timers);
        }
        false
    }

    /// Detach from the tree, clearing every pending timer
    pub fn disconnect(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.countdown.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.fade_timer.take() {
            timers.cancel(id);
        }
        self.connected = false;
    }

    fn transition(&mut self, event: u32, timers: &mut TimerQueue) -> bool {
        let Some(next) = self.state.on_event(event) else {
            return false;
        };
        tracing::debug!(from = ?self.state, to = ?next, event, "dismiss transition");
        self.state = next;

        if next == DismissState::Dismissing {
            if let Some(id) = self.countdown.take() {
                timers.cancel(id);
            }
            self.removal_sequences += 1;
            self.fade_timer = Some(timers.schedule(self.fade));
        }
        true
    }

    pub fn state(&self) -> DismissState {
        self.state
    }

    pub fn is_removed(&self) -> bool {
        self.state == DismissState::Removed
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Configured countdown, if any
    pub fn auto_dismiss(&self) -> Option<Duration> {
        self.auto_dismiss
    }

    /// Number of removal sequences started (at most one)
    pub fn removal_sequences(&self) -> u32 {
        self.removal_sequences
    }

    /// Returns true if a countdown or fade timer is pending
    pub fn has_pending_timers(&self) -> bool {
        self.countdown.is_some() || self.fade_timer.is_some()
    }

    /// The banner this controller is bound to, if it was built from markup
    pub fn root(&self) -> Option<&RootRef> {
        self.root.as_ref()
    }

    /// Reflect the current state onto the tree containing the banner
    ///
    /// `Dismissing` adds the fading class to the bound banner; `Removed`
    /// detaches it from `tree`. Other banners are left alone, and a
    /// controller created with [`DismissController::new`] touches nothing.
    pub fn apply(&self, tree: &mut Element) {
        let Some(root) = &self.root else {
            return;
        };
        match self.state {
            DismissState::Visible => {}
            DismissState::Dismissing => {
                if let Some(banner) = root.get_mut(tree, is_root) {
                    banner.add_class(FADING_CLASS);
                }
            }
            DismissState::Removed => {
                if root.detach(tree, is_root) {
                    tracing::debug!(?root, "banner detached");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use better_ui_core::el;

    fn run(controller: &mut DismissController, timers: &mut TimerQueue, elapsed: Duration) {
        for id in timers.advance(elapsed) {
            controller.handle_timer(id, timers);
        }
    }

    #[test]
    fn test_transition_table() {
        use event_types::*;
        assert_eq!(
            DismissState::Visible.on_event(DISMISS),
            Some(DismissState::Dismissing)
        );
        assert_eq!(
            DismissState::Visible.on_event(TIMER_EXPIRED),
            Some(DismissState::Dismissing)
        );
        assert_eq!(DismissState::Dismissing.on_event(DISMISS), None);
        assert_eq!(DismissState::Dismissing.on_event(TIMER_EXPIRED), None);
        assert_eq!(
            DismissState::Dismissing.on_event(FADE_COMPLETE),
            Some(DismissState::Removed)
        );
        assert_eq!(DismissState::Removed.on_event(DISMISS), None);
    }

    #[test]
    fn test_auto_dismiss_removes_after_fade() {
        let mut timers = TimerQueue::new();
        let mut controller = DismissController::new(Some(Duration::from_secs(5)));
        controller.connect(&mut timers);

        run(&mut controller, &mut timers, Duration::from_millis(4999));
        assert_eq!(controller.state(), DismissState::Visible);

        run(&mut controller, &mut timers, Duration::from_millis(1));
        assert_eq!(controller.state(), DismissState::Dismissing);

        run(&mut controller, &mut timers, Duration::from_millis(300));
        assert!(controller.is_removed());
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn test_no_countdown_without_duration() {
        let mut timers = TimerQueue::new();
        let mut controller = DismissController::new(Some(Duration::ZERO));
        controller.connect(&mut timers);
        assert_eq!(timers.pending_count(), 0);
        assert_eq!(controller.auto_dismiss(), None);

        run(&mut controller, &mut timers, Duration::from_secs(60));
        assert_eq!(controller.state(), DismissState::Visible);
    }

    #[test]
    fn test_manual_dismiss_cancels_countdown() {
        let mut timers = TimerQueue::new();
        let mut controller = DismissController::new(Some(Duration::from_secs(5)));
        controller.connect(&mut timers);

        assert!(controller.dismiss(&mut timers));
        // Only the fade timer remains
        assert_eq!(timers.pending_count(), 1);

        run(&mut controller, &mut timers, Duration::from_millis(300));
        assert!(controller.is_removed());
        assert_eq!(controller.removal_sequences(), 1);
    }

    #[test]
    fn test_timer_and_manual_dismiss_remove_once() {
        let mut timers = TimerQueue::new();
        let mut controller = DismissController::new(Some(Duration::from_secs(5)));
        controller.connect(&mut timers);

        let fired = timers.advance(Duration::from_secs(5));
        assert_eq!(fired.len(), 1);

        // The user clicks dismiss before the fired countdown is delivered
        assert!(controller.dismiss(&mut timers));
        for id in fired {
            assert!(!controller.handle_timer(id, &mut timers));
        }
        assert!(!controller.dismiss(&mut timers));

        run(&mut controller, &mut timers, Duration::from_millis(300));
        assert!(controller.is_removed());
        assert_eq!(controller.removal_sequences(), 1);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn test_disconnect_clears_timers() {
        let mut timers = TimerQueue::new();
        let mut controller = DismissController::new(Some(Duration::from_secs(5)));
        controller.connect(&mut timers);
        assert!(controller.has_pending_timers());

        controller.disconnect(&mut timers);
        assert!(!controller.has_pending_timers());
        assert_eq!(timers.pending_count(), 0);

        run(&mut controller, &mut timers, Duration::from_secs(10));
        assert_eq!(controller.state(), DismissState::Visible);
        assert!(!controller.dismiss(&mut timers));
    }

    #[test]
    fn test_disconnect_during_fade() {
        let mut timers = TimerQueue::new();
        let mut controller = DismissController::new(None);
        controller.connect(&mut timers);
        controller.dismiss(&mut timers);
        controller.disconnect(&mut timers);

        run(&mut controller, &mut timers, Duration::from_secs(1));
        assert_eq!(controller.state(), DismissState::Dismissing);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn test_custom_fade_duration() {
        let mut timers = TimerQueue::new();
        let mut controller =
            DismissController::new(None).with_fade_duration(Duration::from_millis(100));
        controller.connect(&mut timers);
        controller.dismiss(&mut timers);

        run(&mut controller, &mut timers, Duration::from_millis(100));
        assert!(controller.is_removed());
    }

    #[test]
    fn test_from_element_reads_duration() {
        let banner = el("div")
            .attr("data-controller", CONTROLLER)
            .attr(AUTO_DISMISS_ATTR, "2.5");
        let controller = DismissController::from_element(&el("main").child(banner));
        assert_eq!(controller.auto_dismiss(), Some(Duration::from_millis(2500)));

        for bad in ["0.0", "-1", "soon", ""] {
            let banner = el("div")
                .attr("data-controller", CONTROLLER)
                .attr(AUTO_DISMISS_ATTR, bad);
            assert_eq!(DismissController::from_element(&banner).auto_dismiss(), None);
        }
    }

    #[test]
    fn test_out_of_range_duration_disables_countdown() {
        for huge in ["1e20", "1.7976931348623157e308", "inf"] {
            let banner = el("div")
                .attr("data-controller", CONTROLLER)
                .attr(AUTO_DISMISS_ATTR, huge);
            let mut controller = DismissController::from_element(&banner);
            assert_eq!(controller.auto_dismiss(), None);

            let mut timers = TimerQueue::new();
            controller.connect(&mut timers);
            assert!(!controller.has_pending_timers());
        }
    }

    #[test]
    fn test_dismissing_one_banner_keeps_the_other() {
        let banner = |text: &str| el("div").attr("data-controller", CONTROLLER).text(text);
        let mut tree = el("main").child(banner("first")).child(banner("second"));

        let mut timers = TimerQueue::new();
        let mut first = DismissController::from_element(&tree);
        first.connect(&mut timers);
        first.dismiss(&mut timers);
        first.apply(&mut tree);
        let banners = tree.find_all(is_root);
        assert!(banners[0].has_class(FADING_CLASS));
        assert!(!banners[1].has_class(FADING_CLASS));

        run(&mut first, &mut timers, DEFAULT_FADE);
        first.apply(&mut tree);
        assert_eq!(tree.find_all(is_root).len(), 1);
        assert_eq!(tree.text_content(), "second");

        let mut second = DismissController::from_element(&tree);
        assert_eq!(second.root(), Some(&RootRef::Path(vec![0])));
        second.connect(&mut timers);
        second.dismiss(&mut timers);
        run(&mut second, &mut timers, DEFAULT_FADE);
        second.apply(&mut tree);
        assert_eq!(tree.to_html(), "<main></main>");
    }

    #[test]
    fn test_banners_with_ids_detach_in_any_order() {
        let banner = |id: &str| {
            el("div")
                .attr("id", id.to_string())
                .attr("data-controller", CONTROLLER)
                .attr(AUTO_DISMISS_ATTR, if id == "a" { "1" } else { "2" })
                .text(id.to_string())
        };
        let mut tree = el("main").child(banner("a")).child(banner("b"));

        let mut timers = TimerQueue::new();
        let mut controllers = DismissController::all_from_element(&tree);
        assert_eq!(controllers.len(), 2);
        assert_eq!(controllers[1].auto_dismiss(), Some(Duration::from_secs(2)));
        for controller in &mut controllers {
            controller.connect(&mut timers);
        }

        let (a, b) = controllers.split_at_mut(1);
        b[0].dismiss(&mut timers);
        run(&mut b[0], &mut timers, DEFAULT_FADE);
        b[0].apply(&mut tree);
        assert_eq!(tree.text_content(), "a");

        run(&mut a[0], &mut timers, Duration::from_secs(1));
        assert_eq!(a[0].state(), DismissState::Dismissing);
        run(&mut a[0], &mut timers, DEFAULT_FADE);
        a[0].apply(&mut tree);
        assert_eq!(tree.to_html(), "<main></main>");
    }

    #[test]
    fn test_apply_fades_then_detaches() {
        let mut tree = el("main")
            .child(el("div").attr("data-controller", CONTROLLER).text("Saved"))
            .child(el("p").text("rest"));

        let mut timers = TimerQueue::new();
        let mut controller = DismissController::from_element(&tree);
        controller.connect(&mut timers);
        controller.dismiss(&mut timers);
        controller.apply(&mut tree);
        assert!(tree.find(is_root).unwrap().has_class(FADING_CLASS));

        run(&mut controller, &mut timers, DEFAULT_FADE);
        controller.apply(&mut tree);
        assert!(tree.find(is_root).is_none());
        assert_eq!(tree.to_html(), "<main><p>rest</p></main>");
    }
}
