//! State transition tables
//!
//! Every behaviour state is a small enum implementing [`StateTransitions`]:
//! a pure table from `(state, event)` to the next state. Controllers own
//! the side effects (timers, attribute patches) and consult the table for
//! every event, so an event that does not appear in the table is a no-op.
//!
//! ```ignore
//! impl StateTransitions for Visibility {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         use event_types::*;
//!         match (self, event) {
//!             (Visibility::Obscured, TOGGLE) => Some(Visibility::Revealed),
//!             (Visibility::Revealed, TOGGLE) => Some(Visibility::Obscured),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use std::hash::Hash;

/// Trait for behaviour states that handle event transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Event identifiers delivered to behaviour controllers
pub mod event_types {
    /// Explicit dismiss action
    pub const DISMISS: u32 = 2;
    /// Auto-dismiss countdown expired
    pub const TIMER_EXPIRED: u32 = 3;
    /// Fade-out transition finished
    pub const FADE_COMPLETE: u32 = 4;
    /// Loading started (click on a standalone control or form submit)
    pub const LOADING_START: u32 = 5;
    /// Form submission finished
    pub const SUBMIT_END: u32 = 6;
    /// Frame finished loading
    pub const FRAME_LOAD: u32 = 7;
    /// A stream response is about to render
    pub const BEFORE_STREAM_RENDER: u32 = 8;
    /// Reset while the server holds the control disabled
    pub const SERVER_LOCK: u32 = 9;
    /// Visibility toggle pressed
    pub const TOGGLE: u32 = 10;
}
