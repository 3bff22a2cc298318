//! # BetterUi Behaviours
//!
//! The client-side behaviours of BetterUi components, expressed as
//! explicit state machines:
//!
//! - **Dismiss** (`bui-action-messages`): optional auto-dismiss countdown,
//!   fade, removal
//! - **Loading** (`bui-button`): spinner swap and disabling on click or
//!   form submit, reset on submission lifecycle events
//! - **Password** (`bui-password`): obscured/revealed input toggle
//!
//! Each controller is scoped to one rendered element, held as a
//! [`RootRef`]. It reads its configuration from the element's data
//! attributes, receives events from
//! the host, and can [`apply`](dismiss::DismissController::apply) its state
//! back onto the element tree. Time is simulated with an explicit
//! [`TimerQueue`], and every timer-holding controller clears its own
//! handles on `disconnect`.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use better_ui_behaviors::{DismissController, DismissState, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let mut banner = DismissController::new(Some(Duration::from_secs(5)));
//! banner.connect(&mut timers);
//!
//! for id in timers.advance(Duration::from_secs(5)) {
//!     banner.handle_timer(id, &mut timers);
//! }
//! assert_eq!(banner.state(), DismissState::Dismissing);
//!
//! for id in timers.advance(Duration::from_millis(300)) {
//!     banner.handle_timer(id, &mut timers);
//! }
//! assert!(banner.is_removed());
//! ```

pub mod dismiss;
pub mod loading;
pub mod password;
pub mod root;
pub mod timer;
pub mod transitions;

pub use dismiss::{DismissController, DismissState};
pub use loading::{ClickOutcome, LoadingController, LoadingState};
pub use password::{PasswordToggle, Visibility};
pub use root::RootRef;
pub use timer::{TimerId, TimerQueue};
pub use transitions::{event_types, StateTransitions};
