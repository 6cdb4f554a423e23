//! Navigation state machine.
//!
//! # Module Structure
//!
//! - `screen`: the closed set of screens (`Screen`)
//! - `event`: events the presentation layer dispatches (`NavEvent`)
//! - `status`: transient workflow sub-states (`BiometricStatus`, `CameraStatus`)
//! - `reducer`: the pure `(NavContext, NavEvent) -> Transition` function
//!   and the continuous logged-out-means-login invariant

mod event;
mod reducer;
mod screen;
mod status;

pub use event::NavEvent;
pub use reducer::{NavContext, Transition, enforce_session, reduce};
pub use screen::Screen;
pub use status::{BiometricStatus, CameraStatus, NavigationState};
