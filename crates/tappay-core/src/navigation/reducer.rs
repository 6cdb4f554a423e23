//! Pure navigation reducer.
//!
//! The reducer answers one question: given the facts the guards need,
//! is this event legal, and which screen does it land on? It never
//! touches the store. Events whose workflows involve delays (biometric
//! approval, QR scanning) are still answered here for legality; the
//! workflow performs the actual transition when it completes.

use super::event::NavEvent;
use super::screen::Screen;
use crate::error::TapPayError;

/// The facts navigation guards depend on, snapshotted from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    pub screen: Screen,
    pub logged_in: bool,
    pub has_pending: bool,
}

/// Outcome of reducing one event.
#[derive(Debug, Clone)]
pub enum Transition {
    /// The event is legal and lands on this screen.
    Goto(Screen),
    /// The event is legal but does not change the screen.
    Stay,
    /// The event's precondition does not hold.
    Denied(TapPayError),
}

/// Continuous session invariant: while not logged in, no screen other
/// than `Login` is ever shown. Checked on every dispatch, not just on
/// logout.
pub fn enforce_session(ctx: &NavContext) -> Option<Screen> {
    if !ctx.logged_in && ctx.screen != Screen::Login {
        Some(Screen::Login)
    } else {
        None
    }
}

/// Reduces one event against the current context.
pub fn reduce(ctx: &NavContext, event: &NavEvent) -> Transition {
    use Screen::*;

    match event {
        NavEvent::LoginSubmit { name } => {
            if ctx.screen != Login {
                deny(event, ctx, "already logged in")
            } else if name.trim().is_empty() {
                // Surfaced as an inline validation message by the caller.
                Transition::Stay
            } else {
                Transition::Goto(Home)
            }
        }
        NavEvent::GoHome => require_login(ctx, event, Home),
        NavEvent::GoTransfer => require_login(ctx, event, Transfer),
        NavEvent::GoHistory => require_login(ctx, event, History),
        NavEvent::ContinueToConfirm => {
            if ctx.screen == Transfer {
                Transition::Goto(Confirm)
            } else {
                deny(event, ctx, "only reachable from the transfer form")
            }
        }
        NavEvent::ApproveTransfer => {
            if ctx.screen != Confirm {
                deny(event, ctx, "only reachable from the confirmation screen")
            } else if !ctx.has_pending {
                // Graceful degrade: confirming with nothing staged
                // redirects back to the transfer form instead of failing.
                Transition::Goto(Transfer)
            } else {
                Transition::Goto(Success)
            }
        }
        NavEvent::CancelConfirm => {
            if ctx.screen == Confirm {
                Transition::Goto(Transfer)
            } else {
                deny(event, ctx, "nothing to cancel")
            }
        }
        NavEvent::Back => match ctx.screen {
            Transfer => Transition::Goto(Home),
            Confirm => Transition::Goto(Transfer),
            History => Transition::Goto(Home),
            Success => Transition::Goto(Home),
            Offline => Transition::Goto(Transfer),
            OfflineSuccess => Transition::Goto(Transfer),
            Login | Home => Transition::Stay,
        },
        NavEvent::GoOffline => {
            if ctx.screen == Transfer {
                Transition::Goto(Offline)
            } else {
                deny(event, ctx, "only reachable from the transfer form")
            }
        }
        NavEvent::StartQrScan => {
            if ctx.screen == Offline {
                Transition::Goto(OfflineSuccess)
            } else {
                deny(event, ctx, "only reachable from the offline screen")
            }
        }
        NavEvent::Logout => Transition::Goto(Login),
    }
}

fn require_login(ctx: &NavContext, event: &NavEvent, target: Screen) -> Transition {
    if ctx.logged_in {
        Transition::Goto(target)
    } else {
        deny(event, ctx, "requires login")
    }
}

fn deny(event: &NavEvent, ctx: &NavContext, reason: &str) -> Transition {
    Transition::Denied(TapPayError::navigation_guard(
        event.name(),
        ctx.screen.name(),
        reason,
    ))
}
