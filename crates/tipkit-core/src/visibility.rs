#![forbid(unsafe_code)]

//! Delayed show/hide visibility state machine.
//!
//! Hover intent is debounced in both directions: entering the trigger arms a
//! show timer, leaving arms a hide timer, and any newer intent cancels the
//! older one before it can fire.
//!
//! # Invariants
//!
//! 1. Empty content ⇒ state is `Hidden` and nothing is scheduled.
//! 2. At most one timer is pending, and one is pending iff the state is
//!    `PendingShow` or `PendingHide`.
//! 3. After [`DelayedVisibility::destroy`] nothing is scheduled and every
//!    operation is a no-op.
//!
//! # Transition Table
//!
//! | State       | hover enter            | hover leave          | timer fires |
//! |-------------|------------------------|----------------------|-------------|
//! | Hidden      | → PendingShow (content)| –                    | –           |
//! | PendingShow | –                      | cancel → Hidden      | → Shown     |
//! | Shown       | –                      | → PendingHide        | –           |
//! | PendingHide | cancel → Shown         | –                    | → Hidden    |
//!
//! # Example
//!
//! ```
//! use tipkit_core::{DelayedVisibility, VisibilityConfig};
//!
//! let mut tip = DelayedVisibility::new("Save", VisibilityConfig::default().show_delay_ms(200));
//! tip.on_hover_enter(0);
//! assert!(!tip.is_visible());
//! tip.advance(200);
//! assert!(tip.is_visible());
//! ```

use std::fmt;

use crate::config::VisibilityConfig;
use crate::timer::{TimerId, TimerSlot};

/// Visibility phase of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibilityState {
    /// Not on screen, nothing scheduled.
    #[default]
    Hidden,
    /// Hovered; waiting out the show delay.
    PendingShow,
    /// On screen.
    Shown,
    /// Still on screen; waiting out the hide delay.
    PendingHide,
}

impl VisibilityState {
    /// True while the overlay should be drawn.
    ///
    /// `PendingHide` counts as visible: the hide delay keeps the tooltip up.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Shown | Self::PendingHide)
    }

    /// True in the two states that own a timer.
    #[inline]
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::PendingShow | Self::PendingHide)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::PendingShow => "pending_show",
            Self::Shown => "shown",
            Self::PendingHide => "pending_hide",
        }
    }
}

impl fmt::Display for VisibilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What caused a [`VisibilityChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    HoverEnter,
    HoverLeave,
    /// The show or hide delay elapsed.
    TimerFired,
    /// The message was set to the empty string.
    ContentCleared,
    Destroyed,
}

/// A state transition reported back to the host so it knows to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub from: VisibilityState,
    pub to: VisibilityState,
    pub cause: ChangeCause,
}

impl VisibilityChange {
    /// True if the change flips whether the overlay is drawn.
    #[must_use]
    pub const fn toggles_visibility(&self) -> bool {
        self.from.is_visible() != self.to.is_visible()
    }
}

/// Payload carried by the timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Show,
    Hide,
}

/// Delayed show/hide controller for one tooltip instance.
#[derive(Debug, Clone)]
pub struct DelayedVisibility {
    content: String,
    config: VisibilityConfig,
    state: VisibilityState,
    timer: TimerSlot<Transition>,
    destroyed: bool,
}

impl DelayedVisibility {
    /// Create a controller in the `Hidden` state.
    #[must_use]
    pub fn new(content: impl Into<String>, config: VisibilityConfig) -> Self {
        Self {
            content: content.into(),
            config,
            state: VisibilityState::Hidden,
            timer: TimerSlot::new(),
            destroyed: false,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// True while the overlay should be drawn.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// The message.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// False when the message is empty; hover input is ignored then.
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Active delays.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Deadline of the pending transition, if any.
    #[inline]
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Id of the pending timer, if any.
    #[inline]
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.pending_id()
    }

    /// True once [`destroy`](Self::destroy) has run.
    #[inline]
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Pointer entered the trigger.
    pub fn on_hover_enter(&mut self, now_ms: u64) -> Option<VisibilityChange> {
        if self.destroyed || !self.has_content() {
            return None;
        }
        match self.state {
            VisibilityState::Hidden => {
                self.schedule(Transition::Show, now_ms, self.config.show_delay_ms);
                self.set_state(VisibilityState::PendingShow, ChangeCause::HoverEnter)
            }
            VisibilityState::PendingHide => {
                self.cancel_timer();
                self.set_state(VisibilityState::Shown, ChangeCause::HoverEnter)
            }
            VisibilityState::PendingShow | VisibilityState::Shown => None,
        }
    }

    /// Pointer left the trigger.
    pub fn on_hover_leave(&mut self, now_ms: u64) -> Option<VisibilityChange> {
        if self.destroyed {
            return None;
        }
        match self.state {
            VisibilityState::PendingShow => {
                self.cancel_timer();
                self.set_state(VisibilityState::Hidden, ChangeCause::HoverLeave)
            }
            VisibilityState::Shown => {
                self.schedule(Transition::Hide, now_ms, self.config.hide_delay_ms);
                self.set_state(VisibilityState::PendingHide, ChangeCause::HoverLeave)
            }
            VisibilityState::Hidden | VisibilityState::PendingHide => None,
        }
    }

    /// Deliver the pending transition if its deadline is `<= now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Option<VisibilityChange> {
        if self.destroyed {
            return None;
        }
        let (id, transition) = self.timer.fire_due(now_ms)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(timer = %id, ?transition, now_ms, "timer fired");
        #[cfg(not(feature = "tracing"))]
        let _ = id;
        match (transition, self.state) {
            (Transition::Show, VisibilityState::PendingShow) => {
                self.set_state(VisibilityState::Shown, ChangeCause::TimerFired)
            }
            (Transition::Hide, VisibilityState::PendingHide) => {
                self.set_state(VisibilityState::Hidden, ChangeCause::TimerFired)
            }
            // Every state change that abandons a pending phase cancels its
            // timer, so a mismatched payload cannot be observed here.
            _ => None,
        }
    }

    /// Replace the message.
    ///
    /// Clearing it hides immediately and cancels any timer. Setting a
    /// message never shows the tooltip on its own; a hover must follow.
    pub fn set_content(&mut self, content: impl Into<String>) -> Option<VisibilityChange> {
        if self.destroyed {
            return None;
        }
        let content = content.into();
        if !content.is_empty() {
            self.content = content;
            return None;
        }
        self.content.clear();
        self.cancel_timer();
        self.set_state(VisibilityState::Hidden, ChangeCause::ContentCleared)
    }

    /// Change the show delay. Only future hover-enters use the new value.
    pub fn set_show_delay_ms(&mut self, ms: u64) {
        self.config.show_delay_ms = ms;
    }

    /// Cancel everything and stop reacting. Idempotent.
    pub fn destroy(&mut self) -> Option<VisibilityChange> {
        if self.destroyed {
            return None;
        }
        self.cancel_timer();
        let change = self.set_state(VisibilityState::Hidden, ChangeCause::Destroyed);
        self.destroyed = true;
        self.content = String::new();
        change
    }

    fn schedule(&mut self, transition: Transition, now_ms: u64, delay_ms: u64) {
        let id = self.timer.schedule(transition, now_ms, delay_ms);
        #[cfg(feature = "tracing")]
        tracing::trace!(timer = %id, ?transition, now_ms, delay_ms, "timer scheduled");
        #[cfg(not(feature = "tracing"))]
        let _ = id;
    }

    fn cancel_timer(&mut self) {
        let cancelled = self.timer.cancel();
        #[cfg(feature = "tracing")]
        if let Some(id) = cancelled {
            tracing::trace!(timer = %id, "timer cancelled");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = cancelled;
    }

    fn set_state(&mut self, to: VisibilityState, cause: ChangeCause) -> Option<VisibilityChange> {
        let from = self.state;
        self.state = to;
        debug_assert_eq!(
            self.timer.is_pending(),
            to.is_pending(),
            "timer occupancy out of sync with {to}"
        );
        debug_assert!(
            self.has_content() || to == VisibilityState::Hidden,
            "empty content must stay hidden"
        );
        if from == to {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %from, to = %to, ?cause, "tooltip visibility changed");
        Some(VisibilityChange { from, to, cause })
    }
}
