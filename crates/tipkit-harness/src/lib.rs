#![forbid(unsafe_code)]

//! Deterministic virtual-time harness for tooltip lifecycles.
//!
//! Mount a [`Tooltip`], feed it hover input, step a [`VirtualClock`], and
//! query what a host would see in its render tree.
//!
//! # Quick Start
//!
//! ```
//! use tipkit_harness::{QueryOptions, TooltipHarness};
//! use tipkit_widgets::{Role, Tooltip, TooltipConfig};
//!
//! let mut h = TooltipHarness::render(
//!     Tooltip::new("message")
//!         .child("some child")
//!         .config(TooltipConfig::default().delay_ms(200)),
//! );
//! assert!(h.get_by_role(Role::Tooltip, QueryOptions::hidden()).is_ok());
//!
//! h.mouse_enter();
//! h.advance_timers_by_time(400);
//! assert!(h.get_by_role(Role::Tooltip, QueryOptions::default()).is_ok());
//! ```
//!
//! # Timer Semantics
//!
//! [`TooltipHarness::advance_timers_by_time`] delivers every timer that
//! comes due inside the window, each at its own deadline, before landing on
//! the end of the window.

use std::fmt;

use tipkit_core::VisibilityChange;
use tipkit_core::VisibilityConfig;
use tipkit_core::clock::{Clock, VirtualClock};
use tipkit_core::event::Event;
use tipkit_widgets::{Overlay, Role, Tooltip, TooltipState};

/// Filters for role queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Also match overlays that are present but hidden.
    pub hidden: bool,
}

impl QueryOptions {
    /// Options that include hidden overlays.
    #[must_use]
    pub const fn hidden() -> Self {
        Self { hidden: true }
    }
}

/// Where a text query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// The wrapped child.
    Trigger,
    /// The overlay message (hidden or not).
    Overlay,
}

/// A `get_by_*` query found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Role { role: Role, hidden: bool },
    Text(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role { role, hidden } => {
                write!(f, "unable to find an element with role \"{role}\"")?;
                if !hidden {
                    f.write_str(" (hidden elements excluded)")?;
                }
                Ok(())
            }
            Self::Text(text) => write!(f, "unable to find an element with text \"{text}\""),
        }
    }
}

impl std::error::Error for QueryError {}

/// A timestamped visibility change observed by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedChange {
    pub at_ms: u64,
    pub change: VisibilityChange,
}

/// One mounted tooltip driven by a virtual clock.
#[derive(Debug)]
pub struct TooltipHarness {
    clock: VirtualClock,
    state: TooltipState,
    changes: Vec<TimedChange>,
}

impl TooltipHarness {
    /// Mount `tooltip` with default delays at t = 0.
    #[must_use]
    pub fn render(tooltip: Tooltip) -> Self {
        Self::render_with(tooltip, VisibilityConfig::default())
    }

    /// Mount `tooltip` with explicit baseline delays at t = 0.
    #[must_use]
    pub fn render_with(tooltip: Tooltip, baseline: VisibilityConfig) -> Self {
        Self {
            clock: VirtualClock::new(),
            state: TooltipState::mount(&tooltip, &baseline),
            changes: Vec::new(),
        }
    }

    /// Re-render with a new description.
    pub fn rerender(&mut self, tooltip: Tooltip) {
        let change = self.state.rerender(&tooltip);
        self.record(change);
    }

    /// Unmount. Later queries find nothing.
    pub fn unmount(&mut self) {
        let change = self.state.unmount();
        self.record(change);
    }

    /// Synthetic hover start on the child.
    pub fn mouse_enter(&mut self) {
        let change = self.state.mouse_enter(self.clock.now_ms());
        self.record(change);
    }

    /// Synthetic hover end on the child.
    pub fn mouse_leave(&mut self) {
        let change = self.state.mouse_leave(self.clock.now_ms());
        self.record(change);
    }

    /// Feed a positioned pointer or focus event at the current time.
    pub fn pointer(&mut self, event: Event) {
        let change = self.state.handle_event(&event, self.clock.now_ms());
        self.record(change);
    }

    /// Step virtual time, firing due timers in order.
    pub fn advance_timers_by_time(&mut self, ms: u64) {
        let target = self.clock.now_ms().saturating_add(ms);
        while let Some(deadline) = self.state.next_deadline().filter(|&d| d <= target) {
            let now = self.clock.set(deadline);
            let change = self.state.tick(now);
            self.record(change);
        }
        self.clock.set(target);
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Overlay with `role`, honoring `options.hidden`.
    #[must_use]
    pub fn query_by_role(&self, role: Role, options: QueryOptions) -> Option<Overlay<'_>> {
        self.state
            .overlay()
            .filter(|overlay| overlay.role == role && (options.hidden || !overlay.hidden))
    }

    /// Like [`query_by_role`](Self::query_by_role) but missing is an error.
    pub fn get_by_role(&self, role: Role, options: QueryOptions) -> Result<Overlay<'_>, QueryError> {
        self.query_by_role(role, options).ok_or(QueryError::Role {
            role,
            hidden: options.hidden,
        })
    }

    /// Find `text` in the child or the overlay message.
    #[must_use]
    pub fn query_by_text(&self, text: &str) -> Option<TextMatch> {
        if self.state.trigger() == Some(text) {
            return Some(TextMatch::Trigger);
        }
        self.state
            .overlay()
            .filter(|overlay| overlay.message == text)
            .map(|_| TextMatch::Overlay)
    }

    /// Like [`query_by_text`](Self::query_by_text) but missing is an error.
    pub fn get_by_text(&self, text: &str) -> Result<TextMatch, QueryError> {
        self.query_by_text(text)
            .ok_or_else(|| QueryError::Text(text.to_string()))
    }

    /// Every visibility change so far, in order.
    #[must_use]
    pub fn changes(&self) -> &[TimedChange] {
        &self.changes
    }

    /// The mounted state, for assertions the queries don't cover.
    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    fn record(&mut self, change: Option<VisibilityChange>) {
        if let Some(change) = change {
            self.changes.push(TimedChange {
                at_ms: self.clock.now_ms(),
                change,
            });
        }
    }
}
