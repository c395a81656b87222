#![forbid(unsafe_code)]

//! Tooltip widget: a message attached to a trigger that appears after a
//! hover delay.
//!
//! [`Tooltip`] is the immutable description a host builds every frame.
//! [`TooltipState`] is the mounted instance that owns the visibility
//! controller and survives re-renders.
//!
//! # Invariants
//!
//! 1. An empty message produces no overlay at all, not a hidden one.
//! 2. A non-empty message produces an overlay while mounted, hidden until
//!    the show delay has elapsed on a hover.
//! 3. After [`TooltipState::unmount`] there is no overlay, no trigger, and
//!    no pending timer.
//!
//! # Example
//!
//! ```
//! use tipkit_core::VisibilityConfig;
//! use tipkit_widgets::{Tooltip, TooltipConfig, TooltipState};
//!
//! let tooltip = Tooltip::new("Save changes (Ctrl+S)")
//!     .child("Save")
//!     .config(TooltipConfig::default().delay_ms(300));
//! let mut state = TooltipState::mount(&tooltip, &VisibilityConfig::default());
//! state.mouse_enter(0);
//! state.tick(300);
//! assert!(state.overlay().is_some_and(|o| !o.hidden));
//! ```

use std::fmt;

use tipkit_core::event::{Event, HoverEvent};
use tipkit_core::geometry::Rect;
use tipkit_core::hover::HoverTracker;
use tipkit_core::{DelayedVisibility, VisibilityChange, VisibilityConfig};

/// Per-tooltip delay overrides. Unset fields use the baseline config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Show delay in milliseconds.
    pub delay_ms: Option<u64>,
    /// Hide delay in milliseconds. Read once, at mount.
    pub hide_delay_ms: Option<u64>,
}

impl TooltipConfig {
    /// Set delay before showing in milliseconds.
    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }

    /// Set delay before hiding in milliseconds.
    #[must_use]
    pub fn hide_delay_ms(mut self, ms: u64) -> Self {
        self.hide_delay_ms = Some(ms);
        self
    }

    /// Overlay these overrides on `baseline`.
    #[must_use]
    pub fn resolve(&self, baseline: &VisibilityConfig) -> VisibilityConfig {
        VisibilityConfig {
            show_delay_ms: self.delay_ms.unwrap_or(baseline.show_delay_ms),
            hide_delay_ms: self.hide_delay_ms.unwrap_or(baseline.hide_delay_ms),
        }
    }
}

/// Tooltip description.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    message: String,
    child: String,
    config: TooltipConfig,
    trigger: Rect,
}

impl Tooltip {
    /// Create a tooltip with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Set the trigger content the tooltip wraps.
    #[must_use]
    pub fn child(mut self, text: impl Into<String>) -> Self {
        self.child = text.into();
        self
    }

    /// Set the tooltip configuration.
    #[must_use]
    pub fn config(mut self, config: TooltipConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the trigger bounds used for pointer hit-testing.
    #[must_use]
    pub fn for_widget(mut self, bounds: Rect) -> Self {
        self.trigger = bounds;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn child_text(&self) -> &str {
        &self.child
    }

    #[must_use]
    pub fn trigger_bounds(&self) -> Rect {
        self.trigger
    }
}

/// Accessibility role of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Tooltip,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host should put in its render tree for this tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay<'a> {
    pub role: Role,
    pub message: &'a str,
    /// Present in the tree but not shown.
    pub hidden: bool,
}

/// A mounted tooltip.
#[derive(Debug, Clone)]
pub struct TooltipState {
    visibility: DelayedVisibility,
    baseline: VisibilityConfig,
    child: String,
    hover: HoverTracker,
    mounted: bool,
}

impl TooltipState {
    /// Mount `tooltip`, resolving its delays against `baseline`.
    #[must_use]
    pub fn mount(tooltip: &Tooltip, baseline: &VisibilityConfig) -> Self {
        let config = tooltip.config.resolve(baseline);
        tipkit_core::debug!(
            show_delay_ms = config.show_delay_ms,
            hide_delay_ms = config.hide_delay_ms,
            has_message = !tooltip.message.is_empty(),
            "tooltip mounted"
        );
        Self {
            visibility: DelayedVisibility::new(tooltip.message.clone(), config),
            baseline: *baseline,
            child: tooltip.child.clone(),
            hover: HoverTracker::new(tooltip.trigger),
            mounted: true,
        }
    }

    /// Apply a new description to the mounted instance.
    pub fn rerender(&mut self, tooltip: &Tooltip) -> Option<VisibilityChange> {
        if !self.mounted {
            return None;
        }
        if self.child != tooltip.child {
            self.child.clone_from(&tooltip.child);
        }
        self.hover.set_bounds(tooltip.trigger);
        let show_delay_ms = tooltip
            .config
            .delay_ms
            .unwrap_or(self.baseline.show_delay_ms);
        self.visibility.set_show_delay_ms(show_delay_ms);
        if self.visibility.content() == tooltip.message {
            return None;
        }
        self.visibility.set_content(tooltip.message.as_str())
    }

    /// Route a pointer/focus event through hover tracking.
    ///
    /// Due timers are delivered first so a late event cannot reorder an
    /// expired transition behind a newer hover.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Option<VisibilityChange> {
        if !self.mounted {
            return None;
        }
        let fired = self.tick(now_ms);
        let hovered = match self.hover.update(event) {
            Some(HoverEvent::Enter) => self.mouse_enter(now_ms),
            Some(HoverEvent::Leave) => self.mouse_leave(now_ms),
            None => None,
        };
        hovered.or(fired)
    }

    /// Hover started on the trigger.
    pub fn mouse_enter(&mut self, now_ms: u64) -> Option<VisibilityChange> {
        if !self.mounted {
            return None;
        }
        self.visibility.on_hover_enter(now_ms)
    }

    /// Hover ended on the trigger.
    pub fn mouse_leave(&mut self, now_ms: u64) -> Option<VisibilityChange> {
        if !self.mounted {
            return None;
        }
        self.visibility.on_hover_leave(now_ms)
    }

    /// Deliver a due show/hide transition.
    pub fn tick(&mut self, now_ms: u64) -> Option<VisibilityChange> {
        self.visibility.advance(now_ms)
    }

    /// Tear down. Idempotent.
    pub fn unmount(&mut self) -> Option<VisibilityChange> {
        if !self.mounted {
            return None;
        }
        self.mounted = false;
        self.hover.reset();
        self.child.clear();
        tipkit_core::debug!("tooltip unmounted");
        self.visibility.destroy()
    }

    /// The overlay to render, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay<'_>> {
        if !self.mounted || !self.visibility.has_content() {
            return None;
        }
        Some(Overlay {
            role: Role::Tooltip,
            message: self.visibility.content(),
            hidden: !self.visibility.is_visible(),
        })
    }

    /// The wrapped trigger content while mounted.
    #[must_use]
    pub fn trigger(&self) -> Option<&str> {
        self.mounted.then_some(self.child.as_str())
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// When the host should call [`tick`](Self::tick) next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.visibility.next_deadline()
    }

    /// The underlying controller.
    #[must_use]
    pub fn visibility(&self) -> &DelayedVisibility {
        &self.visibility
    }

    /// True while the pointer is over the trigger bounds.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }
}
