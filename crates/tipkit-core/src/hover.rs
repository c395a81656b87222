#![forbid(unsafe_code)]

//! Turns raw pointer events into hover enter/leave transitions for a single
//! trigger rectangle.
//!
//! # Invariants
//!
//! 1. `Enter` and `Leave` strictly alternate, starting with `Enter`.
//! 2. Events without a position never produce `Enter`.
//! 3. Losing terminal focus while hovered produces `Leave`.

use crate::event::{Event, HoverEvent};
use crate::geometry::Rect;

/// Tracks whether the pointer is over a trigger.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    bounds: Rect,
    hovered: bool,
}

impl HoverTracker {
    /// Create a tracker for the given trigger bounds.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            hovered: false,
        }
    }

    /// Current trigger bounds.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// True while the pointer is considered inside the trigger.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Move the trigger. Hover is re-evaluated on the next pointer event.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Feed one event and return the hover transition it causes, if any.
    pub fn update(&mut self, event: &Event) -> Option<HoverEvent> {
        match *event {
            Event::Mouse(mouse) => {
                let inside = self.bounds.contains(mouse.x, mouse.y);
                self.transition(inside)
            }
            Event::Focus(false) => self.transition(false),
            Event::Focus(true) | Event::Tick => None,
        }
    }

    /// Forget the hover without emitting a transition.
    pub fn reset(&mut self) {
        self.hovered = false;
    }

    fn transition(&mut self, inside: bool) -> Option<HoverEvent> {
        match (self.hovered, inside) {
            (false, true) => {
                self.hovered = true;
                Some(HoverEvent::Enter)
            }
            (true, false) => {
                self.hovered = false;
                Some(HoverEvent::Leave)
            }
            _ => None,
        }
    }
}
