#![forbid(unsafe_code)]

//! tipkit public facade crate.
//!
//! Re-exports the visibility core and the tooltip widget, plus a prelude for
//! hosts that just want to mount tooltips.

// --- Core re-exports -------------------------------------------------------

pub use tipkit_core::clock::{Clock, SystemClock, VirtualClock};
pub use tipkit_core::config::{ConfigError, ConfigParse, VisibilityConfig};
pub use tipkit_core::event::{Event, HoverEvent, MouseButton, MouseEvent, MouseEventKind};
pub use tipkit_core::geometry::Rect;
pub use tipkit_core::hover::HoverTracker;
pub use tipkit_core::timer::{TimerId, TimerSlot};
pub use tipkit_core::visibility::{
    ChangeCause, DelayedVisibility, VisibilityChange, VisibilityState,
};

// --- Widget re-exports -----------------------------------------------------

pub use tipkit_widgets::{Overlay, Role, Tooltip, TooltipConfig, TooltipState};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Clock, Event, Overlay, Rect, SystemClock, Tooltip, TooltipConfig, TooltipState,
        VisibilityConfig, VisibilityState,
    };
}
