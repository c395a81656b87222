#![forbid(unsafe_code)]

//! Core: pointer events, clocks, the single-slot timer, and the delayed
//! show/hide state machine that drives tooltip visibility.

pub mod clock;
pub mod config;
pub mod event;
pub mod geometry;
pub mod hover;
pub mod logging;
pub mod timer;
pub mod visibility;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};

pub use config::{ConfigError, VisibilityConfig};
pub use visibility::{DelayedVisibility, VisibilityChange, VisibilityState};
