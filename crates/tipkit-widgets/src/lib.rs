#![forbid(unsafe_code)]

//! Widgets built on the tipkit visibility core.

pub mod tooltip;

pub use tooltip::{Overlay, Role, Tooltip, TooltipConfig, TooltipState};
