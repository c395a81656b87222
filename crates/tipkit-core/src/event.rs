#![forbid(unsafe_code)]

//! Pointer and focus events that can move a tooltip trigger in or out of
//! hover.
//!
//! # Design Notes
//!
//! - Mouse coordinates are 0-indexed cells.
//! - Keyboard input is not modeled; hosts handle keys before forwarding
//!   the remaining events here.

#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// Input event relevant to hover tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A mouse event.
    Mouse(MouseEvent),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),

    /// A tick from the host loop. Carries no position.
    Tick,
}

impl Event {
    /// Convert a Crossterm event, dropping anything hover tracking ignores.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Mouse(mouse) => Some(Event::Mouse(map_mouse_event(mouse))),
            cte::Event::FocusGained => Some(Event::Focus(true)),
            cte::Event::FocusLost => Some(Event::Focus(false)),
            cte::Event::Key(_) | cte::Event::Paste(_) | cte::Event::Resize(..) => None,
        }
    }

    /// Pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<(u16, u16)> {
        match self {
            Event::Mouse(mouse) => Some(mouse.position()),
            Event::Focus(_) | Event::Tick => None,
        }
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event.
    pub kind: MouseEventKind,

    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// Shorthand for a plain pointer move.
    #[must_use]
    pub const fn moved(x: u16, y: u16) -> Self {
        Self::new(MouseEventKind::Moved, x, y)
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),

    /// Mouse button released.
    Up(MouseButton),

    /// Mouse dragged while button held.
    Drag(MouseButton),

    /// Mouse moved (no button pressed).
    Moved,

    /// Mouse wheel scrolled up.
    ScrollUp,

    /// Mouse wheel scrolled down.
    ScrollDown,

    /// Mouse wheel scrolled left.
    ScrollLeft,

    /// Mouse wheel scrolled right.
    ScrollRight,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,

    /// Right mouse button.
    Right,

    /// Middle mouse button.
    Middle,
}

/// Hover transition derived from pointer movement over a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    /// Pointer entered the trigger.
    Enter,
    /// Pointer left the trigger.
    Leave,
}

#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_event(event: cte::MouseEvent) -> MouseEvent {
    let kind = match event.kind {
        cte::MouseEventKind::Down(button) => MouseEventKind::Down(map_mouse_button(button)),
        cte::MouseEventKind::Up(button) => MouseEventKind::Up(map_mouse_button(button)),
        cte::MouseEventKind::Drag(button) => MouseEventKind::Drag(map_mouse_button(button)),
        cte::MouseEventKind::Moved => MouseEventKind::Moved,
        cte::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        cte::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        cte::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        cte::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    };

    MouseEvent::new(kind, event.column, event.row)
}

#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_button(button: cte::MouseButton) -> MouseButton {
    match button {
        cte::MouseButton::Left => MouseButton::Left,
        cte::MouseButton::Right => MouseButton::Right,
        cte::MouseButton::Middle => MouseButton::Middle,
    }
}
