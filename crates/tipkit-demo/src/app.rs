#![forbid(unsafe_code)]

//! Event loop: one label, one tooltip, real mouse.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self as cte, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    KeyCode, KeyEvent, KeyModifiers,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tipkit::prelude::*;

use crate::cli::Opts;

const LABEL_X: u16 = 2;
const LABEL_Y: u16 = 2;
/// Poll interval while no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Raw mode + alternate screen + mouse capture, undone on drop.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            Hide
        )?;
        tracing::info!("terminal session started");
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            DisableFocusChange,
            DisableMouseCapture,
            Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
        tracing::info!("terminal session restored");
    }
}

fn describe(opts: &Opts, message: &str) -> Tooltip {
    let width = u16::try_from(opts.label.chars().count()).unwrap_or(u16::MAX);
    let config = match opts.delay_ms {
        Some(ms) => TooltipConfig::default().delay_ms(ms),
        None => TooltipConfig::default(),
    };
    Tooltip::new(message)
        .child(opts.label.as_str())
        .for_widget(Rect::new(LABEL_X, LABEL_Y, width, 1))
        .config(config)
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Run until the user quits.
pub fn run(opts: &Opts) -> io::Result<()> {
    let parsed = VisibilityConfig::from_env_with_diagnostics();
    for err in &parsed.errors {
        tracing::warn!(%err, "ignoring environment override");
    }
    let baseline = parsed.config;

    let mut message_on = true;
    let mut tooltip = describe(opts, &opts.message);
    let mut state = TooltipState::mount(&tooltip, &baseline);
    let clock = SystemClock::new();

    let mut guard = TerminalGuard::enter()?;
    draw(&mut guard.stdout, &state, &baseline)?;

    loop {
        let now = clock.now_ms();
        let timeout = state
            .next_deadline()
            .map(|deadline| Duration::from_millis(deadline.saturating_sub(now)))
            .unwrap_or(IDLE_POLL);

        let mut dirty = false;
        if cte::poll(timeout)? {
            let raw = cte::read()?;
            if let cte::Event::Key(key) = &raw {
                if is_quit(key) {
                    break;
                }
                if key.code == KeyCode::Char('e') {
                    message_on = !message_on;
                    let message = if message_on { opts.message.as_str() } else { "" };
                    tooltip = describe(opts, message);
                    state.rerender(&tooltip);
                    dirty = true;
                }
            }
            if let cte::Event::Resize(..) = raw {
                dirty = true;
            }
            if let Some(event) = Event::from_crossterm(raw) {
                dirty |= state.handle_event(&event, clock.now_ms()).is_some();
            }
        }
        dirty |= state.tick(clock.now_ms()).is_some();

        if dirty {
            draw(&mut guard.stdout, &state, &baseline)?;
        }
    }

    state.unmount();
    Ok(())
}

fn draw(out: &mut Stdout, state: &TooltipState, baseline: &VisibilityConfig) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        Print(format!(
            "state: {}  (e: toggle message, q: quit, hide delay {}ms)",
            state.visibility().state(),
            baseline.hide_delay_ms
        ))
    )?;
    if let Some(label) = state.trigger() {
        queue!(out, MoveTo(LABEL_X, LABEL_Y), Print(label))?;
    }
    if let Some(overlay) = state.overlay()
        && !overlay.hidden
    {
        queue!(
            out,
            MoveTo(LABEL_X, LABEL_Y + 2),
            SetAttribute(Attribute::Reverse),
            Print(format!(" {} ", overlay.message)),
            SetAttribute(Attribute::Reset)
        )?;
    }
    out.flush()
}
