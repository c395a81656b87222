//! Property-based invariant tests for the delayed visibility controller.
//!
//! Random sequences of hover, time, content, and destroy operations are
//! replayed against a controller; after every step:
//!
//! 1. Empty content implies `Hidden` with nothing scheduled.
//! 2. A timer is pending iff the state is `PendingShow` or `PendingHide`.
//! 3. A destroyed controller is `Hidden` with nothing scheduled.
//! 4. The pending deadline never lies before the time it was scheduled.
//!
//! Liveness is checked from arbitrary reachable states:
//!
//! 5. Hover enter + show delay with content ⇒ visible.
//! 6. Hover leave + hide delay ⇒ not visible.

use proptest::prelude::*;
use tipkit_core::{DelayedVisibility, VisibilityConfig, VisibilityState};

#[derive(Debug, Clone)]
enum Op {
    Enter,
    Leave,
    Wait(u64),
    SetContent(bool),
    Destroy,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Enter),
        4 => Just(Op::Leave),
        6 => (0u64..=600).prop_map(Op::Wait),
        2 => any::<bool>().prop_map(Op::SetContent),
        1 => Just(Op::Destroy),
    ]
}

fn config_strategy() -> impl Strategy<Value = VisibilityConfig> {
    (0u64..=400, 0u64..=300).prop_map(|(show, hide)| {
        VisibilityConfig::default()
            .show_delay_ms(show)
            .hide_delay_ms(hide)
    })
}

struct Run {
    tip: DelayedVisibility,
    now: u64,
}

impl Run {
    fn new(content: &str, config: VisibilityConfig) -> Self {
        Self {
            tip: DelayedVisibility::new(content, config),
            now: 0,
        }
    }

    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Enter => {
                self.tip.on_hover_enter(self.now);
            }
            Op::Leave => {
                self.tip.on_hover_leave(self.now);
            }
            Op::Wait(ms) => {
                self.now += ms;
                self.tip.advance(self.now);
            }
            Op::SetContent(empty) => {
                self.tip.set_content(if empty { "" } else { "message" });
            }
            Op::Destroy => {
                self.tip.destroy();
            }
        }
    }

    fn check(&self) -> Result<(), TestCaseError> {
        let state = self.tip.state();
        let deadline = self.tip.next_deadline();
        if !self.tip.has_content() {
            prop_assert_eq!(state, VisibilityState::Hidden);
            prop_assert_eq!(deadline, None);
        }
        prop_assert_eq!(
            deadline.is_some(),
            state.is_pending(),
            "state {} with deadline {:?}",
            state,
            deadline
        );
        if self.tip.is_destroyed() {
            prop_assert_eq!(state, VisibilityState::Hidden);
            prop_assert_eq!(deadline, None);
        }
        Ok(())
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_step(
        config in config_strategy(),
        start_empty in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut run = Run::new(if start_empty { "" } else { "message" }, config);
        run.check()?;
        for op in &ops {
            let before = run.now;
            run.apply(op);
            run.check()?;
            if let Some(deadline) = run.tip.next_deadline() {
                prop_assert!(deadline >= before);
            }
        }
    }
}

proptest! {
    #[test]
    fn enter_then_show_delay_is_visible(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..32),
    ) {
        let mut run = Run::new("message", config);
        for op in ops.iter().filter(|op| !matches!(op, Op::Destroy | Op::SetContent(_))) {
            run.apply(op);
        }
        run.tip.on_hover_enter(run.now);
        run.tip.advance(run.now + config.show_delay_ms);
        prop_assert!(run.tip.is_visible(), "state {}", run.tip.state());
    }
}

proptest! {
    #[test]
    fn leave_then_hide_delay_is_hidden(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..32),
    ) {
        let mut run = Run::new("message", config);
        for op in &ops {
            run.apply(op);
        }
        run.tip.on_hover_leave(run.now);
        run.tip.advance(run.now + config.hide_delay_ms);
        prop_assert!(!run.tip.is_visible(), "state {}", run.tip.state());
        prop_assert_eq!(run.tip.next_deadline(), None);
    }
}

proptest! {
    #[test]
    fn empty_content_never_shows(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut run = Run::new("", config);
        for op in ops.iter().filter(|op| !matches!(op, Op::SetContent(_))) {
            run.apply(op);
            prop_assert!(!run.tip.is_visible());
            prop_assert_eq!(run.tip.next_deadline(), None);
        }
    }
}

#[test]
fn destroy_before_show_delay_leaves_nothing_behind() {
    let mut tip = DelayedVisibility::new("message", VisibilityConfig::default().show_delay_ms(200));
    tip.on_hover_enter(0);
    tip.destroy();
    for now in [100, 200, 400, u64::MAX] {
        assert_eq!(tip.advance(now), None);
    }
    assert!(!tip.is_visible());
}
