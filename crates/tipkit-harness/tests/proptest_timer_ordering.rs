//! Property tests for harness timer delivery.
//!
//! 1. Splitting a time window into arbitrary chunks never changes the
//!    outcome: visibility depends only on elapsed time, not on how the
//!    clock was stepped.
//! 2. Every recorded change is timestamped no later than the clock and in
//!    non-decreasing order.

use proptest::prelude::*;
use tipkit_core::VisibilityConfig;
use tipkit_harness::{QueryOptions, TooltipHarness};
use tipkit_widgets::{Role, Tooltip, TooltipConfig};

#[derive(Debug, Clone)]
enum Step {
    Enter,
    Leave,
    Wait(u64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Enter),
        Just(Step::Leave),
        (0u64..=500).prop_map(Step::Wait),
    ]
}

fn mount(show: u64, hide: u64) -> TooltipHarness {
    TooltipHarness::render_with(
        Tooltip::new("message").config(TooltipConfig::default().delay_ms(show)),
        VisibilityConfig::default().hide_delay_ms(hide),
    )
}

fn visible(h: &TooltipHarness) -> bool {
    h.query_by_role(Role::Tooltip, QueryOptions::default()).is_some()
}

proptest! {
    #[test]
    fn chunked_waits_match_single_wait(
        show in 0u64..=400,
        hide in 0u64..=300,
        steps in prop::collection::vec(step_strategy(), 0..32),
        chunks in prop::collection::vec(1u64..=50, 1..8),
    ) {
        let mut whole = mount(show, hide);
        let mut chunked = mount(show, hide);
        for step in &steps {
            match *step {
                Step::Enter => {
                    whole.mouse_enter();
                    chunked.mouse_enter();
                }
                Step::Leave => {
                    whole.mouse_leave();
                    chunked.mouse_leave();
                }
                Step::Wait(ms) => {
                    whole.advance_timers_by_time(ms);
                    let mut left = ms;
                    for chunk in chunks.iter().cycle() {
                        if left == 0 {
                            break;
                        }
                        let dt = (*chunk).min(left);
                        chunked.advance_timers_by_time(dt);
                        left -= dt;
                    }
                }
            }
            prop_assert_eq!(whole.now_ms(), chunked.now_ms());
            prop_assert_eq!(visible(&whole), visible(&chunked));
            prop_assert_eq!(whole.changes(), chunked.changes());
        }
    }
}

proptest! {
    #[test]
    fn change_log_is_ordered(
        show in 0u64..=400,
        steps in prop::collection::vec(step_strategy(), 0..48),
    ) {
        let mut h = mount(show, 100);
        for step in &steps {
            match *step {
                Step::Enter => h.mouse_enter(),
                Step::Leave => h.mouse_leave(),
                Step::Wait(ms) => h.advance_timers_by_time(ms),
            }
        }
        let times: Vec<u64> = h.changes().iter().map(|c| c.at_ms).collect();
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(times.iter().all(|&t| t <= h.now_ms()));
    }
}
