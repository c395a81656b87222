//! End-to-end tooltip lifecycles under virtual time: mount, hover, rerender,
//! unmount, and what the render tree exposes at each step.

use tipkit_core::VisibilityState;
use tipkit_core::event::{Event, MouseEvent};
use tipkit_core::geometry::Rect;
use tipkit_harness::{QueryOptions, TextMatch, TooltipHarness};
use tipkit_widgets::{Role, Tooltip, TooltipConfig};

const CHILD: &str = "some child";

fn expect_no_tooltip(h: &TooltipHarness) {
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::hidden()).is_none());
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_none());
}

#[test]
fn shows_and_hides_with_delays() {
    let delay = 200;
    let mut h = TooltipHarness::render(
        Tooltip::new("message")
            .child(CHILD)
            .config(TooltipConfig::default().delay_ms(delay)),
    );

    assert!(h.get_by_role(Role::Tooltip, QueryOptions::hidden()).is_ok());

    h.mouse_enter();
    h.advance_timers_by_time(delay * 2);
    let overlay = h.get_by_role(Role::Tooltip, QueryOptions::default()).unwrap();
    assert_eq!(overlay.message, "message");

    h.mouse_leave();
    // Default hide delay is 100ms.
    h.advance_timers_by_time(delay);
    let overlay = h.get_by_role(Role::Tooltip, QueryOptions::hidden()).unwrap();
    assert!(overlay.hidden);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_none());

    h.unmount();
    expect_no_tooltip(&h);
}

#[test]
fn empty_message_renders_only_the_child() {
    let mut h = TooltipHarness::render(Tooltip::new("").child(CHILD));
    expect_no_tooltip(&h);
    assert_eq!(h.get_by_text(CHILD), Ok(TextMatch::Trigger));

    h.mouse_enter();
    h.advance_timers_by_time(10_000);
    expect_no_tooltip(&h);
    assert!(h.changes().is_empty());
}

#[test]
fn message_arriving_on_rerender_then_unmount() {
    let mut h = TooltipHarness::render(Tooltip::new("").child(CHILD));
    expect_no_tooltip(&h);
    assert!(h.get_by_text(CHILD).is_ok());

    h.rerender(Tooltip::new("message").child(CHILD));
    let overlay = h.get_by_role(Role::Tooltip, QueryOptions::hidden()).unwrap();
    assert!(overlay.hidden);
    assert!(h.get_by_text(CHILD).is_ok());

    h.unmount();
    expect_no_tooltip(&h);
    assert_eq!(h.query_by_text(CHILD), None);
}

#[test]
fn clearing_message_then_unmount_leaves_no_timers() {
    let mut h = TooltipHarness::render(
        Tooltip::new("message")
            .child(CHILD)
            .config(TooltipConfig::default().delay_ms(200)),
    );
    h.mouse_enter();
    h.advance_timers_by_time(100);
    h.rerender(Tooltip::new("").child(CHILD));
    expect_no_tooltip(&h);
    assert_eq!(h.state().next_deadline(), None);

    h.unmount();
    h.advance_timers_by_time(1_000);
    expect_no_tooltip(&h);
}

#[test]
fn unmount_during_show_delay_never_shows() {
    let mut h = TooltipHarness::render(
        Tooltip::new("message")
            .child(CHILD)
            .config(TooltipConfig::default().delay_ms(200)),
    );
    h.mouse_enter();
    h.advance_timers_by_time(150);
    h.unmount();
    h.advance_timers_by_time(1_000);
    expect_no_tooltip(&h);
    assert!(
        h.changes()
            .iter()
            .all(|c| c.change.to != VisibilityState::Shown)
    );
}

#[test]
fn rapid_hover_only_latest_intent_counts() {
    let mut h = TooltipHarness::render(
        Tooltip::new("message").config(TooltipConfig::default().delay_ms(200)),
    );
    h.mouse_enter();
    h.advance_timers_by_time(150);
    h.mouse_leave();
    h.advance_timers_by_time(20);
    h.mouse_enter();

    // 200ms after the first enter: the cancelled timer must not fire.
    h.advance_timers_by_time(30);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_none());

    // 200ms after the second enter.
    h.advance_timers_by_time(170);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_some());
}

#[test]
fn reentering_during_hide_delay_keeps_tooltip_up() {
    let mut h = TooltipHarness::render(
        Tooltip::new("message").config(TooltipConfig::default().delay_ms(200)),
    );
    h.mouse_enter();
    h.advance_timers_by_time(200);
    h.mouse_leave();
    h.advance_timers_by_time(50);
    h.mouse_enter();
    h.advance_timers_by_time(1_000);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_some());
}

#[test]
fn pointer_events_drive_hover() {
    let mut h = TooltipHarness::render(
        Tooltip::new("message")
            .child(CHILD)
            .for_widget(Rect::new(4, 2, 10, 1))
            .config(TooltipConfig::default().delay_ms(100)),
    );
    h.pointer(Event::Mouse(MouseEvent::moved(0, 0)));
    h.advance_timers_by_time(500);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_none());

    h.pointer(Event::Mouse(MouseEvent::moved(8, 2)));
    h.advance_timers_by_time(100);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_some());

    h.pointer(Event::Mouse(MouseEvent::moved(9, 2)));
    h.advance_timers_by_time(500);
    assert!(
        h.query_by_role(Role::Tooltip, QueryOptions::default()).is_some(),
        "moving within the trigger keeps it shown"
    );

    h.pointer(Event::Mouse(MouseEvent::moved(30, 2)));
    h.advance_timers_by_time(100);
    assert!(h.query_by_role(Role::Tooltip, QueryOptions::default()).is_none());
}
