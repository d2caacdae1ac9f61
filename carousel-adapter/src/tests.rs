use crate::*;

use carousel::{Scheduler, SliderOptions, TimerHandle};

fn options(viewport: f32) -> SliderOptions<u32> {
    SliderOptions::new(viewport, |w: &u32| *w as f32)
}

#[test]
fn tick_scheduler_fires_in_deadline_order_and_skips_cancelled() {
    let mut s = TickScheduler::new(100);
    let late = s.schedule(500);
    let early = s.schedule(50);
    let cancelled = s.schedule(10);
    s.cancel(cancelled);
    s.cancel(TimerHandle(999));

    assert_eq!(s.next_deadline(), Some(150));
    assert!(s.advance(149).is_empty());
    assert_eq!(s.advance(1_000), [early, late]);
    assert!(s.pending().is_empty());
    assert_eq!(s.now_ms(), 1_000);

    // The clock never runs backwards.
    s.advance(10);
    assert_eq!(s.now_ms(), 1_000);
    s.schedule(5);
    assert_eq!(s.next_deadline(), Some(1_005));
}

#[test]
fn host_auto_advance_recovers_from_the_end() {
    // viewport 300, content 500, step 100.
    let mut host = SliderHost::try_new(options(300.0).with_auto_advance_every(1_000), [100; 5], 0)
        .unwrap();
    assert_eq!(host.next_deadline(), Some(1_000));

    assert_eq!(host.tick(999), 0);
    assert_eq!(host.frame().margin_left_px, 0);

    assert_eq!(host.tick(1_000), 1);
    assert_eq!(host.frame().margin_left_px, -100);
    assert_eq!(host.tick(2_000), 1);
    assert_eq!(host.frame().margin_left_px, -200);
    assert!(host.frame().at_end);

    assert_eq!(host.tick(3_000), 1);
    let frame = host.frame();
    assert_eq!(frame.margin_left_px, 0);
    assert!(frame.at_start);
    assert!(frame.auto_advancing);
    assert_eq!(host.next_deadline(), Some(4_000));
}

#[test]
fn long_gap_between_ticks_fires_once() {
    let mut host = SliderHost::try_new(options(100.0).with_auto_advance_every(100), [100; 20], 0)
        .unwrap();
    assert_eq!(host.tick(10_000), 1);
    assert_eq!(host.frame().margin_left_px, -100);
    assert_eq!(host.next_deadline(), Some(10_100));
    assert_eq!(host.controller().scheduler().pending().len(), 1);
}

#[test]
fn hover_pauses_and_resumes_the_timer() {
    let mut host = SliderHost::try_new(options(300.0).with_auto_advance_every(1_000), [100; 5], 0)
        .unwrap();

    host.handle(HostEvent::PointerEnter);
    assert!(!host.frame().auto_advancing);
    assert_eq!(host.next_deadline(), None);
    assert_eq!(host.tick(5_000), 0);
    assert_eq!(host.frame().margin_left_px, 0);

    host.handle(HostEvent::PointerLeave);
    assert_eq!(host.next_deadline(), Some(6_000));
    assert_eq!(host.tick(6_000), 1);
    assert_eq!(host.frame().margin_left_px, -100);
}

#[test]
fn controls_move_and_update_indicators() {
    let mut host = SliderHost::try_new(options(200.0), [100, 100, 100], 0).unwrap();

    assert_eq!(host.handle(HostEvent::Next), -100);
    assert_eq!(host.handle(HostEvent::Next), 0);
    let frame = host.frame();
    assert_eq!(frame.margin_left_px, -100);
    assert_eq!(frame.indicators.len(), 3);
    assert!(frame.indicators[1].selected);

    assert_eq!(host.handle(HostEvent::Previous), 100);
    assert!(host.frame().indicators[0].selected);
}

#[test]
fn item_events_update_bounds() {
    let mut host = SliderHost::try_new(options(300.0), [100, 100, 100], 0).unwrap();
    assert_eq!(host.handle(HostEvent::Next), 0);

    host.handle(HostEvent::Add(250));
    assert_eq!(host.controller().total_width(), 550);
    assert_eq!(host.handle(HostEvent::Next), -100);
    assert_eq!(host.handle(HostEvent::Next), -100);
    assert_eq!(host.handle(HostEvent::Next), -50);
    assert_eq!(host.frame().margin_left_px, -250);

    host.handle(HostEvent::Remove(250));
    host.handle(HostEvent::Remove(7));
    assert_eq!(host.controller().count(), 3);
    // Stale until the next move re-clamps.
    assert_eq!(host.frame().margin_left_px, -250);
    assert_eq!(host.handle(HostEvent::Previous), 250);
    assert_eq!(host.frame().margin_left_px, 0);
}

#[test]
fn viewport_width_changes_take_effect_on_next_move() {
    let mut host = SliderHost::try_new(options(300.0), [100; 5], 0).unwrap();
    host.handle(HostEvent::Next);
    host.handle(HostEvent::Next);
    assert_eq!(host.frame().margin_left_px, -200);

    host.handle(HostEvent::ViewportWidth(450.0));
    assert_eq!(host.controller().bounds().min, -50);
    assert_eq!(host.handle(HostEvent::Next), 150);
    assert_eq!(host.frame().margin_left_px, -50);
}

#[test]
fn teardown_stops_all_fires() {
    let mut host = SliderHost::try_new(options(300.0).with_auto_advance_every(1_000), [100; 5], 0)
        .unwrap();
    host.teardown();
    assert_eq!(host.next_deadline(), None);
    assert_eq!(host.tick(10_000), 0);
    host.handle(HostEvent::PointerLeave);
    assert_eq!(host.next_deadline(), None);
    assert_eq!(host.frame().margin_left_px, 0);
}

#[test]
fn two_hosts_keep_independent_timers() {
    let mut a = SliderHost::try_new(options(100.0).with_auto_advance_every(100), [100; 5], 0)
        .unwrap();
    let mut b = SliderHost::try_new(options(100.0).with_auto_advance_every(300), [100; 5], 0)
        .unwrap();

    a.handle(HostEvent::PointerEnter);
    for now in [100, 200, 300] {
        a.tick(now);
        b.tick(now);
    }
    assert_eq!(a.frame().margin_left_px, 0);
    assert_eq!(b.frame().margin_left_px, -100);
}
