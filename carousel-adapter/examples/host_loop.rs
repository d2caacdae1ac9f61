use carousel::SliderOptions;
use carousel_adapter::{HostEvent, SliderHost};

fn main() {
    // Example: an adapter driving auto-advance from a simulated 60fps clock.
    //
    // A real host would:
    // - forward clicks/hover as `HostEvent`s
    // - call `tick(now_ms)` from its frame loop or a timer
    // - write `frame.margin_left_px` to the content row and toggle indicator classes
    let options = SliderOptions::new(300.0, |w: &u32| *w as f32)
        .with_step_size(100)
        .with_auto_advance_every(500);
    let mut host = match SliderHost::try_new(options, [100u32; 5], 0) {
        Ok(host) => host,
        Err(err) => {
            eprintln!("invalid slider options: {err}");
            return;
        }
    };

    let mut now_ms = 0u64;
    while now_ms < 3_000 {
        now_ms += 16;
        if now_ms == 1_200 {
            host.handle(HostEvent::PointerEnter);
        }
        if now_ms == 1_600 {
            host.handle(HostEvent::PointerLeave);
        }
        if host.tick(now_ms) > 0 {
            let frame = host.frame();
            println!(
                "t={now_ms} margin_left={} at_end={} selected={:?}",
                frame.margin_left_px,
                frame.at_end,
                frame.indicators.iter().position(|i| i.selected)
            );
        }
    }

    host.teardown();
    println!("done: next_deadline={:?}", host.next_deadline());
}
