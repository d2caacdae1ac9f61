// Example: step through a slider by hand and watch the indicators follow.
use carousel::{NullScheduler, SlideController, SliderOptions};

#[derive(Debug, PartialEq)]
struct Card {
    title: &'static str,
    width: f32,
}

fn main() {
    let cards = [
        Card { title: "a", width: 120.0 },
        Card { title: "b", width: 120.0 },
        Card { title: "c", width: 180.5 },
        Card { title: "d", width: 120.0 },
    ];

    let options = SliderOptions::new(300.0, |c: &Card| c.width).with_step_size(120);
    let Ok(mut slider) = SlideController::try_new(options, cards, NullScheduler::default()) else {
        eprintln!("invalid slider options");
        return;
    };
    println!("total_width={} bounds={:?}", slider.total_width(), slider.bounds());

    loop {
        let applied = slider.move_slider_right();
        let selected: Vec<_> = slider.indicators().map(|i| i.selected).collect();
        println!("applied={applied} offset={} indicators={selected:?}", slider.offset());
        if applied == 0 {
            break;
        }
    }

    slider.remove_item(&Card { title: "c", width: 180.5 });
    slider.move_by(0);
    println!("after removal: offset={} bounds={:?}", slider.offset(), slider.bounds());

    let titles: Vec<_> = slider.items().map(|c| c.title).collect();
    println!("items={titles:?}");
}
