use alloc::vec::Vec;

use carousel::{Indicator, OptionsError, SlideController, SliderOptions};

use crate::TickScheduler;

/// Input the markup layer forwards to a slider.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent<K> {
    /// The "next" control was clicked or tapped.
    Next,
    /// The "previous" control was clicked or tapped.
    Previous,
    PointerEnter,
    PointerLeave,
    Add(K),
    Remove(K),
    ViewportWidth(f32),
}

/// What the markup layer needs to draw after an update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Signed left margin for the content row, in pixels.
    pub margin_left_px: i64,
    pub indicators: Vec<Indicator>,
    pub at_start: bool,
    pub at_end: bool,
    /// `true` while an auto-advance callback is pending.
    pub auto_advancing: bool,
}

/// A framework-neutral event router around a [`SlideController`].
///
/// The host serializes every entry point: UI events go through [`SliderHost::handle`] and the
/// clock goes through [`SliderHost::tick`]. Each tick delivers due timer fires one at a time.
#[derive(Debug)]
pub struct SliderHost<K> {
    controller: SlideController<K, TickScheduler>,
}

impl<K: PartialEq> SliderHost<K> {
    pub fn try_new(
        options: SliderOptions<K>,
        items: impl IntoIterator<Item = K>,
        now_ms: u64,
    ) -> Result<Self, OptionsError> {
        let controller = SlideController::try_new(options, items, TickScheduler::new(now_ms))?;
        Ok(Self { controller })
    }

    pub fn controller(&self) -> &SlideController<K, TickScheduler> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SlideController<K, TickScheduler> {
        &mut self.controller
    }

    pub fn into_controller(self) -> SlideController<K, TickScheduler> {
        self.controller
    }

    /// Routes one UI event. Returns the applied offset delta (`0` for non-moving events).
    pub fn handle(&mut self, event: HostEvent<K>) -> i64 {
        let c = &mut self.controller;
        match event {
            HostEvent::Next => c.move_slider_right(),
            HostEvent::Previous => c.move_slider_left(),
            HostEvent::PointerEnter => {
                c.on_pointer_enter();
                0
            }
            HostEvent::PointerLeave => {
                c.on_pointer_leave();
                0
            }
            HostEvent::Add(item) => {
                c.add_item(item);
                0
            }
            HostEvent::Remove(item) => {
                if !c.remove_item(&item) {
                    adebug!("SliderHost: remove for an unknown item");
                }
                0
            }
            HostEvent::ViewportWidth(width) => {
                c.set_viewport_width(width);
                0
            }
        }
    }

    /// Advances the clock and delivers due auto-advance fires.
    ///
    /// Returns the number of fires delivered. The next callback is scheduled relative to the
    /// fire that re-armed it, so a long gap between ticks yields one fire, not a burst.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let due = self.controller.scheduler_mut().advance(now_ms);
        let fired = due.len();
        for handle in due {
            self.controller.on_timer_fired(handle);
            atrace!(
                handle = handle.0,
                offset = self.controller.offset(),
                now_ms,
                "SliderHost::tick fired"
            );
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.controller.scheduler().next_deadline()
    }

    pub fn frame(&self) -> Frame {
        let state = self.controller.state();
        Frame {
            margin_left_px: state.offset,
            indicators: self.controller.indicators().collect(),
            at_start: state.at_start(),
            at_end: state.at_end(),
            auto_advancing: state.auto_advance.is_scheduled(),
        }
    }

    pub fn teardown(&mut self) {
        self.controller.teardown();
    }
}
