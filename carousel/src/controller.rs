use crate::position::PositionEngine;
use crate::registry::ItemRegistry;
use crate::types::whole_px;
use crate::{
    AutoAdvanceState, Bounds, Indicator, OptionsError, Scheduler, SliderOptions, SliderState,
    TimerHandle,
};

/// A headless horizontal slider.
///
/// Owns the item registry, the position engine, indicator selection, and the auto-advance
/// timer state. It holds no UI objects; the host drives it:
/// - `move_slider_left` / `move_slider_right` on next/previous clicks
/// - `on_pointer_enter` / `on_pointer_leave` for hover pausing
/// - `on_timer_fired` when a scheduled callback elapses
///
/// Every instance keeps its own timer handle, so any number of sliders can share one host.
#[derive(Debug)]
pub struct SlideController<K, S> {
    options: SliderOptions<K>,
    registry: ItemRegistry<K>,
    engine: PositionEngine,
    selected: Option<usize>,
    auto_advance: AutoAdvanceState,
    paused: bool,
    torn_down: bool,
    scheduler: S,
}

impl<K: PartialEq, S: Scheduler> SlideController<K, S> {
    /// Validates `options`, adds `items` in order, selects the first indicator and, when
    /// configured, schedules the first auto-advance.
    pub fn try_new(
        options: SliderOptions<K>,
        items: impl IntoIterator<Item = K>,
        scheduler: S,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let engine = PositionEngine::new(options.step_size, whole_px(options.viewport_width));
        let mut c = Self {
            registry: ItemRegistry::new(),
            engine,
            selected: None,
            auto_advance: AutoAdvanceState::Idle,
            paused: false,
            torn_down: false,
            scheduler,
            options,
        };
        c.populate_silently(items);
        c.initialise_indicators();
        sdebug!(
            count = c.registry.count(),
            total_width = c.registry.total_width(),
            step_size = c.engine.step_size(),
            "SlideController::new"
        );
        if c.options.auto_advance.is_enabled() {
            c.start_auto_advance();
        }
        c.notify();
        Ok(c)
    }

    pub fn options(&self) -> &SliderOptions<K> {
        &self.options
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn count(&self) -> usize {
        self.registry.count()
    }

    pub fn total_width(&self) -> i64 {
        self.registry.total_width()
    }

    pub fn items(&self) -> impl Iterator<Item = &K> {
        self.registry.iter()
    }

    pub fn offset(&self) -> i64 {
        self.engine.offset()
    }

    pub fn step_size(&self) -> i64 {
        self.engine.step_size()
    }

    pub fn viewport_width(&self) -> i64 {
        self.engine.viewport_width()
    }

    pub fn bounds(&self) -> Bounds {
        self.engine.bounds()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn auto_advance_state(&self) -> AutoAdvanceState {
        self.auto_advance
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// One marker per item, in display order.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        let count = if self.options.indicators {
            self.registry.count()
        } else {
            0
        };
        (0..count).map(move |ordinal| Indicator {
            ordinal,
            selected: self.selected == Some(ordinal),
        })
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            offset: self.engine.offset(),
            step_size: self.engine.step_size(),
            bounds: self.engine.bounds(),
            total_width: self.registry.total_width(),
            count: self.registry.count(),
            selected_index: self.selected,
            auto_advance: self.auto_advance,
            paused: self.paused,
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.state());
        }
    }

    // Items

    fn populate_silently(&mut self, items: impl IntoIterator<Item = K>) {
        let measure = &self.options.measure;
        self.registry
            .extend(items.into_iter().map(|item| {
                let width = whole_px(measure(&item));
                (item, width)
            }));
        self.engine.set_content_width(self.registry.total_width());
    }

    /// Appends many items and recomputes the content width once.
    pub fn populate(&mut self, items: impl IntoIterator<Item = K>) {
        self.populate_silently(items);
        self.initialise_indicators();
        self.notify();
    }

    pub fn add_item(&mut self, item: K) -> &K {
        let width = whole_px((self.options.measure)(&item));
        self.registry.add(item, width);
        self.engine.set_content_width(self.registry.total_width());
        self.initialise_indicators();
        strace!(width, total_width = self.registry.total_width(), "add_item");
        self.notify();
        let last = self.registry.count() - 1;
        &self.registry.slides()[last].item
    }

    /// Removes the first occurrence of `item`.
    ///
    /// Returns `false` (and changes nothing) when the item is not in the slider. The offset is
    /// left where it is; the next move re-clamps it to the narrower bounds.
    pub fn remove_item(&mut self, item: &K) -> bool {
        if self.registry.remove(item).is_none() {
            sdebug!("remove_item: item not found");
            return false;
        }
        self.engine.set_content_width(self.registry.total_width());
        self.clamp_selection();
        strace!(total_width = self.registry.total_width(), "remove_item");
        self.notify();
        true
    }

    pub fn set_step_size(&mut self, step_size: u32) {
        if step_size == 0 {
            swarn!("set_step_size: ignoring zero step size");
            return;
        }
        if i64::from(step_size) == self.engine.step_size() {
            return;
        }
        self.options.step_size = step_size;
        self.engine.set_step_size(step_size);
        self.notify();
    }

    /// Updates the viewport width without moving; the next move re-clamps.
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.options.viewport_width = viewport_width;
        self.engine.set_viewport_width(whole_px(viewport_width));
        self.notify();
    }

    // Movement

    /// Moves the content toward its start. Returns the applied delta.
    ///
    /// The delta is normally `0` or positive, but re-clamping a stale offset (after items were
    /// removed or the viewport widened) can make it negative.
    pub fn move_slider_left(&mut self) -> i64 {
        let applied = self.engine.move_left();
        self.on_moved(applied)
    }

    /// Moves the content toward its end. Returns the applied delta.
    ///
    /// The delta is normally `0` or negative, but re-clamping a stale offset can make it
    /// positive.
    pub fn move_slider_right(&mut self) -> i64 {
        let applied = self.engine.move_right();
        self.on_moved(applied)
    }

    /// Moves by an arbitrary delta. `move_by(0)` re-clamps a stale offset.
    pub fn move_by(&mut self, delta: i64) -> i64 {
        let applied = self.engine.move_by(delta);
        self.on_moved(applied)
    }

    /// Returns the content to its start.
    pub fn reset_position(&mut self) -> i64 {
        let applied = self.engine.reset_to_start();
        self.on_moved(applied)
    }

    fn on_moved(&mut self, applied: i64) -> i64 {
        if applied == 0 {
            return 0;
        }
        if self.options.indicators {
            if let Some(selected) = self.selected {
                let next = if applied > 0 {
                    selected.saturating_sub(1)
                } else {
                    selected.saturating_add(1)
                };
                self.selected = Some(next);
                self.clamp_selection();
            }
        }
        self.notify();
        applied
    }

    // Indicators

    /// Selects the first indicator once indicators are enabled and items exist.
    pub fn initialise_indicators(&mut self) {
        if self.options.indicators && self.selected.is_none() && !self.registry.is_empty() {
            self.selected = Some(0);
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.registry.count();
        if count == 0 || !self.options.indicators {
            self.selected = None;
            return;
        }
        if let Some(selected) = self.selected {
            self.selected = Some(selected.min(count - 1));
        }
    }

    // Auto-advance

    /// Idle → Scheduled. No-op when disabled, paused, torn down, or already scheduled.
    pub fn start_auto_advance(&mut self) {
        let Some(interval_ms) = self.options.auto_advance.interval_ms() else {
            return;
        };
        if self.torn_down || self.paused || self.auto_advance.is_scheduled() {
            return;
        }
        let handle = self.scheduler.schedule(interval_ms);
        self.auto_advance = AutoAdvanceState::Scheduled(handle);
        strace!(handle = handle.0, interval_ms, "auto-advance scheduled");
    }

    /// Handles an elapsed auto-advance callback.
    ///
    /// Moves one step toward the end; if nothing moved, the slider is stuck at its end and is
    /// reset to the start. The next callback is scheduled exactly once, and only when `handle`
    /// is the one currently pending. A stale fire (delivered after a pause or re-arm) still
    /// completes its move but schedules nothing.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> i64 {
        if self.torn_down {
            sdebug!(handle = handle.0, "timer fired after teardown");
            return 0;
        }
        let current = self.auto_advance.handle() == Some(handle);
        if current {
            self.auto_advance = AutoAdvanceState::Idle;
        } else {
            sdebug!(handle = handle.0, "stale auto-advance fire");
        }

        let mut applied = self.move_slider_right();
        if applied == 0 {
            strace!("auto-advance reached the end, resetting");
            applied = self.reset_position();
        }

        if current {
            self.start_auto_advance();
            self.notify();
        }
        applied
    }

    fn cancel_pending(&mut self) {
        if let AutoAdvanceState::Scheduled(handle) = self.auto_advance {
            self.scheduler.cancel(handle);
            strace!(handle = handle.0, "auto-advance cancelled");
        }
        self.auto_advance = AutoAdvanceState::Idle;
    }

    fn pauses_on_hover(&self) -> bool {
        self.options.auto_advance.is_enabled() && self.options.pause_on_hover
    }

    /// Scheduled → Idle while the pointer is over the viewport.
    pub fn on_pointer_enter(&mut self) {
        if !self.pauses_on_hover() || self.torn_down {
            return;
        }
        self.paused = true;
        self.cancel_pending();
        sdebug!("auto-advance paused");
        self.notify();
    }

    /// Idle → Scheduled when the pointer leaves the viewport.
    pub fn on_pointer_leave(&mut self) {
        if !self.pauses_on_hover() || self.torn_down || !self.paused {
            return;
        }
        self.paused = false;
        self.start_auto_advance();
        sdebug!("auto-advance resumed");
        self.notify();
    }

    /// Cancels any pending callback. No further fires are honored afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_pending();
        self.torn_down = true;
        self.paused = false;
        sdebug!("SlideController::teardown");
        self.notify();
    }
}
