use crate::{AutoAdvanceState, Bounds};

/// A lightweight, serializable snapshot of a slider.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    /// The content row's left margin in pixels (`0` or negative).
    pub offset: i64,
    pub step_size: i64,
    pub bounds: Bounds,
    pub total_width: i64,
    pub count: usize,
    /// `None` when indicators are disabled or there are no items.
    pub selected_index: Option<usize>,
    pub auto_advance: AutoAdvanceState,
    pub paused: bool,
}

impl SliderState {
    pub fn at_start(&self) -> bool {
        self.offset >= self.bounds.max
    }

    pub fn at_end(&self) -> bool {
        self.offset <= self.bounds.min
    }
}
