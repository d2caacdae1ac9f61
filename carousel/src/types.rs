/// The legal range for the content row's offset.
///
/// `max` is always `0` (content left-aligned with the viewport). `min` is `0` or negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// Computes bounds for a viewport showing content of `total_width` pixels.
    ///
    /// When the content fits inside the viewport, `min == max == 0`.
    pub fn new(viewport_width: i64, total_width: i64) -> Self {
        Self {
            min: viewport_width.saturating_sub(total_width).min(0),
            max: 0,
        }
    }

    pub fn clamp(&self, offset: i64) -> i64 {
        offset.clamp(self.min, self.max)
    }

    pub fn contains(&self, offset: i64) -> bool {
        (self.min..=self.max).contains(&offset)
    }

    /// Returns `true` when no movement is possible.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// An opaque identifier for a scheduled auto-advance callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoAdvanceState {
    /// No callback pending: auto-advance is disabled, paused, or torn down.
    #[default]
    Idle,
    /// Exactly one callback pending.
    Scheduled(TimerHandle),
}

impl AutoAdvanceState {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled(_))
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        match self {
            Self::Idle => None,
            Self::Scheduled(handle) => Some(*handle),
        }
    }
}

/// A per-item marker reflecting which item is currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub ordinal: usize,
    pub selected: bool,
}

/// Converts a measured pixel value into whole pixels, truncating toward zero.
///
/// Negative and non-finite measurements collapse to `0`.
pub(crate) fn whole_px(value: f32) -> i64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value as i64
}
