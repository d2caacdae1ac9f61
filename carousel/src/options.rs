use alloc::sync::Arc;

use crate::{OptionsError, SliderState};

/// A callback fired with a fresh snapshot whenever the slider's observable state changes.
///
/// Rendering layers use this to write the content row's left margin and toggle indicators.
pub type OnChangeCallback = Arc<dyn Fn(&SliderState) + Send + Sync>;

/// Returns an item's margin-inclusive outer width in pixels.
///
/// Fractional values are truncated toward zero when the item is added.
pub type MeasureFn<K> = Arc<dyn Fn(&K) -> f32 + Send + Sync>;

pub const DEFAULT_STEP_SIZE: u32 = 100;

/// Timer-driven rightward movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoAdvance {
    #[default]
    Disabled,
    Every {
        interval_ms: u64,
    },
}

impl AutoAdvance {
    pub fn interval_ms(&self) -> Option<u64> {
        match self {
            Self::Disabled => None,
            Self::Every { interval_ms } => Some(*interval_ms),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Every { .. })
    }
}

/// Configuration for [`crate::SlideController`].
///
/// Cheap to clone: the measurement and change closures live in `Arc`s.
pub struct SliderOptions<K> {
    /// Pixels moved per discrete step.
    pub step_size: u32,
    /// Width of the visible window, as reported by the rendering layer.
    pub viewport_width: f32,
    pub measure: MeasureFn<K>,
    pub auto_advance: AutoAdvance,
    /// Whether indicator selection is tracked.
    pub indicators: bool,
    /// Pause auto-advance while the pointer is over the viewport.
    ///
    /// Has no effect unless `auto_advance` is enabled.
    pub pause_on_hover: bool,
    pub on_change: Option<OnChangeCallback>,
}

impl<K> Clone for SliderOptions<K> {
    fn clone(&self) -> Self {
        Self {
            step_size: self.step_size,
            viewport_width: self.viewport_width,
            measure: Arc::clone(&self.measure),
            auto_advance: self.auto_advance,
            indicators: self.indicators,
            pause_on_hover: self.pause_on_hover,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> SliderOptions<K> {
    /// Creates options for a viewport of `viewport_width` pixels.
    ///
    /// `measure(item)` must return the item's outer width including margins.
    pub fn new(viewport_width: f32, measure: impl Fn(&K) -> f32 + Send + Sync + 'static) -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            viewport_width,
            measure: Arc::new(measure),
            auto_advance: AutoAdvance::Disabled,
            indicators: true,
            pause_on_hover: true,
            on_change: None,
        }
    }

    pub fn with_step_size(mut self, step_size: u32) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: f32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_measure(mut self, measure: impl Fn(&K) -> f32 + Send + Sync + 'static) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    pub fn with_auto_advance(mut self, auto_advance: AutoAdvance) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    /// Enables auto-advance every `interval_ms` milliseconds.
    pub fn with_auto_advance_every(mut self, interval_ms: u64) -> Self {
        self.auto_advance = AutoAdvance::Every { interval_ms };
        self
    }

    pub fn with_indicators(mut self, indicators: bool) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&SliderState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.step_size == 0 {
            return Err(OptionsError::ZeroStepSize);
        }
        if self.auto_advance.interval_ms() == Some(0) {
            return Err(OptionsError::ZeroInterval);
        }
        Ok(())
    }
}

impl<K> core::fmt::Debug for SliderOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderOptions")
            .field("step_size", &self.step_size)
            .field("viewport_width", &self.viewport_width)
            .field("auto_advance", &self.auto_advance)
            .field("indicators", &self.indicators)
            .field("pause_on_hover", &self.pause_on_hover)
            .finish_non_exhaustive()
    }
}
