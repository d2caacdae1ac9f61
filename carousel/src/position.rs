use crate::Bounds;

/// The single authority for the content row's offset.
///
/// All quantities are whole pixels. Each move is an instantaneous assignment: the proposed
/// offset is clamped into [`Bounds`] and the amount actually moved is returned. A return value
/// of `0` means the offset was already at the bound in the requested direction.
#[derive(Clone, Debug)]
pub struct PositionEngine {
    offset: i64,
    step_size: i64,
    viewport_width: i64,
    content_width: i64,
}

impl PositionEngine {
    pub fn new(step_size: u32, viewport_width: i64) -> Self {
        Self {
            offset: 0,
            step_size: i64::from(step_size),
            viewport_width: viewport_width.max(0),
            content_width: 0,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn step_size(&self) -> i64 {
        self.step_size
    }

    pub fn viewport_width(&self) -> i64 {
        self.viewport_width
    }

    pub fn content_width(&self) -> i64 {
        self.content_width
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.viewport_width, self.content_width)
    }

    pub fn set_step_size(&mut self, step_size: u32) {
        self.step_size = i64::from(step_size);
    }

    /// Does not move the offset. The next move re-clamps against the new bounds.
    pub fn set_viewport_width(&mut self, viewport_width: i64) {
        self.viewport_width = viewport_width.max(0);
    }

    /// Re-asserts the content extent after items were added or removed.
    ///
    /// Does not move the offset. The next move re-clamps against the new bounds.
    pub fn set_content_width(&mut self, content_width: i64) {
        self.content_width = content_width.max(0);
    }

    pub fn move_by(&mut self, delta: i64) -> i64 {
        let prev = self.offset;
        let bounds = self.bounds();
        let next = bounds.clamp(prev.saturating_add(delta));
        self.offset = next;
        let applied = next - prev;
        strace!(
            delta,
            applied,
            offset = next,
            min = bounds.min,
            "PositionEngine::move_by"
        );
        applied
    }

    /// Shifts the content right, toward the start.
    pub fn move_left(&mut self) -> i64 {
        self.move_by(self.step_size)
    }

    /// Shifts the content left, toward the end.
    pub fn move_right(&mut self) -> i64 {
        self.move_by(-self.step_size)
    }

    /// Forces the offset back to `0` regardless of step size.
    ///
    /// Moves by the full content width, or further when a stale offset from wider content is
    /// still waiting to be re-clamped.
    pub fn reset_to_start(&mut self) -> i64 {
        let distance = self.content_width.max(self.offset.saturating_neg());
        self.move_by(distance)
    }
}
