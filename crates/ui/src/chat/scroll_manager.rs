use gpui::{Pixels, ScrollHandle, point, px};

/// Near-bottom distance at which follow mode resumes.
const FOLLOW_RESUME_THRESHOLD: Pixels = px(24.);
/// Small delta used to ignore floating-point scroll jitter.
const SCROLL_DELTA_EPSILON: f32 = 1.0;

/// Keeps the transcript pinned to its newest row.
///
/// Follow mode pauses when the user scrolls up through history and resumes
/// once they return near the bottom edge.
pub struct ScrollManager {
    handle: ScrollHandle,
    follow_bottom: bool,
    pending_scroll: bool,
    last_offset: Pixels,
    last_max_offset: Pixels,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self {
            handle: ScrollHandle::new(),
            follow_bottom: true,
            pending_scroll: true,
            last_offset: Pixels::ZERO,
            last_max_offset: Pixels::ZERO,
        }
    }

    pub fn handle(&self) -> &ScrollHandle {
        &self.handle
    }

    pub fn is_following_bottom(&self) -> bool {
        self.follow_bottom
    }

    /// Called when rows were appended so the tail stays visible.
    pub fn note_new_rows(&mut self) {
        if self.follow_bottom || self.was_near_bottom() {
            self.pending_scroll = true;
            self.follow_bottom = true;
        }
    }

    /// Called once per render: reconciles follow state with what the user did
    /// since the last frame, then snaps to the bottom if follow mode holds.
    pub fn sync(&mut self) {
        let offset = self.handle.offset().y;
        let max_offset = self.handle.max_offset().height;

        let offset_delta = f32::from(offset) - f32::from(self.last_offset);
        let content_grew =
            (f32::from(max_offset) - f32::from(self.last_max_offset)).abs() > SCROLL_DELTA_EPSILON;
        let scrolled_up = offset_delta > SCROLL_DELTA_EPSILON && !content_grew;
        let scrolled_down = offset_delta < -SCROLL_DELTA_EPSILON && !content_grew;

        if self.pending_scroll || (content_grew && self.was_near_bottom()) {
            self.follow_bottom = true;
        } else if self.follow_bottom && scrolled_up {
            self.follow_bottom = false;
        } else if !self.follow_bottom && scrolled_down && self.is_near_bottom() {
            self.follow_bottom = true;
        }

        if self.follow_bottom || self.pending_scroll {
            // GPUI scrolls down with negative Y offsets, so the tail sits at -max.
            let target_y = if max_offset > Pixels::ZERO {
                -max_offset
            } else {
                Pixels::ZERO
            };
            self.handle.set_offset(point(self.handle.offset().x, target_y));
        }
        self.pending_scroll = false;

        self.last_offset = self.handle.offset().y;
        self.last_max_offset = max_offset;
    }

    fn is_near_bottom(&self) -> bool {
        Self::near_bottom(self.handle.offset().y, self.handle.max_offset().height)
    }

    fn was_near_bottom(&self) -> bool {
        Self::near_bottom(self.last_offset, self.last_max_offset)
    }

    fn near_bottom(offset: Pixels, max_offset: Pixels) -> bool {
        if max_offset <= Pixels::ZERO {
            return true;
        }
        (offset + max_offset).abs() <= FOLLOW_RESUME_THRESHOLD
    }
}

impl Default for ScrollManager {
    fn default() -> Self {
        Self::new()
    }
}
