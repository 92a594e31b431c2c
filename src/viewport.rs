/// Global scroll state of the page, kept behind a trait so the reveal sequence can be
/// exercised without a window.
pub trait ViewportController {
    fn lock(&mut self);
    fn unlock(&mut self);
    fn scroll_to_top(&mut self);
}

/// Keyboard navigation steps, matching what a browser page responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Distance moved by an arrow key.
pub const LINE_STEP: f32 = 40.0;
/// Share of the view a page step moves, leaving some overlap for context.
const PAGE_FRACTION: f32 = 0.875;

#[derive(Debug, Clone)]
pub struct Viewport {
    offset: f32,
    locked: bool,
    view_height: f32,
    content_height: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            locked: false,
            view_height: 0.0,
            content_height: 0.0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_extent(&mut self, view_height: f32, content_height: f32) {
        self.view_height = view_height;
        self.content_height = content_height;
        self.fix_bounds();
    }

    /// Applies a wheel delta (positive scrolls up, like egui reports it).
    /// Returns true if the offset moved.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        if self.locked || delta == 0.0 {
            return false;
        }
        let before = self.offset;
        self.offset -= delta;
        self.fix_bounds();
        before != self.offset
    }

    /// Same lock and clamping rules as the wheel. Returns true if the offset moved.
    pub fn scroll_key(&mut self, key: ScrollKey) -> bool {
        if self.locked {
            return false;
        }
        let page = self.view_height * PAGE_FRACTION;
        let before = self.offset;
        self.offset = match key {
            ScrollKey::LineUp => self.offset - LINE_STEP,
            ScrollKey::LineDown => self.offset + LINE_STEP,
            ScrollKey::PageUp => self.offset - page,
            ScrollKey::PageDown => self.offset + page,
            ScrollKey::Home => 0.0,
            ScrollKey::End => self.max_offset(),
        };
        self.fix_bounds();
        before != self.offset
    }

    fn max_offset(&self) -> f32 {
        (self.content_height - self.view_height).max(0.0)
    }

    fn fix_bounds(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}

impl ViewportController for Viewport {
    fn lock(&mut self) {
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn scroll_to_top(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_viewport_ignores_wheel() {
        let mut vp = Viewport::new();
        vp.set_extent(600.0, 2000.0);
        vp.lock();
        assert!(!vp.scroll_by(-100.0));
        assert_eq!(vp.offset(), 0.0);
        vp.unlock();
        assert!(vp.scroll_by(-100.0));
        assert_eq!(vp.offset(), 100.0);
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let mut vp = Viewport::new();
        vp.set_extent(600.0, 1000.0);
        vp.scroll_by(-5000.0);
        assert_eq!(vp.offset(), 400.0);
        vp.scroll_by(5000.0);
        assert_eq!(vp.offset(), 0.0);
        vp.scroll_by(-300.0);
        vp.set_extent(900.0, 1000.0);
        assert_eq!(vp.offset(), 100.0);
    }

    #[test]
    fn keys_scroll_by_line_and_page() {
        let mut vp = Viewport::new();
        vp.set_extent(800.0, 3000.0);
        assert!(vp.scroll_key(ScrollKey::LineDown));
        assert_eq!(vp.offset(), LINE_STEP);
        vp.scroll_key(ScrollKey::PageDown);
        assert_eq!(vp.offset(), LINE_STEP + 700.0);
        vp.scroll_key(ScrollKey::PageUp);
        vp.scroll_key(ScrollKey::LineUp);
        assert_eq!(vp.offset(), 0.0);
        assert!(!vp.scroll_key(ScrollKey::LineUp));
        vp.scroll_key(ScrollKey::End);
        assert_eq!(vp.offset(), 2200.0);
        assert!(!vp.scroll_key(ScrollKey::PageDown));
        vp.scroll_key(ScrollKey::Home);
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn locked_viewport_ignores_keys() {
        let mut vp = Viewport::new();
        vp.set_extent(800.0, 3000.0);
        vp.lock();
        for key in [ScrollKey::LineDown, ScrollKey::PageDown, ScrollKey::End] {
            assert!(!vp.scroll_key(key));
        }
        assert_eq!(vp.offset(), 0.0);
        vp.unlock();
        assert!(vp.scroll_key(ScrollKey::End));
    }

    #[test]
    fn scroll_to_top_resets_offset() {
        let mut vp = Viewport::new();
        vp.set_extent(100.0, 1000.0);
        vp.scroll_by(-250.0);
        vp.scroll_to_top();
        assert_eq!(vp.offset(), 0.0);
    }
}
