/// Default easing of every tween on the page.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A time driven transition of a single value.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration: f32,
}

impl Tween {
    pub const DEFAULT_DURATION: f32 = 0.5;

    pub fn new(from: f32, to: f32, start: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration: Self::DEFAULT_DURATION,
        }
    }

    fn t(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) as f32) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self, now: f64) -> f32 {
        lerp(self.from, self.to, ease_out_quad(self.t(now)))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.t(now) >= 1.0
    }
}

/// Horizontal offsets a section strip moves between.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct PanRange {
    pub from: f32,
    pub to: f32,
}

impl PanRange {
    /// Even sections enter from the right and end aligned to the right edge,
    /// odd sections start fully off to the left and end at the origin.
    pub fn for_section(index: usize, content_width: f32, viewport_width: f32) -> Self {
        if index % 2 == 0 {
            Self {
                from: content_width,
                to: -(content_width - viewport_width),
            }
        } else {
            Self {
                from: -content_width,
                to: 0.0,
            }
        }
    }

    pub fn at(&self, progress: f32) -> f32 {
        lerp(self.from, self.to, progress)
    }
}

/// Scroll region that drives a section: it starts when the section top reaches the bottom
/// of the viewport and ends when the section bottom leaves through the top.
pub fn trigger_progress(scroll: f32, section_top: f32, section_height: f32, view_height: f32) -> f32 {
    let start = section_top - view_height;
    let length = section_height + view_height;
    if length <= 0.0 {
        return 1.0;
    }
    ((scroll - start) / length).clamp(0.0, 1.0)
}

/// An animation whose progress follows the scroll position instead of time.
#[derive(Clone, Copy, Debug)]
pub struct ScrollScrub {
    pub range: PanRange,
    smoothing: f32,
    progress: f32,
}

impl ScrollScrub {
    const SETTLED: f32 = 1e-4;

    /// `smoothing` is roughly the time, in seconds, the animation takes to catch up with
    /// the scroll position.
    pub fn new(range: PanRange, smoothing: f32, initial_progress: f32) -> Self {
        Self {
            range,
            smoothing: smoothing.max(0.0),
            progress: initial_progress.clamp(0.0, 1.0),
        }
    }

    #[cfg(test)]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased like a time based tween, only the clock is the scroll position.
    pub fn offset(&self) -> f32 {
        self.range.at(ease_out_quad(self.progress))
    }

    /// Moves toward `target`. Returns true while the animation is still catching up.
    pub fn advance(&mut self, target: f32, dt: f32) -> bool {
        let target = target.clamp(0.0, 1.0);
        if self.smoothing <= 0.0 {
            self.progress = target;
            return false;
        }
        let tau = self.smoothing / 3.0;
        let alpha = 1.0 - (-dt.max(0.0) / tau).exp();
        self.progress += (target - self.progress) * alpha;
        if (target - self.progress).abs() < Self::SETTLED {
            self.progress = target;
            false
        } else {
            true
        }
    }
}
