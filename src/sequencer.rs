//! One-shot transition from the loading overlay to the interactive page.

use crate::animation::{trigger_progress, PanRange, ScrollScrub, Tween};
use crate::layout::{PageLayout, Section};
use crate::loader::{LoadEvent, LoadProgress, LoadedImage};
use crate::viewport::ViewportController;
use log::{debug, info, warn};

/// Where the loading percentage is written.
pub trait ProgressDisplay {
    fn set_progress_text(&mut self, text: String);
}

struct Revealed {
    fade: Tween,
    scrubs: Vec<ScrollScrub>,
    view_width: f32,
}

pub struct Sequencer {
    scrub_smoothing: f32,
    revealed: Option<Revealed>,
}

impl Sequencer {
    pub fn new(scrub_smoothing: f32) -> Self {
        Self {
            scrub_smoothing,
            revealed: None,
        }
    }

    /// Called once the page is on screen: nothing scrolls until the reveal.
    pub fn mount(&mut self, viewport: &mut impl ViewportController, display: &mut impl ProgressDisplay) {
        viewport.lock();
        display.set_progress_text(LoadProgress { loaded: 0, total: 1 }.label());
    }

    pub fn on_progress(&mut self, progress: LoadProgress, display: &mut impl ProgressDisplay) {
        debug!("Loading progress: {}/{}", progress.loaded, progress.total);
        display.set_progress_text(progress.label());
    }

    /// Runs the reveal. Returns false if it already happened.
    pub fn on_always(
        &mut self,
        now: f64,
        viewport: &mut impl ViewportController,
        sections: &[Section],
        view_width: f32,
        view_height: f32,
    ) -> bool {
        if self.revealed.is_some() {
            warn!("Ignoring repeated load completion");
            return false;
        }
        viewport.unlock();
        viewport.scroll_to_top();
        let fade = Tween::new(1.0, 0.0, now);
        let scrubs = self.build_scrubs(sections, view_width, view_height, 0.0);
        info!("All images settled, revealing {} sections", scrubs.len());
        self.revealed = Some(Revealed {
            fade,
            scrubs,
            view_width,
        });
        true
    }

    /// Feeds a frame's worth of watcher events through the sequence and returns the
    /// settled images. `None` means no watcher is running, which counts as finished.
    pub fn process_events(
        &mut self,
        events: Option<Vec<LoadEvent>>,
        now: f64,
        viewport: &mut impl ViewportController,
        display: &mut impl ProgressDisplay,
        layout: &PageLayout,
    ) -> Vec<LoadedImage> {
        let mut completed = events.is_none() && !self.is_revealed();
        let mut images = Vec::new();
        for event in events.into_iter().flatten() {
            match event {
                LoadEvent::Progress { progress, image } => {
                    self.on_progress(progress, display);
                    images.push(image);
                }
                LoadEvent::Always => completed = true,
            }
        }
        if completed {
            self.on_always(
                now,
                viewport,
                &layout.sections(),
                layout.view_width,
                layout.view_height,
            );
        }
        images
    }

    fn build_scrubs(&self, sections: &[Section], view_width: f32, view_height: f32, scroll: f32) -> Vec<ScrollScrub> {
        sections
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let range = PanRange::for_section(i, s.content_width, view_width);
                let start = trigger_progress(scroll, s.top, s.height, view_height);
                ScrollScrub::new(range, self.scrub_smoothing, start)
            })
            .collect()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.is_some()
    }

    /// Opacity of the loading overlay.
    pub fn overlay_alpha(&self, now: f64) -> f32 {
        match &self.revealed {
            None => 1.0,
            Some(r) => r.fade.value(now),
        }
    }

    /// The overlay swallows pointer input until it has fully faded.
    pub fn overlay_visible(&self, now: f64) -> bool {
        match &self.revealed {
            None => true,
            Some(r) => !r.fade.is_finished(now),
        }
    }

    /// Advances every scroll-scrub toward the current scroll position. Pan ranges are
    /// recomputed when the viewport width changed. Returns true while anything is
    /// still moving.
    pub fn animate(
        &mut self,
        now: f64,
        dt: f32,
        scroll: f32,
        sections: &[Section],
        view_width: f32,
        view_height: f32,
    ) -> bool {
        let revealed = match &mut self.revealed {
            None => return false,
            Some(r) => r,
        };
        if revealed.view_width != view_width || revealed.scrubs.len() != sections.len() {
            debug!("Viewport width changed to {}, refreshing pan ranges", view_width);
            for (i, (scrub, s)) in revealed.scrubs.iter_mut().zip(sections).enumerate() {
                scrub.range = PanRange::for_section(i, s.content_width, view_width);
            }
            revealed.view_width = view_width;
        }
        let mut moving = !revealed.fade.is_finished(now);
        for (scrub, s) in revealed.scrubs.iter_mut().zip(sections) {
            let target = trigger_progress(scroll, s.top, s.height, view_height);
            moving |= scrub.advance(target, dt);
        }
        moving
    }

    /// Horizontal offset of section `index`; zero before the reveal.
    pub fn section_offset(&self, index: usize) -> f32 {
        self.revealed
            .as_ref()
            .and_then(|r| r.scrubs.get(index))
            .map(|s| s.offset())
            .unwrap_or(0.0)
    }
}
