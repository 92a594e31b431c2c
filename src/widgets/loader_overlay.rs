use crate::sequencer::ProgressDisplay;
use eframe::egui::*;

/// Full window layer shown until the page is revealed. It sits on the foreground
/// layer and takes every click while visible, so nothing underneath reacts.
pub struct LoaderOverlay {
    text: String,
}

fn faded(color: Color32, alpha: f32) -> Color32 {
    let a = (color.a() as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

impl LoaderOverlay {
    const BACKGROUND: Color32 = Color32::from_rgb(17, 17, 17);

    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn show(&self, ctx: &Context, alpha: f32) {
        let screen = ctx.input().screen_rect();
        Area::new("loader")
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen.size(), Sense::click_and_drag());
                let painter = ui.painter();
                painter.rect_filled(rect, Rounding::none(), faded(Self::BACKGROUND, alpha));
                painter.text(
                    rect.center() - vec2(0.0, 32.0),
                    Align2::CENTER_CENTER,
                    "Loading...",
                    FontId::proportional(48.0),
                    faded(Color32::WHITE, alpha),
                );
                painter.text(
                    rect.center() + vec2(0.0, 32.0),
                    Align2::CENTER_CENTER,
                    &self.text,
                    FontId::proportional(32.0),
                    faded(Color32::LIGHT_GRAY, alpha),
                );
            });
    }
}

impl ProgressDisplay for LoaderOverlay {
    fn set_progress_text(&mut self, text: String) {
        self.text = text;
    }
}
