use eframe::egui::*;

/// The oversized banner text, shifted horizontally by the scroll-scrub.
pub struct Banner<'a> {
    text: &'a str,
    font_size: f32,
    offset: f32,
}

impl<'a> Banner<'a> {
    pub fn new(text: &'a str, font_size: f32, offset: f32) -> Self {
        Self {
            text,
            font_size,
            offset,
        }
    }

    /// Width of the laid out text, the strip the pan animation moves.
    pub fn measure(ui: &Ui, text: &str, font_size: f32) -> f32 {
        ui.painter()
            .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), Color32::WHITE)
            .size()
            .x
    }

    pub fn paint_at(&self, ui: &mut Ui, rect: Rect) {
        if !ui.is_rect_visible(rect) {
            return;
        }
        let pos = pos2(rect.left() + self.offset, rect.center().y);
        ui.painter_at(rect).text(
            pos,
            Align2::LEFT_CENTER,
            self.text,
            FontId::proportional(self.font_size),
            ui.visuals().strong_text_color(),
        );
    }
}
