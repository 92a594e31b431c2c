use crate::content::{PageText, AUTHOR, SITE_URI};
use eframe::egui::*;
use egui_extras::{Size, StripBuilder};

pub struct Header<'a> {
    text: &'a PageText,
}

impl<'a> Header<'a> {
    pub fn new(text: &'a PageText) -> Self {
        Self { text }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let text = self.text;
        StripBuilder::new(ui)
            .size(Size::remainder())
            .size(Size::exact(64.0)) // author
            .size(Size::exact(48.0)) // title
            .size(Size::exact(96.0)) // subtitle
            .size(Size::remainder())
            .vertical(|mut strip| {
                strip.empty();
                strip.cell(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.hyperlink_to(RichText::new(AUTHOR).size(44.0).strong(), SITE_URI);
                    });
                });
                strip.cell(|ui| {
                    ui.vertical_centered(|ui| ui.label(RichText::new(text.title).size(32.0)));
                });
                strip.cell(|ui| {
                    ui.vertical_centered(|ui| ui.label(RichText::new(text.subtitle).size(18.0)));
                });
                strip.empty();
            });
    }
}
