use crate::content::{FOOTER_LINK_TEXT, FOOTER_TEXT, SITE_URI};
use eframe::egui::*;

pub struct Footer;

impl Widget for Footer {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() / 2.0 - 24.0).max(0.0));
            ui.label(FOOTER_TEXT);
            ui.hyperlink_to(FOOTER_LINK_TEXT, SITE_URI);
        })
        .response
    }
}
