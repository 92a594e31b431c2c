use crate::content::ImageRecord;
use crate::gallery::RowGroup;
use crate::layout::IMAGE_GAP;
use crate::ImageData;
use arrayvec::ArrayVec;
use eframe::egui::*;

/// Full texture stretched over `rect`.
fn image_mesh(texture_id: TextureId, rect: Rect) -> Mesh {
    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    let mut mesh = Mesh::with_texture(texture_id);
    mesh.add_rect_with_uv(rect, uv, Color32::WHITE);
    mesh
}

/// One gallery section: up to three linked screenshots on a strip shifted by `offset`.
pub struct GalleryRow<'a> {
    items: ArrayVec<(&'a ImageRecord, Option<&'a ImageData>), 3>,
    image_size: Vec2,
    offset: f32,
}

impl<'a> GalleryRow<'a> {
    pub fn new(
        row: &'a RowGroup<ImageRecord>,
        lookup: impl Fn(&ImageRecord) -> Option<&'a ImageData>,
        image_size: Vec2,
        offset: f32,
    ) -> Self {
        let items = row.iter().map(|r| (r, lookup(r))).collect();
        Self {
            items,
            image_size,
            offset,
        }
    }

    fn paint_broken(ui: &Ui, painter: &Painter, rect: Rect, alt_text: &str) {
        let visuals = ui.visuals();
        painter.rect(
            rect,
            Rounding::none(),
            visuals.faint_bg_color,
            visuals.widgets.noninteractive.bg_stroke,
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("🖼 {}", alt_text),
            FontId::proportional(20.0),
            visuals.weak_text_color(),
        );
    }

    pub fn paint_at(&self, ui: &mut Ui, rect: Rect) {
        if !ui.is_rect_visible(rect) {
            return;
        }
        let painter = ui.painter_at(rect);
        let top = rect.center().y - self.image_size.y / 2.0;
        let mut left = rect.left() + self.offset;
        for &(record, data) in self.items.iter() {
            let image_rect = Rect::from_min_size(pos2(left, top), self.image_size);
            left += self.image_size.x + IMAGE_GAP;

            let visible = image_rect.intersect(rect);
            if visible.width() <= 0.0 || visible.height() <= 0.0 {
                continue;
            }
            match data.and_then(|d| d.texture_id()) {
                Some(texture_id) => {
                    painter.add(Shape::mesh(image_mesh(texture_id, image_rect)));
                }
                None if data.is_some() => Self::paint_broken(ui, &painter, image_rect, record.alt_text),
                None => {
                    painter.rect_filled(image_rect, Rounding::none(), ui.visuals().faint_bg_color);
                }
            }

            let hover = match data.and_then(|d| d.error_msg.as_deref()) {
                Some(err) => format!("{}\n{}", record.alt_text, err),
                None => record.alt_text.to_owned(),
            };
            let id = ui.id().with(record.uri);
            let resp = ui
                .interact(visible, id, Sense::click())
                .on_hover_cursor(CursorIcon::PointingHand)
                .on_hover_text(hover);
            if resp.clicked() {
                ui.ctx().output().open_url(record.link_uri);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mesh_covers_rect_with_whole_texture() {
        let texture_id = TextureId::User(7);
        let rect = Rect::from_min_size(pos2(-100.0, 20.0), vec2(620.0, 437.0));
        let mesh = image_mesh(texture_id, rect);
        assert_eq!(mesh.texture_id, texture_id);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0].pos, rect.left_top());
        assert_eq!(mesh.vertices[0].uv, pos2(0.0, 0.0));
        let far = mesh.vertices.iter().find(|v| v.pos == rect.right_bottom()).unwrap();
        assert_eq!(far.uv, pos2(1.0, 1.0));
        assert!(mesh.vertices.iter().all(|v| v.color == Color32::WHITE));
    }
}
