use crate::content::ImageRecord;
use crate::loader::LoadedImage;
use eframe::egui::{ColorImage, Context, TextureHandle, TextureId};
use image::RgbaImage;

/// What the gallery knows about one record once its load settled.
pub struct ImageData {
    pub record: ImageRecord,
    texture_handle: Option<TextureHandle>,
    pub error_msg: Option<String>,
}

fn to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_flat_samples().as_slice())
}

impl ImageData {
    pub fn new(loaded: LoadedImage, ctx: &Context) -> Self {
        match loaded.image {
            Ok(img) => {
                let texture_handle = ctx.load_texture(loaded.record.uri, to_color_image(&img));
                Self {
                    record: loaded.record,
                    texture_handle: Some(texture_handle),
                    error_msg: None,
                }
            }
            Err(err) => Self {
                record: loaded.record,
                texture_handle: None,
                error_msg: Some(err.to_string()),
            },
        }
    }

    /// `None` when the image failed to load and has to be drawn as broken.
    pub fn texture_id(&self) -> Option<TextureId> {
        self.texture_handle.as_ref().map(|t| t.id())
    }
}
