//! Vertical placement of the page blocks, in page coordinates (y = 0 is the page top).

use crate::content::{IMAGE_HEIGHT, IMAGE_WIDTH};

pub const IMAGE_GAP: f32 = 32.0;
pub const SECTION_PADDING: f32 = 48.0;
pub const FOOTER_HEIGHT: f32 = 120.0;
const GALLERY_HEIGHT_RATIO: f32 = 0.6;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BlockKind {
    Header,
    Banner,
    /// Index into the row groups.
    Gallery(usize),
    Footer,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Block {
    pub kind: BlockKind,
    pub top: f32,
    pub height: f32,
    /// Width of the strip inside the block; only meaningful for sections.
    pub content_width: f32,
}

impl Block {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn is_section(&self) -> bool {
        matches!(self.kind, BlockKind::Banner | BlockKind::Gallery(_))
    }
}

/// A horizontally panned block, numbered in page order.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Section {
    pub top: f32,
    pub height: f32,
    pub content_width: f32,
}

pub fn banner_font_size(view_height: f32) -> f32 {
    (view_height * 0.2).clamp(48.0, 220.0)
}

pub fn gallery_image_size(view_height: f32) -> (f32, f32) {
    let h = (view_height * GALLERY_HEIGHT_RATIO).max(1.0);
    (h * IMAGE_WIDTH / IMAGE_HEIGHT, h)
}

fn row_width(items: usize, image_width: f32) -> f32 {
    if items == 0 {
        return 0.0;
    }
    items as f32 * image_width + (items - 1) as f32 * IMAGE_GAP
}

#[derive(Clone, Debug)]
pub struct PageLayout {
    pub view_width: f32,
    pub view_height: f32,
    pub blocks: Vec<Block>,
}

impl PageLayout {
    /// `banner_width` is the measured width of the banner text at `banner_font_size`,
    /// `rows` the number of images in every gallery row.
    pub fn new(view_width: f32, view_height: f32, banner_width: f32, rows: &[usize]) -> Self {
        let mut blocks = Vec::with_capacity(rows.len() + 4);
        let mut top = 0.0;
        let mut push = |kind, height: f32, content_width: f32| {
            blocks.push(Block {
                kind,
                top,
                height,
                content_width,
            });
            top += height;
        };

        let banner_height = banner_font_size(view_height) * 1.3;
        let (image_w, image_h) = gallery_image_size(view_height);

        push(BlockKind::Header, view_height, view_width);
        push(BlockKind::Banner, banner_height, banner_width);
        for (i, items) in rows.iter().enumerate() {
            push(
                BlockKind::Gallery(i),
                image_h + 2.0 * SECTION_PADDING,
                row_width(*items, image_w),
            );
        }
        push(BlockKind::Banner, banner_height, banner_width);
        push(BlockKind::Footer, FOOTER_HEIGHT, view_width);

        Self {
            view_width,
            view_height,
            blocks,
        }
    }

    pub fn content_height(&self) -> f32 {
        self.blocks.last().map(|b| b.bottom()).unwrap_or(0.0)
    }

    pub fn sections(&self) -> Vec<Section> {
        self.blocks
            .iter()
            .filter(|b| b.is_section())
            .map(|b| Section {
                top: b.top,
                height: b.height,
                content_width: b.content_width,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_stacked_in_page_order() {
        let layout = PageLayout::new(1000.0, 800.0, 2400.0, &[3, 3, 1]);
        let kinds: Vec<_> = layout.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Header,
                BlockKind::Banner,
                BlockKind::Gallery(0),
                BlockKind::Gallery(1),
                BlockKind::Gallery(2),
                BlockKind::Banner,
                BlockKind::Footer,
            ]
        );
        for pair in layout.blocks.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(layout.blocks[0].height, 800.0);
        assert_eq!(layout.content_height(), layout.blocks[6].bottom());
    }

    #[test]
    fn sections_skip_header_and_footer() {
        let layout = PageLayout::new(1000.0, 800.0, 2400.0, &[3, 2]);
        let sections = layout.sections();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].content_width, 2400.0);
        assert_eq!(sections[3].content_width, 2400.0);

        let (w, _) = gallery_image_size(800.0);
        assert!((sections[1].content_width - (3.0 * w + 2.0 * IMAGE_GAP)).abs() < 1e-3);
        assert!((sections[2].content_width - (2.0 * w + IMAGE_GAP)).abs() < 1e-3);
    }

    #[test]
    fn empty_gallery_still_has_banners() {
        let layout = PageLayout::new(640.0, 480.0, 900.0, &[]);
        assert_eq!(layout.sections().len(), 2);
    }
}
