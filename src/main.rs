mod animation;
mod content;
mod gallery;
mod image_data;
mod layout;
mod loader;
mod sequencer;
mod viewport;
mod widgets;

use image_data::ImageData;

use clap::Parser;
use content::{ImageRecord, Language, PageText, IMAGES, WINDOW_TITLE};
use eframe::egui::{self, Context, Rect};
use gallery::RowGroup;
use layout::{BlockKind, PageLayout};
use loader::LoadWatch;
use log::{error, info, trace, LevelFilter};
use sequencer::Sequencer;
use simple_logger::SimpleLogger;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use viewport::{ScrollKey, Viewport};
use widgets::{Banner, Footer, GalleryRow, Header, LoaderOverlay};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct CliArguments {
    /// Directory holding the gallery screenshots
    #[clap(long, default_value = "assets")]
    assets: PathBuf,
    /// Locale such as `es-ES`, taken from the environment when omitted
    #[clap(long)]
    locale: Option<String>,
    /// Seconds the gallery strips take to catch up with the scroll position
    #[clap(long, default_value_t = 0.5)]
    scrub: f32,
}

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Failed to initialise logging: {}", err);
    }
    let args = CliArguments::parse();
    let language = match args.locale.as_deref() {
        Some(locale) => Language::from_locale(&content::normalize_locale(locale)),
        None => Language::from_env(),
    };
    info!("Using {:?} text", language);
    let mut options = eframe::NativeOptions::default();
    options.initial_window_size = Some(egui::Vec2::new(1280 as _, 800 as _));
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let app = PortfolioApp::new(cc.egui_ctx.clone(), &args.assets, language, args.scrub);
            Box::new(app)
        }),
    );
}

const SCROLL_KEYS: [(egui::Key, ScrollKey); 6] = [
    (egui::Key::ArrowUp, ScrollKey::LineUp),
    (egui::Key::ArrowDown, ScrollKey::LineDown),
    (egui::Key::PageUp, ScrollKey::PageUp),
    (egui::Key::PageDown, ScrollKey::PageDown),
    (egui::Key::Home, ScrollKey::Home),
    (egui::Key::End, ScrollKey::End),
];

/// What a frame takes from the egui input state.
struct FrameInput {
    now: f64,
    dt: f32,
    scroll_delta: f32,
    keys: Vec<ScrollKey>,
}

impl FrameInput {
    fn read(input: &egui::InputState) -> Self {
        let mut keys: Vec<ScrollKey> = SCROLL_KEYS
            .iter()
            .filter(|(key, _)| input.key_pressed(*key))
            .map(|&(_, step)| step)
            .collect();
        if input.key_pressed(egui::Key::Space) {
            keys.push(if input.modifiers.shift {
                ScrollKey::PageUp
            } else {
                ScrollKey::PageDown
            });
        }
        Self {
            now: input.time,
            dt: input.predicted_dt,
            scroll_delta: input.scroll_delta.y,
            keys,
        }
    }
}

struct PortfolioApp {
    cc: Context,
    text: PageText,
    rows: Vec<RowGroup<ImageRecord>>,
    images: HashMap<&'static str, ImageData>,
    watch: Option<LoadWatch>,
    sequencer: Sequencer,
    viewport: Viewport,
    overlay: LoaderOverlay,
}

impl PortfolioApp {
    fn new(cc: Context, assets: &Path, language: Language, scrub: f32) -> Self {
        let rows = gallery::partition(IMAGES.iter().cloned(), &mut rand::thread_rng());
        let rendered: Vec<ImageRecord> = rows.iter().flatten().cloned().collect();
        trace!(
            "Gallery order: {:?}",
            rendered.iter().map(|r| r.uri).collect::<Vec<_>>()
        );

        let mut viewport = Viewport::new();
        let mut overlay = LoaderOverlay::new();
        let mut sequencer = Sequencer::new(scrub);
        sequencer.mount(&mut viewport, &mut overlay);

        let repaint_ctx = cc.clone();
        let watch = match loader::watch(rendered, assets, move || repaint_ctx.request_repaint()) {
            Ok(watch) => {
                info!("Loading {} images from {}", watch.total(), assets.display());
                Some(watch)
            }
            Err(err) => {
                error!("Can't start image loading: {}", err);
                None
            }
        };

        Self {
            cc,
            text: PageText::new(language),
            rows,
            images: HashMap::new(),
            watch,
            sequencer,
            viewport,
            overlay,
        }
    }

    fn process_load_events(&mut self, layout: &PageLayout, now: f64) {
        let events = self.watch.as_ref().map(|watch| watch.try_iter().collect());
        let images = self
            .sequencer
            .process_events(events, now, &mut self.viewport, &mut self.overlay, layout);
        for image in images {
            let data = ImageData::new(image, &self.cc);
            self.images.insert(data.record.uri, data);
        }
        if self.sequencer.is_revealed() {
            self.watch = None;
        }
    }

    fn page_ui(&mut self, ui: &mut egui::Ui, input: &FrameInput) {
        let now = input.now;
        let view = ui.max_rect();
        let banner_font = layout::banner_font_size(view.height());
        let banner_width = Banner::measure(ui, self.text.banner, banner_font);
        let row_sizes: Vec<usize> = self.rows.iter().map(|r| r.len()).collect();
        let layout = PageLayout::new(view.width(), view.height(), banner_width, &row_sizes);

        self.process_load_events(&layout, now);

        self.viewport.set_extent(view.height(), layout.content_height());
        self.viewport.scroll_by(input.scroll_delta);
        for &key in input.keys.iter() {
            self.viewport.scroll_key(key);
        }
        let sections = layout.sections();
        let moving = self.sequencer.animate(
            now,
            input.dt,
            self.viewport.offset(),
            &sections,
            view.width(),
            view.height(),
        );
        if moving {
            ui.ctx().request_repaint();
        }

        let (image_w, image_h) = layout::gallery_image_size(view.height());
        let scroll = self.viewport.offset();
        let mut section = 0;
        for block in layout.blocks.iter() {
            let rect = Rect::from_min_size(
                egui::pos2(view.left(), view.top() + block.top - scroll),
                egui::vec2(view.width(), block.height),
            );
            let offset = if block.is_section() {
                section += 1;
                self.sequencer.section_offset(section - 1)
            } else {
                0.0
            };
            if !view.intersects(rect) {
                continue;
            }
            match block.kind {
                BlockKind::Header => {
                    ui.allocate_ui_at_rect(rect, |ui| Header::new(&self.text).ui(ui));
                }
                BlockKind::Banner => Banner::new(self.text.banner, banner_font, offset).paint_at(ui, rect),
                BlockKind::Gallery(row) => {
                    let images = &self.images;
                    GalleryRow::new(
                        &self.rows[row],
                        |r| images.get(r.uri),
                        egui::vec2(image_w, image_h),
                        offset,
                    )
                    .paint_at(ui, rect);
                }
                BlockKind::Footer => {
                    ui.put(rect, Footer);
                }
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn on_exit_event(&mut self) -> bool {
        trace!("Closing application");
        true
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        frame.set_window_title(WINDOW_TITLE);
        let input = FrameInput::read(&ctx.input());
        let now = input.now;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ctx.style().visuals.window_fill()))
            .show(ctx, |ui| self.page_ui(ui, &input));

        if self.sequencer.overlay_visible(now) {
            self.overlay.show(ctx, self.sequencer.overlay_alpha(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Key, Modifiers};

    fn pressed(key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            pressed: true,
            modifiers,
        }
    }

    #[test]
    fn frame_input_reads_clock_and_wheel() {
        let mut input = egui::InputState::default();
        input.time = 2.5;
        input.predicted_dt = 1.0 / 30.0;
        input.scroll_delta = egui::vec2(0.0, -12.0);
        let frame = FrameInput::read(&input);
        assert_eq!(frame.now, 2.5);
        assert_eq!(frame.dt, 1.0 / 30.0);
        assert_eq!(frame.scroll_delta, -12.0);
        assert!(frame.keys.is_empty());

        assert!(FrameInput::read(&egui::InputState::default()).dt > 0.0);
    }

    #[test]
    fn frame_input_maps_navigation_keys() {
        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        let mut input = egui::InputState::default();
        input.events = vec![
            pressed(Key::PageDown, Modifiers::default()),
            pressed(Key::ArrowUp, Modifiers::default()),
            pressed(Key::Space, shift),
            Event::Key {
                key: Key::End,
                pressed: false,
                modifiers: Modifiers::default(),
            },
        ];
        let frame = FrameInput::read(&input);
        assert_eq!(
            frame.keys,
            vec![ScrollKey::LineUp, ScrollKey::PageDown, ScrollKey::PageUp]
        );
    }
}
