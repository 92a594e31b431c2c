use crate::content::{ImageRecord, IMAGE_HEIGHT};
use crossbeam::channel::{unbounded, Receiver, Sender, TryIter};
use image::io::Reader as ImageReader;
pub use image::RgbaImage;
use log::{error, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("decoder panicked on {}", path.display())]
    Panicked { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
}

impl LoadProgress {
    /// Whole percentage, rounded half up. Nothing to load counts as done.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        (self.loaded * 200 + self.total) / (self.total * 2)
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }
}

#[derive(Debug)]
pub struct LoadedImage {
    pub record: ImageRecord,
    pub image: Result<RgbaImage, LoadError>,
}

#[derive(Debug)]
pub enum LoadEvent {
    /// One more image settled, successfully or not.
    Progress {
        progress: LoadProgress,
        image: LoadedImage,
    },
    /// Every image settled. Sent once, after the last `Progress`.
    Always,
}

pub struct LoadWatch {
    receiver: Receiver<LoadEvent>,
    total: usize,
    // Keeps the decoders alive until the watch is dropped.
    #[allow(dead_code)]
    pool: ThreadPool,
}

impl LoadWatch {
    pub fn total(&self) -> usize {
        self.total
    }

    /// Events that are ready now, without blocking the UI thread.
    pub fn try_iter(&self) -> TryIter<'_, LoadEvent> {
        self.receiver.try_iter()
    }

    /// Blocks until the watcher is done. Yields the `Always` event last.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = LoadEvent> + '_ {
        self.receiver.iter()
    }
}

/// Largest height a decoded image is kept at; the gallery never draws them bigger.
const MAX_IMAGE_HEIGHT: u32 = IMAGE_HEIGHT as u32;

fn fit_height(img: RgbaImage, max_height: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if h <= max_height {
        return img;
    }
    let s = max_height as f32 / h as f32;
    let w = ((w as f32 * s).floor() as u32).max(1);
    image::imageops::thumbnail(&img, w, max_height)
}

fn load_image(path: &Path) -> Result<RgbaImage, LoadError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(fit_height(image.to_rgba8(), MAX_IMAGE_HEIGHT))
}

/// Runs `load` so that a panicking decoder settles the image as failed.
fn settle<L>(path: &Path, load: L) -> Result<RgbaImage, LoadError>
where
    L: FnOnce(&Path) -> Result<RgbaImage, LoadError>,
{
    panic::catch_unwind(AssertUnwindSafe(|| load(path))).unwrap_or_else(|_| {
        Err(LoadError::Panicked {
            path: path.to_path_buf(),
        })
    })
}

fn build_pool() -> std::io::Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_cpus::get().min(4))
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Counts settled images and forwards them, then emits the single `Always`.
fn spawn_collector<F>(
    results: Receiver<LoadedImage>,
    events: Sender<LoadEvent>,
    total: usize,
    notifier: F,
) where
    F: Fn() + Send + 'static,
{
    std::thread::spawn(move || {
        let mut loaded = 0;
        while loaded < total {
            let image = match results.recv() {
                Ok(image) => image,
                Err(e) => {
                    error!("Image decoders stopped before finishing: {}", e);
                    break;
                }
            };
            loaded += 1;
            match &image.image {
                Ok(_) => trace!("Image loaded: {} ({}/{})", image.record.uri, loaded, total),
                Err(err) => warn!("{}", err),
            }
            let progress = LoadProgress { loaded, total };
            if events.send(LoadEvent::Progress { progress, image }).is_err() {
                return;
            }
            notifier();
        }
        if events.send(LoadEvent::Always).is_ok() {
            notifier();
        }
    });
}

/// Starts loading every record from `asset_dir`. `notifier` is called after each event
/// is queued, the app uses it to request a repaint.
pub fn watch<F>(records: Vec<ImageRecord>, asset_dir: &Path, notifier: F) -> std::io::Result<LoadWatch>
where
    F: Fn() + Send + 'static,
{
    let (event_send, event_recv) = unbounded();
    let (result_send, result_recv) = unbounded();
    let total = records.len();
    let pool = build_pool()?;

    for record in records {
        let sender = result_send.clone();
        let path = asset_dir.join(record.uri);
        pool.spawn(move || {
            let image = settle(&path, load_image);
            if let Err(e) = sender.send(LoadedImage { record, image }) {
                error!("Can't send image to collector: {}", e);
            }
        });
    }
    drop(result_send);
    spawn_collector(result_recv, event_send, total, notifier);

    Ok(LoadWatch {
        receiver: event_recv,
        total,
        pool,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::IMAGES;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) {
        let img = RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]));
        img.save(dir.join(name)).unwrap();
    }

    fn collect(watch: &LoadWatch) -> (Vec<LoadProgress>, Vec<LoadedImage>, usize) {
        let mut progress = Vec::new();
        let mut images = Vec::new();
        let mut always = 0;
        for event in watch.iter() {
            match event {
                LoadEvent::Progress { progress: p, image } => {
                    assert_eq!(always, 0, "progress after completion");
                    progress.push(p);
                    images.push(image);
                }
                LoadEvent::Always => always += 1,
            }
        }
        (progress, images, always)
    }

    #[test]
    fn percent_rounds_half_up() {
        let p = |loaded, total| LoadProgress { loaded, total }.label();
        assert_eq!(p(0, 6), "0%");
        assert_eq!(p(1, 6), "17%");
        assert_eq!(p(1, 3), "33%");
        assert_eq!(p(2, 3), "67%");
        assert_eq!(p(1, 8), "13%");
        assert_eq!(p(6, 6), "100%");
        assert_eq!(p(0, 0), "100%");
    }

    #[test]
    fn mixed_results_complete_once() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "hk.png", 40, 30);
        write_png(dir.path(), "i3.png", 10, 2000);
        std::fs::write(dir.path().join("dororo.png"), b"not a png").unwrap();

        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        let records = IMAGES[..4].to_vec();
        let watch = watch(records, dir.path(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        assert_eq!(watch.total(), 4);

        let (progress, images, always) = collect(&watch);
        assert_eq!(always, 1);
        assert_eq!(
            progress.iter().map(|p| p.loaded).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(progress.last().unwrap().label(), "100%");
        assert_eq!(notified.load(Ordering::SeqCst), 5);

        let find = |uri: &str| images.iter().find(|i| i.record.uri == uri).unwrap();
        assert!(find("hk.png").image.is_ok());
        assert_eq!(
            find("i3.png").image.as_ref().unwrap().height(),
            MAX_IMAGE_HEIGHT
        );
        assert!(matches!(find("dororo.png").image, Err(LoadError::Decode { .. })));
        assert!(matches!(find("fh.png").image, Err(LoadError::Open { .. })));
    }

    #[test]
    fn decoder_panic_settles_as_failure() {
        let path = Path::new("assets/hk.png");
        let result = settle(path, |_| panic!("corrupt header"));
        match result {
            Err(LoadError::Panicked { path: p }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }

        let ok = settle(path, |_| Ok(RgbaImage::new(3, 2))).unwrap();
        assert_eq!(ok.dimensions(), (3, 2));
        assert!(matches!(
            settle(&Path::new("missing").join("hk.png"), load_image),
            Err(LoadError::Open { .. })
        ));
    }

    #[test]
    fn all_failed_still_completes() {
        let dir = tempfile::tempdir().unwrap();
        let watch = watch(IMAGES.to_vec(), &dir.path().join("missing"), || {}).unwrap();
        let (progress, images, always) = collect(&watch);
        assert_eq!(always, 1);
        assert_eq!(progress.len(), 6);
        assert!(images.iter().all(|i| i.image.is_err()));
    }

    #[test]
    fn no_images_completes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let watch = watch(Vec::new(), dir.path(), || {}).unwrap();
        let (progress, _, always) = collect(&watch);
        assert!(progress.is_empty());
        assert_eq!(always, 1);
    }
}
