mod banner;
mod footer;
mod gallery_row;
mod header;
mod loader_overlay;

pub use banner::Banner;
pub use footer::Footer;
pub use gallery_row::GalleryRow;
pub use header::Header;
pub use loader_overlay::LoaderOverlay;
