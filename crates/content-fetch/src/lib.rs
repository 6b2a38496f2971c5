//! content-fetch — concurrent fetch, decode and render of images and text.

pub mod display;
pub mod fetcher;
pub mod media;
pub mod render;
pub mod surface;
pub mod types;

pub use display::{display_content, display_content_or_log, retrieve_all, DisplayPlan};
pub use fetcher::{decode_body, ContentFetcher};
pub use media::{inspect_image, sniff_mime, ImageInfo, ObjectUrl};
pub use render::{mount, to_element};
pub use surface::{DisplaySurface, Element, HtmlPage, MemorySurface};
pub use types::*;
