//! Image sniffing and object URLs for binary payloads.

use std::fmt;

use base64::Engine;
use image::GenericImageView;

/// MIME type used when the bytes match no known image format.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// What could be learned about a binary payload without trusting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Guess the MIME type of an image from its magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) => FALLBACK_MIME,
    }
}

/// Sniff the MIME type and, if the bytes decode, the pixel dimensions.
///
/// Never fails: a payload that is not a decodable image still gets a MIME
/// type and simply has no dimensions.
pub fn inspect_image(bytes: &[u8]) -> ImageInfo {
    let mime = sniff_mime(bytes).to_string();
    let (width, height) = match image::load_from_memory(bytes) {
        Ok(img) => {
            let (w, h) = img.dimensions();
            (Some(w), Some(h))
        }
        Err(e) => {
            tracing::debug!("binary payload is not a decodable image: {e}");
            (None, None)
        }
    };
    ImageInfo {
        mime,
        width,
        height,
    }
}

/// A self-contained URL that references a binary payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Build a `data:` URL carrying `bytes` as base64.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{mime};base64,{encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The MIME type declared in the URL.
    pub fn mime(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(mime, _)| mime)
    }

    /// Decode the referenced payload back into bytes.
    pub fn payload(&self) -> Option<Vec<u8>> {
        let (_, data) = self.0.split_once(";base64,")?;
        base64::engine::general_purpose::STANDARD.decode(data).ok()
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
