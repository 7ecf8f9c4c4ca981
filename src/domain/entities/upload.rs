//! Uploaded and stored image descriptors.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::RequestOrigin;

/// A file part received in a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name.
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// File extension for the declared content type, if it is a raster
    /// image format the site serves. Scriptable types such as SVG are `None`.
    pub fn image_extension(&self) -> Option<&'static str> {
        let essence = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Some("png"),
            "image/jpeg" | "image/jpg" => Some("jpg"),
            "image/gif" => Some("gif"),
            "image/webp" => Some("webp"),
            "image/avif" => Some("avif"),
            "image/bmp" => Some("bmp"),
            "image/x-icon" | "image/vnd.microsoft.icon" => Some("ico"),
            _ => None,
        }
    }

    /// Whether the part looks like an image the site can display.
    ///
    /// Only the declared content type is checked; the bytes are not sniffed.
    pub fn is_image(&self) -> bool {
        !self.data.is_empty() && self.image_extension().is_some()
    }
}

/// Metadata of an image persisted by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    /// Public URL path, relative to the site origin (e.g. `/uploads/x.png`).
    pub path: String,
}

impl StoredImage {
    /// Absolute URL of the image for a request served from `origin`.
    pub fn url(&self, origin: &RequestOrigin) -> String {
        origin.join(&self.path)
    }
}
