//! Local-disk image store served under `/uploads`.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::services::ServiceError;
use crate::domain::entities::{StoredImage, UploadedFile};

/// URL path under which [`LocalImageStore::root`] is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Writes uploaded images into a directory on disk.
///
/// File names are `<unix millis>-<sequence>-<sanitized stem>.<ext>` so
/// concurrent uploads of the same file never overwrite each other. The
/// extension comes from the declared image type, never from the client's
/// file name, since `/uploads` is served by extension.
#[derive(Debug)]
pub struct LocalImageStore {
    root: PathBuf,
    sequence: AtomicU64,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists `file` and returns its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Rejected`] if `file` is not a supported image
    /// type, and [`ServiceError::Storage`] if the directory cannot be created
    /// or the file cannot be written.
    pub async fn save(&self, file: &UploadedFile) -> Result<StoredImage, ServiceError> {
        let extension = file.image_extension().ok_or_else(|| {
            ServiceError::rejected(format!("Unsupported image type {}", file.content_type))
        })?;

        tokio::fs::create_dir_all(&self.root).await?;

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let file_name = format!(
            "{}-{}-{}.{}",
            Utc::now().timestamp_millis(),
            seq,
            file_stem(&sanitize_file_name(&file.file_name)),
            extension
        );

        tokio::fs::write(self.root.join(&file_name), &file.data).await?;

        tracing::debug!(file = %file_name, size = file.size(), "Image stored");

        Ok(StoredImage {
            path: format!("{}/{}", PUBLIC_PREFIX, file_name),
            file_name,
            mime_type: file.content_type.clone(),
            size: file.size() as u64,
        })
    }

    /// Deletes a previously saved image. A file that is already gone is not
    /// an error.
    pub async fn remove(&self, image: &StoredImage) -> Result<(), ServiceError> {
        match tokio::fs::remove_file(self.root.join(&image.file_name)).await {
            Ok(()) => {
                tracing::debug!(file = %image.file_name, "Image removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Drops the last extension of a sanitized name.
fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Reduces a client-supplied file name to a safe basename.
///
/// Directory components are dropped, characters outside `[A-Za-z0-9._-]`
/// become `-`, and leading dots are removed.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}
