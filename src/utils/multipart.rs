//! Collection of multipart form bodies into text fields and a single file.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use std::collections::HashMap;

use crate::domain::entities::UploadedFile;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A fully read multipart body.
///
/// Parts with a file name are files; the first one is kept and any further
/// files are discarded. Every other part is read as UTF-8 text.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Reads every part of `multipart`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`MultipartError`] if the body is malformed,
    /// exceeds the body limit, or a text part is not valid UTF-8.
    pub async fn collect(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name().map(str::to_string) {
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let data = field.bytes().await?;

                if form.file.is_none() {
                    form.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        data,
                    });
                } else {
                    tracing::debug!(field = %name, "Ignoring additional file part");
                }
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn take_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }
}
