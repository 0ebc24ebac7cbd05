//! Product image upload box
//!
//! Files arrive from the picker or a drop. Only files whose declared type
//! starts with `image/` are accepted; anything else is ignored without
//! feedback. Decoding to a data URL happens off the UI loop and is handed
//! back through [`UploadBox::finish`].

use base64::Engine;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{OnboardError, Result};

pub const UPLOAD_SUCCESS_CAPTION: &str = "Image uploaded successfully!";

/// A file offered to the upload box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    /// MIME type as declared for the file, if any
    pub declared_type: Option<String>,
}

impl FileCandidate {
    pub fn new(path: impl Into<PathBuf>, declared_type: Option<&str>) -> Self {
        Self {
            path: path.into(),
            declared_type: declared_type.map(str::to_string),
        }
    }

    /// Declare the type from the file extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let declared_type = declared_type_for(&path).map(str::to_string);
        Self {
            path,
            declared_type,
        }
    }

    pub fn is_image(&self) -> bool {
        self.declared_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// MIME type for a path, judged by extension
pub fn declared_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => return None,
    };
    Some(mime)
}

/// Drag interaction with the upload box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Leave,
    Drop(FileCandidate),
}

/// Rendered preview replacing the placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub file_name: String,
    pub mime: String,
    pub byte_len: usize,
    pub data_url: String,
    pub caption: &'static str,
}

#[derive(Debug, Default)]
pub struct UploadBox {
    hover: bool,
    /// File whose decode is in flight
    pending: Option<FileCandidate>,
    preview: Option<ImagePreview>,
}

impl UploadBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    pub fn pending(&self) -> Option<&FileCandidate> {
        self.pending.as_ref()
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    /// Drag events toggle the hover state; a drop also offers the file.
    /// Returns the file to decode when it was accepted.
    pub fn on_drag(&mut self, event: DragEvent) -> Option<FileCandidate> {
        match event {
            DragEvent::Enter => {
                self.hover = true;
                None
            }
            DragEvent::Leave => {
                self.hover = false;
                None
            }
            DragEvent::Drop(file) => {
                self.hover = false;
                self.accept(file)
            }
        }
    }

    /// Offer a file (picker change or drop). Non-image files are ignored.
    /// An accepted file supersedes any decode still in flight.
    pub fn accept(&mut self, file: FileCandidate) -> Option<FileCandidate> {
        if !file.is_image() {
            warn!(path = %file.path.display(), declared = ?file.declared_type, "Ignoring non-image file");
            return None;
        }
        debug!(path = %file.path.display(), "Accepted image for preview");
        self.pending = Some(file.clone());
        Some(file)
    }

    /// Install a finished decode. Results for superseded files are discarded.
    pub fn finish(&mut self, path: &Path, data_url: String, byte_len: usize) -> bool {
        let Some(pending) = self.pending.take_if(|pending| pending.path == path) else {
            debug!(path = %path.display(), "Discarding stale decode result");
            return false;
        };
        self.preview = Some(ImagePreview {
            file_name: pending.file_name(),
            mime: pending.declared_type.clone().unwrap_or_default(),
            byte_len,
            data_url,
            caption: UPLOAD_SUCCESS_CAPTION,
        });
        true
    }

    /// Drop a failed decode, leaving the placeholder or earlier preview in place
    pub fn fail(&mut self, path: &Path, error: &str) {
        if self.pending.as_ref().is_some_and(|pending| pending.path == path) {
            warn!(path = %path.display(), error, "Image decode failed");
            self.pending = None;
        }
    }
}

/// Encode bytes as a `data:` URL
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Read a file and encode it as a data URL. Returns the URL and the file size.
pub async fn decode_data_url(file: &FileCandidate) -> Result<(String, usize)> {
    let mime = file
        .declared_type
        .as_deref()
        .ok_or_else(|| OnboardError::Upload(format!("{} has no declared type", file.file_name())))?;
    let bytes = tokio::fs::read(&file.path).await.map_err(|e| {
        OnboardError::Upload(format!("Failed to read {}: {}", file.path.display(), e))
    })?;
    Ok((encode_data_url(mime, &bytes), bytes.len()))
}
