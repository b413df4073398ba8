//! The "create post" draft, including asynchronous image attachment.
//!
//! Selecting an image starts a decode that finishes later. While it runs the
//! draft cannot be published, and selecting another image supersedes it:
//! a result whose generation no longer matches is dropped.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use socialsphere_shared::constants::MAX_POST_CHARS;
use socialsphere_store::KeyValueStore;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::state::AppState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ImageSlot {
    #[default]
    Empty,
    Decoding(u64),
    Ready(String),
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    image: ImageSlot,
    generation: u64,
}

impl Composer {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Counter under the text box, e.g. `12 / 300`.
    pub fn char_count_label(&self) -> String {
        format!("{} / {}", self.text.chars().count(), MAX_POST_CHARS)
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self.image, ImageSlot::Decoding(_))
    }

    /// Data URI of the decoded image, once available.
    pub fn preview(&self) -> Option<&str> {
        match &self.image {
            ImageSlot::Ready(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn can_publish(&self) -> bool {
        !self.is_decoding() && (!self.text.trim().is_empty() || self.preview().is_some())
    }

    /// Start attaching the image at `path`. Any decode already in flight is
    /// superseded.
    pub fn select_image(&mut self, path: impl Into<PathBuf>) -> PendingImage {
        self.generation += 1;
        self.image = ImageSlot::Decoding(self.generation);
        PendingImage {
            generation: self.generation,
            path: path.into(),
        }
    }

    /// Apply a finished decode. Returns `false` if it was superseded.
    pub fn finish_image(&mut self, decoded: DecodedImage) -> bool {
        if self.image != ImageSlot::Decoding(decoded.generation) {
            debug!(generation = decoded.generation, "dropping superseded image decode");
            return false;
        }
        self.image = ImageSlot::Ready(decoded.data_uri);
        true
    }

    /// Forget a decode that failed, unless a newer one replaced it.
    pub fn abandon_image(&mut self, generation: u64) {
        if self.image == ImageSlot::Decoding(generation) {
            self.image = ImageSlot::Empty;
        }
    }

    /// Clear the draft. Decodes still in flight will be dropped.
    pub fn reset(&mut self) {
        self.text.clear();
        self.image = ImageSlot::Empty;
        self.generation += 1;
    }

    pub(crate) fn ready_image(&self) -> Result<Option<String>> {
        match &self.image {
            ImageSlot::Decoding(_) => Err(ClientError::DecodePending),
            ImageSlot::Ready(uri) => Ok(Some(uri.clone())),
            ImageSlot::Empty => Ok(None),
        }
    }
}

/// A selected image waiting to be decoded.
#[derive(Debug)]
pub struct PendingImage {
    generation: u64,
    path: PathBuf,
}

impl PendingImage {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read the file and encode it as a `data:` URI.
    pub async fn decode(self) -> Result<DecodedImage> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ClientError::ImageDecode {
                path: self.path.clone(),
                source,
            })?;

        let data_uri = format!("data:{};base64,{}", mime_for(&self.path), STANDARD.encode(&bytes));
        debug!(path = %self.path.display(), size = bytes.len(), "image decoded");

        Ok(DecodedImage {
            generation: self.generation,
            data_uri,
        })
    }
}

#[derive(Debug)]
pub struct DecodedImage {
    generation: u64,
    data_uri: String,
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

impl<K: KeyValueStore> AppState<K> {
    /// Select and decode an image for the composer in one step.
    pub async fn attach_image(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let pending = self.composer.select_image(path);
        let generation = pending.generation();

        match pending.decode().await {
            Ok(decoded) => {
                self.composer.finish_image(decoded);
                Ok(())
            }
            Err(e) => {
                self.composer.abandon_image(generation);
                Err(e)
            }
        }
    }
}
