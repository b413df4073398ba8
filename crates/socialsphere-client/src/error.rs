use std::path::PathBuf;

use socialsphere_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An image is still being decoded")]
    DecodePending,

    #[error("A post needs text or an image")]
    EmptyPost,
}

impl ClientError {
    /// Short text shown to the user when an action degrades instead of
    /// failing. `None` for errors that should propagate.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ClientError::ClipboardUnavailable(_) => Some("Copy failed"),
            ClientError::EmptyPost => Some("Add text or image"),
            ClientError::DecodePending => Some("Image is still loading"),
            ClientError::ImageDecode { .. } => Some("Could not read image"),
            ClientError::Store(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
