//! Error types for the core crate.
//!
//! - [`LightboxError`] - rejected modal controller operations
//! - [`SettingsError`] - invalid or unparsable settings

use thiserror::Error;

/// Errors returned by [`crate::ModalController`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LightboxError {
    /// The gallery has no items to show.
    #[error("gallery {gallery} has no media items")]
    EmptyGallery { gallery: usize },
    /// The requested item does not exist in the gallery.
    #[error("item {index} is out of range for gallery {gallery} ({len} items)")]
    IndexOutOfRange {
        gallery: usize,
        index: usize,
        len: usize,
    },
}

/// Errors produced while loading [`crate::Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The TOML document could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is not usable.
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
