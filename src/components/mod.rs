//! UI components built with Leptos.
//!
//! - [`lightbox`] - modal viewer for gallery media
//! - [`particles`] - decorative animated background
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod icons;
pub mod lightbox;
pub mod particles;

pub use lightbox::Lightbox;
pub use particles::ParticleLayer;
