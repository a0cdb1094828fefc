//! Lightbox modal for gallery media.
//!
//! - [`LightboxState`] - reactive wrapper around the browsing session
//! - [`Lightbox`] - the modal itself
//! - `media` - content for the current item

mod lightbox;
mod media;
mod state;

pub use lightbox::Lightbox;
pub use state::LightboxState;
