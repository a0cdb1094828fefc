//! Page enhancement utilities.
//!
//! Provides:
//! - [`dom`] - safe access to browser APIs and page-wide side effects
//! - [`scan`] - gallery discovery and item click wiring
//! - [`lazy_load`] - deferred image loading
//! - [`reveal`] - scroll-in animation of content blocks
//! - [`scroll`] - gallery strip buttons and swipe

pub mod dom;
pub mod lazy_load;
pub mod reveal;
pub mod scan;
pub mod scroll;
