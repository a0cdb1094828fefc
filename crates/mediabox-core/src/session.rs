//! Lightbox navigation state.
//!
//! [`ModalController`] tracks which gallery the lightbox is browsing and
//! which item is on screen. The controller is either closed (no
//! session) or open on exactly one gallery:
//!
//! ```text
//! Closed --open--> Open --navigate(±1)--> Open --close--> Closed
//! ```

use std::sync::Arc;

use crate::error::LightboxError;
use crate::media::{Gallery, MediaItem};
use crate::render::RenderPlan;

/// Navigation step within a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// An open lightbox: the active gallery and the index on screen.
///
/// `index` is always a valid index into `gallery`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    gallery: Arc<Gallery>,
    index: usize,
}

/// Lightbox state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    session: Option<Session>,
}

impl ModalController {
    /// Create a closed controller.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Open the lightbox on item `index` of `gallery`.
    ///
    /// Replaces any session already open. On error the controller is
    /// left unchanged.
    pub fn open(&mut self, gallery: Arc<Gallery>, index: usize) -> Result<&MediaItem, LightboxError> {
        if gallery.is_empty() {
            return Err(LightboxError::EmptyGallery {
                gallery: gallery.position(),
            });
        }
        if index >= gallery.len() {
            return Err(LightboxError::IndexOutOfRange {
                gallery: gallery.position(),
                index,
                len: gallery.len(),
            });
        }

        let session = self.session.insert(Session { gallery, index });
        Ok(&session.gallery.items()[session.index])
    }

    /// Step to the previous or next item, wrapping at both ends.
    ///
    /// Returns the new item, or `None` (and does nothing) when closed.
    pub fn navigate(&mut self, direction: Direction) -> Option<&MediaItem> {
        let session = self.session.as_mut()?;
        let len = session.gallery.len() as isize;
        let next = (session.index as isize + direction.offset()).rem_euclid(len);
        session.index = next as usize;
        session.gallery.get(session.index)
    }

    /// Close the lightbox. Closing twice is the same as closing once.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_gallery(&self) -> Option<&Arc<Gallery>> {
        self.session.as_ref().map(|s| &s.gallery)
    }

    /// Index on screen; 0 while closed.
    pub fn current_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.index)
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.session
            .as_ref()
            .and_then(|s| s.gallery.get(s.index))
    }

    /// Whether the previous/next controls should be shown.
    pub fn controls_visible(&self) -> bool {
        self.active_gallery().is_some_and(|g| g.len() > 1)
    }

    /// What the lightbox should currently display.
    pub fn render_plan(&self) -> Option<RenderPlan> {
        self.current().map(RenderPlan::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageItem;

    fn gallery(len: usize) -> Arc<Gallery> {
        let items = (0..len)
            .map(|i| {
                MediaItem::Image(ImageItem {
                    src: Some(format!("{}.jpg", i)),
                    deferred_src: None,
                    alt: String::new(),
                })
            })
            .collect();
        Arc::new(Gallery::new(0, items))
    }

    #[test]
    fn test_open_sets_session() {
        let g = gallery(3);
        let mut modal = ModalController::new();
        assert!(modal.open(g.clone(), 2).is_ok());
        assert!(modal.is_open());
        assert_eq!(modal.current_index(), 2);
        assert!(modal.active_gallery().is_some_and(|a| Arc::ptr_eq(a, &g)));
    }

    #[test]
    fn test_open_rejects_bad_index() {
        let mut modal = ModalController::new();
        assert_eq!(
            modal.open(gallery(2), 2).unwrap_err(),
            LightboxError::IndexOutOfRange {
                gallery: 0,
                index: 2,
                len: 2
            }
        );
        assert_eq!(
            modal.open(gallery(0), 0).unwrap_err(),
            LightboxError::EmptyGallery { gallery: 0 }
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn test_failed_open_keeps_previous_session() {
        let mut modal = ModalController::new();
        modal.open(gallery(3), 1).unwrap();
        assert!(modal.open(gallery(3), 7).is_err());
        assert_eq!(modal.current_index(), 1);
    }

    #[test]
    fn test_navigate_wraps() {
        let mut modal = ModalController::new();
        modal.open(gallery(3), 2).unwrap();
        modal.navigate(Direction::Next);
        assert_eq!(modal.current_index(), 0);
        modal.navigate(Direction::Previous);
        assert_eq!(modal.current_index(), 2);
        modal.navigate(Direction::Previous);
        assert_eq!(modal.current_index(), 1);
    }

    #[test]
    fn test_navigate_single_item() {
        let mut modal = ModalController::new();
        modal.open(gallery(1), 0).unwrap();
        assert!(modal.navigate(Direction::Next).is_some());
        assert_eq!(modal.current_index(), 0);
        assert!(!modal.controls_visible());
    }

    #[test]
    fn test_navigate_closed_is_noop() {
        let mut modal = ModalController::new();
        assert!(modal.navigate(Direction::Next).is_none());
        assert_eq!(modal, ModalController::new());
    }

    #[test]
    fn test_close_resets() {
        let mut modal = ModalController::new();
        modal.open(gallery(5), 3).unwrap();
        modal.close();
        assert!(!modal.is_open());
        assert!(modal.active_gallery().is_none());
        assert_eq!(modal.current_index(), 0);
        assert!(modal.render_plan().is_none());

        let once = modal.clone();
        modal.close();
        assert_eq!(modal, once);
    }
}
