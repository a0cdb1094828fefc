//! Reactive lightbox state.

use std::sync::Arc;

use leptos::prelude::*;
use mediabox_core::{Direction, Gallery, ModalController, RenderPlan};

use crate::utils::dom;

/// Lightbox state managed with Leptos signals.
///
/// Wraps a [`ModalController`] so the modal view re-renders whenever the
/// session opens, moves or closes. This struct is `Copy` because its only
/// field is a signal.
#[derive(Clone, Copy)]
pub struct LightboxState {
    /// The open browsing session, if any.
    pub controller: RwSignal<ModalController>,
}

impl LightboxState {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(ModalController::default()),
        }
    }

    /// Open `gallery` at `index`.
    ///
    /// An out-of-range request is logged and leaves the modal as it was.
    pub fn open(&self, gallery: Arc<Gallery>, index: usize) {
        let result = self
            .controller
            .try_update(|controller| controller.open(gallery, index).map(|item| item.kind()));

        match result {
            Some(Ok(kind)) => web_sys::console::debug_1(
                &format!("Lightbox opened at item {} ({})", index, kind).into(),
            ),
            Some(Err(e)) => web_sys::console::error_1(&e.to_string().into()),
            None => {}
        }
    }

    /// Step to the previous or next item, wrapping at either end.
    pub fn navigate(&self, direction: Direction) {
        let moved = self.controller.try_update(|controller| {
            controller
                .navigate(direction)
                .map(|item| item.kind())
                .map(|kind| (controller.current_index(), kind))
        });

        if let Some(Some((index, kind))) = moved {
            web_sys::console::debug_1(&format!("Lightbox moved to item {} ({})", index, kind).into());
        }
    }

    /// Close the modal and stop every video on the page.
    pub fn close(&self) {
        if self.is_open_untracked() {
            self.controller.update(ModalController::close);
        }
        dom::pause_all_videos();
    }

    pub fn is_open(&self) -> bool {
        self.controller.with(ModalController::is_open)
    }

    /// Open check for event handlers, outside any reactive scope.
    pub fn is_open_untracked(&self) -> bool {
        self.controller.with_untracked(ModalController::is_open)
    }

    pub fn controls_visible(&self) -> bool {
        self.controller.with(ModalController::controls_visible)
    }

    /// What the content area should show for the current item.
    pub fn render_plan(&self) -> Option<RenderPlan> {
        self.controller.with(ModalController::render_plan)
    }
}

impl Default for LightboxState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use mediabox_core::{MediaItem, MediaKind};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn gallery() -> Arc<Gallery> {
        Arc::new(Gallery::new(
            0,
            vec![
                MediaItem::YouTube {
                    id: "abc123".to_string(),
                },
                MediaItem::VkVideo {
                    id: "200_1".to_string(),
                },
            ],
        ))
    }

    #[wasm_bindgen_test]
    fn open_navigate_close() {
        let lightbox = LightboxState::new();
        lightbox.open(gallery(), 1);
        assert!(lightbox.is_open_untracked());
        assert!(lightbox.controls_visible());

        lightbox.navigate(Direction::Next);
        let kind = lightbox
            .controller
            .with_untracked(|c| c.current().map(MediaItem::kind));
        assert_eq!(kind, Some(MediaKind::YouTube));

        lightbox.close();
        assert!(!lightbox.is_open_untracked());
        assert_eq!(lightbox.render_plan(), None);
    }

    #[wasm_bindgen_test]
    fn out_of_range_open_keeps_modal_closed() {
        let lightbox = LightboxState::new();
        lightbox.open(gallery(), 5);
        assert!(!lightbox.is_open_untracked());
    }

    #[wasm_bindgen_test]
    fn close_while_closed_is_harmless() {
        let lightbox = LightboxState::new();
        lightbox.close();
        lightbox.close();
        assert!(!lightbox.is_open_untracked());
    }
}
