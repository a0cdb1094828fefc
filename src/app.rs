//! Root application module.
//!
//! Contains the App component, the AppContext definition, and the
//! page-level setup that wires the authored galleries to the lightbox.

use leptos::prelude::*;
use mediabox_core::Settings;

use crate::components::Lightbox;
use crate::components::lightbox::LightboxState;
use crate::utils::{dom, lazy_load, reveal, scan, scroll};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by any child with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Lightbox browsing session.
    pub lightbox: LightboxState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            lightbox: LightboxState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Page Setup
// ============================================================================

/// Attach behaviour to the page's static markup.
///
/// Runs once: galleries, lazy images and content blocks are read from the
/// document as authored and never rescanned.
fn enhance_page(settings: &Settings, lightbox: LightboxState) {
    let Some(document) = dom::document() else {
        return;
    };

    let page = scan::scan_galleries(&document);
    web_sys::console::debug_1(
        &format!(
            "Found {} galleries with {} items",
            page.collection.len(),
            page.collection.item_count()
        )
        .into(),
    );
    scan::wire_item_clicks(&page, lightbox);

    scroll::init(&settings.scroller);
    lazy_load::init(&settings.lazy_load);
    lazy_load::preload_critical_on_load();
    reveal::init(&settings.reveal);
}

/// Root application component.
///
/// Creates and provides the AppContext, enhances the page markup, and
/// renders the lightbox modal.
#[component]
pub fn App(settings: Settings) -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    enhance_page(&settings, ctx.lightbox);

    view! { <Lightbox /> }
}
