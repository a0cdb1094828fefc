//! Lightbox modal component.
//!
//! Renders the backdrop, the close and navigation buttons, and the current
//! item's content while a session is open. Keyboard shortcuts and the page
//! scroll lock follow the session for as long as the component is mounted.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use mediabox_core::Direction;
use wasm_bindgen::JsValue;

use super::media::MediaView;
use super::state::LightboxState;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/lightbox/lightbox.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Lock page scrolling while the modal is open.
fn setup_scroll_lock(lightbox: LightboxState) {
    Effect::new(move |was_open: Option<bool>| {
        let open = lightbox.is_open();
        // The initial closed state leaves the page untouched
        if was_open.unwrap_or(false) != open {
            dom::lock_page_scroll(open);
        }
        open
    });
}

/// Escape closes, arrow keys step through the gallery.
fn setup_keyboard(lightbox: LightboxState) {
    let handle = window_event_listener(ev::keydown, move |event| {
        if !lightbox.is_open_untracked() {
            return;
        }
        match event.key().as_str() {
            "Escape" => lightbox.close(),
            "ArrowLeft" => lightbox.navigate(Direction::Previous),
            "ArrowRight" => lightbox.navigate(Direction::Next),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());
}

// ============================================================================
// Lightbox Component
// ============================================================================

#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let lightbox = ctx.lightbox;

    setup_scroll_lock(lightbox);
    setup_keyboard(lightbox);

    let backdrop_ref = NodeRef::<leptos::html::Div>::new();

    // Only a click on the backdrop itself closes, not one on its content
    let on_backdrop_click = move |event: ev::MouseEvent| {
        let on_backdrop = match (event.target(), backdrop_ref.get_untracked()) {
            (Some(target), Some(backdrop)) => {
                let target: &JsValue = target.as_ref();
                let backdrop: &JsValue = backdrop.as_ref();
                target == backdrop
            }
            _ => false,
        };
        if on_backdrop {
            lightbox.close();
        }
    };

    view! {
        <Show when=move || lightbox.is_open()>
            <div
                node_ref=backdrop_ref
                class=css::backdrop
                role="dialog"
                aria-modal="true"
                on:click=on_backdrop_click
            >
                <button
                    class=css::closeButton
                    title=text::CLOSE
                    aria-label=text::CLOSE
                    on:click=move |_| lightbox.close()
                >
                    <Icon icon=ic::CLOSE />
                </button>

                <Show when=move || lightbox.controls_visible()>
                    <button
                        class=format!("{} {}", css::navButton, css::prev)
                        title=text::PREVIOUS
                        aria-label=text::PREVIOUS
                        on:click=move |_| lightbox.navigate(Direction::Previous)
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                    <button
                        class=format!("{} {}", css::navButton, css::next)
                        title=text::NEXT
                        aria-label=text::NEXT
                        on:click=move |_| lightbox.navigate(Direction::Next)
                    >
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </Show>

                <div class=css::content>
                    {move || lightbox.render_plan().map(|plan| view! { <MediaView plan=plan /> })}
                </div>
            </div>
        </Show>
    }
}
