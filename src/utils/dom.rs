//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Missing elements and
//! failed calls are absorbed here so callers never see a `JsValue` error.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mediabox_core::Viewport;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::config::selectors;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

/// All elements in `document` matching `selector`, in document order.
pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    collect_nodes(document.query_selector_all(selector).ok())
}

fn collect_nodes(list: Option<web_sys::NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element under `root` matching `selector`.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Set an inline style property, ignoring elements that aren't styleable.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Attach an event listener that lives as long as the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // Keep the closure alive for the lifetime of the page
        closure.forget();
    }
}

/// Current window size in CSS pixels.
pub fn viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Whether the browser provides `IntersectionObserver`.
pub fn supports_intersection_observer() -> bool {
    window().is_some_and(|w| {
        js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false)
    })
}

// =============================================================================
// Page Side Effects
// =============================================================================

/// Lock or restore scrolling of the page body.
pub fn lock_page_scroll(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Pause every video on the page and rewind it to the start.
///
/// This covers gallery thumbnails as well as the lightbox's own player.
pub fn pause_all_videos() {
    let Some(document) = document() else {
        return;
    };
    for element in query_document(&document, selectors::VIDEO) {
        if let Ok(video) = element.dyn_into::<web_sys::HtmlMediaElement>() {
            let _ = video.pause();
            video.set_current_time(0.0);
        }
    }
}

// =============================================================================
// Animation Frames
// =============================================================================

/// Handle to a running `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct AnimationLoop {
    running: Arc<AtomicBool>,
}

impl AnimationLoop {
    /// Stop scheduling frames. The current frame, if any, still runs.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Call `tick` on every animation frame until the loop is stopped.
pub fn animation_loop(mut tick: impl FnMut() + 'static) -> AnimationLoop {
    let running = Arc::new(AtomicBool::new(true));

    // The frame closure reschedules itself, so it has to reach itself
    // through a shared slot.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let flag = running.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !flag.load(Ordering::Relaxed) {
            // Dropped once this call returns
            let _ = next.borrow_mut().take();
            return;
        }
        tick();
        request_frame(&next);
    }) as Box<dyn FnMut()>));

    request_frame(&frame);
    AnimationLoop { running }
}

fn request_frame(slot: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(window) = window()
        && let Some(callback) = slot.borrow().as_ref()
    {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
