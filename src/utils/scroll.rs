//! Gallery strip scrolling.
//!
//! Each `.media-gallery` scrolls its `.gallery-container` horizontally
//! with its `.prev`/`.next` buttons or by swiping. The buttons hide when
//! everything fits and dim at either end.

use std::cell::Cell;
use std::rc::Rc;

use mediabox_core::settings::ScrollerSettings;
use mediabox_core::{ScrollButtons, ScrollMetrics, SwipeTracker};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, TouchEvent};

use super::dom;
use crate::config::selectors;

/// Set up scrolling for every gallery on the page.
pub fn init(settings: &ScrollerSettings) {
    let Some(document) = dom::document() else {
        return;
    };

    for gallery in dom::query_document(&document, selectors::GALLERY) {
        let Some(container) = dom::query(&gallery, selectors::GALLERY_CONTAINER) else {
            continue;
        };
        let prev = dom::query(&gallery, selectors::SCROLL_PREV);
        let next = dom::query(&gallery, selectors::SCROLL_NEXT);

        if let (Some(prev), Some(next)) = (prev, next) {
            wire_buttons(&container, &prev, &next, settings.step);
            track_buttons(container.clone(), prev, next);
        }
        wire_swipe(container, settings.swipe_multiplier);
    }
}

fn wire_buttons(container: &Element, prev: &Element, next: &Element, step: f64) {
    for (button, offset) in [(prev, -step), (next, step)] {
        let container = container.clone();
        dom::listen(button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_left(offset);
            options.set_behavior(ScrollBehavior::Smooth);
            container.scroll_by_with_scroll_to_options(&options);
        });
    }
}

/// Keep button visibility in sync on start, resize and scroll.
fn track_buttons(container: Element, prev: Element, next: Element) {
    let target = container.clone();
    let update = Rc::new(move || {
        let metrics = ScrollMetrics {
            scroll_left: container.scroll_left() as f64,
            scroll_width: container.scroll_width() as f64,
            client_width: container.client_width() as f64,
        };
        apply_buttons(&prev, &next, ScrollButtons::for_metrics(metrics));
    });

    update();

    if let Some(window) = dom::window() {
        let on_resize = update.clone();
        dom::listen(&window, "resize", move |_| on_resize());
    }
    dom::listen(&target, "scroll", move |_| update());
}

fn apply_buttons(prev: &Element, next: &Element, buttons: ScrollButtons) {
    let display = if buttons.visible { "flex" } else { "none" };
    dom::set_style(prev, "display", display);
    dom::set_style(next, "display", display);
    if buttons.visible {
        dom::set_style(prev, "opacity", &buttons.prev_opacity.to_string());
        dom::set_style(next, "opacity", &buttons.next_opacity.to_string());
    }
}

/// Drag the strip with a finger.
fn wire_swipe(container: Element, multiplier: f64) {
    let Ok(container) = container.dyn_into::<HtmlElement>() else {
        return;
    };
    let swipe = Rc::new(Cell::new(SwipeTracker::new(multiplier)));

    let finger_x = {
        let container = container.clone();
        move |event: &web_sys::Event| -> Option<f64> {
            let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
            Some((touch.page_x() - container.offset_left()) as f64)
        }
    };

    {
        let swipe = swipe.clone();
        let finger_x = finger_x.clone();
        let scroller = container.clone();
        dom::listen(&container, "touchstart", move |event| {
            if let Some(x) = finger_x(&event) {
                let mut tracker = swipe.get();
                tracker.begin(x, scroller.scroll_left() as f64);
                swipe.set(tracker);
            }
        });
    }
    {
        let swipe = swipe.clone();
        let scroller = container.clone();
        dom::listen(&container, "touchmove", move |event| {
            if let Some(scroll_left) = finger_x(&event).and_then(|x| swipe.get().drag(x)) {
                scroller.set_scroll_left(scroll_left as i32);
            }
        });
    }
    dom::listen(&container, "touchend", move |_| {
        let mut tracker = swipe.get();
        tracker.end();
        swipe.set(tracker);
    });
}
