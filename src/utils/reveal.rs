//! Scroll-reveal of content blocks.
//!
//! A `.content-block` gets the `visible` class shortly after it enters
//! the viewport. Each intersection change cancels the block's pending
//! timer, so quick in/out toggling near the edge doesn't flicker.
//!
//! Blocks start hidden in the page styles, so whenever observing is not
//! possible every block is revealed at once.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use mediabox_core::RevealTimers;
use mediabox_core::settings::RevealSettings;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use super::dom;
use crate::config::{classes, selectors};

/// Observe every content block on the page.
pub fn init(settings: &RevealSettings) {
    let Some(document) = dom::document() else {
        return;
    };
    let blocks = dom::query_document(&document, selectors::CONTENT_BLOCK);
    if blocks.is_empty() {
        return;
    }

    if !dom::supports_intersection_observer() {
        reveal_all(&blocks);
        return;
    }

    if let Err(e) = observe(blocks.clone(), settings) {
        web_sys::console::warn_2(&"Scroll reveal unavailable, showing all blocks:".into(), &e);
        reveal_all(&blocks);
    }
}

fn reveal_all(blocks: &[Element]) {
    for block in blocks {
        let _ = block.class_list().add_1(classes::VISIBLE);
    }
}

fn observe(blocks: Vec<Element>, settings: &RevealSettings) -> Result<(), JsValue> {
    let delay_ms = settings.delay_ms;
    let timers: Rc<RefCell<RevealTimers<Timeout>>> = Rc::new(RefCell::new(RevealTimers::new()));
    let observed = blocks.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed.iter().position(|block| *block == target) else {
                    continue;
                };

                timers
                    .borrow_mut()
                    .update(index, entry.is_intersecting(), || {
                        Timeout::new(delay_ms, move || {
                            let _ = target.class_list().add_1(classes::VISIBLE);
                        })
                    });
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer_settings = settings.observer();
    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(&observer_settings.root_margin);
    options.set_threshold(&JsValue::from_f64(observer_settings.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for block in &blocks {
        observer.observe(block);
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use web_sys::Document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_blocks() -> (Document, Element) {
        let document = dom::document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(
            r#"<section class="content-block">one</section>
               <section class="content-block">two</section>"#,
        );
        document.body().unwrap().append_child(&host).unwrap();
        (document, host)
    }

    #[wasm_bindgen_test]
    fn unusable_observer_reveals_every_block() {
        let (document, host) = mount_blocks();
        let settings = RevealSettings {
            root_margin: "abc".to_string(),
            ..RevealSettings::default()
        };

        init(&settings);

        let blocks = dom::query_document(&document, selectors::CONTENT_BLOCK);
        assert!(!blocks.is_empty());
        assert!(
            blocks
                .iter()
                .all(|block| block.class_list().contains(classes::VISIBLE))
        );

        host.remove();
    }
}
