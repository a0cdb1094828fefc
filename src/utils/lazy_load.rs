//! Lazy image loading.
//!
//! Images marked `.lazy-image` keep their real URL in `data-src` until
//! they approach the viewport. The URL is fetched through a detached
//! image first, so the page element only switches once the file is ready.

use mediabox_core::settings::ObserverSettings;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
};

use super::dom;
use crate::config::{attributes, classes, selectors};

/// Start loading lazy images as they become visible.
///
/// Without `IntersectionObserver` every lazy image is loaded at once.
pub fn init(settings: &ObserverSettings) {
    let Some(document) = dom::document() else {
        return;
    };
    let images = dom::query_document(&document, selectors::LAZY_IMAGE);
    if images.is_empty() {
        return;
    }

    if !dom::supports_intersection_observer() {
        images.iter().for_each(load_image);
        return;
    }

    if let Err(e) = observe(&images, settings) {
        web_sys::console::warn_2(&"Lazy loading unavailable, loading all images:".into(), &e);
        images.iter().for_each(load_image);
    }
}

fn observe(images: &[Element], settings: &ObserverSettings) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    load_image(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(&settings.root_margin);
    options.set_threshold(&JsValue::from_f64(settings.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Keep the closure alive for the lifetime of the observer
    callback.forget();

    for image in images {
        observer.observe(image);
    }
    Ok(())
}

/// Fetch an image's deferred source and swap it in.
///
/// On success the element gets the `loaded` class and loses `data-src`;
/// on failure it gets the `error` class. Failed images are not retried.
/// Images without a deferred source are left alone.
pub fn load_image(element: &Element) {
    let Some(src) = element
        .get_attribute(attributes::DEFERRED_SRC)
        .filter(|src| !src.is_empty())
    else {
        return;
    };
    let Ok(probe) = HtmlImageElement::new() else {
        return;
    };

    let on_load = {
        let element = element.clone();
        let src = src.clone();
        Closure::once_into_js(move || {
            let _ = element.set_attribute("src", &src);
            let _ = element.class_list().add_1(classes::LOADED);
            let _ = element.remove_attribute(attributes::DEFERRED_SRC);
        })
    };
    let on_error = {
        let element = element.clone();
        let src = src.clone();
        Closure::once_into_js(move || {
            web_sys::console::error_1(&format!("Failed to load image: {}", src).into());
            let _ = element.class_list().add_1(classes::ERROR);
        })
    };

    probe.set_onload(Some(on_load.unchecked_ref()));
    probe.set_onerror(Some(on_error.unchecked_ref()));
    probe.set_src(&src);
}

/// Warm the cache for images marked critical once the page has loaded.
pub fn preload_critical_on_load() {
    let Some(window) = dom::window() else {
        return;
    };
    // The wasm module may start after `load` has already fired
    if dom::document().is_some_and(|d| d.ready_state() == "complete") {
        preload_critical();
    } else {
        dom::listen(&window, "load", |_| preload_critical());
    }
}

fn preload_critical() {
    let Some(document) = dom::document() else {
        return;
    };
    for src in critical_sources(&document) {
        if let Ok(probe) = HtmlImageElement::new() {
            probe.set_src(&src);
        }
    }
}

/// Deferred sources of the images marked critical, in page order.
fn critical_sources(document: &Document) -> Vec<String> {
    dom::query_document(document, selectors::CRITICAL_IMAGE)
        .iter()
        .filter_map(|element| element.get_attribute(attributes::DEFERRED_SRC))
        .filter(|src| !src.is_empty())
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PIXEL_GIF: &str =
        "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
    const BROKEN_PNG: &str = "data:image/png;base64,bm90IGFuIGltYWdl";

    fn mount(markup: &str) -> Element {
        let document = dom::document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(markup);
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn lazy_image(src: &str) -> (Element, Element) {
        let host = mount(&format!(r#"<img class="lazy-image" data-src="{}" alt="">"#, src));
        let image = dom::query(&host, selectors::LAZY_IMAGE).unwrap();
        (host, image)
    }

    /// Wait until `image` carries `class`, for at most about two seconds.
    async fn wait_for_class(image: &Element, class: &str) -> bool {
        for _ in 0..100 {
            if image.class_list().contains(class) {
                return true;
            }
            TimeoutFuture::new(20).await;
        }
        false
    }

    #[wasm_bindgen_test]
    async fn loaded_image_swaps_source() {
        let (host, image) = lazy_image(PIXEL_GIF);
        load_image(&image);

        assert!(wait_for_class(&image, classes::LOADED).await);
        assert_eq!(image.get_attribute("src").as_deref(), Some(PIXEL_GIF));
        assert!(!image.has_attribute(attributes::DEFERRED_SRC));
        assert!(!image.class_list().contains(classes::ERROR));

        host.remove();
    }

    #[wasm_bindgen_test]
    async fn broken_image_is_marked_failed() {
        let (host, image) = lazy_image(BROKEN_PNG);
        load_image(&image);

        assert!(wait_for_class(&image, classes::ERROR).await);
        assert!(!image.class_list().contains(classes::LOADED));
        assert_eq!(
            image.get_attribute(attributes::DEFERRED_SRC).as_deref(),
            Some(BROKEN_PNG)
        );
        assert!(!image.has_attribute("src"));

        host.remove();
    }

    #[wasm_bindgen_test]
    async fn empty_deferred_source_is_ignored() {
        let (host, image) = lazy_image("");
        load_image(&image);

        TimeoutFuture::new(200).await;
        assert!(!image.class_list().contains(classes::ERROR));
        assert!(!image.class_list().contains(classes::LOADED));
        assert!(image.has_attribute(attributes::DEFERRED_SRC));

        host.remove();
    }

    #[wasm_bindgen_test]
    fn critical_sources_come_from_image_content() {
        let host = mount(
            r#"<div class="image-content">
                   <img class="lazy-image" data-src="hero.jpg">
                   <img class="lazy-image" data-src="">
               </div>
               <img class="lazy-image" data-src="below-fold.jpg">"#,
        );
        let document = dom::document().unwrap();

        assert_eq!(critical_sources(&document), vec!["hero.jpg".to_string()]);

        host.remove();
    }
}
