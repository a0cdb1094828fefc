//! Gallery discovery.
//!
//! Reads the galleries authored in the page into a [`GalleryCollection`]
//! once at startup, and wires each item's click to the lightbox.

use mediabox_core::{GalleryCollection, ItemMarkers, MediaElement, MediaItem, VideoSource};
use web_sys::{Document, Element};

use super::dom;
use crate::components::lightbox::LightboxState;
use crate::config::{attributes, selectors};

/// Galleries found on the page, with the elements of their items.
///
/// `item_elements[g][i]` is the page element of item `i` of gallery `g`.
pub struct PageGalleries {
    pub collection: GalleryCollection,
    pub item_elements: Vec<Vec<Element>>,
}

/// Scan every gallery in `document`.
///
/// Items that carry no recognizable media are skipped and take no part
/// in navigation.
pub fn scan_galleries(document: &Document) -> PageGalleries {
    let mut galleries = Vec::new();
    let mut item_elements = Vec::new();

    for (position, gallery) in dom::query_document(document, selectors::GALLERY)
        .iter()
        .enumerate()
    {
        let mut items = Vec::new();
        let mut elements = Vec::new();

        for element in dom::query_all(gallery, selectors::MEDIA_ITEM) {
            match MediaItem::classify(read_markers(&element)) {
                Some(item) => {
                    items.push(item);
                    elements.push(element);
                }
                None => web_sys::console::warn_1(
                    &format!("Skipping media item without media in gallery {}", position).into(),
                ),
            }
        }

        galleries.push(items);
        item_elements.push(elements);
    }

    PageGalleries {
        collection: GalleryCollection::new(galleries),
        item_elements,
    }
}

/// Open the lightbox when a gallery item is clicked.
pub fn wire_item_clicks(page: &PageGalleries, lightbox: LightboxState) {
    for (gallery, elements) in page.collection.iter().zip(&page.item_elements) {
        for (index, element) in elements.iter().enumerate() {
            let gallery = gallery.clone();
            dom::listen(element, "click", move |_| {
                lightbox.open(gallery.clone(), index);
            });
        }
    }
}

/// Collect the marker data of one `.media-item`.
pub fn read_markers(item: &Element) -> ItemMarkers {
    ItemMarkers {
        youtube_id: dom::query(item, selectors::YOUTUBE_POSTER)
            .and_then(|poster| poster.get_attribute(attributes::YOUTUBE_ID)),
        vk_video_id: dom::query(item, selectors::VK_POSTER)
            .and_then(|poster| poster.get_attribute(attributes::VK_VIDEO_ID)),
        media: dom::query(item, selectors::MEDIA_ELEMENT).and_then(|el| read_media(&el)),
    }
}

fn read_media(element: &Element) -> Option<MediaElement> {
    match element.tag_name().to_ascii_lowercase().as_str() {
        "img" => Some(MediaElement::Image {
            src: element.get_attribute("src"),
            data_src: element.get_attribute(attributes::DEFERRED_SRC),
            alt: element.get_attribute("alt"),
        }),
        "video" => Some(MediaElement::Video {
            source: dom::query(element, selectors::VIDEO_SOURCE).and_then(|source| {
                Some(VideoSource {
                    src: source.get_attribute("src")?,
                    mime_type: source.get_attribute("type"),
                })
            }),
        }),
        _ => None,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use mediabox_core::MediaKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <div class="media-gallery">
            <div class="gallery-container">
                <div class="media-item"><img class="lazy-image" data-src="photo.jpg" alt="Photo"></div>
                <div class="media-item">
                    <div class="youtube-poster" data-youtube-id="abc123"><img src="thumb.jpg"></div>
                </div>
                <div class="media-item"><div class="vk-video-poster" data-vk-video-id="200_1"></div></div>
                <div class="media-item"><video><source src="clip.mp4" type="video/mp4"></video></div>
                <div class="media-item"><p>caption only</p></div>
            </div>
        </div>
        <div class="media-gallery"></div>
    "#;

    fn mount_markup() -> (Document, Element) {
        let document = dom::document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(MARKUP);
        document.body().unwrap().append_child(&host).unwrap();
        (document, host)
    }

    #[wasm_bindgen_test]
    fn scan_classifies_items_in_order() {
        let (document, host) = mount_markup();
        let page = scan_galleries(&document);

        assert_eq!(page.collection.len(), 2);
        let first = page.collection.get(0).unwrap();
        let kinds: Vec<_> = first.items().iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                MediaKind::Image,
                MediaKind::YouTube,
                MediaKind::VkVideo,
                MediaKind::Video
            ]
        );
        assert_eq!(page.item_elements[0].len(), 4);
        assert!(page.collection.get(1).unwrap().is_empty());

        host.remove();
    }

    #[wasm_bindgen_test]
    fn markers_read_deferred_image_source() {
        let (_, host) = mount_markup();
        let item = dom::query(&host, selectors::MEDIA_ITEM).unwrap();

        assert_eq!(
            read_markers(&item).media,
            Some(MediaElement::Image {
                src: None,
                data_src: Some("photo.jpg".to_string()),
                alt: Some("Photo".to_string()),
            })
        );

        host.remove();
    }
}
