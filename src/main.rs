mod app;
mod components;
mod config;
mod utils;

use app::App;
use components::ParticleLayer;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let settings = config::load_settings();
    let document = document();

    if let Some(host) = document.get_element_by_id(config::PARTICLE_HOST_ID) {
        let particles = settings.particles.clone();
        mount_to(host.unchecked_into::<web_sys::HtmlElement>(), move || {
            view! { <ParticleLayer settings=particles.clone() /> }
        })
        .forget();
    }

    let root = match document.get_element_by_id(config::LIGHTBOX_HOST_ID) {
        Some(host) => host.unchecked_into::<web_sys::HtmlElement>(),
        None => match document.body() {
            Some(body) => body,
            None => {
                web_sys::console::error_1(&"No element to mount the lightbox into".into());
                return;
            }
        },
    };

    mount_to(root, move || view! { <App settings=settings.clone() /> }).forget();
}
