//! Animated particle background.
//!
//! A fixed layer of glowing dots drifts across the window, bouncing off
//! its edges and scattering away from the mouse pointer. Nothing is drawn
//! when the user prefers reduced motion.

use leptos::{ev, prelude::*};
use leptos_use::use_media_query;
use mediabox_core::settings::ParticleSettings;
use mediabox_core::{Particle, ParticleField, Pointer, Viewport};

use crate::config::REDUCED_MOTION_QUERY;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/particles/particles.module.css");

#[component]
pub fn ParticleLayer(settings: ParticleSettings) -> impl IntoView {
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    view! {
        <Show when=move || !reduced_motion.get()>
            <ParticleCanvas settings=settings.clone() />
        </Show>
    }
}

#[component]
fn ParticleCanvas(settings: ParticleSettings) -> impl IntoView {
    let viewport = dom::viewport().unwrap_or(Viewport::new(0.0, 0.0));
    let field = RwSignal::new(ParticleField::new(
        settings,
        viewport,
        &mut rand::thread_rng(),
    ));
    // Bumped on respawn so every dot re-reads its fixed look
    let generation = RwSignal::new(0u32);
    let pointer = StoredValue::new(None::<Pointer>);

    let mouse = window_event_listener(ev::mousemove, move |event| {
        pointer.set_value(Some(Pointer {
            x: event.client_x() as f64,
            y: event.client_y() as f64,
        }));
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(viewport) = dom::viewport() {
            field.update(|field| field.respawn(viewport, &mut rand::thread_rng()));
            generation.update(|g| *g += 1);
        }
    });

    let frames = dom::animation_loop(move || {
        let pointer = pointer.try_get_value().flatten();
        field.try_update(|field| field.step(pointer));
    });

    on_cleanup(move || {
        frames.stop();
        mouse.remove();
        resize.remove();
    });

    let count = field.with_untracked(|field| field.particles().len());

    view! {
        <div class=css::layer aria-hidden="true">
            {move || {
                generation.track();
                (0..count)
                    .map(|index| view! { <ParticleDot field=field index=index /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One dot, positioned from its slot in the field.
#[component]
fn ParticleDot(field: RwSignal<ParticleField>, index: usize) -> impl IntoView {
    let Some(particle) = field.with_untracked(|field| field.particles().get(index).cloned())
    else {
        return ().into_any();
    };

    let read = move |format: fn(&Particle) -> String| {
        move || {
            field.with(|field| {
                field
                    .particles()
                    .get(index)
                    .map(format)
                    .unwrap_or_default()
            })
        }
    };
    let left = read(|p| format!("{:.2}px", p.x));
    let top = read(|p| format!("{:.2}px", p.y));
    let transform = read(|p| format!("scale({})", p.scale()));

    view! {
        <div
            class=css::particle
            style:width=format!("{}px", particle.size)
            style:height=format!("{}px", particle.size)
            style:background-color=particle.color.clone()
            style:box-shadow=particle.glow()
            style:animation=particle.animation()
            style:left=left
            style:top=top
            style:transform=transform
        />
    }
    .into_any()
}
