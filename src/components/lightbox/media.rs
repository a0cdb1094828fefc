//! Modal content for each kind of media item.

use leptos::prelude::*;
use leptos_icons::Icon;
use mediabox_core::{RenderPlan, VkNotice, YouTubeEmbed, render::YOUTUBE_FRAME_ALLOW};

use crate::components::icons as ic;
use crate::config::text;

stylance::import_crate_style!(css, "src/components/lightbox/media.module.css");

/// Content area for one [`RenderPlan`].
#[component]
pub fn MediaView(plan: RenderPlan) -> impl IntoView {
    match plan {
        RenderPlan::Image { src, alt } => view! {
            <img class=css::media src=src alt=alt />
        }
        .into_any(),
        RenderPlan::Video { source } => view! {
            <video class=css::media controls=true>
                {source.map(|source| view! {
                    <source src=source.src type=source.mime_type />
                })}
            </video>
        }
        .into_any(),
        RenderPlan::YouTube(embed) => view! { <YouTubeFrame embed=embed /> }.into_any(),
        RenderPlan::VkNotice(notice) => view! { <VkNoticeCard notice=notice /> }.into_any(),
    }
}

/// YouTube frame covered by a play overlay until clicked.
#[component]
fn YouTubeFrame(embed: YouTubeEmbed) -> impl IntoView {
    let embed = RwSignal::new(embed);
    let frame_src = move || embed.with(YouTubeEmbed::frame_src);
    let on_play = move |_| embed.update(YouTubeEmbed::play);

    view! {
        <div class=css::frameWrapper>
            {view! {
                <iframe
                    class=css::frame
                    src=frame_src
                    allow=YOUTUBE_FRAME_ALLOW
                    allowfullscreen=true
                ></iframe>
            }
                .attr("frameborder", "0")}
            <Show when=move || embed.with(YouTubeEmbed::overlay_visible)>
                <div class=css::playOverlay on:click=on_play>
                    <span class=css::playIcon>
                        <Icon icon=ic::PLAY />
                    </span>
                    <span class=css::playHint>{text::YOUTUBE_PLAY_HINT}</span>
                </div>
            </Show>
        </div>
    }
}

/// Link-out card for VK videos.
#[component]
fn VkNoticeCard(notice: VkNotice) -> impl IntoView {
    view! {
        <div class=css::vkNotice>
            <h3 class=css::vkTitle>{text::VK_TITLE}</h3>
            <p class=css::vkBody>{text::VK_BODY}</p>
            <a
                class=css::vkLink
                href=notice.link
                target="_blank"
                rel="noopener noreferrer"
            >
                <Icon icon=ic::EXTERNAL_LINK />
                <span>{text::VK_LINK}</span>
            </a>
            <p class=css::vkNote>{text::VK_NOTE}</p>
        </div>
    }
}
