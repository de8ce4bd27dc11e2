use changelog_markup_engine::{ImageDisplay, ImageTag, VideoDisplay, VideoTag};
use dioxus::prelude::*;

#[component]
pub fn ImageFigure(tag: ImageTag) -> Element {
    match tag.display() {
        ImageDisplay::Placeholder => rsx! {
            div { class: "changelog-placeholder", "Image: no image URL yet" }
        },
        ImageDisplay::Image(url) => rsx! {
            figure {
                class: "changelog-image",
                img { src: "{url}", alt: "{tag.label}" }
                if !tag.label.is_empty() {
                    figcaption { "{tag.label}" }
                }
            }
        },
    }
}

/// Embeds a resolved YouTube video. Placeholder and unresolvable urls get
/// different notices so authors can tell "not filled in" from "wrong".
#[component]
pub fn VideoEmbed(tag: VideoTag) -> Element {
    match tag.display() {
        VideoDisplay::Placeholder => rsx! {
            div { class: "changelog-placeholder", "Video: no YouTube URL yet" }
        },
        VideoDisplay::Invalid => rsx! {
            div { class: "changelog-invalid", "Invalid YouTube URL: {tag.url}" }
        },
        VideoDisplay::Embed(embed) => rsx! {
            figure {
                class: "changelog-video",
                iframe {
                    src: "{embed}",
                    title: "{tag.label}",
                    allowfullscreen: true,
                }
                if !tag.label.is_empty() {
                    figcaption { "{tag.label}" }
                }
            }
        },
    }
}
