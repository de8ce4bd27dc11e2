use changelog_markup_config::Config;
use changelog_markup_engine::RenderMode;
use dioxus::prelude::*;
use std::path::PathBuf;

use super::components::{ChangelogView, EntryList, ErrorScreen, LiveEditor};

const CHANGELOG_CSS: &str = include_str!("../assets/changelog.css");

#[component]
pub fn App(config: Config) -> Element {
    let entries = use_hook(|| config.entry_paths().map_err(|e| e.to_string()));

    let mut selected_entry = use_signal(|| None::<PathBuf>);
    let mut source = use_signal(String::new);
    let mut mode = use_signal(|| RenderMode::Full);
    let mut editing = use_signal(|| false);
    let mut status = use_signal(|| None::<String>);

    let preview_max_lines = config.preview.max_lines;

    let entries = match entries {
        Ok(entries) => entries,
        Err(message) => {
            return rsx! {
                style { {CHANGELOG_CSS} }
                ErrorScreen {
                    title: "Cannot list changelog entries".to_string(),
                    message,
                    details: None,
                }
            };
        }
    };

    rsx! {
        style { {CHANGELOG_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Entries" }
                EntryList {
                    entries,
                    selected: selected_entry.read().clone(),
                    on_select: move |path: PathBuf| {
                        match std::fs::read_to_string(&path) {
                            Ok(content) => {
                                source.set(content);
                                status.set(None);
                            }
                            Err(e) => {
                                log::warn!("failed to read {}: {e}", path.display());
                                source.set(String::new());
                                status.set(Some(format!("Error reading {}: {e}", path.display())));
                            }
                        }
                        editing.set(false);
                        selected_entry.set(Some(path));
                    },
                }
            }
            div {
                class: "main-content",
                if let Some(message) = status.read().as_ref() {
                    div { class: "status", "{message}" }
                }
                if let Some(path) = selected_entry.read().clone() {
                    if *editing.read() {
                        LiveEditor {
                            initial_source: source.read().clone(),
                            preview_max_lines,
                            on_save: move |text: String| {
                                match std::fs::write(&path, &text) {
                                    Ok(()) => {
                                        log::info!("saved {}", path.display());
                                        source.set(text);
                                        editing.set(false);
                                        status.set(Some(format!("Saved {}", path.display())));
                                    }
                                    Err(e) => {
                                        log::error!("failed to save {}: {e}", path.display());
                                        status.set(Some(format!("Error saving {}: {e}", path.display())));
                                    }
                                }
                            },
                            on_cancel: move |_| editing.set(false),
                        }
                    } else {
                        div {
                            class: "view-toolbar",
                            button {
                                class: "toggle-mode",
                                onclick: move |_| {
                                    let next = match *mode.read() {
                                        RenderMode::Full => RenderMode::Preview,
                                        RenderMode::Preview => RenderMode::Full,
                                    };
                                    mode.set(next);
                                },
                                if mode.read().is_preview() { "Show full" } else { "Show preview" }
                            }
                            button {
                                class: "edit",
                                onclick: move |_| editing.set(true),
                                "Edit"
                            }
                        }
                        ChangelogView {
                            source: source.read().clone(),
                            mode: *mode.read(),
                            preview_max_lines,
                        }
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "changelog-markup" }
                        p { "Select an entry from the sidebar to view it" }
                    }
                }
            }
        }
    }
}
