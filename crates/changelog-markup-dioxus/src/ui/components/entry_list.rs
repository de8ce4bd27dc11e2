use dioxus::prelude::*;
use std::path::{Path, PathBuf};

/// Sidebar list of changelog entry files
#[component]
pub fn EntryList(
    entries: Vec<PathBuf>,
    selected: Option<PathBuf>,
    on_select: Callback<PathBuf>,
) -> Element {
    rsx! {
        ul {
            class: "entry-list",
            if entries.is_empty() {
                li { class: "entry-list-empty", "No changelog entries found" }
            }
            for path in entries.iter() {
                {
                    let is_selected = selected.as_ref() == Some(path);
                    let name = entry_name(path);
                    let target = path.clone();
                    rsx! {
                        li {
                            key: "{path.display()}",
                            class: if is_selected { "entry selected" } else { "entry" },
                            onclick: move |_| on_select.call(target.clone()),
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(&PathBuf::from("/srv/log/2024-06.md")), "2024-06.md");
    }

    fn list_host() -> Element {
        rsx! {
            EntryList {
                entries: vec![PathBuf::from("/log/a.md"), PathBuf::from("/log/b.md")],
                selected: Some(PathBuf::from("/log/b.md")),
                on_select: move |_| {},
            }
        }
    }

    #[test]
    fn test_marks_selected_entry() {
        let mut dom = VirtualDom::new(list_host);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("a.md"));
        assert!(html.contains("class=\"entry selected\""));
        assert_eq!(html.matches("class=\"entry\"").count(), 1);
    }
}
