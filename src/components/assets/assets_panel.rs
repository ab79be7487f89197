use dioxus::prelude::*;
use crate::components::assets::{AssetItem, GeneratePanel};
use crate::components::common::TextField;
use crate::constants::*;
use crate::state::{GenerationStatus, LibraryAsset, StoryboardShot};

/// Which sidebar page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarTab {
    #[default]
    Assets,
    Generate,
}

#[component]
pub fn AssetsPanelContent(
    tab: SidebarTab,
    on_tab_change: EventHandler<SidebarTab>,
    on_add_to_timeline: EventHandler<LibraryAsset>,
    // Generate tab
    video_prompt: Signal<String>,
    storyboard_theme: Signal<String>,
    storyboard: Vec<StoryboardShot>,
    storyboard_status: GenerationStatus,
    video_status: GenerationStatus,
    on_generate_storyboard: EventHandler<String>,
    on_generate_video: EventHandler<String>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",

            div {
                style: "display: flex; flex-shrink: 0; border-bottom: 1px solid {BORDER_DEFAULT};",
                TabButton {
                    label: "Assets",
                    active: tab == SidebarTab::Assets,
                    accent: ACCENT_PRIMARY,
                    on_click: move |_| on_tab_change.call(SidebarTab::Assets),
                }
                TabButton {
                    label: "Generate",
                    active: tab == SidebarTab::Generate,
                    accent: ACCENT_AI,
                    on_click: move |_| on_tab_change.call(SidebarTab::Generate),
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 12px;",
                {match tab {
                    SidebarTab::Assets => rsx! {
                        AssetLibrary {
                            on_add_to_timeline: move |asset| on_add_to_timeline.call(asset),
                            on_focus_change: move |focused| on_focus_change.call(focused),
                        }
                    },
                    SidebarTab::Generate => rsx! {
                        GeneratePanel {
                            video_prompt: video_prompt,
                            storyboard_theme: storyboard_theme,
                            storyboard: storyboard.clone(),
                            storyboard_status: storyboard_status.clone(),
                            video_status: video_status.clone(),
                            on_generate_storyboard: move |theme| on_generate_storyboard.call(theme),
                            on_generate_video: move |prompt| on_generate_video.call(prompt),
                            on_focus_change: move |focused| on_focus_change.call(focused),
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn TabButton(
    label: &'static str,
    active: bool,
    accent: &'static str,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (color, underline) = if active {
        (accent, accent)
    } else {
        (TEXT_MUTED, "transparent")
    };
    rsx! {
        button {
            style: "
                flex: 1; padding: 10px 0; border: none; background: transparent; cursor: pointer;
                font-size: 10px; font-weight: 700; text-transform: uppercase; letter-spacing: 1px;
                color: {color}; border-bottom: 2px solid {underline};
            ",
            onclick: move |e| on_click.call(e),
            "{label}"
        }
    }
}

/// Search box plus the filtered library list.
#[component]
fn AssetLibrary(
    on_add_to_timeline: EventHandler<LibraryAsset>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let catalog = use_hook(LibraryAsset::catalog);
    let mut query = use_signal(String::new);

    let visible: Vec<LibraryAsset> = catalog
        .iter()
        .filter(|asset| asset.matches_query(&query()))
        .cloned()
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 14px;",
            TextField {
                label: String::new(),
                value: query(),
                placeholder: "Search assets...".to_string(),
                on_input: move |value| query.set(value),
                on_focus_change: move |focused| on_focus_change.call(focused),
            }
            div {
                div {
                    style: "font-size: 10px; font-weight: 700; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 8px;",
                    "Library"
                }
                if visible.is_empty() {
                    div { style: "font-size: 12px; color: {TEXT_DIM}; padding: 8px 0;", "No matching assets" }
                }
                for asset in visible {
                    AssetItem {
                        key: "{asset.id}",
                        asset: asset.clone(),
                        on_add_to_timeline: move |asset| on_add_to_timeline.call(asset),
                    }
                }
            }
        }
    }
}
