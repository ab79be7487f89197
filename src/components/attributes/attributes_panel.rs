use dioxus::prelude::*;

use crate::components::common::SliderField;
use crate::constants::*;
use crate::state::{EditorSession, FilterKey, FilterPreset, Project};
use crate::utils::format_seconds;

/// Properties of the selected clip plus the preview color grade.
#[component]
pub fn AttributesPanelContent(
    project: Signal<Project>,
    mut session: Signal<EditorSession>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let session_read = session.read();
    let filters = session_read.filters;
    let project_read = project.read();
    let selected = session_read.selected_clip(&project_read).cloned();
    drop(project_read);
    drop(session_read);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",

            div {
                style: "flex: 1; overflow-y: auto; padding: 12px; display: flex; flex-direction: column; gap: 20px;",

                if let Some(clip) = selected {
                    div {
                        style: "display: flex; flex-direction: column; gap: 10px;",
                        InfoRow { label: "Clip Name", value: clip.name.clone() }
                        div {
                            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                            InfoRow { label: "Start", value: format_seconds(clip.start_time) }
                            InfoRow { label: "Duration", value: format_seconds(clip.duration) }
                        }
                        InfoRow { label: "Type", value: clip.kind.label().to_string() }
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 14px;",
                        div {
                            style: "font-size: 10px; font-weight: 700; color: {TEXT_DIM}; text-transform: uppercase; padding-bottom: 6px; border-bottom: 1px solid {BORDER_SUBTLE};",
                            "Color Grading"
                        }
                        for key in FilterKey::ALL {
                            {
                                let (min, max) = key.range();
                                rsx! {
                                    SliderField {
                                        key: "{key.label()}",
                                        label: key.label(),
                                        value: filters.get(key),
                                        min: min,
                                        max: max,
                                        unit: key.unit(),
                                        on_change: move |value| session.write().set_filter(key, value),
                                        on_focus_change: move |focused| on_focus_change.call(focused),
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 10px; padding: 60px 0; color: {TEXT_DIM};",
                        span { style: "font-size: 28px;", "🎚" }
                        span { style: "font-size: 12px;", "Select a clip to view properties" }
                    }
                }
            }

            // Presets
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; padding: 12px; border-top: 1px solid {BORDER_DEFAULT}; flex-shrink: 0;",
                for preset in FilterPreset::ALL {
                    button {
                        key: "{preset.label()}",
                        class: "collapse-btn",
                        style: "
                            padding: 8px 0; border: none; border-radius: 4px;
                            background-color: {BG_SURFACE}; color: {TEXT_SECONDARY};
                            font-size: 10px; font-weight: 700; text-transform: uppercase; cursor: pointer;
                        ",
                        onclick: move |_| session.write().apply_preset(preset),
                        "{preset.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; font-weight: 700; color: {TEXT_DIM}; text-transform: uppercase;", "{label}" }
            div {
                style: "
                    padding: 5px 8px; border-radius: 4px;
                    background-color: {BG_DEEPEST}; border: 1px solid {BORDER_SUBTLE};
                    font-size: 12px; color: {TEXT_SECONDARY}; font-family: 'SF Mono', Consolas, monospace;
                    white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                ",
                "{value}"
            }
        }
    }
}
