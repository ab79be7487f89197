use dioxus::prelude::*;
use crate::components::common::{TextAreaField, TextField};
use crate::constants::*;
use crate::state::{GenerationStatus, StoryboardShot};

/// AI assistant page: prompt-to-video and theme-to-storyboard.
#[component]
pub fn GeneratePanel(
    mut video_prompt: Signal<String>,
    mut storyboard_theme: Signal<String>,
    storyboard: Vec<StoryboardShot>,
    storyboard_status: GenerationStatus,
    video_status: GenerationStatus,
    on_generate_storyboard: EventHandler<String>,
    on_generate_video: EventHandler<String>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let video_busy = video_status.is_running();
    let storyboard_busy = storyboard_status.is_running();
    let video_label = if video_busy { "Generating..." } else { "Generate Clip" };
    let storyboard_label = if storyboard_busy { "Thinking..." } else { "Generate Storyboard" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",

            div {
                style: "
                    padding: 12px; border-radius: 8px; font-size: 12px; line-height: 1.5;
                    background-color: rgba(168,85,247,0.1); border: 1px solid rgba(168,85,247,0.25);
                    color: {TEXT_SECONDARY};
                ",
                div { style: "color: {ACCENT_AI}; font-weight: 700; margin-bottom: 6px;", "✨ Generative Video" }
                "Enter a prompt to generate a cinematic clip directly into your project."
            }

            TextAreaField {
                label: "Prompt".to_string(),
                value: video_prompt(),
                rows: 4,
                placeholder: "A futuristic neon city in the rain, 4k, cinematic lighting...".to_string(),
                on_input: move |value| video_prompt.set(value),
                on_focus_change: move |focused| on_focus_change.call(focused),
            }
            ActionButton {
                label: video_label,
                disabled: video_busy,
                on_click: move |_| on_generate_video.call(video_prompt()),
            }
            StatusLine { status: video_status.clone() }

            div { style: "height: 1px; background-color: {BORDER_SUBTLE};" }

            TextField {
                label: "Storyboard theme".to_string(),
                value: storyboard_theme(),
                placeholder: "A desert caravan at dawn".to_string(),
                on_input: move |value| storyboard_theme.set(value),
                on_focus_change: move |focused| on_focus_change.call(focused),
            }
            ActionButton {
                label: storyboard_label,
                disabled: storyboard_busy,
                on_click: move |_| on_generate_storyboard.call(storyboard_theme()),
            }
            StatusLine { status: storyboard_status.clone() }

            for (index, shot) in storyboard.iter().enumerate() {
                div {
                    key: "shot-{index}",
                    style: "
                        display: flex; flex-direction: column; gap: 4px;
                        padding: 8px 10px; border-radius: 6px;
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};
                        font-size: 11px; color: {TEXT_SECONDARY};
                    ",
                    div {
                        style: "display: flex; justify-content: space-between; color: {TEXT_MUTED}; font-size: 10px; text-transform: uppercase;",
                        span { "Shot {shot.shot_number}" }
                        span { "{shot.duration}s" }
                    }
                    span { style: "color: {TEXT_PRIMARY};", "{shot.visuals}" }
                    span { style: "color: {TEXT_DIM};", "♪ {shot.audio}" }
                }
            }
        }
    }
}

#[component]
fn ActionButton(label: &'static str, disabled: bool, on_click: EventHandler<MouseEvent>) -> Element {
    let opacity = if disabled { "0.5" } else { "1" };
    let cursor = if disabled { "default" } else { "pointer" };
    rsx! {
        button {
            disabled: disabled,
            style: "
                width: 100%; padding: 8px 0; border: none; border-radius: 6px;
                background-color: {ACCENT_AI}; color: {TEXT_PRIMARY};
                font-size: 12px; font-weight: 700; cursor: {cursor}; opacity: {opacity};
            ",
            onclick: move |e| {
                if !disabled {
                    on_click.call(e);
                }
            },
            "{label}"
        }
    }
}

#[component]
fn StatusLine(status: GenerationStatus) -> Element {
    let color = if matches!(status, GenerationStatus::Failed(_)) {
        ACCENT_ERROR
    } else {
        TEXT_MUTED
    };
    let Some(message) = status.message().map(str::to_string) else {
        return rsx! {};
    };
    rsx! {
        div { style: "font-size: 11px; color: {color};", "{message}" }
    }
}
