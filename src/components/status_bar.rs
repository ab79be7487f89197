use dioxus::prelude::*;
use crate::constants::*;
use crate::core::timeline_layout::format_timecode;

#[component]
pub fn StatusBar(
    message: Option<String>,
    is_error: bool,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    zoom: f64,
    clip_count: usize,
) -> Element {
    let message = message.unwrap_or_else(|| "Ready".to_string());
    let message_color = if is_error { ACCENT_ERROR } else { TEXT_DIM };
    let state_label = if is_playing { "Playing" } else { "Paused" };
    let zoom_label = format!("{:.0} px/s", zoom);
    let position = format!("{} / {}", format_timecode(current_time), format_timecode(duration));
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM}; flex-shrink: 0;",
            span {
                style: "color: {message_color}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{message}"
            }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{clip_count} clips" }
                span { "{zoom_label}" }
                span { "{state_label}" }
                span { "{position}" }
            }
        }
    }
}
