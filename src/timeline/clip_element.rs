use dioxus::prelude::*;

use crate::constants::{BORDER_ACCENT, TEXT_MUTED, TEXT_PRIMARY, TRACK_ROW_HEIGHT};
use crate::core::timeline_layout::clip_span_px;
use crate::state::Clip;
use crate::utils::format_seconds;

use super::MIN_CLIP_WIDTH_PX;

/// Clip block inside a track lane. Clicking selects it.
#[component]
pub(crate) fn ClipElement(
    clip: Clip,
    zoom: f64,
    is_selected: bool,
    on_select: EventHandler<uuid::Uuid>,
) -> Element {
    let (left, width) = clip_span_px(&clip, zoom);
    let width = width.max(MIN_CLIP_WIDTH_PX);
    let height = TRACK_ROW_HEIGHT - 12.0;
    let clip_id = clip.id;
    let color = clip.color.clone();
    let border = if is_selected {
        format!("1px solid {TEXT_PRIMARY}; box-shadow: 0 0 0 2px {BORDER_ACCENT}80; z-index: 5;")
    } else {
        "1px solid rgba(255,255,255,0.1);".to_string()
    };
    let duration_label = format_seconds(clip.duration);

    rsx! {
        div {
            style: "
                position: absolute; left: {left}px; top: 6px;
                width: {width}px; height: {height}px;
                display: flex; flex-direction: column; overflow: hidden;
                background-color: {color}33; border-radius: 6px;
                border: {border}
                cursor: pointer; box-sizing: border-box;
            ",
            onclick: move |e| {
                e.stop_propagation();
                on_select.call(clip_id);
            },

            div { style: "height: 5px; flex-shrink: 0; background-color: {color};" }
            div {
                style: "display: flex; align-items: center; gap: 6px; padding: 2px 6px; white-space: nowrap; overflow: hidden;",
                if let Some(thumb) = clip.thumbnail.as_ref() {
                    img {
                        src: "{thumb}",
                        style: "width: 28px; height: 16px; object-fit: cover; border-radius: 2px; opacity: 0.8;",
                        alt: "",
                    }
                }
                span { style: "font-size: 10px; font-weight: 500; color: {TEXT_PRIMARY};", "{clip.name}" }
            }
            span {
                style: "margin-top: auto; padding: 0 6px 2px; font-size: 9px; color: {TEXT_MUTED}; font-family: 'SF Mono', Consolas, monospace;",
                "{duration_label}"
            }
        }
    }
}
