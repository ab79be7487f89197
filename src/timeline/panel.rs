use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PRIMARY, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, PLAYHEAD_COLOR, RULER_HEIGHT,
    TEXT_DIM, TEXT_MUTED, TIMELINE_HEIGHT,
};
use crate::core::timeline_layout::{format_timecode, playhead_offset_px, time_at_pointer, TRACK_HEADER_WIDTH_PX};
use crate::state::{Track, SLIDER_ZOOM_MAX, SLIDER_ZOOM_MIN};
use crate::utils::parse_f64_input;

use super::ruler::TimeRuler;
use super::track_row::TrackRow;

/// Main timeline panel component
#[component]
pub fn TimelinePanel(
    // Project data
    tracks: Vec<Track>,
    // Timeline state
    current_time: f64,
    duration: f64,
    zoom: f64,
    selected_clip: Option<uuid::Uuid>,
    // Callbacks
    on_seek: EventHandler<f64>,
    on_zoom_slider: EventHandler<f64>,
    on_clip_select: EventHandler<uuid::Uuid>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let lane_width = duration * zoom;
    let content_width = TRACK_HEADER_WIDTH_PX + lane_width;
    let playhead_pos = playhead_offset_px(current_time, zoom);
    let timecode = format_timecode(current_time);
    let track_count = tracks.len();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: {TIMELINE_HEIGHT}px; min-height: {TIMELINE_HEIGHT}px;
                background-color: {BG_ELEVATED}; border-top: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }
                    span { style: "font-size: 10px; color: {TEXT_DIM};", "{track_count} tracks" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 10px;",
                    span {
                        style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                        "{timecode}"
                    }
                    span { style: "font-size: 10px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;", "ZOOM" }
                    input {
                        r#type: "range",
                        min: "{SLIDER_ZOOM_MIN}",
                        max: "{SLIDER_ZOOM_MAX}",
                        step: "1",
                        value: "{zoom}",
                        style: "width: 100px; accent-color: {ACCENT_PRIMARY};",
                        oninput: move |e| on_zoom_slider.call(parse_f64_input(&e.value(), zoom)),
                        onfocus: move |_| on_focus_change.call(true),
                        onblur: move |_| on_focus_change.call(false),
                    }
                }
            }

            // Ruler and track lanes share one scroll container so they move together.
            // The header column is sticky, so x = 0 in content space is its left edge.
            div {
                style: "flex: 1; overflow: auto; position: relative;",

                div {
                    style: "
                        width: {content_width}px; min-width: 100%;
                        display: flex; flex-direction: column;
                        position: relative;
                    ",

                    // Ruler row - click anywhere to seek
                    div {
                        style: "
                            height: {RULER_HEIGHT}px; min-height: {RULER_HEIGHT}px;
                            position: sticky; top: 0; z-index: 15;
                            background-color: {BG_SURFACE};
                            border-bottom: 1px solid {BORDER_DEFAULT};
                            cursor: crosshair;
                        ",
                        onclick: move |e| {
                            let x = e.element_coordinates().x;
                            on_seek.call(time_at_pointer(x, zoom));
                        },
                        div {
                            style: "
                                position: sticky; left: 0; z-index: 2;
                                width: {TRACK_HEADER_WIDTH_PX}px; height: 100%;
                                background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};
                                pointer-events: none;
                            ",
                        }
                        TimeRuler { duration: duration, zoom: zoom }
                    }

                    for track in tracks.iter() {
                        TrackRow {
                            key: "{track.id}",
                            track: track.clone(),
                            lane_width: lane_width,
                            zoom: zoom,
                            selected_clip: selected_clip,
                            on_clip_select: move |id| on_clip_select.call(id),
                        }
                    }

                    // Playhead line over ruler and tracks
                    div {
                        style: "
                            position: absolute; left: {playhead_pos}px; top: 0; bottom: 0;
                            width: 2px; background-color: {PLAYHEAD_COLOR};
                            box-shadow: 0 0 8px rgba(239,68,68,0.5);
                            pointer-events: none; z-index: 20;
                        ",
                        div {
                            style: "
                                position: absolute; top: -4px; left: -5px;
                                width: 12px; height: 12px;
                                background-color: {PLAYHEAD_COLOR}; transform: rotate(45deg);
                            ",
                        }
                    }
                }
            }
        }
    }
}
