use dioxus::prelude::*;

use crate::constants::{BG_BASE, BORDER_SUBTLE, TRACK_ROW_HEIGHT};
use crate::state::Track;

use super::clip_element::ClipElement;
use super::track_label::TrackLabel;

/// One track: pinned header followed by the clip lane.
#[component]
pub fn TrackRow(
    track: Track,
    lane_width: f64,
    zoom: f64,  // pixels per second
    selected_clip: Option<uuid::Uuid>,
    on_clip_select: EventHandler<uuid::Uuid>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; height: {TRACK_ROW_HEIGHT}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
            ",
            TrackLabel { name: track.name.clone(), kind: track.kind }

            div {
                style: "
                    position: relative; flex-shrink: 0;
                    width: {lane_width}px; height: 100%;
                    background-color: {BG_BASE};
                ",
                for clip in track.clips.iter() {
                    ClipElement {
                        key: "{clip.id}",
                        clip: clip.clone(),
                        zoom: zoom,
                        is_selected: selected_clip == Some(clip.id),
                        on_select: move |id| on_clip_select.call(id),
                    }
                }
            }
        }
    }
}
