use dioxus::prelude::*;
use crate::constants::{BG_ELEVATED, BORDER_DEFAULT, TEXT_MUTED, TEXT_SECONDARY};
use crate::core::timeline_layout::TRACK_HEADER_WIDTH_PX;
use crate::state::TrackKind;

/// Track header pinned to the left edge while the lanes scroll.
#[component]
pub fn TrackLabel(name: String, kind: TrackKind) -> Element {
    rsx! {
        div {
            style: "
                position: sticky; left: 0; z-index: 12;
                display: flex; align-items: center; gap: 10px;
                width: {TRACK_HEADER_WIDTH_PX}px; min-width: {TRACK_HEADER_WIDTH_PX}px; height: 100%;
                padding: 0 14px; box-sizing: border-box;
                background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};
                font-size: 11px; color: {TEXT_SECONDARY};
            ",
            span { style: "color: {TEXT_MUTED}; font-size: 12px;", "{kind.icon()}" }
            span { style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;", "{name}" }
        }
    }
}
