use dioxus::prelude::*;
use crate::constants::{BORDER_STRONG, TEXT_DIM};
use crate::core::timeline_layout::{ruler_marks, TRACK_HEADER_WIDTH_PX};

/// Time ruler with a labelled tick every few seconds.
/// All elements here use pointer-events: none so clicks pass through to parent
#[component]
pub(crate) fn TimeRuler(duration: f64, zoom: f64) -> Element {
    let marks = ruler_marks(duration);

    rsx! {
        div {
            style: "position: absolute; left: {TRACK_HEADER_WIDTH_PX}px; top: 0; right: 0; height: 100%; pointer-events: none;",

            for mark in marks {
                {
                    let x = mark * zoom;
                    let label = format!("{}s", mark);
                    rsx! {
                        div {
                            key: "tick-{mark}",
                            style: "
                                position: absolute; left: {x}px; bottom: 0;
                                display: flex; flex-direction: column; align-items: center;
                                transform: translateX(-50%);
                                pointer-events: none;
                            ",
                            span {
                                style: "font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; user-select: none; margin-bottom: 2px;",
                                "{label}"
                            }
                            div { style: "width: 1px; height: 6px; background-color: {BORDER_STRONG};" }
                        }
                    }
                }
            }
        }
    }
}
