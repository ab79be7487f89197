//! Timeline module
//!
//! Ruler, track headers, clip lanes and the playhead.

mod panel;
mod ruler;
mod track_label;
mod track_row;
mod clip_element;

pub use panel::TimelinePanel;

pub(crate) const MIN_CLIP_WIDTH_PX: f64 = 2.0;
