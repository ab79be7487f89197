//! Pixel geometry for the timeline grid.
//!
//! Time maps to pixels as `seconds * zoom_level`; the track header column
//! sits to the left of time zero.

use crate::state::Clip;

/// Width of the track header column.
pub const TRACK_HEADER_WIDTH_PX: f64 = 160.0;
/// Spacing of ruler labels in seconds.
pub const RULER_TICK_SECONDS: f64 = 5.0;

/// Horizontal position of the playhead, measured from the left edge of the grid.
pub fn playhead_offset_px(time: f64, zoom: f64) -> f64 {
    TRACK_HEADER_WIDTH_PX + time * zoom
}

/// `(left, width)` of a clip block within its lane.
pub fn clip_span_px(clip: &Clip, zoom: f64) -> (f64, f64) {
    (clip.start_time * zoom, clip.duration * zoom)
}

/// Time under a pointer at `x` pixels from the grid's left edge. Never negative.
pub fn time_at_pointer(x: f64, zoom: f64) -> f64 {
    if zoom <= 0.0 {
        return 0.0;
    }
    ((x - TRACK_HEADER_WIDTH_PX) / zoom).max(0.0)
}

/// Ruler label times from zero up to and including `duration`.
pub fn ruler_marks(duration: f64) -> Vec<f64> {
    let mut marks = Vec::new();
    let mut index = 0u32;
    loop {
        let mark = f64::from(index) * RULER_TICK_SECONDS;
        if mark > duration {
            break;
        }
        marks.push(mark);
        index += 1;
    }
    marks
}

/// `MM:SS:CC` (minutes, seconds, hundredths).
pub fn format_timecode(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let hundredths = ((seconds % 1.0) * 100.0).floor() as u64;
    format!("{:02}:{:02}:{:02}", minutes, secs, hundredths)
}
