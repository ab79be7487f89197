//! Time-to-clip lookups used by the preview and the timeline.
//!
//! Everything here is a linear scan; it runs on every clock tick.

use crate::state::{Clip, Project, Track, TrackKind};

/// The clip of `kind` that is visible at `time`.
///
/// Tracks of that kind are visited top to bottom and each track's clips in
/// stored order; the first clip whose closed interval contains `time` wins.
/// Overlapping clips therefore resolve by position, not by start time.
pub fn active_clip(project: &Project, time: f64, kind: TrackKind) -> Option<&Clip> {
    project
        .tracks
        .iter()
        .filter(|track| track.kind == kind)
        .find_map(|track| track.clip_at(time))
}

/// Each track paired with its clip at `time`, in track order.
pub fn active_clips(project: &Project, time: f64) -> Vec<(&Track, Option<&Clip>)> {
    project
        .tracks
        .iter()
        .map(|track| (track, track.clip_at(time)))
        .collect()
}
