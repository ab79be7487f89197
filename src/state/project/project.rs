use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditError;
use super::{Clip, Track, TrackKind};

/// Lower bound for zoom changes made by delta (hotkeys, wheel).
pub const ZOOM_MIN: f64 = 1.0;
/// Upper bound for zoom changes made by delta.
pub const ZOOM_MAX: f64 = 100.0;
/// Lower bound of the timeline zoom slider.
pub const SLIDER_ZOOM_MIN: f64 = 1.0;
/// Upper bound of the timeline zoom slider. Narrower than `ZOOM_MAX`; the two
/// bounds apply at different call sites and must stay distinct.
pub const SLIDER_ZOOM_MAX: f64 = 50.0;
/// Zoom delta applied by a single zoom-in/zoom-out hotkey press.
pub const ZOOM_STEP: f64 = 2.0;

const DEFAULT_DURATION_SECONDS: f64 = 600.0;
const DEFAULT_ZOOM: f64 = 10.0;

pub const VIDEO_CLIP_COLOR: &str = "#3b82f6";
pub const OVERLAY_CLIP_COLOR: &str = "#a855f7";
pub const AUDIO_CLIP_COLOR: &str = "#10b981";

/// The main project container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project name
    pub name: String,
    /// Playhead position in seconds, always within `[0, duration]`
    pub current_time: f64,
    /// Fixed timeline length in seconds
    pub duration: f64,
    /// Pixels per second used by the timeline
    pub zoom_level: f64,
    /// All tracks in the project (ordered top to bottom)
    pub tracks: Vec<Track>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            current_time: 0.0,
            duration: DEFAULT_DURATION_SECONDS,
            zoom_level: DEFAULT_ZOOM,
            tracks: Vec::new(),
        }
    }
}

impl Project {
    /// Create an empty project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The demo project the editor opens with.
    pub fn seeded() -> Self {
        Self {
            name: "Untitled Masterpiece".to_string(),
            tracks: vec![
                Track::new("Video 1", TrackKind::Video).with_clips(vec![
                    Clip::new("Cinematic Sunset", TrackKind::Video, 10.0, 45.0, VIDEO_CLIP_COLOR)
                        .with_thumbnail("https://picsum.photos/seed/sunset/200/120"),
                    Clip::new("Urban Exploration", TrackKind::Video, 70.0, 30.0, VIDEO_CLIP_COLOR)
                        .with_thumbnail("https://picsum.photos/seed/urban/200/120"),
                ]),
                Track::new("Overlay", TrackKind::Overlay).with_clips(vec![Clip::new(
                    "Title Card",
                    TrackKind::Overlay,
                    5.0,
                    15.0,
                    OVERLAY_CLIP_COLOR,
                )]),
                Track::new("Background Music", TrackKind::Audio).with_clips(vec![Clip::new(
                    "Ambient Lo-fi",
                    TrackKind::Audio,
                    0.0,
                    300.0,
                    AUDIO_CLIP_COLOR,
                )]),
            ],
            ..Default::default()
        }
    }

    /// Move the playhead. Out-of-range times are clamped to `[0, duration]`.
    /// Returns the applied time.
    pub fn seek(&mut self, time: f64) -> f64 {
        self.current_time = clamp_time(time, self.duration);
        self.current_time
    }

    /// Change zoom by `delta` pixels per second, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn zoom_by(&mut self, delta: f64) -> f64 {
        let target = self.zoom_level + delta;
        self.zoom_level = if target.is_nan() {
            self.zoom_level.clamp(ZOOM_MIN, ZOOM_MAX)
        } else {
            target.clamp(ZOOM_MIN, ZOOM_MAX)
        };
        self.zoom_level
    }

    /// Set zoom from the slider, clamped to `[SLIDER_ZOOM_MIN, SLIDER_ZOOM_MAX]`.
    pub fn set_zoom_from_slider(&mut self, value: f64) -> f64 {
        if !value.is_nan() {
            self.zoom_level = value.clamp(SLIDER_ZOOM_MIN, SLIDER_ZOOM_MAX);
        }
        self.zoom_level
    }

    /// Append a clip to the track at `track_index`.
    ///
    /// An out-of-range index leaves the project untouched and reports
    /// `EditError::InvalidTrackIndex`.
    pub fn add_clip(&mut self, clip: Clip, track_index: usize) -> Result<Uuid, EditError> {
        let track_count = self.tracks.len();
        let track = self
            .tracks
            .get_mut(track_index)
            .ok_or(EditError::InvalidTrackIndex {
                index: track_index,
                track_count,
            })?;
        let id = clip.id;
        log::debug!("Adding clip {:?} to track {:?}", clip.name, track.name);
        track.clips.push(clip);
        Ok(id)
    }

    /// Append a clip to the first track whose kind matches the clip's kind.
    pub fn add_clip_for_kind(&mut self, clip: Clip) -> Result<Uuid, EditError> {
        let index = self
            .track_index_for_kind(clip.kind)
            .ok_or(EditError::NoTrackForKind(clip.kind))?;
        self.add_clip(clip, index)
    }

    /// Index of the first track of the given kind
    pub fn track_index_for_kind(&self, kind: TrackKind) -> Option<usize> {
        self.tracks.iter().position(|track| track.kind == kind)
    }

    /// Find a clip by ID on any track
    pub fn find_clip(&self, id: Uuid) -> Option<&Clip> {
        self.tracks
            .iter()
            .flat_map(|track| track.clips.iter())
            .find(|clip| clip.id == id)
    }

    /// Total number of clips across all tracks
    pub fn clip_count(&self) -> usize {
        self.tracks.iter().map(|track| track.clips.len()).sum()
    }
}

/// Clamp `time` to `[0, duration]`, mapping NaN to the start.
pub(crate) fn clamp_time(time: f64, duration: f64) -> f64 {
    let duration = duration.max(0.0);
    if time.is_nan() {
        return 0.0;
    }
    time.clamp(0.0, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_project() {
        let project = Project::seeded();
        assert_eq!(project.name, "Untitled Masterpiece");
        assert_eq!(project.duration, 600.0);
        assert_eq!(project.zoom_level, 10.0);
        assert_eq!(project.tracks.len(), 3);
        assert_eq!(project.tracks[0].kind, TrackKind::Video);
        assert_eq!(project.tracks[1].kind, TrackKind::Overlay);
        assert_eq!(project.tracks[2].kind, TrackKind::Audio);
        assert_eq!(project.clip_count(), 4);
    }

    #[test]
    fn test_seek_clamps_to_timeline() {
        let mut project = Project::seeded();
        assert_eq!(project.seek(42.5), 42.5);
        assert_eq!(project.seek(-3.0), 0.0);
        assert_eq!(project.seek(10_000.0), 600.0);
        assert_eq!(project.seek(f64::INFINITY), 600.0);
        assert_eq!(project.seek(f64::NEG_INFINITY), 0.0);
        assert_eq!(project.seek(f64::NAN), 0.0);
        assert_eq!(project.current_time, 0.0);
    }

    #[test]
    fn test_zoom_by_clamps() {
        let mut project = Project::seeded();
        assert_eq!(project.zoom_by(-1000.0), 1.0);
        assert_eq!(project.zoom_by(5.0), 6.0);
        assert_eq!(project.zoom_by(1000.0), 100.0);
        assert_eq!(project.zoom_by(f64::NAN), 100.0);
    }

    #[test]
    fn test_slider_zoom_uses_narrower_bounds() {
        let mut project = Project::seeded();
        assert_eq!(project.set_zoom_from_slider(75.0), 50.0);
        assert_eq!(project.set_zoom_from_slider(0.0), 1.0);
        assert_eq!(project.set_zoom_from_slider(25.0), 25.0);

        // Delta zoom can still go beyond the slider's upper bound.
        assert_eq!(project.zoom_by(60.0), 85.0);
    }

    #[test]
    fn test_add_clip_appends_to_target_track_only() {
        let mut project = Project::seeded();
        let before: Vec<usize> = project.tracks.iter().map(|t| t.clips.len()).collect();

        let clip = Clip::new("Forest Path", TrackKind::Video, 100.0, 10.0, VIDEO_CLIP_COLOR);
        let id = project.add_clip(clip, 1).unwrap();

        assert_eq!(project.tracks[0].clips.len(), before[0]);
        assert_eq!(project.tracks[1].clips.len(), before[1] + 1);
        assert_eq!(project.tracks[2].clips.len(), before[2]);
        assert_eq!(project.tracks[1].clips.last().map(|c| c.id), Some(id));
    }

    #[test]
    fn test_add_clip_invalid_index_leaves_project_unchanged() {
        let mut project = Project::seeded();
        let snapshot = project.clone();

        let clip = Clip::new("Lost", TrackKind::Audio, 0.0, 1.0, AUDIO_CLIP_COLOR);
        let result = project.add_clip(clip, 3);

        assert_eq!(
            result,
            Err(EditError::InvalidTrackIndex {
                index: 3,
                track_count: 3
            })
        );
        assert_eq!(project, snapshot);
    }

    #[test]
    fn test_add_clip_for_kind_routes_by_kind() {
        let mut project = Project::seeded();
        let clip = Clip::new("Lower Third", TrackKind::Overlay, 20.0, 5.0, OVERLAY_CLIP_COLOR);
        let id = project.add_clip_for_kind(clip).unwrap();
        assert_eq!(project.tracks[1].clips.last().map(|c| c.id), Some(id));

        let mut empty = Project::new("Empty");
        let clip = Clip::new("Bass Drop", TrackKind::Audio, 0.0, 4.0, AUDIO_CLIP_COLOR);
        assert_eq!(
            empty.add_clip_for_kind(clip),
            Err(EditError::NoTrackForKind(TrackKind::Audio))
        );
    }

    #[test]
    fn test_find_clip() {
        let project = Project::seeded();
        let id = project.tracks[2].clips[0].id;
        assert_eq!(project.find_clip(id).map(|c| c.name.as_str()), Some("Ambient Lo-fi"));
        assert!(project.find_clip(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::seeded();
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }
}
