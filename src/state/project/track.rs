use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Clip;

/// The kind of a track (and of the clips placed on it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// Video track - holds the clips shown in the preview frame
    Video,
    /// Audio track - holds music and sound clips
    Audio,
    /// Overlay track - holds titles and lower thirds drawn over the frame
    Overlay,
}

impl TrackKind {
    pub const ALL: [TrackKind; 3] = [TrackKind::Video, TrackKind::Audio, TrackKind::Overlay];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TrackKind::Video => "Video",
            TrackKind::Audio => "Audio",
            TrackKind::Overlay => "Overlay",
        }
    }

    /// Glyph used in track headers and the asset list.
    pub fn icon(self) -> &'static str {
        match self {
            TrackKind::Video => "🎬",
            TrackKind::Audio => "🎵",
            TrackKind::Overlay => "T",
        }
    }
}

/// A lane in the timeline. Clips keep insertion order, not time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g., "Video 1", "Overlay")
    pub name: String,
    /// Kind of track; a hint for grouping, not a constraint on clip kinds
    pub kind: TrackKind,
    /// Clips on this track, in insertion order
    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Track {
    /// Create an empty track
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            clips: Vec::new(),
        }
    }

    /// Builder-style helper used when seeding projects.
    pub fn with_clips(mut self, clips: Vec<Clip>) -> Self {
        self.clips = clips;
        self
    }

    /// First clip (in stored order) whose interval contains `time`.
    pub fn clip_at(&self, time: f64) -> Option<&Clip> {
        self.clips.iter().find(|clip| clip.contains_time(time))
    }
}
