//! Asset library types
//!
//! Library assets are the templates listed in the sidebar. Adding one to the
//! timeline stamps out a fresh `Clip`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Clip, TrackKind, AUDIO_CLIP_COLOR, OVERLAY_CLIP_COLOR, VIDEO_CLIP_COLOR};

/// Where a clip added from the library lands on the timeline.
pub const LIBRARY_CLIP_START_SECONDS: f64 = 100.0;
/// Length of a clip added from the library.
pub const LIBRARY_CLIP_DURATION_SECONDS: f64 = 10.0;
/// Track that receives library clips.
pub const LIBRARY_TARGET_TRACK_INDEX: usize = 0;

/// A media item available in the sidebar library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryAsset {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Kind of clip this asset produces
    pub kind: TrackKind,
    /// Display color (hex string)
    pub color: String,
    /// Optional thumbnail URL
    pub thumbnail: Option<String>,
}

impl LibraryAsset {
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        let color = match kind {
            TrackKind::Video => VIDEO_CLIP_COLOR,
            TrackKind::Audio => AUDIO_CLIP_COLOR,
            TrackKind::Overlay => OVERLAY_CLIP_COLOR,
        };
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            color: color.to_string(),
            thumbnail: None,
        }
    }

    fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// The built-in demo library.
    pub fn catalog() -> Vec<LibraryAsset> {
        vec![
            LibraryAsset::new("Cinematic Dawn", TrackKind::Video)
                .with_thumbnail("https://picsum.photos/seed/dawn/100/60"),
            LibraryAsset::new("Forest Path", TrackKind::Video)
                .with_thumbnail("https://picsum.photos/seed/forest/100/60"),
            LibraryAsset::new("Bass Drop", TrackKind::Audio),
            LibraryAsset::new("Synth Wave", TrackKind::Audio),
            LibraryAsset::new("Lower Third", TrackKind::Overlay),
        ]
    }

    /// Create a new clip instance from this asset. Every call yields a new id.
    pub fn to_clip(&self) -> Clip {
        let mut clip = Clip::new(
            self.name.clone(),
            self.kind,
            LIBRARY_CLIP_START_SECONDS,
            LIBRARY_CLIP_DURATION_SECONDS,
            self.color.clone(),
        );
        clip.thumbnail = self.thumbnail.clone();
        clip
    }

    /// Case-insensitive name match for the sidebar search box. A blank query matches all.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Project;

    #[test]
    fn test_catalog_contents() {
        let catalog = LibraryAsset::catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].kind, TrackKind::Video);
        assert!(catalog[0].thumbnail.is_some());
        assert_eq!(catalog[2].color, AUDIO_CLIP_COLOR);
        assert_eq!(catalog[4].kind, TrackKind::Overlay);
    }

    #[test]
    fn test_to_clip_creates_fresh_instances() {
        let asset = LibraryAsset::new("Synth Wave", TrackKind::Audio);
        let a = asset.to_clip();
        let b = asset.to_clip();
        assert_ne!(a.id, b.id);
        assert_eq!(a.start_time, LIBRARY_CLIP_START_SECONDS);
        assert_eq!(a.duration, LIBRARY_CLIP_DURATION_SECONDS);
        assert_eq!(a.kind, TrackKind::Audio);
        assert_eq!(a.name, "Synth Wave");
    }

    #[test]
    fn test_library_clip_goes_to_first_track() {
        let mut project = Project::seeded();
        let asset = LibraryAsset::new("Bass Drop", TrackKind::Audio);
        let id = project
            .add_clip(asset.to_clip(), LIBRARY_TARGET_TRACK_INDEX)
            .unwrap();
        assert_eq!(project.tracks[0].clips.last().map(|c| c.id), Some(id));
    }

    #[test]
    fn test_matches_query() {
        let asset = LibraryAsset::new("Forest Path", TrackKind::Video);
        assert!(asset.matches_query(""));
        assert!(asset.matches_query("  "));
        assert!(asset.matches_query("forest"));
        assert!(asset.matches_query("PATH"));
        assert!(!asset.matches_query("dawn"));
    }
}
