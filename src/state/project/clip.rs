use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TrackKind;

/// A clip placed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Clip kind
    pub kind: TrackKind,
    /// Start time in seconds
    pub start_time: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Display color (hex string)
    pub color: String,
    /// Optional thumbnail URL shown on the clip and in the preview
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Optional media reference
    #[serde(default)]
    pub media_url: Option<String>,
}

impl Clip {
    /// Create a new clip with a fresh id
    pub fn new(
        name: impl Into<String>,
        kind: TrackKind,
        start_time: f64,
        duration: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            start_time,
            duration,
            color: color.into(),
            thumbnail: None,
            media_url: None,
        }
    }

    /// Attach a thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Get the end time of this clip
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Closed-interval containment: both the start and the end count.
    pub fn contains_time(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_time_is_inclusive() {
        let clip = Clip::new("Shot", TrackKind::Video, 10.0, 45.0, "#3b82f6");
        assert!(!clip.contains_time(9.99));
        assert!(clip.contains_time(10.0));
        assert!(clip.contains_time(30.0));
        assert!(clip.contains_time(55.0));
        assert!(!clip.contains_time(55.01));
    }

    #[test]
    fn test_clip_serializes_camel_case() {
        let clip = Clip::new("Shot", TrackKind::Audio, 1.5, 2.0, "#10b981")
            .with_thumbnail("https://example.com/t.png");
        let json = serde_json::to_value(&clip).unwrap();
        assert_eq!(json["startTime"], 1.5);
        assert_eq!(json["kind"], "Audio");
        let parsed: Clip = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, clip);
    }
}
