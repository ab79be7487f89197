//! Data shapes exchanged with the generative content service.

use serde::{Deserialize, Serialize};

/// One shot of a generated storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardShot {
    pub shot_number: i64,
    /// Description of what is on screen
    pub visuals: String,
    /// Suggested background audio
    pub audio: String,
    /// Suggested length in seconds
    pub duration: f64,
}

/// Reference to a media file produced by video generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMedia {
    pub url: String,
}

/// Progress of an in-flight gateway request, as shown in the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Running,
    Done(String),
    Failed(String),
}

impl GenerationStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GenerationStatus::Running)
    }

    /// Message for the status bar, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            GenerationStatus::Idle => None,
            GenerationStatus::Running => Some("Working..."),
            GenerationStatus::Done(message) | GenerationStatus::Failed(message) => Some(message),
        }
    }
}
