//! State management module
//!
//! This module contains all the core data structures for the application:
//! - Project: The timeline container (playhead, zoom, tracks)
//! - Track: Timeline lanes (Video, Audio, Overlay)
//! - Clip: Media clips placed on tracks
//! - FilterSettings / EditorSession: Per-session preview and selection state
//! - LibraryAsset: Sidebar library entries
//! - StoryboardShot: AI storyboard output

mod project;
mod asset;
mod filters;
mod selection;
mod session;
mod generative;

pub use project::*;
pub use asset::*;
pub use filters::*;
pub use selection::*;
pub use session::*;
pub use generative::*;
