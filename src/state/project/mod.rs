//! Project data model
//!
//! This module contains the core data structures for a timeline project.

mod project;
mod track;
mod clip;

pub use project::*;
pub use track::{Track, TrackKind};
pub use clip::Clip;
