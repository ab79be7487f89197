pub mod playback;
pub mod timeline_query;
pub mod timeline_layout;
pub mod generation;
