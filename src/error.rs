//! Error types for editing operations and the AI content gateway.

use thiserror::Error;

use crate::state::TrackKind;

/// Failures from project mutations.
///
/// Seek and zoom never fail; they clamp instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("track index {index} is out of range ({track_count} tracks)")]
    InvalidTrackIndex { index: usize, track_count: usize },
    #[error("no {0:?} track available")]
    NoTrackForKind(TrackKind),
}

/// Failures from the generative content service.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("AI service credential is not configured")]
    MissingCredential,
    #[error("invalid AI request: {0}")]
    InvalidRequest(String),
    #[error("AI request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("AI service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("AI service returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("{0} is not supported yet")]
    NotSupported(&'static str),
}
