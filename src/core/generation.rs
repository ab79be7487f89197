//! Generative content requests.
//!
//! The editor talks to the AI service through `ContentGateway`, so the UI
//! never depends on a concrete provider. Requests are issued from spawned
//! tasks and their results arrive later as independent events.

use crate::error::GatewayError;
use crate::state::{GeneratedMedia, StoryboardShot};

/// Capability interface for the generative content service.
#[allow(async_fn_in_trait)]
pub trait ContentGateway {
    /// Ordered shot list for a free-text theme.
    async fn storyboard(&self, theme: &str) -> Result<Vec<StoryboardShot>, GatewayError>;

    /// Long-running video generation from a prompt.
    async fn generate_video(&self, prompt: &str) -> Result<GeneratedMedia, GatewayError>;
}

/// Request a storyboard, substituting an empty list for any failure.
pub async fn storyboard_or_empty<G: ContentGateway>(gateway: &G, theme: &str) -> Vec<StoryboardShot> {
    match gateway.storyboard(theme).await {
        Ok(shots) => {
            log::info!("Storyboard for {:?} returned {} shots", theme, shots.len());
            shots
        }
        Err(err) => {
            log::warn!("Storyboard request failed, using empty storyboard: {}", err);
            Vec::new()
        }
    }
}

/// Request a video. Failures are surfaced as-is; there is no fallback.
pub async fn request_video<G: ContentGateway>(
    gateway: &G,
    prompt: &str,
) -> Result<GeneratedMedia, GatewayError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GatewayError::InvalidRequest("prompt is empty".to_string()));
    }
    gateway.generate_video(prompt).await.map_err(|err| {
        log::warn!("Video generation failed: {}", err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Reply {
        Shots(Vec<StoryboardShot>),
        Malformed,
        Missing,
    }

    struct FakeGateway {
        reply: Reply,
    }

    impl ContentGateway for FakeGateway {
        async fn storyboard(&self, _theme: &str) -> Result<Vec<StoryboardShot>, GatewayError> {
            match &self.reply {
                Reply::Shots(shots) => Ok(shots.clone()),
                Reply::Malformed => Err(GatewayError::MalformedResponse("not json".to_string())),
                Reply::Missing => Err(GatewayError::MissingCredential),
            }
        }

        async fn generate_video(&self, _prompt: &str) -> Result<GeneratedMedia, GatewayError> {
            Err(GatewayError::NotSupported("Video generation"))
        }
    }

    fn shot(number: i64) -> StoryboardShot {
        StoryboardShot {
            shot_number: number,
            visuals: format!("Visual {}", number),
            audio: "Ambient".to_string(),
            duration: 3.0,
        }
    }

    #[tokio::test]
    async fn test_storyboard_passes_shots_through() {
        let gateway = FakeGateway {
            reply: Reply::Shots(vec![shot(1), shot(2)]),
        };
        let shots = storyboard_or_empty(&gateway, "ocean").await;
        assert_eq!(shots, vec![shot(1), shot(2)]);
    }

    #[tokio::test]
    async fn test_malformed_storyboard_becomes_empty() {
        let gateway = FakeGateway {
            reply: Reply::Malformed,
        };
        assert!(storyboard_or_empty(&gateway, "ocean").await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_becomes_empty() {
        let gateway = FakeGateway {
            reply: Reply::Missing,
        };
        assert!(storyboard_or_empty(&gateway, "ocean").await.is_empty());
    }

    #[tokio::test]
    async fn test_video_failure_is_surfaced() {
        let gateway = FakeGateway {
            reply: Reply::Shots(Vec::new()),
        };
        let result = request_video(&gateway, "neon city").await;
        assert!(matches!(result, Err(GatewayError::NotSupported(_))));
    }

    #[tokio::test]
    async fn test_blank_video_prompt_is_rejected_locally() {
        let gateway = FakeGateway {
            reply: Reply::Shots(Vec::new()),
        };
        let result = request_video(&gateway, "   ").await;
        assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));
    }
}
