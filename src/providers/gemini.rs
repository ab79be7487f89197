use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::core::generation::ContentGateway;
use crate::error::GatewayError;
use crate::state::{GeneratedMedia, StoryboardShot};

const STORYBOARD_SHOT_COUNT: usize = 5;

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.ai_model.clone(),
            base_url: config.ai_base_url.clone(),
        }
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.model)
        )
    }

    async fn generate_content(&self, body: &Value) -> Result<Value, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let response = self
            .http
            .post(self.generate_content_url())
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|err| GatewayError::MalformedResponse(format!("invalid JSON envelope: {}", err)))
    }
}

impl ContentGateway for GeminiClient {
    async fn storyboard(&self, theme: &str) -> Result<Vec<StoryboardShot>, GatewayError> {
        let body = storyboard_request_body(theme);
        let payload = self.generate_content(&body).await?;
        let text = extract_response_text(&payload).unwrap_or_default();
        parse_storyboard(&text)
    }

    async fn generate_video(&self, prompt: &str) -> Result<GeneratedMedia, GatewayError> {
        log::info!("Video generation requested for prompt {:?}", prompt);
        Err(GatewayError::NotSupported("Video generation"))
    }
}

/// Request body asking for a JSON shot list that matches `StoryboardShot`.
pub fn storyboard_request_body(theme: &str) -> Value {
    let prompt = format!(
        "Generate a {}-shot storyboard for a video with the theme: {}. \
         Include description of visuals and suggested background audio.",
        STORYBOARD_SHOT_COUNT, theme
    );
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "shotNumber": { "type": "INTEGER" },
                        "visuals": { "type": "STRING" },
                        "audio": { "type": "STRING" },
                        "duration": { "type": "NUMBER" }
                    },
                    "required": ["shotNumber", "visuals", "audio", "duration"]
                }
            }
        }
    })
}

/// Concatenated text parts of the first candidate, if present.
pub fn extract_response_text(payload: &Value) -> Option<String> {
    let parts = payload
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|value| value.as_str()))
        .collect();
    Some(text)
}

/// Parse the model's JSON text. Blank text is an empty storyboard.
pub fn parse_storyboard(text: &str) -> Result<Vec<StoryboardShot>, GatewayError> {
    let trimmed = strip_code_fence(text.trim());
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed)
        .map_err(|err| GatewayError::MalformedResponse(format!("storyboard: {}", err)))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOTS_JSON: &str = r#"[
        {"shotNumber": 1, "visuals": "Sunrise over dunes", "audio": "Wind", "duration": 4},
        {"shotNumber": 2, "visuals": "Caravan close-up", "audio": "Bells", "duration": 3.5}
    ]"#;

    #[test]
    fn test_parse_storyboard() {
        let shots = parse_storyboard(SHOTS_JSON).unwrap();
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].shot_number, 1);
        assert_eq!(shots[0].duration, 4.0);
        assert_eq!(shots[1].audio, "Bells");
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(parse_storyboard("").unwrap().is_empty());
        assert!(parse_storyboard("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(matches!(
            parse_storyboard("{not json"),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_storyboard(r#"[{"shotNumber": "one"}]"#),
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", SHOTS_JSON);
        assert_eq!(parse_storyboard(&fenced).unwrap().len(), 2);
    }

    #[test]
    fn test_extract_response_text() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[{\"shotNumber\": 1," }, { "text": "\"visuals\": \"a\", \"audio\": \"b\", \"duration\": 1}]" }] }
            }]
        });
        let text = extract_response_text(&payload).unwrap();
        assert_eq!(parse_storyboard(&text).unwrap().len(), 1);

        assert!(extract_response_text(&json!({ "candidates": [] })).is_none());
        assert!(extract_response_text(&json!({})).is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let body = storyboard_request_body("desert caravan");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("desert caravan"));
        assert!(prompt.contains("5-shot"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["items"]["required"]
                .as_array()
                .map(|fields| fields.len()),
            Some(4)
        );
    }

    #[test]
    fn test_url_uses_model_and_base() {
        let config = AppConfig {
            api_key: Some("k".to_string()),
            ai_model: "gemini-test".to_string(),
            ai_base_url: "http://localhost:1234/v1beta/".to_string(),
        };
        let client = GeminiClient::new(&config);
        assert_eq!(
            client.generate_content_url(),
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_network() {
        let client = GeminiClient::new(&AppConfig::default());
        let result = client.storyboard("anything").await;
        assert!(matches!(result, Err(GatewayError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_video_generation_not_supported() {
        let client = GeminiClient::new(&AppConfig::default());
        let result = client.generate_video("neon rain").await;
        assert!(matches!(result, Err(GatewayError::NotSupported(_))));
    }
}
