use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    error::{Result, ViralensError},
    media::InlineMedia,
    provider::Provider,
};

/// One structured request to the generation service: instruction text,
/// optional inline media, a target response schema, and a sampling
/// temperature.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub media: Option<InlineMedia>,
    pub schema: Value,
    pub temperature: f32,
}

/// The external generative service, kept behind a narrow interface so the
/// dispatcher can be exercised against a fake. Returns the raw JSON text of
/// the response; callers parse it into their typed shape.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String>;
}

pub struct GeminiClient {
    provider: Provider,
    api_key: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Fails fast with the configuration error when no credential is set,
    /// before any network attempt.
    pub fn new(provider: Provider) -> Result<Self> {
        let api_key = provider.validate_api_key()?;
        Ok(Self {
            provider,
            api_key,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        let config = self.provider.config();
        let request_id = Uuid::new_v4();

        let mut parts = vec![json!({ "text": request.user })];
        if let Some(media) = &request.media {
            parts.push(json!({
                "inline_data": { "mime_type": media.mime_type, "data": media.data }
            }));
        }

        debug!(
            %request_id,
            model = config.model,
            temperature = request.temperature,
            has_media = request.media.is_some(),
            "dispatching generation request"
        );

        let response = self
            .http
            .post(config.api_url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "system_instruction": { "parts": [{ "text": request.system }] },
                "contents": [{ "role": "user", "parts": parts }],
                "generationConfig": {
                    "temperature": request.temperature,
                    "responseMimeType": "application/json",
                    "responseSchema": request.schema,
                },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            warn!(%request_id, status = status.as_u16(), "generation request rejected");
            return Err(ViralensError::Service {
                status: status.as_u16(),
                reason,
            });
        }

        let body: Value = response.json().await?;

        // The usable payload is the first candidate's first text part.
        let content = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| ViralensError::EmptyResponse {
                reason: format!("no candidate text in response: {body}"),
            })?;

        debug!(%request_id, bytes = content.len(), "generation response received");
        Ok(content.to_string())
    }
}
