use tracing::info;

use crate::{
    client::{GenerationRequest, GenerativeClient},
    error::Result,
    i18n::Lang,
    media::InlineMedia,
    prompts, schema,
    types::{AnalysisResult, Platform, Scene},
};

// Sampling temperatures per operation. Media-grounded audits stay low so
// the score tracks what is actually on screen; open-ended generation runs
// hotter. Not user-controllable.
pub const VIDEO_TEMPERATURE: f32 = 0.2;
pub const IDEA_TEMPERATURE: f32 = 0.7;
pub const SCRIPT_TEMPERATURE: f32 = 0.8;

/// Audit an uploaded video for the target platform.
pub async fn analyze_video(
    client: &impl GenerativeClient,
    media: InlineMedia,
    platform: Platform,
    lang: Lang,
) -> Result<AnalysisResult> {
    let request = GenerationRequest {
        system: prompts::analysis_system(lang),
        user: prompts::video_user(platform),
        media: Some(media),
        schema: schema::analysis_result_schema(),
        temperature: VIDEO_TEMPERATURE,
    };

    let content = client.generate(request).await?;
    let result: AnalysisResult = serde_json::from_str(&content)?;
    info!(platform = platform.as_str(), "video audit complete");
    Ok(result)
}

/// Audit a free-text content idea for the target platform.
pub async fn analyze_prompt(
    client: &impl GenerativeClient,
    idea: &str,
    platform: Platform,
    lang: Lang,
) -> Result<AnalysisResult> {
    let request = GenerationRequest {
        system: prompts::analysis_system(lang),
        user: prompts::idea_user(platform, idea),
        media: None,
        schema: schema::analysis_result_schema(),
        temperature: IDEA_TEMPERATURE,
    };

    let content = client.generate(request).await?;
    let result: AnalysisResult = serde_json::from_str(&content)?;
    info!(platform = platform.as_str(), "idea audit complete");
    Ok(result)
}

/// Expand a previously generated creative concept into a shot-by-shot
/// script. An empty array is a valid response; the caller decides how to
/// surface it.
pub async fn generate_script(
    client: &impl GenerativeClient,
    visual_concept: &str,
    lang: Lang,
    media: Option<InlineMedia>,
) -> Result<Vec<Scene>> {
    let request = GenerationRequest {
        system: prompts::script_system(lang),
        user: prompts::script_user(visual_concept),
        media,
        schema: schema::scene_list_schema(),
        temperature: SCRIPT_TEMPERATURE,
    };

    let content = client.generate(request).await?;
    let scenes: Vec<Scene> = serde_json::from_str(&content)?;
    info!(scenes = scenes.len(), "scene script complete");
    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViralensError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Canned-response fake; records the last request for assertions.
    struct FakeClient {
        payload: Option<&'static str>,
        last_request: Mutex<Option<GenerationRequest>>,
    }

    impl FakeClient {
        fn returning(payload: &'static str) -> Self {
            Self {
                payload: Some(payload),
                last_request: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                payload: None,
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl GenerativeClient for FakeClient {
        async fn generate(&self, request: GenerationRequest) -> Result<String> {
            *self.last_request.lock().unwrap() = Some(request);
            match self.payload {
                Some(text) => Ok(text.to_string()),
                None => Err(ViralensError::Service {
                    status: 503,
                    reason: "overloaded".to_string(),
                }),
            }
        }
    }

    const AUDIT_JSON: &str = r##"{
        "score": "82",
        "title": "Home workouts that actually stick",
        "analysis": "Relatable hook, strong save potential.",
        "caption": "Most workout advice fails because it assumes you have an hour...",
        "hashtags": ["#homeworkout", "#fitness"],
        "visualData": "Split screen: excuses on the left, thirty-second fixes on the right.",
        "platformSuggestion": "LinkedIn",
        "ideaDuration": "45-60s"
    }"##;

    #[tokio::test]
    async fn analyze_prompt_parses_a_well_formed_audit() {
        let client = FakeClient::returning(AUDIT_JSON);
        let result = analyze_prompt(&client, "home workout tips", Platform::Linkedin, Lang::En)
            .await
            .unwrap();

        assert_eq!(result.score_value(), Some(82));
        assert_eq!(result.hashtags.len(), 2);

        let request = client.last_request.lock().unwrap().take().unwrap();
        assert!(request.media.is_none());
        assert_eq!(request.temperature, IDEA_TEMPERATURE);
        assert!(request.user.contains("home workout tips"));
    }

    #[tokio::test]
    async fn analyze_video_attaches_media_at_low_temperature() {
        let client = FakeClient::returning(AUDIT_JSON);
        let media = InlineMedia::from_bytes("video/mp4", b"fake video bytes");
        analyze_video(&client, media, Platform::Tiktok, Lang::En)
            .await
            .unwrap();

        let request = client.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.temperature, VIDEO_TEMPERATURE);
        let media = request.media.expect("video audit carries media");
        assert_eq!(media.mime_type, "video/mp4");
    }

    #[tokio::test]
    async fn malformed_payload_is_a_schema_error() {
        let client = FakeClient::returning(r#"{"score": "82"}"#);
        let err = analyze_prompt(&client, "idea", Platform::Youtube, Lang::En)
            .await
            .unwrap_err();
        assert!(matches!(err, ViralensError::Json(_)));
    }

    #[tokio::test]
    async fn service_failures_propagate_untouched() {
        let client = FakeClient::failing();
        let err = analyze_prompt(&client, "idea", Platform::Youtube, Lang::En)
            .await
            .unwrap_err();
        assert!(matches!(err, ViralensError::Service { status: 503, .. }));
    }

    #[tokio::test]
    async fn generate_script_returns_empty_lists_as_is() {
        let client = FakeClient::returning("[]");
        let scenes = generate_script(&client, "a concept", Lang::En, None)
            .await
            .unwrap();
        assert!(scenes.is_empty());
    }

    #[tokio::test]
    async fn generate_script_parses_ordered_scenes() {
        let client = FakeClient::returning(
            r#"[
                {"scene": 1, "description": "Open on hands", "audioSFX": "Soft whoosh", "duration": "3s"},
                {"scene": 2, "description": "Cut to face", "audioSFX": "Beat drop", "duration": "2s"}
            ]"#,
        );
        let scenes = generate_script(&client, "a concept", Lang::En, None)
            .await
            .unwrap();

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].scene, 1);
        assert_eq!(scenes[1].audio_sfx, "Beat drop");

        let request = client.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.temperature, SCRIPT_TEMPERATURE);
        assert!(request.user.contains("a concept"));
    }
}
