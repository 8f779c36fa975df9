use serde::{Deserialize, Serialize};

/// Target platforms for an audit. The service tailors scoring and copy to
/// the selected platform, so one must be chosen before any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Instagram,
        Platform::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full virality audit as returned by the generation service. Field names
/// follow the service's JSON contract. The struct is produced wholesale per
/// request and replaced atomically; nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: String,
    pub title: String,
    pub analysis: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub visual_data: String,
    pub platform_suggestion: String,
    pub idea_duration: String,
}

impl AnalysisResult {
    /// The service reports `score` as free-form text. Pull the first integer
    /// out of it and clamp to 0..=100 rather than trusting the format.
    pub fn score_value(&self) -> Option<u8> {
        let digits: String = self
            .score
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let value: u32 = digits.parse().ok()?;
        Some(value.min(100) as u8)
    }
}

/// One unit of a generated shot-by-shot script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene: u32,
    pub description: String,
    #[serde(rename = "audioSFX")]
    pub audio_sfx: String,
    pub duration: String,
}
