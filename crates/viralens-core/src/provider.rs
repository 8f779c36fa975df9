use crate::error::{Result, ViralensError};

/// Model tier used for generation. Flash is the default; Pro trades latency
/// for deeper reasoning on long videos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Flash,
    Pro,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Flash => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
                model: "gemini-2.5-flash",
                env_var: "GEMINI_API_KEY",
            },
            Provider::Pro => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent",
                model: "gemini-2.5-pro",
                env_var: "GEMINI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Flash => "Flash",
            Provider::Pro => "Pro",
        }
    }

    /// Validate that the API key is set for this provider
    pub fn validate_api_key(&self) -> Result<String> {
        let config = self.config();
        std::env::var(config.env_var).map_err(|_| ViralensError::MissingApiKey {
            env_var: config.env_var.to_string(),
        })
    }
}
