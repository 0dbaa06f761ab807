use crate::tools::env_args::Setting;
use crate::tools::error::ConfigurationError;
use crate::tools::error::ConfigurationError::MissingOpenAiApiKey;
use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

const OPENAI_API_KEY: Setting = Setting::new("--openai-api-key", "OPENAI_API_KEY");
const OPENAI_URL: Setting = Setting::new("--openai-url", "OPENAI_URL");
const OPENAI_MODEL: Setting = Setting::new("--openai-model", "OPENAI_MODEL");
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Getters, Clone, PartialEq)]
pub struct LlmConfiguration {
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmConfiguration {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            api_url,
            api_key,
            model,
        }
    }

    pub fn load() -> Result<Self, ConfigurationError> {
        Ok(Self {
            api_url: OPENAI_URL.value_or(DEFAULT_OPENAI_URL),
            api_key: OPENAI_API_KEY.expected_value(MissingOpenAiApiKey)?,
            model: OPENAI_MODEL.value_or(DEFAULT_OPENAI_MODEL),
        })
    }
}

impl Debug for LlmConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LlmConfiguration {{api_url={}, api_key=MASKED, model={}}}",
            self.api_url, self.model
        )
    }
}
