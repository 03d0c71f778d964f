//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default endpoint: Google's OpenAI-compatible layer for Gemini.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
    /// HTTP timeout for one generation call; `None` keeps the HTTP client's default.
    fn timeout(&self) -> Option<Duration>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_system_prompt: Option<String>,
    pub llm_timeout_secs: Option<u64>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.llm_api_key
    }
    fn base_url(&self) -> &str {
        &self.llm_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
    fn timeout(&self) -> Option<Duration> {
        self.llm_timeout_secs.map(Duration::from_secs)
    }
}

impl EnvLlmConfig {
    /// Load from environment variables. `GEMINI_API_KEY` (or `LLM_API_KEY`) is required.
    pub fn from_env() -> Result<Self> {
        let llm_api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("LLM_API_KEY"))
            .context("GEMINI_API_KEY (or LLM_API_KEY) not set")?;
        let llm_base_url =
            env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let llm_system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let llm_timeout_secs = match env::var("LLM_TIMEOUT_SECS") {
            Ok(s) => Some(
                s.trim()
                    .parse()
                    .with_context(|| format!("LLM_TIMEOUT_SECS is not a number: {}", s))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            llm_api_key,
            llm_base_url,
            llm_model,
            llm_system_prompt,
            llm_timeout_secs,
        })
    }

    /// Rejects blank credentials and a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.llm_api_key.trim().is_empty() {
            anyhow::bail!("GEMINI_API_KEY (or LLM_API_KEY) is empty");
        }
        if self.llm_model.trim().is_empty() {
            anyhow::bail!("LLM_MODEL is empty");
        }
        if self.llm_timeout_secs == Some(0) {
            anyhow::bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "GEMINI_API_KEY",
            "LLM_API_KEY",
            "LLM_BASE_URL",
            "LLM_MODEL",
            "LLM_SYSTEM_PROMPT",
            "LLM_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("GEMINI_API_KEY", "gemini-key");

        let config = EnvLlmConfig::from_env().unwrap();

        assert_eq!(config.api_key(), "gemini-key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert!(config.system_prompt().is_none());
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("LLM_API_KEY", "other-key");
        env::set_var("LLM_BASE_URL", "http://localhost:1234/v1");
        env::set_var("LLM_MODEL", "gpt-4o-mini");
        env::set_var("LLM_SYSTEM_PROMPT", "Answer in Ukrainian.");
        env::set_var("LLM_TIMEOUT_SECS", "45");

        let config = EnvLlmConfig::from_env().unwrap();

        assert_eq!(config.api_key(), "other-key");
        assert_eq!(config.base_url(), "http://localhost:1234/v1");
        assert_eq!(config.model(), "gpt-4o-mini");
        assert_eq!(config.system_prompt(), Some("Answer in Ukrainian."));
        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_key_is_error() {
        clear_env();
        assert!(EnvLlmConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_blank_system_prompt_is_none() {
        clear_env();
        env::set_var("GEMINI_API_KEY", "gemini-key");
        env::set_var("LLM_SYSTEM_PROMPT", "   ");

        let config = EnvLlmConfig::from_env().unwrap();
        assert!(config.system_prompt().is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_error() {
        clear_env();
        env::set_var("GEMINI_API_KEY", "gemini-key");
        env::set_var("LLM_TIMEOUT_SECS", "soon");
        assert!(EnvLlmConfig::from_env().is_err());

        env::set_var("LLM_TIMEOUT_SECS", "0");
        let config = EnvLlmConfig::from_env().unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }
}
