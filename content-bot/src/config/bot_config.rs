//! BotConfig: BaseConfig + generation settings. Use load() for env-based loading.
//!
//! Generation settings live in the `llm-client` crate ([`EnvLlmConfig`]).

use anyhow::Result;
use llm_client::EnvLlmConfig;

use super::BaseConfig;

/// Bot config: BaseConfig + LLM config. Use BotConfig::load() for env-based loading.
pub struct BotConfig {
    pub base: BaseConfig,
    pub llm: EnvLlmConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides the
    /// token variables. Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let llm = EnvLlmConfig::from_env()?;
        Ok(Self { base, llm })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.llm.validate()?;
        if reqwest::Url::parse(&self.llm.llm_base_url).is_err() {
            anyhow::bail!("LLM_BASE_URL is not a valid URL: {}", self.llm.llm_base_url);
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn llm(&self) -> &EnvLlmConfig {
        &self.llm
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    /// Webhook mode is on when WEBHOOK_URL is set.
    pub fn webhook_mode(&self) -> bool {
        self.base.webhook_url.is_some()
    }
}
