//! Base config: Telegram connection, logging, HTTP server and webhook. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_LOG_FILE: &str = "logs/content-bot.log";
pub const DEFAULT_PORT: u16 = 8080;

/// Base config: Telegram-related, logging, HTTP only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// Public base URL; when set the bot runs in webhook mode
    pub webhook_url: Option<String>,
    /// Secret Telegram echoes back in every webhook call
    pub webhook_secret: String,
    /// LISTEN_ADDR, else 0.0.0.0:$PORT
    pub listen_addr: String,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => non_empty_var("TELEGRAM_BOT_TOKEN")
                .or_else(|| non_empty_var("BOT_TOKEN"))
                .context("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set")?,
        };
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let webhook_url = non_empty_var("WEBHOOK_URL").map(|u| u.trim_end_matches('/').to_string());
        let webhook_secret =
            non_empty_var("WEBHOOK_SECRET").unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
        let listen_addr = match non_empty_var("LISTEN_ADDR") {
            Some(addr) => addr,
            None => {
                let port = match non_empty_var("PORT") {
                    Some(p) => p
                        .parse::<u16>()
                        .with_context(|| format!("PORT is not a valid port number: {}", p))?,
                    None => DEFAULT_PORT,
                };
                format!("0.0.0.0:{}", port)
            }
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            webhook_url,
            webhook_secret,
            listen_addr,
        })
    }

    /// Validate config (URLs must parse, token and listen address must be usable).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("Telegram bot token is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.webhook_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) if url.scheme() == "https" || url.scheme() == "http" => {}
                _ => anyhow::bail!("WEBHOOK_URL is set but not a valid http(s) URL: {}", url_str),
            }
        }
        self.listen_socket_addr()?;
        Ok(())
    }

    pub fn listen_socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a valid socket address: {}", self.listen_addr))
    }

    /// Full URL registered with Telegram: `<WEBHOOK_URL>/webhook`.
    pub fn webhook_endpoint(&self) -> Option<String> {
        self.webhook_url
            .as_ref()
            .map(|base| format!("{}{}", base, crate::telegram::WEBHOOK_PATH))
    }
}
