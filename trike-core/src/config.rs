use std::{env, time::Duration};

use anyhow::Context as _;
use reqwest::Url;
use tracing::{info, warn};
use trike_utils::{
    pagination::DEFAULT_PAGE_SIZE,
    parse::{parse_duration_seconds, parse_page_size},
};

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_CHAT_POLL_SECS: u64 = 15;

pub struct Config {
    pub api_url: Url,
    pub api_token: Option<String>,
    pub page_size: usize,
    pub chat_poll_interval: Duration,
}

impl Config {
    /// Read settings from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = var(&lookup, "TRIKE_API_URL").unwrap_or_else(|| {
            info!("TRIKE_API_URL not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_owned()
        });
        let api_url =
            Url::parse(&api_url).with_context(|| format!("invalid TRIKE_API_URL `{api_url}`"))?;

        let api_token = var(&lookup, "TRIKE_API_TOKEN");
        if api_token.is_none() {
            warn!("TRIKE_API_TOKEN not set, admin-only endpoints are disabled");
        }

        let page_size = match var(&lookup, "TRIKE_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw).with_context(|| {
                format!("TRIKE_PAGE_SIZE must be a positive integer, got `{raw}`")
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let poll_secs = match var(&lookup, "TRIKE_CHAT_POLL_INTERVAL") {
            Some(raw) => parse_duration_seconds(&raw).with_context(|| {
                format!("TRIKE_CHAT_POLL_INTERVAL must look like `15s` or `1m`, got `{raw}`")
            })?,
            None => DEFAULT_CHAT_POLL_SECS,
        };

        Ok(Self {
            api_url,
            api_token,
            page_size,
            chat_poll_interval: Duration::from_secs(poll_secs),
        })
    }
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
