// ABOUTME: Environment configuration for the meal plan client
// ABOUTME: Resolves and validates the service base URL and the outgoing user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! `MEALPLAN_API_URL` takes precedence over `API_URL`; when neither is set the
//! client targets a backend on the local machine. Empty values count as unset.

use crate::constants::env_vars;
use crate::constants::service::DEFAULT_BASE_URL;
use anyhow::{bail, Context, Result};
use mealplan_transport::http_client::DEFAULT_USER_AGENT;
use serde::Serialize;
use std::env;
use tracing::{debug, info};
use url::Url;

/// Settings the client needs before it can talk to the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    /// Service root without a trailing slash
    pub base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not an absolute http(s) URL
    pub fn from_env() -> Result<Self> {
        info!("Loading client configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not an absolute http(s) URL
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = non_empty(env_vars::API_URL)
            .or_else(|| non_empty(env_vars::API_URL_FALLBACK))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let base_url = validate_base_url(&raw_url)
            .with_context(|| format!("Invalid meal plan service URL '{raw_url}'"))?;

        let user_agent =
            non_empty(env_vars::USER_AGENT).unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

        debug!(base_url = %base_url, user_agent = %user_agent, "Resolved client configuration");
        Ok(Self {
            base_url,
            user_agent,
        })
    }

    /// Same configuration aimed at another service root
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL
    pub fn with_base_url(self, base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: validate_base_url(base_url)
                .with_context(|| format!("Invalid meal plan service URL '{base_url}'"))?,
            ..self
        })
    }
}

/// Trim, strip trailing slashes, and require an absolute http(s) URL
fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).context("URL does not parse")?;

    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}'", parsed.scheme());
    }
    if parsed.host_str().is_none() {
        bail!("URL has no host");
    }

    Ok(trimmed.to_owned())
}
