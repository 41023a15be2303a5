// ABOUTME: Shared HTTP client with connection pooling for meal plan requests
// ABOUTME: Singleton built lazily with platform-default timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("mealplan-client/", env!("CARGO_PKG_VERSION"));

/// Configured user agent for the shared client
static CLIENT_USER_AGENT: OnceLock<String> = OnceLock::new();

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Set the user agent of the shared client
///
/// Must be called before the first request to take effect. Timeouts are left
/// at reqwest's defaults: a generation attempt waits as long as the platform lets it.
pub fn initialize_shared_client(user_agent: impl Into<String>) {
    let _ = CLIENT_USER_AGENT.set(user_agent.into());
}

/// Get the shared HTTP client
///
/// Falls back to [`DEFAULT_USER_AGENT`] if `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let user_agent = CLIENT_USER_AGENT
            .get()
            .map_or(DEFAULT_USER_AGENT, String::as_str);

        ClientBuilder::new()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
