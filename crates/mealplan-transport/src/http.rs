// ABOUTME: reqwest implementation of the meal plan transport
// ABOUTME: Posts the prepared JSON body once and classifies connection and status failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service::MEAL_PLAN_PATH;
use crate::core::MealPlanTransport;
use crate::errors::TransportError;
use crate::failure_body::failure_message;
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

/// HTTP transport posting to `{base_url}/api/mealplan`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport using the shared client
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidBaseUrl` if the base URL is not an absolute
    /// `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(shared_client().clone(), base_url)
    }

    /// Create a transport with a caller-provided client
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidBaseUrl` if the base URL is not an absolute
    /// `http` or `https` URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        let endpoint = Url::parse(&format!("{base_url}{MEAL_PLAN_PATH}"))
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| TransportError::InvalidBaseUrl {
                url: base_url.clone(),
            })?;

        Ok(Self {
            client,
            base_url,
            endpoint,
        })
    }

    /// Full URL requests are posted to
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MealPlanTransport for HttpTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "Posting meal plan request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Meal plan service unreachable");
                TransportError::connectivity(&self.base_url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(status = status.as_u16(), error = %e, "Failed to read error body");
                    String::new()
                }
            };
            let message = failure_message(status.as_u16(), &text);
            warn!(status = status.as_u16(), message = %message, "Meal plan service returned an error");
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::connectivity(&self.base_url, e))?;

        info!(status = status.as_u16(), bytes = text.len(), "Meal plan response received");
        Ok(text)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
