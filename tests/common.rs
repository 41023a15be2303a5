// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, complete form fixtures, and a scripted in-memory transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealplan_client`

use async_trait::async_trait;
use mealplan_client::errors::TransportError;
use mealplan_client::form::FormSnapshot;
use mealplan_client::models::{Profile, ProfileField};
use mealplan_transport::MealPlanTransport;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// A profile that passes validation
pub fn complete_profile() -> Profile {
    Profile::new("weight-loss", "1800", "vegetarian")
}

/// A form that passes validation
pub fn complete_form() -> FormSnapshot {
    FormSnapshot::default()
        .with_profile_field(ProfileField::Goal, "weight-loss")
        .with_profile_field(ProfileField::CaloriesTarget, "1800")
        .with_profile_field(ProfileField::DietaryStyle, "vegetarian")
}

/// Canned outcome for [`ScriptedTransport`]
#[derive(Debug, Clone)]
pub enum Reply {
    /// Successful exchange returning this body
    Body(String),
    /// Non-2xx status with this message
    Status(u16, String),
    /// Service unreachable
    Unreachable,
}

/// In-memory transport that answers every send with the same reply
///
/// When gated, each send waits for [`ScriptedTransport::release`] before replying.
pub struct ScriptedTransport {
    reply: Reply,
    base_url: String,
    calls: AtomicUsize,
    bodies: Mutex<Vec<String>>,
    gate: Option<Notify>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            base_url: "http://meals.test".to_owned(),
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn body(body: &str) -> Self {
        Self::new(Reply::Body(body.to_owned()))
    }

    pub fn gated(reply: Reply) -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new(reply)
        }
    }

    /// Let one gated send finish
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent_bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl MealPlanTransport for ScriptedTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().unwrap().push(body.to_owned());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            Reply::Body(text) => Ok(text.clone()),
            Reply::Status(status, message) => Err(TransportError::Status {
                status: *status,
                message: message.clone(),
            }),
            Reply::Unreachable => Err(TransportError::connectivity(
                self.base_url.clone(),
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
            )),
        }
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
