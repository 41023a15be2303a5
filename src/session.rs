// ABOUTME: Runs one generation attempt at a time and publishes the resulting view state
// ABOUTME: Chains request building, transport, normalization, and error classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Generation session
//!
//! A session owns a transport, a single-flight flag, and a `watch` channel
//! carrying the current [`ViewState`]. Every attempt ends with exactly one of
//! `error` or `meal_plan` set, and the flag is released however the attempt ends.

use crate::classifier::classify;
use crate::config::ClientConfig;
use crate::errors::{MealPlanError, PipelineResult, TransportError};
use crate::form::FormSnapshot;
use crate::models::MealPlanResult;
use crate::normalize::normalize;
use mealplan_transport::{HttpTransport, MealPlanTransport};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// What a presentation layer renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// A request is outstanding
    pub loading: bool,
    /// User-facing failure message
    pub error: Option<String>,
    /// Normalized plan from the last successful attempt
    pub meal_plan: Option<MealPlanResult>,
}

impl ViewState {
    const fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            meal_plan: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            loading: false,
            error: Some(message),
            meal_plan: None,
        }
    }

    fn ready(plan: MealPlanResult) -> Self {
        Self {
            loading: false,
            error: None,
            meal_plan: Some(plan),
        }
    }
}

/// Releases the in-flight flag when an attempt ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A meal plan generation session over some transport
pub struct MealPlanSession<T = HttpTransport> {
    transport: T,
    in_flight: AtomicBool,
    view: watch::Sender<ViewState>,
}

impl MealPlanSession<HttpTransport> {
    /// Session posting to the configured service
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseUrl` if the configured base URL is unusable
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(&config.base_url)?))
    }
}

impl<T: MealPlanTransport> MealPlanSession<T> {
    /// Wrap a transport in an idle session
    #[must_use]
    pub fn new(transport: T) -> Self {
        let (view, _) = watch::channel(ViewState::default());
        Self {
            transport,
            in_flight: AtomicBool::new(false),
            view,
        }
    }

    /// Follow view updates
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    /// Current view
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Whether an attempt is outstanding
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Whether the generate trigger should be enabled for `form`
    #[must_use]
    pub fn can_generate(&self, form: &FormSnapshot) -> bool {
        form.is_submittable() && !self.is_generating()
    }

    /// Transport this session sends through
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one generation attempt for `form`
    ///
    /// The published view moves to loading, then to either the plan or the
    /// classified error. A call made while another is outstanding is rejected
    /// and leaves the view alone.
    ///
    /// # Errors
    ///
    /// Returns `Busy` when another attempt is running, otherwise whatever
    /// validation, transport, or normalization failure ended the attempt
    pub async fn generate(&self, form: &FormSnapshot) -> PipelineResult<MealPlanResult> {
        let Some(_guard) = self.try_acquire() else {
            debug!("Rejected generation while another is in flight");
            return Err(MealPlanError::Busy);
        };

        let span = info_span!(
            "generate_meal_plan",
            attempt_id = %Uuid::new_v4(),
            base_url = %self.transport.base_url(),
        );

        async {
            let outcome = self.run(form).await;
            match &outcome {
                Ok(plan) => {
                    info!(days = plan.meals.len(), "Meal plan ready");
                    self.publish(ViewState::ready(plan.clone()));
                }
                Err(err) => self.publish(ViewState::failed(classify(err))),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run(&self, form: &FormSnapshot) -> PipelineResult<MealPlanResult> {
        let request = form.prepare()?;

        self.publish(ViewState::loading());
        info!(size = request.size(), "Requesting meal plan");

        let body = self.transport.send(request.body()).await?;
        Ok(normalize(&body)?)
    }

    fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }

    fn publish(&self, state: ViewState) {
        self.view.send_replace(state);
    }
}
