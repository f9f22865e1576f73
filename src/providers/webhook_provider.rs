// ABOUTME: HTTP client for the remote plan-generation webhook
// ABOUTME: Posts validated survey answers and decodes the returned plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Webhook plan provider
//!
//! A single-attempt JSON POST to the plan-generation webhook. There is no
//! retry or backoff: a non-success status or a malformed body surfaces as an
//! error for the caller to display. Response validation happens exactly once,
//! here, via typed decoding into [`GeneratedPlan`].

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult};
use crate::models::GeneratedPlan;
use crate::survey::PlanRequest;

/// Client for the remote plan-generation webhook
pub struct WebhookPlanProvider {
    client: Client,
    endpoint: String,
}

impl WebhookPlanProvider {
    /// Create a provider from runtime configuration
    pub fn new(config: &PlannerConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::internal("failed to build HTTP client").with_source(e)
            })?;
        Ok(Self {
            client,
            endpoint: config.webhook_url.clone(),
        })
    }

    /// Create a provider for a specific endpoint with default client settings
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit survey answers and return the generated plan
    ///
    /// Validates the request locally first, then makes one HTTP attempt.
    pub async fn generate_plan(&self, request: &PlanRequest) -> AppResult<GeneratedPlan> {
        request.validate()?;

        debug!(endpoint = %self.endpoint, "submitting plan request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::service_unavailable(format!(
                    "plan webhook request failed: {}",
                    self.endpoint
                ))
                .with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "plan webhook returned HTTP {status}"
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            AppError::external_service("failed to read plan webhook response").with_source(e)
        })?;

        let plan: GeneratedPlan = serde_json::from_slice(&body).map_err(|e| {
            AppError::serialization("plan webhook returned an unexpected payload shape")
                .with_source(e)
        })?;

        info!(
            workout_days = plan.workout_plan.len(),
            diet_days = plan.diet_plan.len(),
            has_details = plan.has_plan_details(),
            "plan generated"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_keeps_configured_endpoint() {
        let provider = WebhookPlanProvider::with_endpoint("https://example.com/webhook");
        assert_eq!(provider.endpoint(), "https://example.com/webhook");
    }

    #[test]
    fn test_provider_from_config_uses_default_webhook() {
        let provider = WebhookPlanProvider::new(&PlannerConfig::default()).unwrap();
        assert_eq!(provider.endpoint(), crate::constants::defaults::WEBHOOK_URL);
    }
}
