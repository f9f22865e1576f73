// ABOUTME: Remote plan-generation providers
// ABOUTME: Re-exports the webhook provider that turns survey answers into plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Plan-generation providers
//!
//! External collaborators that turn a validated survey into a full
//! [`GeneratedPlan`](crate::models::GeneratedPlan).

/// HTTP webhook plan provider
pub mod webhook_provider;

pub use webhook_provider::WebhookPlanProvider;
