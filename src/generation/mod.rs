// ABOUTME: Plan ingestion pipeline: lookup, prompt, provider call, parse, fallback, persist
// ABOUTME: The one stateful-feeling flow in the system, kept linear and unretried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! # Plan Ingestion Pipeline
//!
//! Turns a client profile plus a (weeks, focus) request into a persisted
//! [`Plan`]. The pipeline is linear and makes exactly one provider call:
//!
//! 1. Resolve the client; unknown ids abort before any provider cost.
//! 2. Build a deterministic prompt with the injury safety gate.
//! 3. One chat-completion round trip at low temperature. Provider and
//!    transport failures propagate to the caller; there is no retry.
//! 4. Sanitize and parse the response. Unusable output is downgraded to the
//!    fallback payload and the request still succeeds.
//! 5. Persist the plan row with the payload stored verbatim.
//!
//! Concurrent requests for the same client are not coordinated: each calls
//! the provider and each inserts its own row.

pub mod blocks;
pub mod prompt;

pub use blocks::{fallback_blocks, parse_blocks, sanitize, BlocksError, PlanBlocks};

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::database::{ClientsManager, CreatePlanParams, Database, Plan, PlanStatus, PlansManager};
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatRequest, LlmProvider};

/// Low temperature biases the model toward structured output over variation
const PLAN_TEMPERATURE: f32 = 0.2;

/// Generation budget; long plans fit comfortably below this
const PLAN_MAX_TOKENS: u32 = 4096;

/// A request to generate a plan for one client
#[derive(Debug, Clone)]
pub struct GeneratePlanRequest {
    /// Target client
    pub client_id: Uuid,
    /// Requested duration in weeks
    pub weeks: u32,
    /// Focus label passed through to the prompt and the stored plan
    pub focus: String,
}

/// The plan ingestion pipeline, with its provider and store handles injected
pub struct PlanGenerator {
    provider: Arc<dyn LlmProvider>,
    clients: ClientsManager,
    plans: PlansManager,
}

impl PlanGenerator {
    /// Create a generator over the given provider and database
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, database: &Database) -> Self {
        Self {
            provider,
            clients: database.clients(),
            plans: database.plans(),
        }
    }

    /// Run the full pipeline and return the persisted plan.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown client, `InvalidInput` for a
    /// zero-week request, and the provider's error when the external call
    /// fails. A malformed provider *response* is not an error: the plan is
    /// persisted with the fallback payload.
    pub async fn generate(&self, request: &GeneratePlanRequest) -> AppResult<Plan> {
        if request.weeks == 0 {
            return Err(AppError::invalid_input("Plan duration must be at least 1 week"));
        }

        let client = self
            .clients
            .get(request.client_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Client {}", request.client_id)))?;

        let messages = prompt::build_plan_messages(&client, request.weeks, &request.focus);
        let chat_request = ChatRequest::new(messages)
            .with_temperature(PLAN_TEMPERATURE)
            .with_max_tokens(PLAN_MAX_TOKENS);

        let response = self.provider.complete(&chat_request).await?;

        let blocks = match parse_blocks(&response.content) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    client_id = %client.id,
                    model = %response.model,
                    "Generation produced unusable output, storing fallback: {err}"
                );
                serde_json::to_value(fallback_blocks())?
            }
        };

        let plan = self
            .plans
            .create(&CreatePlanParams {
                client_id: client.id,
                weeks: request.weeks,
                focus: request.focus.clone(),
                status: PlanStatus::Active,
                blocks,
            })
            .await?;

        info!(
            plan_id = %plan.id,
            client_id = %client.id,
            weeks = plan.weeks,
            "Plan generated and persisted"
        );

        Ok(plan)
    }
}
