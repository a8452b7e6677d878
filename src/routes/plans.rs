// ABOUTME: Route handlers for plan generation and retrieval
// ABOUTME: Exposes the ingestion pipeline plus per-client plan listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Plan routes
//!
//! `POST /api/plans/generate` runs the full ingestion pipeline and returns
//! the persisted plan, `blocks` included. The response does not distinguish
//! a generated payload from the fallback payload; callers inspect `blocks`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::coaches::ResponseMetadata;
use crate::database::Plan;
use crate::errors::AppError;
use crate::generation::GeneratePlanRequest;
use crate::server::ServerResources;

/// Response for a plan
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Unique identifier
    pub id: String,
    /// Client this plan belongs to
    pub client_id: String,
    /// Requested duration in weeks
    pub weeks: u32,
    /// Focus label
    pub focus: String,
    /// Lifecycle status (`draft` or `active`)
    pub status: String,
    /// Generated payload, verbatim
    pub blocks: Value,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.to_string(),
            client_id: plan.client_id.to_string(),
            weeks: plan.weeks,
            focus: plan.focus,
            status: plan.status.as_str().to_owned(),
            blocks: plan.blocks,
            created_at: plan.created_at.to_rfc3339(),
            updated_at: plan.updated_at.to_rfc3339(),
        }
    }
}

/// Response for listing plans
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPlansResponse {
    /// Plans, newest first
    pub plans: Vec<PlanResponse>,
    /// Total count
    pub total: u32,
    /// Metadata
    pub metadata: ResponseMetadata,
}

/// Query parameters for listing plans
#[derive(Debug, Deserialize)]
pub struct ListPlansQuery {
    /// Client whose plans to list
    pub client_id: Uuid,
}

/// Request body for generating a plan
#[derive(Debug, Deserialize)]
pub struct GeneratePlanBody {
    /// Target client
    pub client_id: Uuid,
    /// Requested duration in weeks
    pub weeks: u32,
    /// Focus label (e.g. "hypertrophy")
    pub focus: String,
}

impl From<GeneratePlanBody> for GeneratePlanRequest {
    fn from(body: GeneratePlanBody) -> Self {
        Self {
            client_id: body.client_id,
            weeks: body.weeks,
            focus: body.focus,
        }
    }
}

/// Plans routes handler
pub struct PlansRoutes;

impl PlansRoutes {
    /// Create all plans routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans/generate", post(Self::handle_generate))
            .route("/api/plans", get(Self::handle_list))
            .route("/api/plans/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /api/plans/generate - Run the ingestion pipeline
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<GeneratePlanBody>,
    ) -> Result<Response, AppError> {
        let generator = resources.plan_generator();
        let request: GeneratePlanRequest = body.into();
        let plan = generator.generate(&request).await?;

        let response: PlanResponse = plan.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/plans?client_id=… - List a client's plans
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListPlansQuery>,
    ) -> Result<Response, AppError> {
        let plans = resources
            .database
            .plans()
            .list_for_client(query.client_id)
            .await?;

        let response = ListPlansResponse {
            total: u32::try_from(plans.len()).unwrap_or(0),
            plans: plans.into_iter().map(Into::into).collect(),
            metadata: ResponseMetadata::now(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/plans/:id - Get a specific plan
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let plan = resources
            .database
            .plans()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Plan {id}")))?;

        let response: PlanResponse = plan.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
