// ABOUTME: Route handlers for the Coaches REST API
// ABOUTME: Provides endpoints for creating and listing coaches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Coach routes
//!
//! CRUD surface for coach records. Coaches own clients; everything else in
//! the API hangs off a coach.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{Coach, CreateCoachRequest};
use crate::errors::AppError;
use crate::server::ServerResources;

/// Response for a coach
#[derive(Debug, Serialize, Deserialize)]
pub struct CoachResponse {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional coaching specialty
    pub specialty: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id.to_string(),
            name: coach.name,
            email: coach.email,
            specialty: coach.specialty,
            created_at: coach.created_at.to_rfc3339(),
            updated_at: coach.updated_at.to_rfc3339(),
        }
    }
}

/// Response for listing coaches
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCoachesResponse {
    /// List of coaches, newest first
    pub coaches: Vec<CoachResponse>,
    /// Total count
    pub total: u32,
    /// Metadata
    pub metadata: ResponseMetadata,
}

/// Metadata attached to list responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Response timestamp
    pub timestamp: String,
    /// API version
    pub api_version: String,
}

impl ResponseMetadata {
    /// Build metadata for the current instant
    #[must_use]
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            api_version: "1.0".to_owned(),
        }
    }
}

/// Request body for creating a coach
#[derive(Debug, Deserialize)]
pub struct CreateCoachBody {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional coaching specialty
    pub specialty: Option<String>,
}

impl From<CreateCoachBody> for CreateCoachRequest {
    fn from(body: CreateCoachBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            specialty: body.specialty,
        }
    }
}

/// Coaches routes handler
pub struct CoachesRoutes;

impl CoachesRoutes {
    /// Create all coaches routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/coaches", post(Self::handle_create))
            .route("/api/coaches", get(Self::handle_list))
            .route("/api/coaches/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /api/coaches - Create a new coach
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateCoachBody>,
    ) -> Result<Response, AppError> {
        if body.name.trim().is_empty() {
            return Err(AppError::invalid_input("Coach name must not be empty"));
        }
        if !body.email.contains('@') {
            return Err(AppError::invalid_input("Coach email is not valid"));
        }

        let request: CreateCoachRequest = body.into();
        let coach = resources.database.coaches().create(&request).await?;

        let response: CoachResponse = coach.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/coaches - List all coaches
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let coaches = resources.database.coaches().list().await?;

        let response = ListCoachesResponse {
            total: u32::try_from(coaches.len()).unwrap_or(0),
            coaches: coaches.into_iter().map(Into::into).collect(),
            metadata: ResponseMetadata::now(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/coaches/:id - Get a specific coach
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let coach = resources
            .database
            .coaches()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Coach {id}")))?;

        let response: CoachResponse = coach.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
