// ABOUTME: Route handlers for the Clients (athletes) REST API
// ABOUTME: Provides create, per-coach listing, fetch, and full-replace endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Client routes
//!
//! Athlete profiles owned by a coach. Updates are full-replace only: PUT
//! overwrites every profile field, matching how the dashboard edits records.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::coaches::ResponseMetadata;
use crate::database::{ActivityLevel, Client, ClientProfile, CreateClientRequest};
use crate::errors::AppError;
use crate::server::ServerResources;

/// Response for a client
#[derive(Debug, Serialize, Deserialize)]
pub struct ClientResponse {
    /// Unique identifier
    pub id: String,
    /// Owning coach
    pub coach_id: String,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Training goal free text
    pub goal: String,
    /// Free-text injury notes
    pub injuries: Option<String>,
    /// Available equipment free text
    pub equipment: Option<String>,
    /// Self-reported activity level
    pub activity_level: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.to_string(),
            coach_id: client.coach_id.to_string(),
            name: client.name,
            age: client.age,
            weight_kg: client.weight_kg,
            height_cm: client.height_cm,
            goal: client.goal,
            injuries: client.injuries,
            equipment: client.equipment,
            activity_level: client.activity_level.as_str().to_owned(),
            created_at: client.created_at.to_rfc3339(),
            updated_at: client.updated_at.to_rfc3339(),
        }
    }
}

/// Response for listing clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ListClientsResponse {
    /// Clients, newest first
    pub clients: Vec<ClientResponse>,
    /// Total count
    pub total: u32,
    /// Metadata
    pub metadata: ResponseMetadata,
}

/// Query parameters for listing clients
#[derive(Debug, Deserialize)]
pub struct ListClientsQuery {
    /// Coach whose roster to list
    pub coach_id: Uuid,
}

/// Request body for creating a client
#[derive(Debug, Deserialize)]
pub struct CreateClientBody {
    /// Owning coach
    pub coach_id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Training goal free text
    pub goal: String,
    /// Free-text injury notes
    pub injuries: Option<String>,
    /// Available equipment free text
    pub equipment: Option<String>,
    /// Self-reported activity level (defaults to moderate)
    pub activity_level: Option<String>,
}

/// Request body for a full-replace update
#[derive(Debug, Deserialize)]
pub struct ReplaceClientBody {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Training goal free text
    pub goal: String,
    /// Free-text injury notes
    pub injuries: Option<String>,
    /// Available equipment free text
    pub equipment: Option<String>,
    /// Self-reported activity level (defaults to moderate)
    pub activity_level: Option<String>,
}

impl ReplaceClientBody {
    fn into_profile(self) -> ClientProfile {
        ClientProfile {
            name: self.name,
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            goal: self.goal,
            injuries: self.injuries,
            equipment: self.equipment,
            activity_level: self
                .activity_level
                .as_deref()
                .map(ActivityLevel::parse)
                .unwrap_or_default(),
        }
    }
}

impl From<CreateClientBody> for CreateClientRequest {
    fn from(body: CreateClientBody) -> Self {
        Self {
            coach_id: body.coach_id,
            profile: ClientProfile {
                name: body.name,
                age: body.age,
                weight_kg: body.weight_kg,
                height_cm: body.height_cm,
                goal: body.goal,
                injuries: body.injuries,
                equipment: body.equipment,
                activity_level: body
                    .activity_level
                    .as_deref()
                    .map(ActivityLevel::parse)
                    .unwrap_or_default(),
            },
        }
    }
}

/// Clients routes handler
pub struct ClientsRoutes;

impl ClientsRoutes {
    /// Create all clients routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/clients", post(Self::handle_create))
            .route("/api/clients", get(Self::handle_list))
            .route("/api/clients/:id", get(Self::handle_get))
            .route("/api/clients/:id", put(Self::handle_replace))
            .with_state(resources)
    }

    /// Handle POST /api/clients - Create a new client
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateClientBody>,
    ) -> Result<Response, AppError> {
        if body.name.trim().is_empty() {
            return Err(AppError::invalid_input("Client name must not be empty"));
        }

        // Reject rosters for coaches that do not exist
        resources
            .database
            .coaches()
            .get(body.coach_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Coach {}", body.coach_id)))?;

        let request: CreateClientRequest = body.into();
        let client = resources.database.clients().create(&request).await?;

        let response: ClientResponse = client.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/clients?coach_id=… - List a coach's clients
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListClientsQuery>,
    ) -> Result<Response, AppError> {
        let clients = resources
            .database
            .clients()
            .list_for_coach(query.coach_id)
            .await?;

        let response = ListClientsResponse {
            total: u32::try_from(clients.len()).unwrap_or(0),
            clients: clients.into_iter().map(Into::into).collect(),
            metadata: ResponseMetadata::now(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/clients/:id - Get a specific client
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let client = resources
            .database
            .clients()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Client {id}")))?;

        let response: ClientResponse = client.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/clients/:id - Replace a client's profile wholesale
    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(body): Json<ReplaceClientBody>,
    ) -> Result<Response, AppError> {
        if body.name.trim().is_empty() {
            return Err(AppError::invalid_input("Client name must not be empty"));
        }

        let client = resources
            .database
            .clients()
            .replace(id, &body.into_profile())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Client {id}")))?;

        let response: ClientResponse = client.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
