// ABOUTME: Server resources and HTTP router composition for the Tempo Coach API
// ABOUTME: Merges domain routers and layers CORS and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Server assembly.
//!
//! [`ServerResources`] bundles the shared handles (database, LLM provider,
//! configuration) that handlers receive as axum state. [`CoachServer`]
//! composes the domain routers and serves them.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::generation::PlanGenerator;
use crate::llm::LlmProvider;
use crate::routes::{ClientsRoutes, CoachesRoutes, HealthRoutes, PlansRoutes};

/// Shared handles passed to every route handler.
///
/// The provider and database are explicit dependency-injected handles, not
/// process-wide singletons, so tests can assemble resources around fakes.
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Chat-completion provider used for plan generation
    pub provider: Arc<dyn LlmProvider>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resources for the server
    #[must_use]
    pub fn new(database: Database, provider: Arc<dyn LlmProvider>, config: Arc<ServerConfig>) -> Self {
        Self {
            database,
            provider,
            config,
        }
    }

    /// Build a plan generator over these resources
    #[must_use]
    pub fn plan_generator(&self) -> PlanGenerator {
        PlanGenerator::new(self.provider.clone(), &self.database)
    }
}

/// The HTTP server
pub struct CoachServer {
    resources: Arc<ServerResources>,
}

impl CoachServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Compose the full application router.
    ///
    /// CORS is permissive: the dashboard is served from a different origin
    /// and the API carries no credentials.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(CoachesRoutes::routes(self.resources.clone()))
            .merge(ClientsRoutes::routes(self.resources.clone()))
            .merge(PlansRoutes::routes(self.resources.clone()))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails.
    pub async fn run(&self, port: u16) -> AppResult<()> {
        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!("Tempo Coach API listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))
    }
}
