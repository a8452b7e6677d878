// ABOUTME: Database handle for the Tempo Coach API backed by SQLite via sqlx
// ABOUTME: Creates the connection pool, applies the schema, and exposes managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Database layer.
//!
//! A [`Database`] wraps a `SqlitePool` and creates the schema on startup.
//! All table access goes through the per-table managers so query code stays
//! in one place per domain.

pub mod clients;
pub mod coaches;
pub mod plans;

pub use clients::{ActivityLevel, Client, ClientProfile, ClientsManager, CreateClientRequest};
pub use coaches::{Coach, CoachesManager, CreateCoachRequest};
pub use plans::{CreatePlanParams, Plan, PlanStatus, PlansManager};

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Maximum pooled connections; SQLite serializes writes anyway
const MAX_CONNECTIONS: u32 = 5;

/// Database handle holding the connection pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and create the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema creation fails.
    pub async fn new(url: &str) -> AppResult<Self> {
        // A pooled :memory: database would give every connection its own
        // empty database; pin those to a single connection.
        let max_connections = if url.contains(":memory:") {
            1
        } else {
            MAX_CONNECTIONS
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?;

        let database = Self { pool };
        database.migrate().await?;

        info!("Database initialized: {}", database.backend_info());
        Ok(database)
    }

    /// Apply the schema. Idempotent; runs on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS coaches (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                specialty TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create coaches table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS clients (
                id TEXT PRIMARY KEY,
                coach_id TEXT NOT NULL REFERENCES coaches(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                weight_kg REAL NOT NULL,
                height_cm REAL NOT NULL,
                goal TEXT NOT NULL,
                injuries TEXT,
                equipment TEXT,
                activity_level TEXT NOT NULL DEFAULT 'moderate',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create clients table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plans (
                id TEXT PRIMARY KEY,
                client_id TEXT NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
                weeks INTEGER NOT NULL,
                focus TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'draft',
                blocks TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create plans table: {e}")))?;

        Ok(())
    }

    /// Short backend description for startup logs
    #[must_use]
    pub fn backend_info(&self) -> String {
        format!("SQLite (pool size {MAX_CONNECTIONS})")
    }

    /// Access the underlying pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Coaches table manager
    #[must_use]
    pub fn coaches(&self) -> CoachesManager {
        CoachesManager::new(self.pool.clone())
    }

    /// Clients table manager
    #[must_use]
    pub fn clients(&self) -> ClientsManager {
        ClientsManager::new(self.pool.clone())
    }

    /// Plans table manager
    #[must_use]
    pub fn plans(&self) -> PlansManager {
        PlansManager::new(self.pool.clone())
    }
}
