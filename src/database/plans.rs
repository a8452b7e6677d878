// ABOUTME: Database operations for generated training Plan records
// ABOUTME: Stores the provider's JSON verbatim as an opaque blocks column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Lifecycle status of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Not yet activated by the coach
    #[default]
    Draft,
    /// In use by the client
    Active,
}

impl PlanStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            _ => Self::Draft,
        }
    }
}

/// A generated training/nutrition plan attached to a client.
///
/// `blocks` is whatever JSON the ingestion pipeline produced (or its
/// fallback). The stored text is the provider's output verbatim; no schema
/// is enforced beyond what the pipeline validated before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier
    pub id: Uuid,
    /// Client this plan belongs to
    pub client_id: Uuid,
    /// Requested duration in weeks
    pub weeks: u32,
    /// Focus label (e.g. "hypertrophy", "5k prep")
    pub focus: String,
    /// Lifecycle status
    pub status: PlanStatus,
    /// Opaque generated payload
    pub blocks: Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Parameters for persisting a new plan
#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    /// Client this plan belongs to
    pub client_id: Uuid,
    /// Requested duration in weeks
    pub weeks: u32,
    /// Focus label
    pub focus: String,
    /// Lifecycle status
    pub status: PlanStatus,
    /// Generated payload, stored verbatim
    pub blocks: Value,
}

/// Plan database operations manager
pub struct PlansManager {
    pool: SqlitePool,
}

impl PlansManager {
    /// Create a new plans manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new plan row
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails.
    pub async fn create(&self, params: &CreatePlanParams) -> AppResult<Plan> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let blocks_json = serde_json::to_string(&params.blocks)?;

        sqlx::query(
            r"
            INSERT INTO plans (id, client_id, weeks, focus, status, blocks, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ",
        )
        .bind(id.to_string())
        .bind(params.client_id.to_string())
        .bind(i64::from(params.weeks))
        .bind(&params.focus)
        .bind(params.status.as_str())
        .bind(&blocks_json)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create plan: {e}")))?;

        Ok(Plan {
            id,
            client_id: params.client_id,
            weeks: params.weeks,
            focus: params.focus.clone(),
            status: params.status,
            blocks: params.blocks.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a plan by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get(&self, plan_id: Uuid) -> AppResult<Option<Plan>> {
        let row = sqlx::query(
            r"
            SELECT id, client_id, weeks, focus, status, blocks, created_at, updated_at
            FROM plans
            WHERE id = $1
            ",
        )
        .bind(plan_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get plan: {e}")))?;

        row.map(|r| row_to_plan(&r)).transpose()
    }

    /// List a client's plans, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_for_client(&self, client_id: Uuid) -> AppResult<Vec<Plan>> {
        let rows = sqlx::query(
            r"
            SELECT id, client_id, weeks, focus, status, blocks, created_at, updated_at
            FROM plans
            WHERE client_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(client_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list plans: {e}")))?;

        rows.iter().map(row_to_plan).collect()
    }

    /// Count plans stored for a client
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn count_for_client(&self, client_id: Uuid) -> AppResult<u32> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM plans WHERE client_id = $1")
            .bind(client_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count plans: {e}")))?;

        let n: i64 = row.get("n");
        Ok(u32::try_from(n).unwrap_or(0))
    }
}

/// Convert a database row to a `Plan`
fn row_to_plan(row: &SqliteRow) -> AppResult<Plan> {
    let id_str: String = row.get("id");
    let client_id_str: String = row.get("client_id");
    let weeks: i64 = row.get("weeks");
    let status_str: String = row.get("status");
    let blocks_json: String = row.get("blocks");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(Plan {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        client_id: Uuid::parse_str(&client_id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        weeks: u32::try_from(weeks).unwrap_or(0),
        focus: row.get("focus"),
        status: PlanStatus::parse(&status_str),
        blocks: serde_json::from_str(&blocks_json)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
        updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
