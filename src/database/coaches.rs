// ABOUTME: Database operations for Coach records
// ABOUTME: Handles coach creation and lookup with unique-email enforcement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult, ErrorCode};

/// A Coach owns a roster of clients and requests plan generation for them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coach {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact email, unique across coaches
    pub email: String,
    /// Optional coaching specialty (e.g. "strength", "endurance")
    pub specialty: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCoachRequest {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional coaching specialty
    pub specialty: Option<String>,
}

/// Coach database operations manager
pub struct CoachesManager {
    pool: SqlitePool,
}

impl CoachesManager {
    /// Create a new coaches manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new coach
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the email is taken, or a database
    /// error on other failures.
    pub async fn create(&self, request: &CreateCoachRequest) -> AppResult<Coach> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        sqlx::query(
            r"
            INSERT INTO coaches (id, name, email, specialty, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(id.to_string())
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.specialty)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Coach with email {} already exists", request.email),
            ),
            _ => AppError::database(format!("Failed to create coach: {e}")),
        })?;

        Ok(Coach {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            specialty: request.specialty.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a coach by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get(&self, coach_id: Uuid) -> AppResult<Option<Coach>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, specialty, created_at, updated_at
            FROM coaches
            WHERE id = $1
            ",
        )
        .bind(coach_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get coach: {e}")))?;

        row.map(|r| row_to_coach(&r)).transpose()
    }

    /// List all coaches, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list(&self) -> AppResult<Vec<Coach>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, email, specialty, created_at, updated_at
            FROM coaches
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list coaches: {e}")))?;

        rows.iter().map(row_to_coach).collect()
    }
}

/// Convert a database row to a `Coach`
fn row_to_coach(row: &SqliteRow) -> AppResult<Coach> {
    let id_str: String = row.get("id");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(Coach {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        name: row.get("name"),
        email: row.get("email"),
        specialty: row.get("specialty"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
        updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
