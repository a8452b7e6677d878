// ABOUTME: Database operations for Client (athlete) records
// ABOUTME: Handles client creation, lookup, per-coach listing, and full replace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Self-reported activity level of an athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no regular exercise
    Sedentary,
    /// Light exercise 1-2 days per week
    Light,
    /// Moderate exercise 3-4 days per week
    #[default]
    Moderate,
    /// Hard exercise 5-6 days per week
    Active,
    /// Competitive athlete, daily training
    Athlete,
}

impl ActivityLevel {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Athlete => "athlete",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "active" => Self::Active,
            "athlete" => Self::Athlete,
            _ => Self::Moderate,
        }
    }
}

/// An athlete profile. Updates are full-replace only; there is no partial
/// update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: Uuid,
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
    /// Training goal free text (e.g. "lose fat", "first marathon")
    pub goal: String,
    /// Free-text injury notes; feeds the prompt safety gate
    pub injuries: Option<String>,
    /// Available equipment free text
    pub equipment: Option<String>,
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// The replaceable portion of a client record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
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
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

/// Request to create a new client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    /// Owning coach
    pub coach_id: Uuid,
    /// Athlete profile
    #[serde(flatten)]
    pub profile: ClientProfile,
}

/// Client database operations manager
pub struct ClientsManager {
    pool: SqlitePool,
}

impl ClientsManager {
    /// Create a new clients manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new client owned by a coach
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, request: &CreateClientRequest) -> AppResult<Client> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let profile = &request.profile;

        sqlx::query(
            r"
            INSERT INTO clients (
                id, coach_id, name, age, weight_kg, height_cm, goal,
                injuries, equipment, activity_level, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            ",
        )
        .bind(id.to_string())
        .bind(request.coach_id.to_string())
        .bind(&profile.name)
        .bind(i64::from(profile.age))
        .bind(profile.weight_kg)
        .bind(profile.height_cm)
        .bind(&profile.goal)
        .bind(&profile.injuries)
        .bind(&profile.equipment)
        .bind(profile.activity_level.as_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create client: {e}")))?;

        Ok(Client {
            id,
            coach_id: request.coach_id,
            name: profile.name.clone(),
            age: profile.age,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            goal: profile.goal.clone(),
            injuries: profile.injuries.clone(),
            equipment: profile.equipment.clone(),
            activity_level: profile.activity_level,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a client by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get(&self, client_id: Uuid) -> AppResult<Option<Client>> {
        let row = sqlx::query(
            r"
            SELECT id, coach_id, name, age, weight_kg, height_cm, goal,
                   injuries, equipment, activity_level, created_at, updated_at
            FROM clients
            WHERE id = $1
            ",
        )
        .bind(client_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get client: {e}")))?;

        row.map(|r| row_to_client(&r)).transpose()
    }

    /// List a coach's clients, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_for_coach(&self, coach_id: Uuid) -> AppResult<Vec<Client>> {
        let rows = sqlx::query(
            r"
            SELECT id, coach_id, name, age, weight_kg, height_cm, goal,
                   injuries, equipment, activity_level, created_at, updated_at
            FROM clients
            WHERE coach_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(coach_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list clients: {e}")))?;

        rows.iter().map(row_to_client).collect()
    }

    /// Replace a client's profile wholesale. The owning coach is not
    /// reassignable through this path.
    ///
    /// Returns `None` if the client does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn replace(
        &self,
        client_id: Uuid,
        profile: &ClientProfile,
    ) -> AppResult<Option<Client>> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            UPDATE clients
            SET name = $2, age = $3, weight_kg = $4, height_cm = $5, goal = $6,
                injuries = $7, equipment = $8, activity_level = $9, updated_at = $10
            WHERE id = $1
            ",
        )
        .bind(client_id.to_string())
        .bind(&profile.name)
        .bind(i64::from(profile.age))
        .bind(profile.weight_kg)
        .bind(profile.height_cm)
        .bind(&profile.goal)
        .bind(&profile.injuries)
        .bind(&profile.equipment)
        .bind(profile.activity_level.as_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to replace client: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(client_id).await
    }
}

/// Convert a database row to a `Client`
fn row_to_client(row: &SqliteRow) -> AppResult<Client> {
    let id_str: String = row.get("id");
    let coach_id_str: String = row.get("coach_id");
    let age: i64 = row.get("age");
    let activity_level_str: String = row.get("activity_level");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(Client {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        coach_id: Uuid::parse_str(&coach_id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        name: row.get("name"),
        age: u32::try_from(age).unwrap_or(0),
        weight_kg: row.get("weight_kg"),
        height_cm: row.get("height_cm"),
        goal: row.get("goal"),
        injuries: row.get("injuries"),
        equipment: row.get("equipment"),
        activity_level: ActivityLevel::parse(&activity_level_str),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
        updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
