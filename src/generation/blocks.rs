// ABOUTME: Plan blocks payload handling: sanitation, parsing, validation, fallback
// ABOUTME: Turns raw model output into a storable JSON value or the sentinel fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Plan payload ("blocks") handling.
//!
//! The model is instructed to answer with bare JSON, but the output is still
//! untrusted text: it may arrive wrapped in markdown code fences, be
//! syntactically broken, or carry the wrong shape. [`parse_blocks`] sanitizes
//! and validates; callers substitute [`fallback_blocks`] when it fails.
//!
//! The accepted value is stored verbatim. [`PlanBlocks`] is a defensive
//! mirror with every field optional — it is used to check shape, never to
//! re-serialize the payload, so unknown provider fields survive.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Overview text stored on plans whose generation output was unusable
pub const FALLBACK_OVERVIEW: &str =
    "Plan generation failed: the model did not return valid plan JSON. \
     Regenerate this plan or author it manually.";

/// Why a model response could not be accepted as plan blocks
#[derive(Debug, Error)]
pub enum BlocksError {
    /// The sanitized text was not syntactically valid JSON
    #[error("response is not valid JSON: {0}")]
    Parse(serde_json::Error),
    /// The JSON parsed but a field had the wrong type
    #[error("response JSON has the wrong shape: {0}")]
    Shape(serde_json::Error),
    /// The `weeks` array was missing or empty
    #[error("response JSON contains no weeks")]
    EmptyWeeks,
}

/// Generated plan payload. Every field is optional: the source of truth is
/// an LLM, which guarantees nothing about shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanBlocks {
    /// Free-text summary of the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Week-by-week training schedule
    #[serde(default)]
    pub weeks: Vec<WeekBlock>,
    /// Daily nutrition targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionBlock>,
}

/// One week of the schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekBlock {
    /// 1-based week number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    /// Week-level emphasis (e.g. "volume", "deload")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
    /// Training days within the week
    #[serde(default)]
    pub days: Vec<DayBlock>,
}

/// One training day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayBlock {
    /// Day label (e.g. "Monday", "Day 1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Session focus (e.g. "upper body", "intervals")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Prescribed exercises
    #[serde(default)]
    pub exercises: Vec<ExerciseBlock>,
}

/// A single exercise prescription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseBlock {
    /// Exercise name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Rep scheme free text (e.g. "8-10", "AMRAP")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Rest between sets (e.g. "90s")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

/// Daily nutrition targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionBlock {
    /// Daily calorie target
    #[serde(default)]
    pub daily_calories: u32,
    /// Protein target in grams
    #[serde(default)]
    pub protein_grams: u32,
    /// Carbohydrate target in grams
    #[serde(default)]
    pub carbs_grams: u32,
    /// Fat target in grams
    #[serde(default)]
    pub fat_grams: u32,
    /// Free-text guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,
}

/// Strip markdown code-fence markers the model may add despite instructions,
/// and trim surrounding whitespace.
#[must_use]
pub fn sanitize(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Sanitize and parse raw model output into a storable JSON value.
///
/// The returned value is the parsed response verbatim — it is only checked
/// against [`PlanBlocks`] for shape, never rebuilt from it.
///
/// # Errors
///
/// Returns a [`BlocksError`] when the text is not JSON, a field has the
/// wrong type, or the `weeks` array is missing or empty.
pub fn parse_blocks(raw: &str) -> Result<Value, BlocksError> {
    let sanitized = sanitize(raw);
    let value: Value = serde_json::from_str(sanitized).map_err(BlocksError::Parse)?;

    let shape: PlanBlocks = serde_json::from_value(value.clone()).map_err(BlocksError::Shape)?;
    if shape.weeks.is_empty() {
        return Err(BlocksError::EmptyWeeks);
    }

    Ok(value)
}

/// The sentinel payload persisted when generation output was unusable:
/// empty weeks, zeroed nutrition, and an overview explaining the failure.
#[must_use]
pub fn fallback_blocks() -> PlanBlocks {
    PlanBlocks {
        overview: Some(FALLBACK_OVERVIEW.to_owned()),
        weeks: Vec::new(),
        nutrition: Some(NutritionBlock::default()),
    }
}
