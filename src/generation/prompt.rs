// ABOUTME: Deterministic prompt construction for plan generation
// ABOUTME: Embeds client attributes, the injury safety gate, and the JSON shape example
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Prompt construction for the plan ingestion pipeline.
//!
//! The prompt is a deterministic function of the client profile and the
//! request: same inputs, same messages. The injury safety gate is textual
//! only — it instructs the model, nothing enforces it on the output.

use crate::database::Client;
use crate::llm::ChatMessage;

/// System instruction for every generation request
const SYSTEM_PROMPT: &str = "You are an expert strength and conditioning coach \
and sports nutritionist. You design structured training plans. Respond with \
strictly valid JSON only: no greetings, no prose, no markdown code fences.";

/// Sentence used when the client has no meaningful injury notes
pub const HEALTHY_ATHLETE_NOTE: &str =
    "The athlete is healthy with no reported injuries.";

/// Instruction appended after the literal injury text
pub const INJURY_EXCLUSION_INSTRUCTION: &str =
    "Exclude any exercises that load the affected area and prefer safe substitutions.";

/// Injury notes at or under this many characters are treated as noise
const INJURY_NOTE_MIN_CHARS: usize = 2;

/// Literal example of the desired response shape, embedded in the prompt
const PLAN_JSON_EXAMPLE: &str = r#"{
  "overview": "Four-week hypertrophy block with progressive overload.",
  "weeks": [
    {
      "week": 1,
      "emphasis": "volume",
      "days": [
        {
          "day": "Monday",
          "focus": "upper body",
          "exercises": [
            { "name": "Bench Press", "sets": 4, "reps": "8-10", "rest": "90s" }
          ]
        }
      ]
    }
  ],
  "nutrition": {
    "daily_calories": 2600,
    "protein_grams": 160,
    "carbs_grams": 300,
    "fat_grams": 80,
    "guidelines": "Prioritize protein at every meal."
  }
}"#;

/// Build the safety-gate sentence from the client's injury notes.
///
/// Notes longer than [`INJURY_NOTE_MIN_CHARS`] characters (after trimming)
/// put the literal text plus the exclusion instruction into the prompt;
/// anything shorter gets the fixed healthy-athlete sentence.
#[must_use]
pub fn safety_note(client: &Client) -> String {
    match client.injuries.as_deref().map(str::trim) {
        Some(injuries) if injuries.chars().count() > INJURY_NOTE_MIN_CHARS => format!(
            "The athlete reports the following injuries: {injuries}. \
             {INJURY_EXCLUSION_INSTRUCTION}"
        ),
        _ => HEALTHY_ATHLETE_NOTE.to_owned(),
    }
}

/// Build the system + user message pair for a generation request
#[must_use]
pub fn build_plan_messages(client: &Client, weeks: u32, focus: &str) -> Vec<ChatMessage> {
    let equipment = client.equipment.as_deref().unwrap_or("bodyweight only");

    let user_prompt = format!(
        "Create a {weeks}-week training plan focused on {focus} for the following athlete:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Weight: {weight:.1} kg\n\
         - Height: {height:.1} cm\n\
         - Goal: {goal}\n\
         - Activity level: {activity}\n\
         - Available equipment: {equipment}\n\
         {safety}\n\
         The plan must cover exactly {weeks} weeks. Answer with a single JSON \
         object matching this shape exactly, with one entry per week:\n\
         {example}",
        name = client.name,
        age = client.age,
        weight = client.weight_kg,
        height = client.height_cm,
        goal = client.goal,
        activity = client.activity_level.as_str(),
        safety = safety_note(client),
        example = PLAN_JSON_EXAMPLE,
    );

    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt),
    ]
}
