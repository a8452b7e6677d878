// ABOUTME: Unit tests for the clients database module
// ABOUTME: Tests client creation, per-coach listing, and full-replace updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use tempo_coach_server::database::{ActivityLevel, ClientProfile};
use uuid::Uuid;

#[tokio::test]
async fn test_create_client() {
    let database = common::create_test_database().await;
    let coach = common::create_test_coach(&database, "sam@tempo.fit").await;

    let client = common::create_test_client(&database, &coach, Some("left knee pain")).await;

    assert!(!client.id.is_nil());
    assert_eq!(client.coach_id, coach.id);
    assert_eq!(client.name, "Ana Torres");
    assert_eq!(client.age, 31);
    assert_eq!(client.injuries.as_deref(), Some("left knee pain"));
    assert_eq!(client.activity_level, ActivityLevel::Active);
}

#[tokio::test]
async fn test_get_client_round_trips() {
    let database = common::create_test_database().await;
    let coach = common::create_test_coach(&database, "sam@tempo.fit").await;
    let created = common::create_test_client(&database, &coach, None).await;

    let fetched = database.clients().get(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.coach_id, coach.id);
    assert!(fetched.injuries.is_none());
    assert!((fetched.weight_kg - 64.0).abs() < f64::EPSILON);
    assert!((fetched.height_cm - 170.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_list_for_coach_isolates_rosters() {
    let database = common::create_test_database().await;
    let coach_a = common::create_test_coach(&database, "a@tempo.fit").await;
    let coach_b = common::create_test_coach(&database, "b@tempo.fit").await;

    common::create_test_client(&database, &coach_a, None).await;
    common::create_test_client(&database, &coach_a, None).await;
    common::create_test_client(&database, &coach_b, None).await;

    let roster_a = database.clients().list_for_coach(coach_a.id).await.unwrap();
    let roster_b = database.clients().list_for_coach(coach_b.id).await.unwrap();

    assert_eq!(roster_a.len(), 2);
    assert_eq!(roster_b.len(), 1);
}

#[tokio::test]
async fn test_replace_overwrites_every_field() {
    let database = common::create_test_database().await;
    let coach = common::create_test_coach(&database, "sam@tempo.fit").await;
    let created = common::create_test_client(&database, &coach, Some("shoulder impingement")).await;

    let replaced = database
        .clients()
        .replace(
            created.id,
            &ClientProfile {
                name: "Ana T.".to_owned(),
                age: 32,
                weight_kg: 61.5,
                height_cm: 170.0,
                goal: "sub-4 marathon".to_owned(),
                injuries: None,
                equipment: None,
                activity_level: ActivityLevel::Athlete,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.coach_id, coach.id);
    assert_eq!(replaced.name, "Ana T.");
    assert_eq!(replaced.age, 32);
    assert_eq!(replaced.goal, "sub-4 marathon");
    // Full replace: previously-set optional fields are gone
    assert!(replaced.injuries.is_none());
    assert!(replaced.equipment.is_none());
    assert_eq!(replaced.activity_level, ActivityLevel::Athlete);
}

#[tokio::test]
async fn test_replace_unknown_client_returns_none() {
    let database = common::create_test_database().await;

    let result = database
        .clients()
        .replace(
            Uuid::new_v4(),
            &ClientProfile {
                name: "Ghost".to_owned(),
                age: 40,
                weight_kg: 80.0,
                height_cm: 180.0,
                goal: "none".to_owned(),
                injuries: None,
                equipment: None,
                activity_level: ActivityLevel::Moderate,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn test_activity_level_codec() {
    for level in [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ] {
        assert_eq!(ActivityLevel::parse(level.as_str()), level);
    }

    // Unknown strings fall back to the default
    assert_eq!(ActivityLevel::parse("extreme"), ActivityLevel::Moderate);
}
