// ABOUTME: Unit tests for the coaches database module
// ABOUTME: Tests coach creation, lookup, listing order, and unique-email enforcement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use tempo_coach_server::database::CreateCoachRequest;
use tempo_coach_server::errors::ErrorCode;
use uuid::Uuid;

#[tokio::test]
async fn test_create_coach() {
    let database = common::create_test_database().await;

    let coach = database
        .coaches()
        .create(&CreateCoachRequest {
            name: "Sam Rivera".to_owned(),
            email: "sam@tempo.fit".to_owned(),
            specialty: Some("strength".to_owned()),
        })
        .await
        .unwrap();

    assert!(!coach.id.is_nil());
    assert_eq!(coach.name, "Sam Rivera");
    assert_eq!(coach.email, "sam@tempo.fit");
    assert_eq!(coach.specialty.as_deref(), Some("strength"));
}

#[tokio::test]
async fn test_create_coach_without_specialty() {
    let database = common::create_test_database().await;

    let coach = database
        .coaches()
        .create(&CreateCoachRequest {
            name: "Lee Park".to_owned(),
            email: "lee@tempo.fit".to_owned(),
            specialty: None,
        })
        .await
        .unwrap();

    assert!(coach.specialty.is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let database = common::create_test_database().await;
    common::create_test_coach(&database, "dup@tempo.fit").await;

    let err = database
        .coaches()
        .create(&CreateCoachRequest {
            name: "Another".to_owned(),
            email: "dup@tempo.fit".to_owned(),
            specialty: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_get_coach_round_trips() {
    let database = common::create_test_database().await;
    let created = common::create_test_coach(&database, "sam@tempo.fit").await;

    let fetched = database.coaches().get(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.specialty, created.specialty);
}

#[tokio::test]
async fn test_get_unknown_coach_returns_none() {
    let database = common::create_test_database().await;

    let result = database.coaches().get(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_coaches() {
    let database = common::create_test_database().await;
    common::create_test_coach(&database, "one@tempo.fit").await;
    common::create_test_coach(&database, "two@tempo.fit").await;

    let coaches = database.coaches().list().await.unwrap();
    assert_eq!(coaches.len(), 2);
}
