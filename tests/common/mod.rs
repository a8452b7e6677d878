// ABOUTME: Shared test fixtures: in-memory database setup and a scripted LLM provider
// ABOUTME: Used by the database, pipeline, and HTTP route test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

// Not every test crate uses every fixture
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempo_coach_server::config::{DatabaseConfig, LlmConfig, ServerConfig};
use tempo_coach_server::database::{
    ActivityLevel, Client, ClientProfile, Coach, CreateClientRequest, CreateCoachRequest, Database,
};
use tempo_coach_server::errors::AppError;
use tempo_coach_server::llm::{ChatRequest, ChatResponse, LlmProvider};
use tempo_coach_server::server::ServerResources;

/// Create an in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("in-memory database")
}

/// Insert a coach fixture
pub async fn create_test_coach(database: &Database, email: &str) -> Coach {
    database
        .coaches()
        .create(&CreateCoachRequest {
            name: "Sam Rivera".to_owned(),
            email: email.to_owned(),
            specialty: Some("strength".to_owned()),
        })
        .await
        .expect("coach fixture")
}

/// Insert a client fixture under the given coach
pub async fn create_test_client(
    database: &Database,
    coach: &Coach,
    injuries: Option<&str>,
) -> Client {
    database
        .clients()
        .create(&CreateClientRequest {
            coach_id: coach.id,
            profile: ClientProfile {
                name: "Ana Torres".to_owned(),
                age: 31,
                weight_kg: 64.0,
                height_cm: 170.0,
                goal: "first marathon".to_owned(),
                injuries: injuries.map(ToOwned::to_owned),
                equipment: Some("dumbbells, pull-up bar".to_owned()),
                activity_level: ActivityLevel::Active,
            },
        })
        .await
        .expect("client fixture")
}

/// Minimal configuration for route tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
        },
        llm: LlmConfig {
            base_url: "http://localhost:11434/v1".to_owned(),
            api_key: None,
            model: "test-model".to_owned(),
        },
    }
}

/// Assemble server resources around a database and a scripted provider
pub fn test_resources(database: Database, provider: Arc<MockProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        database,
        provider,
        Arc::new(test_config()),
    ))
}

/// One scripted provider reply
enum MockReply {
    Content(String),
    Failure(String),
}

/// Scripted in-process stand-in for the chat-completion provider.
///
/// Replies are consumed front to back; every incoming request is recorded so
/// tests can assert on the constructed prompt.
pub struct MockProvider {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful completion with the given content
    pub fn push_content(&self, content: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Content(content.to_owned()));
    }

    /// Script a provider failure
    pub fn push_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(message.to_owned()));
    }

    /// Requests the provider has received so far
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock provider has no scripted reply left");

        match reply {
            MockReply::Content(content) => Ok(ChatResponse {
                content,
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            MockReply::Failure(message) => Err(AppError::external_service("LLM", message)),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
