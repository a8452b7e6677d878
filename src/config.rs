// ABOUTME: Environment-driven configuration for the Tempo Coach API server
// ABOUTME: Loads HTTP, database, and LLM provider settings with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Server configuration loaded from environment variables.
//!
//! Configuration is environment-only: every knob has a default suitable for
//! local development and can be overridden via the variables named on each
//! field.

use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port for the API server
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default SQLite database URL (file-backed, created on demand)
const DEFAULT_DATABASE_URL: &str = "sqlite:data/tempo.db?mode=rwc";

/// Default chat-completion endpoint (OpenAI)
const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for plan generation
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port the API listens on (`HTTP_PORT`)
    pub http_port: u16,
    /// Database settings
    pub database: DatabaseConfig,
    /// LLM provider settings
    pub llm: LlmConfig,
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL (`DATABASE_URL`), sqlx-style `sqlite:` URL
    pub url: String,
}

/// LLM provider settings for the OpenAI-compatible backend
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the chat-completion API (`TEMPO_LLM_BASE_URL`)
    pub base_url: String,
    /// API key (`TEMPO_LLM_API_KEY`); optional for local servers like Ollama
    pub api_key: Option<String>,
    /// Model identifier (`TEMPO_LLM_MODEL`)
    pub model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (e.g. a
    /// non-numeric `HTTP_PORT`).
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{raw}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
        };

        let llm = LlmConfig {
            base_url: env::var("TEMPO_LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_owned()),
            api_key: env::var("TEMPO_LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("TEMPO_LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_owned()),
        };

        Ok(Self {
            http_port,
            database,
            llm,
        })
    }

    /// One-line startup summary, logged by the server binary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database={} llm_base_url={} llm_model={} llm_api_key={}",
            self.http_port,
            self.database.url,
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() {
                "set"
            } else {
                "unset"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_redacts_api_key() {
        let config = ServerConfig {
            http_port: 9000,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_owned(),
            },
            llm: LlmConfig {
                base_url: DEFAULT_LLM_BASE_URL.to_owned(),
                api_key: Some("sk-secret".to_owned()),
                model: DEFAULT_LLM_MODEL.to_owned(),
            },
        };

        let summary = config.summary();
        assert!(summary.contains("http_port=9000"));
        assert!(summary.contains("llm_api_key=set"));
        assert!(!summary.contains("sk-secret"));
    }
}
