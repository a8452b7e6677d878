// ABOUTME: Main library entry point for the Tempo Coach API platform
// ABOUTME: Wires the REST API, persistence, and LLM plan generation modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

#![deny(unsafe_code)]

//! # Tempo Coach API
//!
//! Backend for a coach-to-client training platform. Coaches register their
//! athletes, and the server generates training/nutrition plans by forwarding
//! a deterministic prompt to an external chat-completion provider and
//! persisting whatever JSON the model returns.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers organized by domain
//! - **Database**: sqlx/SQLite managers for coaches, clients, and plans
//! - **LLM**: pluggable chat-completion providers behind [`llm::LlmProvider`]
//! - **Generation**: the plan ingestion pipeline (prompt, call, sanitize,
//!   parse, fallback, persist)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tempo_coach_server::config::ServerConfig;
//! use tempo_coach_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Tempo Coach API configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Database handle and per-table managers
pub mod database;

/// Unified error handling (error codes, HTTP mapping, response envelope)
pub mod errors;

/// Plan ingestion pipeline: prompt construction through persistence
pub mod generation;

/// LLM provider abstraction and the OpenAI-compatible implementation
pub mod llm;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// HTTP route handlers organized by domain
pub mod routes;

/// Server resources and router composition
pub mod server;
