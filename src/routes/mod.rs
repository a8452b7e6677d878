// ABOUTME: Route module organization for the Tempo Coach API HTTP endpoints
// ABOUTME: One module per domain with thin handlers delegating to managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! Route modules for the Tempo Coach API.
//!
//! Each domain module contains its request/response DTOs, route definitions,
//! and thin handler functions that delegate to the database managers or the
//! plan generator.

/// Client (athlete) management routes
pub mod clients;
/// Coach management routes
pub mod coaches;
/// Health check routes
pub mod health;
/// Plan generation and retrieval routes
pub mod plans;

/// Client route handlers
pub use clients::ClientsRoutes;
/// Coach route handlers
pub use coaches::CoachesRoutes;
/// Health route handlers
pub use health::HealthRoutes;
/// Plan route handlers
pub use plans::PlansRoutes;
