// ABOUTME: Test helper module exports
// ABOUTME: Provides the axum HTTP test utilities to route test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

pub mod axum_test;
