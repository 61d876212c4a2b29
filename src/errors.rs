// ABOUTME: Error handling surface for the main crate
// ABOUTME: Re-exports the unified AppError and ErrorCode from chef-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Errors are defined once in `chef-core` so the intelligence crate and the
//! server share the same codes and HTTP mapping. Route handlers return
//! `Result<Response, AppError>`; `AppError` renders itself as an
//! [`ErrorResponse`] body.

pub use chef_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
