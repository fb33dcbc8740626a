//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Keep callers decoupled from the registry implementation.

pub mod schedule_service;
