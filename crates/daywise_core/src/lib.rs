//! Core domain logic for Daywise.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::task::{Task, TaskId};
pub use model::ValidationError;
pub use registry::{
    EntityRegistry, InMemoryRegistry, RegistryError, RegistryResult, TaskListQuery,
};
pub use service::schedule_service::ScheduleService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
