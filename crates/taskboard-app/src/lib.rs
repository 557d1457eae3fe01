//! Application layer logic for taskboard.
//!
//! This crate provides the service façade, the shared async handle and the
//! configuration used by both the HTTP gateway and the CLI.

pub mod config;
pub mod service;
pub mod shared;
pub mod task_store;

// Re-exports for convenience
pub use config::{ProjectConfig, ServerConfig, StoreConfig};
pub use service::{TaskService, TaskServiceError};
pub use shared::SharedTaskService;
pub use task_store::TaskStore;
