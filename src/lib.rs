//! EduSim - E-learning Administration Core
//!
//! This library provides the client-side core of the EduSim platform: the
//! typed logic that admin, educator and student front-ends share when
//! talking to the EduSim REST backend.
//!
//! # Features
//!
//! - Simulation lifecycle state machine with role-gated transitions
//! - Two-level task/subtask tree assembly with orphan tolerance
//! - Tolerant parsing of JSON-encoded content fields
//! - Optimistic list cache with success-only mutation
//! - Student exercise flow with local grading
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Services**: per-entity orchestration (guard, call, cache, notify)
//! - **Lifecycle/Hierarchy/Content**: pure domain logic
//! - **Api**: envelope decoding and the HTTP gateway
//! - **Models**: wire-level domain models

pub mod api;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod hierarchy;
pub mod lifecycle;
pub mod models;
pub mod notify;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ActorContext, Role};
