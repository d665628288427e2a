//! Domain models
//!
//! This module contains all wire-level and domain models used throughout
//! the application.

pub mod achievement;
pub mod actor;
pub mod progress;
pub mod question;
pub mod review;
pub mod simulation;
pub mod task;

pub use achievement::*;
pub use actor::*;
pub use progress::*;
pub use question::*;
pub use review::*;
pub use simulation::*;
pub use task::*;
