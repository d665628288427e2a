//! Business logic services
//!
//! One service per entity family. Each service combines the API client, the
//! acting user's context, the in-memory list cache and the notification sink,
//! and owns the call discipline: guard first, at most one network call per
//! action, local mutation only on the success branch.

pub mod achievement_service;
pub mod exercise_service;
pub mod question_service;
pub mod review_service;
pub mod simulation_service;
pub mod task_service;

pub use achievement_service::AchievementService;
pub use exercise_service::{ExerciseService, ExerciseSession, ScoreSummary};
pub use question_service::{QuestionDraft, QuestionService};
pub use review_service::ReviewService;
pub use simulation_service::{LifecycleOutcome, SimulationDraft, SimulationListQuery, SimulationService};
pub use task_service::{TaskDraft, TaskService};
