//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// BACKEND DEFAULTS
// =============================================================================

/// Default base URL of the EduSim REST backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/v1";

/// Default request timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// SIMULATION STATUS CODES
// =============================================================================

/// Integer status codes used by the backend for simulation records
pub mod status_codes {
    pub const PENDING: i32 = 0;
    pub const ACTIVE: i32 = 1;
    pub const WAITING_APPROVE: i32 = 2;
    pub const WAITING_APPROVE_DELETE: i32 = 3;
    pub const LOCK: i32 = -1;
    pub const REJECT: i32 = -2;
}

// =============================================================================
// TASK KINDS
// =============================================================================

/// Integer kind codes for task records
pub mod task_kinds {
    /// Top-level grouping task
    pub const TASK: i32 = 1;
    /// Child task carrying gradable question content
    pub const SUBTASK: i32 = 2;
}

// =============================================================================
// QUESTION TYPES
// =============================================================================

/// Integer codes for question answer modes
pub mod question_types {
    pub const FILE_UPLOAD: i32 = 1;
    pub const TEXT: i32 = 2;
    pub const MULTIPLE_CHOICE: i32 = 3;
}

// =============================================================================
// SUBTASK PROGRESS STATES
// =============================================================================

/// Integer state codes for a student's per-subtask progress record
pub mod progress_states {
    pub const NOT_STARTED: i32 = 0;
    pub const IN_PROGRESS: i32 = 1;
    pub const COMPLETED: i32 = 2;
}

// =============================================================================
// ACTOR ROLES
// =============================================================================

/// Actor role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const EDUCATOR: &str = "educator";
    pub const STUDENT: &str = "student";

    /// All actor roles
    pub const ALL: &[&str] = &[ADMIN, EDUCATOR, STUDENT];
}

// =============================================================================
// PERMISSION CODES
// =============================================================================

/// Backend permission codes carried by each endpoint.
///
/// An actor may only invoke an endpoint when its permission code is present
/// in the actor's granted set.
pub mod permissions {
    pub const SIMULATION_VIEW: &str = "SIM_V";
    pub const SIMULATION_CREATE: &str = "SIM_C";
    pub const SIMULATION_UPDATE: &str = "SIM_U";
    pub const SIMULATION_APPROVE: &str = "SIM_AP";
    pub const SIMULATION_REJECT: &str = "SIM_RJ";
    pub const SIMULATION_REQUEST_DELETE: &str = "SIM_RD";
    pub const SIMULATION_EDUCATOR_DELETE: &str = "SIM_ED";
    pub const SIMULATION_APPROVE_DELETE: &str = "SIM_AD";
    pub const SIMULATION_REJECT_DELETE: &str = "SIM_RJD";

    pub const TASK_VIEW: &str = "TASK_V";
    pub const TASK_CREATE: &str = "TASK_C";
    pub const TASK_UPDATE: &str = "TASK_U";
    pub const TASK_DELETE: &str = "TASK_D";

    pub const QUESTION_VIEW: &str = "TQ_V";
    pub const QUESTION_CREATE: &str = "TQ_C";
    pub const QUESTION_UPDATE: &str = "TQ_U";
    pub const QUESTION_DELETE: &str = "TQ_D";

    pub const PROGRESS_VIEW: &str = "PR_V";
    pub const PROGRESS_SUBMIT: &str = "PR_S";

    pub const REVIEW_VIEW: &str = "RV_V";
    pub const REVIEW_CREATE: &str = "RV_C";
    pub const REVIEW_UPDATE: &str = "RV_U";
    pub const REVIEW_DELETE: &str = "RV_D";

    pub const ACHIEVEMENT_VIEW: &str = "ACH_V";
}

// =============================================================================
// SIMULATION LEVELS
// =============================================================================

/// Minimum simulation difficulty level
pub const MIN_SIMULATION_LEVEL: i32 = 1;

/// Maximum simulation difficulty level
pub const MAX_SIMULATION_LEVEL: i32 = 3;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated list requests
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated list requests
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when a student loads the full question set of a subtask
pub const EXERCISE_QUESTION_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum simulation/task title length
pub const MAX_TITLE_LENGTH: u64 = 256;

/// Maximum task name length
pub const MAX_NAME_LENGTH: u64 = 128;

/// Maximum free-text description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum moderator notice length
pub const MAX_NOTICE_LENGTH: u64 = 2000;

/// Maximum number of errors allowed on a subtask
pub const MAX_TASK_ERRORS: i32 = 100;

// =============================================================================
// CONTENT MODEL
// =============================================================================

/// Bullet markers recognized in legacy plain-text section content
pub const BULLET_MARKERS: &[char] = &['\u{2022}', '-', '*'];

/// Prefix that names an auto-generated top-level task, e.g. "Task 3"
pub const TASK_AUTO_NAME_PREFIX: &str = "Task";

/// Passing threshold (percent) for an exercise score to count as a success
pub const EXERCISE_PASS_PERCENT: f64 = 70.0;
