//! Review submission models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Educator-authored review of one student's work on one simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub simulation_id: Option<i64>,
    #[serde(default)]
    pub student_username: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

/// A student who completed a simulation, as listed for review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedStudent {
    #[serde(rename = "profileAccountDto")]
    pub profile: StudentProfile,
    #[serde(default)]
    pub is_reviewed: bool,
}

/// Student profile embedded in completion listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}
