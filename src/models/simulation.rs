//! Simulation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::status_codes;
use crate::error::AppError;

/// Simulation record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: i64,
    pub title: String,
    /// Difficulty level, 1 (basic) through 3 (advanced)
    pub level: i32,
    #[serde(default)]
    pub specialization: Option<Specialization>,
    /// Free-text duration estimate, e.g. "6 hours"
    #[serde(default)]
    pub total_estimated_time: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    /// JSON-encoded `{title, content}` document, passed through opaquely
    #[serde(default)]
    pub description: Option<String>,
    /// JSON-encoded `[{title, content}]` section array, passed through opaquely
    #[serde(default)]
    pub overview: Option<String>,
    pub status: SimulationStatus,
    /// Moderator feedback attached by the last approve/reject action
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub educator: Option<EducatorRef>,
    #[serde(default)]
    pub participant_quantity: Option<i64>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

impl Simulation {
    /// Whether the row carries moderator feedback worth surfacing.
    ///
    /// An all-whitespace notice counts as absent: the backend pads blank
    /// notices to a single space.
    pub fn has_notice(&self) -> bool {
        self.notice
            .as_deref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false)
    }

    /// Whether the record sits in one of the moderation queues
    pub fn is_awaiting_moderation(&self) -> bool {
        matches!(
            self.status,
            SimulationStatus::WaitingApprove | SimulationStatus::WaitingApproveDelete
        )
    }
}

/// Simulation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SimulationStatus {
    Pending,
    Active,
    WaitingApprove,
    WaitingApproveDelete,
    Lock,
    Reject,
}

impl SimulationStatus {
    /// All lifecycle statuses
    pub const ALL: &'static [SimulationStatus] = &[
        SimulationStatus::Pending,
        SimulationStatus::Active,
        SimulationStatus::WaitingApprove,
        SimulationStatus::WaitingApproveDelete,
        SimulationStatus::Lock,
        SimulationStatus::Reject,
    ];

    /// The integer code the backend uses for this status
    pub fn code(self) -> i32 {
        match self {
            Self::Pending => status_codes::PENDING,
            Self::Active => status_codes::ACTIVE,
            Self::WaitingApprove => status_codes::WAITING_APPROVE,
            Self::WaitingApproveDelete => status_codes::WAITING_APPROVE_DELETE,
            Self::Lock => status_codes::LOCK,
            Self::Reject => status_codes::REJECT,
        }
    }
}

impl TryFrom<i32> for SimulationStatus {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            status_codes::PENDING => Ok(Self::Pending),
            status_codes::ACTIVE => Ok(Self::Active),
            status_codes::WAITING_APPROVE => Ok(Self::WaitingApprove),
            status_codes::WAITING_APPROVE_DELETE => Ok(Self::WaitingApproveDelete),
            status_codes::LOCK => Ok(Self::Lock),
            status_codes::REJECT => Ok(Self::Reject),
            other => Err(AppError::Decode(format!("unknown simulation status code {other}"))),
        }
    }
}

impl From<SimulationStatus> for i32 {
    fn from(status: SimulationStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::WaitingApprove => write!(f, "waiting_approve"),
            Self::WaitingApproveDelete => write!(f, "waiting_approve_delete"),
            Self::Lock => write!(f, "lock"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Specialization the simulation belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    pub id: i64,
    pub name: String,
}

/// Minimal educator reference embedded in list rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducatorRef {
    pub id: i64,
    #[serde(default)]
    pub account: Option<AccountRef>,
}

/// Minimal account reference embedded in owner objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}
