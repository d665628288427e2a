//! Task model

use serde::{Deserialize, Serialize};

use crate::constants::task_kinds;
use crate::error::AppError;

/// Task record as returned by the backend.
///
/// Tasks form a strict two-level tree: a `Task` kind groups `SubTask`
/// children; only subtasks carry questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub kind: TaskKind,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// JSON-encoded `[{title, content}]` section array, passed through opaquely
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    /// Parent task reference; present on subtasks when the backend expands it
    #[serde(default)]
    pub parent: Option<ParentRef>,
    /// Raw parent id; some endpoints return this instead of the expanded object
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub simulation_id: Option<i64>,
    #[serde(default)]
    pub total_question: Option<i64>,
    #[serde(default)]
    pub max_errors: Option<i32>,
}

impl Task {
    /// Resolve the parent id from either representation
    pub fn effective_parent_id(&self) -> Option<i64> {
        self.parent.as_ref().map(|p| p.id).or(self.parent_id)
    }
}

/// Normalized `{id, name}` back-reference to a parent task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    pub id: i64,
    pub name: String,
}

/// Task kind discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TaskKind {
    Task,
    SubTask,
}

impl TaskKind {
    /// The integer code the backend uses for this kind
    pub fn code(self) -> i32 {
        match self {
            Self::Task => task_kinds::TASK,
            Self::SubTask => task_kinds::SUBTASK,
        }
    }
}

impl TryFrom<i32> for TaskKind {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            task_kinds::TASK => Ok(Self::Task),
            task_kinds::SUBTASK => Ok(Self::SubTask),
            other => Err(AppError::Decode(format!("unknown task kind code {other}"))),
        }
    }
}

impl From<TaskKind> for i32 {
    fn from(kind: TaskKind) -> Self {
        kind.code()
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task => write!(f, "task"),
            Self::SubTask => write!(f, "subtask"),
        }
    }
}
