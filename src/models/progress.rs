//! Student progress models

use serde::{Deserialize, Serialize};

use crate::constants::progress_states;
use crate::error::AppError;
use crate::models::question::TaskQuestion;

/// One student's progress on one subtask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTaskProgress {
    pub id: i64,
    #[serde(default)]
    pub task_id: Option<i64>,
    pub state: ProgressState,
}

impl SubTaskProgress {
    /// Whether the student has touched the subtask at all
    pub fn has_started(&self) -> bool {
        self.state != ProgressState::NotStarted
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProgressState::Completed
    }
}

/// Subtask progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ProgressState {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressState {
    /// The integer code the backend uses for this state
    pub fn code(self) -> i32 {
        match self {
            Self::NotStarted => progress_states::NOT_STARTED,
            Self::InProgress => progress_states::IN_PROGRESS,
            Self::Completed => progress_states::COMPLETED,
        }
    }
}

impl TryFrom<i32> for ProgressState {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            progress_states::NOT_STARTED => Ok(Self::NotStarted),
            progress_states::IN_PROGRESS => Ok(Self::InProgress),
            progress_states::COMPLETED => Ok(Self::Completed),
            other => Err(AppError::Decode(format!("unknown progress state code {other}"))),
        }
    }
}

impl From<ProgressState> for i32 {
    fn from(state: ProgressState) -> Self {
        state.code()
    }
}

impl std::fmt::Display for ProgressState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A submitted answer to one question, tied to a progress record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub task_question_id: Option<i64>,
    #[serde(default)]
    pub student_sub_task_progress_id: Option<i64>,
    pub answer: String,
    pub is_correct: bool,
    /// Expanded question, present on educator-facing answer listings
    #[serde(default)]
    pub task_question: Option<TaskQuestion>,
}

impl AnswerRecord {
    /// Id of the question this answer belongs to, from either representation
    pub fn question_id(&self) -> Option<i64> {
        self.task_question
            .as_ref()
            .map(|q| q.id)
            .or(self.task_question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_state_round_trip() {
        for code in [0, 1, 2] {
            let state = ProgressState::try_from(code).unwrap();
            assert_eq!(state.code(), code);
        }
        assert!(ProgressState::try_from(9).is_err());
    }

    #[test]
    fn test_completed_predicates() {
        let progress: SubTaskProgress =
            serde_json::from_value(serde_json::json!({ "id": 4, "taskId": 11, "state": 2 }))
                .unwrap();
        assert!(progress.has_started());
        assert!(progress.is_completed());
    }
}
