//! Task question model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::question_types;
use crate::error::AppError;

/// Question attached to a subtask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuestion {
    pub id: i64,
    pub question: String,
    pub question_type: QuestionType,
    /// JSON-encoded option list; only meaningful for multiple-choice questions
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub simulation_id: Option<i64>,
}

impl TaskQuestion {
    /// Decode the raw `options` field into a normalized option list.
    ///
    /// The stored payload has drifted across backend versions: it may be a
    /// `[{key, label|value, isCorrect}]` array, an `[{content|text|option,
    /// answer|isCorrect}]` array, a bare string array, or absent entirely.
    /// Anything unreadable yields an empty list, never an error.
    pub fn parsed_options(&self) -> Vec<ChoiceOption> {
        let Some(raw) = self.options.as_deref() else {
            return Vec::new();
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
            return Vec::new();
        }

        let parsed: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(question_id = self.id, %err, "unreadable question options");
                return Vec::new();
            }
        };

        let Value::Array(items) = parsed else {
            tracing::warn!(question_id = self.id, "question options are not an array");
            return Vec::new();
        };

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| ChoiceOption::from_value(index, item))
            .collect()
    }

    /// The option key a fully correct answer must match, if any
    pub fn correct_key(&self) -> Option<String> {
        self.parsed_options()
            .into_iter()
            .find(|option| option.is_correct)
            .map(|option| option.key)
    }
}

/// Normalized multiple-choice option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    /// Stable answer key, e.g. "A"
    pub key: String,
    /// Display text
    pub label: String,
    pub is_correct: bool,
}

impl ChoiceOption {
    fn from_value(index: usize, value: Value) -> Option<Self> {
        match value {
            // Free-form legacy payloads store options as bare strings
            Value::String(label) => Some(Self {
                key: index_key(index),
                label,
                is_correct: false,
            }),
            Value::Object(fields) => {
                let key = fields
                    .get("key")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| index_key(index));
                let label = ["label", "value", "content", "text", "option"]
                    .iter()
                    .find_map(|name| fields.get(*name).and_then(Value::as_str))
                    .unwrap_or_default()
                    .to_string();
                let is_correct = ["isCorrect", "answer"]
                    .iter()
                    .any(|name| fields.get(*name).and_then(Value::as_bool).unwrap_or(false));
                Some(Self { key, label, is_correct })
            }
            _ => None,
        }
    }
}

/// Fallback key for options stored without one: "A", "B", ...
fn index_key(index: usize) -> String {
    char::from_u32('A' as u32 + (index % 26) as u32)
        .unwrap_or('A')
        .to_string()
}

/// Question answer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum QuestionType {
    FileUpload,
    Text,
    MultipleChoice,
}

impl QuestionType {
    /// The integer code the backend uses for this type
    pub fn code(self) -> i32 {
        match self {
            Self::FileUpload => question_types::FILE_UPLOAD,
            Self::Text => question_types::TEXT,
            Self::MultipleChoice => question_types::MULTIPLE_CHOICE,
        }
    }
}

impl TryFrom<i32> for QuestionType {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            question_types::FILE_UPLOAD => Ok(Self::FileUpload),
            question_types::TEXT => Ok(Self::Text),
            question_types::MULTIPLE_CHOICE => Ok(Self::MultipleChoice),
            other => Err(AppError::Decode(format!("unknown question type code {other}"))),
        }
    }
}

impl From<QuestionType> for i32 {
    fn from(question_type: QuestionType) -> Self {
        question_type.code()
    }
}
