//! Backend response envelope
//!
//! Every backend response is wrapped in a uniform `{result, message, data}`
//! envelope; list payloads nest a page object inside `data`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper around every backend response
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub result: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Paginated list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// An empty page, used when the backend omits the payload entirely
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
