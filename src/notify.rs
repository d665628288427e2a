//! User notifications
//!
//! Every remote action ends in exactly one non-blocking notification:
//! success (optionally suffixed with the backend's own message) or error
//! (message resolved by priority in [`crate::error::AppError::user_message`]).

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Default sink: structured log lines via tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(kind = "error", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(kind = "warning", "{message}");
    }
}

/// Compose the success text, appending the backend message when present
pub fn success_text(base: &str, backend_message: Option<&str>) -> String {
    match backend_message {
        Some(message) if !message.trim().is_empty() => format!("{base}: {message}"),
        _ => base.to_string(),
    }
}

#[cfg(test)]
pub mod test_support {
    //! Recording sink for service tests

    use std::sync::Mutex;

    use super::Notifier;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Kind {
        Success,
        Error,
        Warning,
    }

    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        entries: Mutex<Vec<(Kind, String)>>,
    }

    impl RecordingNotifier {
        pub fn entries(&self) -> Vec<(Kind, String)> {
            self.entries.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<(Kind, String)> {
            self.entries.lock().unwrap().last().cloned()
        }

        fn push(&self, kind: Kind, message: &str) {
            self.entries.lock().unwrap().push((kind, message.to_string()));
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.push(Kind::Success, message);
        }

        fn error(&self, message: &str) {
            self.push(Kind::Error, message);
        }

        fn warning(&self, message: &str) {
            self.push(Kind::Warning, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_text_appends_backend_message() {
        assert_eq!(
            success_text("Simulation approved", Some("record published")),
            "Simulation approved: record published"
        );
        assert_eq!(success_text("Simulation approved", Some("  ")), "Simulation approved");
        assert_eq!(success_text("Simulation approved", None), "Simulation approved");
    }
}
