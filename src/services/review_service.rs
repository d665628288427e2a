//! Review submission service
//!
//! One optional educator-authored review per (simulation, student) pair,
//! maintained independently of the grading data shown next to it.

use std::sync::Arc;

use serde_json::json;

use crate::api::endpoints::{self, question_progress, review as review_endpoints};
use crate::api::{ApiClient, ApiRequest, Page};
use crate::constants::{EXERCISE_QUESTION_PAGE_SIZE, MAX_DESCRIPTION_LENGTH};
use crate::error::{AppError, AppResult};
use crate::models::{ActorContext, AnswerRecord, ReviewSubmission};
use crate::notify::{Notifier, success_text};

/// Review flow for one simulation/student pair
pub struct ReviewService {
    client: ApiClient,
    actor: ActorContext,
    notifier: Arc<dyn Notifier>,
}

impl ReviewService {
    pub fn new(client: ApiClient, actor: ActorContext, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, actor, notifier }
    }

    /// The educator-side view of an existing review, if any
    pub async fn fetch_for_educator(
        &self,
        simulation_id: i64,
        student_username: &str,
    ) -> AppResult<Option<ReviewSubmission>> {
        endpoints::require_permission(&self.actor, &review_endpoints::GET_FOR_EDUCATOR)?;
        let request = ApiRequest::from_endpoint(&review_endpoints::GET_FOR_EDUCATOR)
            .query("simulationId", simulation_id)
            .query("studentUsername", student_username);
        let success = self.client.execute::<Option<ReviewSubmission>>(request).await?;
        Ok(success.data)
    }

    /// The student-side view of the review left on their work, if any
    pub async fn fetch_for_student(&self, simulation_id: i64) -> AppResult<Option<ReviewSubmission>> {
        endpoints::require_permission(&self.actor, &review_endpoints::GET_FOR_STUDENT)?;
        let request = ApiRequest::from_endpoint(&review_endpoints::GET_FOR_STUDENT)
            .query("simulationId", simulation_id);
        let success = self.client.execute::<Option<ReviewSubmission>>(request).await?;
        Ok(success.data)
    }

    /// The student's submitted answers, shown alongside the review editor
    pub async fn answers(
        &self,
        simulation_id: i64,
        student_username: &str,
    ) -> AppResult<Vec<AnswerRecord>> {
        endpoints::require_permission(&self.actor, &question_progress::ANSWER_LIST)?;
        let request = ApiRequest::from_endpoint(&question_progress::ANSWER_LIST)
            .query("simulationId", simulation_id)
            .query("studentUsername", student_username)
            .query("pageSize", EXERCISE_QUESTION_PAGE_SIZE);
        let page = self.client.execute::<Option<Page<AnswerRecord>>>(request).await?;
        Ok(page.data.unwrap_or_default().content)
    }

    /// Create or update the review, depending on whether one exists yet
    pub async fn save(
        &self,
        simulation_id: i64,
        student_username: &str,
        existing_id: Option<i64>,
        content: &str,
    ) -> AppResult<()> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::InvalidInput("a review needs content".to_string()));
        }
        if content.len() as u64 > MAX_DESCRIPTION_LENGTH {
            return Err(AppError::InvalidInput("review content is too long".to_string()));
        }

        let (request, created) = match existing_id {
            Some(id) => {
                endpoints::require_permission(&self.actor, &review_endpoints::UPDATE)?;
                let body = json!({ "id": id, "content": content });
                (ApiRequest::from_endpoint(&review_endpoints::UPDATE).body(body), false)
            }
            None => {
                endpoints::require_permission(&self.actor, &review_endpoints::CREATE)?;
                let body = json!({
                    "simulationId": simulation_id,
                    "studentUsername": student_username,
                    "content": content,
                });
                (ApiRequest::from_endpoint(&review_endpoints::CREATE).body(body), true)
            }
        };

        match self.client.execute_unit(request).await {
            Ok(success) => {
                let base = if created { "Review created" } else { "Review updated" };
                self.notifier.success(&success_text(base, success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to save the review"));
                Err(err)
            }
        }
    }

    /// Remove the review entirely
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        endpoints::require_permission(&self.actor, &review_endpoints::DELETE)?;

        let request = ApiRequest::with_id(&review_endpoints::DELETE, id);
        match self.client.execute_unit(request).await {
            Ok(success) => {
                self.notifier
                    .success(&success_text("Review deleted", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to delete the review"));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockTransport;
    use crate::constants::permissions;
    use crate::models::Role;
    use crate::notify::test_support::{Kind, RecordingNotifier};

    fn educator() -> ActorContext {
        ActorContext::new(
            Role::Educator,
            "lan.pham",
            [
                permissions::REVIEW_VIEW,
                permissions::REVIEW_CREATE,
                permissions::REVIEW_UPDATE,
                permissions::REVIEW_DELETE,
                permissions::PROGRESS_VIEW,
            ],
        )
    }

    fn service_with(transport: MockTransport) -> (ReviewService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let client = ApiClient::new(Arc::new(transport));
        (ReviewService::new(client, educator(), notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn test_save_without_existing_id_creates() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.path == "/review-submission/create"
                    && req.body.as_ref().is_some_and(|b| b["studentUsername"] == "an.ngo")
            })
            .return_once(|_| Ok(serde_json::json!({ "result": true })));

        let (service, notifier) = service_with(transport);
        service.save(7, "an.ngo", None, "Solid work").await.unwrap();
        assert_eq!(
            notifier.last(),
            Some((Kind::Success, "Review created".to_string()))
        );
    }

    #[tokio::test]
    async fn test_save_with_existing_id_updates() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.path == "/review-submission/update"
                    && req.body.as_ref().is_some_and(|b| b["id"] == 31)
            })
            .return_once(|_| Ok(serde_json::json!({ "result": true })));

        let (service, notifier) = service_with(transport);
        service.save(7, "an.ngo", Some(31), "Better now").await.unwrap();
        assert_eq!(
            notifier.last(),
            Some((Kind::Success, "Review updated".to_string()))
        );
    }

    #[tokio::test]
    async fn test_blank_review_is_rejected_locally() {
        let (service, notifier) = service_with(MockTransport::new());
        let err = service.save(7, "an.ngo", None, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_for_educator_passes_both_keys() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.query.contains(&("simulationId".to_string(), "7".to_string()))
                    && req.query.contains(&("studentUsername".to_string(), "an.ngo".to_string()))
            })
            .return_once(|_| {
                Ok(serde_json::json!({
                    "result": true,
                    "data": { "id": 31, "content": "Solid work" }
                }))
            });

        let (service, _notifier) = service_with(transport);
        let review = service.fetch_for_educator(7, "an.ngo").await.unwrap().unwrap();
        assert_eq!(review.id, 31);
    }

    #[tokio::test]
    async fn test_delete_notifies_failure_with_backend_message() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .return_once(|_| Ok(serde_json::json!({ "result": false, "message": "already removed" })));

        let (service, notifier) = service_with(transport);
        let err = service.delete(31).await.unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
        assert_eq!(
            notifier.last(),
            Some((Kind::Error, "already removed".to_string()))
        );
    }
}
