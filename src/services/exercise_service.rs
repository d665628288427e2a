//! Exercise service
//!
//! The student's path through a subtask: load questions and progress, answer
//! multiple-choice questions with local grading, submit everything, and mark
//! the subtask complete. A completed subtask reloads its earlier answers so
//! the student can review them.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::api::endpoints::{self, question_progress, subtask_progress, task_question};
use crate::api::{ApiClient, ApiRequest, Page};
use crate::constants::{EXERCISE_PASS_PERCENT, EXERCISE_QUESTION_PAGE_SIZE};
use crate::error::{AppError, AppResult};
use crate::models::{ActorContext, AnswerRecord, SubTaskProgress, TaskQuestion};
use crate::notify::{Notifier, success_text};

/// Everything the exercise screen needs for one subtask
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    pub questions: Vec<TaskQuestion>,
    pub progress: Option<SubTaskProgress>,
    /// Answers submitted in an earlier run, present when already completed
    pub prior_answers: Vec<AnswerRecord>,
}

impl ExerciseSession {
    /// Score recomputed from the previously submitted answers
    pub fn prior_score(&self) -> Option<ScoreSummary> {
        if self.prior_answers.is_empty() {
            return None;
        }
        let correct = self.prior_answers.iter().filter(|a| a.is_correct).count();
        Some(ScoreSummary::from_counts(correct, self.prior_answers.len()))
    }

    pub fn is_completed(&self) -> bool {
        self.progress.as_ref().is_some_and(SubTaskProgress::is_completed)
    }
}

/// Result of a submitted exercise run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
}

impl ScoreSummary {
    pub fn from_counts(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= EXERCISE_PASS_PERCENT
    }
}

/// Student exercise flow for one subtask
pub struct ExerciseService {
    client: ApiClient,
    actor: ActorContext,
    notifier: Arc<dyn Notifier>,
    simulation_id: i64,
    task_id: i64,
}

impl ExerciseService {
    pub fn new(
        client: ApiClient,
        actor: ActorContext,
        notifier: Arc<dyn Notifier>,
        simulation_id: i64,
        task_id: i64,
    ) -> Self {
        Self { client, actor, notifier, simulation_id, task_id }
    }

    /// Load questions and progress together; reload prior answers when the
    /// subtask was already completed
    pub async fn load(&self) -> AppResult<ExerciseSession> {
        endpoints::require_permission(&self.actor, &task_question::STUDENT_LIST)?;
        endpoints::require_permission(&self.actor, &subtask_progress::GET_FOR_STUDENT)?;

        let questions_request = ApiRequest::from_endpoint(&task_question::STUDENT_LIST)
            .query("simulationId", self.simulation_id)
            .query("taskId", self.task_id)
            .query("pageSize", EXERCISE_QUESTION_PAGE_SIZE)
            .query("pageNumber", 0);
        let progress_request =
            ApiRequest::with_id(&subtask_progress::GET_FOR_STUDENT, self.task_id);

        let (questions, progress) = futures::try_join!(
            self.client.execute::<Option<Page<TaskQuestion>>>(questions_request),
            self.client.execute::<Option<SubTaskProgress>>(progress_request),
        )?;

        let progress = progress.data;
        let prior_answers = match &progress {
            Some(p) if p.is_completed() => self.fetch_prior_answers(p.id).await?,
            _ => Vec::new(),
        };

        Ok(ExerciseSession {
            questions: questions.data.unwrap_or_default().content,
            progress,
            prior_answers,
        })
    }

    async fn fetch_prior_answers(&self, progress_id: i64) -> AppResult<Vec<AnswerRecord>> {
        let request = ApiRequest::from_endpoint(&question_progress::STUDENT_LIST)
            .query("taskId", self.task_id)
            .query("studentSubTaskProgressId", progress_id)
            .query("pageSize", EXERCISE_QUESTION_PAGE_SIZE)
            .query("pageNumber", 0);
        let page = self.client.execute::<Option<Page<AnswerRecord>>>(request).await?;
        Ok(page.data.unwrap_or_default().content)
    }

    /// Grade a choice answer against the question's correct option
    pub fn grade(question: &TaskQuestion, answer: &str) -> bool {
        question
            .correct_key()
            .is_some_and(|correct| correct == answer)
    }

    /// Submit every answered question, then mark the subtask complete.
    ///
    /// Answers are graded locally and sent one call at a time; the first
    /// failure aborts the run. Unanswered questions still count toward the
    /// total.
    pub async fn submit(
        &self,
        session: &ExerciseSession,
        answers: &HashMap<i64, String>,
    ) -> AppResult<ScoreSummary> {
        endpoints::require_permission(&self.actor, &question_progress::CREATE)?;
        if session.questions.is_empty() {
            return Err(AppError::InvalidInput(
                "this exercise has no questions".to_string(),
            ));
        }

        let progress_id = session.progress.as_ref().map(|p| p.id);
        let mut correct = 0usize;
        let result: AppResult<()> = async {
            for question in &session.questions {
                let Some(answer) = answers.get(&question.id) else {
                    continue;
                };
                let is_correct = Self::grade(question, answer);
                let request = ApiRequest::from_endpoint(&question_progress::CREATE).body(json!({
                    "taskQuestionId": question.id,
                    "studentSubTaskProgressId": progress_id,
                    "answer": answer,
                    "isCorrect": is_correct,
                }));
                self.client.execute_unit(request).await?;
                if is_correct {
                    correct += 1;
                }
            }

            let complete = ApiRequest::from_endpoint(&subtask_progress::COMPLETE)
                .body(json!({ "taskId": self.task_id }));
            self.client.execute_unit(complete).await?;
            Ok(())
        }
        .await;

        match result {
            Ok(()) => {
                let score = ScoreSummary::from_counts(correct, session.questions.len());
                self.notifier.success(&success_text("Exercise submitted", None));
                Ok(score)
            }
            Err(err) => {
                self.notifier
                    .error(&err.user_message("Failed to submit the exercise"));
                Err(err)
            }
        }
    }

    /// Reset the subtask so the student can retake it
    pub async fn restart(&self) -> AppResult<()> {
        endpoints::require_permission(&self.actor, &subtask_progress::RESTART)?;

        let request = ApiRequest::from_endpoint(&subtask_progress::RESTART)
            .body(json!({ "taskId": self.task_id }));
        match self.client.execute_unit(request).await {
            Ok(success) => {
                self.notifier
                    .success(&success_text("Exercise reset", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to reset the exercise"));
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
    use crate::models::{QuestionType, Role};
    use crate::notify::test_support::{Kind, RecordingNotifier};

    fn student() -> ActorContext {
        ActorContext::new(
            Role::Student,
            "an.ngo",
            [permissions::QUESTION_VIEW, permissions::PROGRESS_VIEW, permissions::PROGRESS_SUBMIT],
        )
    }

    fn question(id: i64, correct: &str) -> TaskQuestion {
        TaskQuestion {
            id,
            question: format!("Q{id}"),
            question_type: QuestionType::MultipleChoice,
            options: Some(format!(
                r#"[{{"key":"A","value":"first","isCorrect":{}}},{{"key":"B","value":"second","isCorrect":{}}}]"#,
                correct == "A",
                correct == "B"
            )),
            task_id: Some(12),
            simulation_id: Some(7),
        }
    }

    fn service_with(transport: MockTransport) -> (ExerciseService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let client = ApiClient::new(Arc::new(transport));
        (ExerciseService::new(client, student(), notifier.clone(), 7, 12), notifier)
    }

    fn session(questions: Vec<TaskQuestion>) -> ExerciseSession {
        ExerciseSession {
            questions,
            progress: Some(
                serde_json::from_value(serde_json::json!({ "id": 99, "taskId": 12, "state": 1 }))
                    .unwrap(),
            ),
            prior_answers: Vec::new(),
        }
    }

    #[test]
    fn test_grade_matches_correct_key() {
        let q = question(1, "B");
        assert!(ExerciseService::grade(&q, "B"));
        assert!(!ExerciseService::grade(&q, "A"));
    }

    #[test]
    fn test_grade_without_correct_option_is_incorrect() {
        let mut q = question(1, "B");
        q.options = Some(r#"[{"key":"A","value":"first"}]"#.to_string());
        assert!(!ExerciseService::grade(&q, "A"));
    }

    #[test]
    fn test_score_summary_percentage_and_pass() {
        let score = ScoreSummary::from_counts(7, 10);
        assert!((score.percentage() - 70.0).abs() < f64::EPSILON);
        assert!(score.passed());
        assert!(!ScoreSummary::from_counts(1, 3).passed());
        assert_eq!(ScoreSummary::from_counts(0, 0).percentage(), 0.0);
    }

    #[tokio::test]
    async fn test_submit_grades_and_completes() {
        let mut transport = MockTransport::new();
        // Two answer submissions followed by the completion call
        transport
            .expect_send()
            .times(2)
            .withf(|req| req.path == "/task-question-progress/create")
            .returning(|req| {
                let body = req.body.as_ref().unwrap();
                assert_eq!(body["studentSubTaskProgressId"], 99);
                Ok(serde_json::json!({ "result": true }))
            });
        transport
            .expect_send()
            .withf(|req| {
                req.path == "/subtask-progress/complete"
                    && req.body.as_ref().is_some_and(|b| b["taskId"] == 12)
            })
            .return_once(|_| Ok(serde_json::json!({ "result": true })));

        let (service, notifier) = service_with(transport);
        let session = session(vec![question(1, "A"), question(2, "B"), question(3, "A")]);
        let answers = HashMap::from([
            (1, "A".to_string()), // correct
            (2, "A".to_string()), // wrong
        ]);

        let score = service.submit(&session, &answers).await.unwrap();
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 3);
        assert_eq!(notifier.last().unwrap().0, Kind::Success);
    }

    #[tokio::test]
    async fn test_submit_aborts_on_first_failure() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .return_once(|_| Ok(serde_json::json!({ "result": false, "message": "progress missing" })));

        let (service, notifier) = service_with(transport);
        let session = session(vec![question(1, "A"), question(2, "B")]);
        let answers = HashMap::from([(1, "A".to_string()), (2, "B".to_string())]);

        let err = service.submit(&session, &answers).await.unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
        assert_eq!(
            notifier.last(),
            Some((Kind::Error, "progress missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_submit_empty_exercise_is_invalid() {
        let (service, _notifier) = service_with(MockTransport::new());
        let session = session(Vec::new());
        let err = service.submit(&session, &HashMap::new()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_load_reloads_prior_answers_when_completed() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/task-question/student-list")
            .return_once(|_| {
                Ok(serde_json::json!({
                    "result": true,
                    "data": { "content": [
                        { "id": 1, "question": "Q1", "questionType": 3 }
                    ], "totalElements": 1, "totalPages": 1 }
                }))
            });
        transport
            .expect_send()
            .withf(|req| req.path == "/subtask-progress/student/12")
            .return_once(|_| {
                Ok(serde_json::json!({
                    "result": true,
                    "data": { "id": 99, "taskId": 12, "state": 2 }
                }))
            });
        transport
            .expect_send()
            .withf(|req| {
                req.path == "/task-question-progress/student-list"
                    && req.query.contains(&("studentSubTaskProgressId".to_string(), "99".to_string()))
            })
            .return_once(|_| {
                Ok(serde_json::json!({
                    "result": true,
                    "data": { "content": [
                        { "answer": "A", "isCorrect": true, "taskQuestionId": 1 }
                    ], "totalElements": 1, "totalPages": 1 }
                }))
            });

        let (service, _notifier) = service_with(transport);
        let session = service.load().await.unwrap();
        assert!(session.is_completed());
        assert_eq!(session.prior_answers.len(), 1);
        let score = session.prior_score().unwrap();
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 1);
    }
}
