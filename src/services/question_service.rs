//! Task question service
//!
//! Question CRUD for one subtask. Educators author; admins read.

use std::sync::{Arc, Mutex};

use serde_json::json;
use validator::Validate;

use crate::api::endpoints::{self, task_question as question_endpoints};
use crate::api::{ApiClient, ApiRequest, Page};
use crate::constants::{DEFAULT_PAGE_SIZE, MAX_DESCRIPTION_LENGTH};
use crate::error::{AppError, AppResult};
use crate::models::{ActorContext, ChoiceOption, QuestionType, Role, TaskQuestion};
use crate::notify::{Notifier, success_text};
use crate::store::ListStore;

/// Authoring payload for create/update
#[derive(Debug, Clone, Validate)]
pub struct QuestionDraft {
    /// Present on update, absent on create
    pub id: Option<i64>,
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub question: String,
    pub question_type: QuestionType,
    pub options: Vec<ChoiceOption>,
    pub simulation_id: i64,
    pub task_id: i64,
}

impl QuestionDraft {
    fn check(&self) -> AppResult<()> {
        self.validate()?;
        if self.question_type == QuestionType::MultipleChoice {
            if self.options.len() < 2 {
                return Err(AppError::InvalidInput(
                    "a choice question needs at least two options".to_string(),
                ));
            }
            let correct = self.options.iter().filter(|o| o.is_correct).count();
            if correct != 1 {
                return Err(AppError::InvalidInput(
                    "a choice question needs exactly one correct option".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn to_body(&self) -> serde_json::Value {
        let options = if self.options.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&self.options).unwrap_or_default()
        };
        let mut body = json!({
            "question": self.question.trim(),
            "questionType": self.question_type.code(),
            "options": options,
            "simulationId": self.simulation_id,
            "taskId": self.task_id,
        });
        if let Some(id) = self.id {
            body["id"] = json!(id);
        }
        body
    }
}

/// Question list screen logic for one subtask and one actor
pub struct QuestionService {
    client: ApiClient,
    actor: ActorContext,
    notifier: Arc<dyn Notifier>,
    simulation_id: i64,
    task_id: i64,
    store: Mutex<ListStore<TaskQuestion>>,
}

impl QuestionService {
    pub fn new(
        client: ApiClient,
        actor: ActorContext,
        notifier: Arc<dyn Notifier>,
        simulation_id: i64,
        task_id: i64,
    ) -> Self {
        Self {
            client,
            actor,
            notifier,
            simulation_id,
            task_id,
            store: Mutex::new(ListStore::new()),
        }
    }

    /// List endpoint matching the actor's role
    fn list_endpoint(&self) -> &'static endpoints::Endpoint {
        match self.actor.role {
            Role::Educator => &question_endpoints::EDUCATOR_LIST,
            Role::Student => &question_endpoints::STUDENT_LIST,
            Role::Admin => &question_endpoints::LIST,
        }
    }

    /// Fetch the subtask's questions and replace the cache with them
    pub async fn fetch_list(&self) -> AppResult<Vec<TaskQuestion>> {
        let endpoint = self.list_endpoint();
        endpoints::require_permission(&self.actor, endpoint)?;

        let request = ApiRequest::from_endpoint(endpoint)
            .query("simulationId", self.simulation_id)
            .query("taskId", self.task_id)
            .query("pageSize", DEFAULT_PAGE_SIZE);
        let page = self.client.execute::<Option<Page<TaskQuestion>>>(request).await?;
        let mut store = self.store.lock().expect("store lock");
        store.replace_all(page.data.unwrap_or_default().content);
        Ok(store.items().to_vec())
    }

    /// Snapshot of the cached questions
    pub fn rows(&self) -> Vec<TaskQuestion> {
        self.store.lock().expect("store lock").items().to_vec()
    }

    /// Educator adds a question to the subtask
    pub async fn create(&self, draft: &QuestionDraft) -> AppResult<Option<TaskQuestion>> {
        draft.check()?;
        endpoints::require_permission(&self.actor, &question_endpoints::CREATE)?;

        let request = ApiRequest::from_endpoint(&question_endpoints::CREATE).body(draft.to_body());
        match self.client.execute::<Option<TaskQuestion>>(request).await {
            Ok(success) => {
                self.notifier
                    .success(&success_text("Question created", success.message.as_deref()));
                Ok(success.data)
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to create question"));
                Err(err)
            }
        }
    }

    /// Educator updates a question
    pub async fn update(&self, draft: &QuestionDraft) -> AppResult<()> {
        draft.check()?;
        let id = draft
            .id
            .ok_or_else(|| AppError::InvalidInput("update requires an id".to_string()))?;
        endpoints::require_permission(&self.actor, &question_endpoints::UPDATE)?;

        let request = ApiRequest::from_endpoint(&question_endpoints::UPDATE).body(draft.to_body());
        match self.client.execute_unit(request).await {
            Ok(success) => {
                self.store.lock().expect("store lock").update(id, |row| {
                    row.question = draft.question.trim().to_string();
                    row.question_type = draft.question_type;
                    row.options = Some(
                        serde_json::to_string(&draft.options).unwrap_or_default(),
                    );
                });
                self.notifier
                    .success(&success_text("Question updated", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to update question"));
                Err(err)
            }
        }
    }

    /// Educator removes a question
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        endpoints::require_permission(&self.actor, &question_endpoints::DELETE)?;

        let request = ApiRequest::with_id(&question_endpoints::DELETE, id);
        match self.client.execute_unit(request).await {
            Ok(success) => {
                self.store.lock().expect("store lock").remove(id);
                self.notifier
                    .success(&success_text("Question deleted", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to delete question"));
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn seed_rows(&self, rows: Vec<TaskQuestion>) {
        self.store.lock().expect("store lock").replace_all(rows);
    }
}
