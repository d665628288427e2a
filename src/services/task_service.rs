//! Task service
//!
//! Role-scoped task listing for one simulation, tree assembly for display,
//! CRUD for educators, and the creation-time naming conveniences.

use std::sync::{Arc, Mutex};

use serde_json::json;
use validator::Validate;

use crate::api::endpoints::{self, task as task_endpoints};
use crate::api::{ApiClient, ApiRequest, Page};
use crate::config::SubtaskNaming;
use crate::constants::{
    DEFAULT_PAGE_SIZE, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_TASK_ERRORS, MAX_TITLE_LENGTH,
    TASK_AUTO_NAME_PREFIX,
};
use crate::content::{Section, encode_sections};
use crate::error::{AppError, AppResult};
use crate::hierarchy::{self, RowAction, RowActionPolicy, TaskNode};
use crate::models::{ActorContext, ParentRef, Role, SimulationStatus, Task, TaskKind};
use crate::notify::{Notifier, success_text};
use crate::store::ListStore;
use crate::utils::validation;

/// Authoring payload for create/update
#[derive(Debug, Clone, Validate)]
pub struct TaskDraft {
    /// Present on update, absent on create
    pub id: Option<i64>,
    pub kind: TaskKind,
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,
    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,
    pub content: Option<String>,
    pub introduction: Vec<Section>,
    #[validate(range(min = 0, max = MAX_TASK_ERRORS))]
    pub max_errors: i32,
    pub simulation_id: i64,
    /// Required when kind is `SubTask`
    pub parent_id: Option<i64>,
    pub image_path: Option<String>,
    pub video_path: Option<String>,
    pub file_path: Option<String>,
}

impl TaskDraft {
    fn check(&self) -> AppResult<()> {
        self.validate()?;
        if self.kind == TaskKind::SubTask && self.parent_id.is_none() {
            return Err(AppError::InvalidInput(
                "a subtask needs a parent task".to_string(),
            ));
        }
        Ok(())
    }

    fn to_body(&self) -> serde_json::Value {
        let mut body = json!({
            "name": validation::sanitize_string(&self.name),
            "title": validation::sanitize_string(&self.title),
            "description": self.description.trim(),
            "content": self.content.as_deref().unwrap_or_default().trim(),
            "kind": self.kind.code(),
            "maxErrors": self.max_errors,
            "simulationId": self.simulation_id,
            "introduction": encode_sections(&self.introduction),
            "imagePath": self.image_path.as_deref().unwrap_or_default(),
            "videoPath": self.video_path.as_deref().unwrap_or_default(),
            "filePath": self.file_path.as_deref().unwrap_or_default(),
        });
        if let Some(id) = self.id {
            body["id"] = json!(id);
        }
        if self.kind == TaskKind::SubTask {
            if let Some(parent_id) = self.parent_id {
                body["parentId"] = json!(parent_id);
            }
        }
        body
    }
}

/// Task list screen logic for one simulation and one actor
pub struct TaskService {
    client: ApiClient,
    actor: ActorContext,
    notifier: Arc<dyn Notifier>,
    policy: RowActionPolicy,
    naming: SubtaskNaming,
    simulation_id: i64,
    store: Mutex<ListStore<Task>>,
}

impl TaskService {
    pub fn new(
        client: ApiClient,
        actor: ActorContext,
        notifier: Arc<dyn Notifier>,
        simulation_id: i64,
    ) -> Self {
        Self {
            client,
            actor,
            notifier,
            policy: RowActionPolicy::default(),
            naming: SubtaskNaming::default(),
            simulation_id,
            store: Mutex::new(ListStore::new()),
        }
    }

    pub fn with_policy(mut self, policy: RowActionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_naming(mut self, naming: SubtaskNaming) -> Self {
        self.naming = naming;
        self
    }

    /// List endpoint matching the actor's role
    fn list_endpoint(&self) -> &'static endpoints::Endpoint {
        match self.actor.role {
            Role::Educator => &task_endpoints::EDUCATOR_LIST,
            _ => &task_endpoints::LIST,
        }
    }

    /// Fetch the simulation's tasks and return the assembled tree
    pub async fn fetch_tree(&self) -> AppResult<Vec<TaskNode>> {
        let endpoint = self.list_endpoint();
        endpoints::require_permission(&self.actor, endpoint)?;

        let request = ApiRequest::from_endpoint(endpoint)
            .query("simulationId", self.simulation_id)
            .query("pageSize", DEFAULT_PAGE_SIZE);
        let page = self.client.execute::<Option<Page<Task>>>(request).await?;
        let mut store = self.store.lock().expect("store lock");
        store.replace_all(page.data.unwrap_or_default().content);
        Ok(hierarchy::assemble(store.items()))
    }

    /// The tree assembled from the cached page
    pub fn tree(&self) -> Vec<TaskNode> {
        hierarchy::assemble(self.store.lock().expect("store lock").items())
    }

    /// Actions applicable to one row given the owning simulation's status
    pub fn row_actions(&self, task: &Task, simulation_status: SimulationStatus) -> Vec<RowAction> {
        hierarchy::row_actions(task, simulation_status, &self.actor, &self.policy)
    }

    /// Pre-filled name for a new top-level task: "Task {n+1}"
    pub fn suggested_task_name(&self) -> String {
        let count = hierarchy::top_level_count(self.store.lock().expect("store lock").items());
        format!("{TASK_AUTO_NAME_PREFIX} {}", count + 1)
    }

    /// Pre-filled name for a new subtask under the given parent
    pub fn suggested_subtask_name(&self, parent: &ParentRef) -> String {
        match self.naming {
            SubtaskNaming::InheritParent => parent.name.clone(),
            SubtaskNaming::Blank => String::new(),
        }
    }

    /// Fetch one task by id
    pub async fn get(&self, id: i64) -> AppResult<Task> {
        let endpoint = if self.actor.is_student() {
            &task_endpoints::STUDENT_DETAIL
        } else {
            &task_endpoints::GET
        };
        endpoints::require_permission(&self.actor, endpoint)?;
        let success = self
            .client
            .execute::<Task>(ApiRequest::with_id(endpoint, id))
            .await?;
        Ok(success.data)
    }

    /// Educator creates a task or subtask
    pub async fn create(&self, draft: &TaskDraft) -> AppResult<Option<Task>> {
        draft.check()?;
        endpoints::require_permission(&self.actor, &task_endpoints::CREATE)?;

        let request = ApiRequest::from_endpoint(&task_endpoints::CREATE).body(draft.to_body());
        match self.client.execute::<Option<Task>>(request).await {
            Ok(success) => {
                self.notifier
                    .success(&success_text("Task created", success.message.as_deref()));
                Ok(success.data)
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to create task"));
                Err(err)
            }
        }
    }

    /// Educator updates a task or subtask
    pub async fn update(&self, draft: &TaskDraft) -> AppResult<()> {
        draft.check()?;
        let id = draft
            .id
            .ok_or_else(|| AppError::InvalidInput("update requires an id".to_string()))?;
        endpoints::require_permission(&self.actor, &task_endpoints::UPDATE)?;

        let request = ApiRequest::from_endpoint(&task_endpoints::UPDATE).body(draft.to_body());
        match self.client.execute_unit(request).await {
            Ok(success) => {
                self.store.lock().expect("store lock").update(id, |row| {
                    row.name = draft.name.trim().to_string();
                    row.title = draft.title.trim().to_string();
                    row.max_errors = Some(draft.max_errors);
                });
                self.notifier
                    .success(&success_text("Task updated", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to update task"));
                Err(err)
            }
        }
    }

    /// Educator deletes a task; the row and its cached children go with it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        endpoints::require_permission(&self.actor, &task_endpoints::DELETE)?;

        let request = ApiRequest::with_id(&task_endpoints::DELETE, id);
        match self.client.execute_unit(request).await {
            Ok(success) => {
                {
                    let mut store = self.store.lock().expect("store lock");
                    store.remove(id);
                    let orphaned: Vec<i64> = store
                        .items()
                        .iter()
                        .filter(|t| t.kind == TaskKind::SubTask && t.effective_parent_id() == Some(id))
                        .map(|t| t.id)
                        .collect();
                    for child_id in orphaned {
                        store.remove(child_id);
                    }
                }
                self.notifier
                    .success(&success_text("Task deleted", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to delete task"));
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn seed_rows(&self, rows: Vec<Task>) {
        self.store.lock().expect("store lock").replace_all(rows);
    }
}
