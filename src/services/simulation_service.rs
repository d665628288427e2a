//! Simulation service
//!
//! Role-scoped listing plus the lifecycle actions of the moderation flow.
//! Every action follows the same path: transition guard, per-row in-flight
//! check, one remote call, then the rule's local effect and a notification —
//! but only on the success branch.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde_json::json;
use validator::Validate;

use crate::api::endpoints::{self, simulation as sim_endpoints};
use crate::api::{ApiClient, ApiRequest, Page};
use crate::constants::{
    DEFAULT_PAGE_SIZE, MAX_SIMULATION_LEVEL, MAX_TITLE_LENGTH, MIN_SIMULATION_LEVEL,
};
use crate::content::{Document, Section, encode_document, encode_sections};
use crate::error::{AppError, AppResult};
use crate::lifecycle::{self, LifecycleAction, TransitionEffect};
use crate::models::{ActorContext, CompletedStudent, Role, Simulation, SimulationStatus};
use crate::notify::{Notifier, success_text};
use crate::store::ListStore;
use crate::utils::validation;

/// What a completed lifecycle action did locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// The row's status was patched in place
    StatusChanged(SimulationStatus),
    /// The row was spliced out of the cached list
    Removed,
    /// The backend deleted the record; the caller must refetch the list
    RefetchRequired,
}

/// Search/filter parameters for the list screen
#[derive(Debug, Clone, Default)]
pub struct SimulationListQuery {
    pub page: u32,
    pub page_size: Option<u32>,
    pub title: Option<String>,
    pub level: Option<i32>,
    pub status: Option<SimulationStatus>,
}

impl SimulationListQuery {
    fn apply(&self, mut request: ApiRequest) -> ApiRequest {
        request = request
            .query("pageNumber", self.page)
            .query("pageSize", self.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        if let Some(title) = &self.title {
            request = request.query("title", title);
        }
        if let Some(level) = self.level {
            request = request.query("level", level);
        }
        if let Some(status) = self.status {
            request = request.query("status", status.code());
        }
        request
    }
}

/// Authoring payload for create/update
#[derive(Debug, Clone, Validate)]
pub struct SimulationDraft {
    /// Present on update, absent on create
    pub id: Option<i64>,
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,
    #[validate(range(min = MIN_SIMULATION_LEVEL, max = MAX_SIMULATION_LEVEL))]
    pub level: i32,
    pub specialization_id: i64,
    pub total_estimated_time: Option<String>,
    pub image_path: Option<String>,
    pub video_path: Option<String>,
    pub description: Document,
    pub overview: Vec<Section>,
}

impl SimulationDraft {
    fn to_body(&self) -> serde_json::Value {
        let mut body = json!({
            "title": validation::sanitize_string(&self.title),
            "level": self.level,
            "specializationId": self.specialization_id,
            "totalEstimatedTime": self.total_estimated_time.as_deref().unwrap_or_default(),
            "imagePath": self.image_path.as_deref().unwrap_or_default(),
            "videoPath": self.video_path.as_deref().unwrap_or_default(),
            "description": encode_document(&self.description),
            "overview": encode_sections(&self.overview),
        });
        if let Some(id) = self.id {
            body["id"] = json!(id);
        }
        body
    }
}

/// Simulation list screen logic for one actor.
///
/// State lives behind mutexes so overlapping action futures (a double-click)
/// hit the in-flight guard instead of racing the cache. No lock is held
/// across an await.
pub struct SimulationService {
    client: ApiClient,
    actor: ActorContext,
    notifier: Arc<dyn Notifier>,
    store: Mutex<ListStore<Simulation>>,
    /// Rows with a lifecycle call currently awaiting its response
    in_flight: Mutex<HashSet<i64>>,
}

impl SimulationService {
    pub fn new(client: ApiClient, actor: ActorContext, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            actor,
            notifier,
            store: Mutex::new(ListStore::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Snapshot of the cached rows the list screen renders
    pub fn rows(&self) -> Vec<Simulation> {
        self.store.lock().expect("store lock").items().to_vec()
    }

    pub fn actor(&self) -> &ActorContext {
        &self.actor
    }

    /// List endpoint matching the actor's role
    fn list_endpoint(&self) -> &'static endpoints::Endpoint {
        match self.actor.role {
            Role::Admin => &sim_endpoints::LIST,
            Role::Educator => &sim_endpoints::EDUCATOR_LIST,
            Role::Student => &sim_endpoints::STUDENT_LIST,
        }
    }

    /// Fetch the role-scoped list and replace the cache with it
    pub async fn fetch_list(&self, query: &SimulationListQuery) -> AppResult<Vec<Simulation>> {
        let endpoint = self.list_endpoint();
        endpoints::require_permission(&self.actor, endpoint)?;
        if let Some(level) = query.level {
            validation::validate_level(level).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }

        let request = query.apply(ApiRequest::from_endpoint(endpoint));
        let page = self.client.execute::<Option<Page<Simulation>>>(request).await?;
        let mut store = self.store.lock().expect("store lock");
        store.replace_all(page.data.unwrap_or_default().content);
        Ok(store.items().to_vec())
    }

    /// Actions to render for one cached row
    pub fn allowed_actions_for(&self, id: i64) -> Vec<LifecycleAction> {
        self.store
            .lock()
            .expect("store lock")
            .get(id)
            .map(|row| lifecycle::allowed_actions(&self.actor, row.status))
            .unwrap_or_default()
    }

    /// Moderator feedback behind the row's "view notice" affordance
    pub fn notice_for(&self, id: i64) -> Option<String> {
        self.store
            .lock()
            .expect("store lock")
            .get(id)
            .filter(|row| row.has_notice())
            .and_then(|row| row.notice.clone())
    }

    /// Educator submits a new simulation for moderation
    pub async fn create(&self, draft: &SimulationDraft) -> AppResult<Option<Simulation>> {
        draft.validate()?;
        if !self.actor.is_educator() {
            return Err(AppError::Forbidden(format!(
                "{} may not create simulations",
                self.actor.role
            )));
        }
        endpoints::require_permission(&self.actor, &sim_endpoints::CREATE)?;

        let request = ApiRequest::from_endpoint(&sim_endpoints::CREATE).body(draft.to_body());
        match self.client.execute::<Option<Simulation>>(request).await {
            Ok(success) => {
                self.notifier
                    .success(&success_text("Simulation created", success.message.as_deref()));
                Ok(success.data)
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to create simulation"));
                Err(err)
            }
        }
    }

    /// Educator updates an existing simulation
    pub async fn update(&self, draft: &SimulationDraft) -> AppResult<()> {
        draft.validate()?;
        let id = draft
            .id
            .ok_or_else(|| AppError::InvalidInput("update requires an id".to_string()))?;
        endpoints::require_permission(&self.actor, &sim_endpoints::UPDATE)?;

        let request = ApiRequest::from_endpoint(&sim_endpoints::UPDATE).body(draft.to_body());
        match self.client.execute_unit(request).await {
            Ok(success) => {
                self.store.lock().expect("store lock").update(id, |row| {
                    row.title = draft.title.trim().to_string();
                    row.level = draft.level;
                });
                self.notifier
                    .success(&success_text("Simulation updated", success.message.as_deref()));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.user_message("Failed to update simulation"));
                Err(err)
            }
        }
    }

    /// Admin publishes a record waiting for approval
    pub async fn approve(&self, id: i64, notice: &str) -> AppResult<LifecycleOutcome> {
        validation::validate_notice(notice).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let body = json!({ "id": id, "notice": lifecycle::normalize_notice(notice) });
        self.run_lifecycle(
            id,
            LifecycleAction::Approve,
            ApiRequest::from_endpoint(&sim_endpoints::APPROVE).body(body),
            "Simulation approved",
            "Failed to approve simulation",
        )
        .await
    }

    /// Admin rejects a record waiting for approval, attaching feedback
    pub async fn reject(&self, id: i64, notice: &str) -> AppResult<LifecycleOutcome> {
        validation::validate_notice(notice).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let notice = lifecycle::normalize_notice(notice);
        let body = json!({ "id": id, "notice": notice });
        let outcome = self
            .run_lifecycle(
                id,
                LifecycleAction::Reject,
                ApiRequest::from_endpoint(&sim_endpoints::REJECT).body(body),
                "Simulation rejected",
                "Failed to reject simulation",
            )
            .await?;
        // The feedback becomes visible to the educator via the row's notice
        self.store
            .lock()
            .expect("store lock")
            .update(id, |row| row.notice = Some(notice));
        Ok(outcome)
    }

    /// Educator asks for a record to be removed
    pub async fn request_delete(&self, id: i64) -> AppResult<LifecycleOutcome> {
        self.run_lifecycle(
            id,
            LifecycleAction::RequestDelete,
            ApiRequest::with_id(&sim_endpoints::REQUEST_DELETE, id),
            "Deletion requested",
            "Failed to request deletion",
        )
        .await
    }

    /// Educator withdraws a record still waiting for approval
    pub async fn educator_delete(&self, id: i64) -> AppResult<LifecycleOutcome> {
        self.run_lifecycle(
            id,
            LifecycleAction::EducatorDelete,
            ApiRequest::with_id(&sim_endpoints::EDUCATOR_DELETE, id),
            "Simulation deleted",
            "Failed to delete simulation",
        )
        .await
    }

    /// Admin confirms a pending deletion request
    pub async fn approve_delete(&self, id: i64) -> AppResult<LifecycleOutcome> {
        self.run_lifecycle(
            id,
            LifecycleAction::ApproveDelete,
            ApiRequest::with_id(&sim_endpoints::APPROVE_DELETE, id),
            "Deletion approved",
            "Failed to approve deletion",
        )
        .await
    }

    /// Admin declines a pending deletion request
    pub async fn reject_delete(&self, id: i64) -> AppResult<LifecycleOutcome> {
        self.run_lifecycle(
            id,
            LifecycleAction::RejectDelete,
            ApiRequest::with_id(&sim_endpoints::REJECT_DELETE, id),
            "Deletion rejected",
            "Failed to reject deletion",
        )
        .await
    }

    /// Students who completed the simulation, for the review screen
    pub async fn completed_students(&self, simulation_id: i64) -> AppResult<Vec<CompletedStudent>> {
        endpoints::require_permission(&self.actor, &sim_endpoints::COMPLETED_STUDENTS)?;
        let request = ApiRequest::from_endpoint(&sim_endpoints::COMPLETED_STUDENTS)
            .query("simulationId", simulation_id);
        let page = self.client.execute::<Option<Page<CompletedStudent>>>(request).await?;
        Ok(page.data.unwrap_or_default().content)
    }

    /// Shared action path: guard, in-flight check, one call, local effect.
    ///
    /// Guard failures return without a notification — the matching control
    /// is never rendered, so there is no user action to report on. Remote
    /// failures notify once and leave the cache untouched.
    async fn run_lifecycle(
        &self,
        id: i64,
        action: LifecycleAction,
        request: ApiRequest,
        success_base: &str,
        failure_base: &str,
    ) -> AppResult<LifecycleOutcome> {
        let status = self
            .store
            .lock()
            .expect("store lock")
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("simulation {id} is not in the list")))?
            .status;
        let rule = lifecycle::check(&self.actor, status, action)?;

        if !self.in_flight.lock().expect("in-flight lock").insert(id) {
            return Err(AppError::Conflict(format!(
                "another action on simulation {id} is still running"
            )));
        }

        tracing::debug!(simulation_id = id, %action, "issuing lifecycle call");
        let result = self.client.execute_unit(request).await;
        self.in_flight.lock().expect("in-flight lock").remove(&id);

        match result {
            Ok(success) => {
                let outcome = {
                    let mut store = self.store.lock().expect("store lock");
                    match rule.effect {
                        TransitionEffect::SetStatus(next) => {
                            store.update(id, |row| row.status = next);
                            LifecycleOutcome::StatusChanged(next)
                        }
                        TransitionEffect::RemoveRow => {
                            store.remove(id);
                            LifecycleOutcome::Removed
                        }
                        TransitionEffect::RefetchList => LifecycleOutcome::RefetchRequired,
                    }
                };
                self.notifier
                    .success(&success_text(success_base, success.message.as_deref()));
                Ok(outcome)
            }
            Err(err) => {
                self.notifier.error(&err.user_message(failure_base));
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn seed_rows(&self, rows: Vec<Simulation>) {
        self.store.lock().expect("store lock").replace_all(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::{MockTransport, Transport};
    use crate::api::HttpMethod;
    use crate::constants::permissions;
    use crate::notify::test_support::{Kind, RecordingNotifier};

    fn admin() -> ActorContext {
        ActorContext::new(
            Role::Admin,
            "root",
            [
                permissions::SIMULATION_VIEW,
                permissions::SIMULATION_APPROVE,
                permissions::SIMULATION_REJECT,
                permissions::SIMULATION_APPROVE_DELETE,
                permissions::SIMULATION_REJECT_DELETE,
            ],
        )
    }

    fn educator() -> ActorContext {
        ActorContext::new(
            Role::Educator,
            "lan.pham",
            [
                permissions::SIMULATION_VIEW,
                permissions::SIMULATION_CREATE,
                permissions::SIMULATION_UPDATE,
                permissions::SIMULATION_REQUEST_DELETE,
                permissions::SIMULATION_EDUCATOR_DELETE,
            ],
        )
    }

    fn simulation(id: i64, status: i32) -> Simulation {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Sim {id}"),
            "level": 1,
            "status": status
        }))
        .unwrap()
    }

    fn service_with(
        transport: MockTransport,
        actor: ActorContext,
        rows: Vec<Simulation>,
    ) -> (SimulationService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let client = ApiClient::new(Arc::new(transport));
        let service = SimulationService::new(client, actor, notifier.clone());
        service.seed_rows(rows);
        (service, notifier)
    }

    fn ok_envelope(message: &str) -> serde_json::Value {
        serde_json::json!({ "result": true, "message": message })
    }

    #[tokio::test]
    async fn test_approve_sets_row_active_and_notifies() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.path == "/simulation/approve"
                    && req.method == HttpMethod::Put
                    && req.body.as_ref().is_some_and(|b| b["notice"] == " ")
            })
            .return_once(|_| Ok(ok_envelope("published")));

        let (service, notifier) =
            service_with(transport, admin(), vec![simulation(1, 2), simulation(2, 2)]);

        let outcome = service.approve(1, "").await.unwrap();
        assert_eq!(outcome, LifecycleOutcome::StatusChanged(SimulationStatus::Active));
        let rows = service.rows();
        assert_eq!(rows[0].status, SimulationStatus::Active);
        assert_eq!(rows[1].status, SimulationStatus::WaitingApprove);
        assert_eq!(
            notifier.last(),
            Some((Kind::Success, "Simulation approved: published".to_string()))
        );
    }

    #[tokio::test]
    async fn test_reject_persists_notice_on_row() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.body.as_ref().is_some_and(|b| b["notice"] == "fix X"))
            .return_once(|_| Ok(ok_envelope("done")));

        let (service, _notifier) = service_with(transport, admin(), vec![simulation(1, 2)]);

        service.reject(1, "fix X").await.unwrap();
        assert_eq!(service.rows()[0].status, SimulationStatus::Reject);
        assert_eq!(service.notice_for(1).as_deref(), Some("fix X"));
    }

    #[tokio::test]
    async fn test_blank_notice_shows_no_affordance() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .return_once(|_| Ok(ok_envelope("done")));

        let (service, _notifier) = service_with(transport, admin(), vec![simulation(1, 2)]);

        service.reject(1, "   ").await.unwrap();
        // The space-padded notice is transmitted but not worth surfacing
        assert_eq!(service.notice_for(1), None);
    }

    #[tokio::test]
    async fn test_request_delete_moves_row_into_delete_queue() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/simulation/request-delete/3")
            .return_once(|_| Ok(ok_envelope("queued")));

        let (service, _notifier) = service_with(transport, educator(), vec![simulation(3, 1)]);

        service.request_delete(3).await.unwrap();
        assert_eq!(service.rows()[0].status, SimulationStatus::WaitingApproveDelete);
        // The control disappears from the row afterwards
        assert!(!service
            .allowed_actions_for(3)
            .contains(&LifecycleAction::RequestDelete));
    }

    #[tokio::test]
    async fn test_educator_delete_splices_row_out() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .return_once(|_| Ok(ok_envelope("removed")));

        let (service, _notifier) =
            service_with(transport, educator(), vec![simulation(1, 2), simulation(2, 1)]);

        let outcome = service.educator_delete(1).await.unwrap();
        assert_eq!(outcome, LifecycleOutcome::Removed);
        let ids: Vec<i64> = service.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_approve_delete_requires_refetch() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .return_once(|_| Ok(ok_envelope("deleted")));

        let (service, _notifier) = service_with(transport, admin(), vec![simulation(1, 3)]);

        let outcome = service.approve_delete(1).await.unwrap();
        assert_eq!(outcome, LifecycleOutcome::RefetchRequired);
        // The cached row is left for the refetch to reconcile
        assert_eq!(service.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_reject_delete_restores_active() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .return_once(|_| Ok(ok_envelope("kept")));

        let (service, _notifier) = service_with(transport, admin(), vec![simulation(1, 3)]);

        service.reject_delete(1).await.unwrap();
        assert_eq!(service.rows()[0].status, SimulationStatus::Active);
    }

    #[tokio::test]
    async fn test_failed_call_leaves_store_untouched_and_notifies_once() {
        let mut transport = MockTransport::new();
        transport.expect_send().return_once(|_| {
            Ok(serde_json::json!({ "result": false, "message": "record is stale" }))
        });

        let (service, notifier) = service_with(transport, admin(), vec![simulation(1, 2)]);

        let err = service.approve(1, "").await.unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
        assert_eq!(service.rows()[0].status, SimulationStatus::WaitingApprove);
        assert_eq!(
            notifier.entries(),
            vec![(Kind::Error, "record is stale".to_string())]
        );
    }

    #[tokio::test]
    async fn test_guard_blocks_wrong_status_without_call() {
        let transport = MockTransport::new(); // no expectations: a call would panic
        let (service, notifier) = service_with(transport, admin(), vec![simulation(1, 1)]);

        let err = service.approve(1, "").await.unwrap_err();
        assert!(matches!(err, AppError::IllegalTransition));
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_role_is_forbidden() {
        let transport = MockTransport::new();
        let (service, _notifier) = service_with(transport, educator(), vec![simulation(1, 2)]);

        let err = service.approve(1, "").await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_second_action_on_in_flight_row_is_rejected() {
        struct BlockedTransport {
            release: tokio::sync::Notify,
        }

        #[async_trait::async_trait]
        impl Transport for BlockedTransport {
            async fn send(&self, _request: ApiRequest) -> AppResult<serde_json::Value> {
                self.release.notified().await;
                Ok(serde_json::json!({ "result": true }))
            }
        }

        let transport = Arc::new(BlockedTransport { release: tokio::sync::Notify::new() });
        let notifier = Arc::new(RecordingNotifier::default());
        let client = ApiClient::new(transport.clone());
        let service = SimulationService::new(client, admin(), notifier.clone());
        service.seed_rows(vec![simulation(1, 2)]);

        // Start the first call and poll it once so the in-flight mark is set
        let first = service.approve(1, "");
        tokio::pin!(first);
        assert!(
            futures::poll!(first.as_mut()).is_pending(),
            "first call should be waiting on the transport"
        );

        // The double-click: a second action on the same row fails fast,
        // without issuing a network call
        let err = service.approve(1, "").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // The first call still completes normally
        transport.release.notify_one();
        let outcome = first.await.unwrap();
        assert_eq!(outcome, LifecycleOutcome::StatusChanged(SimulationStatus::Active));

        // And once it resolved, the row is free again
        service.seed_rows(vec![simulation(1, 2)]);
        transport.release.notify_one();
        service.approve(1, "").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_requires_educator_role() {
        let transport = MockTransport::new();
        let (service, _notifier) = service_with(transport, admin(), Vec::new());

        let draft = SimulationDraft {
            id: None,
            title: "Computer basics".to_string(),
            level: 1,
            specialization_id: 4,
            total_estimated_time: None,
            image_path: None,
            video_path: None,
            description: Document::default(),
            overview: Vec::new(),
        };
        let err = service.create(&draft).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_create_encodes_content_fields() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                let body = req.body.as_ref().unwrap();
                body["description"]
                    .as_str()
                    .is_some_and(|d| d.contains("\"title\":\"About\""))
                    && body["overview"].as_str().is_some_and(|o| o.starts_with('['))
            })
            .return_once(|_| Ok(ok_envelope("created")));

        let (service, notifier) = service_with(transport, educator(), Vec::new());

        let draft = SimulationDraft {
            id: None,
            title: "Computer basics".to_string(),
            level: 2,
            specialization_id: 4,
            total_estimated_time: Some("6 hours".to_string()),
            image_path: None,
            video_path: None,
            description: Document { title: "About".to_string(), content: "<p>x</p>".to_string() },
            overview: vec![Section::new("Goals", "<p>y</p>")],
        };
        service.create(&draft).await.unwrap();
        assert_eq!(notifier.last().unwrap().0, Kind::Success);
    }

    #[tokio::test]
    async fn test_invalid_draft_fails_before_any_call() {
        let transport = MockTransport::new();
        let (service, _notifier) = service_with(transport, educator(), Vec::new());

        let draft = SimulationDraft {
            id: None,
            title: String::new(),
            level: 9,
            specialization_id: 4,
            total_estimated_time: None,
            image_path: None,
            video_path: None,
            description: Document::default(),
            overview: Vec::new(),
        };
        let err = service.create(&draft).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_fetch_list_uses_role_scoped_endpoint() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/simulation/educator-list")
            .return_once(|_| {
                Ok(serde_json::json!({
                    "result": true,
                    "data": { "content": [
                        { "id": 1, "title": "Sim", "level": 1, "status": 1 }
                    ], "totalElements": 1, "totalPages": 1 }
                }))
            });

        let (service, _notifier) = service_with(transport, educator(), Vec::new());
        let rows = service.fetch_list(&SimulationListQuery::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
    }
}
