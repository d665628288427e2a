//! Endpoint catalog
//!
//! One declaration per backend operation: path template, HTTP method, and the
//! permission code an actor must hold to invoke it. Guard logic and callers
//! that render action controls consult the same declarations.

use crate::constants::permissions;
use crate::error::{AppError, AppResult};
use crate::models::ActorContext;

use super::client::HttpMethod;

/// A single backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    /// Path relative to the API base URL; `{id}` marks a path parameter
    pub path: &'static str,
    pub permission: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str, permission: &'static str) -> Self {
        Self { method: HttpMethod::Get, path, permission }
    }

    pub const fn post(path: &'static str, permission: &'static str) -> Self {
        Self { method: HttpMethod::Post, path, permission }
    }

    pub const fn put(path: &'static str, permission: &'static str) -> Self {
        Self { method: HttpMethod::Put, path, permission }
    }

    pub const fn delete(path: &'static str, permission: &'static str) -> Self {
        Self { method: HttpMethod::Delete, path, permission }
    }

    /// Substitute the `{id}` path parameter
    pub fn path_with_id(&self, id: i64) -> String {
        self.path.replace("{id}", &id.to_string())
    }
}

/// Fail with `Forbidden` unless the actor holds the endpoint's permission
pub fn require_permission(actor: &ActorContext, endpoint: &Endpoint) -> AppResult<()> {
    if actor.has_permission(endpoint.permission) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "missing permission {} for {}",
            endpoint.permission, endpoint.path
        )))
    }
}

pub mod simulation {
    use super::*;

    pub const LIST: Endpoint = Endpoint::get("/simulation/list", permissions::SIMULATION_VIEW);
    pub const EDUCATOR_LIST: Endpoint =
        Endpoint::get("/simulation/educator-list", permissions::SIMULATION_VIEW);
    pub const STUDENT_LIST: Endpoint =
        Endpoint::get("/simulation/student-list", permissions::SIMULATION_VIEW);
    pub const CREATE: Endpoint = Endpoint::post("/simulation/create", permissions::SIMULATION_CREATE);
    pub const UPDATE: Endpoint = Endpoint::put("/simulation/update", permissions::SIMULATION_UPDATE);
    pub const APPROVE: Endpoint = Endpoint::put("/simulation/approve", permissions::SIMULATION_APPROVE);
    pub const REJECT: Endpoint = Endpoint::put("/simulation/reject", permissions::SIMULATION_REJECT);
    pub const REQUEST_DELETE: Endpoint = Endpoint::delete(
        "/simulation/request-delete/{id}",
        permissions::SIMULATION_REQUEST_DELETE,
    );
    pub const EDUCATOR_DELETE: Endpoint = Endpoint::delete(
        "/simulation/educator-delete/{id}",
        permissions::SIMULATION_EDUCATOR_DELETE,
    );
    pub const APPROVE_DELETE: Endpoint = Endpoint::delete(
        "/simulation/approve-delete/{id}",
        permissions::SIMULATION_APPROVE_DELETE,
    );
    pub const REJECT_DELETE: Endpoint = Endpoint::put(
        "/simulation/reject-delete/{id}",
        permissions::SIMULATION_REJECT_DELETE,
    );
    pub const COMPLETED_STUDENTS: Endpoint =
        Endpoint::get("/simulation/student-complete", permissions::REVIEW_VIEW);
}

pub mod task {
    use super::*;

    pub const LIST: Endpoint = Endpoint::get("/task/list", permissions::TASK_VIEW);
    pub const EDUCATOR_LIST: Endpoint =
        Endpoint::get("/task/educator-list", permissions::TASK_VIEW);
    pub const GET: Endpoint = Endpoint::get("/task/get/{id}", permissions::TASK_VIEW);
    pub const STUDENT_DETAIL: Endpoint =
        Endpoint::get("/task/student-detail/{id}", permissions::TASK_VIEW);
    pub const CREATE: Endpoint = Endpoint::post("/task/create", permissions::TASK_CREATE);
    pub const UPDATE: Endpoint = Endpoint::put("/task/update", permissions::TASK_UPDATE);
    pub const DELETE: Endpoint = Endpoint::delete("/task/delete/{id}", permissions::TASK_DELETE);
}

pub mod task_question {
    use super::*;

    pub const LIST: Endpoint = Endpoint::get("/task-question/list", permissions::QUESTION_VIEW);
    pub const EDUCATOR_LIST: Endpoint =
        Endpoint::get("/task-question/educator-list", permissions::QUESTION_VIEW);
    pub const STUDENT_LIST: Endpoint =
        Endpoint::get("/task-question/student-list", permissions::QUESTION_VIEW);
    pub const CREATE: Endpoint = Endpoint::post("/task-question/create", permissions::QUESTION_CREATE);
    pub const UPDATE: Endpoint = Endpoint::put("/task-question/update", permissions::QUESTION_UPDATE);
    pub const DELETE: Endpoint =
        Endpoint::delete("/task-question/delete/{id}", permissions::QUESTION_DELETE);
}

pub mod subtask_progress {
    use super::*;

    pub const GET_FOR_STUDENT: Endpoint =
        Endpoint::get("/subtask-progress/student/{id}", permissions::PROGRESS_VIEW);
    pub const COMPLETE: Endpoint =
        Endpoint::post("/subtask-progress/complete", permissions::PROGRESS_SUBMIT);
    pub const RESTART: Endpoint =
        Endpoint::post("/subtask-progress/restart", permissions::PROGRESS_SUBMIT);
}

pub mod question_progress {
    use super::*;

    pub const CREATE: Endpoint =
        Endpoint::post("/task-question-progress/create", permissions::PROGRESS_SUBMIT);
    pub const STUDENT_LIST: Endpoint =
        Endpoint::get("/task-question-progress/student-list", permissions::PROGRESS_VIEW);
    pub const ANSWER_LIST: Endpoint =
        Endpoint::get("/task-question-progress/answer-list", permissions::PROGRESS_VIEW);
}

pub mod review {
    use super::*;

    pub const CREATE: Endpoint = Endpoint::post("/review-submission/create", permissions::REVIEW_CREATE);
    pub const UPDATE: Endpoint = Endpoint::put("/review-submission/update", permissions::REVIEW_UPDATE);
    pub const DELETE: Endpoint =
        Endpoint::delete("/review-submission/delete/{id}", permissions::REVIEW_DELETE);
    pub const GET_FOR_EDUCATOR: Endpoint =
        Endpoint::get("/review-submission/educator", permissions::REVIEW_VIEW);
    pub const GET_FOR_STUDENT: Endpoint =
        Endpoint::get("/review-submission/student", permissions::REVIEW_VIEW);
}

pub mod achievement {
    use super::*;

    pub const STUDENT_LIST: Endpoint =
        Endpoint::get("/achievement/student-list", permissions::ACHIEVEMENT_VIEW);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_path_with_id() {
        assert_eq!(
            simulation::REQUEST_DELETE.path_with_id(12),
            "/simulation/request-delete/12"
        );
        assert_eq!(task::LIST.path_with_id(12), "/task/list");
    }

    #[test]
    fn test_require_permission() {
        let actor = ActorContext::new(Role::Admin, "root", [permissions::SIMULATION_APPROVE]);
        assert!(require_permission(&actor, &simulation::APPROVE).is_ok());
        assert!(matches!(
            require_permission(&actor, &simulation::REJECT),
            Err(AppError::Forbidden(_))
        ));
    }
}
