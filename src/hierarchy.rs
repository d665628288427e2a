//! Task hierarchy assembly
//!
//! The backend returns tasks for a simulation as one flat, paginated list.
//! This module rebuilds the two-level tree for display and decides which
//! row-level actions apply at each tree position.

use std::collections::HashMap;

use crate::constants::permissions;
use crate::models::{ActorContext, ParentRef, Role, SimulationStatus, Task, TaskKind};

/// Key of a top-level tree entry.
///
/// Orphan subtasks (parent not present in the current page) are promoted to
/// top level under their own key space so they never collide with task ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Task(i64),
    Orphan(i64),
}

/// One top-level row of the assembled tree
#[derive(Debug, Clone)]
pub struct TaskNode {
    pub key: NodeKey,
    pub task: Task,
    /// Child subtasks in source order; always empty for orphan entries
    pub children: Vec<Task>,
}

impl TaskNode {
    pub fn is_orphan(&self) -> bool {
        matches!(self.key, NodeKey::Orphan(_))
    }
}

/// Rebuild the two-level tree from a flat task page.
///
/// Top-level tasks keep their source order, followed by orphan subtasks in
/// source order. Each attached child gets a normalized `{id, name}` parent
/// back-reference regardless of how the backend shaped the relation.
pub fn assemble(tasks: &[Task]) -> Vec<TaskNode> {
    let mut nodes: Vec<TaskNode> = Vec::new();
    let mut index_by_task_id: HashMap<i64, usize> = HashMap::new();

    for task in tasks.iter().filter(|t| t.kind == TaskKind::Task) {
        index_by_task_id.insert(task.id, nodes.len());
        nodes.push(TaskNode {
            key: NodeKey::Task(task.id),
            task: task.clone(),
            children: Vec::new(),
        });
    }

    let mut orphans: Vec<TaskNode> = Vec::new();
    for subtask in tasks.iter().filter(|t| t.kind == TaskKind::SubTask) {
        let parent_index = subtask
            .effective_parent_id()
            .and_then(|id| index_by_task_id.get(&id).copied());
        match parent_index {
            Some(index) => {
                let parent = ParentRef {
                    id: nodes[index].task.id,
                    name: nodes[index].task.name.clone(),
                };
                let mut child = subtask.clone();
                child.parent = Some(parent);
                nodes[index].children.push(child);
            }
            None => orphans.push(TaskNode {
                key: NodeKey::Orphan(subtask.id),
                task: subtask.clone(),
                children: Vec::new(),
            }),
        }
    }

    nodes.extend(orphans);
    nodes
}

/// Count of top-level task rows, used to pre-fill the next auto name
pub fn top_level_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.kind == TaskKind::Task).count()
}

/// Row-level action on a task listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Edit,
    Delete,
    CreateSubTask,
    Questions,
    ViewDetails,
}

/// Per-role visibility of the details navigation.
///
/// The two list variants historically disagreed on who sees it, so it is
/// data rather than code.
#[derive(Debug, Clone, Copy)]
pub struct RowActionPolicy {
    pub admin_view_details: bool,
    pub educator_view_details: bool,
}

impl Default for RowActionPolicy {
    fn default() -> Self {
        Self {
            admin_view_details: true,
            educator_view_details: false,
        }
    }
}

/// Whether a "create subtask" control belongs on the row
pub fn can_create_subtask(task: &Task, actor: &ActorContext) -> bool {
    task.kind == TaskKind::Task
        && actor.is_educator()
        && actor.has_permission(permissions::TASK_CREATE)
}

/// Whether a "questions" navigation belongs on the row
pub fn can_open_questions(task: &Task, actor: &ActorContext) -> bool {
    task.kind == TaskKind::SubTask && actor.has_permission(permissions::QUESTION_VIEW)
}

/// Whether a "view details" navigation belongs on the row
pub fn can_view_details(actor: &ActorContext, policy: &RowActionPolicy) -> bool {
    match actor.role {
        Role::Admin => policy.admin_view_details,
        Role::Educator => {
            policy.educator_view_details && actor.has_permission(permissions::TASK_VIEW)
        }
        Role::Student => false,
    }
}

/// Whether the row may be edited.
///
/// Editing is frozen once the owning simulation entered the delete queue.
pub fn can_edit(actor: &ActorContext, simulation_status: SimulationStatus) -> bool {
    actor.is_educator()
        && actor.has_permission(permissions::TASK_UPDATE)
        && simulation_status != SimulationStatus::WaitingApproveDelete
}

/// Whether the row may be deleted; same freeze rule as editing
pub fn can_delete(actor: &ActorContext, simulation_status: SimulationStatus) -> bool {
    actor.is_educator()
        && actor.has_permission(permissions::TASK_DELETE)
        && simulation_status != SimulationStatus::WaitingApproveDelete
}

/// All actions applicable to one row, for rendering
pub fn row_actions(
    task: &Task,
    simulation_status: SimulationStatus,
    actor: &ActorContext,
    policy: &RowActionPolicy,
) -> Vec<RowAction> {
    let mut actions = Vec::new();
    if can_edit(actor, simulation_status) {
        actions.push(RowAction::Edit);
    }
    if can_delete(actor, simulation_status) {
        actions.push(RowAction::Delete);
    }
    if can_create_subtask(task, actor) {
        actions.push(RowAction::CreateSubTask);
    }
    if can_open_questions(task, actor) {
        actions.push(RowAction::Questions);
    }
    if can_view_details(actor, policy) {
        actions.push(RowAction::ViewDetails);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn task(id: i64, kind: TaskKind, parent_id: Option<i64>) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "kind": kind.code(),
            "name": format!("Task {id}"),
            "title": format!("Title {id}"),
            "parentId": parent_id,
        }))
        .unwrap()
    }

    #[test]
    fn test_assemble_attaches_children_and_promotes_orphans() {
        let tasks = vec![
            task(1, TaskKind::Task, None),
            task(2, TaskKind::SubTask, Some(1)),
            task(3, TaskKind::SubTask, Some(99)),
        ];
        let tree = assemble(&tasks);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].key, NodeKey::Task(1));
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].id, 2);
        assert_eq!(
            tree[0].children[0].parent,
            Some(ParentRef { id: 1, name: "Task 1".to_string() })
        );
        assert_eq!(tree[1].key, NodeKey::Orphan(3));
        assert!(tree[1].is_orphan());
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_children_preserve_source_order() {
        let tasks = vec![
            task(1, TaskKind::Task, None),
            task(5, TaskKind::SubTask, Some(1)),
            task(4, TaskKind::SubTask, Some(1)),
            task(9, TaskKind::SubTask, Some(1)),
        ];
        let tree = assemble(&tasks);
        let order: Vec<i64> = tree[0].children.iter().map(|c| c.id).collect();
        assert_eq!(order, vec![5, 4, 9]);
    }

    #[test]
    fn test_expanded_parent_wins_over_raw_id() {
        let mut subtask = task(2, TaskKind::SubTask, Some(99));
        subtask.parent = Some(ParentRef { id: 1, name: "elsewhere".to_string() });
        let tasks = vec![task(1, TaskKind::Task, None), subtask];
        let tree = assemble(&tasks);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children[0].parent.as_ref().unwrap().name, "Task 1");
    }

    #[test]
    fn test_top_level_count_ignores_subtasks() {
        let tasks = vec![
            task(1, TaskKind::Task, None),
            task(2, TaskKind::SubTask, Some(1)),
            task(3, TaskKind::Task, None),
        ];
        assert_eq!(top_level_count(&tasks), 2);
    }

    fn educator() -> ActorContext {
        ActorContext::new(
            Role::Educator,
            "lan.pham",
            [
                permissions::TASK_CREATE,
                permissions::TASK_UPDATE,
                permissions::TASK_DELETE,
                permissions::QUESTION_VIEW,
            ],
        )
    }

    #[test]
    fn test_create_subtask_only_on_task_rows() {
        let actor = educator();
        assert!(can_create_subtask(&task(1, TaskKind::Task, None), &actor));
        assert!(!can_create_subtask(&task(2, TaskKind::SubTask, Some(1)), &actor));
    }

    #[test]
    fn test_questions_only_on_subtask_rows() {
        let actor = educator();
        assert!(can_open_questions(&task(2, TaskKind::SubTask, Some(1)), &actor));
        assert!(!can_open_questions(&task(1, TaskKind::Task, None), &actor));
    }

    #[test]
    fn test_edit_frozen_during_delete_queue() {
        let actor = educator();
        assert!(can_edit(&actor, SimulationStatus::Active));
        assert!(!can_edit(&actor, SimulationStatus::WaitingApproveDelete));
        assert!(!can_delete(&actor, SimulationStatus::WaitingApproveDelete));
    }

    #[test]
    fn test_view_details_policy_per_role() {
        let policy = RowActionPolicy::default();
        let admin = ActorContext::new(Role::Admin, "root", [permissions::TASK_VIEW]);
        assert!(can_view_details(&admin, &policy));
        assert!(!can_view_details(&educator(), &policy));

        let open_policy = RowActionPolicy {
            educator_view_details: true,
            ..policy
        };
        let educator_with_view = ActorContext::new(
            Role::Educator,
            "lan.pham",
            [permissions::TASK_VIEW],
        );
        assert!(can_view_details(&educator_with_view, &open_policy));
    }

    #[test]
    fn test_row_actions_for_admin_row() {
        let admin = ActorContext::new(Role::Admin, "root", [permissions::QUESTION_VIEW]);
        let actions = row_actions(
            &task(2, TaskKind::SubTask, Some(1)),
            SimulationStatus::Active,
            &admin,
            &RowActionPolicy::default(),
        );
        assert_eq!(actions, vec![RowAction::Questions, RowAction::ViewDetails]);
    }
}
