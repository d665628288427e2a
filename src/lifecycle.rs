//! Simulation lifecycle state machine
//!
//! A simulation moves through creation, moderation (approve/reject) and
//! deletion request/approval. Which action is legal depends on the record's
//! current status and the acting role; the single rule table below is
//! consulted both by the guard that precedes every remote call and by
//! callers deciding which action controls to render.

use crate::constants::permissions;
use crate::error::{AppError, AppResult};
use crate::models::{ActorContext, Role, SimulationStatus};

/// Lifecycle action on a simulation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleAction {
    /// Educator submits a new or re-edited record for moderation
    Submit,
    /// Admin publishes a record waiting for approval
    Approve,
    /// Admin rejects a record waiting for approval, with feedback
    Reject,
    /// Educator asks for a published record to be removed
    RequestDelete,
    /// Educator withdraws a record that is still waiting for approval
    EducatorDelete,
    /// Admin confirms a pending deletion request
    ApproveDelete,
    /// Admin declines a pending deletion request
    RejectDelete,
}

impl LifecycleAction {
    /// All lifecycle actions
    pub const ALL: &'static [LifecycleAction] = &[
        LifecycleAction::Submit,
        LifecycleAction::Approve,
        LifecycleAction::Reject,
        LifecycleAction::RequestDelete,
        LifecycleAction::EducatorDelete,
        LifecycleAction::ApproveDelete,
        LifecycleAction::RejectDelete,
    ];
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::RequestDelete => "request_delete",
            Self::EducatorDelete => "educator_delete",
            Self::ApproveDelete => "approve_delete",
            Self::RejectDelete => "reject_delete",
        };
        f.write_str(name)
    }
}

/// What a successful action does to the local list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Overwrite the row's status in place
    SetStatus(SimulationStatus),
    /// Splice the row out of the local collection
    RemoveRow,
    /// The backend deleted the record; the list must be refetched
    RefetchList,
}

/// Statuses an action may start from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FromStates {
    Any,
    Only(&'static [SimulationStatus]),
    Excluding(&'static [SimulationStatus]),
}

impl FromStates {
    fn permits(self, status: SimulationStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Only(states) => states.contains(&status),
            Self::Excluding(states) => !states.contains(&status),
        }
    }
}

/// One row of the transition table
#[derive(Debug, Clone, Copy)]
pub struct ActionRule {
    pub action: LifecycleAction,
    pub role: Role,
    pub permission: &'static str,
    from: FromStates,
    pub effect: TransitionEffect,
}

impl ActionRule {
    /// Whether the rule's status precondition holds
    pub fn permits_status(&self, status: SimulationStatus) -> bool {
        self.from.permits(status)
    }
}

/// The full role-gated transition table
pub const RULES: &[ActionRule] = &[
    ActionRule {
        action: LifecycleAction::Submit,
        role: Role::Educator,
        permission: permissions::SIMULATION_CREATE,
        from: FromStates::Any,
        effect: TransitionEffect::SetStatus(SimulationStatus::WaitingApprove),
    },
    ActionRule {
        action: LifecycleAction::Approve,
        role: Role::Admin,
        permission: permissions::SIMULATION_APPROVE,
        from: FromStates::Only(&[SimulationStatus::WaitingApprove]),
        effect: TransitionEffect::SetStatus(SimulationStatus::Active),
    },
    ActionRule {
        action: LifecycleAction::Reject,
        role: Role::Admin,
        permission: permissions::SIMULATION_REJECT,
        from: FromStates::Only(&[SimulationStatus::WaitingApprove]),
        effect: TransitionEffect::SetStatus(SimulationStatus::Reject),
    },
    ActionRule {
        action: LifecycleAction::RequestDelete,
        role: Role::Educator,
        permission: permissions::SIMULATION_REQUEST_DELETE,
        from: FromStates::Excluding(&[
            SimulationStatus::WaitingApprove,
            SimulationStatus::WaitingApproveDelete,
        ]),
        effect: TransitionEffect::SetStatus(SimulationStatus::WaitingApproveDelete),
    },
    ActionRule {
        action: LifecycleAction::EducatorDelete,
        role: Role::Educator,
        permission: permissions::SIMULATION_EDUCATOR_DELETE,
        from: FromStates::Only(&[SimulationStatus::WaitingApprove]),
        effect: TransitionEffect::RemoveRow,
    },
    ActionRule {
        action: LifecycleAction::ApproveDelete,
        role: Role::Admin,
        permission: permissions::SIMULATION_APPROVE_DELETE,
        from: FromStates::Only(&[SimulationStatus::WaitingApproveDelete]),
        effect: TransitionEffect::RefetchList,
    },
    ActionRule {
        action: LifecycleAction::RejectDelete,
        role: Role::Admin,
        permission: permissions::SIMULATION_REJECT_DELETE,
        from: FromStates::Only(&[SimulationStatus::WaitingApproveDelete]),
        effect: TransitionEffect::SetStatus(SimulationStatus::Active),
    },
];

/// Look up the rule for an action
pub fn rule_for(action: LifecycleAction) -> &'static ActionRule {
    RULES
        .iter()
        .find(|rule| rule.action == action)
        .unwrap_or_else(|| unreachable!("every action has a rule"))
}

/// Actions the actor may take on a row with the given status.
///
/// This is the set of action controls to render for the row.
pub fn allowed_actions(actor: &ActorContext, status: SimulationStatus) -> Vec<LifecycleAction> {
    RULES
        .iter()
        .filter(|rule| {
            rule.role == actor.role
                && actor.has_permission(rule.permission)
                && rule.permits_status(status)
        })
        .map(|rule| rule.action)
        .collect()
}

/// Guard consulted before issuing the remote call for an action.
///
/// Returns the matched rule so the caller can apply its effect after the
/// call succeeds.
pub fn check(
    actor: &ActorContext,
    status: SimulationStatus,
    action: LifecycleAction,
) -> AppResult<&'static ActionRule> {
    let rule = rule_for(action);
    if rule.role != actor.role {
        return Err(AppError::Forbidden(format!(
            "{} may not {action}",
            actor.role
        )));
    }
    if !actor.has_permission(rule.permission) {
        return Err(AppError::Forbidden(format!(
            "missing permission {}",
            rule.permission
        )));
    }
    if !rule.permits_status(status) {
        return Err(AppError::IllegalTransition);
    }
    Ok(rule)
}

/// Prepare a moderator notice for transmission.
///
/// The backend rejects an empty notice field, so a blank notice is padded
/// to a single space.
pub fn normalize_notice(notice: &str) -> String {
    let trimmed = notice.trim();
    if trimmed.is_empty() {
        " ".to_string()
    } else {
        trimmed.to_string()
    }
}
