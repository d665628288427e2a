//! Achievement service
//!
//! Read-only listing of the certificates a student earned, with the
//! aggregate counters shown above the list.

use chrono::Utc;

use crate::api::endpoints::{self, achievement as achievement_endpoints};
use crate::api::{ApiClient, ApiRequest, Page};
use crate::error::AppResult;
use crate::models::{Achievement, AchievementStats, ActorContext};

/// Achievement screen logic for one student
pub struct AchievementService {
    client: ApiClient,
    actor: ActorContext,
}

impl AchievementService {
    pub fn new(client: ApiClient, actor: ActorContext) -> Self {
        Self { client, actor }
    }

    /// Fetch the acting student's achievements
    pub async fn list_for_student(&self) -> AppResult<Vec<Achievement>> {
        endpoints::require_permission(&self.actor, &achievement_endpoints::STUDENT_LIST)?;
        let request = ApiRequest::from_endpoint(&achievement_endpoints::STUDENT_LIST);
        let page = self.client.execute::<Option<Page<Achievement>>>(request).await?;
        Ok(page.data.unwrap_or_default().content)
    }

    /// Counters relative to now
    pub fn stats(achievements: &[Achievement]) -> AchievementStats {
        AchievementStats::compute(achievements, Utc::now())
    }
}
