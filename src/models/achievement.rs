//! Achievement model

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Certificate-style achievement earned by completing a simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: i64,
    #[serde(default)]
    pub simulation: Option<AchievementSimulationRef>,
    #[serde(default)]
    pub student_name: Option<String>,
    /// Path of the downloadable certificate file, when one was issued
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

/// Minimal simulation reference embedded in achievement rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSimulationRef {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub level: Option<i32>,
}

/// Aggregate counters shown above the achievement list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AchievementStats {
    pub total: usize,
    pub this_month: usize,
    pub this_week: usize,
}

impl AchievementStats {
    /// Count achievements relative to the supplied reference time
    pub fn compute(achievements: &[Achievement], now: DateTime<Utc>) -> Self {
        let week_start = now - chrono::Duration::days(7);
        let mut stats = Self {
            total: achievements.len(),
            ..Self::default()
        };
        for achievement in achievements {
            let Some(created) = achievement.created_date else {
                continue;
            };
            if created.year() == now.year() && created.month() == now.month() {
                stats.this_month += 1;
            }
            if created > week_start && created <= now {
                stats.this_week += 1;
            }
        }
        stats
    }
}
