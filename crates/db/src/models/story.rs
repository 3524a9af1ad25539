//! Story row model and insert DTO.

use heritage_core::risk::RiskAssessment;
use heritage_core::story::StoryRecord;
use heritage_core::submission::SubmissionPayload;
use heritage_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `stories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoryRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub language: String,
    pub region: String,
    pub time_period: String,
    pub risk_level: String,
    pub risk_score: Option<f64>,
    pub approved: bool,
    pub user_id: String,
    pub user_name: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<StoryRow> for StoryRecord {
    fn from(row: StoryRow) -> Self {
        StoryRecord {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            language: row.language,
            region: row.region,
            time_period: row.time_period,
            risk_level: row.risk_level,
            risk_score: row.risk_score,
            approved: row.approved,
            user_id: row.user_id,
            user_name: row.user_name,
            tags: row.tags,
            created_at: Some(row.created_at),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Values written by [`StoryRepo::create`](crate::repositories::StoryRepo::create).
///
/// New stories always start unapproved.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStory {
    pub title: String,
    pub description: String,
    pub category: String,
    pub language: String,
    pub region: String,
    pub time_period: String,
    pub risk_level: String,
    pub risk_score: f64,
    pub user_id: String,
    pub user_name: String,
    pub tags: Vec<String>,
}

impl CreateStory {
    pub fn new(payload: SubmissionPayload, risk: RiskAssessment) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            category: payload.category.as_str().to_string(),
            language: payload.language,
            region: payload.region.unwrap_or_default(),
            time_period: payload.time_period.as_str().to_string(),
            risk_level: risk.level.as_str().to_string(),
            risk_score: risk.score,
            user_id: payload.user_id,
            user_name: payload.user_name,
            tags: payload.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use heritage_core::risk::assess_risk;
    use heritage_core::story::{Category, TimePeriod};

    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            title: "Kolam masks".to_string(),
            language: "sinhala".to_string(),
            category: Category::ArtsPerformance,
            time_period: TimePeriod::Colonial,
            description: "Masked folk drama.".to_string(),
            region: None,
            tags: vec!["masks".to_string()],
            user_id: "u-1".to_string(),
            user_name: "Nimal".to_string(),
        }
    }

    #[test]
    fn create_story_uses_display_names_and_assessment() {
        let p = payload();
        let risk = assess_risk(&p.description, &p.language, 0);
        let dto = CreateStory::new(p, risk);

        assert_eq!(dto.category, "Arts & Performance");
        assert_eq!(dto.time_period, "colonial");
        assert_eq!(dto.risk_level, "Medium");
        assert_eq!(dto.risk_score, 5.0 / 8.0);
        assert_eq!(dto.region, "");
        assert_eq!(dto.tags, ["masks"]);
    }

    #[test]
    fn row_converts_to_record() {
        let now = chrono::Utc::now();
        let row = StoryRow {
            id: "s-1".to_string(),
            title: "Kolam masks".to_string(),
            description: String::new(),
            category: "Arts & Performance".to_string(),
            language: "sinhala".to_string(),
            region: "Ambalangoda".to_string(),
            time_period: "colonial".to_string(),
            risk_level: "High".to_string(),
            risk_score: Some(0.9),
            approved: true,
            user_id: "u-1".to_string(),
            user_name: "Nimal".to_string(),
            tags: vec![],
            created_at: now,
            updated_at: now,
        };

        let record = StoryRecord::from(row);
        assert_eq!(record.id, "s-1");
        assert_eq!(record.region, "Ambalangoda");
        assert_eq!(record.effective_risk_score(), 0.9);
        assert_eq!(record.created_at, Some(now));
    }
}
