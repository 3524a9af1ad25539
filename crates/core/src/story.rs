//! Story records and the fixed vocabularies used to describe them.
//!
//! [`StoryRecord`] is the read model returned by the persistence layer. Its
//! `category` and `risk_level` stay plain strings so a snapshot with an
//! unexpected value still loads; filters compare them by exact string
//! equality against the enumerations below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{StoryId, Timestamp};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The five story categories offered by the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Tradition & Rituals")]
    TraditionRituals,
    #[serde(rename = "Arts & Performance")]
    ArtsPerformance,
    #[serde(rename = "Knowledge & Practices")]
    KnowledgePractices,
    #[serde(rename = "Crafts & Industries")]
    CraftsIndustries,
    #[serde(rename = "Festivals & Social Events")]
    FestivalsSocialEvents,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::TraditionRituals,
        Category::ArtsPerformance,
        Category::KnowledgePractices,
        Category::CraftsIndustries,
        Category::FestivalsSocialEvents,
    ];

    /// Display name, also the stored and serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TraditionRituals => "Tradition & Rituals",
            Category::ArtsPerformance => "Arts & Performance",
            Category::KnowledgePractices => "Knowledge & Practices",
            Category::CraftsIndustries => "Crafts & Industries",
            Category::FestivalsSocialEvents => "Festivals & Social Events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                format!("Invalid category '{s}'. Must be one of: {}", names.join(", "))
            })
    }
}

// ---------------------------------------------------------------------------
// Risk level
// ---------------------------------------------------------------------------

/// Nominal extinction-risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("Invalid risk level '{s}'. Must be one of: Low, Medium, High"))
    }
}

// ---------------------------------------------------------------------------
// Time period
// ---------------------------------------------------------------------------

/// Historical period a story originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Ancient,
    Medieval,
    Colonial,
    Modern,
    Contemporary,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::Ancient,
        TimePeriod::Medieval,
        TimePeriod::Colonial,
        TimePeriod::Modern,
        TimePeriod::Contemporary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Ancient => "ancient",
            TimePeriod::Medieval => "medieval",
            TimePeriod::Colonial => "colonial",
            TimePeriod::Modern => "modern",
            TimePeriod::Contemporary => "contemporary",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimePeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = TimePeriod::ALL.iter().map(|p| p.as_str()).collect();
                format!("Invalid time period '{s}'. Must be one of: {}", names.join(", "))
            })
    }
}

/// Language preselected on a fresh submission form.
pub const DEFAULT_LANGUAGE: &str = "sinhala";

// ---------------------------------------------------------------------------
// Story record
// ---------------------------------------------------------------------------

/// One submitted cultural-heritage story as retrieved from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: StoryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub time_period: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl StoryRecord {
    /// Numeric risk score, treating a missing value as zero.
    pub fn effective_risk_score(&self) -> f64 {
        self.risk_score.unwrap_or(0.0)
    }

    /// The record's category, if it names one of the known categories.
    pub fn parsed_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// The record's risk level, if it names one of the known levels.
    pub fn parsed_risk_level(&self) -> Option<RiskLevel> {
        self.risk_level.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_display_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_lists_valid_names() {
        let err = "Cooking".parse::<Category>().unwrap_err();
        assert!(err.contains("Invalid category 'Cooking'"));
        assert!(err.contains("Festivals & Social Events"));
    }

    #[test]
    fn category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::CraftsIndustries).unwrap();
        assert_eq!(json, "\"Crafts & Industries\"");
    }

    #[test]
    fn time_period_is_lowercase_on_the_wire() {
        let json = serde_json::to_string(&TimePeriod::Colonial).unwrap();
        assert_eq!(json, "\"colonial\"");
        assert!("Colonial".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn record_defaults_optional_fields() {
        let record: StoryRecord =
            serde_json::from_str(r#"{"id":"s1","title":"Kolam dance"}"#).unwrap();
        assert_eq!(record.risk_score, None);
        assert_eq!(record.effective_risk_score(), 0.0);
        assert!(!record.approved);
        assert!(record.tags.is_empty());
        assert_eq!(record.parsed_category(), None);
    }

    #[test]
    fn record_parses_known_vocabulary() {
        let record: StoryRecord = serde_json::from_str(
            r#"{"id":"s2","title":"Puppetry","category":"Arts & Performance","risk_level":"High","risk_score":0.8}"#,
        )
        .unwrap();
        assert_eq!(record.parsed_category(), Some(Category::ArtsPerformance));
        assert_eq!(record.parsed_risk_level(), Some(RiskLevel::High));
        assert_eq!(record.effective_risk_score(), 0.8);
    }
}
