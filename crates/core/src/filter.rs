//! Story filter predicates.
//!
//! [`apply_filters`] is a pure function of the record slice and a
//! [`FilterState`]: it never reorders or mutates its input, and running it
//! twice with the same arguments yields the same output.

use serde::{Deserialize, Serialize};

use crate::story::{Category, RiskLevel, StoryRecord};

/// Either the "All" sentinel or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// `true` for `All`, otherwise whether `pick` of the selected value
    /// equals `candidate`.
    fn admits<U: PartialEq + ?Sized>(&self, candidate: &U, pick: impl Fn(&T) -> &U) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => pick(value) == candidate,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::All,
        }
    }
}

/// Current browse filters. Transient and client-local.
///
/// Deserialization goes through [`FilterState::new`], so a stored or
/// received threshold is clamped like any other.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "FilterFields")]
pub struct FilterState {
    pub category: Selection<Category>,
    pub risk_level: Selection<RiskLevel>,
    pub min_risk_score: f64,
}

#[derive(Deserialize)]
struct FilterFields {
    #[serde(default)]
    category: Selection<Category>,
    #[serde(default)]
    risk_level: Selection<RiskLevel>,
    #[serde(default)]
    min_risk_score: f64,
}

impl From<FilterFields> for FilterState {
    fn from(fields: FilterFields) -> Self {
        FilterState::new(fields.category, fields.risk_level, fields.min_risk_score)
    }
}

impl FilterState {
    /// Build a filter state, clamping the score threshold into `[0, 1]`.
    pub fn new(
        category: Selection<Category>,
        risk_level: Selection<RiskLevel>,
        min_risk_score: f64,
    ) -> Self {
        Self {
            category,
            risk_level,
            min_risk_score: clamp_score(min_risk_score),
        }
    }

    /// Whether `record` passes all three predicates.
    pub fn matches(&self, record: &StoryRecord) -> bool {
        self.category
            .admits(record.category.as_str(), |c| c.as_str())
            && self
                .risk_level
                .admits(record.risk_level.as_str(), |r| r.as_str())
            && record.effective_risk_score() >= self.min_risk_score
    }
}

/// Clamp a score threshold into `[0, 1]`; NaN becomes 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Return the records that satisfy every predicate in `filter`, in input order.
pub fn apply_filters<'a>(records: &'a [StoryRecord], filter: &FilterState) -> Vec<&'a StoryRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Indices into `records` of the entries that pass `filter`, in input order.
pub fn matching_indices(records: &[StoryRecord], filter: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.matches(r))
        .map(|(i, _)| i)
        .collect()
}
