//! Query parameter types for story listing endpoints.

use heritage_core::filter::{FilterState, Selection};
use heritage_core::story::{Category, RiskLevel};
use serde::Deserialize;

use crate::error::AppError;

/// Sentinel accepted in place of a specific category or level.
const ALL: &str = "all";

/// `?category=&risk_level=&min_risk_score=&visible=` for the browse view.
///
/// `category` and `risk_level` accept a display name or `all`; missing
/// means `all`.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub category: Option<String>,
    pub risk_level: Option<String>,
    pub min_risk_score: Option<f64>,
    pub visible: Option<usize>,
}

impl BrowseParams {
    pub fn filter_state(&self) -> Result<FilterState, AppError> {
        Ok(FilterState::new(
            selection::<Category>(self.category.as_deref())?,
            selection::<RiskLevel>(self.risk_level.as_deref())?,
            self.min_risk_score.unwrap_or(0.0),
        ))
    }
}

fn selection<T>(raw: Option<&str>) -> Result<Selection<T>, AppError>
where
    T: std::str::FromStr<Err = String>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(Selection::All),
        Some(value) if value.eq_ignore_ascii_case(ALL) => Ok(Selection::All),
        Some(value) => value
            .parse()
            .map(Selection::Only)
            .map_err(AppError::BadRequest),
    }
}

/// `?search=` for the admin story and user lists.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}
