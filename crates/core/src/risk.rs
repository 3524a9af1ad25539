//! Heuristic extinction-risk assessment for new submissions.
//!
//! Points are awarded for signs that a tradition is poorly documented:
//! a short description, a rare language, and few digital references. The
//! point total maps onto a nominal [`RiskLevel`] and, divided by the maximum,
//! onto the `[0, 1]` risk score stored with each story.

use serde::Serialize;

use crate::story::RiskLevel;

/// Descriptions shorter than this many characters count as sparse.
pub const SHORT_TEXT_CHARS: usize = 50;

/// Fewer digital references than this counts as low presence.
pub const LOW_DIGITAL_REFS: u32 = 5;

/// Language value that marks a story as told in a rare language.
pub const RARE_LANGUAGE: &str = "rare";

pub const SHORT_TEXT_POINTS: u8 = 3;
pub const RARE_LANGUAGE_POINTS: u8 = 3;
pub const LOW_PRESENCE_POINTS: u8 = 2;

/// Highest possible point total.
pub const MAX_POINTS: u8 = SHORT_TEXT_POINTS + RARE_LANGUAGE_POINTS + LOW_PRESENCE_POINTS;

/// Point totals at or above these thresholds raise the level.
pub const HIGH_THRESHOLD: u8 = 7;
pub const MEDIUM_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub points: u8,
    pub level: RiskLevel,
    /// `points / MAX_POINTS`, always within `[0, 1]`.
    pub score: f64,
}

/// Assess a story from its description, language, and digital reference count.
pub fn assess_risk(text: &str, language: &str, digital_refs: u32) -> RiskAssessment {
    let mut points = 0;
    if text.chars().count() < SHORT_TEXT_CHARS {
        points += SHORT_TEXT_POINTS;
    }
    if language.trim().eq_ignore_ascii_case(RARE_LANGUAGE) {
        points += RARE_LANGUAGE_POINTS;
    }
    if digital_refs < LOW_DIGITAL_REFS {
        points += LOW_PRESENCE_POINTS;
    }

    let level = if points >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if points >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        points,
        level,
        score: f64::from(points) / f64::from(MAX_POINTS),
    }
}
