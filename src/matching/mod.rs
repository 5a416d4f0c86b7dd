//! Candidate ranking: pick the cataloged approach closest to a user impactor.
//!
//! Candidates are scored on diameter (log distance) and speed (linear
//! distance), then ordered by a fixed tie-break chain:
//! 1. score
//! 2. MOID (smaller first, missing treated as [`MISSING_MOID_AU`])
//! 3. distance between the reference time and the approach instant
//!    (missing instants count as the Unix epoch)
//! 4. orbit uncertainty code (lower first)
//!
//! The sort is stable, so anything still tied keeps catalog order.

#[cfg(test)]
mod proptest_matching;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ApproachCandidate;

/// MOID assumed for candidates whose record carries none (AU).
pub const MISSING_MOID_AU: f64 = 99.0;

/// Weights of the matching score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Weight of the log-diameter distance.
    pub w_diameter: f64,
    /// Weight of the normalized speed distance.
    pub w_speed: f64,
    /// Speed difference that counts as one unit of distance (m/s).
    pub speed_scale_m_s: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            w_diameter: 1.0,
            w_speed: 0.7,
            speed_scale_m_s: 5000.0,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("no Earth-approaching hazardous candidates with finite diameter, speed and score")]
    NoCandidates,
}

/// A candidate together with its matching score.
#[derive(Clone, Debug)]
pub struct ScoredCandidate<'a> {
    pub candidate: ApproachCandidate<'a>,
    pub score: f64,
}

/// Similarity score between the user impactor and a candidate (lower is closer).
///
/// The diameter term compares logarithms, so a factor-of-two mismatch costs
/// the same at any size. The speed term is linear in `speed_scale_m_s` units.
pub fn score(
    user_diameter_m: f64,
    user_speed_m_s: f64,
    candidate_diameter_m: f64,
    candidate_speed_m_s: f64,
    weights: &MatchWeights,
) -> f64 {
    let d_diameter = (user_diameter_m.ln() - candidate_diameter_m.ln()).abs();
    let d_speed = (user_speed_m_s - candidate_speed_m_s).abs() / weights.speed_scale_m_s;
    weights.w_diameter * d_diameter + weights.w_speed * d_speed
}

/// Score and fully order every scorable candidate relative to `now`.
///
/// Candidates with a non-finite diameter, speed or score are dropped.
pub fn rank_at<'a>(
    candidates: &[ApproachCandidate<'a>],
    user_diameter_m: f64,
    user_speed_m_s: f64,
    weights: &MatchWeights,
    now: DateTime<Utc>,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|c| ScoredCandidate {
            score: score(user_diameter_m, user_speed_m_s, c.diameter_m, c.speed_m_s, weights),
            candidate: c.clone(),
        })
        .filter(|s| {
            s.score.is_finite()
                && s.candidate.diameter_m.is_finite()
                && s.candidate.speed_m_s.is_finite()
        })
        .collect();

    scored.sort_by(|a, b| compare(a, b, now));

    debug!(
        candidates = candidates.len(),
        scorable = scored.len(),
        "ranked approach candidates"
    );
    scored
}

/// Select the single best candidate relative to `now`.
pub fn pick_best_at<'a>(
    candidates: &[ApproachCandidate<'a>],
    user_diameter_m: f64,
    user_speed_m_s: f64,
    weights: &MatchWeights,
    now: DateTime<Utc>,
) -> Result<ScoredCandidate<'a>, MatchError> {
    rank_at(candidates, user_diameter_m, user_speed_m_s, weights, now)
        .into_iter()
        .next()
        .ok_or(MatchError::NoCandidates)
}

/// Select the single best candidate, measuring approach recency from the
/// current wall-clock time.
pub fn pick_best<'a>(
    candidates: &[ApproachCandidate<'a>],
    user_diameter_m: f64,
    user_speed_m_s: f64,
    weights: &MatchWeights,
) -> Result<ScoredCandidate<'a>, MatchError> {
    pick_best_at(candidates, user_diameter_m, user_speed_m_s, weights, Utc::now())
}

fn compare(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>, now: DateTime<Utc>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| moid_key(a).total_cmp(&moid_key(b)))
        .then_with(|| time_distance_ms(a, now).cmp(&time_distance_ms(b, now)))
        .then_with(|| a.candidate.orbit_uncertainty.cmp(&b.candidate.orbit_uncertainty))
}

fn moid_key(s: &ScoredCandidate<'_>) -> f64 {
    s.candidate.moid_au.unwrap_or(MISSING_MOID_AU)
}

fn time_distance_ms(s: &ScoredCandidate<'_>, now: DateTime<Utc>) -> u64 {
    // DateTime<Utc>::default() is the Unix epoch.
    let when = s.candidate.when.unwrap_or_default();
    (now - when).num_milliseconds().unsigned_abs()
}
