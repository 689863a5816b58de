//! Dashboard statistics — the aggregate numbers computed for a user's anime lists.

use serde::{Deserialize, Serialize};

use crate::error::{AnidashError, ValidationError};
use crate::stat::StatValue;

/// Average episode length used to turn episode counts into watch time.
pub const MINUTES_PER_EPISODE: u64 = 24;

/// Lowest score a user can give.
pub const MIN_SCORE: u8 = 1;

/// Highest score a user can give.
pub const MAX_SCORE: u8 = 10;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 60 * 24;

/// A duration expressed in whole minutes, hours and days.
///
/// `hours` and `days` are each derived from `minutes` by integer division,
/// they are not a decomposition (`90` minutes is `1` hour and `0` days).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpent {
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
}

impl TimeSpent {
    #[must_use]
    pub fn from_minutes(minutes: u64) -> Self {
        Self {
            minutes,
            hours: minutes / MINUTES_PER_HOUR,
            days: minutes / MINUTES_PER_DAY,
        }
    }

    /// Watch time for `episodes` episodes of average length.
    #[must_use]
    pub fn from_episodes(episodes: u64) -> Self {
        Self::from_minutes(episodes.saturating_mul(MINUTES_PER_EPISODE))
    }

    /// Render the largest non-zero unit, e.g. `"5 days"`, `"1 hour"`, `"0 minutes"`.
    #[must_use]
    pub fn humanize(&self) -> String {
        if self.days > 0 {
            plural(self.days, "day")
        } else if self.hours > 0 {
            plural(self.hours, "hour")
        } else {
            plural(self.minutes, "minute")
        }
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Number of list entries that received a given score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub score: u8,
    pub count: u64,
}

impl ScoreBucket {
    /// Build a full 1..=10 distribution from sparse `(score, count)` pairs.
    ///
    /// Scores without an entry get a count of zero; repeated scores are summed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreOutOfRange`] for a score outside 1..=10.
    pub fn distribution(
        counts: impl IntoIterator<Item = (u8, u64)>,
    ) -> Result<Vec<ScoreBucket>, ValidationError> {
        let mut buckets: Vec<ScoreBucket> = (MIN_SCORE..=MAX_SCORE)
            .map(|score| ScoreBucket { score, count: 0 })
            .collect();
        for (score, count) in counts {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(ValidationError::ScoreOutOfRange(score));
            }
            let bucket = &mut buckets[usize::from(score - MIN_SCORE)];
            bucket.count = bucket.count.saturating_add(count);
        }
        Ok(buckets)
    }
}

/// Per-status entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBreakdown {
    pub watching: u64,
    pub completed: u64,
    pub on_hold: u64,
    pub dropped: u64,
    pub plan_to_watch: u64,
}

impl StatusBreakdown {
    /// Entries across every status.
    #[must_use]
    pub fn total(&self) -> u64 {
        [
            self.watching,
            self.completed,
            self.on_hold,
            self.dropped,
            self.plan_to_watch,
        ]
        .iter()
        .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }
}

/// Complete statistics snapshot for one user's lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_anime_count: u64,
    pub total_episodes_watched: u64,
    pub time_spent_watching: TimeSpent,
    pub time_to_complete_planned: TimeSpent,
    #[serde(default)]
    pub mean_score: Option<f64>,
    #[serde(default)]
    pub score_distribution: Vec<ScoreBucket>,
    #[serde(default)]
    pub status_breakdown: StatusBreakdown,
}

impl DashboardStats {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AnidashError::Validation`] when the mean score is not a finite
    /// value in 0..=10, or when the distribution holds an out-of-range or
    /// repeated score.
    pub fn validate(&self) -> Result<(), AnidashError> {
        if let Some(mean) = self.mean_score
            && !(mean.is_finite() && (0.0..=f64::from(MAX_SCORE)).contains(&mean))
        {
            return Err(ValidationError::MeanScoreOutOfRange(mean).into());
        }
        let mut seen = [false; MAX_SCORE as usize];
        for bucket in &self.score_distribution {
            if !(MIN_SCORE..=MAX_SCORE).contains(&bucket.score) {
                return Err(ValidationError::ScoreOutOfRange(bucket.score).into());
            }
            let slot = &mut seen[usize::from(bucket.score - MIN_SCORE)];
            if *slot {
                return Err(ValidationError::DuplicateScore(bucket.score).into());
            }
            *slot = true;
        }
        Ok(())
    }
}

/// Display value for an optional mean score: `"N/A"` when nothing was rated,
/// otherwise the score rounded to two decimals.
#[must_use]
pub fn mean_score_value(mean_score: Option<f64>) -> StatValue {
    match mean_score {
        // `+ 0.0` turns a negative zero into `0` so it never displays as "-0".
        Some(mean) => StatValue::Decimal((mean * 100.0).round() / 100.0 + 0.0),
        None => StatValue::text("N/A"),
    }
}
