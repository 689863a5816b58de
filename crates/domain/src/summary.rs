//! Summaries — the labelled statistics shown as cards on the overview.

use crate::dashboard::{DashboardStats, mean_score_value};
use crate::stat::StatValue;

/// Which statistic a summary describes, in overview display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryKind {
    TotalAnime,
    EpisodesWatched,
    TimeSpent,
    TimeToComplete,
    MeanScore,
    Completed,
}

impl SummaryKind {
    /// Every kind, in display order.
    pub const ALL: [SummaryKind; 6] = [
        SummaryKind::TotalAnime,
        SummaryKind::EpisodesWatched,
        SummaryKind::TimeSpent,
        SummaryKind::TimeToComplete,
        SummaryKind::MeanScore,
        SummaryKind::Completed,
    ];

    /// Card title for this statistic.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TotalAnime => "Total Anime",
            Self::EpisodesWatched => "Episodes Watched",
            Self::TimeSpent => "Time Spent",
            Self::TimeToComplete => "Time to Complete",
            Self::MeanScore => "Mean Score",
            Self::Completed => "Completed",
        }
    }
}

/// One labelled statistic ready to be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    pub kind: SummaryKind,
    pub title: String,
    pub value: StatValue,
    pub subtitle: Option<String>,
}

impl StatSummary {
    fn new(kind: SummaryKind, value: impl Into<StatValue>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            value: value.into(),
            subtitle: None,
        }
    }

    fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }
}

impl DashboardStats {
    /// One summary per [`SummaryKind`], in display order.
    #[must_use]
    pub fn summaries(&self) -> Vec<StatSummary> {
        SummaryKind::ALL
            .into_iter()
            .map(|kind| self.summary(kind))
            .collect()
    }

    /// The summary for a single statistic.
    #[must_use]
    pub fn summary(&self, kind: SummaryKind) -> StatSummary {
        match kind {
            SummaryKind::TotalAnime => StatSummary::new(kind, self.total_anime_count),
            SummaryKind::EpisodesWatched => StatSummary::new(kind, self.total_episodes_watched),
            SummaryKind::TimeSpent => {
                StatSummary::new(kind, self.time_spent_watching.humanize())
                    .with_subtitle(format!("{} hours", self.time_spent_watching.hours))
            }
            SummaryKind::TimeToComplete => {
                StatSummary::new(kind, self.time_to_complete_planned.humanize()).with_subtitle(
                    format!("{} planned", self.status_breakdown.plan_to_watch),
                )
            }
            SummaryKind::MeanScore => StatSummary::new(kind, mean_score_value(self.mean_score))
                .with_subtitle("out of 10".to_string()),
            SummaryKind::Completed => StatSummary::new(kind, self.status_breakdown.completed)
                .with_subtitle(format!("of {} in lists", self.status_breakdown.total())),
        }
    }
}
