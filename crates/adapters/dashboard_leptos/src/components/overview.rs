//! Overview grid: one stat card per dashboard statistic.

use anidash_domain::dashboard::DashboardStats;
use anidash_domain::stat::StatValue;
use anidash_domain::summary::SummaryKind;
use leptos::prelude::*;

use super::stat_card::StatCard;

fn glyph(kind: SummaryKind) -> &'static str {
    match kind {
        SummaryKind::TotalAnime => "\u{1F4DA}",
        SummaryKind::EpisodesWatched => "\u{1F4FA}",
        SummaryKind::TimeSpent => "\u{23F1}",
        SummaryKind::TimeToComplete => "\u{23F3}",
        SummaryKind::MeanScore => "\u{2B50}",
        SummaryKind::Completed => "\u{2714}",
    }
}

fn icon(kind: SummaryKind) -> ViewFn {
    let glyph = glyph(kind);
    ViewFn::from(move || view! { <span class="stat-glyph" aria-hidden="true">{glyph}</span> })
}

/// Grid of stat cards for a statistics snapshot.
///
/// Without a snapshot every card is rendered in its loading state.
#[component]
pub fn DashboardOverview(
    /// The snapshot to display, `None` while it is not available.
    stats: Option<DashboardStats>,
) -> impl IntoView {
    let cards = match stats {
        Some(stats) => stats
            .summaries()
            .into_iter()
            .map(|summary| {
                view! {
                    <StatCard
                        title={summary.title}
                        value={summary.value}
                        subtitle={summary.subtitle}
                        icon={icon(summary.kind)}
                    />
                }
            })
            .collect_view()
            .into_any(),
        None => SummaryKind::ALL
            .into_iter()
            .map(|kind| {
                view! {
                    <StatCard title={kind.title()} value={StatValue::default()} loading=true/>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <section class="stat-grid">
            {cards}
        </section>
    }
}
