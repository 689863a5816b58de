//! Stat card component for displaying a labelled statistic.

use anidash_domain::stat::StatValue;
use leptos::prelude::*;

use super::skeleton::Skeleton;
use super::theme::{ThemeTokens, use_theme};

/// Minimum card height in pixels, whatever the card holds.
pub const STAT_CARD_MIN_HEIGHT: u32 = 120;

fn card_style(tokens: &ThemeTokens) -> String {
    format!(
        "min-height: {STAT_CARD_MIN_HEIGHT}px; background: {}; border: 1px solid {}; \
         border-radius: {}; padding: {}; color: {}",
        tokens.surface, tokens.border, tokens.radius, tokens.spacing, tokens.text,
    )
}

/// A card displaying a title, a value and optionally an icon and a subtitle.
///
/// With `loading` set, the card keeps its size but only shows skeleton
/// placeholders: none of the supplied content is rendered.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    title: String,
    /// The statistic, a number or pre-formatted text.
    #[prop(into)]
    value: StatValue,
    /// Secondary line below the value.
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Leading icon.
    #[prop(optional, into)]
    icon: Option<ViewFn>,
    /// Show placeholders instead of content.
    #[prop(optional)]
    loading: bool,
) -> impl IntoView {
    let theme = use_theme();
    let style = move || card_style(&theme.tokens());

    let body = if loading {
        view! {
            <div class="stat-card-body">
                <Skeleton width="60%" height="1rem"/>
                <Skeleton width="40%" height="2rem"/>
                {move || {
                    subtitle
                        .get()
                        .is_some()
                        .then(|| view! { <Skeleton width="50%" height="0.875rem"/> })
                }}
            </div>
        }
        .into_any()
    } else {
        let value_class = if value.is_numeric() {
            "stat-card-value numeric"
        } else {
            "stat-card-value"
        };
        let value = value.to_string();
        view! {
            {icon.map(|icon| view! { <div class="stat-card-icon">{icon.run()}</div> })}
            <div class="stat-card-body">
                <div class="stat-card-title">{title}</div>
                <div class=value_class>{value}</div>
                {move || {
                    subtitle
                        .get()
                        .map(|text| view! { <div class="stat-card-subtitle">{text}</div> })
                }}
            </div>
        }
        .into_any()
    };

    let class = if loading {
        "stat-card stat-card-loading"
    } else {
        "stat-card"
    };

    view! {
        <div class=class aria-busy={loading.to_string()} style=style>
            {body}
        </div>
    }
}
