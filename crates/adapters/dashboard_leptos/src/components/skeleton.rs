//! Skeleton placeholder shown while content is not available.

use leptos::prelude::*;

use super::theme::use_theme;

/// An empty block standing in for content that has not loaded yet.
#[component]
pub fn Skeleton(
    /// CSS width of the block.
    #[prop(default = "100%".into(), into)]
    width: String,
    /// CSS height of the block.
    #[prop(default = "1rem".into(), into)]
    height: String,
) -> impl IntoView {
    let theme = use_theme();
    let style = move || {
        format!(
            "display: block; width: {width}; height: {height}; margin-bottom: 8px; \
             border-radius: 4px; background: {}",
            theme.tokens().skeleton
        )
    };

    view! {
        <span class="skeleton" aria-hidden="true" style=style></span>
    }
}
