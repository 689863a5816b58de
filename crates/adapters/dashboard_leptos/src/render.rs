//! Server-side rendering of the dashboard into a standalone HTML document.

use anidash_domain::dashboard::DashboardStats;
use askama::Template;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::{DashboardOverview, ThemeMode, ThemeProvider};

/// Document-level settings.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Palette the dashboard is rendered with.
    pub mode: ThemeMode,
    /// Text of the `<title>` element.
    pub title: String,
    /// Stylesheet linked from the document head.
    pub stylesheet: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            title: "Anime Dashboard".to_string(),
            stylesheet: Some("anidash.css".to_string()),
        }
    }
}

/// HTML5 shell around the rendered overview.
#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    mode: ThemeMode,
    title: &'a str,
    stylesheet: Option<&'a str>,
    /// Markup produced by Leptos, already escaped.
    body: String,
}

/// Failure to produce the document.
#[derive(Debug, thiserror::Error)]
#[error("failed to render dashboard document")]
pub struct DocumentError(#[from] askama::Error);

/// Render the overview for `stats` inside a theme and wrap it in an HTML5 document.
///
/// `None` renders every card in its loading state.
///
/// # Errors
///
/// Returns [`DocumentError`] when the document template fails to render.
pub fn render_document(
    stats: Option<DashboardStats>,
    options: &DocumentOptions,
) -> Result<String, DocumentError> {
    tracing::debug!(
        mode = %options.mode,
        loading = stats.is_none(),
        "rendering dashboard document"
    );

    let mode = options.mode;
    let owner = Owner::new();
    let body = owner.with(move || {
        view! {
            <ThemeProvider mode=mode>
                <DashboardOverview stats=stats/>
            </ThemeProvider>
        }
        .to_html()
    });

    let document = DocumentTemplate {
        mode,
        title: &options.title,
        stylesheet: options.stylesheet.as_deref(),
        body,
    };
    Ok(document.render()?)
}
