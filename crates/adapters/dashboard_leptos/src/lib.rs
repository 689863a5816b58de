//! # anidash-adapter-dashboard-leptos
//!
//! Leptos view layer for the anidash dashboard.
//!
//! ## Responsibilities
//! - Provide the [`StatCard`] display primitive and its [`Skeleton`] placeholders
//! - Provide the ambient theme ([`ThemeProvider`], [`use_theme`]) that supplies visual tokens
//! - Lay out a [`DashboardOverview`] from a statistics snapshot
//! - Render a full HTML document on the server ([`render_document`])

mod components;
mod render;

pub use components::{
    DashboardOverview, STAT_CARD_MIN_HEIGHT, Skeleton, StatCard, ThemeContext, ThemeMode,
    ThemeProvider, ThemeTokens, UnknownThemeMode, use_theme,
};
pub use render::{DocumentError, DocumentOptions, render_document};

/// Stylesheet for the classes emitted by the components.
pub const STYLESHEET: &str = include_str!("../style/anidash.css");
