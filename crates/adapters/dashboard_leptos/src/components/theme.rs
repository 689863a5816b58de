//! Ambient theme: light/dark visual tokens provided through Leptos context.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

/// Which palette is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value used for the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a theme name is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode `{0}`, expected `light` or `dark`")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownThemeMode(value.to_string())),
        }
    }
}

/// Visual tokens consumed by the dashboard components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub skeleton: &'static str,
    pub radius: &'static str,
    pub spacing: &'static str,
}

impl ThemeTokens {
    pub const LIGHT: ThemeTokens = ThemeTokens {
        surface: "#ffffff",
        border: "#e2e8f0",
        text: "#1a202c",
        text_muted: "#718096",
        accent: "#3182ce",
        skeleton: "#edf2f7",
        radius: "8px",
        spacing: "16px",
    };

    pub const DARK: ThemeTokens = ThemeTokens {
        surface: "#1a202c",
        border: "#2d3748",
        text: "#f7fafc",
        text_muted: "#a0aec0",
        accent: "#63b3ed",
        skeleton: "#2d3748",
        radius: "8px",
        spacing: "16px",
    };

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }

    /// Tokens as CSS custom properties, for the theme root element.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--anidash-surface: {}; --anidash-border: {}; --anidash-text: {}; \
             --anidash-text-muted: {}; --anidash-accent: {}; --anidash-skeleton: {}; \
             --anidash-radius: {}; --anidash-spacing: {}",
            self.surface,
            self.border,
            self.text,
            self.text_muted,
            self.accent,
            self.skeleton,
            self.radius,
            self.spacing,
        )
    }
}

/// Reactive handle on the active theme, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(mode),
        }
    }

    /// Current mode (tracked).
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Switch between light and dark.
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }

    /// Tokens of the current mode (tracked).
    #[must_use]
    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::for_mode(self.mode())
    }
}

/// Access the ambient theme.
///
/// Outside a [`ThemeProvider`] this falls back to the light theme.
#[must_use]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        tracing::debug!("no ThemeProvider in scope, using the light theme");
        ThemeContext::new(ThemeMode::default())
    })
}

/// Provides a [`ThemeContext`] to its children and exposes the tokens as CSS
/// custom properties on a wrapping element.
///
/// Place this once near the root of the component tree.
#[component]
pub fn ThemeProvider(
    /// Initial palette.
    #[prop(optional)]
    mode: ThemeMode,
    children: Children,
) -> impl IntoView {
    let theme = ThemeContext::new(mode);
    provide_context(theme);

    view! {
        <div
            class="theme-root"
            data-theme=move || theme.mode().as_str()
            style=move || theme.tokens().css_vars()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn should_parse_mode_case_insensitively() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(UnknownThemeMode("sepia".to_string()))
        );
    }

    #[test]
    fn should_roundtrip_mode_through_display() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
    }

    #[test]
    fn should_select_tokens_for_mode() {
        assert_eq!(ThemeTokens::for_mode(ThemeMode::Light), ThemeTokens::LIGHT);
        assert_eq!(ThemeTokens::for_mode(ThemeMode::Dark), ThemeTokens::DARK);
        assert_ne!(ThemeTokens::LIGHT.surface, ThemeTokens::DARK.surface);
    }

    #[test]
    fn should_expose_tokens_as_css_vars() {
        let css = ThemeTokens::DARK.css_vars();
        assert!(css.contains("--anidash-surface: #1a202c"));
        assert!(css.contains("--anidash-spacing: 16px"));
    }

    #[test]
    fn should_toggle_mode_in_context() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new(ThemeMode::Light);
            theme.toggle();
            assert_eq!(theme.mode.get_untracked(), ThemeMode::Dark);
            theme.set_mode(ThemeMode::Light);
            assert_eq!(theme.mode.get_untracked(), ThemeMode::Light);
        });
    }

    #[test]
    fn should_fall_back_to_light_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_theme().mode.get_untracked(), ThemeMode::Light);
        });
    }
}
