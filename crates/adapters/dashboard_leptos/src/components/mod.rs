mod overview;
mod skeleton;
mod stat_card;
mod theme;

pub use overview::DashboardOverview;
pub use skeleton::Skeleton;
pub use stat_card::{STAT_CARD_MIN_HEIGHT, StatCard};
pub use theme::{ThemeContext, ThemeMode, ThemeProvider, ThemeTokens, UnknownThemeMode, use_theme};
