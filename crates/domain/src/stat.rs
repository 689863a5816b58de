//! Stat value — the number or pre-formatted text shown on a stat card.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value half of a labelled statistic.
///
/// Values are displayed, never interpreted: a number is printed in default
/// decimal notation and text is printed verbatim. `0` and the empty string
/// are ordinary values and render as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl StatValue {
    /// Build a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value is a number rather than pre-formatted text.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Decimal(_))
    }
}

impl Default for StatValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StatValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StatValue {
                fn from(value: $ty) -> Self {
                    // Out of i64 range: keep the exact digits as text.
                    i64::try_from(value)
                        .map_or_else(|_| Self::Text(value.to_string()), Self::Integer)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, u8, u16, u32);
from_unsigned!(u64, usize);

impl From<f32> for StatValue {
    fn from(value: f32) -> Self {
        Self::Decimal(f64::from(value))
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
