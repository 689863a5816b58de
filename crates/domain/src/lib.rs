//! # anidash-domain
//!
//! Pure domain model for the anidash statistics dashboard.
//!
//! ## Responsibilities
//! - Define **stat values** (a number or a pre-formatted string shown on a card)
//! - Define **dashboard statistics** (counts, time spent, scores, status breakdown)
//! - Derive the labelled **summaries** shown as cards on the overview
//! - Contain all invariant enforcement (score ranges, distribution shape)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or IO crates.

pub mod error;

pub mod dashboard;
pub mod stat;
pub mod summary;
