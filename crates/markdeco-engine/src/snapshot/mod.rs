//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a [`crate::ParseResult`] as stable, line-per-span
//!   text for `insta` inline snapshots
//! - **`invariants`**: Structural checks every parse result must pass (ranges
//!   non-empty, marks inside their node, post-order containment)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
