//! Central constants for the langtour lesson
//!
//! The lesson is a fixed transcript; every literal that appears in it is
//! defined here so the tour, the CLI defaults, and the tests agree on a
//! single source of truth.

/// Name greeted in the opening line of the lesson.
pub const DEFAULT_NAME: &str = "Mike";

/// Age printed by the variables section and compared by the if/else section.
pub const DEFAULT_AGE: i64 = 25;

/// Approximation of pi printed by the variables section.
///
/// `f64::Display` round-trips this literal to exactly `3.14159`, the text
/// the transcript requires.
pub const PI_APPROXIMATION: f64 = 3.14159;

/// Whether the lesson claims Java is fun. Rendered lowercase (`true`).
pub const DEFAULT_IS_FUN: bool = true;

/// Minimum age for the nightlife branch of the if/else section.
pub const NIGHTLIFE_MIN_AGE: i64 = 21;

/// First value emitted by the counting loop.
pub const COUNT_FROM: i64 = 1;

/// Last value emitted by the counting loop (inclusive).
pub const COUNT_TO: i64 = 5;

/// Left operand of the methods-section addition.
pub const DEFAULT_LHS: i64 = 10;

/// Right operand of the methods-section addition.
pub const DEFAULT_RHS: i64 = 20;

/// Environment variable consulted for the tracing env-filter.
///
/// Example: `LANGTOUR_LOG=debug langtour run`
pub const LOG_ENV_VAR: &str = "LANGTOUR_LOG";
