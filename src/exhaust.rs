//! Exhaustiveness assertion — the crate's only error surface
//!
//! Where the subject is a closed enum, native `match` gives static totality
//! checking and should be preferred. Chains over open types (strings,
//! integers, external data) have no such check; [`exhaustive`] is the runtime
//! sentinel for the arm that is supposed to be unreachable.

use std::fmt::Debug;
use thiserror::Error;

/// A chain reached a case its author believed was already handled.
///
/// Carries the offending value's `Debug` rendering for diagnostics. This is
/// always a caller logic bug, never something the chain can recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unhandled case reached: {value}")]
pub struct UnhandledCase {
    /// `Debug` rendering of the value that fell through.
    pub value: String,
}

/// Assert that a chain position is unreachable.
///
/// Use as the fallback of a chain whose preceding conditions are meant to
/// cover every case:
///
/// ```
/// use whence::{when, exhaustive};
///
/// fn describe(flag: bool) -> &'static str {
///     when(flag)
///         .is(true, "on")
///         .is(false, "off")
///         .otherwise(|| exhaustive(flag))
/// }
///
/// assert_eq!(describe(true), "on");
/// assert_eq!(describe(false), "off");
/// ```
///
/// # Panics
///
/// Always — with an [`UnhandledCase`] message including a rendering of
/// `value`. Reaching this at runtime means the preceding conditions were not
/// exhaustive after all.
pub fn exhaustive<T: Debug>(value: T) -> ! {
    panic!(
        "{}",
        UnhandledCase {
            value: format!("{value:?}"),
        }
    );
}
