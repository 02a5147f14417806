//! whence - Chainable first-match-wins conditional expressions
//!
//! A small expression-oriented substitute for multi-branch conditionals:
//! test a value against an ordered sequence of conditions and, at the first
//! one that holds, produce a result — falling back to a default producer
//! when none match.
//!
//! # Architecture
//!
//! Everything hangs off one two-state cursor:
//!
//! - [`Chain<T, R>`] — `Unmatched(subject)` or `Matched(result)`; condition
//!   checks transition the former and pass through the latter
//! - [`when`] — the chain initiator (performs no evaluation itself)
//! - [`predicate`] — pure, curried predicate factories and combinators
//! - [`Subject`] — type-erased values with kind predicates and narrowing guards
//! - [`Cases<T, R>`] — the reusable table form of the same semantics
//! - [`exhaustive`] — runtime sentinel for chains meant to be total
//!
//! # Key Semantics
//!
//! 1. **First match wins**: once a condition succeeds, every later check is
//!    a no-op — its condition is not evaluated and its producer never runs.
//!
//! 2. **Lazy producers**: producers are zero-argument closures invoked at
//!    most once per chain, and only when their condition is the first to
//!    succeed (or, for the fallback, when the chain falls all the way
//!    through).
//!
//! 3. **Caller errors propagate**: the chain neither catches nor wraps
//!    panics from caller-supplied predicates or producers. The only error
//!    the crate itself raises is the [`exhaustive`] assertion.
//!
//! # Example
//!
//! ```
//! use whence::prelude::*;
//!
//! let label = when(42)
//!     .is(0, "zero")
//!     .matches(lt(0), then("negative"))
//!     .matches(between(1, 99), || "small")
//!     .otherwise(|| "large");
//!
//! assert_eq!(label, "small");
//! ```
//!
//! Chains nest, since a chain is just an expression:
//!
//! ```
//! use whence::prelude::*;
//!
//! fn transition(state: &'static str, action: &'static str) -> &'static str {
//!     when(state)
//!         .matches(eq("loading"), || {
//!             when(action).is("resolve", "success").otherwise(|| state)
//!         })
//!         .otherwise(|| state)
//! }
//!
//! assert_eq!(transition("loading", "resolve"), "success");
//! assert_eq!(transition("idle", "resolve"), "idle");
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod cases;
mod chain;
mod exhaust;
pub mod predicate;
mod subject;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use cases::Cases;
pub use chain::{then, when, Chain};
pub use exhaust::{exhaustive, UnhandledCase};
pub use subject::Subject;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use whence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::predicate::{
        all, any, between, between_exclusive, eq, ge, gt, le, lt, matching, ne, none_of, not,
        one_of,
    };
    pub use crate::{exhaustive, then, when, Cases, Chain, Subject, UnhandledCase};
}
