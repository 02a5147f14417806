//! `Chain` — The two-state evaluation cursor
//!
//! A chain starts unmatched, holding the subject value. Each condition check
//! either transitions it to the matched state (carrying a produced result) or
//! hands the subject on unchanged. Once matched, every further check is a
//! pass-through: first match wins, later producers never run.

/// Start a chain over `subject`.
///
/// This is the only entry point; it performs no evaluation itself. The
/// result type `R` is inferred from the condition checks and the terminator.
///
/// # Example
///
/// ```
/// use whence::{when, then};
/// use whence::predicate::ge;
///
/// let label = when(3)
///     .is(1, "one")
///     .is(2, "two")
///     .matches(ge(10), then("big"))
///     .otherwise(|| "other");
///
/// assert_eq!(label, "other");
/// ```
pub fn when<T, R>(subject: T) -> Chain<T, R> {
    Chain::Unmatched(subject)
}

/// Wrap a constant in a nullary producer.
///
/// Sugar so producers can be written as values instead of closures:
/// `then("big")` is `move || "big"`. A tiny adapter, nothing more.
pub fn then<R>(result: R) -> impl FnOnce() -> R {
    move || result
}

/// The evaluation state of a chain: either still unmatched (carrying the
/// original subject) or matched (carrying the final result).
///
/// # INV: Matched is absorbing
///
/// `Unmatched` always holds the subject unchanged — no condition so far has
/// succeeded. `Matched` holds the result produced at the moment of first
/// match and is immutable thereafter: every subsequent condition check is a
/// no-op that neither evaluates its condition nor invokes its producer.
/// This is what guarantees "first match wins, rest ignored".
///
/// # Producer laziness
///
/// Producers are zero-argument closures, invoked at most once per chain:
/// only when their condition is the first to succeed, or (for the fallback)
/// when [`otherwise`](Chain::otherwise) closes a still-unmatched chain.
///
/// # Example
///
/// ```
/// use whence::when;
/// use whence::predicate::{between, lt};
///
/// let grade = when(87)
///     .matches(lt(60), || 'F')
///     .matches(between(60, 69), || 'D')
///     .matches(between(70, 79), || 'C')
///     .matches(between(80, 89), || 'B')
///     .otherwise(|| 'A');
///
/// assert_eq!(grade, 'B');
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a chain produces nothing until closed with `otherwise` or `resolve`"]
pub enum Chain<T, R> {
    /// No condition has succeeded yet; holds the original subject.
    Unmatched(T),

    /// An earlier condition succeeded; holds the produced result.
    Matched(R),
}

impl<T, R> Chain<T, R> {
    /// Predicate match: if `predicate(subject)` holds, invoke `produce()` and
    /// transition to `Matched`; otherwise stay unmatched.
    ///
    /// Pass-through on an already-matched chain: neither the predicate nor
    /// the producer is evaluated.
    pub fn matches<P, F>(self, predicate: P, produce: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> R,
    {
        match self {
            Self::Unmatched(subject) => {
                if predicate(&subject) {
                    Self::Matched(produce())
                } else {
                    Self::Unmatched(subject)
                }
            }
            matched @ Self::Matched(_) => matched,
        }
    }

    /// Exact-value match with a literal result.
    ///
    /// Equality is typed `PartialEq` — a subject can only ever be compared
    /// against a value of its own type, so an integer `2` can never match a
    /// string `"2"` (the compiler rejects the comparison outright).
    ///
    /// Unlike the other checks this takes the result directly, not a
    /// producer: no invocation is needed on match.
    pub fn is(self, expected: T, result: R) -> Self
    where
        T: PartialEq,
    {
        match self {
            Self::Unmatched(subject) => {
                if subject == expected {
                    Self::Matched(result)
                } else {
                    Self::Unmatched(subject)
                }
            }
            matched @ Self::Matched(_) => matched,
        }
    }

    /// Type-narrowing match.
    ///
    /// The guard consumes the subject and either narrows it (`Ok(narrowed)`,
    /// the producer receives the narrowed value) or hands it back untouched
    /// (`Err(subject)`, the chain stays unmatched). This is the safe-downcast
    /// shape used by [`Box::downcast`] and the `into_*` guards on
    /// [`Subject`](crate::Subject).
    ///
    /// # Example
    ///
    /// ```
    /// use whence::{when, Subject};
    ///
    /// let doubled = when(Subject::from(21))
    ///     .narrows(Subject::into_int, |n| n * 2)
    ///     .otherwise(|| 0);
    ///
    /// assert_eq!(doubled, 42);
    /// ```
    pub fn narrows<U, G, F>(self, guard: G, produce: F) -> Self
    where
        G: FnOnce(T) -> Result<U, T>,
        F: FnOnce(U) -> R,
    {
        match self {
            Self::Unmatched(subject) => match guard(subject) {
                Ok(narrowed) => Self::Matched(produce(narrowed)),
                Err(subject) => Self::Unmatched(subject),
            },
            matched @ Self::Matched(_) => matched,
        }
    }

    /// Any-of match: at least one predicate must hold.
    ///
    /// Predicates are tried in order and evaluation short-circuits at the
    /// first `true`. An empty sequence never matches.
    ///
    /// Mixed predicate types go through `&dyn Fn` or boxing:
    ///
    /// ```
    /// use whence::when;
    /// use whence::predicate::{ge, le};
    ///
    /// let r = when(7)
    ///     .any_of([&ge(100) as &dyn Fn(&i32) -> bool, &le(9)], || "edge")
    ///     .otherwise(|| "mid");
    ///
    /// assert_eq!(r, "edge");
    /// ```
    pub fn any_of<P, I, F>(self, predicates: I, produce: F) -> Self
    where
        I: IntoIterator<Item = P>,
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> R,
    {
        match self {
            Self::Unmatched(subject) => {
                if predicates.into_iter().any(|p| p(&subject)) {
                    Self::Matched(produce())
                } else {
                    Self::Unmatched(subject)
                }
            }
            matched @ Self::Matched(_) => matched,
        }
    }

    /// All-of match: every predicate must hold.
    ///
    /// Predicates are tried in order and evaluation short-circuits at the
    /// first `false`. An empty sequence matches vacuously.
    pub fn all_of<P, I, F>(self, predicates: I, produce: F) -> Self
    where
        I: IntoIterator<Item = P>,
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> R,
    {
        match self {
            Self::Unmatched(subject) => {
                if predicates.into_iter().all(|p| p(&subject)) {
                    Self::Matched(produce())
                } else {
                    Self::Unmatched(subject)
                }
            }
            matched @ Self::Matched(_) => matched,
        }
    }

    /// Close the chain with a fallback producer.
    ///
    /// On `Unmatched` the fallback runs exactly once and its result is
    /// returned. On `Matched` the carried result is returned and the
    /// fallback is never invoked.
    pub fn otherwise<F>(self, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Unmatched(_) => fallback(),
            Self::Matched(result) => result,
        }
    }

    /// Close the chain without a fallback.
    ///
    /// `Some(result)` when a condition matched, `None` when the chain fell
    /// all the way through — for callers who want to handle the miss
    /// themselves instead of supplying a producer.
    pub fn resolve(self) -> Option<R> {
        match self {
            Self::Unmatched(_) => None,
            Self::Matched(result) => Some(result),
        }
    }

    /// Returns `true` if a condition has already matched.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Returns `true` if no condition has matched yet.
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched(_))
    }

    /// The carried result, if a condition has matched.
    #[must_use]
    pub fn matched(&self) -> Option<&R> {
        match self {
            Self::Matched(result) => Some(result),
            Self::Unmatched(_) => None,
        }
    }

    /// The subject value, while the chain is still unmatched.
    #[must_use]
    pub fn subject(&self) -> Option<&T> {
        match self {
            Self::Unmatched(subject) => Some(subject),
            Self::Matched(_) => None,
        }
    }
}
