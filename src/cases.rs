//! `Cases` — Reusable first-match tables
//!
//! A [`Chain`](crate::Chain) is consumed by evaluation: it owns its subject
//! and runs once. `Cases` is the reusable counterpart — an ordered list of
//! predicate/producer pairs, built once and evaluated against any number of
//! subjects, with the same first-match-wins semantics.

use std::fmt;

struct Case<T, R> {
    predicate: Box<dyn Fn(&T) -> bool>,
    produce: Box<dyn Fn(&T) -> R>,
}

/// An ordered, reusable first-match table.
///
/// Cases are evaluated in insertion order; the first predicate that holds
/// selects the producer, and exactly one producer runs per evaluation.
/// Because the table borrows its subjects rather than owning them, producers
/// here receive `&T` (unlike chain producers, which are nullary).
///
/// # Example
///
/// ```
/// use whence::Cases;
/// use whence::predicate::{between, lt};
///
/// let grades = Cases::new()
///     .case(lt(60), |_| 'F')
///     .case(between(60, 69), |_| 'D')
///     .case(between(70, 79), |_| 'C')
///     .case(between(80, 89), |_| 'B')
///     .otherwise(|_| 'A');
///
/// assert_eq!(grades.evaluate(&87), Some('B'));
/// assert_eq!(grades.evaluate(&99), Some('A'));
/// ```
pub struct Cases<T, R> {
    cases: Vec<Case<T, R>>,
    fallback: Option<Box<dyn Fn(&T) -> R>>,
}

impl<T, R> Cases<T, R> {
    /// Create an empty table (no cases, no fallback).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            fallback: None,
        }
    }

    /// Append a predicate/producer case.
    #[must_use]
    pub fn case<P, F>(mut self, predicate: P, produce: F) -> Self
    where
        P: Fn(&T) -> bool + 'static,
        F: Fn(&T) -> R + 'static,
    {
        self.cases.push(Case {
            predicate: Box::new(predicate),
            produce: Box::new(produce),
        });
        self
    }

    /// Append an exact-value case with a fixed result.
    ///
    /// Sugar for `case(eq(expected), |_| result.clone())`.
    #[must_use]
    pub fn value(self, expected: T, result: R) -> Self
    where
        T: PartialEq + 'static,
        R: Clone + 'static,
    {
        self.case(
            move |subject: &T| *subject == expected,
            move |_| result.clone(),
        )
    }

    /// Set the fallback producer, used when no case matches.
    #[must_use]
    pub fn otherwise<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&T) -> R + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Evaluate the table against `subject`, first-match-wins.
    ///
    /// Returns the first matching case's result, then the fallback's if no
    /// case matched, then `None` if there is no fallback either.
    pub fn evaluate(&self, subject: &T) -> Option<R> {
        for case in &self.cases {
            if (case.predicate)(subject) {
                return Some((case.produce)(subject));
            }
        }
        self.fallback.as_ref().map(|fallback| fallback(subject))
    }

    /// Returns the number of cases (excluding the fallback).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns `true` if a fallback producer is set.
    #[must_use]
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl<T, R> Default for Cases<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

// Closures are opaque; print structure, not contents.
impl<T, R> fmt::Debug for Cases<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases")
            .field("cases", &self.cases.len())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
