//! Predicate factories and combinators — the leaf utilities
//!
//! Every factory is pure and curried: it captures its operands and returns a
//! reusable `impl Fn(&T) -> bool` closure, ready to hand to
//! [`Chain::matches`](crate::Chain::matches), [`Chain::any_of`](crate::Chain::any_of),
//! [`Chain::all_of`](crate::Chain::all_of), or [`Cases::case`](crate::Cases::case).
//!
//! Comparison factories use the operand type's own `PartialEq`/`PartialOrd`;
//! there is no cross-type coercion anywhere.

use regex::Regex;

/// Matches values equal to `expected`.
pub fn eq<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value| *value == expected
}

/// Matches values not equal to `expected`.
pub fn ne<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value| *value != expected
}

/// Matches values strictly greater than `threshold`.
pub fn gt<T: PartialOrd>(threshold: T) -> impl Fn(&T) -> bool {
    move |value| *value > threshold
}

/// Matches values strictly less than `threshold`.
pub fn lt<T: PartialOrd>(threshold: T) -> impl Fn(&T) -> bool {
    move |value| *value < threshold
}

/// Matches values greater than or equal to `threshold`.
pub fn ge<T: PartialOrd>(threshold: T) -> impl Fn(&T) -> bool {
    move |value| *value >= threshold
}

/// Matches values less than or equal to `threshold`.
pub fn le<T: PartialOrd>(threshold: T) -> impl Fn(&T) -> bool {
    move |value| *value <= threshold
}

/// Matches values in `min..=max` — both endpoints included.
pub fn between<T: PartialOrd>(min: T, max: T) -> impl Fn(&T) -> bool {
    move |value| *value >= min && *value <= max
}

/// Matches values strictly between `min` and `max` — both endpoints excluded.
pub fn between_exclusive<T: PartialOrd>(min: T, max: T) -> impl Fn(&T) -> bool {
    move |value| *value > min && *value < max
}

/// Matches values that are a member of `allowed` (equality membership).
///
/// The sequence is collected once at construction; the returned predicate is
/// reusable without re-walking the caller's iterator.
pub fn one_of<T, I>(allowed: I) -> impl Fn(&T) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let allowed: Vec<T> = allowed.into_iter().collect();
    move |value| allowed.contains(value)
}

/// Matches values that are not a member of `denied` (negated membership).
pub fn none_of<T, I>(denied: I) -> impl Fn(&T) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let denied: Vec<T> = denied.into_iter().collect();
    move |value| !denied.contains(value)
}

/// Conjunction: every predicate must hold. Vacuously true when empty.
///
/// Short-circuits at the first `false`.
pub fn all<T, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().all(|p| p(value))
}

/// Disjunction: at least one predicate must hold. Vacuously false when empty.
///
/// Short-circuits at the first `true`.
pub fn any<T, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().any(|p| p(value))
}

/// Negation of `predicate`.
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Matches string-like values against a regular expression.
///
/// The pattern compiles once, up front; an invalid pattern is reported at
/// construction time, never during chain evaluation.
///
/// # Errors
///
/// Returns the `regex` compilation error for an invalid pattern.
///
/// # Example
///
/// ```
/// use whence::when;
/// use whence::predicate::matching;
///
/// let semver = matching(r"^\d+\.\d+\.\d+$").unwrap();
/// let kind = when("1.2.3")
///     .matches(semver, || "release")
///     .otherwise(|| "other");
/// assert_eq!(kind, "release");
/// ```
pub fn matching<T: AsRef<str>>(pattern: &str) -> Result<impl Fn(&T) -> bool, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(move |value: &T| re.is_match(value.as_ref()))
}
