//! `Subject` — Type-erased subject values with narrowing guards
//!
//! Chains are fully generic, but the primitive-kind guards (`is_str`,
//! `is_int`, ...) only make sense over an erased value type. `Subject` is
//! that type: a small enum of primitives whose kind predicates slot straight
//! into [`Chain::matches`](crate::Chain::matches) and whose `into_*` guards
//! slot straight into [`Chain::narrows`](crate::Chain::narrows).
//!
//! # Example
//!
//! ```
//! use whence::{when, Subject};
//!
//! let described = when(Subject::from("hello"))
//!     .narrows(Subject::into_int, |n| format!("int {n}"))
//!     .narrows(Subject::into_str, |s| format!("str {s}"))
//!     .otherwise(|| "something else".to_string());
//!
//! assert_eq!(described, "str hello");
//! ```

/// A type-erased subject value.
///
/// # Variants
///
/// - `Null` — no value
/// - `Str` — string data
/// - `Int` — integer data
/// - `Float` — floating-point data
/// - `Bool` — boolean data
///
/// Kind predicates (`is_*`) take `&self` and are usable directly as chain
/// predicates; narrowing guards (`into_*`) consume `self` and either narrow
/// or hand the subject back, matching the shape
/// [`Chain::narrows`](crate::Chain::narrows) expects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subject {
    /// No value.
    Null,

    /// String data.
    Str(String),

    /// Integer data.
    Int(i64),

    /// Floating-point data.
    Float(f64),

    /// Boolean data.
    Bool(bool),
}

impl Subject {
    /// Returns `true` if this is the `Null` variant.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is the `Str` variant.
    #[inline]
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Returns `true` if this is the `Int` variant.
    #[inline]
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this is the `Float` variant.
    #[inline]
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` if this is the `Bool` variant.
    #[inline]
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Narrow to the contained string, or hand the subject back.
    ///
    /// # Errors
    ///
    /// Returns the subject unchanged when it is not a `Str`.
    pub fn into_str(self) -> Result<String, Self> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(other),
        }
    }

    /// Narrow to the contained integer, or hand the subject back.
    ///
    /// # Errors
    ///
    /// Returns the subject unchanged when it is not an `Int`.
    pub fn into_int(self) -> Result<i64, Self> {
        match self {
            Self::Int(i) => Ok(i),
            other => Err(other),
        }
    }

    /// Narrow to the contained float, or hand the subject back.
    ///
    /// # Errors
    ///
    /// Returns the subject unchanged when it is not a `Float`.
    pub fn into_float(self) -> Result<f64, Self> {
        match self {
            Self::Float(f) => Ok(f),
            other => Err(other),
        }
    }

    /// Narrow to the contained boolean, or hand the subject back.
    ///
    /// # Errors
    ///
    /// Returns the subject unchanged when it is not a `Bool`.
    pub fn into_bool(self) -> Result<bool, Self> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Subject {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Subject {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Subject {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::when;

    #[test]
    fn kind_predicates() {
        assert!(Subject::Null.is_null());
        assert!(Subject::from("x").is_str());
        assert!(Subject::from(1).is_int());
        assert!(Subject::from(1.0).is_float());
        assert!(Subject::from(true).is_bool());
        assert!(!Subject::from(1).is_str());
    }

    #[test]
    fn narrowing_guards_narrow_or_hand_back() {
        assert_eq!(Subject::from(7).into_int(), Ok(7));
        assert_eq!(Subject::from("x").into_int(), Err(Subject::Str("x".into())));
        assert_eq!(Subject::from("x").into_str(), Ok("x".to_string()));
        assert_eq!(Subject::from(true).into_bool(), Ok(true));
        assert_eq!(Subject::from(1.5).into_float(), Ok(1.5));
    }

    #[test]
    fn kind_predicates_work_as_chain_predicates() {
        let kind = when(Subject::from(3))
            .matches(Subject::is_str, || "string")
            .matches(Subject::is_int, || "integer")
            .otherwise(|| "other");
        assert_eq!(kind, "integer");
    }

    #[test]
    fn narrowing_guards_work_with_chains() {
        let doubled = when(Subject::from(21))
            .narrows(Subject::into_str, |s| s.len() as i64)
            .narrows(Subject::into_int, |n| n * 2)
            .otherwise(|| 0);
        assert_eq!(doubled, 42);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_representation() {
        let json = serde_json::to_value(&Subject::Int(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "Int": 3 }));
        assert_eq!(
            serde_json::to_value(&Subject::Null).unwrap(),
            serde_json::json!("Null")
        );
    }
}
