use crate::error::{Error, Result};

/// Outcome of decoding a single report field.
///
/// A field is either [`Field::Decoded`] or [`Field::Unavailable`] together with the reason,
/// so a zero coordinate that was actually transmitted can be told apart from one that
/// could not be decoded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", content = "value", rename_all = "snake_case")
)]
pub enum Field<T> {
    Decoded(T),
    Unavailable(Error),
}

impl<T> Field<T> {
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        matches!(self, Field::Decoded(_))
    }

    /// The decoded value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Decoded(v) => Some(v),
            Field::Unavailable(_) => None,
        }
    }

    /// Why the field is unavailable, if it is.
    #[must_use]
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Field::Decoded(_) => None,
            Field::Unavailable(err) => Some(err),
        }
    }

    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Field::Decoded(v) => Some(v),
            Field::Unavailable(_) => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Field<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Field::Decoded(v) => Field::Decoded(f(v)),
            Field::Unavailable(err) => Field::Unavailable(err),
        }
    }

    /// Converts into a plain [Result], e.g. for use with `?`.
    ///
    /// # Errors
    /// The reason the field is unavailable.
    pub fn into_result(self) -> Result<T> {
        match self {
            Field::Decoded(v) => Ok(v),
            Field::Unavailable(err) => Err(err),
        }
    }
}

impl<T> From<Result<T>> for Field<T> {
    fn from(zult: Result<T>) -> Self {
        match zult {
            Ok(v) => Field::Decoded(v),
            Err(err) => Field::Unavailable(err),
        }
    }
}
