use super::Error;
use crate::Name;

/// Error when more than one foreign key links the two sides of a join.
///
/// Carries the candidate keys found in each direction so callers can pick one
/// explicitly.
#[derive(Debug)]
pub(super) struct AmbiguousKeyError {
    lhs: Name,
    rhs: Name,
    lhs_to_rhs: Vec<String>,
    rhs_to_lhs: Vec<String>,
}

impl std::error::Error for AmbiguousKeyError {}

impl core::fmt::Display for AmbiguousKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "ambiguous foreign keys between {} and {}: [{}] / [{}]",
            self.lhs,
            self.rhs,
            self.lhs_to_rhs.join(", "),
            self.rhs_to_lhs.join(", ")
        )
    }
}

impl Error {
    /// Creates an ambiguous-key error.
    ///
    /// `lhs_to_rhs` lists keys declared on `lhs` referencing `rhs`,
    /// `rhs_to_lhs` the reverse direction.
    pub fn ambiguous_key(
        lhs: &Name,
        rhs: &Name,
        lhs_to_rhs: Vec<String>,
        rhs_to_lhs: Vec<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousKey(AmbiguousKeyError {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
            lhs_to_rhs,
            rhs_to_lhs,
        }))
    }

    /// Returns `true` if this error is an ambiguous-key error.
    pub fn is_ambiguous_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousKey(_))
    }
}
