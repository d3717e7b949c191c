use super::Error;
use crate::Name;

/// Error when joining on a foreign key but no key links the two tables.
#[derive(Debug)]
pub(super) struct KeyNotFoundError {
    lhs: Name,
    rhs: Name,
}

impl std::error::Error for KeyNotFoundError {}

impl core::fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no foreign key found between {} and {}",
            self.lhs, self.rhs
        )
    }
}

impl Error {
    /// Creates a key-not-found error for a join between `lhs` and `rhs`.
    pub fn key_not_found(lhs: &Name, rhs: &Name) -> Error {
        Error::from(super::ErrorKind::KeyNotFound(KeyNotFoundError {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }))
    }

    /// Returns `true` if this error is a key-not-found error.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KeyNotFound(_))
    }
}
