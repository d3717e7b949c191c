use super::Error;
use crate::dialect::Dialect;

/// Error when the target dialect has neither a native nor an emulated
/// rendering for a construct.
///
/// This occurs when:
/// - A table expression has no equivalent (`ROWS FROM` outside PostgreSQL)
/// - A DDL existence guard cannot be emulated (no error handling blocks)
/// - A literal cannot be expressed (non-finite floats on most dialects)
///
/// Raised at render time. The renderer never falls back to emitting SQL that
/// it knows to be wrong for the dialect.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    dialect: Dialect,
    feature: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported feature: {} is not supported by {}",
            self.feature, self.dialect
        )
    }
}

impl Error {
    /// Creates an unsupported feature error for the given dialect.
    pub fn unsupported_feature(dialect: Dialect, feature: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            dialect,
            feature: feature.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFeature(_))
    }
}
