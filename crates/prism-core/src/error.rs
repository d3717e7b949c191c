mod adhoc;
mod ambiguous_key;
mod execution_policy;
mod expression_evaluation_failed;
mod invalid_statement;
mod key_not_found;
mod unsupported_feature;

use adhoc::AdhocError;
use ambiguous_key::AmbiguousKeyError;
use execution_policy::ExecutionPolicyError;
use expression_evaluation_failed::ExpressionEvaluationFailed;
use invalid_statement::InvalidStatement;
use key_not_found::KeyNotFoundError;
use std::sync::Arc;
use unsupported_feature::UnsupportedFeature;

/// Returns early with an ad-hoc [`Error`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building or rendering a statement.
///
/// Rendering errors abort the current render call. No partial SQL is ever
/// returned alongside an error.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        match err.inner.as_mut().and_then(Arc::get_mut) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // The consequent is shared or already chained; wrap it instead.
            _ => Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
                    cause: Some(self),
                })),
            },
        }
    }

    /// Creates an error from format arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnsupportedFeature(UnsupportedFeature),
    KeyNotFound(KeyNotFoundError),
    AmbiguousKey(AmbiguousKeyError),
    ExecutionPolicy(ExecutionPolicyError),
    InvalidStatement(InvalidStatement),
    ExpressionEvaluationFailed(ExpressionEvaluationFailed),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
            KeyNotFound(err) => core::fmt::Display::fmt(err, f),
            AmbiguousKey(err) => core::fmt::Display::fmt(err, f),
            ExecutionPolicy(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            ExpressionEvaluationFailed(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown prism error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<core::fmt::Error> for Error {
    fn from(err: core::fmt::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dialect::Dialect, Name};

    #[test]
    fn error_size() {
        // Error stays one word wide
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn unsupported_feature_names_dialect() {
        let err = Error::unsupported_feature(Dialect::Sqlite, "ROWS FROM");
        assert!(err.is_unsupported_feature());
        assert_eq!(
            err.to_string(),
            "unsupported feature: ROWS FROM is not supported by SQLITE"
        );
    }

    #[test]
    fn unsupported_feature_with_context() {
        let err = Error::unsupported_feature(Dialect::Derby, "LATERAL")
            .context(err!("rendering SELECT"));
        assert_eq!(
            err.to_string(),
            "rendering SELECT: unsupported feature: LATERAL is not supported by DERBY"
        );
        assert!(!err.is_unsupported_feature());
    }

    #[test]
    fn key_not_found_lists_tables() {
        let err = Error::key_not_found(&Name::new(["book"]), &Name::new(["author"]));
        assert!(err.is_key_not_found());
        assert_eq!(
            err.to_string(),
            "no foreign key found between book and author"
        );
    }

    #[test]
    fn ambiguous_key_lists_candidates() {
        let err = Error::ambiguous_key(
            &Name::new(["book"]),
            &Name::new(["author"]),
            vec!["fk_book_author".into(), "fk_book_co_author".into()],
            vec![],
        );
        assert!(err.is_ambiguous_key());
        assert_eq!(
            err.to_string(),
            "ambiguous foreign keys between book and author: \
             [fk_book_author, fk_book_co_author] / []"
        );
    }

    #[test]
    fn execution_policy_error() {
        let err = Error::execution_policy("DELETE without WHERE");
        assert!(err.is_execution_policy());
        assert_eq!(
            err.to_string(),
            "execution policy violation: DELETE without WHERE"
        );
    }

    #[test]
    fn invalid_statement_error() {
        let err = Error::invalid_statement("row has 2 values, expected 3");
        assert!(err.is_invalid_statement());
        assert_eq!(
            err.to_string(),
            "invalid statement: row has 2 values, expected 3"
        );
    }

    #[test]
    fn anyhow_error_is_source() {
        use std::error::Error as _;

        let err: Error = anyhow::anyhow!("boom").into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "boom");
    }
}
