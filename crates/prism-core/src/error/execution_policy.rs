use super::Error;

/// Error when a statement is rejected by a configured execution policy, such
/// as a DELETE without a WHERE clause.
#[derive(Debug)]
pub(super) struct ExecutionPolicyError {
    message: Box<str>,
}

impl std::error::Error for ExecutionPolicyError {}

impl core::fmt::Display for ExecutionPolicyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "execution policy violation: {}", self.message)
    }
}

impl Error {
    /// Creates an execution policy error.
    pub fn execution_policy(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExecutionPolicy(ExecutionPolicyError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an execution policy error.
    pub fn is_execution_policy(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExecutionPolicy(_))
    }
}
