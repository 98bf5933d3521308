//! Error types for security operations
//!
//! Access decisions never error: unknown roles, absent rules and unknown
//! workspaces all resolve to denial. These errors cover building the
//! inputs to those decisions (rules, users, credentials).

use thiserror::Error;

/// Security error types.
#[derive(Debug, Error)]
pub enum SecurityError {
    /// A rule pattern could not be compiled
    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Compiler message.
        message: String,
    },

    /// A rule-file line could not be parsed
    #[error("Malformed rule on line {line}: {message}")]
    MalformedRule {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// A user with this name is already registered
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Unknown user or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Hashing or parsing a stored password hash failed
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Reading a rule file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for security operations.
pub type SecurityResult<T> = Result<T, SecurityError>;

impl SecurityError {
    /// Check if this error should be logged at error level.
    ///
    /// Bad credentials and bad rule input are caller mistakes.
    pub fn is_server_error(&self) -> bool {
        matches!(self, SecurityError::Io(_) | SecurityError::PasswordHash(_))
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            SecurityError::InvalidPattern { .. } => "INVALID_PATTERN",
            SecurityError::MalformedRule { .. } => "MALFORMED_RULE",
            SecurityError::DuplicateUser(_) => "DUPLICATE_USER",
            SecurityError::InvalidCredentials => "INVALID_CREDENTIALS",
            SecurityError::PasswordHash(_) => "PASSWORD_HASH_ERROR",
            SecurityError::Io(_) => "IO_ERROR",
        }
    }
}
