//! Errors raised when text is turned into domain values

use thiserror::Error;

/// Errors returned to callers of the shell.
///
/// Refused navigation requests are not errors; they resolve to the role's default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShellError {
    /// Login attempted with text that names no role.
    #[error("invalid role '{0}' (expected admin, warehouse, supplier or community)")]
    InvalidRole(String),
}
