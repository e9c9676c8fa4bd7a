//! Common error infrastructure for map-core.
//!
//! Domain-specific errors (e.g. [`crate::map::MapError`],
//! [`crate::mapgen::GenError`]) are defined in their respective modules alongside
//! the operations they guard. This module provides the shared severity
//! classification those types implement.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: non-positive dimensions, out-of-bounds coordinate
    Validation,

    /// Precondition on map content not met; retrying cannot help.
    ///
    /// Examples: no walkable cell to select, coverage exceeding the interior
    Domain,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Unrecoverable; the surrounding world build for this map must abort.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Domain => "domain",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Trait implemented by all map-core error types.
///
/// Gives callers a uniform way to decide whether a failure poisons only the
/// map being operated on (the usual case) or the whole world build.
pub trait CoreError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code for logs and diagnostics.
    fn code(&self) -> &'static str;
}
