//! Common error infrastructure for skirmish-core.
//!
//! This module provides shared types and traits used across all error types in the crate.
//! Domain-specific errors (e.g., `ReactionError`, `ConfigError`) are defined in their
//! respective modules alongside the code that produces them.
//!
//! # Design Principles
//!
//! - **Nothing is fatal**: every failure degrades one entity or one cue, never the frame
//! - **Absence is not an error**: missing components and stale handles are `None`
//! - **Severity Classification**: errors are categorized for logging and recovery

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: the simulation continues with one behavior disabled or skipped
/// - **Validation**: invalid input that should be rejected before the scene starts
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the offending behavior is isolated and the frame continues.
    ///
    /// Examples: a collision reaction failed and was disabled
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative detection radius, retreat threshold above 1.0
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a prefab built without the component its reaction relies on
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
