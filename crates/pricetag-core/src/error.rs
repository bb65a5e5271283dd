//! # Error Types
//!
//! Error types for pricetag-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  FormatError       - Structured formatting could not run               │
//! │  ValidationError   - A code, tag, field name or amount is malformed    │
//! │  ConfigError       - Loading/saving MoneyConfig failed                 │
//! │                                                                         │
//! │  Flow: FormatError ──► absorbed by format_money (plain-text render)    │
//! │        ValidationError ──► ConfigError::Validation                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Normalization and display never hand these to their callers;
//!    only config loading and the explicit validators return them

use thiserror::Error;

// =============================================================================
// Format Error
// =============================================================================

/// Reasons the structured (locale-aware) formatting step can fail.
///
/// ## User Workflow
/// ```text
/// format_money({10, "ZZZ"}, "en-US")
///      │
///      ▼
/// try_format ──► Err(UnknownCurrency { code: "ZZZ" })
///      │
///      ▼
/// fallback_render ──► "ZZZ 10"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The locale tag is not well-formed.
    #[error("Invalid locale tag: '{tag}'")]
    InvalidLocale { tag: String },

    /// The locale tag is well-formed but has no formatting data.
    #[error("Unsupported locale: '{tag}'")]
    UnsupportedLocale { tag: String },

    /// The currency code is malformed or not an ISO 4217 code we know.
    #[error("Unknown currency code: '{code}'")]
    UnknownCurrency { code: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a four-letter currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be less than {limit} in magnitude")]
    OutOfRange { field: String, limit: String },

    /// Value carries more decimal places than allowed.
    #[error("{field} must have at most {max_places} decimal places")]
    TooPrecise { field: String, max_places: u32 },

    /// Two settings that must differ have the same value.
    #[error("{field} '{value}' is already in use")]
    Duplicate { field: String, value: String },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for `MoneyConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No path was given and no platform config directory exists.
    #[error("No config path available")]
    NoConfigPath,

    /// A setting failed validation.
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
