//! Error types for settings registry operations.

use thiserror::Error;

use crate::keys::SettingKey;

/// Primary error type for registry construction and store operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Two definitions declared the same key.
    #[error("duplicate setting key '{key}'")]
    DuplicateKey {
        /// Key declared more than once.
        key: SettingKey,
    },
    /// A validator document failed to compile.
    #[error("invalid validator for '{key}': {detail}")]
    SchemaCompile {
        /// Setting whose validator is broken.
        key: SettingKey,
        /// Compilation error message.
        detail: String,
    },
    /// A default value was rejected by its own validator.
    #[error("default value for '{key}' fails its validator: {detail}")]
    DefaultRejected {
        /// Setting whose default is invalid.
        key: SettingKey,
        /// Validation error message.
        detail: String,
    },
    /// A select entry's default was missing from its allowed options.
    #[error("default value {value} for '{key}' is not an allowed option")]
    DefaultOutsideOptions {
        /// Setting whose default is outside its option set.
        key: SettingKey,
        /// Offending default value, rendered as JSON.
        value: String,
    },
    /// Failed to serialize a constructed default payload.
    #[error("failed to serialize default for '{key}': {detail}")]
    SerializeDefault {
        /// Setting whose default could not be rendered.
        key: SettingKey,
        /// Serialization error message.
        detail: String,
    },
    /// The locale list provider returned a malformed record.
    #[error("malformed locale record '{id}': {reason}")]
    MalformedLocale {
        /// Identifier of the offending record (possibly empty).
        id: String,
        /// Machine-readable reason for the rejection.
        reason: &'static str,
    },
    /// A candidate value failed a setting's validator.
    #[error("value rejected for '{key}': {detail}")]
    ValidationRejected {
        /// Setting the write was aimed at.
        key: SettingKey,
        /// Validation error message.
        detail: String,
    },
    /// A key was not present in the registry.
    #[error("unknown setting key '{key}'")]
    UnknownKey {
        /// Key string supplied by the caller.
        key: String,
    },
}

/// Convenience alias for settings results.
pub type SettingsResult<T> = Result<T, SettingsError>;
