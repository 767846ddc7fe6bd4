//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur during metadata registration or queries.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The owner already registered an attachment.
    #[error("attachment already registered for {owner}")]
    DuplicateAttachment { owner: String },

    /// A registration named no properties.
    #[error("registration for {owner} names no properties")]
    NoNames { owner: String },

    /// A lock was poisoned by a panicking writer.
    #[error("registry lock poisoned: {0}")]
    Poisoned(String),
}

/// Convenience type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
