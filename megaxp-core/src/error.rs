//! Error types for the Mega XP Storage core.
//!
//! Per-event conditions (empty transfers, missing containers, grids that do
//! not match) are never errors. Everything here happens at startup.

use thiserror::Error;

use crate::types::{EnchantmentId, Identifier};

/// Top-level error type for all Mega XP Storage operations.
#[derive(Error, Debug)]
pub enum MegaXpError {
    /// Configuration is unreadable or fails validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A namespaced identifier could not be parsed.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The marker enchantment is not present in the host registry.
    ///
    /// Auto-capture and the upgrade recipe both depend on it, so this aborts
    /// initialization.
    #[error("Marker enchantment {0} could not be resolved from the registry")]
    MarkerUnresolved(EnchantmentId),

    /// Something was registered twice under the same identifier.
    #[error("Duplicate registration: {0}")]
    DuplicateRegistration(Identifier),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, MegaXpError>;
