//! Registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("View function {function} reverted: {vm_status}")]
    Reverted { function: String, vm_status: String },

    #[error("View function {0} returned no values")]
    MissingReturn(String),

    #[error("Failed to decode {function}: {message}")]
    Decode { function: String, message: String },

    #[error("Invalid account address: {0}")]
    InvalidAddress(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
