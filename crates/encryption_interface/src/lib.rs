//! Encryption management interface
#![warn(missing_docs, missing_debug_implementations)]

/// Module describing the encryption and decryption capability
pub mod encryption_management;

/// Error and result types shared across the interface
pub mod errors;
