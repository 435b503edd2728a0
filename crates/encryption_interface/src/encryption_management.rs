//! Trait describing the encryption and decryption of opaque payloads.
//!
//! Callers depend on `Box<dyn EncryptionManagementInterface>` and never on a
//! concrete client, so deployments can swap the backing implementation (and
//! tests can substitute a mock) without touching call sites.

use crate::errors::CustomResult;

/// Errors that could occur during encryption management operations.
#[derive(Clone, Debug, thiserror::Error)]
pub enum EncryptionError {
    /// An error occurred when encrypting input data.
    #[error("Failed to encrypt input data")]
    EncryptionFailed,

    /// An error occurred when decrypting input data.
    #[error("Failed to decrypt input data")]
    DecryptionFailed,
}

/// Interface for encrypting and decrypting opaque byte sequences.
///
/// The interface assigns no semantics to the bytes themselves: what a
/// ciphertext looks like is entirely the implementation's business.
#[async_trait::async_trait]
pub trait EncryptionManagementInterface: Send + Sync + dyn_clone::DynClone {
    /// Encrypt the given input data.
    async fn encrypt(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError>;

    /// Decrypt the given input data.
    async fn decrypt(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError>;
}

dyn_clone::clone_trait_object!(EncryptionManagementInterface);
