//!
//! No encryption functionalities
//!
//! Hands data back unchanged. Meant for local development and wiring tests
//! where a real encryption backend would only get in the way.

use encryption_interface::{
    encryption_management::{EncryptionError, EncryptionManagementInterface},
    errors::CustomResult,
};

/// No encryption type
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEncryption;

impl NoEncryption {
    /// Identity "encryption" of the given data.
    pub fn encrypt(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        data.as_ref().into()
    }

    /// Identity "decryption" of the given data.
    pub fn decrypt(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        data.as_ref().into()
    }
}

#[async_trait::async_trait]
impl EncryptionManagementInterface for NoEncryption {
    async fn encrypt(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError> {
        Ok(self.encrypt(input))
    }

    async fn decrypt(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError> {
        Ok(self.decrypt(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_data_through_unchanged() {
        let client = NoEncryption;
        let ciphertext = client.encrypt(b"plain");
        assert_eq!(ciphertext, b"plain");
        assert_eq!(client.decrypt(ciphertext), b"plain");
    }
}
