//! Trait implementations for the mock encryption client

use encryption_interface::{
    encryption_management::{EncryptionError, EncryptionManagementInterface},
    errors::CustomResult,
};

use crate::mock::core::{EncryptionOperation, MockEncryption};

#[async_trait::async_trait]
impl EncryptionManagementInterface for MockEncryption {
    async fn encrypt(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError> {
        self.invoke(EncryptionOperation::Encrypt, input)
    }

    async fn decrypt(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError> {
        self.invoke(EncryptionOperation::Decrypt, input)
    }
}
