//! Config driven construction of encryption management clients.

use encryption_interface::{
    encryption_management::{EncryptionError, EncryptionManagementInterface},
    errors::CustomResult,
};

use crate::no_encryption::NoEncryption;

/// Selects the encryption manager a deployment runs with.
#[derive(Clone, Debug, Default, serde::Deserialize, Eq, PartialEq)]
#[serde(tag = "encryption_manager")]
#[serde(rename_all = "snake_case")]
pub enum EncryptionManagementConfig {
    /// Pass data through unchanged.
    #[default]
    NoEncryption,
}

impl EncryptionManagementConfig {
    /// Verifies that the config is usable.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self {
            Self::NoEncryption => Ok(()),
        }
    }

    /// Builds the client described by this config.
    pub async fn get_encryption_management_client(
        &self,
    ) -> CustomResult<Box<dyn EncryptionManagementInterface>, EncryptionError> {
        Ok(match self {
            Self::NoEncryption => {
                tracing::info!(encryption_manager = "no_encryption", "building encryption management client");
                Box::new(NoEncryption)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = EncryptionManagementConfig::default();
        assert_eq!(config, EncryptionManagementConfig::NoEncryption);
        assert!(config.validate().is_ok());
    }
}
