#![allow(clippy::unwrap_used)]

use encryption_interface::encryption_management::EncryptionManagementInterface;
use encryption_services::managers::EncryptionManagementConfig;

#[test]
fn deserializes_from_config() {
    let config: EncryptionManagementConfig =
        serde_json::from_str(r#"{"encryption_manager": "no_encryption"}"#).unwrap();
    assert_eq!(config, EncryptionManagementConfig::NoEncryption);
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn builds_a_no_encryption_client() {
    let config = EncryptionManagementConfig::NoEncryption;
    let client = config.get_encryption_management_client().await.unwrap();

    let ciphertext = client.encrypt(b"plain").await.unwrap();
    assert_eq!(client.decrypt(&ciphertext).await.unwrap(), b"plain");
}

#[tokio::test]
async fn built_clients_are_cloneable() {
    let client = EncryptionManagementConfig::default()
        .get_encryption_management_client()
        .await
        .unwrap();
    let clone: Box<dyn EncryptionManagementInterface> = client.clone();

    assert_eq!(clone.encrypt(b"data").await.unwrap(), b"data");
}
