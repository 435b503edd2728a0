//!
//! Recording, configurable test double for the encryption management
//! interface
//!

pub mod core;
pub mod implementers;

pub use self::core::{
    ArgMatcher, EncryptionOperation, MockEncryption, MockResponse, OnUnexpected, RecordedCall,
};
