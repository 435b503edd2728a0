#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types for secret values, ensuring they are not accidentally logged
//! or otherwise exposed through their `Debug` output, and that strongly held
//! secrets are wiped from memory when dropped.
//!

pub use zeroize::{self, Zeroize as ZeroizableSecret};

mod strategy;

pub use strategy::{Strategy, WithType, WithoutType};

mod abs;

pub use abs::{ExposeInterface, PeekInterface};

mod secret;
mod strong_secret;

pub use secret::Secret;
pub use strong_secret::StrongSecret;

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, PeekInterface};
}
