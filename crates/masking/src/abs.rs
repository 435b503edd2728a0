//!
//! Abstract data types.
//!

/// Interface to borrow a reference to an inner secret.
pub trait PeekInterface<S> {
    /// Only method providing access to the secret value.
    fn peek(&self) -> &S;
}

/// Interface that consumes a wrapper and returns the inner value.
pub trait ExposeInterface<S> {
    /// Consume the wrapper and return the inner value.
    fn expose(self) -> S;
}
