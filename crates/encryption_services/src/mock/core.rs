//! Mock encryption core functionalities.
//!
//! Production code talks to a `Box<dyn EncryptionManagementInterface>`; unit
//! tests hand it a [`MockEncryption`] instead, configured with canned
//! responses per operation, and afterwards assert on the recorded calls.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use encryption_interface::{encryption_management::EncryptionError, errors::CustomResult};
use masking::{PeekInterface, Secret, StrongSecret};

/// The operation a recorded call was made against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncryptionOperation {
    /// A call to `encrypt`.
    Encrypt,
    /// A call to `decrypt`.
    Decrypt,
}

/// Selects which calls an expectation answers.
pub enum ArgMatcher {
    /// Answer every call.
    Any,
    /// Answer calls whose input equals the given bytes.
    Eq(Vec<u8>),
    /// Answer calls for which the predicate holds.
    Satisfies(Box<dyn Fn(&[u8]) -> bool + Send + Sync>),
}

impl ArgMatcher {
    /// Matcher for inputs equal to `bytes`.
    pub fn eq(bytes: impl AsRef<[u8]>) -> Self {
        Self::Eq(bytes.as_ref().to_vec())
    }

    /// Matcher backed by a predicate over the input bytes.
    pub fn satisfies(predicate: impl Fn(&[u8]) -> bool + Send + Sync + 'static) -> Self {
        Self::Satisfies(Box::new(predicate))
    }

    fn matches(&self, input: &[u8]) -> bool {
        match self {
            Self::Any => true,
            Self::Eq(expected) => expected == input,
            Self::Satisfies(predicate) => predicate(input),
        }
    }
}

impl fmt::Debug for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // matcher payloads may hold plaintext, keep them out of the output
        match self {
            Self::Any => f.write_str("Any"),
            Self::Eq(_) => f.write_str("Eq(..)"),
            Self::Satisfies(_) => f.write_str("Satisfies(..)"),
        }
    }
}

/// Response computed from the input bytes of a call.
pub type ResponseFn =
    Box<dyn Fn(&[u8]) -> CustomResult<Vec<u8>, EncryptionError> + Send + Sync>;

/// Canned response returned by a matched expectation.
pub enum MockResponse {
    /// Succeed with a fixed byte sequence.
    Value(StrongSecret<Vec<u8>>),
    /// Fail with a fixed error.
    Error(EncryptionError),
    /// Compute the response from the input bytes.
    Function(ResponseFn),
}

impl MockResponse {
    /// Respond with a fixed byte sequence.
    pub fn value(bytes: impl AsRef<[u8]>) -> Self {
        Self::Value(bytes.as_ref().to_vec().into())
    }

    /// Respond with a fixed error.
    pub fn error(error: EncryptionError) -> Self {
        Self::Error(error)
    }

    /// Respond with a function of the input bytes.
    pub fn with(
        response: impl Fn(&[u8]) -> CustomResult<Vec<u8>, EncryptionError> + Send + Sync + 'static,
    ) -> Self {
        Self::Function(Box::new(response))
    }

    fn produce(&self, input: &[u8]) -> CustomResult<Vec<u8>, EncryptionError> {
        match self {
            Self::Value(bytes) => Ok(bytes.peek().clone()),
            Self::Error(error) => Err(error_stack::report!(error.clone())),
            Self::Function(response) => response(input),
        }
    }
}

impl fmt::Debug for MockResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(bytes) => f.debug_tuple("Value").field(bytes).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Policy applied when a call matches no registered expectation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OnUnexpected {
    /// Panic, failing the test immediately.
    #[default]
    Panic,
    /// Return the zero value for the operation: empty bytes, no error.
    ReturnEmpty,
}

/// One call observed by the mock.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    /// Which operation was invoked.
    pub operation: EncryptionOperation,
    /// The exact input bytes of the invocation.
    pub input: Secret<Vec<u8>>,
}

struct Expectation {
    matcher: ArgMatcher,
    response: MockResponse,
}

#[derive(Default)]
struct MockState {
    encrypt_expectations: Vec<Expectation>,
    decrypt_expectations: Vec<Expectation>,
    calls: Vec<RecordedCall>,
}

/// Configurable, recording mock of the encryption management interface.
///
/// Clones share their state: the test keeps one handle for configuration and
/// assertions while the code under test owns a boxed clone. Expectations are
/// consulted in registration order, the first match answers the call, and a
/// single expectation answers any number of calls.
#[derive(Clone)]
pub struct MockEncryption {
    state: Arc<Mutex<MockState>>,
    on_unexpected: OnUnexpected,
}

impl MockEncryption {
    /// Strict mock: a call without a matching expectation panics.
    pub fn new() -> Self {
        Self::with_policy(OnUnexpected::Panic)
    }

    /// Lenient mock: a call without a matching expectation returns empty bytes.
    pub fn lenient() -> Self {
        Self::with_policy(OnUnexpected::ReturnEmpty)
    }

    /// Mock with an explicit unexpected-call policy.
    pub fn with_policy(on_unexpected: OnUnexpected) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            on_unexpected,
        }
    }

    /// Register a response for `encrypt` calls selected by `matcher`.
    pub fn expect_encrypt(&self, matcher: ArgMatcher, response: MockResponse) -> &Self {
        self.lock().encrypt_expectations.push(Expectation { matcher, response });
        self
    }

    /// Register a response for `decrypt` calls selected by `matcher`.
    pub fn expect_decrypt(&self, matcher: ArgMatcher, response: MockResponse) -> &Self {
        self.lock().decrypt_expectations.push(Expectation { matcher, response });
        self
    }

    /// All calls observed so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Inputs of observed `encrypt` calls, in arrival order.
    pub fn encrypt_calls(&self) -> Vec<Secret<Vec<u8>>> {
        self.calls_for(EncryptionOperation::Encrypt)
    }

    /// Inputs of observed `decrypt` calls, in arrival order.
    pub fn decrypt_calls(&self) -> Vec<Secret<Vec<u8>>> {
        self.calls_for(EncryptionOperation::Decrypt)
    }

    /// Number of observed calls to the given operation.
    pub fn call_count(&self, operation: EncryptionOperation) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    /// Drop all recorded calls and registered expectations.
    pub fn reset(&self) {
        *self.lock() = MockState::default();
    }

    pub(crate) fn invoke(
        &self,
        operation: EncryptionOperation,
        input: &[u8],
    ) -> CustomResult<Vec<u8>, EncryptionError> {
        let mut state = self.lock();
        state.calls.push(RecordedCall {
            operation,
            input: Secret::new(input.to_vec()),
        });
        tracing::debug!(?operation, input_len = input.len(), "mock encryption call");

        let expectations = match operation {
            EncryptionOperation::Encrypt => &state.encrypt_expectations,
            EncryptionOperation::Decrypt => &state.decrypt_expectations,
        };
        match expectations
            .iter()
            .find(|expectation| expectation.matcher.matches(input))
        {
            Some(expectation) => expectation.response.produce(input),
            None => match self.on_unexpected {
                OnUnexpected::Panic => {
                    tracing::error!(?operation, "call without a matching expectation");
                    panic!("unexpected {operation:?} call: no matching expectation registered")
                }
                OnUnexpected::ReturnEmpty => Ok(Vec::new()),
            },
        }
    }

    fn calls_for(&self, operation: EncryptionOperation) -> Vec<Secret<Vec<u8>>> {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .map(|call| call.input.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // a panic inside a strict mock poisons the lock, later assertions
        // still need the recorded calls
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockEncryption {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("MockEncryption")
            .field("on_unexpected", &self.on_unexpected)
            .field("encrypt_expectations", &state.encrypt_expectations.len())
            .field("decrypt_expectations", &state.decrypt_expectations.len())
            .field("calls", &state.calls.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn matcher_any_matches_everything() {
        assert!(ArgMatcher::Any.matches(b""));
        assert!(ArgMatcher::Any.matches(b"anything"));
    }

    #[test]
    fn matcher_eq_compares_exact_bytes() {
        let matcher = ArgMatcher::eq(b"hello");
        assert!(matcher.matches(b"hello"));
        assert!(!matcher.matches(b"hell"));
        assert!(!matcher.matches(b"hello "));
    }

    #[test]
    fn matcher_predicate_is_applied_to_input() {
        let matcher = ArgMatcher::satisfies(|input| input.len() > 3);
        assert!(matcher.matches(b"long enough"));
        assert!(!matcher.matches(b"no"));
    }

    #[test]
    fn responses_do_not_leak_payloads_through_debug() {
        let response = MockResponse::value(b"ciphertext bytes");
        assert_eq!(
            format!("{response:?}"),
            "Value(*** alloc::vec::Vec<u8> ***)"
        );

        let matcher = ArgMatcher::eq(b"plaintext bytes");
        assert_eq!(format!("{matcher:?}"), "Eq(..)");
    }
}
