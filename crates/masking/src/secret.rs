//!
//! Structure describing a secret.
//!

use core::{fmt, marker::PhantomData};

use crate::{ExposeInterface, PeekInterface, Strategy, WithType};

/// Wrapper that keeps a value out of `Debug` output.
///
/// Reading the value requires an explicit call: [`PeekInterface::peek`] for a
/// reference, [`ExposeInterface::expose`] to take it out. The second type
/// parameter picks the masking [`Strategy`] applied when the wrapper is
/// formatted; by default the masked output still names the inner type.
pub struct Secret<S, I = WithType>
where
    I: Strategy<S>,
{
    pub(crate) value: S,
    pub(crate) masker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Wrap a secret value.
    pub fn new(value: S) -> Self {
        Self {
            value,
            masker: PhantomData,
        }
    }
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.value
    }
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.value
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(value: S) -> Self {
        Self::new(value)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.value, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}
