//!
//! Secret wrapper that wipes its value from memory on drop.
//!

use core::{fmt, marker::PhantomData};

use zeroize::Zeroize;

use crate::{ExposeInterface, PeekInterface, Strategy, WithType};

/// Like [`crate::Secret`], but the inner value is zeroized when the wrapper is
/// dropped. Intended for keys, plaintext buffers and other material that must
/// not linger in memory.
pub struct StrongSecret<S, I = WithType>
where
    S: Zeroize,
    I: Strategy<S>,
{
    value: S,
    masker: PhantomData<I>,
}

impl<S, I> StrongSecret<S, I>
where
    S: Zeroize,
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

impl<S, I> PeekInterface<S> for StrongSecret<S, I>
where
    S: Zeroize,
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.value
    }
}

impl<S, I> ExposeInterface<S> for StrongSecret<S, I>
where
    S: Zeroize + Default,
    I: Strategy<S>,
{
    fn expose(mut self) -> S {
        core::mem::take(&mut self.value)
    }
}

impl<S, I> From<S> for StrongSecret<S, I>
where
    S: Zeroize,
    I: Strategy<S>,
{
    fn from(value: S) -> Self {
        Self::new(value)
    }
}

impl<S, I> Clone for StrongSecret<S, I>
where
    S: Zeroize + Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S, I> PartialEq for StrongSecret<S, I>
where
    S: Zeroize + PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for StrongSecret<S, I>
where
    S: Zeroize + Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for StrongSecret<S, I>
where
    S: Zeroize,
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.value, f)
    }
}

impl<S, I> Default for StrongSecret<S, I>
where
    S: Zeroize + Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}

impl<S, I> Drop for StrongSecret<S, I>
where
    S: Zeroize,
    I: Strategy<S>,
{
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
