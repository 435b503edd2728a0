//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant `<E>` into a report, allowing
/// `error_stack::Report<E>` specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;
