use core::fmt;

use array_alloc::{AllocError, LayoutError};
use thiserror::Error;

/// Growing an array failed. The array is unchanged.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GrowError {
    /// The new capacity, or its size in bytes, does not fit the address space.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator could not provide the new block.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

impl From<LayoutError> for GrowError {
    fn from(_: LayoutError) -> Self {
        GrowError::CapacityOverflow
    }
}

/// A value could not be appended because the array failed to grow.
///
/// Hands back the value so nothing is lost.
pub struct TryPushError<T> {
    value: T,
    cause: GrowError,
}

impl<T> TryPushError<T> {
    pub(crate) fn new(value: T, cause: GrowError) -> Self {
        TryPushError { value, cause }
    }

    /// Why the array could not grow.
    pub fn cause(&self) -> GrowError {
        self.cause
    }

    /// Retrieve the value that was not appended.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TryPushError")
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "could not append value: {}", self.cause)
    }
}

impl<T> core::error::Error for TryPushError<T> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// The infallible operations' reaction to a growth failure.
///
/// Overflow panics, allocation failure goes to the global allocation error handler which by
/// default aborts the process.
#[cold]
#[inline(never)]
pub(crate) fn handle_grow_error(err: GrowError) -> ! {
    match err {
        GrowError::CapacityOverflow => panic!("capacity overflow"),
        GrowError::Alloc(err) => alloc::alloc::handle_alloc_error(err.layout.into()),
    }
}
