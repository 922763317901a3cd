//! A growable array, and string builder, over an allocator chosen by the caller.
//!
//! [`DynamicArray`] is a plain `{ items, count, capacity }` triple. It grows by doubling, starting
//! at a compile-time initial capacity, and is never tied to one global heap: every operation that
//! may allocate borrows an allocator implementing [`array_alloc::RawAlloc`]. Nothing is freed
//! implicitly. Call [`release_in`] when done, or wrap the array in a [`Scoped`] guard.
//!
//! Appending many elements at once with [`extend_from_slice_in`] reallocates at most once and
//! lands on the same capacity that appending them one by one would have reached.
//!
//! ```rust
//! use array_alloc::Global;
//! use dynamic_array::DynamicArray;
//!
//! let mut totals: DynamicArray<i32> = DynamicArray::new();
//! let mut sum = 0;
//! for value in [3, 1, 4, 1, 5] {
//!     sum += value;
//!     totals.push_in(&Global, sum);
//! }
//! assert_eq!(totals.as_slice(), [3, 4, 8, 9, 14]);
//!
//! // Missing elements default to -1.
//! let popped: Vec<i32> = (0..7).map(|_| totals.pop_or(-1)).collect();
//! assert_eq!(popped, [14, 9, 8, 4, 3, -1, -1]);
//!
//! totals.release_in(&Global);
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature the array emits `trace` events when it grows or is released, and
//! `debug` events when the allocator fails.
//!
//! [`release_in`]: struct.DynamicArray.html#method.release_in
//! [`extend_from_slice_in`]: struct.DynamicArray.html#method.extend_from_slice_in
#![no_std]
#![deny(missing_docs)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod array;
mod error;
pub mod growth;
mod scoped;
pub mod string;
mod trace;

pub use array_alloc::{AllocError, Global, RawAlloc};

pub use crate::array::DynamicArray;
pub use crate::error::{GrowError, TryPushError};
pub use crate::scoped::Scoped;
pub use crate::string::{StringBuilder, Writer};
