//! Contains the `DynamicArray` implementation.
//!
//! [See `DynamicArray` for the main information][`DynamicArray`].
//!
//! [`DynamicArray`]: struct.DynamicArray.html
use core::{fmt, marker::PhantomData, ops, ptr, slice};
use core::ptr::NonNull;

use array_alloc::{Global, NonZeroLayout, RawAlloc};

use crate::error::{handle_grow_error, GrowError, TryPushError};
use crate::growth;
use crate::scoped::Scoped;
use crate::trace::{debug, trace};

/// A growable array whose allocator is passed in by the caller.
///
/// The array owns a contiguous block of `capacity` slots of which the first `count` hold live
/// elements. It does not store its allocator. Every operation that may allocate takes the
/// allocator context as `&A` instead, and the array is only ever freed by an explicit call to
/// [`release_in`]. An array that is never released leaks its block, which is safe and is what an
/// arena-backed array wants.
///
/// The allocator *type* `A` is fixed per array type, so an array cannot accidentally be grown by
/// a different kind of allocator. Passing another instance of the same type is fine: the safety
/// contract of [`RawAlloc`] makes every instance accept the blocks of every other.
///
/// Capacity grows by doubling, starting at `INIT` (16 by default), see [`growth`].
///
/// # Basic Usage
///
/// ```
/// use array_alloc::Global;
/// use dynamic_array::DynamicArray;
///
/// let mut stack: DynamicArray<u32> = DynamicArray::new();
///
/// stack.push_in(&Global, 1);
/// stack.push_in(&Global, 2);
/// stack.extend_from_slice_in(&Global, &[3, 4]);
/// assert_eq!(stack.as_slice(), [1, 2, 3, 4]);
/// assert_eq!(stack.capacity(), 16);
///
/// while let Some(top) = stack.pop() {
///     // Prints 4, 3, 2, 1
///     println!("{}", top);
/// }
///
/// stack.release_in(&Global);
/// ```
///
/// ## Checked growth
///
/// The `try_` variants report allocation failure and capacity overflow instead of aborting.
///
/// ```
/// use array_alloc::Global;
/// use dynamic_array::{DynamicArray, GrowError};
///
/// let huge = DynamicArray::<u64>::try_with_capacity_in(&Global, usize::MAX);
/// assert!(matches!(huge, Err(GrowError::CapacityOverflow)));
///
/// let mut small: DynamicArray<u64> = DynamicArray::new();
/// let rejected = small.try_push_in(&Global, 7).map(|slot| *slot);
/// assert_eq!(rejected.ok(), Some(7));
/// # small.release_in(&Global);
/// ```
///
/// [`release_in`]: #method.release_in
/// [`growth`]: crate::growth
/// [`RawAlloc`]: array_alloc::RawAlloc
pub struct DynamicArray<T, A = Global, const INIT: usize = 16> {
    /// Dangling while no block is allocated.
    items: NonNull<T>,
    count: usize,
    capacity: usize,
    elements: PhantomData<T>,
    alloc: PhantomData<fn() -> A>,
}

impl<T, A, const INIT: usize> DynamicArray<T, A, INIT> {
    /// Create an empty array without allocating.
    pub const fn new() -> Self {
        DynamicArray {
            items: NonNull::dangling(),
            count: 0,
            capacity: 0,
            elements: PhantomData,
            alloc: PhantomData,
        }
    }

    /// Create an array from a raw block, a count and a capacity.
    ///
    /// Growing the array will reallocate `items`, and releasing it will free `items`, through the
    /// allocator passed to those calls.
    ///
    /// ## Safety
    /// * `count <= capacity`.
    /// * If the block for `capacity` elements of `T` is not empty, `items` was allocated for
    ///   exactly that layout by an allocator of type `A` and is not owned by anything else.
    ///   Otherwise `items` is dangling and aligned.
    /// * The first `count` elements are initialized.
    pub unsafe fn from_raw_parts(items: NonNull<T>, count: usize, capacity: usize) -> Self {
        debug_assert!(count <= capacity, "count exceeds capacity");
        DynamicArray {
            items,
            count,
            capacity,
            elements: PhantomData,
            alloc: PhantomData,
        }
    }

    /// Decompose the array into its block, count and capacity without freeing anything.
    ///
    /// The parts can be turned back into an array with [`from_raw_parts`], or kept alive by
    /// whatever owns the allocator, for example an arena that is dropped as a whole.
    ///
    /// [`from_raw_parts`]: #method.from_raw_parts
    pub fn into_raw_parts(self) -> (NonNull<T>, usize, usize) {
        (self.items, self.count, self.capacity)
    }

    /// Returns the number of live elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of live elements. Alias of [`count`](#method.count).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns the number of elements the array can hold without growing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Extracts a slice containing the live elements.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: count is the number of initialized elements.
            slice::from_raw_parts(self.items.as_ptr(), self.count)
        }
    }

    /// Extracts the mutable slice containing the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY: count is the number of initialized elements, and we have a unique borrow.
            slice::from_raw_parts_mut(self.items.as_ptr(), self.count)
        }
    }

    /// A pointer to the first slot. Dangling while the capacity is zero.
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// A mutable pointer to the first slot. Dangling while the capacity is zero.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_ptr()
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    ///
    /// Never calls the allocator, the slot stays allocated.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        Some(unsafe {
            // SAFETY: just checked that there is a last element.
            self.pop_unchecked()
        })
    }

    /// Removes the last element and returns it, without checking for emptiness.
    ///
    /// ## Safety
    /// The array must not be empty.
    pub unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(self.count > 0, "pop from an empty array");
        self.count -= 1;
        // SAFETY: the slot was initialized and is now considered uninit, so we move out of it.
        ptr::read(self.items.as_ptr().add(self.count))
    }

    /// Removes the last element, or computes a default if the array is empty.
    ///
    /// `default` is only called when there is nothing to pop.
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut empty: DynamicArray<i32> = DynamicArray::new();
    /// let mut calls = 0;
    /// assert_eq!(empty.pop_or_else(|| { calls += 1; -1 }), -1);
    /// assert_eq!(calls, 1);
    /// ```
    pub fn pop_or_else<F>(&mut self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.pop() {
            Some(last) => last,
            None => default(),
        }
    }

    /// Removes the last element, or returns `default` if the array is empty.
    ///
    /// The argument is evaluated eagerly. Use [`pop_or_else`] when computing it has effects.
    ///
    /// [`pop_or_else`]: #method.pop_or_else
    pub fn pop_or(&mut self, default: T) -> T {
        self.pop_or_else(|| default)
    }

    /// Write `value` into the next free slot.
    ///
    /// ## Safety
    /// `count < capacity`.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.count < self.capacity);
        let slot = self.items.as_ptr().add(self.count);
        ptr::write(slot, value);
        self.count += 1;
        &mut *slot
    }

    /// Clone `items` into the free slots.
    ///
    /// ## Safety
    /// `count + items.len() <= capacity`.
    pub(crate) unsafe fn extend_unchecked(&mut self, items: &[T])
    where
        T: Clone,
    {
        for item in items {
            // Increments `count` per element so a panicking `clone` leaves a consistent array.
            self.push_unchecked(item.clone());
        }
    }
}

impl<T, A: RawAlloc, const INIT: usize> DynamicArray<T, A, INIT> {
    /// Create an array with room for `capacity` elements.
    ///
    /// Allocates once, unless the block would be empty. Aborts on allocation failure.
    pub fn with_capacity_in(alloc: &A, capacity: usize) -> Self {
        match Self::try_with_capacity_in(alloc, capacity) {
            Ok(array) => array,
            Err(err) => handle_grow_error(err),
        }
    }

    /// Create an array with room for `capacity` elements, reporting failure.
    pub fn try_with_capacity_in(alloc: &A, capacity: usize) -> Result<Self, GrowError> {
        let mut array = Self::new();
        array.set_capacity(alloc, capacity)?;
        Ok(array)
    }

    /// Appends an element and returns a reference to where it was stored.
    ///
    /// Grows by one doubling step if the array is full. Aborts on allocation failure and panics
    /// if the capacity overflows.
    ///
    /// ```
    /// use array_alloc::Global;
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut totals: DynamicArray<u32> = DynamicArray::new();
    /// *totals.push_in(&Global, 1) += 10;
    /// assert_eq!(totals.as_slice(), [11]);
    /// # totals.release_in(&Global);
    /// ```
    pub fn push_in(&mut self, alloc: &A, value: T) -> &mut T {
        if self.count == self.capacity {
            if let Err(err) = self.grow_for(alloc, 1) {
                handle_grow_error(err)
            }
        }

        unsafe {
            // SAFETY: the array was either not full or has just grown.
            self.push_unchecked(value)
        }
    }

    /// Appends an element, handing it back if the array could not grow.
    pub fn try_push_in(&mut self, alloc: &A, value: T) -> Result<&mut T, TryPushError<T>> {
        if self.count == self.capacity {
            if let Err(cause) = self.grow_for(alloc, 1) {
                return Err(TryPushError::new(value, cause));
            }
        }

        Ok(unsafe {
            // SAFETY: the array was either not full or has just grown.
            self.push_unchecked(value)
        })
    }

    /// Appends clones of all `items`, reallocating at most once.
    ///
    /// The new capacity is the first capacity of the doubling sequence that holds all elements.
    /// Aborts on allocation failure and panics if the capacity overflows.
    pub fn extend_from_slice_in(&mut self, alloc: &A, items: &[T])
    where
        T: Clone,
    {
        if let Err(err) = self.try_extend_from_slice_in(alloc, items) {
            handle_grow_error(err)
        }
    }

    /// Appends clones of all `items`, reallocating at most once and reporting failure.
    ///
    /// On failure no element has been appended.
    pub fn try_extend_from_slice_in(&mut self, alloc: &A, items: &[T]) -> Result<(), GrowError>
    where
        T: Clone,
    {
        if items.is_empty() {
            return Ok(());
        }

        self.grow_for(alloc, items.len())?;
        unsafe {
            // SAFETY: `grow_for` made room for all of them.
            self.extend_unchecked(items);
        }

        Ok(())
    }

    /// Copy the live elements into a new block of exactly `count` slots.
    ///
    /// The source is not modified and the copy shares nothing with it. Aborts on allocation
    /// failure.
    pub fn duplicate_in(&self, alloc: &A) -> Self
    where
        T: Clone,
    {
        match self.try_duplicate_in(alloc) {
            Ok(copy) => copy,
            Err(err) => handle_grow_error(err),
        }
    }

    /// Copy the live elements into a new block of exactly `count` slots, reporting failure.
    pub fn try_duplicate_in(&self, alloc: &A) -> Result<Self, GrowError>
    where
        T: Clone,
    {
        let mut copy = Self::try_with_capacity_in(alloc, self.count)?;
        unsafe {
            // SAFETY: allocated exactly `count` slots.
            copy.extend_unchecked(self.as_slice());
        }
        Ok(copy)
    }

    /// Drop all elements and return the block to the allocator.
    ///
    /// `alloc` may be any instance of `A`. Frees nothing if there is no block.
    pub fn release_in(mut self, alloc: &A) {
        trace!(count = self.count, capacity = self.capacity, "releasing dynamic array");

        let block = Self::block_layout(self.capacity);
        unsafe {
            // SAFETY: exactly the live elements, which are not accessed again.
            ptr::drop_in_place(self.as_mut_slice());
        }

        if let Ok(Some(layout)) = block {
            unsafe {
                // SAFETY: the block was allocated with this layout by `alloc`, per the invariants
                // of this type and the contract of `from_raw_parts`.
                alloc.free(self.items.cast(), layout)
            }
        }
    }

    /// Wrap the array so that it is released through `alloc` when the wrapper goes out of scope.
    pub fn scoped_in(self, alloc: &A) -> Scoped<'_, T, A, INIT> {
        Scoped::new(self, alloc)
    }

    fn block_layout(capacity: usize) -> Result<Option<NonZeroLayout>, GrowError> {
        NonZeroLayout::array::<T>(capacity).map_err(GrowError::from)
    }

    /// Ensure room for `additional` more elements with at most one allocator call.
    fn grow_for(&mut self, alloc: &A, additional: usize) -> Result<(), GrowError> {
        let required = self.count
            .checked_add(additional)
            .ok_or(GrowError::CapacityOverflow)?;
        if required <= self.capacity {
            return Ok(());
        }

        let capacity = growth::capacity_for::<INIT>(self.capacity, required)
            .ok_or(GrowError::CapacityOverflow)?;
        self.set_capacity(alloc, capacity)
    }

    /// Move to a block of `capacity` slots, which must not be smaller than the current one.
    ///
    /// Either the array is unchanged and an error returned, or items and capacity are replaced.
    fn set_capacity(&mut self, alloc: &A, capacity: usize) -> Result<(), GrowError> {
        debug_assert!(capacity >= self.capacity);
        if capacity == self.capacity {
            return Ok(());
        }

        let old = Self::block_layout(self.capacity)?;
        let new = Self::block_layout(capacity)?;

        let items = match (old, new) {
            // Zero-sized elements, never backed by a block.
            (_, None) => Ok(self.items.cast()),
            (None, Some(new)) => alloc.allocate(new),
            (Some(old), Some(new)) => unsafe {
                // SAFETY: the block is ours, allocated with `old` by `alloc`. Same alignment.
                alloc.reallocate(self.items.cast(), old, new)
            },
        };

        let items = match items {
            Ok(items) => items,
            Err(err) => {
                debug!(
                    old_capacity = self.capacity,
                    new_capacity = capacity,
                    "dynamic array allocation failed"
                );
                return Err(err.into());
            }
        };

        trace!(
            count = self.count,
            old_capacity = self.capacity,
            new_capacity = capacity,
            "dynamic array grown"
        );

        self.items = items.cast();
        self.capacity = capacity;
        Ok(())
    }
}

impl<T, const INIT: usize> DynamicArray<T, Global, INIT> {
    /// Create an array with room for `capacity` elements on the heap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(&Global, capacity)
    }

    /// Appends an element, growing on the heap.
    pub fn push(&mut self, value: T) -> &mut T {
        self.push_in(&Global, value)
    }

    /// Appends clones of all `items`, growing on the heap.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.extend_from_slice_in(&Global, items)
    }

    /// Copy the live elements into a new heap block of exactly `count` slots.
    pub fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        self.duplicate_in(&Global)
    }

    /// Drop all elements and free the heap block.
    pub fn release(self) {
        self.release_in(&Global)
    }

    /// Wrap the array so that it is released when the wrapper goes out of scope.
    pub fn scoped(self) -> Scoped<'static, T, Global, INIT> {
        Scoped::new(self, &Global)
    }
}

// SAFETY: the array uniquely owns its elements, like `Vec`. The allocator is only a marker.
unsafe impl<T: Send, A, const INIT: usize> Send for DynamicArray<T, A, INIT> {}
unsafe impl<T: Sync, A, const INIT: usize> Sync for DynamicArray<T, A, INIT> {}

impl<T, A, const INIT: usize> Default for DynamicArray<T, A, INIT> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T, A, const INIT: usize> ops::Deref for DynamicArray<T, A, INIT> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A, const INIT: usize> ops::DerefMut for DynamicArray<T, A, INIT> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A, const INIT: usize> AsRef<[T]> for DynamicArray<T, A, INIT> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A, const INIT: usize> AsMut<[T]> for DynamicArray<T, A, INIT> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, A, const INIT: usize> fmt::Debug for DynamicArray<T, A, INIT> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
