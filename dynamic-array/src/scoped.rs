//! Release an array when leaving a scope.
use core::mem::ManuallyDrop;
use core::ops;

use array_alloc::{Global, RawAlloc};

use crate::array::DynamicArray;

/// An array that is released through its allocator when dropped.
///
/// This is a thin guard over [`DynamicArray::release_in`], which stays the canonical way to free
/// an array. The guard remembers the allocator context so the appending methods do not need it
/// again. It releases on every exit path, including unwinding.
///
/// ```
/// use array_alloc::Global;
/// use dynamic_array::DynamicArray;
///
/// fn squares(n: u32) -> u32 {
///     let mut values = DynamicArray::<u32>::new().scoped_in(&Global);
///     for i in 0..n {
///         values.push(i * i);
///     }
///     let total = values.iter().sum();
///     total
///     // `values` is released here.
/// }
///
/// assert_eq!(squares(4), 14);
/// ```
///
/// [`DynamicArray::release_in`]: struct.DynamicArray.html#method.release_in
pub struct Scoped<'a, T, A: RawAlloc = Global, const INIT: usize = 16> {
    array: ManuallyDrop<DynamicArray<T, A, INIT>>,
    alloc: &'a A,
}

impl<'a, T, A: RawAlloc, const INIT: usize> Scoped<'a, T, A, INIT> {
    /// Guard `array`, whose block belongs to `alloc`.
    pub fn new(array: DynamicArray<T, A, INIT>, alloc: &'a A) -> Self {
        Scoped {
            array: ManuallyDrop::new(array),
            alloc,
        }
    }

    /// The allocator the array is released to.
    pub fn allocator(&self) -> &'a A {
        self.alloc
    }

    /// Appends an element, see [`DynamicArray::push_in`].
    ///
    /// [`DynamicArray::push_in`]: struct.DynamicArray.html#method.push_in
    pub fn push(&mut self, value: T) -> &mut T {
        self.array.push_in(self.alloc, value)
    }

    /// Appends clones of all `items`, see [`DynamicArray::extend_from_slice_in`].
    ///
    /// [`DynamicArray::extend_from_slice_in`]: struct.DynamicArray.html#method.extend_from_slice_in
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.array.extend_from_slice_in(self.alloc, items)
    }

    /// Give up the guard and take the array back. It is not released.
    pub fn into_inner(self) -> DynamicArray<T, A, INIT> {
        let mut this = ManuallyDrop::new(self);
        unsafe {
            // SAFETY: `this` is never dropped, so the array is taken exactly once.
            ManuallyDrop::take(&mut this.array)
        }
    }
}

impl<'a, A: RawAlloc, const INIT: usize> Scoped<'a, u8, A, INIT> {
    /// Appends the bytes of `text`, see [`DynamicArray::push_str_in`].
    ///
    /// [`DynamicArray::push_str_in`]: struct.DynamicArray.html#method.push_str_in
    pub fn push_str(&mut self, text: &str) {
        self.array.push_str_in(self.alloc, text)
    }

    /// Appends a zero byte, see [`DynamicArray::push_nul_in`].
    ///
    /// [`DynamicArray::push_nul_in`]: struct.DynamicArray.html#method.push_nul_in
    pub fn push_nul(&mut self) {
        self.array.push_nul_in(self.alloc)
    }
}

impl<T, A: RawAlloc, const INIT: usize> Drop for Scoped<'_, T, A, INIT> {
    fn drop(&mut self) {
        let array = unsafe {
            // SAFETY: dropped only once, and `into_inner` skips this.
            ManuallyDrop::take(&mut self.array)
        };
        array.release_in(self.alloc);
    }
}

impl<T, A: RawAlloc, const INIT: usize> ops::Deref for Scoped<'_, T, A, INIT> {
    type Target = DynamicArray<T, A, INIT>;

    fn deref(&self) -> &DynamicArray<T, A, INIT> {
        &self.array
    }
}

impl<T, A: RawAlloc, const INIT: usize> ops::DerefMut for Scoped<'_, T, A, INIT> {
    fn deref_mut(&mut self) -> &mut DynamicArray<T, A, INIT> {
        &mut self.array
    }
}
