//! The capacity growth rule.
//!
//! Capacity only ever changes by doubling. An array without capacity jumps to its initial
//! capacity constant first. Single and bulk appends both go through [`capacity_for`], so any
//! interleaving of them walks the same sequence `0, INIT, 2 * INIT, 4 * INIT, ...`.

/// The initial capacity used when none is configured.
pub const DEFAULT_INIT_CAPACITY: usize = 16;

/// The first non-zero capacity for a configured constant.
///
/// A configured constant of zero would never grow, it is treated as one.
pub const fn initial_capacity(init: usize) -> usize {
    if init == 0 { 1 } else { init }
}

/// The capacity after one growth step from `capacity`.
///
/// Returns `None` if doubling overflows `usize`.
///
/// ```
/// use dynamic_array::growth::next_capacity;
///
/// assert_eq!(next_capacity::<16>(0), Some(16));
/// assert_eq!(next_capacity::<16>(16), Some(32));
/// assert_eq!(next_capacity::<16>(usize::MAX / 2 + 1), None);
/// ```
pub const fn next_capacity<const INIT: usize>(capacity: usize) -> Option<usize> {
    if capacity > 0 {
        capacity.checked_mul(2)
    } else {
        Some(initial_capacity(INIT))
    }
}

/// The smallest capacity reachable from `capacity` by growth steps that holds `required` elements.
///
/// Returns `capacity` itself when it is already large enough, and `None` when the sequence
/// overflows before reaching `required`.
///
/// ```
/// use dynamic_array::growth::capacity_for;
///
/// assert_eq!(capacity_for::<16>(0, 20), Some(32));
/// assert_eq!(capacity_for::<16>(32, 20), Some(32));
/// // Capacities set through `from_raw_parts` need not be powers of two.
/// assert_eq!(capacity_for::<16>(3, 7), Some(12));
/// ```
pub fn capacity_for<const INIT: usize>(capacity: usize, required: usize) -> Option<usize> {
    let mut capacity = capacity;
    while capacity < required {
        capacity = next_capacity::<INIT>(capacity)?;
    }
    Some(capacity)
}
