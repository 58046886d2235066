//! Modular index arithmetic for the circular buffer.
//!
//! Every wrap in the crate goes through [`wrap_index`] and [`wrap_span`] so
//! the converter, the region decomposer and the shift engine agree on what
//! "wrapped" means.

/// Reduce `value` into `[0, size)`.
///
/// Works for negative values and for values several multiples of `size`
/// away from the range. `size` must be non-zero.
///
/// # Example
/// ```
/// use chakra_map::core::math::wrap_index;
///
/// assert_eq!(wrap_index(12, 10), 2);
/// assert_eq!(wrap_index(-3, 10), 7);
/// assert_eq!(wrap_index(-23, 10), 7);
/// ```
#[inline]
pub fn wrap_index(value: i64, size: usize) -> usize {
    debug_assert!(size > 0, "cannot wrap into an empty range");
    value.rem_euclid(size as i64) as usize
}

/// Round to the nearest integer, ties away from zero.
///
/// Non-finite input rounds to zero.
///
/// # Example
/// ```
/// use chakra_map::core::math::round_half_away;
///
/// assert_eq!(round_half_away(2.5), 3);
/// assert_eq!(round_half_away(-2.5), -3);
/// assert_eq!(round_half_away(2.49), 2);
/// ```
#[inline]
pub fn round_half_away(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Contiguous run of buffer indices along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// First buffer index of the run
    pub start: usize,
    /// Number of cells in the run
    pub len: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last index of the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Does the run cover buffer index `i`?
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        i >= self.start && i < self.end()
    }
}

/// Split a run of `len` cells starting at `start` on a circular axis of
/// `size` cells.
///
/// Returns the run up to the physical edge and, when the request wraps, the
/// remainder starting at 0. Requires `start < size` and `len <= size`.
///
/// # Example
/// ```
/// use chakra_map::core::math::{Span, wrap_span};
///
/// assert_eq!(wrap_span(2, 3, 10), (Span::new(2, 3), None));
/// assert_eq!(wrap_span(8, 4, 10), (Span::new(8, 2), Some(Span::new(0, 2))));
/// ```
#[inline]
pub fn wrap_span(start: usize, len: usize, size: usize) -> (Span, Option<Span>) {
    debug_assert!(start < size && len <= size);
    if start + len <= size {
        (Span::new(start, len), None)
    } else {
        let first = size - start;
        (Span::new(start, first), Some(Span::new(0, len - first)))
    }
}
