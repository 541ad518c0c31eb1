//! Configuration constants for ordindex.

/// Smallest legal minimum degree.
///
/// A node must be splittable into two halves of at least `t - 1` keys around
/// a promoted separator, which requires `t >= 2`. With `t == 2` the engine
/// degenerates to a 2-3-4 tree, the smallest shape the invariants permit.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Minimum degree used by `Default` tree constructors.
///
/// Chosen to keep nodes at cache-friendly sizes for small keys:
/// - Max keys per node: 2 × 16 − 1 = 31
/// - Max fanout: 32
///
/// Callers with known key sizes should pick their own degree via `new`.
pub const DEFAULT_MIN_DEGREE: usize = 16;

/// Maximum number of keys any node of minimum degree `t` may hold (`2t - 1`).
#[inline]
pub const fn max_keys(t: usize) -> usize {
    2 * t - 1
}

/// Minimum number of keys a non-root node of minimum degree `t` must hold
/// after any completed operation (`t - 1`). The root is exempt.
#[inline]
pub const fn min_keys(t: usize) -> usize {
    t - 1
}
