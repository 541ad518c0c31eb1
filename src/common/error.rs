//! Error types for ordindex.

use thiserror::Error;

use crate::common::config::MIN_DEGREE_FLOOR;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in ordindex.
///
/// Construction is the only fallible operation: every tree operation after a
/// successful `new` is total over well-formed trees. Internal invariant
/// violations (e.g. a node holding more than `2t - 1` keys) are programming
/// defects and panic rather than surfacing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested minimum degree cannot satisfy the tree invariants.
    ///
    /// Fanout below 2 leaves no way to split a full node into two halves of
    /// at least `t - 1` keys around a promoted separator.
    #[error("invalid minimum degree {0}: must be at least {MIN_DEGREE_FLOOR}")]
    InvalidMinDegree(usize),
}
