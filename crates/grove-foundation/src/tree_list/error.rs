//! Error conditions for tree-list queries.

use thiserror::Error;

/// Contract violations surfaced by tree-list queries.
///
/// Every variant indicates a caller bug (the host presented a stale or
/// out-of-range index), not a transient fault; nothing here is worth
/// retrying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TreeListError {
    /// A flat position outside `[0, item_count())`.
    #[error("flat position {position} out of range for {count} visible rows")]
    PositionOutOfRange { position: usize, count: usize },

    /// A group index outside `[0, group_count())`.
    #[error("group index {group_index} out of range for {group_count} groups")]
    GroupOutOfRange {
        group_index: usize,
        group_count: usize,
    },
}
