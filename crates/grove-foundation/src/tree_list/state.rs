//! Tree-list state: expansion flags and flat-position resolution.
//!
//! [`TreeListState`] owns one generation of [`TreeGroup`] records plus a
//! parallel per-group expansion flag, and answers the queries a
//! list-rendering host needs: total visible row count, the row kind at a
//! flat position, and the resolved indices for binding.
//!
//! Resolution walks the groups once per lookup. Group counts in this
//! widget are small (tens), so the walk stays cheaper than a prefix-sum
//! index that would have to be rebuilt on every toggle.

use smallvec::SmallVec;

use super::error::TreeListError;
use super::group::TreeGroup;
use super::row::{RowAddress, RowKind};
use super::update::TreeListUpdate;

/// Expansion flags kept inline before spilling to the heap.
const INLINE_GROUPS: usize = 16;

/// State holder for an expandable two-level list.
///
/// The group records and the expansion flags always have the same length
/// and order; both are replaced together by [`set_data`] and only the
/// flags mutate between replacements, through [`toggle_group`].
///
/// All operations are synchronous and run on the host's event thread;
/// the state performs no I/O and holds no locks.
///
/// [`set_data`]: TreeListState::set_data
/// [`toggle_group`]: TreeListState::toggle_group
#[derive(Clone, Debug)]
pub struct TreeListState<K, V> {
    groups: Vec<TreeGroup<K, V>>,
    expanded: SmallVec<[bool; INLINE_GROUPS]>,
}

impl<K, V> Default for TreeListState<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TreeListState<K, V> {
    /// An empty state: no data, zero visible rows.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            expanded: SmallVec::new(),
        }
    }

    /// Replaces the displayed generation wholesale and collapses every
    /// group. Safe at any time, including with an empty tree.
    ///
    /// Returns [`TreeListUpdate::Reset`]: the host must treat the whole
    /// visible set as stale.
    pub fn set_data(&mut self, groups: Vec<TreeGroup<K, V>>) -> TreeListUpdate {
        self.groups = groups;
        self.expanded.clear();
        self.expanded.resize(self.groups.len(), false);
        log::debug!("tree list reset: {} groups", self.groups.len());
        TreeListUpdate::Reset
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &[TreeGroup<K, V>] {
        &self.groups
    }

    pub fn group(&self, group_index: usize) -> Option<&TreeGroup<K, V>> {
        self.groups.get(group_index)
    }

    /// Whether the group's children currently occupy flat positions.
    /// Out-of-range indices read as collapsed.
    pub fn is_expanded(&self, group_index: usize) -> bool {
        self.expanded.get(group_index).copied().unwrap_or(false)
    }

    /// Total number of currently visible rows.
    ///
    /// Each group contributes its own row plus, while expanded, one row
    /// per child. Zero before any data is set.
    pub fn item_count(&self) -> usize {
        debug_assert_eq!(self.groups.len(), self.expanded.len());
        (0..self.groups.len()).map(|i| self.visible_span(i)).sum()
    }

    /// Resolves a flat position to its row address.
    ///
    /// Fails with [`TreeListError::PositionOutOfRange`] when `position`
    /// is not in `[0, item_count())`; the host must never present such a
    /// position.
    pub fn resolve(&self, position: usize) -> Result<RowAddress, TreeListError> {
        debug_assert_eq!(self.groups.len(), self.expanded.len());
        let mut cursor = 0;
        for group_index in 0..self.groups.len() {
            if position == cursor {
                return Ok(RowAddress::Group { group_index });
            }
            let span = self.visible_span(group_index);
            if position < cursor + span {
                // Past the group's own row but still inside its span:
                // one of its visible children.
                return Ok(RowAddress::SubItem {
                    group_index,
                    sub_index: position - cursor - 1,
                });
            }
            cursor += span;
        }
        // cursor has accumulated every span, i.e. item_count().
        Err(TreeListError::PositionOutOfRange {
            position,
            count: cursor,
        })
    }

    /// The kind of row at a flat position.
    pub fn row_kind_at(&self, position: usize) -> Result<RowKind, TreeListError> {
        self.resolve(position).map(RowAddress::kind)
    }

    /// The flat position a row address currently occupies; inverse of
    /// [`resolve`](TreeListState::resolve).
    ///
    /// Returns `None` for indices out of bounds and for sub-items of a
    /// collapsed group (such rows occupy no flat position).
    pub fn position_of(&self, address: RowAddress) -> Option<usize> {
        let group_index = address.group_index();
        if group_index >= self.groups.len() {
            return None;
        }
        let row = self.group_row_position(group_index);
        match address {
            RowAddress::Group { .. } => Some(row),
            RowAddress::SubItem { sub_index, .. } => {
                let visible = self.expanded[group_index]
                    && sub_index < self.groups[group_index].child_count();
                visible.then(|| row + 1 + sub_index)
            }
        }
    }

    /// Flips one group's expansion flag. The single mutation entry point
    /// between data refreshes; no other group's flag is touched.
    ///
    /// Returns the precise range message for the host: expanding yields
    /// [`TreeListUpdate::RangeInserted`] immediately after the group's
    /// row, collapsing the matching [`TreeListUpdate::RangeRemoved`].
    /// The range length is the group's live child count at the moment of
    /// the toggle; for a childless group it is zero and the host treats
    /// the update as a no-op.
    pub fn toggle_group(&mut self, group_index: usize) -> Result<TreeListUpdate, TreeListError> {
        debug_assert_eq!(self.groups.len(), self.expanded.len());
        if group_index >= self.groups.len() {
            return Err(TreeListError::GroupOutOfRange {
                group_index,
                group_count: self.groups.len(),
            });
        }

        // First-child position is derived while the old flag is live.
        let position = self.group_row_position(group_index) + 1;
        let count = self.groups[group_index].child_count();
        let was_expanded = self.expanded[group_index];
        self.expanded[group_index] = !was_expanded;

        Ok(if was_expanded {
            TreeListUpdate::RangeRemoved { position, count }
        } else {
            TreeListUpdate::RangeInserted { position, count }
        })
    }

    /// Rows the group currently occupies: its own row plus its children
    /// while expanded.
    fn visible_span(&self, group_index: usize) -> usize {
        if self.expanded[group_index] {
            1 + self.groups[group_index].child_count()
        } else {
            1
        }
    }

    /// Flat position of the group's own row under the current flags.
    fn group_row_position(&self, group_index: usize) -> usize {
        (0..group_index).map(|i| self.visible_span(i)).sum()
    }
}
