//! Change messages emitted by tree-list mutations.

/// Describes how the visible row set changed after a mutation.
///
/// Toggles report the exact affected span, never a full refresh, so the
/// host can run an incremental insert/remove animation. Only
/// [`set_data`](super::TreeListState::set_data) produces [`Reset`].
///
/// [`Reset`]: TreeListUpdate::Reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeListUpdate {
    /// The whole visible set is stale; the host must rebind everything.
    Reset,
    /// `count` rows became visible starting at `position`.
    RangeInserted { position: usize, count: usize },
    /// `count` rows left the visible set, previously starting at
    /// `position`.
    RangeRemoved { position: usize, count: usize },
}

impl TreeListUpdate {
    /// True when the update leaves the visible rows untouched: a
    /// zero-length insert or remove from toggling a childless group.
    /// Hosts treat these as no-ops.
    pub fn is_noop(self) -> bool {
        matches!(
            self,
            TreeListUpdate::RangeInserted { count: 0, .. }
                | TreeListUpdate::RangeRemoved { count: 0, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_ranges_are_noops() {
        assert!(TreeListUpdate::RangeInserted {
            position: 4,
            count: 0
        }
        .is_noop());
        assert!(TreeListUpdate::RangeRemoved {
            position: 0,
            count: 0
        }
        .is_noop());
        assert!(!TreeListUpdate::Reset.is_noop());
        assert!(!TreeListUpdate::RangeInserted {
            position: 4,
            count: 2
        }
        .is_noop());
    }
}
