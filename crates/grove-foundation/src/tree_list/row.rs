//! Row descriptors for the flat position space.

/// The kind of visual row occupying a flat position.
///
/// The host uses this to pick which row surface to create before asking
/// the state machine to bind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A group header row. Always visible.
    Group,
    /// A child row. Visible only while its group is expanded.
    SubItem,
}

/// Resolved address of one flat position inside the tree.
///
/// The tagged variants make dispatch exhaustive at the call site; there
/// is no separate view-type integer to keep in sync with the indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAddress {
    Group {
        group_index: usize,
    },
    SubItem {
        group_index: usize,
        sub_index: usize,
    },
}

impl RowAddress {
    pub fn group(group_index: usize) -> Self {
        RowAddress::Group { group_index }
    }

    pub fn sub_item(group_index: usize, sub_index: usize) -> Self {
        RowAddress::SubItem {
            group_index,
            sub_index,
        }
    }

    #[inline]
    pub fn kind(self) -> RowKind {
        match self {
            RowAddress::Group { .. } => RowKind::Group,
            RowAddress::SubItem { .. } => RowKind::SubItem,
        }
    }

    /// The index of the group this row belongs to. For a sub-item row
    /// that is the owning group, not the row's own index.
    #[inline]
    pub fn group_index(self) -> usize {
        match self {
            RowAddress::Group { group_index } => group_index,
            RowAddress::SubItem { group_index, .. } => group_index,
        }
    }

    /// The sub-item index, or `None` for a group row.
    #[inline]
    pub fn sub_index(self) -> Option<usize> {
        match self {
            RowAddress::Group { .. } => None,
            RowAddress::SubItem { sub_index, .. } => Some(sub_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accessors() {
        let group = RowAddress::group(3);
        assert_eq!(group.kind(), RowKind::Group);
        assert_eq!(group.group_index(), 3);
        assert_eq!(group.sub_index(), None);

        let sub = RowAddress::sub_item(1, 2);
        assert_eq!(sub.kind(), RowKind::SubItem);
        assert_eq!(sub.group_index(), 1);
        assert_eq!(sub.sub_index(), Some(2));
    }
}
