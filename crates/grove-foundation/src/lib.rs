//! Foundation elements for Grove: the expandable tree-list core.

pub mod tree_list;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use tree_list::*;

pub mod prelude {
    pub use crate::tree_list::{
        RowAddress, RowKind, TreeGroup, TreeListAdapter, TreeListError, TreeListState,
        TreeListUpdate,
    };
}
