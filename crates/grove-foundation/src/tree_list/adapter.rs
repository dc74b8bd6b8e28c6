//! Host contract: row binding and click dispatch.
//!
//! The rendering host implements [`TreeListAdapter`] and drives the
//! state machine with flat positions; the dispatch methods on
//! [`TreeListState`] resolve each position and invoke the matching
//! hook. Expansion changes flow back to the host as
//! [`TreeListUpdate`] values rather than through callbacks capturing
//! shared mutable state.

use super::error::TreeListError;
use super::row::{RowAddress, RowKind};
use super::state::TreeListState;
use super::update::TreeListUpdate;

/// Implemented by the rendering host to populate rows and receive click
/// notifications.
///
/// Whatever row surface the host fills ("row holder") lives behind
/// `&mut self`; the core never sees it. Bind hooks run once per row
/// render.
pub trait TreeListAdapter<K, V> {
    /// Populates a group header row.
    fn bind_group(&mut self, key: &K, group_index: usize);

    /// Populates a child row.
    fn bind_sub_item(&mut self, value: &V, group_index: usize, sub_index: usize);

    /// Called when a group row is activated, with the expansion flag as
    /// it was before the toggle is applied.
    fn group_clicked(&mut self, group_index: usize, was_expanded: bool) {
        let _ = (group_index, was_expanded);
    }

    /// Pure notification; activating a sub-item changes no state.
    fn sub_item_clicked(&mut self, group_index: usize, sub_index: usize) {
        let _ = (group_index, sub_index);
    }
}

impl<K, V> TreeListState<K, V> {
    /// Resolves `position` and invokes the matching bind hook.
    ///
    /// Returns the row kind so the host can verify it bound the surface
    /// it prepared.
    pub fn bind_row<A>(&self, position: usize, adapter: &mut A) -> Result<RowKind, TreeListError>
    where
        A: TreeListAdapter<K, V> + ?Sized,
    {
        let address = self.resolve(position)?;
        match address {
            RowAddress::Group { group_index } => {
                let group = &self.groups()[group_index];
                adapter.bind_group(group.key(), group_index);
            }
            RowAddress::SubItem {
                group_index,
                sub_index,
            } => match self.groups()[group_index].child(sub_index) {
                Some(value) => adapter.bind_sub_item(value, group_index, sub_index),
                None => {
                    // Resolution only hands out in-range children.
                    log::warn!(
                        "bind_row: resolved sub-item ({group_index}, {sub_index}) missing from its group"
                    );
                }
            },
        }
        Ok(address.kind())
    }

    /// Click dispatch for the row at `position`.
    ///
    /// A group row gets its [`group_clicked`] notification and then the
    /// toggle; the resulting range message is returned for the host to
    /// apply. A sub-item row only gets [`sub_item_clicked`] and yields
    /// no update.
    ///
    /// [`group_clicked`]: TreeListAdapter::group_clicked
    /// [`sub_item_clicked`]: TreeListAdapter::sub_item_clicked
    pub fn activate_row<A>(
        &mut self,
        position: usize,
        adapter: &mut A,
    ) -> Result<Option<TreeListUpdate>, TreeListError>
    where
        A: TreeListAdapter<K, V> + ?Sized,
    {
        match self.resolve(position)? {
            RowAddress::Group { group_index } => {
                adapter.group_clicked(group_index, self.is_expanded(group_index));
                self.toggle_group(group_index).map(Some)
            }
            RowAddress::SubItem {
                group_index,
                sub_index,
            } => {
                adapter.sub_item_clicked(group_index, sub_index);
                Ok(None)
            }
        }
    }
}
