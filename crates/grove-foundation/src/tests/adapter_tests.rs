//! Dispatch tests with a recording host.

use crate::tree_list::{
    RowKind, TreeGroup, TreeListAdapter, TreeListError, TreeListState, TreeListUpdate,
};

/// Mock host recording every hook invocation in order.
#[derive(Default)]
struct RecordingHost {
    bound: Vec<String>,
    clicks: Vec<String>,
}

impl TreeListAdapter<String, String> for RecordingHost {
    fn bind_group(&mut self, key: &String, group_index: usize) {
        self.bound.push(format!("group[{group_index}]={key}"));
    }

    fn bind_sub_item(&mut self, value: &String, group_index: usize, sub_index: usize) {
        self.bound
            .push(format!("sub[{group_index}.{sub_index}]={value}"));
    }

    fn group_clicked(&mut self, group_index: usize, was_expanded: bool) {
        self.clicks
            .push(format!("group[{group_index}] expanded={was_expanded}"));
    }

    fn sub_item_clicked(&mut self, group_index: usize, sub_index: usize) {
        self.clicks.push(format!("sub[{group_index}.{sub_index}]"));
    }
}

fn sample_state() -> TreeListState<String, String> {
    let mut state = TreeListState::new();
    state.set_data(vec![
        TreeGroup::new("a".to_string(), vec!["a0".to_string(), "a1".to_string()]),
        TreeGroup::new("b".to_string(), vec!["b0".to_string()]),
    ]);
    state
}

#[test]
fn bind_walks_the_visible_rows_in_order() {
    let mut state = sample_state();
    state.toggle_group(0).unwrap();

    let mut host = RecordingHost::default();
    let kinds: Vec<_> = (0..state.item_count())
        .map(|p| state.bind_row(p, &mut host).unwrap())
        .collect();

    assert_eq!(
        kinds,
        vec![
            RowKind::Group,
            RowKind::SubItem,
            RowKind::SubItem,
            RowKind::Group
        ]
    );
    assert_eq!(
        host.bound,
        vec!["group[0]=a", "sub[0.0]=a0", "sub[0.1]=a1", "group[1]=b"]
    );
}

#[test]
fn activating_a_group_row_notifies_then_toggles() {
    let mut state = sample_state();
    let mut host = RecordingHost::default();

    let update = state.activate_row(0, &mut host).unwrap();
    assert_eq!(
        update,
        Some(TreeListUpdate::RangeInserted {
            position: 1,
            count: 2
        })
    );
    // The hook sees the flag before the toggle was applied.
    assert_eq!(host.clicks, vec!["group[0] expanded=false"]);
    assert!(state.is_expanded(0));

    let update = state.activate_row(0, &mut host).unwrap();
    assert_eq!(
        update,
        Some(TreeListUpdate::RangeRemoved {
            position: 1,
            count: 2
        })
    );
    assert_eq!(host.clicks[1], "group[0] expanded=true");
    assert!(!state.is_expanded(0));
}

#[test]
fn activating_a_sub_item_row_changes_nothing() {
    let mut state = sample_state();
    state.toggle_group(1).unwrap();
    let count = state.item_count();

    let mut host = RecordingHost::default();
    let update = state.activate_row(2, &mut host).unwrap();

    assert_eq!(update, None);
    assert_eq!(host.clicks, vec!["sub[1.0]"]);
    assert_eq!(state.item_count(), count);
    assert!(state.is_expanded(1));
}

#[test]
fn out_of_range_dispatch_fails_without_hook_calls() {
    let mut state = sample_state();
    let mut host = RecordingHost::default();

    assert_eq!(
        state.bind_row(2, &mut host),
        Err(TreeListError::PositionOutOfRange {
            position: 2,
            count: 2
        })
    );
    assert_eq!(
        state.activate_row(9, &mut host),
        Err(TreeListError::PositionOutOfRange {
            position: 9,
            count: 2
        })
    );
    assert!(host.bound.is_empty());
    assert!(host.clicks.is_empty());
}
