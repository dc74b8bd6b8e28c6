//! Terminal demo for the Grove tree list.
//!
//! Seeds ten groups of three children each and drives the tree-list
//! state machine from stdin: entering a visible row number activates
//! that row, toggling groups and printing the range update the host
//! would animate.

use std::io::{self, BufRead};

use anyhow::Result;
use grove_foundation::prelude::*;
use grove_ui::{DividerDecoration, DividerStyle, Orientation, RowBounds};
use grove_ui_graphics::{EdgeInsets, Rect};

const ROW_HEIGHT: f32 = 24.0;
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 480.0);

/// Host side of the demo: renders rows as terminal lines.
#[derive(Default)]
struct TerminalHost {
    /// Expansion snapshot refreshed before each render pass, so group
    /// rows can show a fold marker.
    expanded: Vec<bool>,
    lines: Vec<String>,
}

impl TreeListAdapter<String, String> for TerminalHost {
    fn bind_group(&mut self, key: &String, group_index: usize) {
        let marker = if self.expanded.get(group_index).copied().unwrap_or(false) {
            'v'
        } else {
            '>'
        };
        self.lines.push(format!("{marker} group {key}"));
    }

    fn bind_sub_item(&mut self, value: &String, _group_index: usize, _sub_index: usize) {
        self.lines.push(format!("    {value}"));
    }

    fn group_clicked(&mut self, group_index: usize, was_expanded: bool) {
        let action = if was_expanded { "collapsing" } else { "expanding" };
        println!("{action} group {group_index}");
    }

    fn sub_item_clicked(&mut self, group_index: usize, sub_index: usize) {
        println!("sub-item {sub_index} of group {group_index} clicked");
    }
}

fn sample_groups() -> Vec<TreeGroup<String, String>> {
    (0..10)
        .map(|i| {
            TreeGroup::new(
                i.to_string(),
                (0..3).map(|j| format!("sub {j}")).collect(),
            )
        })
        .collect()
}

fn render(
    state: &TreeListState<String, String>,
    host: &mut TerminalHost,
    decoration: &DividerDecoration,
) -> Result<()> {
    host.expanded = (0..state.group_count())
        .map(|i| state.is_expanded(i))
        .collect();
    host.lines.clear();
    for position in 0..state.item_count() {
        state.bind_row(position, host)?;
    }

    // The same row geometry a pixel host would hand the decoration.
    let rows: Vec<RowBounds> = (0..host.lines.len())
        .map(|i| RowBounds::new(Rect::new(0.0, i as f32 * ROW_HEIGHT, VIEWPORT.width, ROW_HEIGHT)))
        .collect();
    let dividers = decoration.layout(VIEWPORT, EdgeInsets::default(), &rows);
    log::debug!("{} rows, {} divider rects", rows.len(), dividers.len());

    println!();
    for (position, line) in host.lines.iter().enumerate() {
        println!("{position:>3}  {line}");
    }
    println!("     ({} rows)", host.lines.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let decoration = DividerDecoration::new(DividerStyle::new(), Orientation::Vertical)?;

    let mut state = TreeListState::new();
    state.set_data(sample_groups());
    let mut host = TerminalHost::default();

    println!("=== Grove tree-list demo ===");
    println!("Type a row number to activate it: group rows toggle,");
    println!("sub-item rows just report the click. Ctrl-D exits.");
    render(&state, &mut host, &decoration)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let position: usize = match input.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("not a row number: {input}");
                continue;
            }
        };
        match state.activate_row(position, &mut host) {
            Ok(Some(update)) => println!("update: {update:?}"),
            Ok(None) => {}
            Err(e) => {
                println!("{e}");
                continue;
            }
        }
        render(&state, &mut host, &decoration)?;
    }

    Ok(())
}
