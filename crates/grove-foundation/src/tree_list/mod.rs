//! Expandable two-level list support.
//!
//! A tree list presents an ordered sequence of groups, each carrying an
//! ordered sequence of children, as one flat row sequence. Collapsed
//! groups occupy a single row; expanded groups additionally occupy one
//! row per child. The host only ever sees flat positions.
//!
//! # Architecture
//!
//! - [`TreeGroup`] - one group record: a key plus its children
//! - [`TreeListState`] - expansion flags and flat-position resolution
//! - [`TreeListAdapter`] - trait the rendering host implements to
//!   populate rows and receive click notifications
//! - [`TreeListUpdate`] - precise change messages the host consumes to
//!   run incremental insert/remove animations
//!
//! # Example
//!
//! ```rust
//! use grove_foundation::tree_list::{RowAddress, TreeGroup, TreeListState};
//!
//! let mut state = TreeListState::new();
//! state.set_data(vec![
//!     TreeGroup::new("fruit", vec!["apple", "banana"]),
//!     TreeGroup::new("veg", vec!["carrot"]),
//! ]);
//!
//! assert_eq!(state.item_count(), 2);
//! state.toggle_group(0).unwrap();
//! assert_eq!(state.item_count(), 4);
//! assert_eq!(
//!     state.resolve(1).unwrap(),
//!     RowAddress::SubItem { group_index: 0, sub_index: 0 },
//! );
//! ```

mod adapter;
mod error;
mod group;
mod row;
mod state;
mod update;

pub use adapter::*;
pub use error::*;
pub use group::*;
pub use row::*;
pub use state::*;
pub use update::*;
