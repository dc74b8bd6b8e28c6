//! Widget-level pieces for Grove.
//!
//! Currently holds the row divider decoration used by list hosts.

mod divider;

pub use divider::*;
