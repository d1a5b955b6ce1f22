//! Display formatting for terminal output

pub mod entry;

pub use entry::{format_entry_detail, format_entry_list};
