//! Text layouts for a collected listing.
//!
//! [`render`] dispatches on [`ListingOptions::detailed`]: the compact
//! three-column [`grid`] or the long-format [`table`].

pub mod grid;
pub mod table;

use crate::models::file_entry::Entry;
use crate::models::options::ListingOptions;

/// Formats `entries` without a trailing newline. Never fails.
pub fn render(entries: &[Entry], options: &ListingOptions) -> String {
    if options.detailed {
        table::render_table(entries)
    } else {
        let names: Vec<&str> = entries.iter().map(Entry::name).collect();
        grid::render_grid(&names)
    }
}
