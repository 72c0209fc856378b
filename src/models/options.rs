/// Settings for a single listing, fixed before any collection starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Include names starting with `.` (and the `.`/`..` pair).
    pub show_hidden: bool,
    /// Emit entries in descending name order.
    pub reverse: bool,
    /// Long format instead of the three-column grid.
    pub detailed: bool,
}
