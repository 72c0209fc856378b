pub const COLUMN_COUNT: usize = 3;
pub const COLUMN_GAP: &str = "     ";

/// Lays `names` out top-to-bottom in exactly [`COLUMN_COUNT`] columns.
///
/// Each column is left-justified to its own longest name, so short rows keep
/// their trailing padding.
pub fn render_grid(names: &[&str]) -> String {
    if names.is_empty() {
        return String::new();
    }
    let rows = row_count(names.len());

    let mut cells: Vec<&str> = names.to_vec();
    cells.resize(rows * COLUMN_COUNT, "");

    let columns: Vec<Vec<String>> = cells.chunks(rows).map(justify_column).collect();

    (0..rows)
        .map(|row| {
            columns
                .iter()
                .map(|column| column[row].as_str())
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rows needed to fit `count` names in [`COLUMN_COUNT`] columns.
pub fn row_count(count: usize) -> usize {
    count.div_ceil(COLUMN_COUNT)
}

fn justify_column(column: &[&str]) -> Vec<String> {
    let width = column.iter().map(|name| name.chars().count()).max().unwrap_or(0);
    column
        .iter()
        .map(|name| format!("{:<width$}", name, width = width))
        .collect()
}
