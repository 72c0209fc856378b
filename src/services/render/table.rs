use crate::models::file_entry::Entry;
use time::macros::format_description;
use time::OffsetDateTime;

/// Long-format listing: a `total` line followed by one row per entry.
///
/// Link counts and sizes are right-justified to the widest value in the
/// listing. An empty listing is just `total 0`.
pub fn render_table(entries: &[Entry]) -> String {
    let total: u64 = entries.iter().map(Entry::blocks).sum();
    let mut out = format!("total {total}");
    if entries.is_empty() {
        return out;
    }

    let link_width = digit_count(entries.iter().map(Entry::link_count).max().unwrap_or(0));
    let size_width = digit_count(entries.iter().map(Entry::size).max().unwrap_or(0));

    for entry in entries {
        out.push('\n');
        out.push_str(&format_row(entry, link_width, size_width));
    }
    out
}

fn format_row(entry: &Entry, link_width: usize, size_width: usize) -> String {
    format!(
        "{}{} {:>link_width$} {} {} {:>size_width$} {} {}",
        entry.kind().symbol(),
        entry.permissions(),
        entry.link_count(),
        entry.owner(),
        entry.group(),
        entry.size(),
        format_timestamp(entry.modified()),
        entry.name(),
    )
}

/// Month and day space-padded to two columns, 24-hour clock: `" 3 14 09:05"`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let fmt = format_description!("[month padding:space] [day padding:space] [hour]:[minute]");
    at.format(fmt).unwrap_or_else(|e| {
        tracing::warn!("cannot format timestamp {}: {}", at, e);
        String::from("?")
    })
}

/// Decimal digits in `n`; zero has one.
pub fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn digit_count_matches_decimal_length() {
        for n in [0u64, 1, 9, 10, 99, 100, 12345, u64::MAX] {
            assert_eq!(digit_count(n), n.to_string().len(), "n = {n}");
        }
    }

    #[test]
    fn timestamp_pads_month_and_day_with_spaces() {
        assert_eq!(format_timestamp(datetime!(2024-03-14 09:05 UTC)), " 3 14 09:05");
        assert_eq!(format_timestamp(datetime!(2024-03-04 09:05 UTC)), " 3  4 09:05");
        assert_eq!(format_timestamp(datetime!(2024-12-25 23:59 UTC)), "12 25 23:59");
    }

    #[test]
    fn empty_table_is_total_zero() {
        assert_eq!(render_table(&[]), "total 0");
    }
}
