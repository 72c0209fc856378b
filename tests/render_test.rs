use anyhow::Result;
use dirls::services::render::grid::{render_grid, row_count, COLUMN_COUNT};
use dirls::{collect, render, Entry, FileKind, ListingOptions};
use std::fs;
use tempfile::tempdir;
use time::macros::datetime;

const GRID: ListingOptions = ListingOptions {
    show_hidden: false,
    reverse: false,
    detailed: false,
};

const DETAILED: ListingOptions = ListingOptions {
    show_hidden: false,
    reverse: false,
    detailed: true,
};

fn file(name: &str, links: u64, size: u64, blocks: u64) -> Entry {
    Entry::new(
        name,
        FileKind::File,
        0o644,
        links,
        "alice",
        "staff",
        size,
        blocks,
        datetime!(2024-03-14 09:05 UTC),
    )
}

#[test]
fn test_grid_three_files_one_row() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a"), "1")?;
    fs::write(dir.path().join("bb"), "22")?;
    fs::write(dir.path().join("ccc"), "333")?;

    let entries = collect(dir.path(), &GRID)?;
    assert_eq!(render(&entries, &GRID), "a     bb     ccc");
    Ok(())
}

#[test]
fn test_empty_directory_renders() -> Result<()> {
    let dir = tempdir()?;
    let entries = collect(dir.path(), &DETAILED)?;
    assert_eq!(render(&entries, &DETAILED), "total 0");
    assert_eq!(render(&entries, &GRID), "");
    Ok(())
}

#[test]
fn test_grid_shape_for_any_count() {
    let pool: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
    for n in 1..pool.len() {
        let names: Vec<&str> = pool[..n].iter().map(String::as_str).collect();
        let out = render_grid(&names);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), n.div_ceil(3), "n = {n}");
        assert_eq!(rows.len(), row_count(n));

        let cells = rows.len() * COLUMN_COUNT;
        assert!(cells >= n && cells < n + COLUMN_COUNT, "n = {n}");
        for name in &names {
            assert!(out.contains(name));
        }
    }
}

#[test]
fn test_link_width_from_largest_count() {
    let entries = vec![file("one", 1, 0, 0), file("ten", 10, 0, 0)];
    let out = render(&entries, &DETAILED);
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert!(rows[0].starts_with("-rw-r--r--  1 alice"), "{}", rows[0]);
    assert!(rows[1].starts_with("-rw-r--r-- 10 alice"), "{}", rows[1]);
}

#[test]
fn test_detailed_rows_are_aligned() {
    let entries = vec![
        file("file.txt", 1, 1234, 8),
        Entry::new(
            "notes",
            FileKind::Dir,
            0o755,
            10,
            "alice",
            "staff",
            5,
            0,
            datetime!(2024-11-02 17:40 UTC),
        ),
        Entry::new(
            "latest",
            FileKind::Link,
            0o777,
            1,
            "1001",
            "1001",
            0,
            0,
            datetime!(2024-01-09 00:00 UTC),
        ),
    ];

    assert_eq!(
        render(&entries, &DETAILED),
        "total 8\n\
         -rw-r--r--  1 alice staff 1234  3 14 09:05 file.txt\n\
         drwxr-xr-x 10 alice staff    5 11  2 17:40 notes\n\
         lrwxrwxrwx  1 1001 1001    0  1  9 00:00 latest"
    );
}

#[test]
fn test_single_entry_with_zero_size() {
    let out = render(&[file("empty", 1, 0, 0)], &DETAILED);
    assert_eq!(out, "total 0\n-rw-r--r-- 1 alice staff 0  3 14 09:05 empty");
}

#[test]
fn test_total_sums_blocks() {
    let entries = vec![file("a", 1, 1, 8), file("b", 1, 5000, 16), file("c", 1, 0, 0)];
    let out = render(&entries, &DETAILED);
    assert_eq!(out.lines().next(), Some("total 24"));
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn test_reverse_flips_detailed_rows() -> Result<()> {
    let dir = tempdir()?;
    for (name, body) in [("alpha", "1"), ("beta", "22"), ("gamma", "333"), ("delta", "")] {
        fs::write(dir.path().join(name), body)?;
    }
    let reversed = ListingOptions {
        reverse: true,
        ..DETAILED
    };

    let forward = render(&collect(dir.path(), &DETAILED)?, &DETAILED);
    let backward = render(&collect(dir.path(), &reversed)?, &reversed);

    let mut forward_rows: Vec<&str> = forward.lines().collect();
    let backward_rows: Vec<&str> = backward.lines().collect();
    assert_eq!(forward_rows[0], backward_rows[0]);

    forward_rows[1..].reverse();
    assert_eq!(forward_rows, backward_rows);
    Ok(())
}

#[test]
fn test_size_field_width_matches_largest_size() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("small"), "1")?;
    fs::write(dir.path().join("large"), "x".repeat(12345))?;

    let out = render(&collect(dir.path(), &DETAILED)?, &DETAILED);
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    // large sorts first
    assert!(rows[0].contains(" 12345 "), "{}", rows[0]);
    assert!(rows[1].contains("     1 "), "{}", rows[1]);
    Ok(())
}
