//! Result table and CSV export.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use leadscout_core::ResultRecord;

/// Header row shared by the table and the CSV export.
pub(crate) const HEADERS: [&str; 7] = [
    "Name", "Phone", "Address", "Website", "Email", "Rating", "Reviews",
];

/// Column widths for the terminal table, in characters.
const WIDTHS: [usize; 7] = [32, 18, 40, 32, 32, 6, 7];

/// Placeholder for absent values in the table.
const ABSENT: &str = "\u{2014}";

fn fields(record: &ResultRecord) -> [String; 7] {
    [
        record.title.clone(),
        record.phone.clone().unwrap_or_default(),
        record.address.clone().unwrap_or_default(),
        record.website.clone().unwrap_or_default(),
        record.email.clone(),
        record.rating.map(|r| format!("{r:.1}")).unwrap_or_default(),
        record.reviews.map(|r| r.to_string()).unwrap_or_default(),
    ]
}

/// Shortens `value` to `width` characters, marking the cut with an ellipsis.
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

/// Renders records as a fixed-width table with a header line.
pub(crate) fn render_table(records: &[ResultRecord]) -> String {
    let mut out = String::new();

    let header: Vec<String> = HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());

    for record in records {
        let row: Vec<String> = fields(record)
            .iter()
            .zip(WIDTHS)
            .map(|(value, w)| {
                let cell = if value.is_empty() { ABSENT } else { value.as_str() };
                format!("{:<w$}", truncate(cell, w))
            })
            .collect();
        let _ = writeln!(out, "{}", row.join("  ").trim_end());
    }

    out
}

/// Writes records as CSV: header row first, absent values as empty cells.
///
/// # Errors
///
/// Returns an error if a row cannot be written to `writer`.
pub(crate) fn write_csv<W: io::Write>(writer: W, records: &[ResultRecord]) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.write_record(fields(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the CSV export to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_csv_file(path: &Path, records: &[ResultRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, records)
}
