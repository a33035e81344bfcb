//! Decoding of marketplace CSV text into rows.
//!
//! A single quote-aware character scan splits the whole input into records,
//! so quoted fields may legally contain commas, escaped quotes and line
//! breaks. Header names are mapped to canonical columns by name; data rows
//! with a mismatched field count are skipped and counted, never silently
//! misaligned.

use log::{debug, info, warn};

use crate::csv_codec::row::MarketplaceRow;
use crate::csv_codec::schema::Column;
use crate::error::{InventoryError, Result};

/// Outcome of decoding one CSV document.
#[derive(Debug, Default)]
pub struct CsvImport {
    /// In-stock rows, in input order.
    pub rows: Vec<MarketplaceRow>,
    /// Data records rejected for a field-count mismatch.
    pub skipped_rows: usize,
    /// Records dropped because their quantity was zero or absent.
    pub out_of_stock_rows: usize,
}

/// Decodes marketplace CSV text.
///
/// Fails only when no recognizable header is present; malformed data rows
/// are skipped and reported through [`CsvImport::skipped_rows`].
pub fn decode(text: &str) -> Result<CsvImport> {
    let records = split_records(text);
    let mut records = records.into_iter();

    let header = records.next().ok_or(InventoryError::MissingHeader)?;
    let columns: Vec<Option<Column>> = header
        .iter()
        .map(|name| Column::from_header(name))
        .collect();
    if columns.iter().all(|c| c.is_none()) {
        return Err(InventoryError::MissingHeader);
    }
    debug!(
        "Header declares {} columns ({} recognized)",
        header.len(),
        columns.iter().filter(|c| c.is_some()).count()
    );

    let mut import = CsvImport::default();

    for (index, record) in records.enumerate() {
        let line = index + 2; // 1-indexed, after the header
        if record.len() != header.len() {
            warn!(
                "{}",
                InventoryError::MalformedRow {
                    line,
                    expected: header.len(),
                    got: record.len(),
                }
            );
            import.skipped_rows += 1;
            continue;
        }

        let mut row = MarketplaceRow::default();
        for (column, value) in columns.iter().zip(record) {
            if let Some(column) = column {
                row.set_field(*column, normalize_field(&value));
            }
        }

        // Quantity 0 means "not in stock" in the marketplace format
        if row.quantity_value() == 0 {
            debug!("Dropping out-of-stock record at line {line}");
            import.out_of_stock_rows += 1;
            continue;
        }

        import.rows.push(row);
    }

    info!(
        "Decoded {} rows ({} malformed skipped, {} out of stock)",
        import.rows.len(),
        import.skipped_rows,
        import.out_of_stock_rows
    );
    Ok(import)
}

/// Splits raw text into records of fields.
///
/// State machine per field: a `"` outside quoted-mode enters it, a doubled
/// `""` inside quoted-mode emits one literal quote, a lone `"` inside
/// quoted-mode leaves it. `,` and line breaks act as separators only outside
/// quoted-mode; everything else is taken verbatim. Blank records are
/// discarded.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                record.push(std::mem::take(&mut field));
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {
                // Consumed together with the '\n' below
            }
            '\n' if !in_quotes => {
                record.push(std::mem::take(&mut field));
                flush_record(&mut records, &mut record);
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        flush_record(&mut records, &mut record);
    }

    records
}

fn flush_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>) {
    let is_blank = record.len() == 1 && record[0].trim().is_empty();
    if is_blank {
        record.clear();
    } else {
        records.push(std::mem::take(record));
    }
}

/// Normalizes one parsed field to its semantic value.
///
/// A field that trims to nothing decodes to `None`, as does the residual
/// two-character literal `""` left behind by exporters that double-encoded
/// their blank markers. The decoded value is never the string `""`.
fn normalize_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "\"\"" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
