//! Encoding of rows back into marketplace CSV text.

use crate::csv_codec::row::MarketplaceRow;
use crate::csv_codec::schema::{Column, HEADERS};

/// Encodes rows as marketplace CSV: header plus one `\n`-terminated line per
/// row, all 16 columns in fixed order. The reserved `Title` column is always
/// written blank.
pub fn encode(rows: &[MarketplaceRow]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for row in rows {
        let mut first = true;
        for column in Column::all() {
            if !first {
                out.push(',');
            }
            first = false;
            let value = match column {
                Column::Title => None,
                _ => row.field(*column),
            };
            out.push_str(&escape_field(value));
        }
        out.push('\n');
    }

    out
}

/// Escapes one field for the wire.
///
/// Null, empty and whitespace-only values encode to zero characters, never a
/// quoted empty string. Other values are quoted only when they contain a
/// comma, a double quote or a line break, with literal quotes doubled.
fn escape_field(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return String::new(),
    };

    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
