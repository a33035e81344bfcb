//! Marketplace CSV codec.
//!
//! The single source of truth for the 16-column bulk-upload dialect used by
//! the pricing marketplace: quoted fields only where content requires it,
//! wire-blank for missing values, header-name (not positional) column
//! mapping on import.
//!
//! # Module Structure
//!
//! - [`schema`] - Column order and the header-name lookup table
//! - [`row`] - [`MarketplaceRow`] and its conversions to/from inventory lines
//! - [`parser`] - Quote-aware decode with malformed-row recovery
//! - [`writer`] - Conditional-quoting encode
//!
//! Decode and encode are inverse for any in-stock row set, including fields
//! with embedded commas, quotes, line breaks and blanks.

pub mod parser;
pub mod row;
pub mod schema;
pub mod writer;

pub use parser::{decode, CsvImport};
pub use row::MarketplaceRow;
pub use schema::{Column, COLUMN_COUNT, HEADERS};
pub use writer::encode;
