//! Error types for tcg_inventory

use thiserror::Error;

/// Unified error type for inventory, codec and catalog operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// CSV input has no recognizable header line; the import is aborted
    #[error("CSV input has no recognizable header line")]
    MissingHeader,
    /// A data row's field count does not match the header
    #[error("row {line}: expected {expected} fields, got {got}")]
    MalformedRow {
        line: usize,
        expected: usize,
        got: usize,
    },
    /// Quantity failed validation (must be a positive integer)
    #[error("quantity must be a positive integer, got {0}")]
    InvalidQuantity(i64),
    /// Price failed validation (must be a non-negative number)
    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
    /// Condition value outside the configured set
    #[error("invalid condition: {0:?}")]
    InvalidCondition(String),
    /// Index outside the inventory bounds
    #[error("invalid inventory index: {0}")]
    InvalidIndex(usize),
    /// Export requested on an empty inventory
    #[error("inventory is empty")]
    EmptyInventory,
    /// HTTP request failed (network error, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code from the catalog
    #[error("catalog returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse a JSON response
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// No cards in the catalog matched the query
    #[error("no cards found matching {0:?}")]
    CatalogNotFound(String),
}

/// Result alias for tcg_inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
