//! The fixed 16-column marketplace CSV schema.
//!
//! Column order is part of the wire contract for export; on import only the
//! header names are authoritative, since external spreadsheet tools are free
//! to reorder columns.

/// Header names in canonical wire order.
pub const HEADERS: [&str; 16] = [
    "TCGplayer Id",
    "Product Line",
    "Set Name",
    "Product Name",
    "Title",
    "Number",
    "Rarity",
    "Condition",
    "TCG Market Price",
    "TCG Direct Low",
    "TCG Low Price With Shipping",
    "TCG Low Price",
    "Total Quantity",
    "Add to Quantity",
    "TCG Marketplace Price",
    "Photo URL",
];

/// Number of columns in the schema.
pub const COLUMN_COUNT: usize = HEADERS.len();

/// A column of the marketplace schema, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    TcgplayerId,
    ProductLine,
    SetName,
    ProductName,
    Title,
    Number,
    Rarity,
    Condition,
    MarketPrice,
    DirectLow,
    LowWithShipping,
    LowPrice,
    TotalQuantity,
    AddToQuantity,
    MarketplacePrice,
    PhotoUrl,
}

impl Column {
    /// All columns in canonical wire order.
    pub fn all() -> &'static [Column] {
        &[
            Column::TcgplayerId,
            Column::ProductLine,
            Column::SetName,
            Column::ProductName,
            Column::Title,
            Column::Number,
            Column::Rarity,
            Column::Condition,
            Column::MarketPrice,
            Column::DirectLow,
            Column::LowWithShipping,
            Column::LowPrice,
            Column::TotalQuantity,
            Column::AddToQuantity,
            Column::MarketplacePrice,
            Column::PhotoUrl,
        ]
    }

    /// Maps a header cell to its canonical column. The lookup is by exact
    /// name after trimming, never by position.
    pub fn from_header(name: &str) -> Option<Column> {
        match name.trim() {
            "TCGplayer Id" => Some(Column::TcgplayerId),
            "Product Line" => Some(Column::ProductLine),
            "Set Name" => Some(Column::SetName),
            "Product Name" => Some(Column::ProductName),
            "Title" => Some(Column::Title),
            "Number" => Some(Column::Number),
            "Rarity" => Some(Column::Rarity),
            "Condition" => Some(Column::Condition),
            "TCG Market Price" => Some(Column::MarketPrice),
            "TCG Direct Low" => Some(Column::DirectLow),
            "TCG Low Price With Shipping" => Some(Column::LowWithShipping),
            "TCG Low Price" => Some(Column::LowPrice),
            "Total Quantity" => Some(Column::TotalQuantity),
            "Add to Quantity" => Some(Column::AddToQuantity),
            "TCG Marketplace Price" => Some(Column::MarketplacePrice),
            "Photo URL" => Some(Column::PhotoUrl),
            _ => None,
        }
    }

    /// The canonical header name for this column.
    pub fn header(&self) -> &'static str {
        HEADERS[*self as usize]
    }
}
