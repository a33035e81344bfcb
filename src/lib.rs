//! TCG Inventory - card inventory manager
//!
//! Searches a third-party card catalog, records cards into a per-session
//! inventory, and imports/exports that inventory as marketplace-compatible
//! bulk-upload CSV with tiered repricing.

pub mod csv_codec;
pub mod error;
pub mod inventory;
pub mod models;
pub mod pricing;
pub mod scryfall;

// Re-export commonly used items
pub use csv_codec::{decode, encode, CsvImport, MarketplaceRow};
pub use error::{InventoryError, Result};
pub use inventory::{ImportSummary, Inventory};
pub use models::{CardPrices, CardRecord, ConditionSet, InventoryLine};
pub use pricing::{PriceTier, PricingInput, PricingRules, MINIMUM_PRICE};
pub use scryfall::{search_cards, ScryfallCard};
