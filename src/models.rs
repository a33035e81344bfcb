//! Domain types shared by the codec, pricing engine and inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

/// Catalog price signals for a single card, in USD.
///
/// Any signal may be absent; downstream code treats a missing price as
/// blank/zero rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPrices {
    pub market: Option<f64>,
    pub low: Option<f64>,
    pub low_with_shipping: Option<f64>,
    pub direct_low: Option<f64>,
}

/// A normalized catalog entry. Immutable once fetched; the inventory line
/// that references it owns its copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Opaque identifier from the catalog
    pub id: String,
    pub name: String,
    /// Short set code (e.g. "lea")
    pub set_code: String,
    pub set_name: String,
    pub collector_number: String,
    pub rarity: String,
    pub image_url: Option<String>,
    pub prices: CardPrices,
}

/// The set of condition labels accepted when building inventory lines.
///
/// The valid labels are operator configuration, not a code invariant: two
/// different grading scales circulate in marketplace exports, so callers may
/// swap in their own table.
#[derive(Debug, Clone)]
pub struct ConditionSet {
    labels: Vec<String>,
}

impl Default for ConditionSet {
    fn default() -> Self {
        Self::new(&[
            "Near Mint",
            "Lightly Played",
            "Moderately Played",
            "Heavily Played",
            "Damaged",
        ])
    }
}

impl ConditionSet {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, condition: &str) -> bool {
        self.labels.iter().any(|l| l == condition)
    }

    /// Validates a condition label, returning it as an owned string.
    pub fn validate(&self, condition: &str) -> Result<String> {
        if self.contains(condition) {
            Ok(condition.to_string())
        } else {
            Err(InventoryError::InvalidCondition(condition.to_string()))
        }
    }
}

/// Validates a quantity: must be a positive integer.
pub fn validate_quantity(quantity: i64) -> Result<u32> {
    if quantity >= 1 {
        Ok(quantity as u32)
    } else {
        Err(InventoryError::InvalidQuantity(quantity))
    }
}

/// Validates a listing price: must be a finite non-negative number.
pub fn validate_price(price: f64) -> Result<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(InventoryError::InvalidPrice(price))
    }
}

/// One row of held stock: a card plus quantity, condition and listing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub card: CardRecord,
    quantity: u32,
    condition: String,
    price: f64,
    pub added_at: DateTime<Utc>,
}

impl InventoryLine {
    /// Builds a validated line. Rejects quantity < 1, negative price and
    /// conditions outside the configured set.
    pub fn new(
        card: CardRecord,
        quantity: i64,
        condition: &str,
        price: f64,
        conditions: &ConditionSet,
    ) -> Result<Self> {
        Ok(Self {
            card,
            quantity: validate_quantity(quantity)?,
            condition: conditions.validate(condition)?,
            price: validate_price(price)?,
            added_at: Utc::now(),
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Listing price times quantity.
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn set_quantity(&mut self, quantity: i64) -> Result<()> {
        self.quantity = validate_quantity(quantity)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> Result<()> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn set_condition(&mut self, condition: &str, conditions: &ConditionSet) -> Result<()> {
        self.condition = conditions.validate(condition)?;
        Ok(())
    }
}
