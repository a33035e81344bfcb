//! The session inventory aggregate.
//!
//! Owned explicitly by the caller and constructed fresh per session; there
//! is no ambient global state. Mutations validate first and reject the
//! single operation on failure, leaving existing lines untouched.

use log::{info, warn};

use crate::csv_codec::{self, MarketplaceRow};
use crate::error::{InventoryError, Result};
use crate::models::{CardRecord, ConditionSet, InventoryLine};
use crate::pricing::{PricingInput, PricingRules};

/// Counters reported by a CSV import.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    /// Lines added to the inventory.
    pub imported: usize,
    /// Malformed CSV records skipped by the codec.
    pub skipped_rows: usize,
    /// Records dropped for zero/absent quantity.
    pub out_of_stock_rows: usize,
    /// Decoded rows rejected by line validation (bad condition or price).
    pub rejected_rows: usize,
}

/// The user's held stock for one session.
pub struct Inventory {
    lines: Vec<InventoryLine>,
    conditions: ConditionSet,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_conditions(ConditionSet::default())
    }

    /// Builds an inventory accepting a caller-supplied condition table.
    pub fn with_conditions(conditions: ConditionSet) -> Self {
        Self {
            lines: Vec::new(),
            conditions,
        }
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    /// Records a searched card into the inventory.
    pub fn add_card(
        &mut self,
        card: CardRecord,
        quantity: i64,
        condition: &str,
        price: f64,
    ) -> Result<&InventoryLine> {
        let line = InventoryLine::new(card, quantity, condition, price, &self.conditions)?;
        info!(
            "Adding {} x{} ({}) at {:.2}",
            line.card.name,
            line.quantity(),
            line.condition(),
            line.price()
        );
        self.lines.push(line);
        Ok(self.lines.last().unwrap())
    }

    /// Removes and returns the line at `index`.
    pub fn remove(&mut self, index: usize) -> Result<InventoryLine> {
        if index >= self.lines.len() {
            return Err(InventoryError::InvalidIndex(index));
        }
        Ok(self.lines.remove(index))
    }

    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<()> {
        self.line_mut(index)?.set_quantity(quantity)
    }

    pub fn update_price(&mut self, index: usize, price: f64) -> Result<()> {
        self.line_mut(index)?.set_price(price)
    }

    pub fn update_condition(&mut self, index: usize, condition: &str) -> Result<()> {
        let conditions = self.conditions.clone();
        self.line_mut(index)?.set_condition(condition, &conditions)
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut InventoryLine> {
        self.lines
            .get_mut(index)
            .ok_or(InventoryError::InvalidIndex(index))
    }

    pub fn get(&self, index: usize) -> Option<&InventoryLine> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of listing price times quantity over all lines.
    pub fn total_value(&self) -> f64 {
        self.lines.iter().map(InventoryLine::total_value).sum()
    }

    /// Total number of physical cards held.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity() as u64).sum()
    }

    /// Case-insensitive substring search over card names.
    pub fn find_by_name(&self, query: &str) -> Vec<&InventoryLine> {
        let query = query.to_lowercase();
        self.lines
            .iter()
            .filter(|l| l.card.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Imports marketplace CSV text, appending one line per in-stock row.
    ///
    /// A missing header aborts the import with the inventory untouched.
    /// Rows that fail line validation are rejected individually and
    /// counted; everything else is preserved in input order.
    pub fn import_csv(&mut self, text: &str) -> Result<ImportSummary> {
        let import = csv_codec::decode(text)?;

        let mut summary = ImportSummary {
            skipped_rows: import.skipped_rows,
            out_of_stock_rows: import.out_of_stock_rows,
            ..Default::default()
        };

        for row in &import.rows {
            match row.to_line(&self.conditions) {
                Ok(line) => {
                    self.lines.push(line);
                    summary.imported += 1;
                }
                Err(e) => {
                    warn!(
                        "Rejecting row for {:?}: {e}",
                        row.product_name.as_deref().unwrap_or("<unnamed>")
                    );
                    summary.rejected_rows += 1;
                }
            }
        }

        info!(
            "Imported {} lines ({} malformed, {} out of stock, {} rejected)",
            summary.imported, summary.skipped_rows, summary.out_of_stock_rows, summary.rejected_rows
        );
        Ok(summary)
    }

    /// Serializes the lines as a JSON session dump.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.lines)?)
    }

    /// Replaces the inventory with lines from a JSON session dump. On a
    /// parse failure the current lines are left untouched.
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        self.lines = serde_json::from_str(text)?;
        Ok(())
    }

    /// Exports the inventory as marketplace CSV, computing each line's
    /// marketplace price through the pricing engine. The line's own listing
    /// price rides along as the human-set price for excluded cards.
    pub fn export_csv(&self, rules: &PricingRules) -> Result<String> {
        if self.lines.is_empty() {
            return Err(InventoryError::EmptyInventory);
        }

        let rows: Vec<MarketplaceRow> = self
            .lines
            .iter()
            .map(|line| {
                let prices = &line.card.prices;
                let price = rules.calculate(&PricingInput {
                    card_name: &line.card.name,
                    market_price: prices.market.unwrap_or(0.0),
                    low_price: prices.low.unwrap_or(0.0),
                    low_with_shipping: prices.low_with_shipping.unwrap_or(0.0),
                    original_price: Some(line.price()),
                });
                MarketplaceRow::from_line(line, price)
            })
            .collect();

        Ok(csv_codec::encode(&rows))
    }
}
