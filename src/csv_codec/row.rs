//! The in-memory form of one marketplace CSV row.

use crate::csv_codec::schema::Column;
use crate::error::Result;
use crate::models::{CardPrices, CardRecord, ConditionSet, InventoryLine};

/// One decoded marketplace row.
///
/// Every field is kept as an `Option<String>`: `None` is the semantic null
/// that a wire-blank field decodes to and re-encodes as. Numbers are only
/// interpreted through the typed accessors, so a decode → encode pass
/// reproduces the stored text exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketplaceRow {
    pub tcgplayer_id: Option<String>,
    pub product_line: Option<String>,
    pub set_name: Option<String>,
    pub product_name: Option<String>,
    pub title: Option<String>,
    pub number: Option<String>,
    pub rarity: Option<String>,
    pub condition: Option<String>,
    pub market_price: Option<String>,
    pub direct_low: Option<String>,
    pub low_with_shipping: Option<String>,
    pub low_price: Option<String>,
    pub total_quantity: Option<String>,
    pub add_to_quantity: Option<String>,
    pub marketplace_price: Option<String>,
    pub photo_url: Option<String>,
}

impl MarketplaceRow {
    /// Returns the stored text for a column.
    pub fn field(&self, column: Column) -> Option<&str> {
        match column {
            Column::TcgplayerId => self.tcgplayer_id.as_deref(),
            Column::ProductLine => self.product_line.as_deref(),
            Column::SetName => self.set_name.as_deref(),
            Column::ProductName => self.product_name.as_deref(),
            Column::Title => self.title.as_deref(),
            Column::Number => self.number.as_deref(),
            Column::Rarity => self.rarity.as_deref(),
            Column::Condition => self.condition.as_deref(),
            Column::MarketPrice => self.market_price.as_deref(),
            Column::DirectLow => self.direct_low.as_deref(),
            Column::LowWithShipping => self.low_with_shipping.as_deref(),
            Column::LowPrice => self.low_price.as_deref(),
            Column::TotalQuantity => self.total_quantity.as_deref(),
            Column::AddToQuantity => self.add_to_quantity.as_deref(),
            Column::MarketplacePrice => self.marketplace_price.as_deref(),
            Column::PhotoUrl => self.photo_url.as_deref(),
        }
    }

    /// Stores the text for a column.
    pub fn set_field(&mut self, column: Column, value: Option<String>) {
        let slot = match column {
            Column::TcgplayerId => &mut self.tcgplayer_id,
            Column::ProductLine => &mut self.product_line,
            Column::SetName => &mut self.set_name,
            Column::ProductName => &mut self.product_name,
            Column::Title => &mut self.title,
            Column::Number => &mut self.number,
            Column::Rarity => &mut self.rarity,
            Column::Condition => &mut self.condition,
            Column::MarketPrice => &mut self.market_price,
            Column::DirectLow => &mut self.direct_low,
            Column::LowWithShipping => &mut self.low_with_shipping,
            Column::LowPrice => &mut self.low_price,
            Column::TotalQuantity => &mut self.total_quantity,
            Column::AddToQuantity => &mut self.add_to_quantity,
            Column::MarketplacePrice => &mut self.marketplace_price,
            Column::PhotoUrl => &mut self.photo_url,
        };
        *slot = value;
    }

    fn parse_currency(field: &Option<String>) -> f64 {
        field
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Market price signal; absent or unparseable values read as 0.
    pub fn market_price_value(&self) -> f64 {
        Self::parse_currency(&self.market_price)
    }

    pub fn low_price_value(&self) -> f64 {
        Self::parse_currency(&self.low_price)
    }

    pub fn low_with_shipping_value(&self) -> f64 {
        Self::parse_currency(&self.low_with_shipping)
    }

    /// The currently listed marketplace price, if any.
    pub fn marketplace_price_value(&self) -> Option<f64> {
        self.marketplace_price
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
    }

    /// Stock quantity; absent or unparseable values read as 0 ("not in stock").
    pub fn quantity_value(&self) -> u32 {
        self.total_quantity
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0)
    }

    /// Builds a row from an inventory line and its calculated marketplace
    /// price. Money is formatted to exactly two decimals; quantities are
    /// plain integers; `Title` stays blank.
    pub fn from_line(line: &InventoryLine, marketplace_price: f64) -> Self {
        let card = &line.card;
        let money = |value: Option<f64>| value.map(|v| format!("{v:.2}"));
        let text = |value: &str| {
            if value.trim().is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        Self {
            tcgplayer_id: text(&card.id),
            product_line: Some("Magic".to_string()),
            set_name: text(&card.set_name),
            product_name: text(&card.name),
            title: None,
            number: text(&card.collector_number),
            // Marketplace exports use one-letter rarity codes
            rarity: card
                .rarity
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string()),
            condition: text(line.condition()),
            market_price: money(card.prices.market),
            direct_low: money(card.prices.direct_low),
            low_with_shipping: money(card.prices.low_with_shipping),
            low_price: money(card.prices.low),
            total_quantity: Some(line.quantity().to_string()),
            add_to_quantity: Some("0".to_string()),
            marketplace_price: Some(format!("{marketplace_price:.2}")),
            photo_url: card.image_url.clone(),
        }
    }

    /// Converts the row back into an inventory line, validating quantity,
    /// price and condition on the way.
    pub fn to_line(&self, conditions: &ConditionSet) -> Result<InventoryLine> {
        let card = CardRecord {
            id: self.tcgplayer_id.clone().unwrap_or_default(),
            name: self.product_name.clone().unwrap_or_default(),
            set_code: String::new(),
            set_name: self.set_name.clone().unwrap_or_default(),
            collector_number: self.number.clone().unwrap_or_default(),
            rarity: self.rarity.clone().unwrap_or_default(),
            image_url: self.photo_url.clone(),
            prices: CardPrices {
                market: self
                    .market_price
                    .as_deref()
                    .and_then(|s| s.trim().parse().ok()),
                low: self.low_price.as_deref().and_then(|s| s.trim().parse().ok()),
                low_with_shipping: self
                    .low_with_shipping
                    .as_deref()
                    .and_then(|s| s.trim().parse().ok()),
                direct_low: self
                    .direct_low
                    .as_deref()
                    .and_then(|s| s.trim().parse().ok()),
            },
        };

        let price = self.marketplace_price_value().unwrap_or(0.0);
        InventoryLine::new(
            card,
            self.quantity_value() as i64,
            self.condition.as_deref().unwrap_or_default(),
            price,
            conditions,
        )
    }
}
