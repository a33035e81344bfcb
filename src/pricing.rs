//! Tiered listing-price calculation.
//!
//! Business policy: no card is listed under $0.50, cheap cards track their
//! low price, expensive cards keep their market price, and everything in
//! between takes the best of low price, the low/low-with-shipping average
//! and market price. A configured name-based exclusion list bypasses the
//! computation entirely in favor of the human-set price.

use log::debug;

use crate::csv_codec::MarketplaceRow;

/// Floor applied by the cheap and standard tiers.
pub const MINIMUM_PRICE: f64 = 0.50;

/// Market price at or below which a card is in the cheap tier.
pub const CHEAP_THRESHOLD: f64 = 0.30;

/// Market price above which a card is in the expensive tier.
pub const EXPENSIVE_THRESHOLD: f64 = 30.0;

/// The three market-price bands driving different pricing formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Cheap,
    Standard,
    Expensive,
}

impl PriceTier {
    pub fn classify(market_price: f64) -> Self {
        if market_price <= CHEAP_THRESHOLD {
            PriceTier::Cheap
        } else if market_price > EXPENSIVE_THRESHOLD {
            PriceTier::Expensive
        } else {
            PriceTier::Standard
        }
    }
}

/// Price signals for one card. All amounts are non-negative; validating
/// them is the caller's contract.
#[derive(Debug, Clone)]
pub struct PricingInput<'a> {
    pub card_name: &'a str,
    pub market_price: f64,
    pub low_price: f64,
    pub low_with_shipping: f64,
    /// Price the user already has on file, if any. Wins for excluded cards.
    pub original_price: Option<f64>,
}

/// Pricing configuration: the name-based exclusion list.
///
/// An excluded name means "trust the human-set price": the computed tiers
/// and the floor are bypassed for any card whose name contains one of the
/// entries, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct PricingRules {
    excluded: Vec<String>,
}

impl PricingRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclusions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: names
                .into_iter()
                .map(|n| n.into().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Parses an exclusion file: one card name per line, blank lines and
    /// `#` comments ignored.
    pub fn from_exclusions_text(text: &str) -> Self {
        Self::with_exclusions(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    pub fn is_excluded(&self, card_name: &str) -> bool {
        let name = card_name.to_lowercase();
        self.excluded.iter().any(|entry| name.contains(entry))
    }

    /// Computes the recommended listing price for one card.
    ///
    /// Negative or NaN signals violate the caller contract and trip a debug
    /// assertion rather than being coerced.
    pub fn calculate(&self, input: &PricingInput) -> f64 {
        debug_assert!(
            input.market_price.is_finite() && input.market_price >= 0.0,
            "market price out of contract: {}",
            input.market_price
        );
        debug_assert!(
            input.low_price.is_finite() && input.low_price >= 0.0,
            "low price out of contract: {}",
            input.low_price
        );
        debug_assert!(
            input.low_with_shipping.is_finite() && input.low_with_shipping >= 0.0,
            "low price with shipping out of contract: {}",
            input.low_with_shipping
        );

        if self.is_excluded(input.card_name) {
            let price = input.original_price.unwrap_or(input.market_price);
            debug!("{:?} is excluded, keeping {price:.2}", input.card_name);
            return round_to_cents(price);
        }

        let price = match PriceTier::classify(input.market_price) {
            PriceTier::Cheap => MINIMUM_PRICE.max(input.low_price),
            PriceTier::Expensive => input.market_price,
            PriceTier::Standard => {
                let average = (input.low_price + input.low_with_shipping) / 2.0;
                MINIMUM_PRICE
                    .max(input.low_price)
                    .max(average)
                    .max(input.market_price)
            }
        };

        round_to_cents(price)
    }

    /// Recalculates the marketplace price of every row in place. The row's
    /// current marketplace price is carried as the human-set price for
    /// excluded cards.
    pub fn reprice_rows(&self, rows: &mut [MarketplaceRow]) {
        for row in rows {
            let input = PricingInput {
                card_name: row.product_name.as_deref().unwrap_or_default(),
                market_price: row.market_price_value(),
                low_price: row.low_price_value(),
                low_with_shipping: row.low_with_shipping_value(),
                original_price: row.marketplace_price_value(),
            };
            let price = self.calculate(&input);
            row.marketplace_price = Some(format!("{price:.2}"));
        }
    }
}

/// Standard round-half-up currency rounding to two decimals.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "pricing_tests.rs"]
mod tests;
