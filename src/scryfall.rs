//! Scryfall catalog client.
//!
//! Thin glue over the public card search API; the core modules never depend
//! on it and only ever see the normalized [`CardRecord`] it produces.

use serde::Deserialize;

use crate::error::{InventoryError, Result};
use crate::models::{CardPrices, CardRecord};

/// Production API base URL.
pub const SCRYFALL_API: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "TCGInventory/1.0";

/// Scryfall search response page
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<ScryfallCard>,
}

/// Scryfall card response
#[derive(Debug, Deserialize, Clone)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,
    pub set: String,
    pub set_name: String,
    pub collector_number: String,
    pub rarity: String,
    #[serde(default)]
    pub prices: ScryfallPrices,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    /// For double-faced cards, images are in card_faces
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScryfallPrices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

impl ScryfallCard {
    /// Get the primary image URL (normal size)
    pub fn image_url(&self) -> Option<&str> {
        if let Some(ref uris) = self.image_uris {
            return uris.normal.as_deref();
        }
        // For double-faced cards, get front face image
        if let Some(ref faces) = self.card_faces {
            if let Some(face) = faces.first() {
                if let Some(ref uris) = face.image_uris {
                    return uris.normal.as_deref();
                }
            }
        }
        None
    }

    /// Maps the catalog response to the normalized record the core consumes.
    /// A missing USD price degrades to an absent market signal.
    pub fn to_card_record(&self) -> CardRecord {
        CardRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            set_code: self.set.clone(),
            set_name: self.set_name.clone(),
            collector_number: self.collector_number.clone(),
            rarity: self.rarity.clone(),
            image_url: self.image_url().map(str::to_string),
            prices: CardPrices {
                market: self.prices.usd.as_deref().and_then(|p| p.parse().ok()),
                ..Default::default()
            },
        }
    }
}

/// Search the catalog by free-text card name, all printings.
pub async fn search_cards(query: &str) -> Result<Vec<CardRecord>> {
    search_cards_from(SCRYFALL_API, query).await
}

/// Same as [`search_cards`] against an explicit base URL (test seam).
pub async fn search_cards_from(base_url: &str, query: &str) -> Result<Vec<CardRecord>> {
    let url = format!(
        "{}/cards/search?q={}&unique=prints",
        base_url,
        urlencoding::encode(query)
    );

    log::debug!("Searching catalog: {}", url);

    let response = reqwest::Client::new()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(InventoryError::CatalogNotFound(query.to_string()));
    }
    if !status.is_success() {
        return Err(InventoryError::HttpStatus(status));
    }

    let page = response.json::<SearchResponse>().await?;
    if page.data.is_empty() {
        return Err(InventoryError::CatalogNotFound(query.to_string()));
    }

    Ok(page.data.iter().map(ScryfallCard::to_card_record).collect())
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
