//! Catalog item input record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::money::{dollars, Currency, Money};

/// A catalog item as supplied by the storefront data layer.
///
/// JSON field names are camelCase and prices are decimal dollars:
///
/// ```json
/// { "slug": "tank-tops", "name": "Tank Tops", "imageSrc": "/assets/tank.jpg",
///   "price": 180, "salePrice": 140, "releaseDate": "2026-10-01", "numOfColors": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// URL-friendly slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image_src: String,
    /// Base price.
    #[serde(with = "dollars")]
    pub price: Money,
    /// Discounted price, when the item is on sale.
    #[serde(default, with = "dollars::option", skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,
    /// Release date.
    pub release_date: NaiveDate,
    /// Number of colour options.
    pub num_of_colors: u32,
}

impl CatalogItem {
    /// Create an item with no sale price.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        release_date: NaiveDate,
        num_of_colors: u32,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    /// Set a sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Tag both prices with `currency`, keeping their decimal amounts.
    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.price = self.price.in_currency(currency);
        self.sale_price = self.sale_price.map(|p| p.in_currency(currency));
        self
    }

    /// Parse an ISO `YYYY-MM-DD` release date.
    pub fn parse_release_date(s: &str) -> Result<NaiveDate, CardError> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse a JSON catalog (an array of items).
    pub fn parse_catalog(json: &str) -> Result<Vec<Self>, CardError> {
        let items: Vec<Self> = serde_json::from_str(json)?;
        tracing::debug!(count = items.len(), "parsed catalog");
        Ok(items)
    }

    /// Parse a JSON catalog whose amounts are in `currency`.
    pub fn parse_catalog_in(json: &str, currency: Currency) -> Result<Vec<Self>, CardError> {
        Ok(Self::parse_catalog(json)?
            .into_iter()
            .map(|item| item.in_currency(currency))
            .collect())
    }

    /// Check the preconditions classification assumes.
    ///
    /// Rejects negative prices. A sale price above the base price is allowed.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.price.is_negative() {
            return Err(CardError::InvalidInput(format!(
                "{}: price must not be negative",
                self.slug
            )));
        }
        if self.sale_price.is_some_and(|p| p.is_negative()) {
            return Err(CardError::InvalidInput(format!(
                "{}: sale price must not be negative",
                self.slug
            )));
        }
        Ok(())
    }
}
