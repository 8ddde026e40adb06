//! Presentation-ready card model.
//!
//! Everything the rendering layer needs for one card, with the variant
//! already decided. Components switch on `variant`; they never re-derive it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::config::CardConfig;
use crate::item::CatalogItem;
use crate::text::count_label;
use crate::variant::Variant;

/// Image overlay label.
///
/// Carries the variant rather than a colour; the renderer resolves colours
/// from the same theme it uses for the rest of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: &'static str,
    pub variant: Variant,
}

impl Badge {
    /// Badge for `variant`. `Default` has none.
    pub fn for_variant(variant: Variant) -> Option<Self> {
        match variant {
            Variant::OnSale | Variant::NewRelease => Some(Self {
                text: variant.badge_text(),
                variant,
            }),
            Variant::Default => None,
        }
    }
}

/// View model for a single product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardModel {
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    pub badge: Option<Badge>,
    /// Formatted base price.
    pub price_label: String,
    /// Base price is shown struck through.
    pub price_struck: bool,
    /// Formatted sale price; present only for on-sale cards.
    pub sale_price_label: Option<String>,
    /// e.g. "3 Colors".
    pub colors_label: String,
}

impl CardModel {
    /// Build the card for `item` as of `now`.
    ///
    /// Prices are labelled in the configured catalog currency.
    pub fn build(item: &CatalogItem, config: &CardConfig, now: DateTime<Utc>) -> Self {
        let variant = config.classifier().classify_item(item, now);
        let currency = config.catalog.currency;

        let sale_price_label = match variant {
            Variant::OnSale => item.sale_price.map(|p| p.in_currency(currency).display()),
            Variant::NewRelease | Variant::Default => None,
        };

        tracing::debug!(
            slug = %item.slug,
            variant = variant.as_str(),
            release_date = %item.release_date,
            on_sale = item.sale_price.is_some(),
            "built card"
        );

        Self {
            href: config.item_href(&item.slug),
            name: item.name.clone(),
            image_src: item.image_src.clone(),
            variant,
            badge: Badge::for_variant(variant),
            price_label: item.price.in_currency(currency).display(),
            price_struck: variant.is_on_sale(),
            sale_price_label,
            colors_label: count_label("Color", item.num_of_colors),
        }
    }

    /// Build using a clock for the reference time.
    pub fn build_with_clock(item: &CatalogItem, config: &CardConfig, clock: impl Clock) -> Self {
        Self::build(item, config, clock.now())
    }

    /// Build cards for a whole catalog against one reference time.
    pub fn build_all(items: &[CatalogItem], config: &CardConfig, clock: impl Clock) -> Vec<Self> {
        let now = clock.now();
        items.iter().map(|item| Self::build(item, config, now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::money::{Currency, Money};
    use chrono::{NaiveDate, TimeZone};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap())
    }

    fn item(release: (i32, u32, u32)) -> CatalogItem {
        CatalogItem::new(
            "tank-tops",
            "Tank Tops",
            "/assets/tank-tops.jpg",
            Money::new(18000, Currency::USD),
            NaiveDate::from_ymd_opt(release.0, release.1, release.2).unwrap(),
            3,
        )
    }

    #[test]
    fn test_on_sale_card() {
        let item = item((2026, 10, 18)).with_sale_price(Money::new(12000, Currency::USD));
        let card = CardModel::build_with_clock(&item, &CardConfig::default(), clock());

        assert_eq!(card.variant, Variant::OnSale);
        assert_eq!(card.href, "/shoe/tank-tops");
        assert_eq!(card.price_label, "$180.00");
        assert!(card.price_struck);
        assert_eq!(card.sale_price_label.as_deref(), Some("$120.00"));
        assert_eq!(card.colors_label, "3 Colors");

        let badge = card.badge.unwrap();
        assert_eq!(badge.text, "Sale");
        assert_eq!(badge.variant, Variant::OnSale);
    }

    #[test]
    fn test_new_release_card() {
        let card = CardModel::build_with_clock(&item((2026, 10, 5)), &CardConfig::default(), clock());

        assert_eq!(card.variant, Variant::NewRelease);
        assert!(!card.price_struck);
        assert_eq!(card.sale_price_label, None);
        let badge = card.badge.unwrap();
        assert_eq!(badge.text, "Just Released");
        assert_eq!(badge.variant, Variant::NewRelease);
    }

    #[test]
    fn test_default_card_has_no_badge() {
        let card = CardModel::build_with_clock(&item((2026, 9, 4)), &CardConfig::default(), clock());

        assert_eq!(card.variant, Variant::Default);
        assert_eq!(card.badge, None);
        assert!(!card.price_struck);
        assert_eq!(card.sale_price_label, None);
    }

    #[test]
    fn test_config_window_and_prefix_apply() {
        let config = CardConfig::from_toml_str(
            r#"
            [catalog]
            recency_days = 60
            link_prefix = "/sneakers"

            [theme.colors]
            secondary = "teal"
            "#,
        )
        .unwrap();

        let card = CardModel::build_with_clock(&item((2026, 9, 4)), &config, clock());
        assert_eq!(card.variant, Variant::NewRelease);
        assert_eq!(card.href, "/sneakers/tank-tops");
        assert_eq!(card.badge.unwrap().variant, Variant::NewRelease);
    }

    #[test]
    fn test_prices_labelled_in_catalog_currency() {
        let config = CardConfig::from_toml_str("[catalog]\ncurrency = \"EUR\"\n").unwrap();
        let item = item((2026, 10, 18)).with_sale_price(Money::new(12050, Currency::USD));
        let card = CardModel::build_with_clock(&item, &config, clock());

        assert_eq!(card.price_label, "\u{20ac}180.00");
        assert_eq!(card.sale_price_label.as_deref(), Some("\u{20ac}120.50"));

        let config = CardConfig::from_toml_str("[catalog]\ncurrency = \"JPY\"\n").unwrap();
        let card = CardModel::build_with_clock(&item, &config, clock());
        assert_eq!(card.price_label, "\u{00a5}180");
    }

    #[test]
    fn test_badge_for_variant() {
        assert_eq!(Badge::for_variant(Variant::Default), None);
        assert_eq!(
            Badge::for_variant(Variant::OnSale),
            Some(Badge {
                text: "Sale",
                variant: Variant::OnSale
            })
        );
    }

    #[test]
    fn test_build_all_uses_one_instant() {
        let items = vec![
            item((2026, 10, 1)),
            item((2025, 1, 1)).with_sale_price(Money::new(100, Currency::USD)),
            item((2025, 1, 1)),
        ];
        let cards = CardModel::build_all(&items, &CardConfig::default(), clock());
        let variants: Vec<Variant> = cards.iter().map(|c| c.variant).collect();
        assert_eq!(
            variants,
            vec![Variant::NewRelease, Variant::OnSale, Variant::Default]
        );
    }
}
