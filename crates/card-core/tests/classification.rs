//! Classification behaviour across a realistic catalog.

use card_core::prelude::*;
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 17, 45, 0).unwrap()
}

fn days_ago(days: i64) -> NaiveDate {
    now().date_naive() - TimeDelta::days(days)
}

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD)
}

#[test]
fn sale_price_always_means_on_sale() {
    for days in [0, 1, 15, 29, 30, 31, 45, 365, 3650] {
        for amount in [0.0, 0.01, 50.0, 120.0] {
            assert_eq!(
                classify(Some(usd(amount)), days_ago(days), now()),
                Variant::OnSale,
                "sale {} released {} days ago",
                amount,
                days
            );
        }
    }
}

#[test]
fn recent_release_without_sale_is_new() {
    for days in 0..30 {
        assert_eq!(classify(None, days_ago(days), now()), Variant::NewRelease);
    }
}

#[test]
fn older_release_without_sale_is_default() {
    for days in [30, 31, 45, 90, 365] {
        assert_eq!(classify(None, days_ago(days), now()), Variant::Default);
    }
}

#[test]
fn scenario_forty_five_days_old() {
    assert_eq!(classify(None, days_ago(45), now()), Variant::Default);
}

#[test]
fn scenario_sale_beats_recency() {
    assert_eq!(classify(Some(usd(120.0)), days_ago(1), now()), Variant::OnSale);
}

#[test]
fn classification_ignores_other_fields() {
    let base = CatalogItem::new(
        "legends",
        "Legends",
        "/assets/legends.jpg",
        usd(109.5),
        days_ago(3),
        1,
    );
    let mut other = base.clone();
    other.slug = "something-else".to_string();
    other.name = "Renamed".to_string();
    other.image_src = String::new();
    other.price = usd(1.0);
    other.num_of_colors = 12;

    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify_item(&base, now()),
        classifier.classify_item(&other, now())
    );
}

#[test]
fn catalog_json_to_cards() {
    let json = r#"[
        {"slug": "tank-tops", "name": "Tank Tops", "imageSrc": "/a.jpg",
         "price": 180, "salePrice": 140, "releaseDate": "2026-10-15", "numOfColors": 2},
        {"slug": "joyride", "name": "Joyride", "imageSrc": "/b.jpg",
         "price": 95.5, "releaseDate": "2026-10-10", "numOfColors": 1},
        {"slug": "legends", "name": "Legends", "imageSrc": "/c.jpg",
         "price": 109.5, "releaseDate": "2026-05-01", "numOfColors": 3}
    ]"#;

    let items = CatalogItem::parse_catalog(json).unwrap();
    for item in &items {
        item.validate().unwrap();
    }

    let cards = CardModel::build_all(&items, &CardConfig::default(), FixedClock(now()));

    assert_eq!(cards[0].variant, Variant::OnSale);
    assert_eq!(cards[0].price_label, "$180.00");
    assert_eq!(cards[0].sale_price_label.as_deref(), Some("$140.00"));
    assert_eq!(cards[0].colors_label, "2 Colors");

    assert_eq!(cards[1].variant, Variant::NewRelease);
    assert_eq!(cards[1].price_label, "$95.50");
    assert_eq!(cards[1].colors_label, "1 Color");

    assert_eq!(cards[2].variant, Variant::Default);
    assert_eq!(cards[2].price_label, "$109.50");
    assert!(cards[2].badge.is_none());
}

#[test]
fn formatted_prices_parse_back() {
    for amount in [50.0, 50.5, 109.5] {
        let shown = format_price(amount);
        let parsed = Money::parse_display(&shown, Currency::USD).unwrap();
        assert_eq!(parsed, usd(amount));
    }
    assert_eq!(format_price(50.0), "$50.00");
    assert_eq!(format_price(50.5), "$50.50");
}
