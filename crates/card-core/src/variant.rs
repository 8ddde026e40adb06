//! Card variant classification.
//!
//! A catalog item is shown in one of three variants. Any item with a sale
//! price is `on-sale`. Otherwise an item released within the recency window
//! is `new-release`. Everything else is `default`. An item can qualify for
//! both sale and recency; the sale wins.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CardError;
use crate::item::CatalogItem;
use crate::money::Money;

/// Default recency window in days.
pub const DEFAULT_RECENCY_DAYS: u32 = 30;

/// Display variant of a catalog card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Item carries a sale price.
    OnSale,
    /// Item was released inside the recency window.
    NewRelease,
    /// Neither.
    #[default]
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "on-sale" => Some(Variant::OnSale),
            "new-release" => Some(Variant::NewRelease),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }

    /// Badge label for this variant. Empty for `Default`.
    pub fn badge_text(&self) -> &'static str {
        match self {
            Variant::OnSale => "Sale",
            Variant::NewRelease => "Just Released",
            Variant::Default => "",
        }
    }

    pub fn is_on_sale(&self) -> bool {
        *self == Variant::OnSale
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long after release an item still counts as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    days: u32,
}

impl RecencyWindow {
    /// Create a window of `days` days. Zero is rejected.
    pub fn days(days: u32) -> Result<Self, CardError> {
        if days == 0 {
            return Err(CardError::Config(
                "recency window must be at least one day".to_string(),
            ));
        }
        Ok(Self { days })
    }

    pub fn as_days(&self) -> u32 {
        self.days
    }

    /// True when strictly less than the window has elapsed since `release_date`
    /// (taken as midnight UTC). Release dates after `now` count as recent.
    pub fn contains(&self, release_date: NaiveDate, now: DateTime<Utc>) -> bool {
        let released_at = release_date.and_time(chrono::NaiveTime::MIN).and_utc();
        now.signed_duration_since(released_at) < TimeDelta::days(i64::from(self.days))
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_RECENCY_DAYS,
        }
    }
}

/// Variant classifier with a configurable recency window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    window: RecencyWindow,
}

impl Classifier {
    pub fn new(window: RecencyWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> RecencyWindow {
        self.window
    }

    /// Classify from the two fields that matter. First match wins. Pure.
    pub fn classify(
        &self,
        sale_price: Option<Money>,
        release_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Variant {
        if sale_price.is_some() {
            Variant::OnSale
        } else if self.window.contains(release_date, now) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    /// Classify a catalog item. Only `sale_price` and `release_date` are read.
    pub fn classify_item(&self, item: &CatalogItem, now: DateTime<Utc>) -> Variant {
        self.classify(item.sale_price, item.release_date, now)
    }
}

/// Classify with the default 30-day recency window.
pub fn classify(sale_price: Option<Money>, release_date: NaiveDate, now: DateTime<Utc>) -> Variant {
    Classifier::default().classify(sale_price, release_date, now)
}

/// Whether `release_date` falls inside the default recency window.
pub fn is_recent(release_date: NaiveDate, now: DateTime<Utc>) -> bool {
    RecencyWindow::default().contains(release_date, now)
}
