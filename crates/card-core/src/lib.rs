//! Catalog product card logic.
//!
//! This crate holds the parts of a product card that carry behaviour:
//!
//! - **Variant**: `on-sale` / `new-release` / `default` classification
//! - **Money**: cents-based prices and `$109.50`-style formatting
//! - **Text**: pluralized labels
//! - **Card**: the view model a rendering layer consumes
//!
//! # Example
//!
//! ```rust
//! use card_core::prelude::*;
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
//! let released = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
//!
//! assert_eq!(classify(None, released, now), Variant::NewRelease);
//! assert_eq!(format_price(109.5), "$109.50");
//! assert_eq!(count_label("Color", 3), "3 Colors");
//! ```

pub mod card;
pub mod clock;
pub mod config;
pub mod error;
pub mod item;
pub mod money;
pub mod text;
pub mod theme;
pub mod variant;

pub use error::CardError;
pub use money::{format_price, Currency, Money};
pub use text::{count_label, pluralize};
pub use variant::{classify, is_recent, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{Badge, CardModel};
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::{CardConfig, CatalogConfig};
    pub use crate::error::CardError;
    pub use crate::item::CatalogItem;
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::text::{count_label, pluralize};
    pub use crate::theme::{Colors, GrayScale, Theme, Weights};
    pub use crate::variant::{classify, is_recent, Classifier, RecencyWindow, Variant};
}
