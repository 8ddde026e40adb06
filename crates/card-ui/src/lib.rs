//! Leptos components for catalog product cards.
//!
//! Components take a [`CardModel`](card_core::card::CardModel) whose variant
//! was already decided by `card-core` and only switch on it for display.
//!
//! ```rust,ignore
//! use card_core::prelude::*;
//! use card_ui::ShoeGrid;
//!
//! let cards = CardModel::build_all(&items, &config, SystemClock);
//! view! { <ShoeGrid cards=cards theme=config.theme.clone()/> }
//! ```

mod components;
pub mod styles;

pub use components::{ImageBadge, ShoeCard, ShoeGrid, Spacer};
