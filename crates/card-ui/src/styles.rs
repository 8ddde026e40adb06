//! Inline style builders.
//!
//! Each takes the card's [`Theme`] so colours and weights never come from
//! globals. One card is always styled from a single theme.

use card_core::card::Badge;
use card_core::theme::Theme;
use card_core::variant::Variant;

pub const LINK: &str = "text-decoration: none; color: inherit;";
pub const IMAGE_WRAPPER: &str = "position: relative;";
pub const IMAGE: &str = "width: 100%; border-radius: 16px 16px 4px 4px;";
pub const ROW: &str = "font-size: 1rem; display: flex; justify-content: space-between;";

/// Badge overlay pinned to the top-right of the image. Background is the
/// theme colour for the badge's variant.
pub fn badge(badge: &Badge, theme: &Theme) -> String {
    let background = theme.variant_color(badge.variant).unwrap_or("transparent");
    format!(
        "position: absolute; top: 12px; right: -4px; color: {}; background-color: {}; \
         height: 32px; font-size: {}rem; font-weight: {}; line-height: 32px; \
         border-radius: 2px; padding: 0 10px;",
        theme.colors.white,
        background,
        14.0 / 16.0,
        theme.weights.bold
    )
}

pub fn name(theme: &Theme) -> String {
    format!(
        "font-weight: {}; color: {};",
        theme.weights.medium, theme.colors.gray.g900
    )
}

/// Base price; struck through and muted when the item is on sale.
pub fn price(variant: Variant, theme: &Theme) -> String {
    match variant {
        Variant::OnSale => format!(
            "color: {}; text-decoration: line-through;",
            theme.colors.gray.g700
        ),
        Variant::NewRelease | Variant::Default => {
            "color: inherit; text-decoration: none;".to_string()
        }
    }
}

pub fn color_info(theme: &Theme) -> String {
    format!("color: {};", theme.colors.gray.g700)
}

pub fn sale_price(theme: &Theme) -> String {
    format!(
        "font-weight: {}; color: {};",
        theme.weights.medium, theme.colors.primary
    )
}

/// Fixed-size block used for vertical rhythm.
pub fn spacer(size: u32) -> String {
    format!("display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;")
}
