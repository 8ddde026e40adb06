//! Card components.

use card_core::card::{Badge, CardModel};
use card_core::theme::Theme;
use leptos::prelude::*;

use crate::styles;

/// A single catalog card linking to the item page.
///
/// Every colour and weight on the card, badge included, comes from `theme`.
#[component]
pub fn ShoeCard(card: CardModel, theme: Theme) -> impl IntoView {
    let CardModel {
        href,
        name,
        image_src,
        variant,
        badge,
        price_label,
        sale_price_label,
        colors_label,
        ..
    } = card;

    let badge_theme = theme.clone();
    let name_style = styles::name(&theme);
    let price_style = styles::price(variant, &theme);
    let colors_style = styles::color_info(&theme);
    let sale_style = styles::sale_price(&theme);
    let variant_attr = variant.as_str();

    view! {
        <a href=href style=styles::LINK>
            <article class="shoe-card" data-variant=variant_attr>
                <div style=styles::IMAGE_WRAPPER>
                    <img alt="" src=image_src style=styles::IMAGE/>
                    {badge.map(|badge| view! { <ImageBadge badge=badge theme=badge_theme/> })}
                </div>
                <Spacer size=12/>
                <div style=styles::ROW>
                    <h3 style=name_style>{name}</h3>
                    <span style=price_style>{price_label}</span>
                </div>
                <Spacer size=6/>
                <div style=styles::ROW>
                    <p style=colors_style>{colors_label}</p>
                    {sale_price_label.map(|label| view! { <span style=sale_style>{label}</span> })}
                </div>
            </article>
        </a>
    }
}

/// Variant label overlaid on the card image.
#[component]
pub fn ImageBadge(badge: Badge, theme: Theme) -> impl IntoView {
    let style = styles::badge(&badge, &theme);
    view! { <div style=style>{badge.text}</div> }
}

/// Empty block of `size` pixels.
#[component]
pub fn Spacer(size: u32) -> impl IntoView {
    let style = styles::spacer(size);
    view! { <span style=style></span> }
}

/// Responsive grid of cards.
#[component]
pub fn ShoeGrid(cards: Vec<CardModel>, theme: Theme) -> impl IntoView {
    tracing::debug!(count = cards.len(), "rendering card grid");

    view! {
        <div
            class="shoe-grid"
            style="display: grid; grid-template-columns: repeat(auto-fill, minmax(275px, 1fr)); gap: 32px;"
        >
            {cards.into_iter().map(|card| {
                let theme = theme.clone();
                view! { <ShoeCard card=card theme=theme/> }
            }).collect::<Vec<_>>()}
        </div>
    }
}
