//! Colour and font-weight table handed to the rendering layer.
//!
//! Defaults reproduce the storefront palette. The table is read-only once
//! built; override it through [`crate::config::CardConfig`].

use serde::{Deserialize, Serialize};

use crate::variant::Variant;

/// Gray ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayScale {
    #[serde(rename = "100")]
    pub g100: String,
    #[serde(rename = "300")]
    pub g300: String,
    #[serde(rename = "500")]
    pub g500: String,
    #[serde(rename = "700")]
    pub g700: String,
    #[serde(rename = "900")]
    pub g900: String,
}

impl Default for GrayScale {
    fn default() -> Self {
        Self {
            g100: "hsl(185deg 5% 95%)".to_string(),
            g300: "hsl(190deg 5% 80%)".to_string(),
            g500: "hsl(196deg 4% 60%)".to_string(),
            g700: "hsl(220deg 5% 40%)".to_string(),
            g900: "hsl(220deg 3% 20%)".to_string(),
        }
    }
}

/// Named colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub white: String,
    pub gray: GrayScale,
    pub primary: String,
    pub secondary: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            gray: GrayScale::default(),
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
        }
    }
}

/// CSS font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}

/// Complete styling table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Colors,
    pub weights: Weights,
}

impl Theme {
    /// Badge background for a variant. `Default` has no badge.
    pub fn variant_color(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::OnSale => Some(&self.colors.primary),
            Variant::NewRelease => Some(&self.colors.secondary),
            Variant::Default => None,
        }
    }
}
