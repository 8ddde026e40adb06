//! Money type and price formatting.
//!
//! Amounts are held as integer minor units (cents) so that display strings
//! never pick up floating-point noise. Catalog feeds supply decimal amounts;
//! those are converted once, at the edge.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CardError;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in a given currency, stored in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding half away from zero.
    ///
    /// ```
    /// use card_core::money::{Money, Currency};
    /// let price = Money::from_decimal(109.5, Currency::USD);
    /// assert_eq!(price.amount_cents, 10950);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Like [`Money::from_decimal`], but rejects negative and non-finite amounts.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Result<Self, CardError> {
        if !amount.is_finite() {
            return Err(CardError::InvalidInput(format!(
                "amount is not a finite number: {}",
                amount
            )));
        }
        if amount < 0.0 {
            return Err(CardError::InvalidInput(format!(
                "amount must not be negative: {}",
                amount
            )));
        }
        Ok(Self::from_decimal(amount, currency))
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Re-express the same decimal amount in `currency`.
    ///
    /// Catalog feeds carry bare numbers; this tags them with the storefront's
    /// currency. No exchange rate is applied.
    pub fn in_currency(&self, currency: Currency) -> Self {
        if self.currency == currency {
            return *self;
        }
        Self::from_decimal(self.to_decimal(), currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Parse a string produced by [`Money::display`] back into a value.
    ///
    /// Parsing is exact: the fractional digits are read as minor units rather
    /// than going through `f64`.
    pub fn parse_display(s: &str, currency: Currency) -> Result<Self, CardError> {
        let invalid = || CardError::InvalidInput(format!("unparsable price: {:?}", s));

        let body = s.trim().strip_prefix(currency.symbol()).ok_or_else(invalid)?;
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        let places = currency.decimal_places() as usize;
        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };
        if whole.is_empty()
            || frac.len() > places
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = if frac.is_empty() {
            0
        } else {
            // "5" in "$1.5" means 50 cents
            format!("{:0<places$}", frac).parse().map_err(|_| invalid())?
        };

        let cents = whole
            .checked_mul(currency.minor_per_major())
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self::new(if negative { -cents } else { cents }, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a decimal USD amount for display, e.g. `109.5` -> `"$109.50"`.
pub fn format_price(amount: f64) -> String {
    Money::from_decimal(amount, Currency::USD).display()
}

/// Serde adapter reading and writing [`Money`] as a decimal USD number.
///
/// Catalog feeds carry prices as plain JSON numbers (`"price": 109.5`).
/// Negative and non-finite amounts are rejected while parsing.
pub mod dollars {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::try_from_decimal(amount, Currency::USD).map_err(serde::de::Error::custom)
    }

    /// Same as the parent module, for optional amounts.
    pub mod option {
        use super::super::{Currency, Money};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(m) => serializer.serialize_some(&m.to_decimal()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            let amount = Option::<f64>::deserialize(deserializer)?;
            amount
                .map(|a| Money::try_from_decimal(a, Currency::USD))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}
