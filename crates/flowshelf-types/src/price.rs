//! Workflow price parsing.
//!
//! Catalog entries carry their price as a string: either the literal `Free`
//! or a non-negative number. Anything else is kept verbatim as
//! [`Price::Malformed`] so a bad catalog entry never takes the page down.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The literal used by the catalog for zero-cost workflows.
pub const FREE: &str = "Free";

/// A parsed workflow price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawPrice", into = "String")]
pub enum Price {
    /// The literal `Free`.
    #[default]
    Free,
    /// A finite, non-negative amount. `raw` is the trimmed source text and is
    /// what gets displayed.
    Amount { raw: String, value: f64 },
    /// Neither `Free` nor a usable number.
    Malformed(String),
}

impl Price {
    /// Parse a catalog price string.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == FREE {
            return Price::Free;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Price::Amount {
                raw: trimmed.to_string(),
                value,
            },
            _ => Price::Malformed(raw.to_string()),
        }
    }

    /// Price of an entry that omits one. Hidden on cards and reported as a
    /// data problem.
    pub fn missing() -> Self {
        Price::Malformed(String::new())
    }

    /// Whether this is the `Free` literal.
    pub fn is_free(&self) -> bool {
        matches!(self, Price::Free)
    }

    /// Whether the price failed to parse.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Price::Malformed(_))
    }

    /// Numeric value used by the price comparators.
    ///
    /// `Free` maps to zero. Malformed prices have no value; the sort engine
    /// places them after every well-formed price.
    pub fn sort_value(&self) -> Option<f64> {
        match self {
            Price::Free => Some(0.0),
            Price::Amount { value, .. } => Some(*value),
            Price::Malformed(_) => None,
        }
    }

    /// Label shown on a card: `Free`, `$<amount>`, or nothing at all when the
    /// catalog left the price blank.
    pub fn display(&self) -> Option<String> {
        match self {
            Price::Free => Some(FREE.to_string()),
            Price::Amount { raw, .. } => Some(format!("${raw}")),
            Price::Malformed(raw) if raw.trim().is_empty() => None,
            Price::Malformed(raw) => Some(format!("${}", raw.trim())),
        }
    }

    /// The source string this price was parsed from.
    pub fn as_raw(&self) -> &str {
        match self {
            Price::Free => FREE,
            Price::Amount { raw, .. } => raw,
            Price::Malformed(raw) => raw,
        }
    }
}

/// Price as it appears in a catalog source. YAML and JSON authors write
/// `price: 12.5` as often as `price: "12.5"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
}

impl From<RawPrice> for Price {
    fn from(raw: RawPrice) -> Self {
        match raw {
            RawPrice::Text(text) => Price::parse(&text),
            RawPrice::Number(value) => Price::parse(&value.to_string()),
        }
    }
}

impl From<String> for Price {
    fn from(raw: String) -> Self {
        Price::parse(&raw)
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Price::parse(raw)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        match price {
            Price::Free => FREE.to_string(),
            Price::Amount { raw, .. } => raw,
            Price::Malformed(raw) => raw,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_free_literal() {
        assert_eq!(Price::parse("Free"), Price::Free);
        assert_eq!(Price::parse("  Free "), Price::Free);
    }

    #[test]
    fn free_is_case_sensitive() {
        assert!(Price::parse("free").is_malformed());
        assert!(Price::parse("FREE").is_malformed());
    }

    #[test]
    fn parse_numeric_amounts() {
        let price = Price::parse("12.50");
        assert_eq!(price.sort_value(), Some(12.5));
        assert_eq!(price.display().as_deref(), Some("$12.50"));
        assert!(!price.is_free());

        assert_eq!(Price::parse("0").sort_value(), Some(0.0));
    }

    #[test]
    fn negative_and_non_finite_are_malformed() {
        assert!(Price::parse("-3").is_malformed());
        assert!(Price::parse("NaN").is_malformed());
        assert!(Price::parse("inf").is_malformed());
        assert!(Price::parse("12 dollars").is_malformed());
    }

    #[test]
    fn malformed_has_no_sort_value() {
        assert_eq!(Price::parse("call us").sort_value(), None);
    }

    #[test]
    fn display_free_and_blank() {
        assert_eq!(Price::Free.display().as_deref(), Some("Free"));
        assert_eq!(Price::parse("").display(), None);
        assert_eq!(Price::parse("   ").display(), None);
        assert_eq!(
            Price::parse("call us").display().as_deref(),
            Some("$call us")
        );
    }

    #[test]
    fn serde_uses_raw_string() {
        let price: Price = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(price.sort_value(), Some(19.99));
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"19.99\"");

        let free: Price = serde_json::from_str("\"Free\"").unwrap();
        assert!(free.is_free());

        let numeric: Price = serde_json::from_str("25").unwrap();
        assert_eq!(numeric.display().as_deref(), Some("$25"));

        let bad: Price = serde_json::from_str("\"tbd\"").unwrap();
        assert_eq!(serde_json::to_string(&bad).unwrap(), "\"tbd\"");
    }

    #[test]
    fn default_is_free_and_missing_is_blank() {
        assert_eq!(Price::default(), Price::Free);
        assert_eq!(Price::missing(), Price::Malformed(String::new()));
        assert_eq!(Price::missing().sort_value(), None);
    }
}
