//! Display currency selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Money;

/// Currencies offered in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Inr,
    Lkr,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Inr,
        Currency::Lkr,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Inr => "INR",
            Self::Lkr => "LKR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy | Self::Cny => "¥",
            Self::Aud => "A$",
            Self::Cad => "C$",
            Self::Chf => "Fr",
            Self::Inr => "₹",
            Self::Lkr => "රු",
        }
    }

    /// Format an amount with this currency's symbol
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(self.symbol())
    }
}

/// Renders as the settings label, e.g. `EUR (€)`
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.symbol())
    }
}

impl FromStr for Currency {
    type Err = String;

    /// Accepts the ISO code (any case) or the full label `EUR (€)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().split_whitespace().next().unwrap_or_default();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                let known: Vec<_> = Currency::ALL.iter().map(|c| c.code()).collect();
                format!("Unknown currency '{}'. Use one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_and_label() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("LKR (රු)".parse::<Currency>().unwrap(), Currency::Lkr);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(Currency::Gbp.format(Money::from_cents(1999)), "£19.99");
        assert_eq!(Currency::Usd.to_string(), "USD ($)");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"INR\"");
        let c: Currency = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(c, Currency::Chf);
    }
}
