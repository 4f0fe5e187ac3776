//! BRL amount conversion

use crate::core::rate::Rates;
use serde::{Deserialize, Serialize};

/// Converted amounts, formatted with two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub dolar: String,
    pub euro: String,
}

impl Conversion {
    /// Returns `None` when either converted amount is not finite.
    pub fn from_brl(real: f64, rates: &Rates) -> Option<Self> {
        let dolar = real * rates.usd;
        let euro = real * rates.eur;
        if !dolar.is_finite() || !euro.is_finite() {
            return None;
        }
        Some(Conversion {
            dolar: format!("{dolar:.2}"),
            euro: format!("{euro:.2}"),
        })
    }
}

/// Parses a BRL amount. Non-finite values are rejected.
pub fn parse_brl(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_from_brl() {
        let rates = Rates { usd: 5.0, eur: 6.0 };
        let conversion = Conversion::from_brl(100.0, &rates).unwrap();
        assert_eq!(conversion.dolar, "500.00");
        assert_eq!(conversion.euro, "600.00");
    }

    #[test]
    fn test_conversion_rounds_to_two_decimals() {
        let rates = Rates {
            usd: 0.1834,
            eur: 0.16789,
        };
        let conversion = Conversion::from_brl(12.5, &rates).unwrap();
        assert_eq!(conversion.dolar, "2.29");
        assert_eq!(conversion.euro, "2.10");
    }

    #[test]
    fn test_conversion_overflow_is_rejected() {
        let rates = Rates { usd: 5.0, eur: 6.0 };
        assert_eq!(Conversion::from_brl(1e308, &rates), None);
        assert_eq!(Conversion::from_brl(-1e308, &rates), None);
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("100"), Some(100.0));
        assert_eq!(parse_brl("12.75"), Some(12.75));
        assert_eq!(parse_brl("-3"), Some(-3.0));
        assert_eq!(parse_brl("1e3"), Some(1000.0));
        assert_eq!(parse_brl("abc"), None);
        assert_eq!(parse_brl(""), None);
        assert_eq!(parse_brl(" 10"), None);
        assert_eq!(parse_brl("NaN"), None);
        assert_eq!(parse_brl("inf"), None);
    }
}
