//! Locale-aware currency display configuration.
//!
//! The dashboard originally hard-coded a single locale and currency into
//! every component; here both are explicit configuration. Formatting is
//! display-only and never feeds back into any calculation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::{Error, Result};

/// Currency display configuration: a BCP 47-style locale tag plus an
/// ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub locale: String,
    pub currency_code: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency_code: "USD".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Creates a format config, rejecting empty locale or currency code.
    pub fn new(locale: &str, currency_code: &str) -> Result<Self> {
        if locale.trim().is_empty() {
            return Err(Error::InvalidConfigValue("locale cannot be empty".to_string()));
        }
        if currency_code.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "currency code cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            locale: locale.to_string(),
            currency_code: currency_code.to_uppercase(),
        })
    }

    /// Formats an amount for display, e.g. `-$1,234.56`.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.prec$}", rounded.abs(), prec = DISPLAY_DECIMAL_PRECISION as usize);

        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let (group_sep, decimal_sep) = self.separators();
        let grouped = group_thousands(int_part, group_sep);

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        match self.symbol() {
            Some(symbol) => out.push_str(symbol),
            // No known symbol: fall back to "CODE 1,234.56".
            None => {
                out.push_str(&self.currency_code);
                out.push(' ');
            }
        }
        out.push_str(&grouped);
        if !frac_part.is_empty() {
            out.push(decimal_sep);
            out.push_str(frac_part);
        }
        out
    }

    fn symbol(&self) -> Option<&'static str> {
        match self.currency_code.as_str() {
            "USD" | "CAD" | "AUD" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{a3}"),
            "JPY" => Some("\u{a5}"),
            _ => None,
        }
    }

    /// Grouping and decimal separators for the locale's language tag.
    fn separators(&self) -> (char, char) {
        let language = self
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or("en")
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" => ('.', ','),
            "fr" => (' ', ','),
            _ => (',', '.'),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
