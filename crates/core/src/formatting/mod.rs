//! Display formatting for currency amounts.

mod currency_format;

pub use currency_format::CurrencyFormat;

#[cfg(test)]
mod currency_format_tests;
