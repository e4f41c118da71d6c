//! Net worth: account balances plus portfolio market value.

use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::investments::Investment;

/// Sum of all account balances plus the market value of all holdings.
///
/// Plain arithmetic sum at native Decimal precision; negative balances
/// (credit, loans) subtract naturally.
pub fn net_worth(accounts: &[Account], investments: &[Investment]) -> Decimal {
    let balances: Decimal = accounts.iter().map(|account| account.balance).sum();
    let holdings: Decimal = investments
        .iter()
        .map(|investment| investment.market_value())
        .sum();
    balances + holdings
}
