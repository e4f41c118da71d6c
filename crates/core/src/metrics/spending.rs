//! Spending-by-category aggregation.

use std::collections::HashMap;

use super::metrics_model::CategorySpending;
use crate::transactions::Transaction;

/// Sums the absolute value of every expense (negative-amount) transaction
/// per category.
///
/// Output order is the order in which categories are first seen in the
/// input, which keeps chart label order stable across recomputations.
/// The amounts sum to the total absolute expense across the input.
pub fn category_spending(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut totals: Vec<CategorySpending> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match index_by_category.get(transaction.category.as_str()) {
            Some(&i) => totals[i].amount += transaction.amount.abs(),
            None => {
                index_by_category.insert(transaction.category.as_str(), totals.len());
                totals.push(CategorySpending {
                    category: transaction.category.clone(),
                    amount: transaction.amount.abs(),
                });
            }
        }
    }

    totals
}
