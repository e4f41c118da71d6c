//! Demo dataset for development and demos.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use finboard_core::accounts::{Account, AccountType};
use finboard_core::budgets::{Budget, BudgetPeriod};
use finboard_core::goals::{Goal, GoalType};
use finboard_core::investments::Investment;
use finboard_core::transactions::Transaction;

/// Initial contents for a demo store.
pub struct DemoDataset {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub investments: Vec<Investment>,
    pub goals: Vec<Goal>,
}

fn at(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single().unwrap_or_default()
}

/// Builds the fixed demo dataset.
///
/// Dates are pinned to early 2024 so derived metrics stay stable across
/// runs; the month-window metrics still pick these up because monthly
/// filtering ignores the year.
pub fn demo_dataset() -> DemoDataset {
    let accounts = vec![
        Account {
            id: "acc-1".to_string(),
            name: "Everyday Checking".to_string(),
            account_type: AccountType::Checking,
            balance: dec!(4250.75),
            last_sync: at(2024, 2, 28),
        },
        Account {
            id: "acc-2".to_string(),
            name: "High-Yield Savings".to_string(),
            account_type: AccountType::Savings,
            balance: dec!(12800.00),
            last_sync: at(2024, 2, 28),
        },
        Account {
            id: "acc-3".to_string(),
            name: "Travel Rewards Card".to_string(),
            account_type: AccountType::Credit,
            balance: dec!(-642.30),
            last_sync: at(2024, 2, 27),
        },
        Account {
            id: "acc-4".to_string(),
            name: "Brokerage".to_string(),
            account_type: AccountType::Investment,
            balance: dec!(0.00),
            last_sync: at(2024, 2, 25),
        },
    ];

    let transactions = vec![
        Transaction {
            id: "txn-1".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(5200.00),
            date: at(2024, 2, 1),
            category: "Salary".to_string(),
            description: "Monthly salary".to_string(),
        },
        Transaction {
            id: "txn-2".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-1800.00),
            date: at(2024, 2, 2),
            category: "Rent".to_string(),
            description: "February rent".to_string(),
        },
        Transaction {
            id: "txn-3".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-86.40),
            date: at(2024, 2, 4),
            category: "Food".to_string(),
            description: "Grocery run".to_string(),
        },
        Transaction {
            id: "txn-4".to_string(),
            account_id: "acc-3".to_string(),
            amount: dec!(-42.50),
            date: at(2024, 2, 6),
            category: "Transport".to_string(),
            description: "Fuel".to_string(),
        },
        Transaction {
            id: "txn-5".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-135.20),
            date: at(2024, 2, 9),
            category: "Utilities".to_string(),
            description: "Electricity and water".to_string(),
        },
        Transaction {
            id: "txn-6".to_string(),
            account_id: "acc-3".to_string(),
            amount: dec!(-64.99),
            date: at(2024, 2, 12),
            category: "Entertainment".to_string(),
            description: "Concert tickets".to_string(),
        },
        Transaction {
            id: "txn-7".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-112.75),
            date: at(2024, 2, 16),
            category: "Food".to_string(),
            description: "Dinner out".to_string(),
        },
        Transaction {
            id: "txn-8".to_string(),
            account_id: "acc-2".to_string(),
            amount: dec!(350.00),
            date: at(2024, 2, 20),
            category: "Freelance".to_string(),
            description: "Side project invoice".to_string(),
        },
        Transaction {
            id: "txn-9".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(5200.00),
            date: at(2024, 1, 1),
            category: "Salary".to_string(),
            description: "Monthly salary".to_string(),
        },
        Transaction {
            id: "txn-10".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-1800.00),
            date: at(2024, 1, 2),
            category: "Rent".to_string(),
            description: "January rent".to_string(),
        },
        Transaction {
            id: "txn-11".to_string(),
            account_id: "acc-1".to_string(),
            amount: dec!(-241.30),
            date: at(2024, 1, 14),
            category: "Food".to_string(),
            description: "Groceries".to_string(),
        },
        Transaction {
            id: "txn-12".to_string(),
            account_id: "acc-3".to_string(),
            amount: dec!(-58.00),
            date: at(2024, 1, 21),
            category: "Transport".to_string(),
            description: "Train pass".to_string(),
        },
    ];

    let budgets = vec![
        Budget {
            category: "Food".to_string(),
            limit: dec!(500.00),
            spent: dec!(199.15),
            period: BudgetPeriod::Monthly,
        },
        Budget {
            category: "Transport".to_string(),
            limit: dec!(150.00),
            spent: dec!(42.50),
            period: BudgetPeriod::Monthly,
        },
        Budget {
            category: "Entertainment".to_string(),
            limit: dec!(100.00),
            spent: dec!(64.99),
            period: BudgetPeriod::Monthly,
        },
        Budget {
            category: "Utilities".to_string(),
            limit: dec!(200.00),
            spent: dec!(135.20),
            period: BudgetPeriod::Monthly,
        },
    ];

    let investments = vec![
        Investment {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            shares: dec!(15),
            purchase_price: dec!(150.00),
            current_price: dec!(185.40),
            allocation: 25.0,
        },
        Investment {
            symbol: "VTI".to_string(),
            name: "Vanguard Total Stock Market ETF".to_string(),
            shares: dec!(40),
            purchase_price: dec!(210.00),
            current_price: dec!(238.15),
            allocation: 50.0,
        },
        Investment {
            symbol: "TSLA".to_string(),
            name: "Tesla Inc.".to_string(),
            shares: dec!(8),
            purchase_price: dec!(240.00),
            current_price: dec!(192.60),
            allocation: 10.0,
        },
        Investment {
            symbol: "BND".to_string(),
            name: "Vanguard Total Bond Market ETF".to_string(),
            shares: dec!(30),
            purchase_price: dec!(72.50),
            current_price: dec!(71.85),
            allocation: 15.0,
        },
    ];

    let goals = vec![
        Goal {
            id: "goal-1".to_string(),
            name: "Emergency Fund".to_string(),
            target_amount: dec!(15000.00),
            current_amount: dec!(12800.00),
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            goal_type: GoalType::Savings,
        },
        Goal {
            id: "goal-2".to_string(),
            name: "House Down Payment".to_string(),
            target_amount: dec!(60000.00),
            current_amount: dec!(18500.00),
            target_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap_or_default(),
            goal_type: GoalType::Purchase,
        },
        Goal {
            id: "goal-3".to_string(),
            name: "Pay Off Travel Card".to_string(),
            target_amount: dec!(650.00),
            current_amount: dec!(0.00),
            target_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default(),
            goal_type: GoalType::Debt,
        },
    ];

    DemoDataset {
        accounts,
        transactions,
        budgets,
        investments,
        goals,
    }
}
