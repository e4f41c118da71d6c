use chrono::{Datelike, Utc};
use futures::try_join;
use log::debug;
use std::sync::Arc;

use super::dashboard_model::{
    BudgetOverview, DashboardSummary, GoalOverview, PortfolioChartData, SpendingChartData,
    TrendsChartData,
};
use super::dashboard_traits::DashboardServiceTrait;
use crate::accounts::AccountRepositoryTrait;
use crate::budgets::BudgetRepositoryTrait;
use crate::errors::Result;
use crate::formatting::CurrencyFormat;
use crate::goals::GoalRepositoryTrait;
use crate::investments::InvestmentRepositoryTrait;
use crate::metrics;
use crate::transactions::TransactionRepositoryTrait;

/// Aggregation service behind the dashboard screens.
///
/// Holds the five record repositories and a currency display config;
/// every query fetches fresh record sets and runs them through the
/// metrics engine.
pub struct DashboardService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    currency_format: CurrencyFormat,
}

impl DashboardService {
    /// Creates a new DashboardService instance.
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        currency_format: CurrencyFormat,
    ) -> Self {
        Self {
            account_repository,
            transaction_repository,
            budget_repository,
            investment_repository,
            goal_repository,
            currency_format,
        }
    }
}

#[async_trait::async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_summary(&self) -> Result<DashboardSummary> {
        self.get_summary_for_month(Utc::now().month()).await
    }

    async fn get_summary_for_month(&self, month: u32) -> Result<DashboardSummary> {
        debug!("Computing dashboard summary for month {}", month);
        let (accounts, transactions, investments) = try_join!(
            self.account_repository.list(),
            self.transaction_repository.list(),
            self.investment_repository.list(),
        )?;

        let net_worth = metrics::net_worth(&accounts, &investments);
        let monthly_income = metrics::monthly_income(&transactions, month);
        let monthly_expenses = metrics::monthly_expenses(&transactions, month);
        let savings_rate = metrics::savings_rate(monthly_income, monthly_expenses);

        Ok(DashboardSummary {
            net_worth_formatted: self.currency_format.format(net_worth),
            monthly_income_formatted: self.currency_format.format(monthly_income),
            monthly_expenses_formatted: self.currency_format.format(monthly_expenses),
            net_worth,
            monthly_income,
            monthly_expenses,
            savings_rate,
        })
    }

    async fn spending_chart(&self) -> Result<SpendingChartData> {
        let transactions = self.transaction_repository.list().await?;
        let spending = metrics::category_spending(&transactions);

        Ok(SpendingChartData {
            labels: spending.iter().map(|s| s.category.clone()).collect(),
            series: spending.into_iter().map(|s| s.amount).collect(),
        })
    }

    async fn portfolio_chart(&self) -> Result<PortfolioChartData> {
        let investments = self.investment_repository.list().await?;
        let values = metrics::portfolio_values(&investments);

        Ok(PortfolioChartData {
            labels: values.iter().map(|v| v.symbol.clone()).collect(),
            series: values.into_iter().map(|v| v.market_value).collect(),
        })
    }

    async fn trends_chart(&self, month_window: usize) -> Result<TrendsChartData> {
        let transactions = self.transaction_repository.list().await?;
        let trend = metrics::monthly_trend(&transactions, month_window);

        Ok(TrendsChartData {
            categories: trend.iter().map(|p| p.label()).collect(),
            income: trend.iter().map(|p| p.income).collect(),
            expenses: trend.iter().map(|p| p.expenses).collect(),
        })
    }

    async fn budget_overviews(&self) -> Result<Vec<BudgetOverview>> {
        let budgets = self.budget_repository.list().await?;

        Ok(budgets
            .into_iter()
            .map(|budget| BudgetOverview {
                utilization: metrics::budget_utilization(&budget),
                budget,
            })
            .collect())
    }

    async fn goal_overviews(&self) -> Result<Vec<GoalOverview>> {
        let goals = self.goal_repository.list().await?;

        Ok(goals
            .into_iter()
            .map(|goal| {
                let progress = metrics::goal_progress(&goal);
                GoalOverview {
                    remaining_formatted: self.currency_format.format(progress.remaining),
                    progress,
                    goal,
                }
            })
            .collect())
    }
}
