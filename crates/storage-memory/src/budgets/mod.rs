mod repository;

pub use repository::BudgetRepository;

#[cfg(test)]
mod repository_tests;
