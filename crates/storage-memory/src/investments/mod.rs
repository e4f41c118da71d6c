mod repository;

pub use repository::InvestmentRepository;

#[cfg(test)]
mod repository_tests;
