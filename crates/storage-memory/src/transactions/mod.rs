mod repository;

pub use repository::TransactionRepository;

#[cfg(test)]
mod repository_tests;
