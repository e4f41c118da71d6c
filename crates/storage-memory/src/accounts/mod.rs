mod repository;

pub use repository::AccountRepository;

#[cfg(test)]
mod repository_tests;
