mod repository;

pub use repository::GoalRepository;

#[cfg(test)]
mod repository_tests;
