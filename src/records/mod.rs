//! User records consumed by the engine: transactions, profile, budgets, goal

mod data;
pub mod loader;

pub use data::{
    Budget, Goal, Lifestyle, Profile, Transaction, VehicleModel, MAX_CREDIT_SCORE,
    MIN_CREDIT_SCORE,
};
pub use loader::{load_transactions, load_transactions_from_reader};
