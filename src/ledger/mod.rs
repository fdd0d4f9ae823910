//! Ledger domain models, derived views, and helpers.

pub mod category;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use category::{Category, CategoryFilter};
pub use expense::Expense;
pub use ledger::{CategoryStats, Ledger};
