//! Application layer between the transports and storage.

mod budgets;
mod error;

#[cfg(test)]
mod budgets_test;

pub use budgets::{BudgetUsecase, GetAllBudgetRequest, GetAllBudgetResponse, Usecase};
pub use error::{UsecaseError, UsecaseResult};
