//! Expenses Entity Module

pub mod expense;

pub use expense::Expense;
