pub mod request;

pub use request::{ExpenseQuery, ExpenseRequest};
