//! Query operations over the organization tables.
//!
//! Each operation issues exactly one parameterized statement through the
//! [`Gateway`](crate::db::Gateway) and returns its typed result. Failures come
//! back as [`StoreError`](crate::error::StoreError); reporting them is up to
//! the caller.

pub mod departments;
pub mod employees;
pub mod roles;
pub mod types;

pub use departments::{add_department, list_departments};
pub use employees::{add_employee, list_employees, update_employee_role};
pub use roles::{add_role, list_roles};
