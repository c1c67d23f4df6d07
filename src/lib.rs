//! Interactive tracker for a small organization: departments, the roles in
//! them, and the employees who hold those roles.
//!
//! The binary presents a numbered menu, asks for whatever a command needs,
//! and runs one parameterized statement per command against a SQLite store.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — The store [`Gateway`](db::Gateway), table DDL, and health checks
//! - [`error`] — Store and input-validation errors
//! - [`org`] — Entity types and the list/add/update operations
//! - [`menu`] — The prompt loop, input validation, and table rendering

pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod org;
