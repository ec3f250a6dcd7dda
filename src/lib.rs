#![forbid(unsafe_code)]
//! Reference documentation generator for SQL builtins.
//!
//! Turns the function, aggregate and operator catalogs of a SQL engine into HTML tables of signatures cross-linked to
//! type reference pages. The catalog vocabulary lives in `sqldoc_core`; this crate holds the generation pipeline
//! ([`docgen`]) and the command-line front end ([`cli`]).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a programming error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod docgen;

pub use docgen::{generate_functions, generate_operators};
