//! Provide the catalog vocabulary for SQL builtin reference docs.
//!
//! This crate describes *what* a builtin catalog contains: SQL type spellings, function overload descriptors, operator
//! kinds and their overloads. It is the input side of the `sqldoc` generator, which turns these catalogs into HTML
//! reference tables.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, no rendering.
//! - Catalogs are plain values. Callers build them (or load them, with the `serde` feature) and pass them explicitly to
//!   the generator; nothing here is pre-populated behind the caller's back.
//! - Display spellings are the contract with the docs: `SqlType::to_string()` is what ends up in signature tables, so
//!   it must stay stable.
//!
//! ## Examples
//! ```rust
//! use sqldoc_core::{FunctionCatalog, Overload, SqlType, TypeList};
//!
//! let mut catalog = FunctionCatalog::new();
//! catalog.insert(
//!     "lower",
//!     vec![Overload::new(TypeList::args([SqlType::String]), SqlType::String)],
//! );
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(SqlType::array(SqlType::Int).to_string(), "int[]");
//! ```

pub mod builtins;
pub mod catalog;
pub mod functions;
pub mod operators;
pub mod registry;
pub mod types;

pub use catalog::CatalogSet;
pub use functions::{Arg, FunctionCatalog, FunctionEntry, NOT_USABLE_INFO, Overload, TypeList};
pub use operators::{
    BinaryOperator, BinaryOverload, ComparisonOperator, ComparisonOverload, OperatorCatalog, OperatorEntry,
    UnaryOperator, UnaryOverload,
};
pub use types::{SqlType, TypeParseError};
