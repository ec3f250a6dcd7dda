//! Reference documentation generation.
//!
//! The pipeline is catalog → collector → renderer:
//!
//! - [`operators::collect_operators`] / [`functions::collect_functions`] dedup, filter, categorize and sort.
//! - [`render`] turns the collected docs into markup bytes.
//! - [`links`] and [`markup`] are the leaf helpers both collectors use to build rows.
//!
//! Generation is pure: the same catalog always yields the same bytes, and nothing here touches the filesystem.

pub mod functions;
pub mod links;
pub mod markup;
pub mod operators;
pub mod render;

use sqldoc_core::{FunctionCatalog, OperatorCatalog};

/// Render the reference tables for a function catalog.
///
/// With `categorize`, rows are grouped under `### <Category> Functions` headings and window functions are left out;
/// without it every row goes into a single unheaded table.
///
/// ## Examples
/// ```rust
/// use sqldoc::docgen::generate_functions;
/// use sqldoc_core::{FunctionCatalog, Overload, SqlType, TypeList};
///
/// let mut catalog = FunctionCatalog::new();
/// catalog.insert("lower", vec![Overload::new(TypeList::args([SqlType::String]), SqlType::String)]);
///
/// let out = String::from_utf8(generate_functions(&catalog, true)).unwrap();
/// assert!(out.starts_with("### string Functions\n\n<table>\n"));
/// ```
#[tracing::instrument(skip_all, fields(entries = catalog.len(), categorize = categorize))]
pub fn generate_functions(catalog: &FunctionCatalog, categorize: bool) -> Vec<u8> {
    let docs = functions::collect_functions(catalog, categorize);
    render::render_functions(&docs)
}

/// Render one signature table per operator symbol.
#[tracing::instrument(skip_all, fields(overloads = catalog.overload_count()))]
pub fn generate_operators(catalog: &OperatorCatalog) -> Vec<u8> {
    let docs = operators::collect_operators(catalog);
    render::render_operators(&docs)
}
