//! Function and aggregate row collection.
//!
//! Walks a [`FunctionCatalog`] once and produces pre-rendered table rows grouped by category.
//!
//! ## Rules
//! - Names are folded to lowercase and only the first spelling of a name is documented; later case variants are
//!   skipped together with all of their overloads.
//! - Overloads whose description is [`NOT_USABLE_INFO`] are never documented.
//! - When categorizing, window-function overloads are skipped (they are documented separately).
//! - The category is the overload's explicit category, else its return type. Without categorization every row lands in
//!   the single unnamed category `""`.
//! - Rows are sorted by their rendered text; categories are sorted by name, except [`COMPATIBILITY_CATEGORY`], which
//!   always goes last.

use std::collections::{BTreeMap, HashSet};

use sqldoc_core::{FunctionCatalog, NOT_USABLE_INFO, Overload};

use super::links::link_arguments;
use super::markup::render_description;

/// Category that is always listed after every other category.
pub const COMPATIBILITY_CATEGORY: &str = "Compatibility";

/// Separator between a signature and its return type.
pub const ARROW: &str = "→";

/// The rendered rows of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRows {
    pub name: String,
    pub rows: Vec<String>,
}

/// Rows of a function catalog, grouped and ordered for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDocs {
    categorize: bool,
    categories: Vec<CategoryRows>,
}

impl FunctionDocs {
    /// Whether rows were grouped by category (and headings should be emitted).
    pub fn categorize(&self) -> bool {
        self.categorize
    }

    /// Categories in render order.
    pub fn categories(&self) -> &[CategoryRows] {
        &self.categories
    }

    /// Category names in render order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Sorted rows of `category`, if it has any.
    pub fn rows(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.rows.as_slice())
    }
}

/// Render the description cell of an overload: the HTML of its info text in a `funcdesc` span, or nothing.
pub fn description_cell(info: &str) -> String {
    if info.is_empty() {
        return String::new();
    }
    format!("<span class=\"funcdesc\">{}</span>", render_description(info))
}

/// Render one table row for `name` with an already-rendered description cell.
pub fn function_row(name: &str, args: &str, ret: &str, description: &str) -> String {
    format!(
        "<tr><td><code>{name}({}) {ARROW} {}</code></td><td>{description}</td></tr>",
        link_arguments(args),
        link_arguments(ret),
    )
}

/// Pick the documentation category of an overload.
fn category_of(overload: &Overload, ret: &str, categorize: bool) -> String {
    if !categorize {
        return String::new();
    }
    overload.category().unwrap_or(ret).to_string()
}

/// Collect the documented rows of `catalog`.
pub fn collect_functions(catalog: &FunctionCatalog, categorize: bool) -> FunctionDocs {
    let mut functions: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in catalog.iter() {
        let name = entry.name.to_lowercase();
        if !seen.insert(name.clone()) {
            tracing::trace!(name = %entry.name, "skipping case variant of documented function");
            continue;
        }

        for overload in &entry.overloads {
            if overload.info == NOT_USABLE_INFO {
                tracing::trace!(%name, "skipping compatibility-only overload");
                continue;
            }
            if categorize && overload.window {
                tracing::trace!(%name, "skipping window function overload");
                continue;
            }

            let args = overload.types.to_string();
            let ret = overload.return_type.to_string();
            let category = category_of(overload, &ret, categorize);
            let row = function_row(&name, &args, &ret, &description_cell(&overload.info));
            functions.entry(category).or_default().push(row);
        }
    }

    let mut categories: Vec<CategoryRows> = functions
        .into_iter()
        .map(|(name, mut rows)| {
            rows.sort();
            CategoryRows { name, rows }
        })
        .collect();
    if let Some(pos) = categories.iter().position(|c| c.name == COMPATIBILITY_CATEGORY) {
        let compat = categories.remove(pos);
        categories.push(compat);
    }

    tracing::debug!(
        functions = seen.len(),
        categories = categories.len(),
        "collected function rows"
    );

    FunctionDocs {
        categorize,
        categories,
    }
}
