//! Function catalog vocabulary.
//!
//! A [`FunctionCatalog`] maps function names to their [`Overload`]s. It is used for both scalar builtins and
//! aggregates; the two only differ in which catalog they are registered in.
//!
//! ## Notes
//! - Names are stored as registered. Engines commonly register the same function under several case variants (e.g.
//!   `lower` and `LOWER`) for fast case-insensitive lookup, so a catalog may legitimately contain duplicates that only
//!   differ by case. Consumers that want one entry per function must fold case themselves.
//! - Iteration order is insertion order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::SqlType;

/// Info text marking an overload that exists only for PostgreSQL compatibility and cannot be used.
pub const NOT_USABLE_INFO: &str = "Not usable; exposed only for compatibility with PostgreSQL.";

/// One declared argument of an overload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arg {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: SqlType,
}

/// The argument signature of an overload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum TypeList {
    /// A fixed list of (optionally named) arguments.
    Args(Vec<Arg>),
    /// Any number of arguments of one type.
    Variadic(SqlType),
    /// Any number of arguments that all share one (unspecified) type.
    Homogeneous,
}

impl TypeList {
    /// Build an unnamed fixed argument list.
    pub fn args(types: impl IntoIterator<Item = SqlType>) -> Self {
        TypeList::Args(types.into_iter().map(|ty| Arg { name: None, ty }).collect())
    }

    /// Build a named fixed argument list.
    pub fn named<N: Into<String>>(args: impl IntoIterator<Item = (N, SqlType)>) -> Self {
        TypeList::Args(
            args.into_iter()
                .map(|(name, ty)| Arg {
                    name: Some(name.into()),
                    ty,
                })
                .collect(),
        )
    }

    pub fn variadic(ty: SqlType) -> Self {
        TypeList::Variadic(ty)
    }

    pub fn homogeneous() -> Self {
        TypeList::Homogeneous
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}: {}", self.ty),
            None => write!(f, "{}", self.ty),
        }
    }
}

impl fmt::Display for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeList::Args(args) => {
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                Ok(())
            }
            TypeList::Variadic(ty) => write!(f, "{ty}..."),
            TypeList::Homogeneous => f.write_str("anyelement..."),
        }
    }
}

/// One concrete signature of a builtin function or aggregate.
///
/// ## Notes
/// - `category` is a documentation grouping label. An empty string is treated the same as `None`.
/// - `window` marks overloads that are only valid as window functions.
/// - `info` is the description in CommonMark; it may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Overload {
    pub types: TypeList,
    pub return_type: SqlType,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub window: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub info: String,
}

impl Overload {
    /// Create an uncategorized overload without description.
    pub fn new(types: TypeList, return_type: SqlType) -> Self {
        Self {
            types,
            return_type,
            category: None,
            window: false,
            info: String::new(),
        }
    }

    /// Set the documentation category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description text.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Mark the overload as a window function.
    pub fn window(mut self) -> Self {
        self.window = true;
        self
    }

    /// Return the explicit category, treating an empty label as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// A named group of overloads in a [`FunctionCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionEntry {
    pub name: String,
    pub overloads: Vec<Overload>,
}

/// Insertion-ordered catalog of functions (or aggregates).
///
/// Serialized as a list of entries. Deserializing goes through [`FunctionCatalog::insert`], so repeated exact names
/// are merged the same way as in code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<FunctionEntry>", into = "Vec<FunctionEntry>")
)]
pub struct FunctionCatalog {
    entries: Vec<FunctionEntry>,
}

impl FunctionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `overloads` under `name`.
    ///
    /// Registering the exact same name again appends to its overloads; case variants are separate entries.
    pub fn insert(&mut self, name: impl Into<String>, overloads: Vec<Overload>) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.overloads.extend(overloads),
            None => self.entries.push(FunctionEntry { name, overloads }),
        }
    }

    /// Look up the overloads registered under exactly `name` (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&[Overload]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.overloads.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<Overload>)> for FunctionCatalog {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Overload>)>>(iter: I) -> Self {
        let mut catalog = FunctionCatalog::new();
        for (name, overloads) in iter {
            catalog.insert(name, overloads);
        }
        catalog
    }
}

impl From<Vec<FunctionEntry>> for FunctionCatalog {
    fn from(entries: Vec<FunctionEntry>) -> Self {
        entries.into_iter().map(|e| (e.name, e.overloads)).collect()
    }
}

impl From<FunctionCatalog> for Vec<FunctionEntry> {
    fn from(catalog: FunctionCatalog) -> Self {
        catalog.entries
    }
}
