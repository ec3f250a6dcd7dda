//! The full set of catalogs a reference build consumes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::functions::FunctionCatalog;
use crate::operators::OperatorCatalog;

/// Scalar functions, aggregates and operators of one engine.
///
/// With the `serde` feature this is also the on-disk catalog format:
///
/// ```json
/// {
///   "functions": [{ "name": "lower", "overloads": [{ "types": { "args": [{ "type": "string" }] }, "return_type": "string" }] }],
///   "aggregates": [],
///   "operators": { "unary": [{ "op": "-", "overloads": [{ "operand": "int", "return_type": "int" }] }] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSet {
    #[cfg_attr(feature = "serde", serde(default))]
    pub functions: FunctionCatalog,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aggregates: FunctionCatalog,
    #[cfg_attr(feature = "serde", serde(default))]
    pub operators: OperatorCatalog,
}

impl CatalogSet {
    pub fn new(functions: FunctionCatalog, aggregates: FunctionCatalog, operators: OperatorCatalog) -> Self {
        Self {
            functions,
            aggregates,
            operators,
        }
    }

    /// The builtin catalogs shipped with this crate.
    pub fn builtin() -> Self {
        Self::new(
            crate::builtins::functions(),
            crate::builtins::aggregates(),
            crate::builtins::operators(),
        )
    }
}
