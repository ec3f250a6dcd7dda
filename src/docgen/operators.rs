//! Operator signature collection.
//!
//! Turns the three operator catalogs into per-symbol, deterministically ordered signature lists.
//!
//! ## Notes
//! - Unary and binary signatures can share a symbol (`-`, `~`); within a symbol, unary signatures always come first.
//! - Comparison signatures always return `bool`, whatever the catalog says about them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use sqldoc_core::{OperatorCatalog, SqlType};

/// One operator overload, reduced to the spellings the docs show.
///
/// An empty `right` marks a unary (prefix) operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub left: String,
    pub right: String,
    pub ret: String,
    pub op: String,
}

impl Operation {
    pub fn unary(op: impl Into<String>, operand: impl Into<String>, ret: impl Into<String>) -> Self {
        Self {
            left: operand.into(),
            right: String::new(),
            ret: ret.into(),
            op: op.into(),
        }
    }

    pub fn binary(
        op: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        ret: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            ret: ret.into(),
            op: op.into(),
        }
    }

    pub fn is_unary(&self) -> bool {
        self.right.is_empty()
    }
}

/// Order two signatures of the same operator.
///
/// Unary signatures sort before binary ones; ties are broken by left type, then right type, then return type, each by
/// plain byte-wise string comparison.
pub fn compare_operations(a: &Operation, b: &Operation) -> Ordering {
    b.is_unary()
        .cmp(&a.is_unary())
        .then_with(|| a.left.cmp(&b.left))
        .then_with(|| a.right.cmp(&b.right))
        .then_with(|| a.ret.cmp(&b.ret))
}

/// Signatures grouped by operator symbol.
///
/// Symbols iterate in lexicographic order and each group is sorted with [`compare_operations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorDocs {
    groups: BTreeMap<String, Vec<Operation>>,
}

impl OperatorDocs {
    /// Iterate `(symbol, signatures)` in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Operation])> {
        self.groups.iter().map(|(op, ops)| (op.as_str(), ops.as_slice()))
    }

    /// Distinct operator symbols in render order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Sorted signatures of `symbol`, if it has any.
    pub fn get(&self, symbol: &str) -> Option<&[Operation]> {
        self.groups.get(symbol).map(Vec::as_slice)
    }

    /// Whether no operator has any signature.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Collect every overload of the unary, binary and comparison catalogs into sorted per-symbol groups.
pub fn collect_operators(catalog: &OperatorCatalog) -> OperatorDocs {
    let mut groups: BTreeMap<String, Vec<Operation>> = BTreeMap::new();

    for entry in &catalog.unary {
        let op = entry.op.to_string();
        for v in &entry.overloads {
            groups.entry(op.clone()).or_default().push(Operation::unary(
                op.as_str(),
                v.operand.to_string(),
                v.return_type.to_string(),
            ));
        }
    }
    for entry in &catalog.binary {
        let op = entry.op.to_string();
        for v in &entry.overloads {
            groups.entry(op.clone()).or_default().push(Operation::binary(
                op.as_str(),
                v.left.to_string(),
                v.right.to_string(),
                v.return_type.to_string(),
            ));
        }
    }
    let ret = SqlType::Bool.to_string();
    for entry in &catalog.comparison {
        let op = entry.op.to_string();
        for v in &entry.overloads {
            groups.entry(op.clone()).or_default().push(Operation::binary(
                op.as_str(),
                v.left.to_string(),
                v.right.to_string(),
                ret.as_str(),
            ));
        }
    }

    for ops in groups.values_mut() {
        ops.sort_by(compare_operations);
    }
    tracing::debug!(symbols = groups.len(), "collected operator signatures");

    OperatorDocs { groups }
}
