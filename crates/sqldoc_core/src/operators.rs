//! Operator vocabulary and operator catalogs.
//!
//! SQL operators come in three families, each with its own id enum and registry table:
//!
//! - [`UnaryOperator`] / [`UNARY_OPERATORS`]: prefix operators (`-x`, `~x`)
//! - [`BinaryOperator`] / [`BINARY_OPERATORS`]: arithmetic, bitwise and concatenation operators
//! - [`ComparisonOperator`] / [`COMPARISON_OPERATORS`]: operators that always produce `bool`
//!
//! An [`OperatorCatalog`] lists, per operator kind, the typed overloads the engine supports. Overloads are tagged by
//! family ([`UnaryOverload`], [`BinaryOverload`], [`ComparisonOverload`]), so consumers never need to recover the
//! concrete shape at runtime.
//!
//! ## Notes
//! - The same spelling may exist in more than one family (`-` is unary and binary, `~` is unary complement and the
//!   regex-match comparison).
//! - Comparison overloads carry no return type; it is `bool` by definition.
//!
//! ## Examples
//! ```rust
//! use sqldoc_core::{BinaryOperator, ComparisonOperator};
//!
//! assert_eq!(BinaryOperator::Concat.to_string(), "||");
//! assert_eq!(ComparisonOperator::from_spelling("LIKE"), Some(ComparisonOperator::Like));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::{OperatorInfo, info_in, lookup_in, op};
use crate::types::SqlType;

/// Stable identifier for prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,
    Complement,
}

/// Stable identifier for binary (non-comparison) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Bitand,
    Bitor,
    Bitxor,
    Plus,
    Minus,
    Mult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    Concat,
    LShift,
    RShift,
}

/// Stable identifier for comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
    Lt,
    Le,
    IsNotDistinctFrom,
    In,
    Like,
    ILike,
    SimilarTo,
    RegMatch,
    RegIMatch,
}

/// Registry of all unary operators.
pub const UNARY_OPERATORS: &[OperatorInfo<UnaryOperator>] = &[
    op(UnaryOperator::Minus, "-", "Numeric negation."),
    op(UnaryOperator::Complement, "~", "Bitwise complement."),
];

/// Registry of all binary operators.
pub const BINARY_OPERATORS: &[OperatorInfo<BinaryOperator>] = &[
    op(BinaryOperator::Bitand, "&", "Bitwise AND."),
    op(BinaryOperator::Bitor, "|", "Bitwise OR."),
    op(BinaryOperator::Bitxor, "#", "Bitwise XOR."),
    op(BinaryOperator::Plus, "+", "Addition."),
    op(BinaryOperator::Minus, "-", "Subtraction."),
    op(BinaryOperator::Mult, "*", "Multiplication."),
    op(BinaryOperator::Div, "/", "Division."),
    op(BinaryOperator::FloorDiv, "//", "Floor division."),
    op(BinaryOperator::Mod, "%", "Modulo."),
    op(BinaryOperator::Pow, "^", "Exponentiation."),
    op(BinaryOperator::Concat, "||", "Concatenation."),
    op(BinaryOperator::LShift, "<<", "Left shift."),
    op(BinaryOperator::RShift, ">>", "Right shift."),
];

/// Registry of all comparison operators.
///
/// Only the "canonical" direction of each comparison is listed (`<` but not `>`); the engine derives the rest by
/// swapping or negating operands, so the docs only need these.
pub const COMPARISON_OPERATORS: &[OperatorInfo<ComparisonOperator>] = &[
    op(ComparisonOperator::Eq, "=", "Equality."),
    op(ComparisonOperator::Lt, "<", "Less than."),
    op(ComparisonOperator::Le, "<=", "Less than or equal."),
    op(
        ComparisonOperator::IsNotDistinctFrom,
        "IS NOT DISTINCT FROM",
        "Equality that treats NULLs as equal.",
    ),
    op(ComparisonOperator::In, "IN", "Membership in a tuple."),
    op(ComparisonOperator::Like, "LIKE", "Pattern match."),
    op(ComparisonOperator::ILike, "ILIKE", "Case-insensitive pattern match."),
    op(ComparisonOperator::SimilarTo, "SIMILAR TO", "SQL regular expression match."),
    op(ComparisonOperator::RegMatch, "~", "POSIX regular expression match."),
    op(
        ComparisonOperator::RegIMatch,
        "~*",
        "Case-insensitive POSIX regular expression match.",
    ),
];

macro_rules! operator_kind {
    ($kind:ident, $table:ident, $family:literal) => {
        impl $kind {
            /// Return the full registry entry.
            pub fn info(self) -> &'static OperatorInfo<$kind> {
                info_in($table, self)
            }

            /// Return the SQL spelling.
            pub fn as_str(self) -> &'static str {
                self.info().spelling
            }

            /// Resolve a SQL spelling (case-sensitive).
            pub fn from_spelling(spelling: &str) -> Option<Self> {
                lookup_in($table, spelling)
            }

            /// Iterate over every operator of this family in registry order.
            pub fn all() -> impl Iterator<Item = Self> {
                $table.iter().map(|o| o.id)
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $kind {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_spelling(&value).ok_or_else(|| format!("unknown {} operator: '{}'", $family, value))
            }
        }

        impl From<$kind> for String {
            fn from(value: $kind) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

operator_kind!(UnaryOperator, UNARY_OPERATORS, "unary");
operator_kind!(BinaryOperator, BINARY_OPERATORS, "binary");
operator_kind!(ComparisonOperator, COMPARISON_OPERATORS, "comparison");

/// Typed overload of a unary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOverload {
    pub operand: SqlType,
    pub return_type: SqlType,
}

/// Typed overload of a binary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryOverload {
    pub left: SqlType,
    pub right: SqlType,
    pub return_type: SqlType,
}

/// Typed overload of a comparison operator. The result is always `bool`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonOverload {
    pub left: SqlType,
    pub right: SqlType,
}

impl UnaryOverload {
    pub fn new(operand: SqlType, return_type: SqlType) -> Self {
        Self { operand, return_type }
    }
}

impl BinaryOverload {
    pub fn new(left: SqlType, right: SqlType, return_type: SqlType) -> Self {
        Self {
            left,
            right,
            return_type,
        }
    }
}

impl ComparisonOverload {
    pub fn new(left: SqlType, right: SqlType) -> Self {
        Self { left, right }
    }
}

/// All overloads registered for one operator kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(
        serialize = "K: Clone + Into<String>, O: Serialize",
        deserialize = "K: TryFrom<String>, K::Error: fmt::Display, O: Deserialize<'de>"
    ))
)]
pub struct OperatorEntry<K, O> {
    #[cfg_attr(feature = "serde", serde(with = "spelling"))]
    pub op: K,
    pub overloads: Vec<O>,
}

/// The unary, binary and comparison operator catalogs of an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperatorCatalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub unary: Vec<OperatorEntry<UnaryOperator, UnaryOverload>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub binary: Vec<OperatorEntry<BinaryOperator, BinaryOverload>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub comparison: Vec<OperatorEntry<ComparisonOperator, ComparisonOverload>>,
}

impl OperatorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_unary(&mut self, op: UnaryOperator, overloads: Vec<UnaryOverload>) {
        push_overloads(&mut self.unary, op, overloads);
    }

    pub fn add_binary(&mut self, op: BinaryOperator, overloads: Vec<BinaryOverload>) {
        push_overloads(&mut self.binary, op, overloads);
    }

    pub fn add_comparison(&mut self, op: ComparisonOperator, overloads: Vec<ComparisonOverload>) {
        push_overloads(&mut self.comparison, op, overloads);
    }

    /// Total number of overloads across all three families.
    pub fn overload_count(&self) -> usize {
        self.unary.iter().map(|e| e.overloads.len()).sum::<usize>()
            + self.binary.iter().map(|e| e.overloads.len()).sum::<usize>()
            + self.comparison.iter().map(|e| e.overloads.len()).sum::<usize>()
    }
}

fn push_overloads<K: PartialEq, O>(entries: &mut Vec<OperatorEntry<K, O>>, op: K, overloads: Vec<O>) {
    match entries.iter_mut().find(|e| e.op == op) {
        Some(entry) => entry.overloads.extend(overloads),
        None => entries.push(OperatorEntry { op, overloads }),
    }
}

/// Serialize operator kinds by their SQL spelling.
#[cfg(feature = "serde")]
mod spelling {
    use std::fmt;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<K, S>(op: &K, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Clone + Into<String>,
        S: Serializer,
    {
        let spelling: String = op.clone().into();
        serializer.serialize_str(&spelling)
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<K, D::Error>
    where
        K: TryFrom<String>,
        K::Error: fmt::Display,
        D: Deserializer<'de>,
    {
        let spelling = String::deserialize(deserializer)?;
        K::try_from(spelling).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_resolve_per_family() {
        assert_eq!(UnaryOperator::from_spelling("-"), Some(UnaryOperator::Minus));
        assert_eq!(BinaryOperator::from_spelling("-"), Some(BinaryOperator::Minus));
        assert_eq!(ComparisonOperator::from_spelling("~"), Some(ComparisonOperator::RegMatch));
        assert_eq!(UnaryOperator::from_spelling("~"), Some(UnaryOperator::Complement));
        assert_eq!(ComparisonOperator::from_spelling("like"), None);
    }

    #[test]
    fn display_uses_spelling() {
        assert_eq!(ComparisonOperator::IsNotDistinctFrom.to_string(), "IS NOT DISTINCT FROM");
        assert_eq!(BinaryOperator::FloorDiv.to_string(), "//");
        assert_eq!(String::from(UnaryOperator::Complement), "~");
    }

    #[test]
    fn try_from_reports_family() {
        let err = BinaryOperator::try_from("=".to_string()).unwrap_err();
        assert_eq!(err, "unknown binary operator: '='");
    }

    #[test]
    fn add_merges_same_kind() {
        let mut catalog = OperatorCatalog::new();
        catalog.add_unary(UnaryOperator::Minus, vec![UnaryOverload::new(SqlType::Int, SqlType::Int)]);
        catalog.add_unary(
            UnaryOperator::Minus,
            vec![UnaryOverload::new(SqlType::Float, SqlType::Float)],
        );
        catalog.add_comparison(
            ComparisonOperator::Eq,
            vec![ComparisonOverload::new(SqlType::Int, SqlType::Int)],
        );
        assert_eq!(catalog.unary.len(), 1);
        assert_eq!(catalog.unary[0].overloads.len(), 2);
        assert_eq!(catalog.overload_count(), 3);
    }
}
