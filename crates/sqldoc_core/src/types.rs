//! SQL type vocabulary.
//!
//! [`SqlType`] is the catalog's notion of a column/argument type. Its [`Display`](fmt::Display) form is the *spelling*
//! used everywhere in the generated docs (`int`, `string[]`, `collatedstring{}`), and [`FromStr`] accepts exactly the
//! spellings that `Display` produces.
//!
//! ## Notes
//! - Spellings are lowercase, except the null type which is spelled `NULL`.
//! - Array types append `[]` to their element spelling; collated strings carry their locale in braces (an empty locale
//!   is spelled `collatedstring{}`); tuples list their element spellings in braces.
//!
//! ## Examples
//! ```rust
//! use sqldoc_core::SqlType;
//!
//! let t: SqlType = "timestamptz[]".parse().unwrap();
//! assert_eq!(t, SqlType::array(SqlType::TimestampTz));
//! assert_eq!(SqlType::collated("").to_string(), "collatedstring{}");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A SQL type as described by the builtin catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum SqlType {
    Null,
    Bool,
    Int,
    Float,
    Decimal,
    String,
    /// A string with a collation locale; the empty locale means "any collation".
    CollatedString {
        locale: String,
    },
    Bytes,
    Date,
    Timestamp,
    TimestampTz,
    Interval,
    Uuid,
    Inet,
    Oid,
    /// Placeholder for polymorphic arguments (`anyelement`).
    Any,
    Array(Box<SqlType>),
    Tuple(Vec<SqlType>),
}

impl SqlType {
    /// Build an array type over `elem`.
    pub fn array(elem: SqlType) -> Self {
        SqlType::Array(Box::new(elem))
    }

    /// Build a collated string type for `locale` (empty for the unparameterized type).
    pub fn collated(locale: impl Into<String>) -> Self {
        SqlType::CollatedString { locale: locale.into() }
    }

    /// Return `true` for array types.
    pub fn is_array(&self) -> bool {
        matches!(self, SqlType::Array(_))
    }
}

/// Spellings of the types that carry no parameters.
///
/// Parameterized types (`collatedstring{..}`, arrays, tuples) are handled separately by the parser.
const SIMPLE_SPELLINGS: &[(&str, SqlType)] = &[
    ("NULL", SqlType::Null),
    ("bool", SqlType::Bool),
    ("int", SqlType::Int),
    ("float", SqlType::Float),
    ("decimal", SqlType::Decimal),
    ("string", SqlType::String),
    ("bytes", SqlType::Bytes),
    ("date", SqlType::Date),
    ("timestamp", SqlType::Timestamp),
    ("timestamptz", SqlType::TimestampTz),
    ("interval", SqlType::Interval),
    ("uuid", SqlType::Uuid),
    ("inet", SqlType::Inet),
    ("oid", SqlType::Oid),
    ("anyelement", SqlType::Any),
];

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::CollatedString { locale } => write!(f, "collatedstring{{{locale}}}"),
            SqlType::Array(elem) => write!(f, "{elem}[]"),
            SqlType::Tuple(elems) => {
                f.write_str("tuple{")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str("}")
            }
            simple => {
                let spelling = SIMPLE_SPELLINGS
                    .iter()
                    .find(|(_, t)| t == simple)
                    .map(|(s, _)| *s)
                    .unwrap_or("unknown");
                f.write_str(spelling)
            }
        }
    }
}

/// Error returned when a type spelling cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("empty type spelling")]
    Empty,

    #[error("unknown type spelling: '{0}'")]
    Unknown(String),

    #[error("malformed type spelling: '{0}'")]
    Malformed(String),
}

impl FromStr for SqlType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TypeParseError::Empty);
        }

        if let Some(elem) = s.strip_suffix("[]") {
            return Ok(SqlType::array(elem.parse()?));
        }

        if let Some(rest) = s.strip_prefix("collatedstring{") {
            let Some(locale) = rest.strip_suffix('}') else {
                return Err(TypeParseError::Malformed(s.to_string()));
            };
            return Ok(SqlType::collated(locale));
        }

        if let Some(rest) = s.strip_prefix("tuple{") {
            let Some(inner) = rest.strip_suffix('}') else {
                return Err(TypeParseError::Malformed(s.to_string()));
            };
            let elems = split_top_level(inner)
                .ok_or_else(|| TypeParseError::Malformed(s.to_string()))?
                .into_iter()
                .map(str::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(SqlType::Tuple(elems));
        }

        SIMPLE_SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, t)| t.clone())
            .ok_or_else(|| TypeParseError::Unknown(s.to_string()))
    }
}

/// Split a tuple body on commas that are not nested inside braces.
///
/// Returns `None` when braces are unbalanced.
fn split_top_level(s: &str) -> Option<Vec<&str>> {
    if s.trim().is_empty() {
        return Some(Vec::new());
    }

    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    parts.push(s[start..].trim());
    Some(parts)
}

impl TryFrom<String> for SqlType {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SqlType> for String {
    fn from(value: SqlType) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_spellings_display() {
        assert_eq!(SqlType::Int.to_string(), "int");
        assert_eq!(SqlType::TimestampTz.to_string(), "timestamptz");
        assert_eq!(SqlType::Any.to_string(), "anyelement");
        assert_eq!(SqlType::Null.to_string(), "NULL");
    }

    #[test]
    fn parameterized_spellings_display() {
        assert_eq!(SqlType::array(SqlType::String).to_string(), "string[]");
        assert_eq!(SqlType::collated("").to_string(), "collatedstring{}");
        assert_eq!(SqlType::collated("de").to_string(), "collatedstring{de}");
        assert_eq!(
            SqlType::Tuple(vec![SqlType::Int, SqlType::array(SqlType::Bool)]).to_string(),
            "tuple{int, bool[]}"
        );
    }

    #[test]
    fn every_simple_spelling_parses_back() {
        for (spelling, ty) in SIMPLE_SPELLINGS {
            assert_eq!(spelling.parse::<SqlType>().unwrap(), *ty);
            assert_eq!(ty.to_string(), *spelling);
        }
    }

    #[test]
    fn parses_nested_parameterized_types() {
        let t: SqlType = "tuple{int, tuple{string, bytes}[]}".parse().unwrap();
        assert_eq!(
            t,
            SqlType::Tuple(vec![
                SqlType::Int,
                SqlType::array(SqlType::Tuple(vec![SqlType::String, SqlType::Bytes])),
            ])
        );
        assert_eq!("tuple{}".parse::<SqlType>().unwrap(), SqlType::Tuple(vec![]));
        assert_eq!("int[][]".parse::<SqlType>().unwrap(), SqlType::array(SqlType::array(SqlType::Int)));
    }

    #[test]
    fn rejects_bad_spellings() {
        assert_eq!("".parse::<SqlType>(), Err(TypeParseError::Empty));
        assert_eq!("widget".parse::<SqlType>(), Err(TypeParseError::Unknown("widget".to_string())));
        assert!(matches!("collatedstring{en".parse::<SqlType>(), Err(TypeParseError::Malformed(_))));
        assert!(matches!("tuple{int, {string}".parse::<SqlType>(), Err(TypeParseError::Malformed(_))));
        // Spellings are case-sensitive.
        assert!("INT".parse::<SqlType>().is_err());
    }

    #[test]
    fn is_array_only_for_arrays() {
        assert!(SqlType::array(SqlType::Int).is_array());
        assert!(!SqlType::Int.is_array());
    }
}
