//! Cross-links from type spellings to type reference pages.
//!
//! [`link_type_name`] handles a single type spelling; [`link_arguments`] handles a rendered argument list such as
//! `"input: string, n: int"` or `"string..."`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Types that have a reference page (`<name>.html`).
pub const LINKED_TYPES: &[&str] = &[
    "int",
    "decimal",
    "float",
    "bool",
    "date",
    "timestamp",
    "interval",
    "string",
    "bytes",
    "inet",
    "uuid",
    "collatedstring",
];

/// Trailing type name of an argument token and the punctuation after it (`[]` for arrays, `...` for variadics).
static TRAILING_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z]+)([\.\[\]]*)$").expect("INVARIANT: trailing type regex is valid"));

/// Link a type spelling to its reference page.
///
/// ## Rules
/// - A trailing `{}` (an unparameterized type such as `collatedstring{}`) is dropped entirely.
/// - `timestamptz` links to the `timestamp` page but keeps its own spelling as the link text.
/// - A trailing `[]` is ignored when picking the page but kept in the link text.
/// - Spellings outside [`LINKED_TYPES`] are returned as-is.
///
/// ## Examples
/// ```rust
/// use sqldoc::docgen::links::link_type_name;
///
/// assert_eq!(link_type_name("int[]"), r#"<a href="int.html">int[]</a>"#);
/// assert_eq!(link_type_name("timestamptz"), r#"<a href="timestamp.html">timestamptz</a>"#);
/// assert_eq!(link_type_name("widget"), "widget");
/// ```
pub fn link_type_name(spelling: &str) -> String {
    let visible = spelling.strip_suffix("{}").unwrap_or(spelling);
    let target = if visible == "timestamptz" { "timestamp" } else { visible };
    let target = target.strip_suffix("[]").unwrap_or(target);

    if LINKED_TYPES.contains(&target) {
        format!("<a href=\"{target}.html\">{visible}</a>")
    } else {
        visible.to_string()
    }
}

/// Link every type in a `", "`-separated argument list.
///
/// Each token's trailing lowercase run is treated as the type name and linked with [`link_type_name`]; the punctuation
/// that follows it is kept outside the link. Tokens that do not end in a lowercase type name are left untouched.
///
/// ## Examples
/// ```rust
/// use sqldoc::docgen::links::link_arguments;
///
/// assert_eq!(
///     link_arguments("val: string, n: int[]"),
///     r#"val: <a href="string.html">string</a>, n: <a href="int.html">int</a>[]"#,
/// );
/// ```
pub fn link_arguments(list: &str) -> String {
    list.split(", ")
        .map(|token| {
            TRAILING_TYPE
                .replace(token, |caps: &Captures<'_>| {
                    format!("{}{}", link_type_name(&caps[1]), &caps[2])
                })
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_every_recognized_type() {
        for name in LINKED_TYPES {
            assert_eq!(link_type_name(name), format!("<a href=\"{name}.html\">{name}</a>"));
        }
    }

    #[test]
    fn timestamptz_links_to_timestamp() {
        insta::assert_snapshot!(link_type_name("timestamptz"), @r#"<a href="timestamp.html">timestamptz</a>"#);
        // Only the exact spelling is redirected; argument lists link the element type instead.
        assert_eq!(link_type_name("timestamptz[]"), "timestamptz[]");
        assert_eq!(
            link_arguments("timestamptz[]"),
            "<a href=\"timestamp.html\">timestamptz</a>[]"
        );
    }

    #[test]
    fn array_suffix_stays_visible() {
        insta::assert_snapshot!(link_type_name("int[]"), @r#"<a href="int.html">int[]</a>"#);
        assert_eq!(link_type_name("widget[]"), "widget[]");
    }

    #[test]
    fn empty_braces_are_dropped() {
        assert_eq!(
            link_type_name("collatedstring{}"),
            "<a href=\"collatedstring.html\">collatedstring</a>"
        );
        assert_eq!(link_type_name("tuple{}"), "tuple");
        // Only the empty marker is stripped; a locale keeps the spelling unlinked.
        assert_eq!(link_type_name("collatedstring{de}"), "collatedstring{de}");
    }

    #[test]
    fn unrecognized_types_pass_through() {
        assert_eq!(link_type_name("widget"), "widget");
        assert_eq!(link_type_name("anyelement"), "anyelement");
        assert_eq!(link_type_name("NULL"), "NULL");
        assert_eq!(link_type_name(""), "");
        // Matching is exact and case-sensitive.
        assert_eq!(link_type_name("INT"), "INT");
    }

    #[test]
    fn arguments_keep_names_and_separators() {
        assert_eq!(
            link_arguments("input: string, start_pos: int"),
            "input: <a href=\"string.html\">string</a>, start_pos: <a href=\"int.html\">int</a>"
        );
    }

    #[test]
    fn arguments_keep_trailing_punctuation_outside_link() {
        assert_eq!(link_arguments("string..."), "<a href=\"string.html\">string</a>...");
        assert_eq!(link_arguments("int[]"), "<a href=\"int.html\">int</a>[]");
        assert_eq!(link_arguments("anyelement..."), "anyelement...");
    }

    #[test]
    fn arguments_without_trailing_type_are_untouched() {
        assert_eq!(link_arguments(""), "");
        assert_eq!(link_arguments("collatedstring{}"), "collatedstring{}");
        // Tokens are split naively, so only the one ending in a bare type name is linked.
        assert_eq!(link_arguments("tuple{int, string}"), "tuple{<a href=\"int.html\">int</a>, string}");
        assert_eq!(link_arguments("NULL"), "NULL");
    }
}
