//! Property-based tests for reference generation
//!
//! These tests use proptest to verify ordering and linking invariants across many randomly generated catalogs.

use proptest::prelude::*;
use sqldoc::docgen::functions::collect_functions;
use sqldoc::docgen::links::{LINKED_TYPES, link_arguments, link_type_name};
use sqldoc::docgen::operators::collect_operators;
use sqldoc::{generate_functions, generate_operators};
use sqldoc_core::{
    BinaryOperator, BinaryOverload, FunctionCatalog, NOT_USABLE_INFO, OperatorCatalog, Overload, SqlType, TypeList,
    UnaryOperator, UnaryOverload,
};

// =============================================================================
// Strategies
// =============================================================================

fn scalar_type() -> impl Strategy<Value = SqlType> {
    prop_oneof![
        Just(SqlType::Bool),
        Just(SqlType::Int),
        Just(SqlType::Float),
        Just(SqlType::Decimal),
        Just(SqlType::String),
        Just(SqlType::Bytes),
        Just(SqlType::Date),
        Just(SqlType::Timestamp),
        Just(SqlType::TimestampTz),
        Just(SqlType::Interval),
        Just(SqlType::Uuid),
        Just(SqlType::Inet),
        Just(SqlType::Oid),
        Just(SqlType::Any),
    ]
}

fn sql_type() -> impl Strategy<Value = SqlType> {
    prop_oneof![
        4 => scalar_type(),
        1 => scalar_type().prop_map(SqlType::array),
    ]
}

fn overload() -> impl Strategy<Value = Overload> {
    (
        prop::collection::vec(sql_type(), 0..4),
        sql_type(),
        prop::option::of(prop_oneof![Just("Math"), Just("String and Byte"), Just("Compatibility")]),
        any::<bool>(),
        prop_oneof![Just(""), Just("Does a thing."), Just(NOT_USABLE_INFO)],
    )
        .prop_map(|(args, ret, category, window, info)| {
            let mut o = Overload::new(TypeList::args(args), ret).with_info(info);
            if let Some(category) = category {
                o = o.with_category(category);
            }
            if window { o.window() } else { o }
        })
}

fn function_catalog() -> impl Strategy<Value = Vec<(String, Vec<Overload>)>> {
    prop::collection::vec(("[a-cA-C]{1,3}", prop::collection::vec(overload(), 1..4)), 0..12)
}

fn build_catalog(entries: &[(String, Vec<Overload>)]) -> FunctionCatalog {
    let mut catalog = FunctionCatalog::new();
    for (name, overloads) in entries {
        catalog.insert(name.clone(), overloads.clone());
    }
    catalog
}

fn operator_overloads() -> impl Strategy<Value = (Vec<UnaryOverload>, Vec<BinaryOverload>)> {
    (
        prop::collection::vec((sql_type(), sql_type()).prop_map(|(a, r)| UnaryOverload::new(a, r)), 0..6),
        prop::collection::vec(
            (sql_type(), sql_type(), sql_type()).prop_map(|(l, r, ret)| BinaryOverload::new(l, r, ret)),
            0..6,
        ),
    )
}

fn operator_catalog(unary: Vec<UnaryOverload>, binary: Vec<BinaryOverload>) -> OperatorCatalog {
    let mut catalog = OperatorCatalog::new();
    catalog.add_binary(BinaryOperator::Minus, binary);
    catalog.add_unary(UnaryOperator::Minus, unary);
    catalog
}

// =============================================================================
// Function Properties
// =============================================================================

proptest! {
    /// Property: identical catalogs render to identical bytes
    #[test]
    fn functions_are_deterministic(entries in function_catalog(), categorize in any::<bool>()) {
        let a = generate_functions(&build_catalog(&entries), categorize);
        let b = generate_functions(&build_catalog(&entries), categorize);
        prop_assert_eq!(a, b);
    }

    /// Property: overload order within an entry never changes the output
    #[test]
    fn functions_ignore_overload_order(entries in function_catalog(), categorize in any::<bool>()) {
        let reversed: Vec<_> = entries
            .iter()
            .map(|(name, overloads)| (name.clone(), overloads.iter().rev().cloned().collect::<Vec<_>>()))
            .collect();
        prop_assert_eq!(
            generate_functions(&build_catalog(&entries), categorize),
            generate_functions(&build_catalog(&reversed), categorize)
        );
    }

    /// Property: uncategorized row count equals the usable overloads of first-seen names
    #[test]
    fn row_count_matches_first_seen_overloads(entries in function_catalog()) {
        let catalog = build_catalog(&entries);
        let mut seen = std::collections::HashSet::new();
        let expected: usize = catalog
            .iter()
            .filter(|e| seen.insert(e.name.to_lowercase()))
            .map(|e| e.overloads.iter().filter(|o| o.info != NOT_USABLE_INFO).count())
            .sum();

        let docs = collect_functions(&catalog, false);
        let rows: usize = docs.categories().iter().map(|c| c.rows.len()).sum();
        prop_assert_eq!(rows, expected);
    }

    /// Property: Compatibility is the last category whenever it is present
    #[test]
    fn compatibility_is_last(entries in function_catalog()) {
        let docs = collect_functions(&build_catalog(&entries), true);
        let names: Vec<_> = docs.category_names().collect();
        if let Some(pos) = names.iter().position(|n| *n == "Compatibility") {
            prop_assert_eq!(pos, names.len() - 1);
        }
        let rest: Vec<_> = names.iter().filter(|n| **n != "Compatibility").collect();
        let mut sorted = rest.clone();
        sorted.sort();
        prop_assert_eq!(rest, sorted);
    }

    /// Property: documented names are lowercase and never repeat across case variants
    #[test]
    fn rows_use_lowercase_names(entries in function_catalog()) {
        let docs = collect_functions(&build_catalog(&entries), false);
        for row in docs.categories().iter().flat_map(|c| c.rows.iter()) {
            let name = row
                .strip_prefix("<tr><td><code>")
                .and_then(|r| r.split('(').next())
                .unwrap_or_default();
            prop_assert_eq!(name.to_lowercase(), name);
        }
    }
}

// =============================================================================
// Operator Properties
// =============================================================================

proptest! {
    /// Property: operator output does not depend on catalog insertion order
    #[test]
    fn operators_ignore_insertion_order((unary, binary) in operator_overloads()) {
        let forward = operator_catalog(unary.clone(), binary.clone());
        let backward = operator_catalog(
            unary.into_iter().rev().collect(),
            binary.into_iter().rev().collect(),
        );
        prop_assert_eq!(generate_operators(&forward), generate_operators(&backward));
    }

    /// Property: unary signatures always precede binary ones within a symbol
    #[test]
    fn unary_before_binary((unary, binary) in operator_overloads()) {
        let docs = collect_operators(&operator_catalog(unary, binary));
        for (_, ops) in docs.iter() {
            let first_binary = ops.iter().position(|o| !o.is_unary()).unwrap_or(ops.len());
            prop_assert!(ops[first_binary..].iter().all(|o| !o.is_unary()));
        }
    }
}

// =============================================================================
// Linking Properties
// =============================================================================

proptest! {
    /// Property: every recognized type in an argument list gets exactly one link
    #[test]
    fn every_linked_type_gets_one_link(tokens in prop::collection::vec(prop::sample::select(LINKED_TYPES), 1..6)) {
        let list = tokens.join(", ");
        let linked = link_arguments(&list);
        prop_assert_eq!(linked.matches("<a href=").count(), tokens.len());
    }

    /// Property: unrecognized lowercase words pass through untouched
    #[test]
    fn unknown_words_pass_through(word in "[a-z]{1,12}") {
        prop_assume!(!LINKED_TYPES.contains(&word.as_str()) && word != "timestamptz");
        prop_assert_eq!(link_type_name(&word), word.clone());
        prop_assert_eq!(link_arguments(&word), word);
    }
}
