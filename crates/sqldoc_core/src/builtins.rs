//! Default builtin catalogs.
//!
//! These constructors return a representative catalog of a SQL engine's builtins: scalar functions, aggregates and
//! operators. They are what the `sqldoc` CLI documents when no catalog file is given, and they double as a realistic
//! fixture for tests (mixed-case aliases, compatibility-only entries, window functions).
//!
//! Every call builds a fresh value; there is no shared global table.
//!
//! ## Notes
//! - Every scalar function is also registered under its upper-case spelling, mirroring how engines keep case variants
//!   for fast case-insensitive lookup. The lower-case spelling is always registered first.

use crate::functions::{FunctionCatalog, NOT_USABLE_INFO, Overload, TypeList};
use crate::operators::{
    BinaryOperator, BinaryOverload, ComparisonOperator, ComparisonOverload, OperatorCatalog, UnaryOperator,
    UnaryOverload,
};
use crate::types::SqlType;

pub const CATEGORY_STRING: &str = "String and Byte";
pub const CATEGORY_MATH: &str = "Math and Numeric";
pub const CATEGORY_DATETIME: &str = "Date and Time";
pub const CATEGORY_ID_GENERATION: &str = "ID Generation";
pub const CATEGORY_ARRAY: &str = "Array";
pub const CATEGORY_SYSTEM_INFO: &str = "System Info";
pub const CATEGORY_COMPARISON: &str = "Comparison";
pub const CATEGORY_WINDOW: &str = "Window";
pub const CATEGORY_COMPATIBILITY: &str = "Compatibility";

fn overload(types: TypeList, ret: SqlType, category: &str, info: &str) -> Overload {
    Overload::new(types, ret).with_category(category).with_info(info)
}

/// Scalar builtin functions, including window functions.
pub fn functions() -> FunctionCatalog {
    use SqlType::*;

    let mut catalog = FunctionCatalog::new();

    // ==================== String and Byte ====================
    catalog.insert(
        "lower",
        vec![overload(
            TypeList::named([("val", String)]),
            String,
            CATEGORY_STRING,
            "Converts all characters in `val` to their lower-case equivalents.",
        )],
    );
    catalog.insert(
        "upper",
        vec![overload(
            TypeList::named([("val", String)]),
            String,
            CATEGORY_STRING,
            "Converts all characters in `val` to their upper-case equivalents.",
        )],
    );
    catalog.insert(
        "length",
        vec![
            overload(
                TypeList::named([("val", String)]),
                Int,
                CATEGORY_STRING,
                "Calculates the number of characters in `val`.",
            ),
            overload(
                TypeList::named([("val", Bytes)]),
                Int,
                CATEGORY_STRING,
                "Calculates the number of bytes in `val`.",
            ),
        ],
    );
    catalog.insert(
        "concat",
        vec![overload(
            TypeList::variadic(String),
            String,
            CATEGORY_STRING,
            "Concatenates a comma-separated list of strings.",
        )],
    );
    catalog.insert(
        "substring",
        vec![
            overload(
                TypeList::named([("input", String), ("substr_pos", Int)]),
                String,
                CATEGORY_STRING,
                "Returns a substring of `input` starting at `substr_pos` (count starts at 1).",
            ),
            overload(
                TypeList::named([("input", String), ("start_pos", Int), ("length", Int)]),
                String,
                CATEGORY_STRING,
                "Returns a substring of `input` starting at `start_pos` (count starts at 1) and including up to \
                 `length` characters.",
            ),
        ],
    );
    catalog.insert(
        "to_hex",
        vec![overload(
            TypeList::named([("val", Int)]),
            String,
            CATEGORY_STRING,
            "Converts `val` to its hexadecimal representation.",
        )],
    );
    catalog.insert(
        "to_english",
        vec![Overload::new(TypeList::named([("val", Int)]), String).with_info(
            "This function enunciates the value of its argument using English cardinals.",
        )],
    );

    // ==================== Math and Numeric ====================
    catalog.insert(
        "abs",
        vec![
            overload(
                TypeList::named([("val", Float)]),
                Float,
                CATEGORY_MATH,
                "Calculates the absolute value of `val`.",
            ),
            overload(
                TypeList::named([("val", Decimal)]),
                Decimal,
                CATEGORY_MATH,
                "Calculates the absolute value of `val`.",
            ),
            overload(
                TypeList::named([("val", Int)]),
                Int,
                CATEGORY_MATH,
                "Calculates the absolute value of `val`.",
            ),
        ],
    );
    catalog.insert(
        "sqrt",
        vec![
            overload(
                TypeList::named([("val", Float)]),
                Float,
                CATEGORY_MATH,
                "Calculates the square root of `val`.",
            ),
            overload(
                TypeList::named([("val", Decimal)]),
                Decimal,
                CATEGORY_MATH,
                "Calculates the square root of `val`.",
            ),
        ],
    );
    catalog.insert(
        "round",
        vec![overload(
            TypeList::named([("input", Float), ("decimal_accuracy", Int)]),
            Float,
            CATEGORY_MATH,
            "Keeps `decimal_accuracy` number of figures to the right of the zero position in `input` using half to \
             even (banker's) rounding.",
        )],
    );
    catalog.insert(
        "pi",
        vec![overload(TypeList::args([]), Float, CATEGORY_MATH, "Returns the value for pi (3.141592653589793).")],
    );
    catalog.insert(
        "random",
        vec![overload(TypeList::args([]), Float, CATEGORY_MATH, "Returns a random float between 0 and 1.")],
    );

    // ==================== Date and Time ====================
    catalog.insert(
        "now",
        vec![
            overload(
                TypeList::args([]),
                TimestampTz,
                CATEGORY_DATETIME,
                "Returns the current transaction's timestamp.",
            ),
            overload(
                TypeList::args([]),
                Timestamp,
                CATEGORY_DATETIME,
                "Returns the current transaction's timestamp.",
            ),
        ],
    );
    catalog.insert(
        "current_date",
        vec![overload(TypeList::args([]), Date, CATEGORY_DATETIME, "Returns the current date.")],
    );
    catalog.insert(
        "age",
        vec![overload(
            TypeList::named([("val", TimestampTz)]),
            Interval,
            CATEGORY_DATETIME,
            "Calculates the interval between `val` and the current time.",
        )],
    );
    catalog.insert(
        "extract",
        vec![overload(
            TypeList::named([("element", String), ("input", Timestamp)]),
            Int,
            CATEGORY_DATETIME,
            "Extracts `element` from `input`.\n\nCompatible elements: year, quarter, month, week, dayofweek, \
             dayofyear, hour, minute, second, millisecond, microsecond, epoch",
        )],
    );

    // ==================== ID Generation ====================
    catalog.insert(
        "gen_random_uuid",
        vec![overload(TypeList::args([]), Uuid, CATEGORY_ID_GENERATION, "Generates a random UUID and returns it as a value of UUID type.")],
    );
    catalog.insert(
        "unique_rowid",
        vec![overload(
            TypeList::args([]),
            Int,
            CATEGORY_ID_GENERATION,
            "Returns a unique ID used by the engine to generate unique row IDs if a Primary Key isn't defined for \
             the table. The value is a combination of the insert timestamp and the ID of the node executing the \
             statement, which guarantees this combination is globally unique.",
        )],
    );
    catalog.insert(
        "uuid_v4",
        vec![overload(TypeList::args([]), Bytes, CATEGORY_ID_GENERATION, "Returns a UUID.")],
    );

    // ==================== Array ====================
    catalog.insert(
        "array_length",
        vec![overload(
            TypeList::named([("input", SqlType::array(Any)), ("array_dimension", Int)]),
            Int,
            CATEGORY_ARRAY,
            "Calculates the length of `input` on the provided `array_dimension`. However, because multiple \
             dimensions are not yet supported, the only supported `array_dimension` is **1**.",
        )],
    );
    catalog.insert(
        "array_append",
        vec![
            overload(
                TypeList::named([("array", SqlType::array(Int)), ("elem", Int)]),
                SqlType::array(Int),
                CATEGORY_ARRAY,
                "Appends `elem` to `array`, returning the result.",
            ),
            overload(
                TypeList::named([("array", SqlType::array(String)), ("elem", String)]),
                SqlType::array(String),
                CATEGORY_ARRAY,
                "Appends `elem` to `array`, returning the result.",
            ),
        ],
    );

    // ==================== Comparison ====================
    catalog.insert(
        "greatest",
        vec![overload(
            TypeList::homogeneous(),
            Any,
            CATEGORY_COMPARISON,
            "Returns the element with the greatest value.",
        )],
    );
    catalog.insert(
        "least",
        vec![overload(
            TypeList::homogeneous(),
            Any,
            CATEGORY_COMPARISON,
            "Returns the element with the lowest value.",
        )],
    );

    // ==================== IP address ====================
    catalog.insert(
        "host",
        vec![Overload::new(TypeList::named([("val", Inet)]), String)
            .with_info("Extracts the address part of the combined address/prefixlen value as text.")],
    );
    catalog.insert(
        "family",
        vec![Overload::new(TypeList::named([("val", Inet)]), Int)
            .with_info("Extracts the IP family of the value; 4 for IPv4, 6 for IPv6.")],
    );

    // ==================== System Info ====================
    catalog.insert(
        "version",
        vec![overload(TypeList::args([]), String, CATEGORY_SYSTEM_INFO, "Returns the node's version of the engine.")],
    );
    catalog.insert(
        "current_database",
        vec![overload(TypeList::args([]), String, CATEGORY_SYSTEM_INFO, "Returns the current database.")],
    );

    // ==================== Window ====================
    catalog.insert(
        "row_number",
        vec![
            overload(
                TypeList::args([]),
                Int,
                CATEGORY_WINDOW,
                "Calculates the number of the current row within its partition, counting from 1.",
            )
            .window(),
        ],
    );
    catalog.insert(
        "rank",
        vec![
            overload(
                TypeList::args([]),
                Int,
                CATEGORY_WINDOW,
                "Calculates the rank of the current row with gaps; same as row_number of its first peer.",
            )
            .window(),
        ],
    );
    catalog.insert(
        "lag",
        vec![
            overload(
                TypeList::named([("val", Any)]),
                Any,
                CATEGORY_WINDOW,
                "Returns `val` evaluated at the previous row within current row's partition; if there is no such \
                 row, instead returns null.",
            )
            .window(),
        ],
    );

    // ==================== Compatibility ====================
    catalog.insert(
        "format_type",
        vec![overload(
            TypeList::named([("type_oid", Oid), ("typemod", Int)]),
            String,
            CATEGORY_COMPATIBILITY,
            "Returns the SQL name of a data type that is identified by its type OID and possibly a type modifier. \
             Currently, the type modifier is ignored.",
        )],
    );
    catalog.insert(
        "pg_typeof",
        vec![overload(
            TypeList::named([("val", Any)]),
            String,
            CATEGORY_COMPATIBILITY,
            "Returns the type of its argument as a string.",
        )],
    );
    catalog.insert(
        "obj_description",
        vec![
            overload(TypeList::named([("object_oid", Oid)]), String, CATEGORY_COMPATIBILITY, NOT_USABLE_INFO),
            overload(
                TypeList::named([("object_oid", Oid), ("catalog_name", String)]),
                String,
                CATEGORY_COMPATIBILITY,
                NOT_USABLE_INFO,
            ),
        ],
    );
    catalog.insert(
        "pg_get_userbyid",
        vec![overload(
            TypeList::named([("role_oid", Oid)]),
            String,
            CATEGORY_COMPATIBILITY,
            "Returns the role name for a given ID.",
        )],
    );
    catalog.insert(
        "collation_for",
        vec![
            overload(
                TypeList::named([("str", SqlType::collated(""))]),
                String,
                CATEGORY_COMPATIBILITY,
                "Returns the collation of the argument",
            ),
        ],
    );

    with_upper_case_aliases(catalog)
}

/// Register every entry again under its upper-case spelling, after all lower-case entries.
fn with_upper_case_aliases(catalog: FunctionCatalog) -> FunctionCatalog {
    let aliases: Vec<_> = catalog
        .iter()
        .map(|entry| (entry.name.to_uppercase(), entry.overloads.clone()))
        .filter(|(upper, _)| catalog.get(upper).is_none())
        .collect();

    let mut catalog = catalog;
    for (name, overloads) in aliases {
        catalog.insert(name, overloads);
    }
    catalog
}

/// Aggregate builtin functions.
///
/// Aggregates are documented without categories, so none of these carry one.
pub fn aggregates() -> FunctionCatalog {
    use SqlType::*;

    let aggregate = |types: TypeList, ret: SqlType, info: &str| Overload::new(types, ret).with_info(info);

    let mut catalog = FunctionCatalog::new();
    catalog.insert(
        "avg",
        vec![
            aggregate(TypeList::args([Int]), Decimal, "Calculates the average of the selected values."),
            aggregate(TypeList::args([Float]), Float, "Calculates the average of the selected values."),
            aggregate(TypeList::args([Decimal]), Decimal, "Calculates the average of the selected values."),
        ],
    );
    catalog.insert(
        "bool_and",
        vec![aggregate(TypeList::args([Bool]), Bool, "Calculates the boolean value of `AND`ing all selected values.")],
    );
    catalog.insert(
        "bool_or",
        vec![aggregate(TypeList::args([Bool]), Bool, "Calculates the boolean value of `OR`ing all selected values.")],
    );
    catalog.insert(
        "count",
        vec![aggregate(TypeList::args([Any]), Int, "Calculates the number of selected elements.")],
    );
    catalog.insert(
        "count_rows",
        vec![aggregate(TypeList::args([]), Int, "Calculates the number of rows.")],
    );
    catalog.insert(
        "max",
        vec![
            aggregate(TypeList::args([Int]), Int, "Identifies the maximum selected value."),
            aggregate(TypeList::args([Float]), Float, "Identifies the maximum selected value."),
            aggregate(TypeList::args([String]), String, "Identifies the maximum selected value."),
            aggregate(TypeList::args([Timestamp]), Timestamp, "Identifies the maximum selected value."),
        ],
    );
    catalog.insert(
        "min",
        vec![
            aggregate(TypeList::args([Int]), Int, "Identifies the minimum selected value."),
            aggregate(TypeList::args([Float]), Float, "Identifies the minimum selected value."),
            aggregate(TypeList::args([String]), String, "Identifies the minimum selected value."),
            aggregate(TypeList::args([Timestamp]), Timestamp, "Identifies the minimum selected value."),
        ],
    );
    catalog.insert(
        "sum",
        vec![
            aggregate(TypeList::args([Int]), Decimal, "Calculates the sum of the selected values."),
            aggregate(TypeList::args([Float]), Float, "Calculates the sum of the selected values."),
            aggregate(TypeList::args([Decimal]), Decimal, "Calculates the sum of the selected values."),
            aggregate(TypeList::args([Interval]), Interval, "Calculates the sum of the selected values."),
        ],
    );
    catalog.insert(
        "array_agg",
        vec![
            aggregate(TypeList::args([Int]), SqlType::array(Int), "Aggregates the selected values into an array."),
            aggregate(
                TypeList::args([String]),
                SqlType::array(String),
                "Aggregates the selected values into an array.",
            ),
        ],
    );
    catalog.insert(
        "concat_agg",
        vec![
            aggregate(TypeList::args([String]), String, "Concatenates all selected values."),
            aggregate(TypeList::args([Bytes]), Bytes, "Concatenates all selected values."),
        ],
    );
    catalog.insert(
        "xor_agg",
        vec![aggregate(TypeList::args([Int]), Int, "Calculates the bitwise XOR of the selected values.")],
    );
    catalog.insert(
        "stddev",
        vec![
            aggregate(TypeList::args([Int]), Decimal, "Calculates the standard deviation of the selected values."),
            aggregate(TypeList::args([Float]), Float, "Calculates the standard deviation of the selected values."),
        ],
    );
    catalog.insert(
        "variance",
        vec![
            aggregate(TypeList::args([Int]), Decimal, "Calculates the variance of the selected values."),
            aggregate(TypeList::args([Float]), Float, "Calculates the variance of the selected values."),
        ],
    );
    catalog
}

/// Unary, binary and comparison operator overloads.
pub fn operators() -> OperatorCatalog {
    use SqlType::*;

    let unary = |t: SqlType| UnaryOverload::new(t.clone(), t);
    let bin = |l: SqlType, r: SqlType, ret: SqlType| BinaryOverload::new(l, r, ret);
    let same = |t: SqlType| BinaryOverload::new(t.clone(), t.clone(), t);
    let cmp = |t: SqlType| ComparisonOverload::new(t.clone(), t);

    let mut catalog = OperatorCatalog::new();

    catalog.add_unary(
        UnaryOperator::Minus,
        vec![unary(Int), unary(Float), unary(Decimal), unary(Interval)],
    );
    catalog.add_unary(UnaryOperator::Complement, vec![unary(Int)]);

    catalog.add_binary(
        BinaryOperator::Plus,
        vec![
            same(Int),
            same(Float),
            same(Decimal),
            bin(Int, Decimal, Decimal),
            bin(Decimal, Int, Decimal),
            bin(Date, Int, Date),
            bin(Int, Date, Date),
            bin(Timestamp, Interval, Timestamp),
            bin(Interval, Timestamp, Timestamp),
            bin(TimestampTz, Interval, TimestampTz),
            bin(Interval, TimestampTz, TimestampTz),
            same(Interval),
        ],
    );
    catalog.add_binary(
        BinaryOperator::Minus,
        vec![
            same(Int),
            same(Float),
            same(Decimal),
            bin(Int, Decimal, Decimal),
            bin(Decimal, Int, Decimal),
            bin(Date, Int, Date),
            bin(Date, Date, Int),
            bin(Timestamp, Timestamp, Interval),
            bin(TimestampTz, TimestampTz, Interval),
            bin(Timestamp, Interval, Timestamp),
            bin(TimestampTz, Interval, TimestampTz),
            same(Interval),
        ],
    );
    catalog.add_binary(
        BinaryOperator::Mult,
        vec![
            same(Int),
            same(Float),
            same(Decimal),
            bin(Int, Interval, Interval),
            bin(Interval, Int, Interval),
        ],
    );
    catalog.add_binary(
        BinaryOperator::Div,
        vec![
            bin(Int, Int, Decimal),
            same(Float),
            same(Decimal),
            bin(Interval, Int, Interval),
        ],
    );
    catalog.add_binary(
        BinaryOperator::FloorDiv,
        vec![same(Int), same(Float), same(Decimal)],
    );
    catalog.add_binary(BinaryOperator::Mod, vec![same(Int), same(Float), same(Decimal)]);
    catalog.add_binary(BinaryOperator::Pow, vec![same(Int), same(Float), same(Decimal)]);
    catalog.add_binary(BinaryOperator::Bitand, vec![same(Int)]);
    catalog.add_binary(BinaryOperator::Bitor, vec![same(Int)]);
    catalog.add_binary(BinaryOperator::Bitxor, vec![same(Int)]);
    catalog.add_binary(BinaryOperator::LShift, vec![same(Int)]);
    catalog.add_binary(BinaryOperator::RShift, vec![same(Int)]);
    catalog.add_binary(
        BinaryOperator::Concat,
        vec![
            same(String),
            same(Bytes),
            bin(SqlType::array(Int), Int, SqlType::array(Int)),
            bin(Int, SqlType::array(Int), SqlType::array(Int)),
            same(SqlType::array(Int)),
        ],
    );

    let ordered = [
        Bool,
        Int,
        Float,
        Decimal,
        String,
        SqlType::collated(""),
        Bytes,
        Date,
        Timestamp,
        TimestampTz,
        Interval,
        Uuid,
        Inet,
        Oid,
        Tuple(vec![]),
    ];
    let comparable: Vec<_> = ordered.iter().cloned().map(cmp).collect();
    catalog.add_comparison(ComparisonOperator::Eq, comparable.clone());
    catalog.add_comparison(ComparisonOperator::Lt, comparable.clone());
    catalog.add_comparison(ComparisonOperator::Le, comparable);
    catalog.add_comparison(
        ComparisonOperator::IsNotDistinctFrom,
        vec![cmp(Null), cmp(Bool), cmp(Int), cmp(String)],
    );
    catalog.add_comparison(
        ComparisonOperator::In,
        ordered
            .iter()
            .filter(|t| !matches!(t, Tuple(_)))
            .cloned()
            .map(|t| ComparisonOverload::new(t, Tuple(vec![])))
            .collect(),
    );
    for op in [
        ComparisonOperator::Like,
        ComparisonOperator::ILike,
        ComparisonOperator::SimilarTo,
        ComparisonOperator::RegMatch,
        ComparisonOperator::RegIMatch,
    ] {
        catalog.add_comparison(op, vec![cmp(String)]);
    }

    catalog
}
