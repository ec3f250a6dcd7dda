//! Shared metadata for the operator registries.
//!
//! Each operator family (unary, binary, comparison) has a stable id enum and a `const` registry table of
//! [`OperatorInfo`] entries. The table is the single source of truth for the SQL spelling of an operator; `Display`,
//! `as_str` and `from_spelling` all go through it.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Lookup by spelling is **case-sensitive** (`LIKE`, not `like`).

/// Registry entry for one operator kind.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo<Id> {
    pub id: Id,
    /// SQL spelling shown in docs (e.g. `"+"`, `"IS NOT DISTINCT FROM"`).
    pub spelling: &'static str,
    pub description: &'static str,
}

/// Find the registry entry for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub(crate) fn info_in<Id: Copy + PartialEq + std::fmt::Debug>(
    table: &'static [OperatorInfo<Id>],
    id: Id,
) -> &'static OperatorInfo<Id> {
    table
        .iter()
        .find(|o| o.id == id)
        .unwrap_or_else(|| panic!("operator info missing for {id:?}"))
}

/// Resolve a spelling to its id within `table`.
pub(crate) fn lookup_in<Id: Copy>(table: &'static [OperatorInfo<Id>], spelling: &str) -> Option<Id> {
    table.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

pub(crate) const fn op<Id>(id: Id, spelling: &'static str, description: &'static str) -> OperatorInfo<Id> {
    OperatorInfo {
        id,
        spelling,
        description,
    }
}
