//! Equality filters applied to parsed rows

use indexmap::IndexMap;

use crate::table::Column;

/// A set of (column name → required value) equality constraints
///
/// Constraints are conjunctive: a row passes only if every registered value
/// matches. Several values may be registered for one column; each is checked
/// independently. A filter naming a column absent from the header is inert:
/// it never rejects a row.
///
/// Lookup against a header with duplicate column names resolves to the
/// first matching position.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    // Insertion-ordered so filters are evaluated in registration order
    filters: IndexMap<String, Vec<String>>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Register one equality constraint
    pub fn add(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.filters
            .entry(column.into())
            .or_default()
            .push(value.into());
    }

    /// Check whether any constraint is registered
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of registered constraints
    pub fn len(&self) -> usize {
        self.filters.values().map(Vec::len).sum()
    }

    /// Decide whether a row's values satisfy every constraint
    pub fn matches(&self, columns: &[Column], values: &[String]) -> bool {
        for (name, required) in &self.filters {
            let Some(pos) = columns.iter().position(|c| &c.name == name) else {
                // Unknown column: the constraint can never bind, skip it
                continue;
            };
            for want in required {
                if values.get(pos) != Some(want) {
                    return false;
                }
            }
        }
        true
    }
}
