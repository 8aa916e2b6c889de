//! Condition accumulation primitives for dynamic `WHERE` clauses.

use crate::date_range::DateRange;
use crate::value::BindValue;

/// A finished filter predicate: the joined condition string and its bound
/// parameters in placeholder order.
///
/// Invariant: the number of distinct `$N` tokens in `clause` equals
/// `params.len()`, and every index from 1 to that count appears at least
/// once. A placeholder may appear more than once when one bound value is
/// tested against several columns (keyword search).
#[derive(Debug, Clone)]
pub struct WhereClause {
    /// SQL boolean expression, suitable for `WHERE {clause}`.
    pub clause: String,
    /// Bound values; the Nth entry binds `$N`.
    pub params: Vec<BindValue>,
}

impl WhereClause {
    /// Number of bound parameters (equals the highest placeholder index).
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// Growing set of `AND`-joined conditions with placeholder bookkeeping.
///
/// Seeded with the neutral `1=1` so joining is uniform for any condition
/// count, including zero. Parameters can only enter through [`Self::bind`],
/// which derives the next placeholder index from the parameter list itself,
/// so interleaved helper calls can never reuse or skip an index. One
/// accumulator per query build is the whole discipline.
#[derive(Debug)]
pub struct ConditionSet {
    conditions: Vec<String>,
    params: Vec<BindValue>,
}

impl ConditionSet {
    /// Create a new set seeded with the neutral base condition.
    pub fn new() -> Self {
        Self {
            conditions: vec!["1=1".to_string()],
            params: Vec::new(),
        }
    }

    /// Append a bound value and return its 1-based placeholder index.
    pub fn bind(&mut self, value: impl Into<BindValue>) -> usize {
        self.params.push(value.into());
        self.params.len()
    }

    /// Append a raw condition that binds no parameters of its own.
    ///
    /// Used for database-clock comparisons (`NOW()`) and structural guards;
    /// the condition text must not contain user-supplied fragments.
    pub fn push(&mut self, condition: impl Into<String>) {
        self.conditions.push(condition.into());
    }

    /// Append `column = $N` for the given value.
    pub fn push_eq(&mut self, column: &str, value: impl Into<BindValue>) {
        let n = self.bind(value);
        self.push(format!("{column} = ${n}"));
    }

    /// Append `column <op> $N` for the given comparison operator.
    pub fn push_cmp(&mut self, column: &str, op: &str, value: impl Into<BindValue>) {
        let n = self.bind(value);
        self.push(format!("{column} {op} ${n}"));
    }

    /// Append an `= ANY($N)` membership test with a single array bind.
    pub fn push_any(&mut self, column: &str, values: impl Into<BindValue>) {
        let n = self.bind(values);
        self.push(format!("{column} = ANY(${n})"));
    }

    /// Append an equality test against an enum-typed column.
    ///
    /// The value binds as text and the placeholder is cast back to the
    /// column's enum type, keeping the column side uncast so indexes apply.
    pub fn push_enum_eq(&mut self, column: &str, type_name: &str, value: impl Into<BindValue>) {
        let n = self.bind(value);
        self.push(format!("{column} = ${n}::{type_name}"));
    }

    /// Append an `ANY` membership test against an enum-typed column, with
    /// the bound `text[]` cast to the enum array type.
    pub fn push_enum_any(&mut self, column: &str, type_name: &str, values: impl Into<BindValue>) {
        let n = self.bind(values);
        self.push(format!("{column} = ANY(${n}::{type_name}[])"));
    }

    /// Append a keyword search across several columns.
    ///
    /// One `%...%` pattern is bound once and reused by every `ILIKE`
    /// comparison; internal whitespace in the keyword collapses to single
    /// spaces.
    pub fn push_keyword(&mut self, columns: &[&str], keyword: &str) {
        let n = self.bind(BindValue::Text(keyword_pattern(keyword)));
        let branches: Vec<String> = columns.iter().map(|c| format!("{c} ILIKE ${n}")).collect();
        self.push(format!("({})", branches.join(" OR ")));
    }

    /// Append the half-open bounds of a date range against one column.
    ///
    /// The lower bound compares with `>=`, the upper with `<`; this is the
    /// single place those operators are chosen for every date-bounded field.
    pub fn push_date_range(&mut self, column: &str, range: &DateRange) {
        if let Some(start) = range.start {
            let n = self.bind(start);
            self.push(format!("{column} >= ${n}"));
        }
        if let Some(end) = range.end {
            let n = self.bind(end);
            self.push(format!("{column} < ${n}"));
        }
    }

    /// Join the accumulated conditions into a finished [`WhereClause`].
    pub fn into_where_clause(self) -> WhereClause {
        WhereClause {
            clause: self.conditions.join(" AND "),
            params: self.params,
        }
    }
}

impl Default for ConditionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse internal whitespace and wrap the keyword for `ILIKE` matching.
pub fn keyword_pattern(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("%{collapsed}%")
}


#[cfg(test)]
mod tests {
    use super::test_support::{assert_placeholders_aligned, placeholder_indices};
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_set_yields_neutral_clause() {
        let filter = ConditionSet::new().into_where_clause();
        assert_eq!(filter.clause, "1=1");
        assert!(filter.params.is_empty());
    }

    #[test]
    fn test_interleaved_helpers_number_placeholders_sequentially() {
        let mut set = ConditionSet::new();
        set.push_eq("c.region", "NA");
        set.push("c.deleted_at IS NULL");
        set.push_cmp("c.credit_limit_cents", ">=", 50_000i64);
        set.push_any(
            "c.id",
            vec![uuid::Uuid::nil(), uuid::Uuid::from_u128(7)],
        );
        let filter = set.into_where_clause();

        assert_eq!(
            filter.clause,
            "1=1 AND c.region = $1 AND c.deleted_at IS NULL AND \
             c.credit_limit_cents >= $2 AND c.id = ANY($3)"
        );
        assert_eq!(filter.params.len(), 3);
        assert_placeholders_aligned(&filter);
    }

    #[test]
    fn test_keyword_binds_once_and_reuses_placeholder() {
        let mut set = ConditionSet::new();
        set.push_keyword(&["b.name", "b.code", "b.description"], "  Omega   Complex ");
        let filter = set.into_where_clause();

        assert_eq!(
            filter.clause,
            "1=1 AND (b.name ILIKE $1 OR b.code ILIKE $1 OR b.description ILIKE $1)"
        );
        assert_eq!(
            filter.params,
            vec![BindValue::Text("%Omega Complex%".to_string())]
        );
        assert_eq!(filter.clause.matches("$1").count(), 3);
    }

    #[test]
    fn test_date_range_uses_half_open_operators() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let mut set = ConditionSet::new();
        set.push_date_range("o.created_at", &DateRange::from_bounds(Some(day), Some(day)));
        let filter = set.into_where_clause();

        assert_eq!(
            filter.clause,
            "1=1 AND o.created_at >= $1 AND o.created_at < $2"
        );
        assert!(!filter.clause.contains("<="));
        assert_eq!(filter.params.len(), 2);
    }

    #[test]
    fn test_unbounded_date_range_appends_nothing() {
        let mut set = ConditionSet::new();
        set.push_date_range("o.created_at", &DateRange::from_bounds(None, None));
        let filter = set.into_where_clause();
        assert_eq!(filter.clause, "1=1");
        assert!(filter.params.is_empty());
    }

    #[test]
    fn test_placeholder_scanner_handles_double_digits() {
        let indices = placeholder_indices("a = $1 AND b = $12 AND c = $2");
        assert!(indices.contains(&12));
        assert_eq!(indices.len(), 3);
    }
}
