//! Dynamic WHERE-clause construction for catalog queries.
//!
//! Search filters arrive as optional parameters. Each active filter
//! contributes one parameterized SQL fragment and one typed bind value;
//! fragments are ANDed together and values are bound in fragment order,
//! so placeholder indexes always line up with the value list. User input
//! never reaches the SQL text itself, only the bind values.

use sqlx::postgres::PgArguments;
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::Postgres;

/// Typed bind value for dynamically-built queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    BigInt(i64),
    Int(i32),
    Real(f32),
    Text(String),
    Bool(bool),
}

/// An accumulating set of ANDed WHERE conditions and their bind values.
#[derive(Debug, Default)]
pub struct PredicateSet {
    conditions: Vec<String>,
    values: Vec<BindValue>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder index the next pushed value will receive.
    pub fn next_index(&self) -> usize {
        self.values.len() + 1
    }

    /// Add a raw condition whose fragment already references
    /// [`next_index`](Self::next_index).
    pub fn push(&mut self, condition: String, value: BindValue) {
        self.conditions.push(condition);
        self.values.push(value);
    }

    /// Case-insensitive substring match. LIKE metacharacters in the
    /// needle are escaped so they match literally.
    pub fn contains(&mut self, column: &str, needle: &str) {
        let idx = self.next_index();
        self.push(
            format!("{column} ILIKE ${idx}"),
            BindValue::Text(format!("%{}%", escape_like(needle))),
        );
    }

    /// Exact equality.
    pub fn equals(&mut self, column: &str, value: BindValue) {
        let idx = self.next_index();
        self.push(format!("{column} = ${idx}"), value);
    }

    /// Lower bound that keeps rows with no value in the column.
    pub fn at_least(&mut self, column: &str, value: BindValue) {
        let idx = self.next_index();
        self.push(format!("({column} >= ${idx} OR {column} IS NULL)"), value);
    }

    /// Upper bound that keeps rows with no value in the column.
    pub fn at_most(&mut self, column: &str, value: BindValue) {
        let idx = self.next_index();
        self.push(format!("({column} <= ${idx} OR {column} IS NULL)"), value);
    }

    /// The assembled `WHERE ...` clause, or an empty string when no
    /// conditions are active.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn values(&self) -> &[BindValue] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Escape `\`, `%`, and `_` so user input matches literally under LIKE.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Bind a slice of [`BindValue`] to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    values: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Real(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of [`BindValue`] to a sqlx `Query` (untyped rows).
pub fn bind_values_raw<'q>(
    mut q: Query<'q, Postgres, PgArguments>,
    values: &'q [BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Real(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of [`BindValue`] to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q>(
    mut q: QueryScalar<'q, Postgres, i64, PgArguments>,
    values: &'q [BindValue],
) -> QueryScalar<'q, Postgres, i64, PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Real(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
