//! Column projection allow-list for sparse movie rows.
//!
//! Clients can ask for a subset of movie columns via repeated `fields`
//! parameters. Requested names are resolved against a fixed allow-list
//! before any SQL is built; unknown names are rejected outright. The id
//! column is always included in results regardless of the request.

use crate::error::CoreError;

/// SQL type family of a projectable column, used to decode fetched rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    BigInt,
    Int,
    Real,
    Text,
}

/// A projectable field: the external name clients send, the select
/// expression it resolves to, and the column's type family.
#[derive(Debug)]
pub struct ProjectedField {
    pub name: &'static str,
    pub expr: &'static str,
    pub kind: FieldKind,
}

/// Projectable movie columns. `year` and `duration` are friendly aliases,
/// and `poster` reaches into the joined posters table.
pub const MOVIE_PROJECTION_FIELDS: &[ProjectedField] = &[
    ProjectedField { name: "id", expr: "m.id", kind: FieldKind::BigInt },
    ProjectedField { name: "name", expr: "m.name", kind: FieldKind::Text },
    ProjectedField { name: "date", expr: "m.date", kind: FieldKind::Int },
    ProjectedField { name: "year", expr: "m.date", kind: FieldKind::Int },
    ProjectedField { name: "tagline", expr: "m.tagline", kind: FieldKind::Text },
    ProjectedField { name: "description", expr: "m.description", kind: FieldKind::Text },
    ProjectedField { name: "minute", expr: "m.minute", kind: FieldKind::Int },
    ProjectedField { name: "duration", expr: "m.minute", kind: FieldKind::Int },
    ProjectedField { name: "rating", expr: "m.rating", kind: FieldKind::Real },
    ProjectedField { name: "poster", expr: "p.link", kind: FieldKind::Text },
];

/// Resolve requested field names against an allow-list.
///
/// Names are trimmed, blank entries are skipped, and duplicates keep their
/// first position. An unknown name fails the whole request; a request that
/// resolves to nothing at all is also an error.
pub fn resolve_projection<'a>(
    fields: &'a [ProjectedField],
    requested: &[String],
) -> Result<Vec<&'a ProjectedField>, CoreError> {
    let mut selected: Vec<&ProjectedField> = Vec::new();

    for raw in requested {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }

        let field = fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| CoreError::Validation(format!("unknown field: {name}")))?;

        if !selected.iter().any(|f| f.name == field.name) {
            selected.push(field);
        }
    }

    if selected.is_empty() {
        return Err(CoreError::Validation(
            "fields must name at least one column".into(),
        ));
    }

    Ok(selected)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
