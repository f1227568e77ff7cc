//! Per-record field schemas used to validate projections.

use crate::error::{ProjectionError, ProjectionResult};
use crate::field_set::{FieldSet, Selection};

/// The shape of a single record field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A string, number, boolean or enum value.
    Scalar,
    /// A list of scalars.
    ScalarList,
    /// A nested record.
    Object(fn() -> Schema),
    /// A list of nested records. Projected with the element's selection.
    List(fn() -> Schema),
}

impl FieldKind {
    /// Returns the nested record schema for object and list fields.
    pub fn nested(&self) -> Option<Schema> {
        match self {
            FieldKind::Object(schema) | FieldKind::List(schema) => Some(schema()),
            FieldKind::Scalar | FieldKind::ScalarList => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldKind::Scalar | FieldKind::ScalarList)
    }
}

/// A record type that can be projected.
pub trait Record {
    /// Describes the record's fields.
    fn schema() -> Schema;
}

/// The field list of a record type.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<(&'static str, FieldKind)>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn scalar(self, field: &'static str) -> Self {
        self.field(field, FieldKind::Scalar)
    }

    #[must_use]
    pub fn scalar_list(self, field: &'static str) -> Self {
        self.field(field, FieldKind::ScalarList)
    }

    #[must_use]
    pub fn object<R: Record>(self, field: &'static str) -> Self {
        self.field(field, FieldKind::Object(R::schema))
    }

    #[must_use]
    pub fn list<R: Record>(self, field: &'static str) -> Self {
        self.field(field, FieldKind::List(R::schema))
    }

    #[must_use]
    pub fn field(mut self, field: &'static str, kind: FieldKind) -> Self {
        self.fields.push((field, kind));
        self
    }

    /// The record's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a field by name.
    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, kind)| *kind)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Checks that every entry of `fields` names a field of this record and
    /// that each selection fits the field's shape.
    ///
    /// Skipped entries only need to name an existing field.
    pub fn validate(&self, fields: &FieldSet) -> ProjectionResult<()> {
        for (name, selection) in fields.iter() {
            let path = format!("{}.{name}", self.name);
            let kind = self
                .kind_of(name)
                .ok_or_else(|| ProjectionError::UnknownField { path: path.clone() })?;

            match (selection, kind.nested()) {
                (Selection::Skip, _) => {}
                (Selection::Include, None) => {}
                (Selection::Include, Some(_)) => {
                    return Err(ProjectionError::SelectionRequired { path });
                }
                (Selection::Nested(_), None) => {
                    return Err(ProjectionError::ScalarField { path });
                }
                (Selection::Nested(inner), Some(schema)) => {
                    schema
                        .validate(inner)
                        .map_err(|e| rebase(e, &path))?;
                }
            }
        }
        Ok(())
    }
}

/// Re-roots a nested validation error (`Address.country`) onto the outer
/// field path (`User.address`), giving `User.address.country`.
fn rebase(err: ProjectionError, outer: &str) -> ProjectionError {
    let reroot = |path: String| {
        let tail = path.split_once('.').map(|(_, rest)| rest).unwrap_or(path.as_str());
        format!("{outer}.{tail}")
    };
    match err {
        ProjectionError::UnknownField { path } => ProjectionError::UnknownField { path: reroot(path) },
        ProjectionError::ScalarField { path } => ProjectionError::ScalarField { path: reroot(path) },
        ProjectionError::SelectionRequired { path } => {
            ProjectionError::SelectionRequired { path: reroot(path) }
        }
        other => other,
    }
}
