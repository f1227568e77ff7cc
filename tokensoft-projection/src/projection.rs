//! Record-typed projections and their results.

use crate::error::{ProjectionError, ProjectionResult};
use crate::field_set::FieldSet;
use crate::schema::Record;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// A [`FieldSet`] validated against the schema of record `T`.
pub struct Projection<T> {
    fields: FieldSet,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Projection<T> {
    /// Validates `fields` against `T`'s schema.
    pub fn new(fields: FieldSet) -> ProjectionResult<Self> {
        T::schema().validate(&fields)?;
        Ok(Self {
            fields,
            _record: PhantomData,
        })
    }

    /// Parses and validates the dynamic JSON form (see [`FieldSet::from_json`]).
    pub fn from_json(value: &Value) -> ProjectionResult<Self> {
        Self::new(FieldSet::from_json(value)?)
    }

    /// Shapes a single returned record to this projection.
    pub fn project(&self, value: &Value) -> ProjectionResult<Projected<T>> {
        match value {
            Value::Object(map) => Ok(Projected::from_map(self.fields.apply_object(map))),
            other => Err(ProjectionError::NotARecord {
                record: T::schema().name(),
                found: kind_name(other).to_string(),
            }),
        }
    }

    /// Shapes a returned list of records, element by element.
    pub fn project_list(&self, value: &Value) -> ProjectionResult<Vec<Projected<T>>> {
        match value {
            Value::Array(items) => items.iter().map(|item| self.project(item)).collect(),
            other => Err(ProjectionError::NotARecord {
                record: T::schema().name(),
                found: kind_name(other).to_string(),
            }),
        }
    }

    /// Like [`Projection::project`], but maps `null` to `None`.
    pub fn project_optional(&self, value: &Value) -> ProjectionResult<Option<Projected<T>>> {
        match value {
            Value::Null => Ok(None),
            other => self.project(other).map(Some),
        }
    }
}

impl<T> Projection<T> {
    /// The underlying selection tree.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Renders the selection set for a query.
    pub fn render(&self) -> String {
        self.fields.render()
    }
}

impl<T> Clone for Projection<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Projection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("record", &std::any::type_name::<T>())
            .field("fields", &self.fields)
            .finish()
    }
}

/// A record value carrying only the fields its projection selected.
///
/// Fields the projection skipped (or the server omitted) are absent rather
/// than present-but-null.
pub struct Projected<T> {
    fields: Map<String, Value>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Projected<T> {
    pub(crate) fn from_map(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            _record: PhantomData,
        }
    }

    /// Returns true if the result carries `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Decodes a single field. Absent and `null` fields decode to `None`.
    pub fn get<V: DeserializeOwned>(&self, field: &str) -> ProjectionResult<Option<V>> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }

    /// Returns the raw JSON of a field.
    pub fn raw(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names present in the result, in projection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl<T: DeserializeOwned> Projected<T> {
    /// Decodes into the full record type. Unselected fields come back as `None`.
    pub fn into_record(self) -> ProjectionResult<T> {
        Ok(serde_json::from_value(Value::Object(self.fields))?)
    }
}

impl<T> Clone for Projected<T> {
    fn clone(&self) -> Self {
        Self::from_map(self.fields.clone())
    }
}

impl<T> PartialEq for Projected<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<T> fmt::Debug for Projected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Projected").field(&self.fields).finish()
    }
}

impl<T> Serialize for Projected<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
