//! Untyped selection trees and their rendering.

use crate::error::{ProjectionError, ProjectionResult};
use serde_json::{Map, Value};

/// What a projection asks for on a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Present in the projection but not requested (`false` or another falsy value).
    Skip,
    /// Request the field as-is.
    Include,
    /// Request a sub-selection of an object field, or of each element of a list field.
    Nested(FieldSet),
}

impl Selection {
    /// Returns true if the field is requested at all.
    pub fn is_selected(&self) -> bool {
        !matches!(self, Selection::Skip)
    }
}

/// An ordered set of field selections.
///
/// Entries keep insertion order, which is also the order fields are rendered
/// and projected in. Setting a field twice replaces the earlier selection in
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    entries: Vec<(String, Selection)>,
}

impl FieldSet {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `name` as a bare field.
    #[must_use]
    pub fn include(self, name: impl Into<String>) -> Self {
        self.with(name, Selection::Include)
    }

    /// Records `name` as explicitly not requested.
    #[must_use]
    pub fn skip(self, name: impl Into<String>) -> Self {
        self.with(name, Selection::Skip)
    }

    /// Requests a nested selection on `name`.
    #[must_use]
    pub fn nest(self, name: impl Into<String>, fields: FieldSet) -> Self {
        self.with(name, Selection::Nested(fields))
    }

    /// Builder form of [`FieldSet::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, selection: Selection) -> Self {
        self.set(name, selection);
        self
    }

    /// Sets the selection for `name`, replacing any existing entry in place.
    pub fn set(&mut self, name: impl Into<String>, selection: Selection) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = selection,
            None => self.entries.push((name, selection)),
        }
    }

    /// Returns the selection recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, selection)| selection)
    }

    /// Iterates over every entry, skipped ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries.iter().map(|(name, selection)| (name.as_str(), selection))
    }

    /// Names of the fields that are actually requested, in order.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, selection)| selection.is_selected())
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the selection set, e.g. `{ email,address { country { code } } }`.
    ///
    /// Skipped fields are left out. An empty (or all-skipped) set renders as
    /// `{  }`, which most servers will reject; it is not treated as an error here.
    pub fn render(&self) -> String {
        let fields: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(name, selection)| match selection {
                Selection::Skip => None,
                Selection::Include => Some(name.clone()),
                Selection::Nested(inner) => Some(format!("{name} {}", inner.render())),
            })
            .collect();

        format!("{{ {} }}", fields.join(","))
    }

    /// Parses the dynamic JSON form of a projection.
    ///
    /// `true` requests a field and a nested object recurses. Falsy values
    /// (`false`, `null`, `0`, `""`) are kept as [`Selection::Skip`]. Any other
    /// value is rejected.
    pub fn from_json(value: &Value) -> ProjectionResult<Self> {
        Self::from_json_at(value, "")
    }

    fn from_json_at(value: &Value, prefix: &str) -> ProjectionResult<Self> {
        let Value::Object(map) = value else {
            return Err(ProjectionError::NotAnObject(value.to_string()));
        };

        let mut fields = FieldSet::new();
        for (name, raw) in map {
            let path = join_path(prefix, name);
            let selection = match raw {
                Value::Bool(true) => Selection::Include,
                Value::Object(_) => Selection::Nested(Self::from_json_at(raw, &path)?),
                _ if is_falsy(raw) => Selection::Skip,
                other => {
                    return Err(ProjectionError::InvalidSelection {
                        path,
                        value: other.to_string(),
                    });
                }
            };
            fields.set(name.clone(), selection);
        }
        Ok(fields)
    }

    /// Converts back to the dynamic JSON form. Skipped fields become `false`.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(name, selection)| {
                let value = match selection {
                    Selection::Skip => Value::Bool(false),
                    Selection::Include => Value::Bool(true),
                    Selection::Nested(inner) => inner.to_json(),
                };
                (name.clone(), value)
            })
            .collect();
        Value::Object(map)
    }

    /// Shapes `value` to this selection.
    ///
    /// Objects keep only the selected keys (in selection order), nested
    /// selections recurse, and lists are projected element by element. Keys
    /// the value lacks are left out rather than filled with null. Scalars and
    /// null pass through unchanged.
    pub fn apply(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.apply_object(map)),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.apply(item)).collect()),
            other => other.clone(),
        }
    }

    pub(crate) fn apply_object(&self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::new();
        for (name, selection) in &self.entries {
            let Some(field) = map.get(name) else {
                continue;
            };
            match selection {
                Selection::Skip => {}
                Selection::Include => {
                    out.insert(name.clone(), field.clone());
                }
                Selection::Nested(inner) => {
                    out.insert(name.clone(), inner.apply(field));
                }
            }
        }
        out
    }
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("x")));
        assert!(!is_falsy(&json!([])));
    }

    #[test]
    fn join_path_nests_with_dots() {
        assert_eq!(join_path("", "address"), "address");
        assert_eq!(join_path("address", "country"), "address.country");
    }
}
