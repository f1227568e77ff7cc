use pretty_assertions::assert_eq;
use serde_json::json;
use tokensoft_projection::{FieldSet, ProjectionError, Selection};

// ── Rendering ───────────────────────────────────────────────────

#[test]
fn renders_nested_selection_skipping_falsy() {
    let fields = FieldSet::from_json(&json!({
        "id": false,
        "email": true,
        "address": { "country": { "code": true } }
    }))
    .unwrap();
    assert_eq!(fields.render(), "{ email,address { country { code } } }");
}

#[test]
fn renders_in_insertion_order() {
    let fields = FieldSet::new().include("zeta").include("alpha").include("mid");
    assert_eq!(fields.render(), "{ zeta,alpha,mid }");
}

#[test]
fn empty_set_renders_empty_braces() {
    assert_eq!(FieldSet::new().render(), "{  }");
}

#[test]
fn all_skipped_renders_empty_braces() {
    let fields = FieldSet::new().skip("id").skip("email");
    assert_eq!(fields.render(), "{  }");
}

#[test]
fn render_is_idempotent() {
    let fields = FieldSet::new()
        .include("id")
        .nest("docs", FieldSet::new().include("url"));
    assert_eq!(fields.render(), fields.render());
}

#[test]
fn resetting_a_field_keeps_its_position() {
    let fields = FieldSet::new()
        .include("a")
        .include("b")
        .skip("a")
        .include("a");
    assert_eq!(fields.render(), "{ a,b }");
    assert_eq!(fields.len(), 2);
}

// ── Dynamic form ────────────────────────────────────────────────

#[test]
fn from_json_treats_all_falsy_values_as_skip() {
    let fields = FieldSet::from_json(&json!({
        "a": false,
        "b": null,
        "c": 0,
        "d": "",
        "e": true
    }))
    .unwrap();
    assert_eq!(fields.render(), "{ e }");
    assert_eq!(fields.get("b"), Some(&Selection::Skip));
    assert_eq!(fields.selected().collect::<Vec<_>>(), vec!["e"]);
}

#[test]
fn from_json_rejects_truthy_scalars() {
    let err = FieldSet::from_json(&json!({"address": {"country": 1}})).unwrap_err();
    match err {
        ProjectionError::InvalidSelection { path, value } => {
            assert_eq!(path, "address.country");
            assert_eq!(value, "1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_json_rejects_non_object() {
    let err = FieldSet::from_json(&json!(["id"])).unwrap_err();
    assert!(matches!(err, ProjectionError::NotAnObject(_)));
}

#[test]
fn to_json_round_trips_shape() {
    let source = json!({"id": false, "email": true, "docs": {"url": true}});
    let fields = FieldSet::from_json(&source).unwrap();
    assert_eq!(fields.to_json(), source);
}

// ── Applying to values ──────────────────────────────────────────

#[test]
fn apply_keeps_only_selected_keys() {
    let fields = FieldSet::from_json(&json!({
        "id": false,
        "email": true,
        "address": { "country": { "code": true } },
        "docs": { "id": true, "url": true }
    }))
    .unwrap();

    let value = json!({
        "id": "u1",
        "email": "me@us.com",
        "approved": "yes",
        "address": {
            "street1": "1 Main St",
            "country": { "code": "US", "allowed": true }
        },
        "docs": [
            { "id": "1", "url": "https://abcde.com/docs/1", "approved": true },
            { "id": "2", "url": "https://abcde.com/docs/2", "approved": false }
        ]
    });

    assert_eq!(
        fields.apply(&value),
        json!({
            "email": "me@us.com",
            "address": { "country": { "code": "US" } },
            "docs": [
                { "id": "1", "url": "https://abcde.com/docs/1" },
                { "id": "2", "url": "https://abcde.com/docs/2" }
            ]
        })
    );
}

#[test]
fn apply_omits_missing_keys_instead_of_null() {
    let fields = FieldSet::new().include("id").include("email");
    let projected = fields.apply(&json!({"id": "u1"}));
    assert_eq!(projected, json!({"id": "u1"}));
    assert!(projected.get("email").is_none());
}

#[test]
fn apply_passes_null_nested_values_through() {
    let fields = FieldSet::new().nest("address", FieldSet::new().include("city"));
    assert_eq!(
        fields.apply(&json!({"address": null})),
        json!({"address": null})
    );
}

#[test]
fn apply_keeps_projection_order() {
    let fields = FieldSet::new().include("b").include("a");
    let projected = fields.apply(&json!({"a": 1, "b": 2}));
    let keys: Vec<&String> = projected.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}
