//! Envelope contract: result extraction, status flag, permissive defaults.

use serde_json::{json, Value};
use wiregram_objects::{envelope, ObjectSchema, ResponseObject};

static THING: ObjectSchema = ObjectSchema::new("Thing", &[]);

#[test]
fn entries_equal_result_payload_when_enveloped() {
    let object = ResponseObject::new(
        &THING,
        json!({"ok": true, "result": {"id": 1, "name": "alpha"}}),
    );
    assert_eq!(object.to_value(), json!({"id": 1, "name": "alpha"}));
}

#[test]
fn entries_equal_payload_when_bare() {
    let payload = json!({"id": 1, "name": "alpha"});
    let object = ResponseObject::new(&THING, payload.clone());
    assert_eq!(object.to_value(), payload);
}

#[test]
fn raw_result_helper_matches_construction() {
    let enveloped = json!({"ok": true, "result": {"id": 1}});
    assert_eq!(ResponseObject::raw_result(enveloped), json!({"id": 1}));
    assert_eq!(
        ResponseObject::raw_result(json!({"id": 1})),
        json!({"id": 1})
    );
}

#[test]
fn status_is_true_only_for_ok_true_in_entries() {
    assert!(ResponseObject::new(&THING, json!({"ok": true})).status());
    assert!(!ResponseObject::new(&THING, json!({"ok": false})).status());
    assert!(!ResponseObject::new(&THING, json!({"id": 1})).status());
}

#[test]
fn envelope_flag_is_readable_pre_unwrap() {
    let raw = json!({"ok": true, "result": {"id": 1}});
    assert!(envelope::is_ok(&raw));
    // Post-unwrap the flag is gone with the rest of the envelope.
    assert!(!ResponseObject::new(&THING, raw).status());
}

#[test]
fn failure_envelopes_keep_their_diagnostics() {
    let object = ResponseObject::new(
        &THING,
        json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}),
    );
    assert!(!object.status());
    assert_eq!(object.error_code(), Some(400));
    assert_eq!(
        object.description(),
        Some("Bad Request: chat not found")
    );
}

#[test]
fn get_returns_none_then_default_then_producer() {
    let object = ResponseObject::new(&THING, json!({"id": 1}));

    assert!(object.get("missing_key").is_none());
    assert_eq!(
        object.get_or("missing_key", json!("fallback")).as_str(),
        Some("fallback")
    );
    assert_eq!(
        object
            .get_or_else("missing_key", || Value::String("produced".into()))
            .as_str(),
        Some("produced")
    );
}

#[test]
fn construction_is_total_for_odd_payloads() {
    // Lists key by index, scalars land under "0", null is empty.
    let list = ResponseObject::new(&THING, json!([{"id": 1}, {"id": 2}]));
    assert_eq!(list.raw_response().len(), 2);
    assert_eq!(list.get("1").unwrap().into_value(), json!({"id": 2}));

    let scalar = ResponseObject::new(&THING, json!("lone"));
    assert_eq!(scalar.get("0").unwrap().as_str(), Some("lone"));

    let nothing = ResponseObject::new(&THING, Value::Null);
    assert!(nothing.raw_response().is_empty());
}
