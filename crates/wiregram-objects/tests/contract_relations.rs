//! Relation-mapping contract: one-level-deep rewriting, strict lookup
//! wrapping, idempotence, and the documented permissive/strict asymmetry.

use serde_json::json;
use wiregram_objects::objects::{MESSAGE_SCHEMA, UPDATE_SCHEMA, USER_SCHEMA};
use wiregram_objects::{ObjectError, ObjectSchema, Relation, ResponseObject};

static LEAF: ObjectSchema = ObjectSchema::new("Leaf", &[]);
static BRANCH_RELATIONS: [Relation; 1] = [Relation::new("leaf", &LEAF)];
static BRANCH: ObjectSchema = ObjectSchema::new("Branch", &BRANCH_RELATIONS);

#[test]
fn sub_maps_of_top_level_entries_are_rewritten() {
    // The mapping pass inspects sub-keys of each top-level entry, not the
    // top-level keys themselves.
    let object = ResponseObject::new(&BRANCH, json!({"node": {"leaf": {"id": 1}, "size": 2}}));
    let node = object.raw_response().get("node").unwrap().as_map().unwrap();

    let leaf = node.get("leaf").unwrap().as_object().unwrap();
    assert!(leaf.schema().is(&LEAF));
    assert_eq!(leaf.to_value(), json!({"id": 1}));
    assert_eq!(node.get("size").unwrap().to_value(), json!(2));
}

#[test]
fn grandchildren_are_not_visited() {
    let object = ResponseObject::new(&BRANCH, json!({"node": {"inner": {"leaf": {"id": 1}}}}));
    let node = object.raw_response().get("node").unwrap().as_map().unwrap();
    let inner = node.get("inner").unwrap().as_map().unwrap();
    // Two levels below a top-level entry: untouched.
    assert!(inner.get("leaf").unwrap().as_object().is_none());
}

#[test]
fn remapping_existing_entries_does_not_double_wrap() {
    let object = ResponseObject::new(&BRANCH, json!({"node": {"leaf": {"id": 1}}}));
    let remapped = ResponseObject::from_entries(&BRANCH, object.raw_response().clone());
    assert_eq!(remapped, object);

    // And a fresh build from the reserialized entries is equivalent too.
    let rebuilt = ResponseObject::new(&BRANCH, object.to_value());
    assert_eq!(rebuilt, object);
}

#[test]
fn strict_lookup_wraps_declared_relations() {
    let object = ResponseObject::new(&BRANCH, json!({"leaf": {"id": 9}}));
    let leaf = object.field("leaf").unwrap().into_object().unwrap();
    assert!(leaf.schema().is(&LEAF));
    assert_eq!(leaf.to_value(), json!({"id": 9}));
}

#[test]
fn strict_lookup_returns_plain_scalars() {
    let object = ResponseObject::new(&BRANCH, json!({"text": "hello"}));
    assert_eq!(object.field("text").unwrap().as_str(), Some("hello"));
}

#[test]
fn strict_lookup_fails_on_absent_fields() {
    let object = ResponseObject::new(&BRANCH, json!({"text": "hello"}));
    assert_eq!(
        object.field("foo"),
        Err(ObjectError::UndefinedField {
            object: "Branch",
            field: "foo".to_string(),
        })
    );
}

/// The two lookup paths wrap raw sub-maps differently: `get` uses the
/// object's own schema, `field` consults the relation table. Both behaviors
/// are load-bearing for callers, so this pins them down side by side
/// instead of unifying them.
#[test]
fn permissive_and_strict_lookups_disagree_on_wrapping() {
    let object = ResponseObject::new(&BRANCH, json!({"leaf": {"id": 1}}));

    let via_get = object.get("leaf").unwrap().into_object().unwrap();
    assert!(via_get.schema().is(&BRANCH));

    let via_field = object.field("leaf").unwrap().into_object().unwrap();
    assert!(via_field.schema().is(&LEAF));
}

#[test]
fn entity_tables_drive_the_same_machinery() {
    // An update payload whose message contains a reply: the reply's sender
    // sits exactly one level below the "message" top-level entry of the
    // Message object built by the strict lookup, so it comes out mapped.
    let update = ResponseObject::new(
        &UPDATE_SCHEMA,
        json!({
            "update_id": 7,
            "message": {
                "message_id": 2,
                "chat": {"id": 1, "type": "private"},
                "date": 10,
                "reply_to_message": {
                    "message_id": 1,
                    "from": {"id": 99, "first_name": "Ada"},
                    "chat": {"id": 1, "type": "private"},
                    "date": 9
                }
            }
        }),
    );

    let message = update.field("message").unwrap().into_object().unwrap();
    assert!(message.schema().is(&MESSAGE_SCHEMA));

    // "reply_to_message" is itself a top-level entry of the message, so it
    // stays a raw map; its "from" sub-key is what the pass rewrote.
    let reply = message
        .raw_response()
        .get("reply_to_message")
        .unwrap()
        .as_map()
        .unwrap();
    let sender = reply.get("from").unwrap().as_object().unwrap();
    assert!(sender.schema().is(&USER_SCHEMA));
    assert_eq!(sender.to_value(), json!({"id": 99, "first_name": "Ada"}));
}

#[test]
fn empty_relation_tables_leave_payloads_alone() {
    let raw = json!({"node": {"leaf": {"id": 1}}});
    let object = ResponseObject::new(&LEAF, raw.clone());
    assert_eq!(object.to_value(), raw);
}
