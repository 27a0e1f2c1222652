//! Typed entity accessors end-to-end over realistic payloads.

use serde_json::json;
use wiregram_objects::{ChatMember, File, Message, ObjectError, Update, User, Venue};

#[test]
fn get_me_response() {
    let me = User::new(json!({
        "ok": true,
        "result": {"id": 1234, "first_name": "wirebot", "username": "wire_bot"}
    }));
    assert_eq!(me.id().unwrap(), 1234);
    assert_eq!(me.username().unwrap(), "wire_bot");
    assert_eq!(
        me.last_name(),
        Err(ObjectError::UndefinedField {
            object: "User",
            field: "last_name".to_string(),
        })
    );
}

#[test]
fn forwarded_voice_message() {
    let message = Message::new(json!({
        "message_id": 88,
        "from": {"id": 7, "first_name": "Ada"},
        "chat": {"id": -42, "type": "group", "title": "ops"},
        "date": 1462521600,
        "forward_from": {"id": 8, "first_name": "Grace"},
        "forward_date": 1462520000,
        "voice": {"file_id": "v-1", "duration": 12, "mime_type": "audio/ogg"}
    }));

    assert_eq!(message.forward_from().unwrap().first_name().unwrap(), "Grace");
    assert_eq!(message.forward_date().unwrap().timestamp(), 1462520000);

    let voice = message.voice().unwrap();
    assert_eq!(voice.file_id().unwrap(), "v-1");
    assert_eq!(voice.duration().unwrap(), 12);
    assert!(message.text().is_err(), "voice messages carry no text");
}

#[test]
fn venue_message_nests_location() {
    let message = Message::new(json!({
        "message_id": 5,
        "chat": {"id": 1, "type": "private"},
        "date": 1462521600,
        "venue": {
            "location": {"latitude": 52.37, "longitude": 4.89},
            "title": "Office",
            "address": "Somewhere 1"
        }
    }));

    let venue: Venue = message.venue().unwrap();
    assert_eq!(venue.title().unwrap(), "Office");
    let location = venue.location().unwrap();
    assert!((location.latitude().unwrap() - 52.37).abs() < 1e-9);
    assert!((location.longitude().unwrap() - 4.89).abs() < 1e-9);
}

#[test]
fn chat_member_response() {
    let member = ChatMember::new(json!({
        "ok": true,
        "result": {"user": {"id": 3, "first_name": "Lin"}, "status": "administrator"}
    }));
    assert_eq!(member.status().unwrap(), "administrator");
    assert_eq!(member.user().unwrap().id().unwrap(), 3);
}

#[test]
fn file_response_parsed_from_json() {
    let file = File::from_json(
        r#"{"ok": true, "result": {"file_id": "f-9", "file_size": 2048, "file_path": "voice/f-9.ogg"}}"#,
    )
    .unwrap();
    assert_eq!(file.file_id().unwrap(), "f-9");
    assert_eq!(file.file_size().unwrap(), 2048);
    assert_eq!(file.file_path().unwrap(), "voice/f-9.ogg");
}

#[test]
fn from_json_surfaces_parse_failures() {
    let err = Update::from_json("{").unwrap_err();
    assert!(err.to_string().contains("Update"));
}

#[test]
fn accessor_kind_mismatch_is_reported() {
    let message = Message::new(json!({
        "message_id": "not-a-number",
        "chat": {"id": 1, "type": "private"},
        "date": 1462521600
    }));
    assert_eq!(
        message.message_id(),
        Err(ObjectError::UnexpectedType {
            object: "Message",
            field: "message_id".to_string(),
            expected: "an integer",
        })
    );
}

#[test]
fn entities_serialize_as_their_raw_entries() {
    let raw = json!({"id": 7, "first_name": "Ada"});
    let user = User::new(raw.clone());
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}
