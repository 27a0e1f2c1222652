//! The update entity: one event delivered by polling or webhook.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

use super::message::{Message, MESSAGE_SCHEMA};
use super::query::{
    CallbackQuery, ChosenInlineResult, InlineQuery, CALLBACK_QUERY_SCHEMA,
    CHOSEN_INLINE_RESULT_SCHEMA, INLINE_QUERY_SCHEMA,
};

static UPDATE_RELATIONS: [Relation; 5] = [
    Relation::new("message", &MESSAGE_SCHEMA),
    Relation::new("edited_message", &MESSAGE_SCHEMA),
    Relation::new("inline_query", &INLINE_QUERY_SCHEMA),
    Relation::new("chosen_inline_result", &CHOSEN_INLINE_RESULT_SCHEMA),
    Relation::new("callback_query", &CALLBACK_QUERY_SCHEMA),
];

pub static UPDATE_SCHEMA: ObjectSchema = ObjectSchema::new("Update", &UPDATE_RELATIONS);

/// An incoming update. Exactly one of the payload accessors succeeds per
/// update; the others report the undefined-field error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update(ResponseObject);

impl Update {
    /// Build from a decoded payload: a full envelope or a bare entity.
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&UPDATE_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&UPDATE_SCHEMA, json).map(Self)
    }

    /// Split a `getUpdates`-style response (an envelope whose result is a
    /// sequence of updates) into one object per element.
    pub fn list(data: Value) -> Vec<Update> {
        match ResponseObject::raw_result(data) {
            Value::Array(items) => items.into_iter().map(Update::new).collect(),
            other => vec![Update::new(other)],
        }
    }

    pub fn update_id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("update_id")
    }

    pub fn message(&self) -> Result<Message, ObjectError> {
        self.0.object_field("message").map(Message::from)
    }

    pub fn edited_message(&self) -> Result<Message, ObjectError> {
        self.0.object_field("edited_message").map(Message::from)
    }

    pub fn inline_query(&self) -> Result<InlineQuery, ObjectError> {
        self.0.object_field("inline_query").map(InlineQuery::from)
    }

    pub fn chosen_inline_result(&self) -> Result<ChosenInlineResult, ObjectError> {
        self.0
            .object_field("chosen_inline_result")
            .map(ChosenInlineResult::from)
    }

    pub fn callback_query(&self) -> Result<CallbackQuery, ObjectError> {
        self.0.object_field("callback_query").map(CallbackQuery::from)
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Update {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_update() {
        let update = Update::new(json!({
            "update_id": 1000,
            "message": {
                "message_id": 1,
                "from": {"id": 7, "first_name": "Ada"},
                "chat": {"id": 7, "type": "private", "first_name": "Ada"},
                "date": 1462521600,
                "text": "ping"
            }
        }));
        assert_eq!(update.update_id().unwrap(), 1000);
        let message = update.message().unwrap();
        assert_eq!(message.text().unwrap(), "ping");
        assert!(update.callback_query().is_err());
    }

    #[test]
    fn list_splits_enveloped_results() {
        let updates = Update::list(json!({
            "ok": true,
            "result": [
                {"update_id": 1, "message": {"message_id": 1, "chat": {"id": 1, "type": "private"}, "date": 1, "text": "a"}},
                {"update_id": 2, "message": {"message_id": 2, "chat": {"id": 1, "type": "private"}, "date": 2, "text": "b"}}
            ]
        }));
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].update_id().unwrap(), 2);
        assert_eq!(updates[1].message().unwrap().text().unwrap(), "b");
    }

    #[test]
    fn callback_query_update() {
        let update = Update::new(json!({
            "update_id": 1001,
            "callback_query": {
                "id": "cb-1",
                "from": {"id": 9, "first_name": "Lin"},
                "data": "vote:yes"
            }
        }));
        let query = update.callback_query().unwrap();
        assert_eq!(query.id().unwrap(), "cb-1");
        assert_eq!(query.from_user().unwrap().id().unwrap(), 9);
        assert_eq!(query.data().unwrap(), "vote:yes");
    }
}
