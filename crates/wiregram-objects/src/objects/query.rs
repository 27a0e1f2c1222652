//! Callback and inline query entities.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

use super::geo::{Location, LOCATION_SCHEMA};
use super::message::{Message, MESSAGE_SCHEMA};
use super::user::{User, USER_SCHEMA};

static CALLBACK_QUERY_RELATIONS: [Relation; 2] = [
    Relation::new("from", &USER_SCHEMA),
    Relation::new("message", &MESSAGE_SCHEMA),
];
pub static CALLBACK_QUERY_SCHEMA: ObjectSchema =
    ObjectSchema::new("CallbackQuery", &CALLBACK_QUERY_RELATIONS);

static INLINE_QUERY_RELATIONS: [Relation; 2] = [
    Relation::new("from", &USER_SCHEMA),
    Relation::new("location", &LOCATION_SCHEMA),
];
pub static INLINE_QUERY_SCHEMA: ObjectSchema =
    ObjectSchema::new("InlineQuery", &INLINE_QUERY_RELATIONS);

static CHOSEN_INLINE_RESULT_RELATIONS: [Relation; 2] = [
    Relation::new("from", &USER_SCHEMA),
    Relation::new("location", &LOCATION_SCHEMA),
];
pub static CHOSEN_INLINE_RESULT_SCHEMA: ObjectSchema =
    ObjectSchema::new("ChosenInlineResult", &CHOSEN_INLINE_RESULT_RELATIONS);

/// A button press on an inline keyboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackQuery(ResponseObject);

impl CallbackQuery {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&CALLBACK_QUERY_SCHEMA, data))
    }

    pub fn id(&self) -> Result<String, ObjectError> {
        self.0.str_field("id")
    }

    /// The pressing user. Wire field `from`.
    pub fn from_user(&self) -> Result<User, ObjectError> {
        self.0.object_field("from").map(User::from)
    }

    /// The message carrying the keyboard, when it is still available.
    pub fn message(&self) -> Result<Message, ObjectError> {
        self.0.object_field("message").map(Message::from)
    }

    pub fn inline_message_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("inline_message_id")
    }

    pub fn data(&self) -> Result<String, ObjectError> {
        self.0.str_field("data")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for CallbackQuery {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// An incoming inline query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineQuery(ResponseObject);

impl InlineQuery {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&INLINE_QUERY_SCHEMA, data))
    }

    pub fn id(&self) -> Result<String, ObjectError> {
        self.0.str_field("id")
    }

    pub fn from_user(&self) -> Result<User, ObjectError> {
        self.0.object_field("from").map(User::from)
    }

    pub fn location(&self) -> Result<Location, ObjectError> {
        self.0.object_field("location").map(Location::from)
    }

    pub fn query(&self) -> Result<String, ObjectError> {
        self.0.str_field("query")
    }

    pub fn offset(&self) -> Result<String, ObjectError> {
        self.0.str_field("offset")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for InlineQuery {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// The inline result a user picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChosenInlineResult(ResponseObject);

impl ChosenInlineResult {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&CHOSEN_INLINE_RESULT_SCHEMA, data))
    }

    pub fn result_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("result_id")
    }

    pub fn from_user(&self) -> Result<User, ObjectError> {
        self.0.object_field("from").map(User::from)
    }

    pub fn location(&self) -> Result<Location, ObjectError> {
        self.0.object_field("location").map(Location::from)
    }

    pub fn inline_message_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("inline_message_id")
    }

    pub fn query(&self) -> Result<String, ObjectError> {
        self.0.str_field("query")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for ChosenInlineResult {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
