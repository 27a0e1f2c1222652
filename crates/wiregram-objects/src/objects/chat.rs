//! Conversation entities.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

use super::user::{User, USER_SCHEMA};

pub static CHAT_SCHEMA: ObjectSchema = ObjectSchema::new("Chat", &[]);

static CHAT_MEMBER_RELATIONS: [Relation; 1] = [Relation::new("user", &USER_SCHEMA)];
pub static CHAT_MEMBER_SCHEMA: ObjectSchema =
    ObjectSchema::new("ChatMember", &CHAT_MEMBER_RELATIONS);

/// A private, group, supergroup or channel conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chat(ResponseObject);

impl Chat {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&CHAT_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&CHAT_SCHEMA, json).map(Self)
    }

    pub fn id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("id")
    }

    /// The conversation kind: `private`, `group`, `supergroup` or `channel`.
    /// The wire field is named `type`.
    pub fn kind(&self) -> Result<String, ObjectError> {
        self.0.str_field("type")
    }

    pub fn title(&self) -> Result<String, ObjectError> {
        self.0.str_field("title")
    }

    pub fn username(&self) -> Result<String, ObjectError> {
        self.0.str_field("username")
    }

    pub fn first_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("first_name")
    }

    pub fn last_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("last_name")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Chat {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// A member of a conversation, with their standing in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMember(ResponseObject);

impl ChatMember {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&CHAT_MEMBER_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&CHAT_MEMBER_SCHEMA, json).map(Self)
    }

    pub fn user(&self) -> Result<User, ObjectError> {
        self.0.object_field("user").map(User::from)
    }

    /// `creator`, `administrator`, `member`, `left` or `kicked`.
    pub fn status(&self) -> Result<String, ObjectError> {
        self.0.str_field("status")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for ChatMember {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
