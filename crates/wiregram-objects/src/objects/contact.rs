//! Shared phone contacts.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, ResponseObject};

pub static CONTACT_SCHEMA: ObjectSchema = ObjectSchema::new("Contact", &[]);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact(ResponseObject);

impl Contact {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&CONTACT_SCHEMA, data))
    }

    pub fn phone_number(&self) -> Result<String, ObjectError> {
        self.0.str_field("phone_number")
    }

    pub fn first_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("first_name")
    }

    pub fn last_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("last_name")
    }

    /// The contact's account id, when they are on the platform.
    pub fn user_id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("user_id")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Contact {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
