//! Account entities.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

use super::media::{PhotoSize, PHOTO_SIZE_SCHEMA};

pub static USER_SCHEMA: ObjectSchema = ObjectSchema::new("User", &[]);

static USER_PROFILE_PHOTOS_RELATIONS: [Relation; 1] =
    [Relation::new("photos", &PHOTO_SIZE_SCHEMA)];
pub static USER_PROFILE_PHOTOS_SCHEMA: ObjectSchema =
    ObjectSchema::new("UserProfilePhotos", &USER_PROFILE_PHOTOS_RELATIONS);

/// A user or bot account.
///
/// No relation table: every field is a scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User(ResponseObject);

impl User {
    /// Build from a decoded payload: a full envelope or a bare entity.
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&USER_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&USER_SCHEMA, json).map(Self)
    }

    pub fn id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("id")
    }

    pub fn first_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("first_name")
    }

    pub fn last_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("last_name")
    }

    pub fn username(&self) -> Result<String, ObjectError> {
        self.0.str_field("username")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for User {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// A page of profile pictures; `photos` is a list of size-variant lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfilePhotos(ResponseObject);

impl UserProfilePhotos {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&USER_PROFILE_PHOTOS_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&USER_PROFILE_PHOTOS_SCHEMA, json).map(Self)
    }

    pub fn total_count(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("total_count")
    }

    /// Each photo, as the list of its available size variants.
    pub fn photos(&self) -> Result<Vec<Vec<PhotoSize>>, ObjectError> {
        self.0
            .list_field("photos")?
            .into_iter()
            .map(|row| match row {
                Value::Array(sizes) => Ok(sizes.into_iter().map(PhotoSize::new).collect()),
                _ => Err(ObjectError::UnexpectedType {
                    object: "UserProfilePhotos",
                    field: "photos".to_string(),
                    expected: "a sequence of sequences",
                }),
            })
            .collect()
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for UserProfilePhotos {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
