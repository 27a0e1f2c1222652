//! Media attachment entities.

use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

pub static PHOTO_SIZE_SCHEMA: ObjectSchema = ObjectSchema::new("PhotoSize", &[]);
pub static AUDIO_SCHEMA: ObjectSchema = ObjectSchema::new("Audio", &[]);
pub static VOICE_SCHEMA: ObjectSchema = ObjectSchema::new("Voice", &[]);
pub static FILE_SCHEMA: ObjectSchema = ObjectSchema::new("File", &[]);

static DOCUMENT_RELATIONS: [Relation; 1] = [Relation::new("thumb", &PHOTO_SIZE_SCHEMA)];
pub static DOCUMENT_SCHEMA: ObjectSchema = ObjectSchema::new("Document", &DOCUMENT_RELATIONS);

static STICKER_RELATIONS: [Relation; 1] = [Relation::new("thumb", &PHOTO_SIZE_SCHEMA)];
pub static STICKER_SCHEMA: ObjectSchema = ObjectSchema::new("Sticker", &STICKER_RELATIONS);

static VIDEO_RELATIONS: [Relation; 1] = [Relation::new("thumb", &PHOTO_SIZE_SCHEMA)];
pub static VIDEO_SCHEMA: ObjectSchema = ObjectSchema::new("Video", &VIDEO_RELATIONS);

/// One size variant of a photo or thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoSize(ResponseObject);

impl PhotoSize {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&PHOTO_SIZE_SCHEMA, data))
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    pub fn width(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("width")
    }

    pub fn height(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("height")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for PhotoSize {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audio(ResponseObject);

impl Audio {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&AUDIO_SCHEMA, data))
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    /// Duration in seconds as sent by the platform.
    pub fn duration(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("duration")
    }

    pub fn performer(&self) -> Result<String, ObjectError> {
        self.0.str_field("performer")
    }

    pub fn title(&self) -> Result<String, ObjectError> {
        self.0.str_field("title")
    }

    pub fn mime_type(&self) -> Result<String, ObjectError> {
        self.0.str_field("mime_type")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Audio {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// A generic file attachment. `thumb` maps to [`PhotoSize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document(ResponseObject);

impl Document {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&DOCUMENT_SCHEMA, data))
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    pub fn thumb(&self) -> Result<PhotoSize, ObjectError> {
        self.0.object_field("thumb").map(PhotoSize::from)
    }

    pub fn file_name(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_name")
    }

    pub fn mime_type(&self) -> Result<String, ObjectError> {
        self.0.str_field("mime_type")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Document {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sticker(ResponseObject);

impl Sticker {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&STICKER_SCHEMA, data))
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    pub fn width(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("width")
    }

    pub fn height(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("height")
    }

    pub fn thumb(&self) -> Result<PhotoSize, ObjectError> {
        self.0.object_field("thumb").map(PhotoSize::from)
    }

    pub fn emoji(&self) -> Result<String, ObjectError> {
        self.0.str_field("emoji")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Sticker {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video(ResponseObject);

impl Video {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&VIDEO_SCHEMA, data))
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    pub fn width(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("width")
    }

    pub fn height(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("height")
    }

    pub fn duration(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("duration")
    }

    pub fn thumb(&self) -> Result<PhotoSize, ObjectError> {
        self.0.object_field("thumb").map(PhotoSize::from)
    }

    pub fn mime_type(&self) -> Result<String, ObjectError> {
        self.0.str_field("mime_type")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Video {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Voice(ResponseObject);

impl Voice {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&VOICE_SCHEMA, data))
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    pub fn duration(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("duration")
    }

    pub fn mime_type(&self) -> Result<String, ObjectError> {
        self.0.str_field("mime_type")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Voice {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}

/// A file ready to be downloaded, as returned by the file endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File(ResponseObject);

impl File {
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&FILE_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&FILE_SCHEMA, json).map(Self)
    }

    pub fn file_id(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_id")
    }

    pub fn file_size(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("file_size")
    }

    /// Relative path for the download endpoint; valid for a limited time.
    pub fn file_path(&self) -> Result<String, ObjectError> {
        self.0.str_field("file_path")
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for File {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
