//! The message entity and its relation table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::{ObjectSchema, Relation, ResponseObject};

use super::chat::{Chat, CHAT_SCHEMA};
use super::contact::{Contact, CONTACT_SCHEMA};
use super::geo::{Location, Venue, LOCATION_SCHEMA, VENUE_SCHEMA};
use super::media::{
    Audio, Document, PhotoSize, Sticker, Video, Voice, AUDIO_SCHEMA, DOCUMENT_SCHEMA,
    PHOTO_SIZE_SCHEMA, STICKER_SCHEMA, VIDEO_SCHEMA, VOICE_SCHEMA,
};
use super::user::{User, USER_SCHEMA};

/// Relation table for [`Message`]. This is the de facto schema of the
/// entity: every field listed here wraps into the named type on lookup.
static MESSAGE_RELATIONS: [Relation; 18] = [
    Relation::new("from", &USER_SCHEMA),
    Relation::new("chat", &CHAT_SCHEMA),
    Relation::new("forward_from", &USER_SCHEMA),
    Relation::new("forward_from_chat", &CHAT_SCHEMA),
    Relation::new("reply_to_message", &MESSAGE_SCHEMA),
    Relation::new("audio", &AUDIO_SCHEMA),
    Relation::new("document", &DOCUMENT_SCHEMA),
    Relation::new("photo", &PHOTO_SIZE_SCHEMA),
    Relation::new("sticker", &STICKER_SCHEMA),
    Relation::new("video", &VIDEO_SCHEMA),
    Relation::new("voice", &VOICE_SCHEMA),
    Relation::new("contact", &CONTACT_SCHEMA),
    Relation::new("location", &LOCATION_SCHEMA),
    Relation::new("venue", &VENUE_SCHEMA),
    Relation::new("new_chat_member", &USER_SCHEMA),
    Relation::new("left_chat_member", &USER_SCHEMA),
    Relation::new("new_chat_photo", &PHOTO_SIZE_SCHEMA),
    Relation::new("pinned_message", &MESSAGE_SCHEMA),
];

pub static MESSAGE_SCHEMA: ObjectSchema = ObjectSchema::new("Message", &MESSAGE_RELATIONS);

/// An incoming message of any kind: text, media, or a service event.
///
/// Scalar accessors mirror the strict lookup: an absent or falsy field is an
/// [`ObjectError::UndefinedField`]. Use [`as_response`](Self::as_response)
/// and the permissive `get` family for optional probing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message(ResponseObject);

impl Message {
    /// Build from a decoded payload: a full envelope or a bare entity.
    pub fn new(data: Value) -> Self {
        Self(ResponseObject::new(&MESSAGE_SCHEMA, data))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        ResponseObject::from_json(&MESSAGE_SCHEMA, json).map(Self)
    }

    pub fn message_id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("message_id")
    }

    /// The sender. Wire field `from`; channel posts have none.
    pub fn from_user(&self) -> Result<User, ObjectError> {
        self.0.object_field("from").map(User::from)
    }

    pub fn date(&self) -> Result<DateTime<Utc>, ObjectError> {
        self.0.timestamp_field("date")
    }

    pub fn chat(&self) -> Result<Chat, ObjectError> {
        self.0.object_field("chat").map(Chat::from)
    }

    pub fn forward_from(&self) -> Result<User, ObjectError> {
        self.0.object_field("forward_from").map(User::from)
    }

    pub fn forward_from_chat(&self) -> Result<Chat, ObjectError> {
        self.0.object_field("forward_from_chat").map(Chat::from)
    }

    pub fn forward_date(&self) -> Result<DateTime<Utc>, ObjectError> {
        self.0.timestamp_field("forward_date")
    }

    pub fn reply_to_message(&self) -> Result<Message, ObjectError> {
        self.0.object_field("reply_to_message").map(Message::from)
    }

    pub fn edit_date(&self) -> Result<DateTime<Utc>, ObjectError> {
        self.0.timestamp_field("edit_date")
    }

    pub fn text(&self) -> Result<String, ObjectError> {
        self.0.str_field("text")
    }

    pub fn audio(&self) -> Result<Audio, ObjectError> {
        self.0.object_field("audio").map(Audio::from)
    }

    pub fn document(&self) -> Result<Document, ObjectError> {
        self.0.object_field("document").map(Document::from)
    }

    /// Available size variants of an attached photo.
    pub fn photo(&self) -> Result<Vec<PhotoSize>, ObjectError> {
        self.0
            .list_field("photo")
            .map(|sizes| sizes.into_iter().map(PhotoSize::new).collect())
    }

    pub fn sticker(&self) -> Result<Sticker, ObjectError> {
        self.0.object_field("sticker").map(Sticker::from)
    }

    pub fn video(&self) -> Result<Video, ObjectError> {
        self.0.object_field("video").map(Video::from)
    }

    pub fn voice(&self) -> Result<Voice, ObjectError> {
        self.0.object_field("voice").map(Voice::from)
    }

    pub fn caption(&self) -> Result<String, ObjectError> {
        self.0.str_field("caption")
    }

    pub fn contact(&self) -> Result<Contact, ObjectError> {
        self.0.object_field("contact").map(Contact::from)
    }

    pub fn location(&self) -> Result<Location, ObjectError> {
        self.0.object_field("location").map(Location::from)
    }

    pub fn venue(&self) -> Result<Venue, ObjectError> {
        self.0.object_field("venue").map(Venue::from)
    }

    pub fn new_chat_member(&self) -> Result<User, ObjectError> {
        self.0.object_field("new_chat_member").map(User::from)
    }

    pub fn left_chat_member(&self) -> Result<User, ObjectError> {
        self.0.object_field("left_chat_member").map(User::from)
    }

    pub fn new_chat_title(&self) -> Result<String, ObjectError> {
        self.0.str_field("new_chat_title")
    }

    pub fn new_chat_photo(&self) -> Result<Vec<PhotoSize>, ObjectError> {
        self.0
            .list_field("new_chat_photo")
            .map(|sizes| sizes.into_iter().map(PhotoSize::new).collect())
    }

    // Service-event flags. These come over the wire as literal `true`.

    pub fn delete_chat_photo(&self) -> bool {
        self.0.flag("delete_chat_photo")
    }

    pub fn group_chat_created(&self) -> bool {
        self.0.flag("group_chat_created")
    }

    pub fn supergroup_chat_created(&self) -> bool {
        self.0.flag("supergroup_chat_created")
    }

    pub fn channel_chat_created(&self) -> bool {
        self.0.flag("channel_chat_created")
    }

    pub fn migrate_to_chat_id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("migrate_to_chat_id")
    }

    pub fn migrate_from_chat_id(&self) -> Result<i64, ObjectError> {
        self.0.i64_field("migrate_from_chat_id")
    }

    pub fn pinned_message(&self) -> Result<Message, ObjectError> {
        self.0.object_field("pinned_message").map(Message::from)
    }

    pub fn as_response(&self) -> &ResponseObject {
        &self.0
    }
}

impl From<ResponseObject> for Message {
    fn from(object: ResponseObject) -> Self {
        Self(object)
    }
}
