//! Concrete API entity types.
//!
//! Each entity is a thin newtype over [`ResponseObject`] with a static
//! relation table and hand-written accessors per documented field. Scalar
//! and relation accessors use the strict lookup (absent or falsy fields are
//! an error); boolean service flags use the permissive one.
//!
//! [`ResponseObject`]: crate::object::ResponseObject

pub mod chat;
pub mod contact;
pub mod geo;
pub mod media;
pub mod message;
pub mod query;
pub mod update;
pub mod user;

pub use chat::{Chat, ChatMember, CHAT_MEMBER_SCHEMA, CHAT_SCHEMA};
pub use contact::{Contact, CONTACT_SCHEMA};
pub use geo::{Location, Venue, LOCATION_SCHEMA, VENUE_SCHEMA};
pub use media::{
    Audio, Document, File, PhotoSize, Sticker, Video, Voice, AUDIO_SCHEMA, DOCUMENT_SCHEMA,
    FILE_SCHEMA, PHOTO_SIZE_SCHEMA, STICKER_SCHEMA, VIDEO_SCHEMA, VOICE_SCHEMA,
};
pub use message::{Message, MESSAGE_SCHEMA};
pub use query::{
    CallbackQuery, ChosenInlineResult, InlineQuery, CALLBACK_QUERY_SCHEMA,
    CHOSEN_INLINE_RESULT_SCHEMA, INLINE_QUERY_SCHEMA,
};
pub use update::{Update, UPDATE_SCHEMA};
pub use user::{User, UserProfilePhotos, USER_PROFILE_PHOTOS_SCHEMA, USER_SCHEMA};
