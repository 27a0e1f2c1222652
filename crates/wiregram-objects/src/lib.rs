pub mod entries;
pub mod envelope;
pub mod error;
pub mod object;
pub mod objects;

// Convenience re-exports
pub use entries::{Entries, Node};
pub use envelope::unwrap_result;
pub use error::ObjectError;
pub use object::{Field, ObjectSchema, Relation, ResponseObject};
pub use objects::{
    Audio, CallbackQuery, Chat, ChatMember, ChosenInlineResult, Contact, Document, File,
    InlineQuery, Location, Message, PhotoSize, Sticker, Update, User, UserProfilePhotos, Venue,
    Video, Voice,
};
