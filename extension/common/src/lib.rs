pub mod api;
pub mod cards;
pub mod keys;
pub mod settings;
pub mod text;
pub mod time;

mod card;
mod error;
mod message;

pub use card::{CardField, Flashcard};
pub use error::RelayError;
pub use message::{ExtractReply, GenerateReply, Request};
