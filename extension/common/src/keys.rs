//! `storage.local` keys shared by every context.

pub const CARDS: &str = "cards";
pub const TIMESTAMP: &str = "timestamp";
pub const CARD_MODE: &str = "cardMode";
pub const THEME: &str = "theme";
pub const API_URL: &str = "apiUrl";
pub const PENDING_TEXT: &str = "pendingText";
