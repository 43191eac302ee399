mod chatbot;
mod format;

pub use chatbot::{
    ChatReply, Chatbot, DisplaySong, DEFAULT_MAX_RESULTS, NOT_UNDERSTOOD_TEXT, NO_MATCH_TEXT,
    SUGGESTIONS_TEXT, UNAVAILABLE_TEXT,
};
pub use format::title_case;
