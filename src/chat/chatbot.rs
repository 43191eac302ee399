use super::title_case;
use crate::knowledge::{recommend, KnowledgeBase, Preferences, SongKey};
use crate::query::PreferenceParser;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_MAX_RESULTS: usize = 10;

pub const UNAVAILABLE_TEXT: &str =
    "I'm sorry, the music dataset could not be loaded on the server.";
pub const NOT_UNDERSTOOD_TEXT: &str = "I couldn't quite understand your preferences. Could you be more specific? For example, try 'show me some happy songs from 2001'.";
pub const NO_MATCH_TEXT: &str =
    "I couldn't find any songs matching all your criteria. Please try a different combination.";
pub const SUGGESTIONS_TEXT: &str = "Here are some songs you might like:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySong {
    pub song: String,
    pub artist: String,
}

impl From<&SongKey> for DisplaySong {
    fn from(key: &SongKey) -> Self {
        DisplaySong {
            song: title_case(&key.song),
            artist: title_case(&key.artist),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub songs: Vec<DisplaySong>,
}

impl ChatReply {
    fn text_only(text: &str) -> ChatReply {
        ChatReply {
            text: text.to_owned(),
            songs: vec![],
        }
    }
}

/// Answers a user message with a handful of matching songs.
pub struct Chatbot {
    knowledge_base: Option<Arc<KnowledgeBase>>,
    parser: Box<dyn PreferenceParser>,
    max_results: usize,
}

impl Chatbot {
    pub fn new(
        knowledge_base: Option<Arc<KnowledgeBase>>,
        parser: Box<dyn PreferenceParser>,
        max_results: usize,
    ) -> Chatbot {
        Chatbot {
            knowledge_base,
            parser,
            max_results,
        }
    }

    pub fn knowledge_base(&self) -> Option<&KnowledgeBase> {
        self.knowledge_base.as_deref()
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Preferences found in `message`, empty when no dataset is loaded.
    pub fn preferences(&self, message: &str) -> Preferences {
        match self.knowledge_base() {
            Some(kb) => self.parser.parse(kb, message),
            None => Preferences::new(),
        }
    }

    /// Matching songs in random order, capped and title-cased for display.
    pub fn suggest<R: Rng + ?Sized>(&self, preferences: &Preferences, rng: &mut R) -> Vec<DisplaySong> {
        let kb = match self.knowledge_base() {
            Some(kb) => kb,
            None => return vec![],
        };
        let mut songs = recommend(kb, preferences);
        debug!("{} songs match {:?}", songs.len(), preferences);
        songs.shuffle(rng);
        songs
            .iter()
            .take(self.max_results)
            .map(DisplaySong::from)
            .collect()
    }

    pub fn reply(&self, message: &str) -> ChatReply {
        self.reply_with_rng(message, &mut rand::rng())
    }

    pub fn reply_with_rng<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> ChatReply {
        if self.knowledge_base.is_none() {
            return ChatReply::text_only(UNAVAILABLE_TEXT);
        }

        let preferences = self.preferences(message);
        if preferences.is_empty() {
            return ChatReply::text_only(NOT_UNDERSTOOD_TEXT);
        }

        let songs = self.suggest(&preferences, rng);
        if songs.is_empty() {
            return ChatReply::text_only(NO_MATCH_TEXT);
        }

        ChatReply {
            text: SUGGESTIONS_TEXT.to_owned(),
            songs,
        }
    }
}
