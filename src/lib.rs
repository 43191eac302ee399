//! Keyword-based music recommender
//!
//! Songs from a CSV dataset are indexed by year, artist, genre, rating,
//! mood, language and by buckets of their tempo, danceability, energy and
//! valence. A query names one value per category and gets back the songs
//! matching all of them.

pub mod chat;
pub mod config;
pub mod dataset;
pub mod knowledge;
pub mod query;
pub mod server;

// Re-export commonly used types for convenience
pub use chat::{ChatReply, Chatbot};
pub use dataset::{load_dataset, try_load_dataset, Dataset, DatasetError};
pub use knowledge::{build_knowledge_base, recommend, Category, KnowledgeBase, Preferences, SongKey};
pub use query::{create_preference_parser, ParserKind, PreferenceParser};
pub use server::{run_server, RequestsLoggingLevel};
