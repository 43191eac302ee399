mod categorize;
mod knowledge_base;
mod recommend;

pub use categorize::{
    categorize_danceability, categorize_energy, categorize_tempo, categorize_valence,
};
pub use knowledge_base::{build_knowledge_base, AttributeIndex, Category, KnowledgeBase, SongKey};
pub use recommend::{recommend, Preferences};
