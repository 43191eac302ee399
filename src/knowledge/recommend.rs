use super::{KnowledgeBase, SongKey};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Category name -> the single value the user asked for.
pub type Preferences = BTreeMap<String, String>;

/// Songs satisfying every preference at once.
///
/// An empty query, or a single criterion naming an unknown category or an
/// unknown value, gives no songs at all. The result carries no ordering.
pub fn recommend(knowledge_base: &KnowledgeBase, preferences: &Preferences) -> Vec<SongKey> {
    if preferences.is_empty() {
        return vec![];
    }

    let mut sets: Vec<&HashSet<SongKey>> = Vec::with_capacity(preferences.len());
    for (category, value) in preferences.iter() {
        match knowledge_base.songs(category, value) {
            Some(songs) => sets.push(songs),
            None => {
                debug!("No songs for {}={}, query is unsatisfiable", category, value);
                return vec![];
            }
        }
    }

    sets.sort_by_key(|s| s.len());
    let (smallest, others) = match sets.split_first() {
        Some(x) => x,
        None => return vec![],
    };

    smallest
        .iter()
        .filter(|song| others.iter().all(|set| set.contains(*song)))
        .cloned()
        .collect()
}
