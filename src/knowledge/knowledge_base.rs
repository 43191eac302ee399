use super::categorize::{
    categorize_danceability, categorize_energy, categorize_tempo, categorize_valence,
};
use crate::dataset::{Dataset, SongRecord};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Year,
    Artist,
    Genre,
    Rating,
    Mood,
    Language,
    Tempo,
    Danceability,
    Energy,
    Valence,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Year,
        Category::Artist,
        Category::Genre,
        Category::Rating,
        Category::Mood,
        Category::Language,
        Category::Tempo,
        Category::Danceability,
        Category::Energy,
        Category::Valence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Year => "year",
            Category::Artist => "artist",
            Category::Genre => "genre",
            Category::Rating => "rating",
            Category::Mood => "mood",
            Category::Language => "language",
            Category::Tempo => "tempo",
            Category::Danceability => "danceability",
            Category::Energy => "energy",
            Category::Valence => "valence",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The raw or derived value a song has for this category.
    fn value_of<'a>(&self, song: &'a SongRecord) -> &'a str {
        match self {
            Category::Year => &song.year,
            Category::Artist => &song.artist,
            Category::Genre => &song.genre,
            Category::Rating => &song.rating,
            Category::Mood => &song.mood,
            Category::Language => &song.language,
            Category::Tempo => categorize_tempo(song.tempo),
            Category::Danceability => categorize_danceability(song.danceability),
            Category::Energy => categorize_energy(song.energy),
            Category::Valence => categorize_valence(song.valence),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A song as the indexes see it. Two rows sharing name and artist collapse
/// into the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SongKey {
    pub song: String,
    pub artist: String,
}

impl SongKey {
    pub fn new<S: Into<String>, A: Into<String>>(song: S, artist: A) -> SongKey {
        SongKey {
            song: song.into(),
            artist: artist.into(),
        }
    }
}

/// Category value -> songs having that value.
pub type AttributeIndex = BTreeMap<String, HashSet<SongKey>>;

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    indexes: BTreeMap<Category, AttributeIndex>,
    songs_count: usize,
    dropped_rows_count: usize,
}

impl KnowledgeBase {
    fn from_songs(songs: &[SongRecord], dropped_rows_count: usize) -> KnowledgeBase {
        let mut indexes: BTreeMap<Category, AttributeIndex> = Category::ALL
            .into_iter()
            .map(|c| (c, AttributeIndex::new()))
            .collect();

        for song in songs {
            let key = SongKey::new(song.song_name.as_str(), song.artist.as_str());
            for (category, index) in indexes.iter_mut() {
                index
                    .entry(category.value_of(song).to_owned())
                    .or_default()
                    .insert(key.clone());
            }
        }

        KnowledgeBase {
            indexes,
            songs_count: songs.len(),
            dropped_rows_count,
        }
    }

    pub fn index(&self, category: Category) -> Option<&AttributeIndex> {
        self.indexes.get(&category)
    }

    /// Looks an index up by category name, `None` for unknown names.
    pub fn index_by_name(&self, name: &str) -> Option<&AttributeIndex> {
        Category::from_name(name).and_then(|c| self.index(c))
    }

    pub fn songs(&self, category_name: &str, value: &str) -> Option<&HashSet<SongKey>> {
        self.index_by_name(category_name)
            .and_then(|index| index.get(value))
    }

    /// All indexes, in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &AttributeIndex)> {
        self.indexes.iter().map(|(c, index)| (*c, index))
    }

    /// Number of complete rows that made it into the indexes.
    pub fn songs_count(&self) -> usize {
        self.songs_count
    }

    pub fn dropped_rows_count(&self) -> usize {
        self.dropped_rows_count
    }
}

/// Builds the per-category indexes out of a dataset. Rows with any missing
/// cell are discarded. An absent dataset gives an absent knowledge base.
pub fn build_knowledge_base(dataset: Option<&Dataset>) -> Option<KnowledgeBase> {
    let dataset = dataset?;

    let songs: Vec<SongRecord> = dataset
        .rows
        .iter()
        .filter_map(|row| row.normalize())
        .collect();
    let dropped = dataset.len() - songs.len();
    if dropped > 0 {
        debug!("Dropped {} incomplete rows out of {}", dropped, dataset.len());
    }

    Some(KnowledgeBase::from_songs(&songs, dropped))
}
