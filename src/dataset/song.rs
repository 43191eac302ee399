use serde::{Deserialize, Serialize};

/// Column headers the dataset must carry, after trimming surrounding whitespace.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Song Name",
    "Artist",
    "Year",
    "Genre",
    "Rating",
    "Mood",
    "Language",
    "Danceability",
    "Energy",
    "Valence",
    "Tempo",
];

/// Cell contents that count as "no value", on top of empty cells. Same set
/// as the default NA strings of common dataframe CSV readers.
const NA_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || NA_MARKERS.contains(&value)
}

/// One row of the dataset as read from disk. Every cell may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSongRow {
    #[serde(rename = "Song Name")]
    pub song_name: Option<String>,
    #[serde(rename = "Artist")]
    pub artist: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Mood")]
    pub mood: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Danceability")]
    pub danceability: Option<String>,
    #[serde(rename = "Energy")]
    pub energy: Option<String>,
    #[serde(rename = "Valence")]
    pub valence: Option<String>,
    #[serde(rename = "Tempo")]
    pub tempo: Option<String>,
}

/// A complete, normalized song: text lowercased, year and rating in
/// canonical text form, audio features parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct SongRecord {
    pub song_name: String,
    pub artist: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
    pub mood: String,
    pub language: String,
    pub danceability: f64,
    pub energy: f64,
    pub valence: f64,
    pub tempo: f64,
}

fn text_cell(cell: &Option<String>) -> Option<String> {
    cell.as_deref()
        .filter(|v| !is_missing(v))
        .map(|v| v.trim().to_lowercase())
}

fn numeric_cell(cell: &Option<String>) -> Option<f64> {
    cell.as_deref()
        .filter(|v| !is_missing(v))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

/// Renders a year or rating cell so that `2001`, `2001.0` and ` 2001 `
/// all key the same index entry. Non-numeric cells are kept as lowercase text.
pub fn canonical_text(value: &str) -> String {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => {
            if number.fract() == 0.0 && number.abs() < 1e15 {
                format!("{}", number as i64)
            } else {
                format!("{}", number)
            }
        }
        _ => value.to_lowercase(),
    }
}

impl RawSongRow {
    /// Returns the normalized record, or `None` when any required cell is missing.
    pub fn normalize(&self) -> Option<SongRecord> {
        Some(SongRecord {
            song_name: text_cell(&self.song_name)?,
            artist: text_cell(&self.artist)?,
            year: text_cell(&self.year).map(|y| canonical_text(&y))?,
            genre: text_cell(&self.genre)?,
            rating: text_cell(&self.rating).map(|r| canonical_text(&r))?,
            mood: text_cell(&self.mood)?,
            language: text_cell(&self.language)?,
            danceability: numeric_cell(&self.danceability)?,
            energy: numeric_cell(&self.energy)?,
            valence: numeric_cell(&self.valence)?,
            tempo: numeric_cell(&self.tempo)?,
        })
    }
}

#[cfg(test)]
pub(crate) fn raw_row(cells: [&str; 11]) -> RawSongRow {
    let cell = |i: usize| Some(cells[i].to_string());
    RawSongRow {
        song_name: cell(0),
        artist: cell(1),
        year: cell(2),
        genre: cell(3),
        rating: cell(4),
        mood: cell(5),
        language: cell(6),
        danceability: cell(7),
        energy: cell(8),
        valence: cell(9),
        tempo: cell(10),
    }
}
