mod load;
mod song;

pub use load::{load_dataset, try_load_dataset, Dataset, DatasetError};
#[cfg(test)]
pub(crate) use song::raw_row;
pub use song::{canonical_text, is_missing, RawSongRow, SongRecord, REQUIRED_COLUMNS};
