//! Shared constants for end-to-end tests
//!
//! When the test dataset changes, update only this file.

// ============================================================================
// Test Dataset
// ============================================================================

/// Header line of every test dataset
pub const DATASET_HEADER: &str =
    "Song Name,Artist,Year,Genre,Rating,Mood,Language,Danceability,Energy,Valence,Tempo";

/// Happy, energetic rock song from 2001
pub const SONG_A: &str = "Song A";
pub const ARTIST_X: &str = "Artist X";

/// Sad, slow pop song from 2001
pub const SONG_B: &str = "Song B";
pub const ARTIST_Y: &str = "Artist Y";

/// Happy, energetic jazz song from 1999
pub const SONG_C: &str = "blue moon";
pub const ARTIST_Z: &str = "the jazz trio";

/// Rows written by `write_test_dataset`, the last one is dropped for its
/// missing genre.
pub const DATASET_ROWS: [&str; 4] = [
    "Song A,Artist X,2001,Rock,4,Happy,English,0.8,0.8,0.65,130",
    "Song B,Artist Y,2001,Pop,3,Sad,English,0.3,0.3,0.2,80",
    "blue moon,the jazz trio,1999,Jazz,5,happy,English,0.75,0.9,0.7,125.0",
    "Song D,Artist W,2005,NaN,2,Calm,French,0.5,0.5,0.5,100",
];

/// Songs that survive normalization
pub const INDEXED_SONGS: usize = 3;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
