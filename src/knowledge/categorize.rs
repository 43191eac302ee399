//! Fixed-threshold buckets for the continuous audio features.
//!
//! The "high" and "fast" bands include their lower bound, the "low" and
//! "sad" bands include their upper bound.

pub const HIGH_LEVEL_MIN: f64 = 0.7;
pub const LOW_LEVEL_MAX: f64 = 0.4;
pub const HAPPY_VALENCE_MIN: f64 = 0.6;
pub const SAD_VALENCE_MAX: f64 = 0.4;
pub const MEDIUM_TEMPO_MIN: f64 = 90.0;
pub const FAST_TEMPO_MIN: f64 = 120.0;

pub fn categorize_danceability(danceability: f64) -> &'static str {
    if danceability >= HIGH_LEVEL_MIN {
        "high danceability"
    } else if danceability > LOW_LEVEL_MAX {
        "medium danceability"
    } else {
        "low danceability"
    }
}

pub fn categorize_energy(energy: f64) -> &'static str {
    if energy >= HIGH_LEVEL_MIN {
        "high energy"
    } else if energy > LOW_LEVEL_MAX {
        "medium energy"
    } else {
        "low energy"
    }
}

pub fn categorize_valence(valence: f64) -> &'static str {
    if valence >= HAPPY_VALENCE_MIN {
        "happy"
    } else if valence > SAD_VALENCE_MAX {
        "neutral"
    } else {
        "sad"
    }
}

/// Tempo in beats per minute.
pub fn categorize_tempo(tempo: f64) -> &'static str {
    if tempo < MEDIUM_TEMPO_MIN {
        "slow tempo"
    } else if tempo < FAST_TEMPO_MIN {
        "medium tempo"
    } else {
        "fast tempo"
    }
}
