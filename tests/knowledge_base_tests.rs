//! Loading a dataset from disk and querying the resulting knowledge base

mod common;

use common::{write_dataset, write_test_dataset, DATASET_HEADER, INDEXED_SONGS};
use music_recommender::{
    build_knowledge_base, load_dataset, recommend, try_load_dataset, Category, DatasetError,
    Preferences, SongKey,
};

fn preferences(pairs: &[(&str, &str)]) -> Preferences {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_dataset_file_builds_knowledge_base() {
    let (_dir, path) = write_test_dataset().unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 4);

    let kb = build_knowledge_base(Some(&dataset)).unwrap();
    assert_eq!(kb.songs_count(), INDEXED_SONGS);
    assert_eq!(kb.dropped_rows_count(), 1);

    let genres: Vec<&String> = kb.index(Category::Genre).unwrap().keys().collect();
    assert_eq!(genres, vec!["jazz", "pop", "rock"]);

    let tempos: Vec<&String> = kb.index(Category::Tempo).unwrap().keys().collect();
    assert_eq!(tempos, vec!["fast tempo", "slow tempo"]);
}

#[test]
fn test_recommend_over_loaded_dataset() {
    let (_dir, path) = write_test_dataset().unwrap();
    let dataset = load_dataset(&path).unwrap();
    let kb = build_knowledge_base(Some(&dataset)).unwrap();

    let songs = recommend(
        &kb,
        &preferences(&[("energy", "high energy"), ("year", "1999")]),
    );
    assert_eq!(songs, vec![SongKey::new("blue moon", "the jazz trio")]);

    let songs = recommend(&kb, &preferences(&[("genre", "metal")]));
    assert!(songs.is_empty());

    let songs = recommend(&kb, &preferences(&[("tempo_bucket", "fast tempo")]));
    assert!(songs.is_empty());
}

#[test]
fn test_header_whitespace_is_trimmed() {
    let header = DATASET_HEADER.replace(',', " , ");
    let (_dir, path) = write_dataset(
        &header,
        &["Song A , Artist X , 2001 , Rock , 4 , Happy , English , 0.8 , 0.8 , 0.65 , 130"],
    )
    .unwrap();

    let dataset = load_dataset(&path).unwrap();
    let kb = build_knowledge_base(Some(&dataset)).unwrap();

    assert_eq!(kb.songs_count(), 1);
    assert!(kb.songs("artist", "artist x").is_some());
}

#[test]
fn test_missing_columns_fail_load() {
    let (_dir, path) = write_dataset(
        "Song Name,Artist,Year,Genre,Rating,Mood,Language,Danceability,Energy,Valence",
        &["Song A,Artist X,2001,Rock,4,Happy,English,0.8,0.8,0.65"],
    )
    .unwrap();

    match load_dataset(&path) {
        Err(DatasetError::MissingColumns(columns)) => assert_eq!(columns, vec!["Tempo"]),
        other => panic!("Unexpected result: {:?}", other.map(|d| d.len())),
    }
    assert!(try_load_dataset(&path).is_none());
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");

    assert!(matches!(load_dataset(&path), Err(DatasetError::NotFound(_))));
    assert!(build_knowledge_base(try_load_dataset(&path).as_ref()).is_none());
}
