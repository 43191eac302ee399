//! Free-text preference extraction

use crate::knowledge::{KnowledgeBase, Preferences};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParserKind {
    /// Any known value appearing anywhere in the text.
    #[default]
    Substring,
    /// Known values appearing as whole words or phrases.
    WordBoundary,
}

impl std::fmt::Display for ParserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserKind::Substring => write!(f, "substring"),
            ParserKind::WordBoundary => write!(f, "word-boundary"),
        }
    }
}

/// Turns user text into a preference query against a knowledge base.
pub trait PreferenceParser: Send + Sync {
    fn parse(&self, knowledge_base: &KnowledgeBase, text: &str) -> Preferences;

    fn kind(&self) -> ParserKind;
}

/// Checks every known value of every category against the lowercased text.
/// Within a category the last matching value, in sorted order, wins.
pub struct SubstringPreferenceParser;

impl PreferenceParser for SubstringPreferenceParser {
    fn parse(&self, knowledge_base: &KnowledgeBase, text: &str) -> Preferences {
        let text = text.to_lowercase();
        let mut preferences = Preferences::new();
        for (category, index) in knowledge_base.iter() {
            for value in index.keys() {
                if text.contains(value.as_str()) {
                    preferences.insert(category.name().to_string(), value.clone());
                }
            }
        }
        preferences
    }

    fn kind(&self) -> ParserKind {
        ParserKind::Substring
    }
}

/// Like [`SubstringPreferenceParser`], but a value must not be glued to
/// other letters or digits ("rock" does not match "rocket"). The longest
/// matching value of a category wins.
pub struct WordBoundaryPreferenceParser;

fn contains_bounded(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(offset) = text[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        // Candidates may overlap, resume one char past this one.
        from = start + text[start..].chars().next().map_or(1, |c| c.len_utf8());
    }
    false
}

impl PreferenceParser for WordBoundaryPreferenceParser {
    fn parse(&self, knowledge_base: &KnowledgeBase, text: &str) -> Preferences {
        let text = text.to_lowercase();
        let mut preferences = Preferences::new();
        for (category, index) in knowledge_base.iter() {
            let best = index
                .keys()
                .filter(|value| contains_bounded(&text, value))
                .max_by_key(|value| value.chars().count());
            if let Some(value) = best {
                preferences.insert(category.name().to_string(), value.clone());
            }
        }
        preferences
    }

    fn kind(&self) -> ParserKind {
        ParserKind::WordBoundary
    }
}
