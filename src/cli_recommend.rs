use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

mod cli_style;

use cli_style::{
    get_styles, print_banner, print_error, print_key_value, print_song, print_success,
    print_warning,
};
use music_recommender::chat::{Chatbot, DEFAULT_MAX_RESULTS};
use music_recommender::config::DEFAULT_DATASET_FILE;
use music_recommender::{
    build_knowledge_base, create_preference_parser, load_dataset, KnowledgeBase, ParserKind,
};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

const PROMPT: &str = "\n> ";

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the CSV song dataset.
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Maximum number of songs shown per answer.
    #[clap(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// How preferences are extracted from what you type.
    #[clap(long, value_enum, default_value_t = ParserKind::Substring)]
    pub parser: ParserKind,
}

/// Completes the word under the cursor with known category values.
#[derive(rustyline_derive::Hinter)]
struct ValuesHelper {
    values: Vec<String>,
}

impl ValuesHelper {
    pub fn new(knowledge_base: &KnowledgeBase) -> Self {
        let values: BTreeSet<String> = knowledge_base
            .iter()
            .flat_map(|(_, index)| index.keys().cloned())
            .collect();
        ValuesHelper {
            values: values.into_iter().collect(),
        }
    }
}

impl Completer for ValuesHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let start = line[..pos].rfind(' ').map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();
        if word.is_empty() {
            return Ok((pos, Vec::with_capacity(0)));
        }
        let matches = self
            .values
            .iter()
            .filter(|v| v.starts_with(&word))
            .cloned()
            .collect::<Vec<_>>();

        Ok((start, matches))
    }
}

impl Highlighter for ValuesHelper {}
impl Validator for ValuesHelper {}
impl Helper for ValuesHelper {}

fn answer(chatbot: &Chatbot, line: &str) {
    let preferences = chatbot.preferences(line);
    if preferences.is_empty() {
        print_warning("I'm sorry, I couldn't understand that. Try being more specific.");
        return;
    }

    println!("Searching with preferences:");
    for (category, value) in preferences.iter() {
        print_key_value(category, value);
    }

    let songs = chatbot.suggest(&preferences, &mut rand::rng());
    if songs.is_empty() {
        print_error(
            "Couldn't find any songs matching all your criteria. Please try a different combination.",
        );
        return;
    }

    print_success("I found some songs you might like!");
    for song in songs.iter() {
        print_song(&song.song, &song.artist);
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let dataset_path = match cli_args.dataset {
        Some(path) => path,
        None => parse_path(DEFAULT_DATASET_FILE)?,
    };
    if cli_args.max_results == 0 {
        anyhow::bail!("--max-results must be at least 1");
    }

    println!("Loading and analyzing your music library, please wait...");
    let dataset = load_dataset(&dataset_path)
        .with_context(|| format!("Make sure {} is a readable CSV file", dataset_path.display()))?;
    let knowledge_base = build_knowledge_base(Some(&dataset))
        .map(Arc::new)
        .with_context(|| "Could not index the dataset")?;
    print_success(&format!(
        "Done! Indexed {} songs, your chatbot is ready.",
        knowledge_base.songs_count()
    ));

    let helper = ValuesHelper::new(&knowledge_base);
    let chatbot = Chatbot::new(
        Some(knowledge_base),
        create_preference_parser(&cli_args.parser),
        cli_args.max_results,
    );

    print_banner();

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<ValuesHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                if line.eq_ignore_ascii_case("exit") {
                    println!("Goodbye!");
                    break;
                }
                answer(&chatbot, line);
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }
    Ok(())
}
