use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use music_recommender::chat::{Chatbot, DEFAULT_MAX_RESULTS};
use music_recommender::config::{AppConfig, CliConfig, FileConfig, DEFAULT_PORT};
use music_recommender::server::{run_server, RequestsLoggingLevel, ServerConfig};
use music_recommender::{
    build_knowledge_base, create_preference_parser, try_load_dataset, ParserKind,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the CSV song dataset.
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Path to a TOML config file, its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Maximum number of songs returned per reply.
    #[clap(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// How preferences are extracted from the user message.
    #[clap(long, value_enum, default_value_t = ParserKind::Substring)]
    pub parser: ParserKind,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            dataset_path: self.dataset.clone(),
            port: self.port,
            logging_level: self.logging_level.clone(),
            frontend_dir_path: self.frontend_dir_path.clone(),
            max_results: self.max_results,
            parser: self.parser,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Could not initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Loading dataset at {:?}...", config.dataset_path);
    let dataset = try_load_dataset(&config.dataset_path);

    info!("Indexing songs...");
    let knowledge_base = build_knowledge_base(dataset.as_ref()).map(Arc::new);
    match &knowledge_base {
        Some(kb) => info!(
            "Indexed {} songs, dropped {} incomplete rows",
            kb.songs_count(),
            kb.dropped_rows_count()
        ),
        None => warn!("No dataset available, every chat request will be answered as unavailable"),
    }

    let parser = create_preference_parser(&config.recommender.parser);
    let chatbot = Chatbot::new(knowledge_base, parser, config.recommender.max_results);

    run_server(ServerConfig::from(&config), chatbot).await
}
