mod file_config;

pub use file_config::{FileConfig, RecommenderConfig};

use crate::chat::DEFAULT_MAX_RESULTS;
use crate::query::ParserKind;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_DATASET_FILE: &str = "music_recommendation_big_dataset.csv";
pub const DEFAULT_PORT: u16 = 5000;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub dataset_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub max_results: usize,
    pub parser: ParserKind,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            dataset_path: None,
            port: DEFAULT_PORT,
            logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            max_results: DEFAULT_MAX_RESULTS,
            parser: ParserKind::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub recommender: RecommenderSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderSettings {
    pub max_results: usize,
    pub parser: ParserKind,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            parser: ParserKind::Substring,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE));

        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {}", s),
            },
            None => cli.logging_level.clone(),
        };

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(dir) = &frontend_dir_path {
            if !PathBuf::from(dir).is_dir() {
                bail!("Frontend directory does not exist: {:?}", dir);
            }
        }

        let recommender_file = file.recommender.unwrap_or_default();
        let max_results = recommender_file.max_results.unwrap_or(cli.max_results);
        if max_results == 0 {
            bail!("max_results must be at least 1");
        }
        let parser = match recommender_file.parser {
            Some(s) => match parse_parser_kind(&s) {
                Some(kind) => kind,
                None => bail!("Unknown preference parser in config file: {}", s),
            },
            None => cli.parser,
        };

        Ok(Self {
            dataset_path,
            port,
            logging_level,
            frontend_dir_path,
            recommender: RecommenderSettings {
                max_results,
                parser,
            },
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_parser_kind(s: &str) -> Option<ParserKind> {
    ParserKind::from_str(s, true).ok()
}
