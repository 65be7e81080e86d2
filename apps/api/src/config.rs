use anyhow::{Context, Result};
use resume_parser::ParserConfig;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub parser: ParserConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut parser = match optional_env("PARSER_CONFIG") {
            Some(path) => load_parser_config(&path)?,
            None => ParserConfig::default(),
        };
        if let Some(value) = optional_env("SUBSECTION_GAP_MULTIPLIER") {
            parser.subsection_gap_multiplier = value
                .parse::<f32>()
                .context("SUBSECTION_GAP_MULTIPLIER must be a number")?;
        }
        if let Some(value) = optional_env("MAX_TEXT_ITEMS") {
            parser.max_text_items = value
                .parse::<usize>()
                .context("MAX_TEXT_ITEMS must be a non-negative integer")?;
        }
        parser.validate()?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            parser,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn load_parser_config(path: &str) -> Result<ParserConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parser config from '{path}'"))?;
    ParserConfig::from_json_str(&json)
        .with_context(|| format!("Invalid parser config in '{path}'"))
}
