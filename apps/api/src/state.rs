use std::sync::Arc;

use resume_parser::ResumeParser;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless engine shared by every request; parses run on the blocking pool.
    pub parser: Arc<ResumeParser>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let parser = ResumeParser::new(config.parser.clone())?;
        Ok(Self {
            parser: Arc::new(parser),
        })
    }
}
