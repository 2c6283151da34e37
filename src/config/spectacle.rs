//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::{missing_field, validate_user_id};
use crate::constants::traversal::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    pub user_id: String,
    pub dataset: PathBuf,
    pub max_depth: usize,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_circles: bool,
    pub quiet: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

pub struct SpectacleConfigBuilder {
    user_id: Option<String>,
    dataset: Option<PathBuf>,
    max_depth: Option<usize>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_circles: bool,
    quiet: bool,
}

impl Default for SpectacleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectacleConfigBuilder {
    pub fn new() -> Self {
        Self {
            user_id: None,
            dataset: None,
            max_depth: None,
            format: None,
            output: None,
            highlight_circles: true,
            quiet: false,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_dataset(mut self, dataset: PathBuf) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_circles(mut self, highlight_circles: bool) -> Self {
        self.highlight_circles = highlight_circles;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleConfigBuilder {
    type Config = SpectacleConfig;

    fn build(self) -> Result<Self::Config, crate::error::FollowGraphError> {
        Ok(SpectacleConfig {
            user_id: validate_user_id(self.user_id.ok_or_else(|| missing_field("user_id"))?)?,
            dataset: self.dataset.ok_or_else(|| missing_field("dataset"))?,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            format: self.format.unwrap_or(GraphFormat::Mermaid),
            output: self.output,
            highlight_circles: self.highlight_circles,
            quiet: self.quiet,
        })
    }
}
