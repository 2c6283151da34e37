//! Tree command configuration

use std::path::PathBuf;

use crate::cli::TreeFormat;
use crate::common::{missing_field, validate_user_id};
use crate::constants::traversal::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub user_id: String,
    pub dataset: PathBuf,
    pub max_depth: usize,
    pub format: TreeFormat,
    pub output: Option<PathBuf>,
    pub compact: bool,
    pub quiet: bool,
}

impl TreeConfig {
    pub fn builder() -> TreeConfigBuilder {
        TreeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TreeConfigBuilder {
    user_id: Option<String>,
    dataset: Option<PathBuf>,
    max_depth: Option<usize>,
    format: Option<TreeFormat>,
    output: Option<PathBuf>,
    compact: bool,
    quiet: bool,
}

impl TreeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_format(mut self, format: TreeFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl crate::common::ConfigBuilder for TreeConfigBuilder {
    type Config = TreeConfig;

    fn build(self) -> Result<Self::Config, crate::error::FollowGraphError> {
        Ok(TreeConfig {
            user_id: validate_user_id(self.user_id.ok_or_else(|| missing_field("user_id"))?)?,
            dataset: self.dataset.ok_or_else(|| missing_field("dataset"))?,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            format: self.format.unwrap_or(TreeFormat::Json),
            output: self.output,
            compact: self.compact,
            quiet: self.quiet,
        })
    }
}
