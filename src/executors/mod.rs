//! Command executors that handle the actual logic for each command

pub mod spectacle;
pub mod tree;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::graph::{FollowGraphBuilder, UserNode};
use crate::progress::ProgressReporter;
use crate::store::Dataset;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load `dataset` and build the follow tree around `user_id`
pub(crate) fn load_and_build(
    dataset: &Path,
    user_id: &str,
    max_depth: usize,
    quiet: bool,
) -> Result<UserNode> {
    let mut progress = (!quiet).then(ProgressReporter::new);

    if let Some(p) = progress.as_mut() {
        p.start_loading(dataset);
    }
    let store = match Dataset::parse_file(dataset).and_then(Dataset::into_store) {
        Ok(store) => store,
        Err(e) => {
            if let Some(p) = progress.as_mut() {
                p.abandon();
            }
            return Err(e).wrap_err("Failed to load network dataset");
        }
    };
    if let Some(p) = progress.as_mut() {
        p.finish_loading(store.user_count(), store.follow_count());
        p.start_expansion(user_id, max_depth);
    }

    let builder = FollowGraphBuilder::new(store).with_max_depth(max_depth);
    let root = match builder.build_with_progress(user_id, progress.as_ref()) {
        Ok(root) => root,
        Err(e) => {
            if let Some(p) = progress.as_mut() {
                p.abandon();
            }
            return Err(e.into());
        }
    };

    if let Some(p) = progress.as_mut() {
        p.finish_expansion(root.node_count());
    }

    Ok(root)
}

/// Writer for `output`, or stdout when no path is given
pub(crate) fn output_writer(output: Option<&PathBuf>) -> Result<Box<dyn io::Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create output file '{}'", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    })
}
