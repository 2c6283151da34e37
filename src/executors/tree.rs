//! Tree command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{load_and_build, output_writer};
use crate::cli::TreeFormat;
use crate::config::TreeConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;

pub struct TreeExecutor;

impl CommandExecutor for TreeExecutor {
    type Config = TreeConfig;

    fn execute(config: Self::Config) -> Result<()> {
        log::debug!(
            "tree: user={} dataset={} max_depth={}",
            config.user_id,
            config.dataset.display(),
            config.max_depth
        );

        let root = load_and_build(
            &config.dataset,
            &config.user_id,
            config.max_depth,
            config.quiet,
        )?;

        let renderer = GraphRenderer::new(false);
        let mut writer = output_writer(config.output.as_ref())?;

        match config.format {
            TreeFormat::Json => renderer
                .render_json(&root, !config.compact, writer.as_mut())
                .wrap_err("Failed to serialize follow tree")?,
            TreeFormat::Ascii => renderer
                .render_ascii(&root, writer.as_mut())
                .wrap_err("Failed to render ASCII tree")?,
        }
        writer.flush().into_diagnostic()?;

        if let Some(output_path) = config.output
            && !config.quiet
        {
            eprintln!(
                "{} Tree written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
