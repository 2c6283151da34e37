//! Spectacle command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{load_and_build, output_writer};
use crate::cli::GraphFormat;
use crate::config::SpectacleConfig;
use crate::executors::CommandExecutor;
use crate::graph::{FollowNetwork, GraphRenderer};
use crate::utils::string::pluralize;

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if !config.quiet {
            eprintln!(
                "{} Generating {} follow graph...",
                style("📊").cyan(),
                format!("{:?}", config.format).to_lowercase()
            );
        }

        let root = load_and_build(
            &config.dataset,
            &config.user_id,
            config.max_depth,
            config.quiet,
        )?;

        let network = FollowNetwork::from_tree(&root);
        let circles = if config.highlight_circles {
            network.follow_circles()
        } else {
            Vec::new()
        };

        if !config.quiet && !circles.is_empty() {
            eprintln!(
                "{} {} follow {} among {} users",
                style("🔄").yellow(),
                style(circles.len()).yellow().bold(),
                pluralize("circle", circles.len()),
                network.user_count()
            );
        }

        let renderer = GraphRenderer::new(config.highlight_circles);
        let mut writer = output_writer(config.output.as_ref())?;

        match config.format {
            GraphFormat::Mermaid => renderer
                .render_mermaid(&network, &circles, writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(&network, &circles, writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }
        writer.flush().into_diagnostic()?;

        if let Some(output_path) = config.output
            && !config.quiet
        {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
