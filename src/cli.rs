use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::CommonArgs;

#[derive(Parser)]
#[command(
    name = "follow-graph",
    about = "🕸 Build bounded-depth follow graphs around a user",
    long_about = "follow-graph expands the followers and followees of a user, hop by hop, up to a \
                  maximum depth, and emits the resulting tree for network visualization. Every \
                  user appears at most once; links between branches are kept as id lists on \
                  each node.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the follow tree around a user
    ///
    /// Emits the tree in the JSON shape served to visualization clients, or
    /// as an indented ASCII tree for quick inspection.
    #[command(
        long_about = "Build the follow tree rooted at USER_ID. Followers and followees are \
                      expanded level by level up to --max-depth hops; each user is expanded at \
                      most once and follow cycles terminate naturally. Exits with an error if \
                      the user does not exist or the dataset cannot be read."
    )]
    Tree {
        /// Id of the root user
        #[arg(value_name = "USER_ID", env = "FOLLOW_GRAPH_USER")]
        user_id: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_TREE_FORMAT,
            env = "FOLLOW_GRAPH_TREE_FORMAT"
        )]
        format: TreeFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "FOLLOW_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Emit JSON on a single line
        #[arg(long, env = "FOLLOW_GRAPH_COMPACT")]
        compact: bool,
    },

    /// Draw the follow network around a user
    ///
    /// Renders every follow between the users in the tree, including the
    /// cross links the tree itself only keeps as ids, and highlights follow
    /// circles.
    #[command(
        long_about = "Render the follow network around USER_ID as a Mermaid or Graphviz DOT \
                      diagram. Solid edges are the links the traversal expanded through, dashed \
                      edges are follows between users in different branches. Groups of users \
                      that all reach each other through follows are highlighted unless \
                      --no-highlight-circles is given."
    )]
    Spectacle {
        /// Id of the root user
        #[arg(value_name = "USER_ID", env = "FOLLOW_GRAPH_USER")]
        user_id: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "FOLLOW_GRAPH_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "FOLLOW_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Do not highlight follow circles
        #[arg(long, env = "FOLLOW_GRAPH_NO_HIGHLIGHT_CIRCLES")]
        no_highlight_circles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum TreeFormat {
    Json,
    Ascii,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Mermaid,
    Dot,
}
