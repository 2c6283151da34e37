//! Configuration constants for follow-graph
//!
//! Defaults that the CLI falls back to when neither a flag nor an
//! environment variable is given.

use std::time::Duration;

/// Traversal limits
pub mod traversal {
    /// How many follow hops away from the root the tree expands
    pub const DEFAULT_MAX_DEPTH: usize = 2;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a dataset loads
    pub const SPINNER_FRAMES: &[&str] = &["🕸 ", "🕸·", "🕸∙", "🕸•", "🕸∙", "🕸·"];
}

/// Output formatting configuration
pub mod output {
    /// Default format of the `tree` command
    pub const DEFAULT_TREE_FORMAT: &str = "json";

    /// Default format of the `spectacle` command
    pub const DEFAULT_GRAPH_FORMAT: &str = "mermaid";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_constants() {
        assert_eq!(traversal::DEFAULT_MAX_DEPTH, 2);
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 6);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_TREE_FORMAT, "json");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "mermaid");
    }
}
