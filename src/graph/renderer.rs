use std::collections::HashSet;
use std::io::Write;

use petgraph::visit::EdgeRef;

use super::network::{FollowCircle, FollowNetwork};
use super::types::UserNode;
use crate::error::FollowGraphError;

mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const ROOT_NODE_FILL: &str = "#E8F5E9"; // Light green
    pub const ROOT_NODE_STROKE: &str = "#388E3C"; // Green
    pub const CIRCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CIRCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const DISCOVERY_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CROSS_EDGE: &str = "#90A4AE"; // Blue-grey
    pub const CIRCLE_EDGE: &str = "#FF6500"; // Deep orange
}

macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(FollowGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(FollowGraphError::from)
    };
}

/// Renders follow trees and networks in text formats
pub struct GraphRenderer {
    highlight_circles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_circles: bool) -> Self {
        Self { highlight_circles }
    }

    /// Write the tree in its JSON wire shape
    pub fn render_json(
        &self,
        root: &UserNode,
        pretty: bool,
        output: &mut dyn Write,
    ) -> Result<(), FollowGraphError> {
        if pretty {
            serde_json::to_writer_pretty(&mut *output, root)?;
        } else {
            serde_json::to_writer(&mut *output, root)?;
        }
        writeln_out!(output)
    }

    pub fn render_ascii(&self, root: &UserNode, output: &mut dyn Write) -> Result<(), FollowGraphError> {
        writeln_out!(output, "\n🕸  Follow graph for {}\n", root.username)?;
        writeln_out!(output, "{}", ascii_label(root))?;

        let mut stack: Vec<(&UserNode, String, bool)> = root
            .children
            .iter()
            .enumerate()
            .rev()
            .map(|(i, child)| (child, String::new(), i + 1 == root.children.len()))
            .collect();

        while let Some((node, prefix, last)) = stack.pop() {
            let branch = if last { "└── " } else { "├── " };
            writeln_out!(output, "{prefix}{branch}{}", ascii_label(node))?;

            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i + 1 == node.children.len()));
            }
        }

        writeln_out!(
            output,
            "\n{} users, max depth {}",
            root.node_count(),
            root.max_depth()
        )
    }

    pub fn render_mermaid(
        &self,
        network: &FollowNetwork,
        circles: &[FollowCircle],
        output: &mut dyn Write,
    ) -> Result<(), FollowGraphError> {
        let graph = network.graph();
        let in_circle = self.circle_members(circles);

        writeln_out!(output, "graph LR")?;
        writeln_out!(
            output,
            "    classDef user fill:{},stroke:{}",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;
        writeln_out!(
            output,
            "    classDef root fill:{},stroke:{},stroke-width:3px",
            colors::ROOT_NODE_FILL,
            colors::ROOT_NODE_STROKE
        )?;
        writeln_out!(
            output,
            "    classDef circle fill:{},stroke:{},stroke-width:2px",
            colors::CIRCLE_NODE_FILL,
            colors::CIRCLE_NODE_STROKE
        )?;

        for idx in graph.node_indices() {
            let user = &graph[idx];
            let class = if user.depth == 0 {
                "root"
            } else if in_circle.contains(user.id.as_str()) {
                "circle"
            } else {
                "user"
            };
            writeln_out!(
                output,
                "    u{}[\"{}\"]:::{class}",
                idx.index(),
                escape_mermaid(&user.username)
            )?;
        }

        let mut circle_links = Vec::new();
        for (link, edge) in graph.edge_references().enumerate() {
            let arrow = if edge.weight().discovery { "-->" } else { "-.->" };
            writeln_out!(
                output,
                "    u{} {arrow} u{}",
                edge.source().index(),
                edge.target().index()
            )?;

            let source = graph[edge.source()].id.as_str();
            let target = graph[edge.target()].id.as_str();
            if self.highlight_circles && shares_circle(circles, source, target) {
                circle_links.push(link.to_string());
            }
        }

        if !circle_links.is_empty() {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:2px",
                circle_links.join(","),
                colors::CIRCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        network: &FollowNetwork,
        circles: &[FollowCircle],
        output: &mut dyn Write,
    ) -> Result<(), FollowGraphError> {
        let graph = network.graph();
        let in_circle = self.circle_members(circles);

        writeln_out!(output, "digraph follow_graph {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(
            output,
            "    node [shape=box, style=\"rounded,filled\", fillcolor=\"{}\", color=\"{}\"];",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;

        for idx in graph.node_indices() {
            let user = &graph[idx];
            let style = if user.depth == 0 {
                format!(
                    ", fillcolor=\"{}\", color=\"{}\", penwidth=3",
                    colors::ROOT_NODE_FILL,
                    colors::ROOT_NODE_STROKE
                )
            } else if in_circle.contains(user.id.as_str()) {
                format!(
                    ", fillcolor=\"{}\", color=\"{}\", penwidth=2",
                    colors::CIRCLE_NODE_FILL,
                    colors::CIRCLE_NODE_STROKE
                )
            } else {
                String::new()
            };
            writeln_out!(
                output,
                "    u{} [label=\"{}\\n@{}\"{style}];",
                idx.index(),
                escape_dot(&user.username),
                escape_dot(&user.id)
            )?;
        }

        for edge in graph.edge_references() {
            let source = graph[edge.source()].id.as_str();
            let target = graph[edge.target()].id.as_str();

            let attrs = if self.highlight_circles && shares_circle(circles, source, target) {
                format!("color=\"{}\", penwidth=2", colors::CIRCLE_EDGE)
            } else if edge.weight().discovery {
                format!("color=\"{}\"", colors::DISCOVERY_EDGE)
            } else {
                format!("color=\"{}\", style=dashed", colors::CROSS_EDGE)
            };
            writeln_out!(
                output,
                "    u{} -> u{} [{attrs}];",
                edge.source().index(),
                edge.target().index()
            )?;
        }

        writeln_out!(output, "}}")
    }

    fn circle_members<'a>(&self, circles: &'a [FollowCircle]) -> HashSet<&'a str> {
        if !self.highlight_circles {
            return HashSet::new();
        }
        circles
            .iter()
            .flat_map(|circle| circle.members().iter().map(String::as_str))
            .collect()
    }
}

fn shares_circle(circles: &[FollowCircle], a: &str, b: &str) -> bool {
    circles
        .iter()
        .any(|circle| circle.contains(a) && circle.contains(b))
}

fn ascii_label(node: &UserNode) -> String {
    format!(
        "{} (@{}) ← {} followers, → {} following",
        node.username,
        node.id,
        node.followers.len(),
        node.following.len()
    )
}

fn escape_mermaid(label: &str) -> String {
    label.replace('"', "#quot;")
}

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UserSummary;

    fn sample_tree() -> UserNode {
        let mut root = UserNode::new(
            UserSummary::new("a", "alice"),
            0,
            vec!["b".to_string()],
            vec!["b".to_string(), "c".to_string()],
        );
        let mut bob = UserNode::new(
            UserSummary::new("b", "bob"),
            1,
            vec!["a".to_string()],
            vec!["a".to_string(), "d".to_string()],
        );
        bob.children.push(UserNode::new(
            UserSummary::new("d", "dora"),
            2,
            vec!["b".to_string()],
            vec![],
        ));
        root.children.push(bob);
        root.children.push(UserNode::new(
            UserSummary::new("c", "carol"),
            1,
            vec!["a".to_string()],
            vec![],
        ));
        root
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), FollowGraphError>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_ascii_tree_shape() {
        let tree = sample_tree();
        let renderer = GraphRenderer::new(false);
        let text = render(|out| renderer.render_ascii(&tree, out));

        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[1], "alice (@a) ← 1 followers, → 2 following");
        assert_eq!(lines[2], "├── bob (@b) ← 1 followers, → 2 following");
        assert_eq!(lines[3], "│   └── dora (@d) ← 1 followers, → 0 following");
        assert_eq!(lines[4], "└── carol (@c) ← 1 followers, → 0 following");
        assert_eq!(lines[5], "4 users, max depth 2");
    }

    #[test]
    fn test_json_compact_round_trips() {
        let tree = sample_tree();
        let renderer = GraphRenderer::new(false);
        let text = render(|out| renderer.render_json(&tree, false, out));

        assert_eq!(text.lines().count(), 1);
        let parsed: UserNode = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_mermaid_marks_circle_members() {
        let tree = sample_tree();
        let network = FollowNetwork::from_tree(&tree);
        let circles = network.follow_circles();
        assert_eq!(circles.len(), 1);

        let renderer = GraphRenderer::new(true);
        let text = render(|out| renderer.render_mermaid(&network, &circles, out));

        assert!(text.starts_with("graph LR"));
        assert!(text.contains("[\"alice\"]:::root"));
        assert!(text.contains("[\"bob\"]:::circle"));
        assert!(text.contains("[\"carol\"]:::user"));
        assert!(text.contains("linkStyle"));
    }

    #[test]
    fn test_dot_without_highlighting() {
        let tree = sample_tree();
        let network = FollowNetwork::from_tree(&tree);
        let circles = network.follow_circles();

        let renderer = GraphRenderer::new(false);
        let text = render(|out| renderer.render_dot(&network, &circles, out));

        assert!(text.starts_with("digraph follow_graph {"));
        assert!(text.trim_end().ends_with('}'));
        assert!(!text.contains(colors::CIRCLE_EDGE));
        assert!(text.contains("label=\"dora\\n@d\""));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_mermaid("say \"hi\""), "say #quot;hi#quot;");
        assert_eq!(escape_dot("a\"b\\c"), "a\\\"b\\\\c");
    }
}
