use std::path::Path;

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            let mut frames = SPINNER_FRAMES.to_vec();
            frames.push("✓");
            pb.set_style(spinner_style.tick_strings(&frames));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self, path: &Path) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner(&format!("Loading {}...", path.display()));
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, users: usize, follows: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Loaded {} {} and {} {}",
            style("✓").green(),
            style(users).yellow().bold(),
            pluralize("user", users),
            style(follows).yellow().bold(),
            pluralize("follow", follows)
        );
    }

    /// One tick per traversal level, levels `0..=max_depth`
    pub fn start_expansion(&mut self, root_id: &str, max_depth: usize) {
        eprintln!(
            "{} Expanding follow graph around {}...",
            style("🔍").cyan(),
            style(root_id).green()
        );
        let pb = self.create_progress_bar((max_depth as u64).saturating_add(1), "Expanding");
        self.current_bar = Some(pb);
    }

    pub fn expanding_level(&self, depth: usize, users: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!(
                "Depth {depth}: {users} {}",
                pluralize("user", users)
            ));
            pb.inc(1);
        }
    }

    pub fn finish_expansion(&mut self, node_count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} Follow graph complete: {} {}",
            style("✓").green(),
            style(node_count).yellow().bold(),
            pluralize("user", node_count)
        );
    }

    pub fn abandon(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_bar_counts_levels() {
        let mut progress = ProgressReporter::new();
        progress.start_expansion("alice", 2);
        assert_eq!(progress.current_bar.as_ref().and_then(ProgressBar::length), Some(3));
        progress.finish_expansion(1);
    }

    #[test]
    fn test_unbounded_depth_saturates() {
        let mut progress = ProgressReporter::new();
        progress.start_expansion("alice", usize::MAX);
        assert_eq!(
            progress.current_bar.as_ref().and_then(ProgressBar::length),
            Some(u64::MAX)
        );
        progress.expanding_level(0, 1);
        progress.abandon();
    }
}
