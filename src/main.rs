use miette::Result;

/// Main entry point for the follow-graph CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    // Diagnostics only; user-facing output goes through console and indicatif
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    follow_graph::run()
}
