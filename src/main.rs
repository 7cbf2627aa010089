use std::io;

use anyhow::Result;

use darkwood::engine::{Engine, Pacing};
use darkwood::story::graph::dark_forest_scenario;

fn main() -> Result<()> {
    // Initialize logging. Off by default so the narration stays clean;
    // control verbosity with the RUST_LOG env var:
    //   RUST_LOG=info  cargo run   # scene transitions
    //   RUST_LOG=debug cargo run   # + tokens as the player enters them
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let graph = dark_forest_scenario();
    graph.validate()?;

    let mut engine = Engine::new(io::stdin().lock(), io::stdout().lock(), Pacing::default());
    engine.run(&graph)?;

    Ok(())
}
