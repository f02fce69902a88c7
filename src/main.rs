mod cli;

use anyhow::Context;
use clap::Parser;
use deskplan::{default_config_path, init_logging, parse_script, Config, DesignerState, LayoutReport};

use crate::cli::Cli;

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => match default_config_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(e) => {
                tracing::debug!("Using default config: {}", e);
                Ok(Config::default())
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::debug!("DeskPlan {} (built {})", deskplan::VERSION, deskplan::BUILD_DATE);

    let config = load_config(&cli)?;
    let mut state = if cli.empty {
        DesignerState::with_items(Vec::new(), &config)
    } else {
        DesignerState::with_config(&config)
    };

    if let Some(path) = &cli.script {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        let events = parse_script(&json)
            .with_context(|| format!("failed to parse script {}", path.display()))?;
        tracing::info!("Replaying {} event(s) from {}", events.len(), path.display());
        state.replay(events);
    }

    let report = LayoutReport::new(&state);
    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", output);

    Ok(())
}
