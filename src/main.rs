use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use shapeboard::config::Config;
use shapeboard::input::InputState;
use shapeboard::{script, ui};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shapeboard")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SHAPEBOARD_GIT_HASH"), ")"),
    about = "Replay pointer gestures and toolbar commands on a shape board"
)]
struct Cli {
    /// Gesture script to replay (reads stdin when omitted)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/shapeboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore the config file and start from built-in defaults
    #[arg(long, action = ArgAction::SetTrue)]
    no_config: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        log::info!("Skipping config file");
        return Ok(Config::default());
    }
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn read_script(cli: &Cli) -> Result<String> {
    match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let steps = script::parse_script(&read_script(&cli)?)?;
    log::debug!("Replaying {} steps", steps.len());

    let mut state = InputState::from_config(&config);
    script::replay(&mut state, &steps);

    println!("{}", ui::status_text(&state));
    for line in ui::render_figures(&state.frame) {
        println!("{line}");
    }

    Ok(())
}
