use anyhow::Context;
use clap::Parser;
use polyscribe::Config;
use polyscribe::input::Tool;
use polyscribe::replay::{self, Script, Summary};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polyscribe")]
#[command(version, about = "Polygon authoring engine with vertex dragging and edge insertion")]
struct Cli {
    /// Replay a TOML event script and print the resulting polygons
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Tool selected before the script starts (pen, none, or any other name)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<String>,

    /// Override the distance to the first vertex that closes a polygon
    #[arg(long, value_name = "UNITS")]
    close_threshold: Option<f64>,

    /// Read configuration from FILE instead of ~/.config/polyscribe/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("polyscribe: Polygon authoring engine");
        println!();
        println!("Usage:");
        println!("  polyscribe --script events.toml    Replay pointer/tool events");
        println!("  polyscribe --help                  Show help");
        println!();
        println!("Event script format:");
        println!("  [[event]]");
        println!("  kind = \"tool\"        # tool, toggle-pen, press, motion, release, click");
        println!("  name = \"pen\"");
        println!();
        println!("  [[event]]");
        println!("  kind = \"click\"");
        println!("  x = 10.0");
        println!("  y = 20.0");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(threshold) = cli.close_threshold {
        config.override_close_threshold(threshold);
    }

    let tool = cli
        .tool
        .as_deref()
        .map(|name| name.parse::<Tool>().unwrap_or_default());

    let script = Script::load(&script_path)
        .with_context(|| format!("Could not replay {}", script_path.display()))?;

    let mut state = replay::replay_state(&config, tool);
    log::info!(
        "Replaying {} events with tool '{}'",
        script.events.len(),
        state.active_tool()
    );
    script.run(&mut state);

    println!("{}", Summary::new(&state));
    Ok(())
}
