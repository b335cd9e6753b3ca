use anyhow::{Context, Result};
use artboard::config::Config;
use artboard::draw::PRESETS;
use artboard::export::{self, FileSaveConfig};
use artboard::script::{self, Pacing, StrokeScript};
use artboard::surface::DrawingSurface;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "artboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ARTBOARD_GIT_HASH"), ")"),
    about = "Raster drawing canvas with pen, eraser, and shape tools"
)]
struct Cli {
    /// Config file to use instead of ~/.config/artboard/config.toml
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a stroke script onto a fresh canvas and export it as PNG
    Render {
        /// TOML stroke script with [[step]] entries
        script: PathBuf,

        /// Output file (defaults to a timestamped file in the export directory)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// Frames per second used to pace the replay
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Script steps applied on each frame
        #[arg(long, default_value_t = 1)]
        steps_per_frame: usize,

        /// Apply every step at once instead of pacing by frame ticks
        #[arg(long, action = ArgAction::SetTrue)]
        instant: bool,
    },

    /// Export a freshly initialized canvas
    Blank {
        /// Output file (defaults to a timestamped file in the export directory)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write the example config to ~/.config/artboard/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand: show usage
        println!("artboard: Raster drawing canvas with pen, eraser, and shape tools");
        println!();
        println!("Usage:");
        println!("  artboard render <SCRIPT> [-o FILE]   Replay a stroke script and export PNG");
        println!("  artboard blank [-o FILE]             Export an empty canvas");
        println!("  artboard init-config                 Write the example config file");
        println!("  artboard --help                      Show help");
        println!();
        let presets: Vec<String> = PRESETS.iter().map(|color| color.to_hex()).collect();
        println!("Preset colors: {}", presets.join(" "));
        println!();
        println!("Stroke script example:");
        println!("  [[step]]");
        println!("  op = \"press\"");
        println!("  x = 10");
        println!("  y = 10");
        return Ok(());
    };

    match command {
        Command::Render {
            script,
            output,
            fps,
            steps_per_frame,
            instant,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let pacing = Pacing {
                fps,
                steps_per_frame,
            };
            render(&config, &script, output.as_deref(), pacing, instant)
        }
        Command::Blank { output } => {
            let config = load_config(cli.config.as_deref())?;
            let surface = DrawingSurface::new(config.surface_options())
                .context("Failed to create drawing surface")?;
            save(&config, &surface, output.as_deref())
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn render(
    config: &Config,
    script_path: &Path,
    output: Option<&Path>,
    pacing: Pacing,
    instant: bool,
) -> Result<()> {
    let script = StrokeScript::load(script_path)?;
    let mut surface = DrawingSurface::new(config.surface_options())
        .context("Failed to create drawing surface")?;

    if instant {
        script::replay_instant(&mut surface, &script.steps);
    } else {
        let frames = script::replay_paced(&mut surface, script.steps, pacing)
            .context("Failed to replay stroke script")?;
        log::info!("Replayed stroke script in {frames} frames");
    }

    save(config, &surface, output)
}

fn save(config: &Config, surface: &DrawingSurface, output: Option<&Path>) -> Result<()> {
    let save_config = FileSaveConfig::from(&config.export);
    let path = export::export_surface(surface, output, &save_config)?;
    println!("Saved {}", path.display());
    Ok(())
}
