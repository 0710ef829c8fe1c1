mod app;
mod clipboard;
mod config;
mod export;
mod input;
mod palette;
mod svg;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use export::ExportFormat;
use palette::{Color, PaletteController};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swatchy", version, about = "Random colour palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Generate a palette and print it to stdout (headless).
    Generate {
        /// Number of colours (defaults to palette.default_count).
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Colour to keep, e.g. 1A2B3C or '#1A2B3C'. Repeatable; order is kept.
        #[arg(short, long = "keep")]
        keep: Vec<Color>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::R)]
        format: OutputFormat,
    },
    /// Config file management.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config file location.
    Path,
    /// Write the default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// c('#RRGGBB', ...)
    R,
    /// ['#RRGGBB', ...]
    List,
    Json,
    Svg,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            // Logs would corrupt the alternate screen, so they go to a file.
            init_tracing(Some(&cfg.paths.data_dir.join("swatchy.log")))?;
            tracing::info!(
                max_colors = cfg.palette.max_colors,
                count = cfg.palette.default_count,
                "starting tui"
            );
            let mut terminal = tui::TerminalGuard::enter(&cfg.input).context("init terminal")?;
            let mut app = app::App::new(cfg);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate {
            count,
            keep,
            format,
        } => {
            init_tracing(None)?;
            let out = generate(&cfg, count, &keep, format)?;
            println!("{}", out.trim_end());
        }
        Command::Config { cmd } => match cmd {
            ConfigCommand::Path => {
                let path = match cli.config {
                    Some(p) => p,
                    None => config::default_config_path().context("default config path")?,
                };
                println!("{}", path.display());
            }
            ConfigCommand::Init { force } => {
                let path = match cli.config.as_deref() {
                    Some(p) => p.to_path_buf(),
                    None => config::default_config_path().context("default config path")?,
                };
                if path.exists() && !force {
                    anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
                }
                let path = config::save(&config::Config::default(), Some(&path))
                    .context("save config")?;
                println!("Wrote {}", path.display());
            }
        },
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Builds a palette the same way the TUI does: keep the given colours in
/// order, then regenerate at the requested count.
fn generate(
    cfg: &config::Config,
    count: Option<usize>,
    keep: &[Color],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let max = cfg.palette.max_colors;
    let count = count.unwrap_or(cfg.palette.default_count);
    anyhow::ensure!(
        (1..=max).contains(&count),
        "count must be between 1 and {max} (got {count})"
    );

    let mut ctl = PaletteController::new(max, count);
    for &color in keep {
        ctl.toggle_keep(color, true);
    }
    ctl.regenerate();
    let dropped = dropped_kept(&ctl);
    if dropped > 0 {
        tracing::warn!(
            kept = ctl.kept().len(),
            count,
            dropped,
            "more kept colours than requested; extra colours dropped"
        );
    }

    let out = match format {
        OutputFormat::R => ExportFormat::R.render(ctl.palette()),
        OutputFormat::List => ExportFormat::List.render(ctl.palette()),
        OutputFormat::Json => export::to_json(ctl.palette())?,
        OutputFormat::Svg => svg::render(ctl.palette(), &cfg.svg),
    };
    Ok(out)
}

/// Kept colours that did not fit in the palette. Duplicate `--keep` values
/// collapse into one kept colour, so this counts the set, not the arguments.
fn dropped_kept(ctl: &PaletteController) -> usize {
    ctl.kept().len().saturating_sub(ctl.requested_count())
}
