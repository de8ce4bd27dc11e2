mod app;
mod ui;
mod view;

use anyhow::{Context, Result};
use changelog_markup_config::{Config, PreviewConfig};
use changelog_markup_engine::{
    Document, RenderMode,
    render::{html::to_html, text::to_text},
};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

use app::App;

#[derive(Parser)]
#[command(name = "changelog-markup-cli")]
#[command(about = "Render and live-edit changelog entries")]
struct Cli {
    /// Config file (defaults to ~/.config/changelog-markup/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one entry to stdout
    Render {
        /// Entry source file
        file: PathBuf,

        /// Render in preview mode
        #[arg(long)]
        preview: bool,

        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Browse, preview and live-edit entries in a terminal UI
    Browse {
        /// Changelog directory (defaults to `changelog_path` from the config file)
        dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match cli.command {
        Command::Render {
            file,
            preview,
            format,
        } => {
            let preview_config = match Config::load_from_path(&config_path) {
                Ok(config) => config.map(|c| c.preview).unwrap_or_default(),
                Err(e) => {
                    log::warn!("ignoring config: {e}");
                    PreviewConfig::default()
                }
            };
            let mode = if preview {
                RenderMode::Preview
            } else {
                RenderMode::Full
            };
            let out = render_file(&file, mode, format, &preview_config)?;
            print!("{out}");
            Ok(())
        }
        Command::Browse { dir } => browse(dir, &config_path),
    }
}

fn render_file(
    file: &Path,
    mode: RenderMode,
    format: Format,
    preview: &PreviewConfig,
) -> Result<String> {
    let source =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let nodes = Document::parse(&source).render(mode);
    Ok(match format {
        Format::Html => to_html(&nodes, mode),
        Format::Text => {
            let text = to_text(&nodes);
            let text = if mode.is_preview() {
                clip_text(&text, preview.max_lines)
            } else {
                text
            };
            format!("{text}\n")
        }
    })
}

/// Keeps the first `max_lines` lines, marking the cut with an ellipsis line.
fn clip_text(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() <= max_lines {
        return text.to_string();
    }
    let mut clipped = lines[..max_lines].join("\n");
    if max_lines > 0 {
        clipped.push('\n');
    }
    clipped.push('…');
    clipped
}

fn browse(dir: Option<PathBuf>, config_path: &Path) -> Result<()> {
    // Changelog directory from the CLI argument, or the config file
    let (config, from_config) = match dir {
        Some(dir) => (config_for_dir(dir, config_path), false),
        None => match Config::load_from_path(config_path) {
            Ok(Some(config)) => (config, true),
            Ok(None) => {
                eprintln!("Error: No changelog directory provided and no config file found");
                eprintln!("Usage: changelog-markup-cli browse <changelog-dir>");
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: changelog-markup-cli browse <changelog-dir>");
                process::exit(1);
            }
        },
    };

    if !config.changelog_path.is_dir() {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Changelog path '{}'{} is not a directory",
            config.changelog_path.display(),
            source
        );
        process::exit(1);
    }

    let entries = config.entry_paths()?;
    let mut app = App::new(entries, config.preview.max_lines);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Config for an explicitly given changelog directory. Preview settings still
/// come from the config file; an unreadable one is logged and ignored.
fn config_for_dir(dir: PathBuf, config_path: &Path) -> Config {
    let mut config = match Config::load_from_path(config_path) {
        Ok(Some(config)) => config,
        Ok(None) => Config::new(&dir),
        Err(e) => {
            log::warn!("ignoring config: {e}");
            Config::new(&dir)
        }
    };
    config.changelog_path = dir;
    config
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key)
        {
            return Ok(());
        }
    }
}
