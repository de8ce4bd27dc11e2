use changelog_markup_config::Config;
use dioxus::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

mod ui;

use ui::App;
use ui::components::ErrorScreen;

/// Config for this run: the changelog directory comes from the first CLI
/// argument when given, otherwise from the config file.
fn resolve_config(arg: Option<PathBuf>, config_path: &Path) -> Result<Config, String> {
    let stored = Config::load_from_path(config_path);

    let (config, from_config) = match (arg, stored) {
        (Some(dir), Ok(stored)) => {
            let mut config = stored.unwrap_or_else(|| Config::new(&dir));
            config.changelog_path = dir;
            (config, false)
        }
        (Some(dir), Err(e)) => {
            log::warn!("ignoring config file: {e}");
            (Config::new(dir), false)
        }
        (None, Ok(Some(config))) => (config, true),
        (None, Ok(None)) => {
            return Err(format!(
                "No changelog directory provided and no config file found. \
                 Pass a directory or create a config file at {}",
                config_path.display()
            ));
        }
        (None, Err(e)) => return Err(format!("Failed to load config file: {e}")),
    };

    if !config.changelog_path.is_dir() {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        return Err(format!(
            "Changelog path '{}'{} is not a directory",
            config.changelog_path.display(),
            source
        ));
    }

    Ok(config)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("changelog-markup starting up");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    if env::args().count() > 2 {
        let program_name = env::args()
            .next()
            .unwrap_or_else(|| "changelog-markup-dioxus".to_string());
        eprintln!("Usage: {program_name} [changelog-dir]");
        process::exit(1);
    }

    if let Err(e) = resolve_config(env::args().nth(1).map(PathBuf::from), &config_path) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Same resolution as main; a failure here shows in the window instead
    let config = resolve_config(env::args().nth(1).map(PathBuf::from), &Config::config_path());

    match config {
        Ok(config) => {
            log::info!(
                "Showing changelog entries from {}",
                config.changelog_path.display()
            );
            rsx! {
                App { config }
            }
        }
        Err(message) => rsx! {
            ErrorScreen {
                title: "Cannot open changelog".to_string(),
                message,
                details: None,
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("changelog-markup")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
