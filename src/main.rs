#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chakshu_core::LandingConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global landing configuration, set once from file + command line
static CONFIG: OnceLock<LandingConfig> = OnceLock::new();

/// Get the landing configuration (defaults if it was never set)
pub fn get_config() -> LandingConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Chakshu.AI - Hunting for Exoplanets with AI
#[derive(Parser, Debug)]
#[command(name = "chakshu-desktop")]
#[command(about = "Chakshu.AI - landing page for the exoplanet classifier")]
struct Args {
    /// Path to a JSON config file (default: <config dir>/chakshu/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where the Start button sends you
    #[arg(short, long)]
    launch_url: Option<String>,

    /// Seed for the star field, for a reproducible sky
    #[arg(short, long)]
    star_seed: Option<u64>,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chakshu")
        .join("config.json")
}

/// Load the config file, then apply command line overrides.
fn load_config(args: &Args) -> Result<LandingConfig> {
    let path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = LandingConfig::load_or_default(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if let Some(ref url) = args.launch_url {
        config.launch_url = url.clone();
    }
    if let Some(seed) = args.star_seed {
        config.star_seed = Some(seed);
    }

    config.validate().context("invalid command line override")?;
    Ok(config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting Chakshu.AI landing (launch url: {}, {} quotes)",
        config.launch_url,
        config.quotes().len()
    );

    // Store config globally
    let _ = CONFIG.set(config);

    let window_width = 1200.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Chakshu.AI")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_apply_on_top_of_defaults() {
        let args = Args::parse_from([
            "chakshu-desktop",
            "--config",
            "/nonexistent/chakshu/config.json",
            "--launch-url",
            "https://classify.example.org/",
            "--star-seed",
            "11",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.launch_url, "https://classify.example.org/");
        assert_eq!(config.star_seed, Some(11));
        assert_eq!(config.star_count, 100);
    }

    #[test]
    fn bad_launch_url_override_is_rejected() {
        let args = Args::parse_from([
            "chakshu-desktop",
            "--config",
            "/nonexistent/chakshu/config.json",
            "--launch-url",
            "javascript:alert(1)",
        ]);
        assert!(load_config(&args).is_err());
    }
}
