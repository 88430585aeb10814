#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// A tiny scratch pad with copy/cut/paste and undo/redo.
#[derive(Parser, Debug)]
#[command(name = "scratch-pad", version, about)]
struct Cli {
    /// Open the pad immediately instead of showing only the launcher.
    #[arg(long)]
    open: bool,

    /// Pre-fill the pad with the given text.
    #[arg(long)]
    text: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting scratch-pad");

    let startup_args = scratch_pad_ui::StartupArgs {
        open: cli.open || cli.text.is_some(),
        text: cli.text,
        config_path: cli.config,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 360.0])
            .with_min_inner_size([320.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "scratch-pad",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(scratch_pad_ui::ScratchPadApp::new(
                cc,
                startup_args,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["scratch-pad"]);
        assert!(!cli.open);
        assert!(cli.text.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::parse_from([
            "scratch-pad",
            "--open",
            "--text",
            "hello",
            "--config",
            "/tmp/pad.json",
        ]);
        assert!(cli.open);
        assert_eq!(cli.text.as_deref(), Some("hello"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pad.json")));
    }
}
