use anyhow::Context;
use clap::{Parser, Subcommand};
use feedback_widget::clock::SystemClock;
use feedback_widget::config::Config;
use feedback_widget::controller::ViewController;
use feedback_widget::logging::init_tracing;
use feedback_widget::plain::run_plain;
use feedback_widget::ui::runtime;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "feedback", version, about = "Like, dislike and comment in your terminal")]
struct Cli {
    /// Config file (default: <config_dir>/feedback-widget/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Full-screen terminal widget (default).
    Tui,
    /// Read commands from stdin, print the view to stdout.
    Plain,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config_path, loaded) = match cli.config {
        Some(path) => {
            let loaded = Config::load_from(&path);
            (path, loaded)
        }
        None => (Config::config_path(), Config::load()),
    };
    let config = loaded.with_context(|| format!("loading {}", config_path.display()))?;

    let log_path = init_tracing(&config.logging).context("initializing logging")?;
    tracing::info!(config = %config_path.display(), log = %log_path.display(), "starting");

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Tui => runtime::run(&config).context("terminal UI failed")?,
        Mode::Plain => {
            let mut controller = ViewController::new(
                &config,
                Box::new(SystemClock::new(config.ui.timestamp_format.clone())),
            );
            run_plain(&mut controller, io::stdin().lock(), io::stdout().lock())
                .context("plain front-end failed")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Mode};
    use clap::Parser;

    #[test]
    fn defaults_to_tui_without_config() {
        let cli = Cli::parse_from(["feedback"]);
        assert!(cli.mode.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_plain_with_config() {
        let cli = Cli::parse_from(["feedback", "plain", "--config", "/tmp/f.toml"]);
        assert!(matches!(cli.mode, Some(Mode::Plain)));
        assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/f.toml"));
    }
}
