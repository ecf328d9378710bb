//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{build_dossier, default_probes, run_probes, DossierData, Probe};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, RenderStyle, Settings};
use crate::domain::{Container, TreeView};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Show { data, style }) => {
            cmd_show(&load_settings()?, data.as_deref(), *style)
        }
        Some(Commands::Check { data }) => cmd_check(&load_settings()?, data.as_deref()),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage("no command given, see `dossier --help`".to_string())),
    }
}

/// Settings for the commands that render or check a dossier.
fn load_settings() -> CliResult<Settings> {
    let settings = Settings::load()?;
    if !settings.color {
        colored::control::set_override(false);
    }
    Ok(settings)
}

/// Data file from the flag, else from settings, else the built-in sample.
fn load_data(settings: &Settings, flag: Option<&Path>) -> CliResult<DossierData> {
    match flag.or(settings.data.as_deref()) {
        Some(path) => {
            debug!("loading dossier data from {}", path.display());
            Ok(DossierData::load(path)?)
        }
        None => Ok(DossierData::default()),
    }
}

#[instrument(skip(settings))]
fn cmd_show(settings: &Settings, data: Option<&Path>, style: Option<RenderStyle>) -> CliResult<()> {
    let data = load_data(settings, data)?;
    let root = build_dossier(&data)?;

    match style.unwrap_or(settings.style) {
        RenderStyle::Plain => output::info(&root.render(0)),
        RenderStyle::Tree => output::info(root.to_tree().to_string().trim_end()),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_check(settings: &Settings, data: Option<&Path>) -> CliResult<()> {
    let data = load_data(settings, data)?;
    let mut root = build_dossier(&data)?;
    check_restrictions(&mut root, &default_probes())
}

/// Run `probes` against `root`, print each outcome and fail if any was accepted.
pub fn check_restrictions(root: &mut Container, probes: &[Probe]) -> CliResult<()> {
    let outcomes = run_probes(root, probes)?;

    output::header("Restriction checks");
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Err(e) if outcome.held() => {
                output::success_detail(&format!("{}: {}", outcome.description, e))
            }
            _ => {
                failed += 1;
                output::failure(&format!(
                    "{}: accepted by '{}'",
                    outcome.description, outcome.section
                ));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ProbesFailed(failed));
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&load_settings()?.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::detail("no config directory available on this platform"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
