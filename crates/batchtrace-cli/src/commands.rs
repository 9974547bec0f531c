use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging;
use crate::presentation::ConsoleRenderer;
use crate::types::{ColorChoice, LogLevel, OutputFormat};
use anyhow::{Context, Result, bail};
use tracing::debug;

/// Effective settings after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub log_level: LogLevel,
    pub check_trees: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            color: cli.color.unwrap_or(config.output.color),
            log_level: cli.log_level.unwrap_or(config.log.level),
            check_trees: config.tree.check,
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(explicit) = &cli.config
        && !explicit.exists()
    {
        bail!("Config file not found: {}", explicit.display());
    }

    match resolve_config_path(cli.config.as_deref()) {
        Some(path) => Config::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let settings = Settings::resolve(&cli, &config);

    logging::init(settings.log_level);
    debug!(?settings, "resolved settings");

    let renderer = ConsoleRenderer::new(settings.format, settings.color.enabled());

    match cli.command {
        Commands::Classify { biz_steps } => handlers::classify::handle(&biz_steps, &renderer),

        Commands::Tree {
            input,
            check,
            strict,
        } => handlers::tree::handle(
            &input,
            handlers::tree::TreeOptions {
                check: check || settings.check_trees,
                strict,
            },
            &renderer,
        ),

        Commands::Events { input } => handlers::events::handle(&input, &renderer),
    }
}
