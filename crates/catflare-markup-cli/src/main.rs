use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use catflare_markup::{Feature, ParserConfig, RegexEmojiPattern, parse_spanned};
use catflare_markup_config::MarkupConfig;

mod cli;
use cli::{Cli, OutputFormat};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Config file settings with the command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<MarkupConfig> {
    let loaded = match &cli.config {
        Some(path) => {
            let path = MarkupConfig::expand_path(path);
            let config = MarkupConfig::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => MarkupConfig::load()?,
    };

    let mut config = loaded.unwrap_or_default();
    if let Some(preset) = cli.preset {
        config.preset = preset;
    }
    config.disable.extend(cli.disable.iter().copied());
    config.enable.extend(cli.enable.iter().copied());
    log::debug!("Resolved markup config: {config:?}");
    Ok(config)
}

fn render_features(config: &ParserConfig) -> String {
    Feature::ALL
        .into_iter()
        .map(|feature| {
            let mark = if config.is_enabled(feature) { "on" } else { "off" };
            format!("{:<14} {mark}\n", feature.name())
        })
        .collect()
}

fn render(input: &str, config: &ParserConfig, cli: &Cli) -> Result<String> {
    let nodes = parse_spanned(input, config, RegexEmojiPattern::builtin());
    let out = match (cli.format, cli.spans) {
        (OutputFormat::Debug, true) => format!("{nodes:#?}"),
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&nodes)?,
        (format, false) => {
            let nodes: Vec<_> = nodes.into_iter().map(|s| s.node).collect();
            match format {
                OutputFormat::Debug => format!("{nodes:#?}"),
                OutputFormat::Json => serde_json::to_string_pretty(&nodes)?,
            }
        }
    };
    Ok(out)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let cli = Cli::parse();
    log::info!("Config path: {}", MarkupConfig::config_path().display());

    let config = resolve_config(&cli)?;
    let parser_config = config.parser_config();

    if cli.list_features {
        print!("{}", render_features(&parser_config));
        return Ok(());
    }

    let input = read_all(cli.file.as_ref()).with_context(|| match &cli.file {
        Some(path) => format!("Failed to read {}", path.display()),
        None => "Failed to read stdin".to_string(),
    })?;

    println!("{}", render(&input, &parser_config, &cli)?);
    Ok(())
}
