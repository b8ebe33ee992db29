//! # textparser CLI
//!
//! Parses a document with the standard rules and prints it as HTML, as the
//! parsed tree, or as built elements.

mod rule_set;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};
use textparser_config::Config;
use textparser_engine::{BuildError, Element, RendererRegistry, parse};
use textparser_html::HtmlHost;

use rule_set::{Overrides, RuleSet};

#[derive(Parser)]
#[command(name = "textparser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Emit::Html)]
    emit: Emit,

    /// Highlight words containing this text (repeatable)
    #[arg(long)]
    highlight: Vec<String>,

    /// Standard rules to enable, in order (comma separated)
    #[arg(long, value_delimiter = ',')]
    rules: Vec<String>,

    /// Let later renderers replace earlier ones with the same name
    #[arg(long)]
    last_wins: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Emit {
    Html,
    Tree,
    Elements,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let input = read_input(cli.input.as_deref())?;

    let rule_set = RuleSet::new(
        &config,
        &Overrides {
            rules: cli.rules,
            highlight: cli.highlight,
            last_wins: cli.last_wins,
        },
    )?;

    println!("{}", render(&input, &rule_set, cli.emit)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path);
            let loaded = Config::load_from_path(&path)?;
            if loaded.is_none() {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
            loaded
        }
        None => {
            log::debug!("Looking for config at {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(loaded.unwrap_or_default())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(input: &str, rule_set: &RuleSet, emit: Emit) -> Result<String> {
    let tree = parse(input, &rule_set.rules)?;
    let build = || -> Result<Vec<Element>, BuildError> {
        RendererRegistry::new(&rule_set.rules, rule_set.policy)?.build(&tree)
    };

    match emit {
        Emit::Tree => Ok(serde_json::to_string_pretty(&tree)?),
        Emit::Elements => Ok(serde_json::to_string_pretty(&build()?)?),
        Emit::Html => Ok(HtmlHost::new().render(&build()?)?),
    }
}
