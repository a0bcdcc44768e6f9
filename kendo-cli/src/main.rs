mod document;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use kendo_lib::column::ColumnRegistry;
use kendo_lib::decimal::{DecimalOptions, parse_decimal};
use kendo_lib::{Helper, RenderConfig};
use log::LevelFilter;
use serde_json::Value;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::document::TableDocument;

#[derive(Parser)]
#[command(name = "kendo-cli")]
#[command(about = "Render Kendo UI grids from JSON descriptions")]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the html and script of a table description
    Render {
        /// JSON table description
        file: PathBuf,

        /// TOML render configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print only the html
        #[arg(long, conflicts_with = "script")]
        html: bool,

        /// Print only the script
        #[arg(long)]
        script: bool,
    },
    /// Parse a number the way decimal input columns do
    Decimal {
        #[arg(allow_hyphen_values = true)]
        raw: String,

        #[arg(long)]
        thousands_separator: Option<String>,

        /// Print null for empty input instead of 0
        #[arg(long)]
        allow_null: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match cli.command {
        Commands::Render {
            file,
            config,
            html,
            script,
        } => {
            let config = load_config(config.as_deref())?;
            let output = render(&file, &config, html, script)?;
            println!("{output}");
        }
        Commands::Decimal {
            raw,
            thousands_separator,
            allow_null,
        } => {
            let mut options = DecimalOptions::new();
            options.thousands_separator = thousands_separator;
            println!("{}", decimal(&raw, &options, allow_null)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn render(file: &Path, config: &RenderConfig, html_only: bool, script_only: bool) -> Result<String> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read table description {}", file.display()))?;
    let document: TableDocument = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse table description {}", file.display()))?;

    let table = document
        .build(config, &ColumnRegistry::builtin())
        .with_context(|| format!("Failed to build table '{}'", document.id))?;

    let output = match (html_only, script_only) {
        (true, _) => table.html(),
        (_, true) => table.script(),
        _ => format!("{}\n{}", table.html(), table.script()),
    };
    Ok(output)
}

fn decimal(raw: &str, options: &DecimalOptions, allow_null: bool) -> Result<String> {
    let value = if raw.is_empty() {
        Value::Null
    } else {
        Value::String(raw.to_string())
    };
    let parsed = parse_decimal(&value, options, allow_null).map_err(kendo_lib::Error::from)?;
    Ok(parsed.map_or_else(|| "null".to_string(), |n| n.to_string()))
}
