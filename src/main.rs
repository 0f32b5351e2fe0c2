use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use content_intel::errors::Result;
use content_intel::ops::telemetry;
use content_intel::{ContextualEngine, EngineConfig};

#[derive(Parser)]
#[command(name = "content-intel")]
#[command(
    author,
    version,
    about = "Contextual links and quality scores for listing and article content",
    long_about = None
)]
#[command(after_help = r#"Examples:
  content-intel links article.html                       Links for an article
  content-intel links --base-path /en listing.md         Links under the English site
  cat draft.md | content-intel quality --title "Karasu'da satılık daire" --keyword karasu
  content-intel quality --detailed --pretty draft.md     Scores with breakdown and suggestions
"#)]
struct Cli {
    /// JSON engine configuration (partial documents override defaults)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = telemetry::DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print contextual links for the content as JSON
    Links {
        /// Locale base path prefixed to every link (e.g. /en)
        #[arg(long, default_value = "")]
        base_path: String,

        /// Content file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the quality report for the content as JSON (null for blank content)
    Quality {
        /// Page title
        #[arg(long, short = 't', default_value = "")]
        title: String,

        /// Target keyword (repeatable)
        #[arg(long = "keyword", short = 'k', value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// Include statistics, per-factor breakdowns and suggestions
        #[arg(long)]
        detailed: bool,

        /// Content file; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing_with_level(&cli.log_level);

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    let engine = ContextualEngine::new(config)?;

    match cli.command {
        Commands::Links { base_path, file } => {
            let content = read_content(file.as_deref())?;
            let links = engine.generate_links(&content, &base_path);
            tracing::debug!(count = links.len(), base_path = %base_path, "Generated links");
            print_json(&links, cli.pretty)
        }
        Commands::Quality {
            title,
            keywords,
            detailed,
            file,
        } => {
            let content = read_content(file.as_deref())?;
            let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
            if detailed {
                print_json(
                    &engine.assess_quality_detailed(&content, &title, &keywords),
                    cli.pretty,
                )
            } else {
                print_json(&engine.assess_quality(&content, &title, &keywords), cli.pretty)
            }
        }
    }
}

fn read_content(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
