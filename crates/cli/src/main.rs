//! guidegen — generate Docusaurus guide pages from a matched guide set.
//!
//! - **generate** (default): render every guide in the guide set, write the
//!   pages under the content directory and store the rendered Markdown back
//!   into the guide set.
//! - **preview**: print one rendered guide to stdout without writing files.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use guidegen_core::{GlobalConfig, debug_helpers_enabled};
use guidegen_docusaurus::{generate_guides, preview_guide};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guidegen",
    version,
    about = "Generate Markdown guide pages from a matched guide set"
)]
struct Cli {
    /// JSON configuration file (root_dir, temp_write_dir, attached_nodes_file_name, content_write_dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root directory
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Directory holding the guide set, relative to the root
    #[arg(long, global = true)]
    temp_dir: Option<PathBuf>,

    /// File name of the guide set inside the temp directory
    #[arg(long, global = true)]
    guide_set: Option<String>,

    /// Output directory for generated pages, relative to the root
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Wrap every section in a SourceFile debug marker. Only "true"
    /// (any case) enables it.
    #[arg(
        long,
        global = true,
        env = "DEBUG_HELPERS",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_toggle
    )]
    debug_helpers: Option<bool>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every guide and rewrite the guide set (default)
    Generate,
    /// Print one rendered guide to stdout
    Preview {
        /// Guide id
        id: String,
    },
}

fn parse_toggle(value: &str) -> Result<bool, String> {
    Ok(debug_helpers_enabled(Some(value)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    log::debug!("resolved configuration: {config:?}");

    match &cli.command {
        None | Some(Command::Generate) => generate(&config),
        Some(Command::Preview { id }) => {
            let page = preview_guide(&config, id)
                .with_context(|| format!("failed to preview guide {id}"))?;
            print!("{page}");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Config file first, then command-line and environment overrides.
fn resolve_config(cli: &Cli) -> Result<GlobalConfig> {
    let mut config = match &cli.config {
        Some(path) => GlobalConfig::from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => GlobalConfig::default(),
    };

    if let Some(root) = &cli.root {
        config.root_dir = root.clone();
    }
    if let Some(temp_dir) = &cli.temp_dir {
        config.temp_write_dir = temp_dir.clone();
    }
    if let Some(guide_set) = &cli.guide_set {
        config.attached_nodes_file_name = guide_set.clone();
    }
    if let Some(content_dir) = &cli.content_dir {
        config.content_write_dir = content_dir.clone();
    }
    if let Some(debug_helpers) = cli.debug_helpers {
        config.debug_helpers = debug_helpers;
    }
    Ok(config)
}

fn generate(config: &GlobalConfig) -> Result<()> {
    let report = generate_guides(config).with_context(|| {
        format!(
            "failed to generate guides from {}",
            config.guide_set_path().display()
        )
    })?;

    println!(
        "generated {} of {} guides into {}",
        report.written.len(),
        report.total(),
        config.content_dir().display()
    );
    for (id, err) in &report.failed {
        eprintln!("warning: {id}: {err}");
    }
    Ok(())
}
