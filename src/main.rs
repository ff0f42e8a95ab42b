//! CLI entry point for hotkeyc
//!
//! Compiles hotkey configs for a chosen target daemon, checks them for
//! problems, and lists what a config contains.

use anyhow::Context;
use atomic_write_file::AtomicWriteFile;
use clap::{Parser, Subcommand};
use colored::*;
use hotkeyc::format::targets;
use hotkeyc::{parse, Formatter, Hotkey, KeycodeDictionary, Validator};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hotkeyc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a hotkey config for a target system
    Compile {
        /// Path to the hotkey config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Inline source text to compile instead of a file
        #[arg(short, long)]
        string: Option<String>,

        /// Target system (see `hotkeyc targets`)
        #[arg(short, long, default_value = "sxhkd")]
        target: String,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and validate a config without generating output
    Check {
        /// Path to the hotkey config file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// List the hotkeys found in a config
    List {
        /// Path to the hotkey config file
        #[arg(short, long)]
        config: PathBuf,

        /// Only show hotkeys whose binding matches this pattern
        #[arg(short, long)]
        filter: Option<String>,

        /// Emit the parsed hotkeys as JSON
        #[arg(long)]
        json: bool,
    },

    /// List built-in target systems
    Targets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compile {
            config,
            string,
            target,
            output,
        } => compile(config.as_deref(), string.as_deref(), &target, output.as_deref()),
        Commands::Check { config } => check(&config),
        Commands::List {
            config,
            filter,
            json,
        } => list(&config, filter.as_deref(), json),
        Commands::Targets => {
            for name in targets::builtin_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Compile a config and print or write the generated lines.
fn compile(
    config: Option<&Path>,
    string: Option<&str>,
    target: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let source = read_source(config, string)?;
    let hotkeys = pipeline(&source)?;

    let host = targets::builtin(target).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown target '{}' (available: {})",
            target,
            targets::builtin_names().join(", ")
        )
    })?;
    let mut formatter = Formatter::new(target, host);
    let lines = formatter
        .format(&hotkeys)
        .context("failed to format hotkeys")?;

    let content = lines.join("\n");
    match output {
        Some(path) => {
            write_output(path, &content)?;
            println!(
                "{} Wrote {} lines to {}",
                "✓".green(),
                lines.len(),
                path.display()
            );
        }
        None => println!("{content}"),
    }

    Ok(())
}

/// Check a config for parse and validation problems.
fn check(config: &Path) -> anyhow::Result<()> {
    let source = read_source(Some(config), None)?;

    println!("{} Parsing config: {}", "→".cyan(), config.display());

    match pipeline(&source) {
        Ok(hotkeys) => {
            println!(
                "{} {} hotkey{} parsed, all key names valid",
                "✓".green().bold(),
                hotkeys.len(),
                if hotkeys.len() == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// List hotkeys, optionally filtered by a binding regex or as JSON.
fn list(config: &Path, filter: Option<&str>, json: bool) -> anyhow::Result<()> {
    let source = read_source(Some(config), None)?;
    let hotkeys = pipeline(&source)?;

    let pattern = filter
        .map(Regex::new)
        .transpose()
        .context("invalid filter pattern")?;
    let selected: Vec<&Hotkey> = hotkeys
        .iter()
        .filter(|hotkey| match &pattern {
            Some(re) => re.is_match(&hotkey.binding.to_string()),
            None => true,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!("{}", format!("Hotkeys from: {}\n", config.display()).bold());

    for hotkey in &selected {
        let binding = hotkey.binding.to_string().cyan().bold();
        for (system, command) in &hotkey.commands {
            println!("{} → {} {}", binding, system.as_str().magenta(), command);
        }
    }

    println!("\n{} Total: {} hotkeys", "✓".green(), selected.len());

    Ok(())
}

/// Parse and validate, with error context for the CLI.
fn pipeline(source: &str) -> anyhow::Result<Vec<Hotkey>> {
    let mut hotkeys = parse(source).context("failed to parse hotkeys")?;
    Validator::new(KeycodeDictionary::new())
        .validate(&mut hotkeys)
        .context("failed to validate key names")?;
    Ok(hotkeys)
}

/// Reads the source text from an inline string or a tilde-expanded path.
fn read_source(config: Option<&Path>, string: Option<&str>) -> anyhow::Result<String> {
    if let Some(inline) = string {
        return Ok(inline.to_string());
    }

    let config = config.ok_or_else(|| anyhow::anyhow!("either --config or --string is required"))?;
    let expanded = shellexpand::tilde(
        config
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = Path::new(expanded.as_ref());

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Writes the generated config atomically, so a crash mid-write never
/// leaves the daemon with a half-written file.
fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    let mut file = AtomicWriteFile::options()
        .open(path)
        .with_context(|| format!("failed to open {} for atomic write", path.display()))?;
    file.write_all(content.as_bytes())
        .context("failed to write content")?;
    if !content.is_empty() {
        file.write_all(b"\n").context("failed to write content")?;
    }
    file.commit().context("failed to commit atomic write")?;
    Ok(())
}
