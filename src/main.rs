use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use markdown_builder::{Diagnostic, LineEnding, MarkdownBuilder, Severity};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

mod config;
mod render;
mod script;

#[derive(Parser)]
#[command(name = "mdb", version, about = "Render markdown documents from operation scripts")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log progress (overrides RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    /// Config file (default: ./mdb.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LineEndingArg {
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a script to markdown
    Render {
        /// Path to the .json, .yaml or .yml script
        script: PathBuf,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Line terminator (overrides the config file)
        #[arg(long, value_enum)]
        line_ending: Option<LineEndingArg>,

        /// Re-render whenever the script changes
        #[arg(long)]
        watch: bool,
    },

    /// Check script(s) for rejected tables and structural problems
    Validate {
        /// Script files or directories to scan
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise defer to RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let mut config = config::load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Render {
            script,
            out,
            line_ending,
            watch,
        } => {
            if let Some(line_ending) = line_ending {
                config.line_ending = line_ending.into();
            }
            if watch {
                if let Err(e) = render::handle_render(&script, out.as_deref(), &config, cli.quiet) {
                    eprintln!("{} {:#}", "Render error:".red().bold(), e);
                }
                render::watch_and_render(&script, out.as_deref(), &config, cli.quiet)?;
            } else {
                render::handle_render(&script, out.as_deref(), &config, cli.quiet)?;
            }
        }
        Commands::Validate { paths } => {
            handle_validate(&paths, &config, cli.quiet)?;
        }
    }

    Ok(())
}

/// Print one diagnostic as `<location>: <severity>: [code] message`.
pub(crate) fn print_diagnostic(location: &str, diag: &Diagnostic) {
    let severity_str = match diag.severity {
        Severity::Error => format!("{}", "error".red().bold()),
        Severity::Warning => format!("{}", "warning".yellow().bold()),
        Severity::Info => format!("{}", "info".cyan().bold()),
    };

    let code_str = match &diag.code {
        Some(c) => format!("[{}] ", c),
        None => String::new(),
    };

    eprintln!("{location}: {severity_str}: {code_str}{}", diag.message);
}

/// Expand directories into the scripts they contain.
fn collect_scripts(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut scripts = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() && script::is_script(entry.path()) {
                    scripts.push(entry.into_path());
                }
            }
        } else {
            scripts.push(path.clone());
        }
    }
    scripts
}

fn validate_script(path: &Path, config: &config::MdbConfig) -> Result<Vec<Diagnostic>> {
    let parsed = script::load_script(path)?;
    let mut md = MarkdownBuilder::with_config(config.render_config());
    parsed.apply(&mut md, config.table_options());

    let mut diagnostics: Vec<Diagnostic> = md
        .validation_errors()
        .iter()
        .rev()
        .map(Diagnostic::from)
        .collect();
    diagnostics.extend(md.document().validate());
    Ok(diagnostics)
}

fn handle_validate(paths: &[PathBuf], config: &config::MdbConfig, quiet: bool) -> Result<()> {
    let scripts = collect_scripts(paths);
    if scripts.is_empty() {
        anyhow::bail!("No scripts found");
    }

    let mut has_errors = false;

    for file in &scripts {
        let label = file.display().to_string();
        match validate_script(file, config) {
            Ok(diagnostics) if diagnostics.is_empty() => {
                if !quiet {
                    println!("{}: {}", label, "OK".green());
                }
            }
            Ok(diagnostics) => {
                for diag in &diagnostics {
                    if diag.severity == Severity::Error {
                        has_errors = true;
                    }
                    print_diagnostic(&label, diag);
                }
            }
            Err(e) => {
                has_errors = true;
                eprintln!("{}: {}: {:#}", label, "error".red().bold(), e);
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
