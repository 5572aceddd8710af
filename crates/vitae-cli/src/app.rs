//! CLI Application logic
//!
//! Contains the command-line interface implementation. Every command is a
//! plain function taking its paths as arguments and writing its status lines
//! to the given writer, so the whole flow can be driven from tests.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use vitae_model::load_profile;
use vitae_pdf::RenderOptions;
use vitae_validate::{ValidationEngine, ValidationReport};

use crate::settings::Settings;
use crate::summary::write_summary;

/// Output format for validation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "vitae")]
#[command(author, version, about = "Resume summaries and PDFs from a JSON profile", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./vitae.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a profile, print its summary and write the PDF resume
    Build {
        /// Input JSON profile
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Font file(s) for the PDF
        #[arg(long)]
        font: Vec<PathBuf>,

        /// Also write the generated Typst markup to this file
        #[arg(long)]
        typst: Option<PathBuf>,
    },

    /// Print the terminal summary of a profile
    Show {
        /// Input JSON profile
        input: Option<PathBuf>,
    },

    /// Check a profile for missing or malformed fields
    Check {
        /// Input JSON profile
        input: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Result of the build command
#[derive(Debug)]
pub enum BuildOutcome {
    /// The PDF was written to this path
    Written(PathBuf),
    /// The profile was missing, unreadable or empty
    NoData,
    /// The profile failed validation
    Invalid(ValidationReport),
}

impl BuildOutcome {
    /// True when a PDF was produced
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Written(_))
    }
}

/// Inputs of the build command
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub fonts: Vec<PathBuf>,
    pub typst: Option<PathBuf>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let success = match cli.command {
        Commands::Build {
            input,
            output,
            font,
            typst,
        } => {
            let mut fonts = settings.pdf.fonts;
            fonts.extend(font);
            let request = BuildRequest {
                input: input.unwrap_or(settings.input.path),
                output_dir: output.unwrap_or(settings.output.dir),
                fonts,
                typst,
            };
            build_command(&request, &ValidationEngine::with_defaults(), &mut out)?.is_success()
        }
        Commands::Show { input } => {
            show_command(&input.unwrap_or(settings.input.path), &mut out)?
        }
        Commands::Check { input, format } => check_command(
            &input.unwrap_or(settings.input.path),
            format,
            &ValidationEngine::with_defaults(),
            &mut out,
        )?,
    };

    if !success {
        out.flush()?;
        std::process::exit(1);
    }

    Ok(())
}

/// Execute the build command: load, validate, summarize, write the PDF
pub fn build_command<W: Write>(
    request: &BuildRequest,
    engine: &ValidationEngine,
    out: &mut W,
) -> Result<BuildOutcome> {
    let profile = load_profile(&request.input);
    if profile.is_empty() {
        writeln!(out, "Error: No user data found.")?;
        return Ok(BuildOutcome::NoData);
    }

    let summary_profile = profile.clone();
    let resume = match engine.accept(profile) {
        Ok(resume) => resume,
        Err(report) => {
            writeln!(out, "Data validation errors:")?;
            for violation in report.violations() {
                writeln!(out, "- {}", violation)?;
            }
            return Ok(BuildOutcome::Invalid(report));
        }
    };

    write_summary(&summary_profile, out)?;

    if let Some(typst_path) = &request.typst {
        std::fs::write(typst_path, vitae_pdf::typst_markup(&resume))
            .with_context(|| format!("Failed to write Typst markup: {}", typst_path.display()))?;
        info!(path = %typst_path.display(), "typst markup written");
    }

    let options = RenderOptions {
        fonts: request.fonts.clone(),
    };
    let path = vitae_pdf::write_resume(&resume, &request.output_dir, &options)
        .with_context(|| format!("Failed to write resume to {}", request.output_dir.display()))?;
    writeln!(out, "Resume saved to: {}", path.display())?;

    Ok(BuildOutcome::Written(path))
}

/// Execute the show command
///
/// Returns `false` when there was no data to show.
pub fn show_command<W: Write>(input: &Path, out: &mut W) -> Result<bool> {
    let profile = load_profile(input);
    write_summary(&profile, out).context("Failed to write summary")?;
    Ok(!profile.is_empty())
}

/// Execute the check command
///
/// Returns `true` when the profile is valid.
pub fn check_command<W: Write>(
    input: &Path,
    format: OutputFormat,
    engine: &ValidationEngine,
    out: &mut W,
) -> Result<bool> {
    let profile = load_profile(input);
    if profile.is_empty() {
        writeln!(out, "Error: No user data found.")?;
        return Ok(false);
    }

    let report = engine.validate(&profile);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize violations to JSON")?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            if report.is_valid() {
                writeln!(out, "✓ No issues found in {}", input.display())?;
            } else {
                for violation in report.violations() {
                    writeln!(out, "[{}] {}", violation.code, violation.message)?;
                    if let Some(help) = &violation.help {
                        writeln!(out, "  help: {}", help)?;
                    }
                    for note in &violation.notes {
                        writeln!(out, "  note: {}", note)?;
                    }
                }
                writeln!(out)?;
                writeln!(out, "Found {} error(s)", report.len())?;
            }
        }
    }

    Ok(report.is_valid())
}
