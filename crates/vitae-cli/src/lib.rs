//! vitae CLI - Command-line interface library
//!
//! This library provides the CLI functionality for vitae:
//! - Build: validate a profile, print its summary and write the PDF resume
//! - Show: print the terminal summary
//! - Check: validate a profile and list every problem
//!
//! # Library Usage
//!
//! ```ignore
//! use vitae_cli::{build_command, BuildRequest};
//! use vitae_validate::ValidationEngine;
//!
//! let request = BuildRequest {
//!     input: "data/user_data.json".into(),
//!     output_dir: "output".into(),
//!     fonts: Vec::new(),
//!     typst: None,
//! };
//! let outcome = build_command(&request, &ValidationEngine::with_defaults(), &mut std::io::stdout())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Full run: summary plus output/Jane_Doe_resume.pdf
//! vitae build data/user_data.json --output output/
//!
//! # Validation only, machine readable
//! vitae check data/user_data.json --format json
//! ```

pub mod app;
pub mod settings;
pub mod summary;

// Re-export main entry point and types
pub use app::{build_command, check_command, show_command};
pub use app::{run_cli, BuildOutcome, BuildRequest, OutputFormat};
pub use settings::Settings;
pub use summary::{print_summary, write_summary};
