//! Teamify command-line library.
//!
//! - `config`: command-line arguments and the sample roster
//! - `format`: table rendering of resolved partitions
//! - `run`: build the registry, enumerate, print options and a random pick

mod config;
mod error;
mod format;
mod run;

pub use config::{Config, SAMPLE_FORBIDDEN, SAMPLE_PEOPLE, SAMPLE_REQUIRED, USAGE};
pub use error::{CliError, CliResult, FormatError};
pub use format::render_options;
pub use run::run;
