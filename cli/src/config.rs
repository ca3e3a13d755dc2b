//! Command-line configuration.

use teamify_partition::Strategy;
use teamify_registry::Registry;

use crate::error::{CliError, CliResult};

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: teamify [OPTIONS] [NAME...]

Split people into teams that keep required pairs together and forbidden
pairs apart. Without names, a sample roster is used.

Options:
  -n, --teams <N>    Number of teams (default: 2)
      --pair <A,B>   A and B must be on the same team (repeatable)
      --avoid <A,B>  A and B must be on different teams (repeatable)
      --seed <SEED>  Seed for the random pick
      --binary       Always split in two, whatever the team count
      --max-candidates <N>
                     Refuse to run when more candidates than this would be
                     generated (default: 1000000). Candidates grow
                     factorially with the team count.
  -v, --verbose      Debug logging on stderr
  -h, --help         Show this help";

/// Candidate limit used when `--max-candidates` is not given.
pub const DEFAULT_MAX_CANDIDATES: u64 = 1_000_000;

/// Roster used when no names are given.
pub const SAMPLE_PEOPLE: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
];

/// Required pairs of the sample roster.
pub const SAMPLE_REQUIRED: &[(&str, &str)] = &[("Carol", "Dave"), ("Erin", "Frank")];

/// Forbidden pairs of the sample roster.
pub const SAMPLE_FORBIDDEN: &[(&str, &str)] = &[("Grace", "Carol"), ("Bob", "Erin")];

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Roster names; empty means the sample roster.
    pub people: Vec<String>,
    /// Required pairs.
    pub required: Vec<(String, String)>,
    /// Forbidden pairs.
    pub forbidden: Vec<(String, String)>,
    /// Number of teams.
    pub teams: usize,
    /// Seed for the random pick; entropy when absent.
    pub seed: Option<u64>,
    /// Split strategy.
    pub strategy: Strategy,
    /// Largest candidate list the run may build.
    pub max_candidates: u64,
    /// Debug logging.
    pub verbose: bool,
    /// Print usage and exit.
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            required: Vec::new(),
            forbidden: Vec::new(),
            teams: 2,
            seed: None,
            strategy: Strategy::Balanced,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            verbose: false,
            help: false,
        }
    }
}

impl Config {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.help = true,
                "-v" | "--verbose" => config.verbose = true,
                "--binary" => config.strategy = Strategy::Binary,
                "-n" | "--teams" => {
                    let value = required_value(&arg, args.next())?;
                    config.teams = value.parse().map_err(|_| {
                        CliError::usage(format!("{} expects a number, got '{}'", arg, value))
                    })?;
                }
                "--seed" => {
                    let value = required_value(&arg, args.next())?;
                    config.seed = Some(value.parse().map_err(|_| {
                        CliError::usage(format!("--seed expects a number, got '{}'", value))
                    })?);
                }
                "--max-candidates" => {
                    let value = required_value(&arg, args.next())?;
                    config.max_candidates = value.parse().map_err(|_| {
                        CliError::usage(format!("{} expects a number, got '{}'", arg, value))
                    })?;
                }
                "--pair" => {
                    let value = required_value(&arg, args.next())?;
                    config.required.push(parse_pair(&arg, &value)?);
                }
                "--avoid" => {
                    let value = required_value(&arg, args.next())?;
                    config.forbidden.push(parse_pair(&arg, &value)?);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CliError::usage(format!("Unknown option: {}", flag)));
                }
                _ => config.people.push(arg),
            }
        }

        Ok(config)
    }

    /// Check whether the sample roster will be used.
    pub fn uses_sample(&self) -> bool {
        self.people.is_empty()
    }

    /// Build and freeze the registry described by this configuration.
    pub fn build_registry(&self) -> CliResult<Registry> {
        let mut registry = if self.uses_sample() {
            Registry::with_people(SAMPLE_PEOPLE.iter().copied())
        } else {
            Registry::with_people(self.people.iter().cloned())
        };

        if self.uses_sample() {
            for (a, b) in SAMPLE_REQUIRED {
                registry.add_required_pair(a, b)?;
            }
            for (a, b) in SAMPLE_FORBIDDEN {
                registry.add_forbidden_pair(a, b)?;
            }
        }

        for (a, b) in &self.required {
            registry.add_required_pair(a, b)?;
        }
        for (a, b) in &self.forbidden {
            registry.add_forbidden_pair(a, b)?;
        }

        registry.commit()?;
        Ok(registry)
    }
}

fn required_value(flag: &str, value: Option<String>) -> CliResult<String> {
    value.ok_or_else(|| CliError::usage(format!("{} expects a value", flag)))
}

fn parse_pair(flag: &str, value: &str) -> CliResult<(String, String)> {
    let mut parts = value.split(',').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => {
            Ok((a.to_string(), b.to_string()))
        }
        _ => Err(CliError::usage(format!(
            "{} expects two names separated by a comma, got '{}'",
            flag, value
        ))),
    }
}
