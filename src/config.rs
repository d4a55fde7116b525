//! Command-line configuration.

use crate::algorithm::{Algorithm, UnknownAlgorithm};
use clap::{App, Arg};
use std::error::Error;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "resultsfile.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Instance file; stdin when absent.
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub algorithms: Vec<Algorithm>,
    pub jobs: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    Clap(clap::Error),
    Algorithm(UnknownAlgorithm),
    Jobs(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ConfigError::Clap(e) => write!(f, "{}", e),
            ConfigError::Algorithm(e) => write!(f, "{}", e),
            ConfigError::Jobs(s) => write!(f, "invalid job count '{}'", s),
        }
    }
}

impl Error for ConfigError {}

impl From<clap::Error> for ConfigError {
    fn from(e: clap::Error) -> Self {
        Self::Clap(e)
    }
}

impl From<UnknownAlgorithm> for ConfigError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::Algorithm(e)
    }
}

fn app() -> App<'static, 'static> {
    App::new("cnfsat")
        .about("Decides satisfiability of every instance in a multi-instance CNF file")
        .arg(Arg::with_name("INPUT").help("input file (multi-instance CNF)").index(1))
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .help("CSV file to write results to"),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .default_value("all")
                .help("bruteforce, bestcase, backtracking or all (repeatable)"),
        )
        .arg(
            Arg::with_name("jobs")
                .short("j")
                .long("jobs")
                .takes_value(true)
                .default_value("1")
                .help("number of instances to solve in parallel"),
        )
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;

        let mut algorithms = vec![];
        for name in matches.values_of("algorithm").into_iter().flatten() {
            let selected = if name.eq_ignore_ascii_case("all") {
                Algorithm::ALL.to_vec()
            } else {
                vec![name.parse::<Algorithm>()?]
            };
            for algorithm in selected {
                if !algorithms.contains(&algorithm) {
                    algorithms.push(algorithm);
                }
            }
        }

        let jobs = matches.value_of("jobs").unwrap_or("1");
        let jobs = match jobs.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ConfigError::Jobs(jobs.to_string())),
        };

        Ok(Config {
            input: matches.value_of_os("INPUT").map(PathBuf::from),
            output: matches
                .value_of_os("output")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            algorithms,
            jobs,
        })
    }
}
