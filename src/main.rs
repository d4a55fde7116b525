use cnfsat::batch;
use cnfsat::config::{Config, ConfigError};
use cnfsat::formula::instances::{parse, InstanceParseError};
use cnfsat::report;
use cnfsat::Instance;
use log::info;
use std::error::Error;
use std::fs::File;
use std::path::Path;

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(ConfigError::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let instances = match &config.input {
        Some(path) => parse_from_file(path)?,
        None => parse(std::io::stdin())?,
    };
    info!("read {} instances", instances.len());

    let records = batch::run(&instances, &config.algorithms, config.jobs);
    report::write_to_path(&config.output, &records)?;
    info!("wrote {} results to {}", records.len(), config.output.display());
    Ok(())
}

fn parse_from_file(path: &Path) -> Result<Vec<Instance>, InstanceParseError> {
    let file = File::open(path)?;
    parse(file)
}
