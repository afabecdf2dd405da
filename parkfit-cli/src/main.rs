use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use log::{info, warn};
use parkfit_cli::config::ParkFitConfig;
use parkfit_cli::handler::handle_request;
use parkfit_cli::io;
use parkfit_cli::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ParkFitConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed ParkFitConfig: {config:?}");

    let catalogue = io::read_catalogue(&args.catalogue_file)?;
    let body = io::read_body(args.request_file.as_deref())?;

    let response = handle_request(body.as_deref(), &catalogue, &config);
    io::write_body(&response.body, args.output_file.as_deref())?;

    if !response.is_ok() {
        bail!("request failed with status {}", response.status_code);
    }
    Ok(())
}
