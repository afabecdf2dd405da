use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::de::DeserializeOwned;

use crate::EPOCH;
use crate::io::ext_repr::ExtListing;

pub mod cli;
pub mod export;
pub mod ext_repr;
pub mod import;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn read_catalogue(path: &Path) -> Result<Vec<ExtListing>> {
    let catalogue: Vec<ExtListing> = read_json(path)?;
    info!(
        "[IO] catalogue with {} listings read from {}",
        catalogue.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Reads the request body from a file, or from stdin if no file is given.
/// An empty body counts as absent.
pub fn read_body(path: Option<&Path>) -> Result<Option<String>> {
    let mut body = String::new();
    match path {
        Some(path) => File::open(path)
            .with_context(|| format!("could not open request file: {}", path.display()))?
            .read_to_string(&mut body)?,
        None => std::io::stdin()
            .read_to_string(&mut body)
            .context("could not read request from stdin")?,
    };
    match body.trim().is_empty() {
        true => Ok(None),
        false => Ok(Some(body)),
    }
}

pub fn write_body(body: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{body}")?;
            writer.flush()?;
            info!("[IO] response written to {}", path.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        // Logs go to stderr, stdout carries the response body
        .chain(std::io::stderr())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
