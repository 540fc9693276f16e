use std::env;
use log::{error, info};
use crate::errors::UpdateError;
use crate::initialization::init;
use crate::worker::{run, status_line};

mod config;
mod errors;
mod initialization;
mod logging;
mod manager_wbgt;
pub mod models;
mod worker;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Every failure ends up in the status line, the exit status stays success
    let result = update(&args);
    match &result {
        Ok(url) => info!("Snapshot updated from {}", url),
        Err(e) => error!("Run failed: {}", e),
    }

    println!("{}", status_line(&result));
}

/// Loads config, sets up the manager and runs one update pass.
/// Returns the url of the fetched snapshot.
///
/// # Arguments
///
/// * 'args' - program arguments
fn update(args: &[String]) -> Result<String, UpdateError> {
    let (config, mgr) = init(args)?;
    let url = run(&mgr, &config.files, None)?;

    Ok(url)
}
