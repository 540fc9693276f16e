use std::fs;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use log::info;
use anyhow::Result;
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;
use crate::config::Files;
use crate::initialization::Mgr;
use crate::models::Snapshot;

/// Runs one update pass, fetching this month's snapshot and replacing the local copy.
/// Returns the url of the fetched snapshot.
///
/// # Arguments
///
/// * 'mgr' - struct with configured managers
/// * 'files' - files config
/// * 'debug_run_time' - a run date and time to be used instead of Local now
pub fn run(mgr: &Mgr, files: &Files, debug_run_time: Option<DateTime<Local>>) -> Result<String, WorkerError> {
    let run_start = if let Some(run_start) = debug_run_time {
        run_start
    } else {
        Local::now()
    };

    let snapshot = mgr.wbgt.get_snapshot(run_start.date_naive())
        .map_err(|e| WorkerError::FetchError(e.to_string()))?;

    info!("Fetched {} bytes from {}", snapshot.body.len(), snapshot.url);

    let path = save_snapshot(&files.data_dir, &files.snapshot_file, &snapshot)?;

    info!("Snapshot saved to {}", path.display());

    Ok(snapshot.url)
}

/// Returns the single status line to print for a finished update, multi-line
/// error descriptions are folded into one line
///
/// # Arguments
///
/// * 'result' - the outcome of the update
pub fn status_line<E: Display>(result: &Result<String, E>) -> String {
    match result {
        Ok(url) => format!("Data updated: {}", url),
        Err(e) => {
            let description = e.to_string()
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<&str>>()
                .join(" ");
            format!("Update failed: {}", description)
        }
    }
}

/// Saves a snapshot, replacing whatever was saved before.
/// The body goes to a staging file unique to this run which is then renamed over the
/// destination, so a failed write never touches an existing snapshot. A symlinked
/// snapshot file is written through, and the permissions of an existing file are kept.
///
/// # Arguments
///
/// * 'data_dir' - directory to save to, created if missing
/// * 'snapshot_file' - file name of the snapshot within the data directory
/// * 'snapshot' - the snapshot to save
fn save_snapshot(data_dir: &str, snapshot_file: &str, snapshot: &Snapshot) -> Result<PathBuf, WorkerError> {
    fs::create_dir_all(data_dir)
        .map_err(|e| WorkerError::SaveSnapshotError(format!("error creating directory {}: {}", data_dir, e)))?;

    let target = Path::new(data_dir).join(snapshot_file);
    let destination = resolve_destination(&target)?;
    let staging_dir = destination.parent().unwrap_or_else(|| Path::new(data_dir));

    let mut staging = staging_file(staging_dir, &destination)?;

    staging.write_all(&snapshot.body)
        .map_err(|e| WorkerError::SaveSnapshotError(format!("error writing {}: {}", staging.path().display(), e)))?;

    // Dropping the staging file on error removes it
    staging.persist(&destination)
        .map_err(|e| WorkerError::SaveSnapshotError(format!("error replacing {}: {}", destination.display(), e.error)))?;

    Ok(target)
}

/// Returns the path to actually write to, following the target if it is a symlink
///
/// # Arguments
///
/// * 'target' - the configured snapshot path
fn resolve_destination(target: &Path) -> Result<PathBuf, WorkerError> {
    let is_symlink = fs::symlink_metadata(target)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);

    if !is_symlink {
        return Ok(target.to_path_buf());
    }

    let link = fs::read_link(target)
        .map_err(|e| WorkerError::SaveSnapshotError(format!("error reading link {}: {}", target.display(), e)))?;

    if link.is_relative() {
        Ok(target.parent().map(|p| p.join(&link)).unwrap_or(link))
    } else {
        Ok(link)
    }
}

/// Creates a uniquely named staging file in the given directory.
/// It gets the permissions of an existing destination, or regular new file permissions otherwise.
///
/// # Arguments
///
/// * 'dir' - directory to create the staging file in, must be on the destination's filesystem
/// * 'destination' - the file the staging file will replace
fn staging_file(dir: &Path, destination: &Path) -> Result<NamedTempFile, WorkerError> {
    let existing = fs::metadata(destination).ok().filter(|m| m.is_file());

    let mut builder = Builder::new();
    builder.prefix(".").suffix(".part");
    if existing.is_none() {
        new_file_permissions(&mut builder);
    }

    let staging = builder.tempfile_in(dir)
        .map_err(|e| WorkerError::SaveSnapshotError(format!("error creating staging file in {}: {}", dir.display(), e)))?;

    if let Some(meta) = existing {
        staging.as_file().set_permissions(meta.permissions())
            .map_err(|e| WorkerError::SaveSnapshotError(format!("error copying permissions of {}: {}", destination.display(), e)))?;
    }

    Ok(staging)
}

#[cfg(unix)]
fn new_file_permissions(builder: &mut Builder) {
    use std::os::unix::fs::PermissionsExt;

    // Masked by the process umask like any plain file creation
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn new_file_permissions(_builder: &mut Builder) {}

/// Error depicting errors that occur during an update pass
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("error while fetching snapshot: {0}")]
    FetchError(String),
    #[error("error while saving snapshot: {0}")]
    SaveSnapshotError(String),
}
