//! Delete the persisted snapshots.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::storage::{JsonHistoryRepository, JsonProgressRepository};

pub fn run(data_dir: &Path, yes: bool) -> anyhow::Result<()> {
    if !yes {
        println!("This deletes all progress and history. Re-run with --yes to confirm.");
        return Ok(());
    }

    for path in [
        JsonProgressRepository::new(data_dir).path().to_path_buf(),
        JsonHistoryRepository::new(data_dir).path().to_path_buf(),
    ] {
        match fs::remove_file(&path) {
            Ok(()) => println!("Removed {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    println!("Progress reset.");
    Ok(())
}
