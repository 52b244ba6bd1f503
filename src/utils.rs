use log::debug;
use std::{env, path::PathBuf};

/// Locates a puzzle file: the path as given, then under `puzzles/` next to
/// the manifest, then under `puzzles/` next to the executable.
pub fn puzzle_path(name: &str) -> crate::error::Result<PathBuf> {
    let direct = PathBuf::from(name);
    if direct.exists() {
        return Ok(direct);
    }

    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let p = PathBuf::from(manifest_dir).join("puzzles").join(name);
        if p.exists() {
            debug!("Found {name} at: {}", p.to_string_lossy());
            return Ok(p);
        }
    }

    if let Ok(mut exe) = env::current_exe() {
        exe.pop();
        let p = exe.join("puzzles").join(name);
        if p.exists() {
            debug!("Found {name} at: {}", p.to_string_lossy());
            return Ok(p);
        }
    }

    Err(crate::error::Error::FileNotFound(name.to_owned()))
}
