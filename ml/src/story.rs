//! Saving completed stories

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::error::MadlibError;

/// File name for a story saved at `at`, e.g. `completed_madlib_20240131_235959.txt`
pub fn output_file_name(at: &DateTime<Local>) -> String {
    format!("completed_madlib_{}.txt", at.format("%Y%m%d_%H%M%S"))
}

/// Write `story` verbatim into `dir`, creating the directory if needed
///
/// A story saved within the same second as an earlier one replaces it.
pub fn save_story(dir: &Path, story: &str, at: &DateTime<Local>) -> Result<PathBuf, MadlibError> {
    debug!(dir = %dir.display(), "save_story: called");
    fs::create_dir_all(dir)?;

    let path = dir.join(output_file_name(at));
    if path.exists() {
        warn!(path = %path.display(), "Overwriting story saved in the same second");
    }

    fs::write(&path, story)?;
    info!(path = %path.display(), bytes = story.len(), "Saved story");
    Ok(path)
}
