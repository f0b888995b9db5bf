use std::fs::{self, OpenOptions};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    debug!("Creating directory: {}", dest_path.display());
    fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, replacing whatever was there.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    debug!("Writing file: {}", dest_path.display());
    fs::write(dest_path, content).map_err(Error::IoError)
}

/// Creates `dest_path` if it is missing. Existing content is left untouched.
pub fn touch_file<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    debug!("Touching file: {}", dest_path.display());
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(dest_path)
        .map(|_| ())
        .map_err(Error::IoError)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}
