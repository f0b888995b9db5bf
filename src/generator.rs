//! Directory and file generation for the scaffolded project.
//! Every function takes the project root explicitly and returns the
//! paths it touched, in the order it touched them.

use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE, DOCKER_DIR, DOCKER_FILES, ENTRY_POINT_FILE, LOGGER_FILE, PACKAGE_MARKER,
    TESTS_DIR,
};
use crate::error::Result;
use crate::ioutils::{create_dir_all, touch_file, write_file};
use crate::options::Options;
use crate::templates::{CONFIG_TEMPLATE, ENTRY_POINT_TEMPLATE, LOGGER_TEMPLATE};

/// Creates the package directory and, if requested, the tests directory.
/// Both are created only when missing.
pub fn generate_directories(root: &Path, options: &Options) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    let package_dir = root.join(&options.name);
    create_dir_all(&package_dir)?;
    created.push(package_dir);

    if options.tests {
        let tests_dir = root.join(TESTS_DIR);
        create_dir_all(&tests_dir)?;
        created.push(tests_dir);
    }

    Ok(created)
}

/// Writes the package marker and the optional settings and logger modules.
/// Existing files with the same names are overwritten.
pub fn generate_files(root: &Path, options: &Options) -> Result<Vec<PathBuf>> {
    let package_dir = root.join(&options.name);
    let mut written = Vec::new();

    let marker = package_dir.join(PACKAGE_MARKER);
    write_file("", &marker)?;
    written.push(marker);

    if options.config {
        let config = package_dir.join(CONFIG_FILE);
        write_file(CONFIG_TEMPLATE, &config)?;
        written.push(config);
    }

    if options.logger {
        let logger = package_dir.join(LOGGER_FILE);
        write_file(LOGGER_TEMPLATE, &logger)?;
        written.push(logger);
    }

    Ok(written)
}

/// Creates the docker directory with an empty Dockerfile and compose files.
/// Files that already exist keep their content.
pub fn generate_docker_structure(root: &Path) -> Result<Vec<PathBuf>> {
    let docker_dir = root.join(DOCKER_DIR);
    create_dir_all(&docker_dir)?;

    let mut touched = vec![docker_dir.clone()];
    for file in DOCKER_FILES {
        let path = docker_dir.join(file);
        touch_file(&path)?;
        touched.push(path);
    }

    Ok(touched)
}

/// Replaces the project's entry point with the minimal template.
pub fn overwrite_entry_point(root: &Path) -> Result<PathBuf> {
    let entry_point = root.join(ENTRY_POINT_FILE);
    write_file(ENTRY_POINT_TEMPLATE, &entry_point)?;
    Ok(entry_point)
}
