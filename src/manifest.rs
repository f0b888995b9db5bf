//! Rewrites the poetry manifest of the scaffolded project.
//!
//! The manifest is read whole, transformed line by line and written back
//! whole. Nothing locks the file between the read and the write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use regex::{NoExpand, Regex};

use crate::constants::{DEV_DEPENDENCIES_HEADER, MANIFEST_FILE, SETTINGS_DEPENDENCY};
use crate::error::{Error, Result};
use crate::ioutils::{read_file, write_file};
use crate::options::Options;
use crate::prompt::{ask_description, Prompter};

/// Matches a double-quoted value such as `"my-project"`.
const QUOTED_VALUE: &str = r#""[\w\s-]+""#;

/// Applies project metadata to manifest text.
pub struct ManifestPatcher {
    quoted: Regex,
}

impl ManifestPatcher {
    pub fn new() -> Result<Self> {
        Ok(Self { quoted: Regex::new(QUOTED_VALUE)? })
    }

    /// Returns `manifest` with `name` and `description` filled in and, if
    /// `declare_settings` is set, the settings dependency declared in front of
    /// every dev-dependencies header.
    ///
    /// Every quoted value on a `name = ` or `description = ` line is
    /// replaced, not only the first one. All other lines are kept verbatim,
    /// line terminators included.
    pub fn patch(
        &self,
        manifest: &str,
        name: &str,
        description: &str,
        declare_settings: bool,
    ) -> String {
        let name = format!("\"{name}\"");
        let description = format!("\"{description}\"");

        let lines: Vec<String> = manifest
            .split_inclusive('\n')
            .map(|line| self.patch_line(line, &name, &description))
            .collect();

        if !declare_settings || declares_settings(&lines) {
            return lines.concat();
        }

        let headers: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(DEV_DEPENDENCIES_HEADER))
            .map(|(index, _)| index)
            .collect();
        debug!("Dev-dependencies headers at lines {headers:?}");

        let mut output = Vec::with_capacity(lines.len() + 2 * headers.len());
        for (index, line) in lines.into_iter().enumerate() {
            if headers.contains(&index) {
                insert_settings_dependency(&mut output);
            }
            output.push(line);
        }
        output.concat()
    }

    fn patch_line(&self, line: &str, name: &str, description: &str) -> String {
        let mut line = line.to_string();
        if line.contains("name = ") {
            line = self.quoted.replace_all(&line, NoExpand(name)).into_owned();
        }
        if line.contains("description = ") {
            line = self.quoted.replace_all(&line, NoExpand(description)).into_owned();
        }
        line
    }
}

fn declares_settings(lines: &[String]) -> bool {
    let dependency = SETTINGS_DEPENDENCY.split('=').next().unwrap_or_default();
    lines.iter().any(|line| line.trim_start().starts_with(dependency))
}

/// The blank separator poetry leaves before a section is reused for the
/// dependency. Any other preceding line is kept.
fn insert_settings_dependency(output: &mut Vec<String>) {
    match output.last_mut() {
        Some(previous) if previous.trim().is_empty() => {
            *previous = SETTINGS_DEPENDENCY.to_string();
        }
        _ => output.push(SETTINGS_DEPENDENCY.to_string()),
    }
    output.push("\n".to_string());
}

/// Fills in the project's manifest in `root`, asking `prompter` for the
/// description.
///
/// # Errors
/// * `Error::ManifestNotFound` if `root` holds no manifest
/// * `Error::PromptError` if the description cannot be read
/// * `Error::IoError` if the manifest cannot be read or written
pub fn configure_manifest(
    root: &Path,
    options: &Options,
    prompter: &dyn Prompter,
) -> Result<PathBuf> {
    let manifest_path = root.join(MANIFEST_FILE);
    let manifest = read_file(&manifest_path).map_err(|e| match e {
        Error::IoError(io) if io.kind() == ErrorKind::NotFound => Error::ManifestNotFound {
            path: manifest_path.display().to_string(),
        },
        other => other,
    })?;

    let description = ask_description(prompter)?;
    info!("Configuring {} for '{}'", manifest_path.display(), options.name);

    let patched =
        ManifestPatcher::new()?.patch(&manifest, &options.name, &description, options.config);
    write_file(&patched, &manifest_path)?;

    Ok(manifest_path)
}
