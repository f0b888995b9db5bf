//! Core scaffolding orchestration.
//! Runs every generation step in order against a project root.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::generator::{
    generate_directories, generate_docker_structure, generate_files, overwrite_entry_point,
};
use crate::manifest::configure_manifest;
use crate::options::Options;
use crate::prompt::Prompter;

/// What a step did to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Directory ensured to exist
    Create,
    /// File written with new content
    Write,
    /// File ensured to exist, content untouched
    Touch,
    /// Manifest rewritten in place
    Patch,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Create => "created",
            Action::Write => "written",
            Action::Touch => "touched",
            Action::Patch => "patched",
        };
        write!(f, "{action}")
    }
}

/// Paths affected by a run, in the order they were affected.
#[derive(Debug, Default)]
pub struct Report {
    pub entries: Vec<(Action, PathBuf)>,
}

impl Report {
    fn record<I: IntoIterator<Item = PathBuf>>(&mut self, action: Action, paths: I) {
        self.entries.extend(paths.into_iter().map(|path| (action, path)));
    }

    /// Paths recorded with the given action.
    pub fn paths(&self, action: Action) -> Vec<&Path> {
        self.entries
            .iter()
            .filter(|(recorded, _)| *recorded == action)
            .map(|(_, path)| path.as_path())
            .collect()
    }
}

/// Generates a project skeleton inside an existing poetry project.
pub struct Scaffolder<'a> {
    root: PathBuf,
    options: Options,
    prompt: &'a dyn Prompter,
}

impl<'a> Scaffolder<'a> {
    /// `options` are resolved here, so `all` is expanded before any step runs.
    pub fn new<P: Into<PathBuf>>(root: P, options: Options, prompt: &'a dyn Prompter) -> Self {
        Self { root: root.into(), options: options.resolve(), prompt }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Runs every step requested by the options.
    ///
    /// # Flow
    /// 1. Creates the package and tests directories
    /// 2. Writes the package marker and template modules
    /// 3. Patches the manifest
    /// 4. Creates the docker structure
    /// 5. Overwrites the entry point
    ///
    /// # Errors
    /// The first failing step aborts the run. Changes made by earlier steps
    /// are kept.
    pub fn run(&self) -> Result<Report> {
        self.options.validate()?;
        debug!("Scaffolding with {:?}", self.options);

        let mut report = Report::default();

        info!("Generating directories");
        report.record(Action::Create, generate_directories(&self.root, &self.options)?);

        info!("Generating files");
        report.record(Action::Write, generate_files(&self.root, &self.options)?);

        let manifest = configure_manifest(&self.root, &self.options, self.prompt)?;
        report.record(Action::Patch, [manifest]);

        if self.options.docker {
            info!("Generating docker structure");
            let mut docker = generate_docker_structure(&self.root)?.into_iter();
            report.record(Action::Create, docker.next());
            report.record(Action::Touch, docker);
        }

        if self.options.overwrite_main {
            info!("Overwriting entry point");
            report.record(Action::Write, [overwrite_entry_point(&self.root)?]);
        }

        Ok(report)
    }
}
