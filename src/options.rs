//! Scaffolding options and their validation.

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};

/// What to generate for the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name of the package directory and of the poetry project
    pub name: String,
    pub tests: bool,
    pub config: bool,
    pub logger: bool,
    pub overwrite_main: bool,
    pub docker: bool,
    /// Shorthand for every flag above
    pub all: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            tests: false,
            config: false,
            logger: false,
            overwrite_main: false,
            docker: false,
            all: false,
        }
    }
}

impl Options {
    /// Expands `all` into the individual flags.
    pub fn resolve(mut self) -> Self {
        if self.all {
            self.tests = true;
            self.config = true;
            self.logger = true;
            self.overwrite_main = true;
            self.docker = true;
        }
        self
    }

    /// Checks that the project name can be used as a package directory.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name is empty, contains a path
    ///   separator or is a relative path component
    pub fn validate(&self) -> Result<()> {
        let name = self.name.as_str();
        if name.trim().is_empty() {
            return Err(Error::ValidationError("project name is empty".to_string()));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::ValidationError(format!(
                "project name '{name}' is not a valid directory name"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_sets_every_flag() {
        let options = Options { all: true, ..Options::default() }.resolve();
        assert!(options.tests);
        assert!(options.config);
        assert!(options.logger);
        assert!(options.overwrite_main);
        assert!(options.docker);
    }

    #[test]
    fn test_resolve_without_all_keeps_flags() {
        let options = Options { logger: true, ..Options::default() }.resolve();
        assert!(options.logger);
        assert!(!options.config);
        assert!(!options.docker);
    }

    #[test]
    fn test_validate() {
        assert!(Options::default().validate().is_ok());
        for name in ["", "  ", "a/b", "a\\b", ".", ".."] {
            let options = Options { name: name.to_string(), ..Options::default() };
            assert!(options.validate().is_err(), "{name:?} should be rejected");
        }
    }
}
