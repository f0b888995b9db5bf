//! Common constants used throughout the pyskel application.

/// Packaging manifest patched in place
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Marks the project directory as an importable package
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Directory holding the project's test suite
pub const TESTS_DIR: &str = "tests";

/// Settings module written with `--config`
pub const CONFIG_FILE: &str = "config.py";

/// Logger module written with `--logger`
pub const LOGGER_FILE: &str = "logger.py";

/// Entry point overwritten with `--overwrite-main`
pub const ENTRY_POINT_FILE: &str = "main.py";

/// Directory holding the docker files
pub const DOCKER_DIR: &str = "docker";

/// Files created (empty) inside [`DOCKER_DIR`]
pub const DOCKER_FILES: [&str; 4] = [
    "Dockerfile",
    "docker-compose-dev.yml",
    "docker-compose-test.yml",
    "docker-compose-prod.yml",
];

/// Section header the settings dependency is declared in front of
pub const DEV_DEPENDENCIES_HEADER: &str = "[tool.poetry.dev-dependencies]";

/// Dependency required by the settings template
pub const SETTINGS_DEPENDENCY: &str = "pydantic = \"*\"\n";

/// Used when the description prompt is left empty
pub const DEFAULT_DESCRIPTION: &str = "Default description";

pub const DEFAULT_PROJECT_NAME: &str = "app";
