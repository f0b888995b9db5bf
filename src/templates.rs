//! Source templates written verbatim into the generated project.

/// Colourised `logging` setup, written to `<name>/logger.py`
pub const LOGGER_TEMPLATE: &str = include_str!("templates/logger.py");

/// `pydantic` settings module, written to `<name>/config.py`
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.py");

/// Minimal argument-parsing entry point, written to `main.py`
pub const ENTRY_POINT_TEMPLATE: &str = include_str!("templates/main.py");
