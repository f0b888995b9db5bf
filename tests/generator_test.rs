use std::fs;

use pyskel::generator::{
    generate_directories, generate_docker_structure, generate_files, overwrite_entry_point,
};
use pyskel::options::Options;
use pyskel::templates::{CONFIG_TEMPLATE, ENTRY_POINT_TEMPLATE, LOGGER_TEMPLATE};
use tempfile::TempDir;

fn options(name: &str) -> Options {
    Options { name: name.to_string(), ..Options::default() }
}

#[test]
fn test_generate_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let created = generate_directories(root, &options("svc")).unwrap();
    assert_eq!(created, vec![root.join("svc")]);
    assert!(root.join("svc").is_dir());
    assert!(!root.join("tests").exists());

    let with_tests = Options { tests: true, ..options("svc") };
    let created = generate_directories(root, &with_tests).unwrap();
    assert_eq!(created, vec![root.join("svc"), root.join("tests")]);
    assert!(root.join("tests").is_dir());
}

#[test]
fn test_generate_directories_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let options = Options { tests: true, ..options("svc") };

    generate_directories(root, &options).unwrap();
    fs::write(root.join("svc").join("module.py"), "x = 1\n").unwrap();
    generate_directories(root, &options).unwrap();

    assert_eq!(fs::read_to_string(root.join("svc").join("module.py")).unwrap(), "x = 1\n");
}

#[test]
fn test_generate_files_marker_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let options = options("app");
    generate_directories(root, &options).unwrap();

    let written = generate_files(root, &options).unwrap();

    assert_eq!(written, vec![root.join("app").join("__init__.py")]);
    assert_eq!(fs::read_to_string(root.join("app").join("__init__.py")).unwrap(), "");
    assert!(!root.join("app").join("config.py").exists());
    assert!(!root.join("app").join("logger.py").exists());
}

#[test]
fn test_generate_files_with_templates() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let options = Options { config: true, logger: true, ..options("app") };
    generate_directories(root, &options).unwrap();
    fs::write(root.join("app").join("__init__.py"), "stale").unwrap();
    fs::write(root.join("app").join("config.py"), "stale").unwrap();

    generate_files(root, &options).unwrap();

    let package = root.join("app");
    assert_eq!(fs::read_to_string(package.join("__init__.py")).unwrap(), "");
    assert_eq!(fs::read_to_string(package.join("config.py")).unwrap(), CONFIG_TEMPLATE);
    assert_eq!(fs::read_to_string(package.join("logger.py")).unwrap(), LOGGER_TEMPLATE);
}

#[test]
fn test_generate_files_without_package_dir() {
    let temp_dir = TempDir::new().unwrap();
    assert!(generate_files(temp_dir.path(), &options("missing")).is_err());
}

#[test]
fn test_generate_docker_structure() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let touched = generate_docker_structure(root).unwrap();

    assert_eq!(touched.len(), 5);
    for file in [
        "Dockerfile",
        "docker-compose-dev.yml",
        "docker-compose-test.yml",
        "docker-compose-prod.yml",
    ] {
        assert_eq!(fs::read_to_string(root.join("docker").join(file)).unwrap(), "");
    }
}

#[test]
fn test_generate_docker_structure_keeps_content() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    generate_docker_structure(root).unwrap();
    let compose = root.join("docker").join("docker-compose-dev.yml");
    fs::write(&compose, "services: {}\n").unwrap();

    generate_docker_structure(root).unwrap();

    assert_eq!(fs::read_to_string(compose).unwrap(), "services: {}\n");
}

#[test]
fn test_overwrite_entry_point() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("main.py"), "print('hello')\n").unwrap();

    let path = overwrite_entry_point(root).unwrap();

    assert_eq!(path, root.join("main.py"));
    assert_eq!(fs::read_to_string(path).unwrap(), ENTRY_POINT_TEMPLATE);
}

#[test]
fn test_templates_are_verbatim() {
    assert!(LOGGER_TEMPLATE.starts_with("import logging\n\n\nclass Format(logging.Formatter):\n"));
    assert!(LOGGER_TEMPLATE.contains(r#"grey = "\x1b[38;21m""#));
    assert!(LOGGER_TEMPLATE.ends_with("    return logger\n"));
    assert!(CONFIG_TEMPLATE.starts_with("from pydantic import BaseSettings, Field\n"));
    assert!(CONFIG_TEMPLATE.ends_with("settings = Settings()\n"));
    assert!(ENTRY_POINT_TEMPLATE.starts_with("from argparse import ArgumentParser\n"));
    assert!(ENTRY_POINT_TEMPLATE.ends_with("    main()\n\n"));
}
