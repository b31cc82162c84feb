use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            config_dir: Some(PathBuf::from("/home/user/.config/style-audit")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new(), "/project");
    assert_eq!(loader.load().unwrap(), AuditConfig::default());
}

#[test]
fn loads_local_config_from_project_dir() {
    let fs = MockFileSystem::new().with_file(
        "/project/.style-audit.toml",
        "[color]\nmin_contrast = 3.0\n",
    );
    let loader = FileConfigLoader::with_fs(fs, "/project");

    let config = loader.load().unwrap();
    assert!((config.color.min_contrast - 3.0).abs() < f64::EPSILON);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.style-audit.toml", "[quality]\nmax_nesting_depth = 5\n")
        .with_file(
            "/home/user/.config/style-audit/config.toml",
            "[quality]\nmax_nesting_depth = 9\n",
        );
    let loader = FileConfigLoader::with_fs(fs, "/project");

    assert_eq!(loader.load().unwrap().quality.max_nesting_depth, 5);
}

#[test]
fn falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/style-audit/config.toml",
        "[audit]\nparallel = false\n",
    );
    let loader = FileConfigLoader::with_fs(fs, "/project");

    assert!(!loader.load().unwrap().audit.parallel);
}

#[test]
fn rejects_unknown_version() {
    let fs = MockFileSystem::new().with_file("/project/.style-audit.toml", "version = \"7\"\n");
    let loader = FileConfigLoader::with_fs(fs, "/project");

    let err = loader.load().unwrap_err();
    assert!(matches!(err, StyleAuditError::Config(_)));
    assert!(err.to_string().contains("version '7'"));
}

#[test]
fn accepts_current_version() {
    let config = FileConfigLoader::<MockFileSystem>::parse_config("version = \"1\"\n").unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
}

#[test]
fn invalid_toml_is_reported() {
    let fs = MockFileSystem::new().with_file("/project/.style-audit.toml", "[color\n");
    let loader = FileConfigLoader::with_fs(fs, "/project");

    assert!(matches!(
        loader.load().unwrap_err(),
        StyleAuditError::TomlParse(_)
    ));
}

#[test]
fn missing_explicit_path_is_a_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new(), "/project");

    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();
    assert!(matches!(err, StyleAuditError::FileRead { .. }));
}
