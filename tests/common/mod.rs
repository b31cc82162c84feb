#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-audit binary.
#[macro_export]
macro_rules! style_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-audit"))
    };
}

/// A temporary project directory holding style sheets.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".style-audit.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A documented, token-based sheet that passes every critical rule.
pub const CLEAN_SHEET: &str = r"/* Button components for the design system */

:root {
  --space-4: 16px;
  --radius-md: 8px;
  --text-primary: #1a1a1a;
  --bg-surface: #ffffff;
}

.card {
  padding: var(--space-4);
  border-radius: var(--radius-md);
  color: var(--text-primary);
  background: var(--bg-surface);
}
";

/// White text on a white background.
pub const INVISIBLE_TEXT: &str = ".card { color: #ffffff; background-color: #ffffff; }\n";

/// An animation with no reduced-motion alternative.
pub const UNGUARDED_ANIMATION: &str = "@keyframes spin { to { transform: rotate(1turn); } }\n\
.spinner { animation: spin var(--duration-slow) linear infinite; }\n\
.loader { animation: spin var(--duration-slow) linear infinite; }\n";

/// A single hardcoded margin.
pub const HARDCODED_MARGIN: &str = ".box { margin: 16px; }\n";

/// Config that disables gitignore handling so fixtures are scanned as written.
pub const PLAIN_CONFIG: &str = r#"
version = "1"

[scanner]
gitignore = false
"#;
