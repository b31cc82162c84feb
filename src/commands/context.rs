//! Helpers shared by the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ColorChoice;
use crate::config::{AuditConfig, ConfigLoader, FileConfigLoader};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Directory whose `.style-audit.toml` applies to an audit of `target`.
pub(crate) fn project_dir(target: &Path) -> PathBuf {
    if target.is_file() {
        target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    } else {
        target.to_path_buf()
    }
}

/// Load the effective configuration.
///
/// An explicit `config_path` wins over discovery from `project_dir`.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    project_dir: &Path,
) -> crate::Result<AuditConfig> {
    if no_config {
        return Ok(AuditConfig::default());
    }
    let loader = FileConfigLoader::new(project_dir);
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write `content` to `output_path`, or to stdout unless quiet.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
