use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleAuditError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleAuditError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# style-audit configuration file
version = "1"

[scanner]
# Style-sheet extensions to audit
extensions = ["css", "scss", "less"]

# Exclude patterns (glob syntax, relative to the audited directory)
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/*.min.css",
]

# Skip files ignored by .gitignore (default: true)
gitignore = true

[naming]
# Prefixes of role-based color variables
role_prefixes = ["--text-", "--bg-", "--border-", "--accent-", "--surface-", "--shadow-", "--focus-"]

# Theme tokens allowed to carry a literal color name
shared_tokens = ["--white", "--black", "--color-white", "--color-black", "--color-primary", "--color-secondary"]

[color]
# Minimum WCAG contrast ratio between text and background (default: 4.5)
min_contrast = 4.5

[responsive]
# Standard breakpoints in px
breakpoints = [480.0, 640.0, 768.0, 1024.0, 1280.0, 1536.0]

# A query within this many px of a breakpoint counts as standard
tolerance = 2.0

# Breakpoints closer than this are near-duplicates
near_duplicate_range = 20.0

# Minimum size of interactive elements in px
min_touch_target = 44.0

[quality]
# Highest specificity allowed for a utility class selector
max_utility_specificity = 20

# Maximum compound selectors in one selector
max_nesting_depth = 3

[comments]
# Minimum length of the file header comment
min_header_length = 20

# Files longer than this need section separators
separator_min_lines = 100

# Files with at least this many top-level blocks need section separators
separator_min_blocks = 5

[audit]
# Process files in parallel (default: true)
parallel = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
