use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root of `.style-audit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuditConfig {
    /// Config schema version. Missing means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub color: ColorConfig,

    #[serde(default)]
    pub responsive: ResponsiveConfig,

    #[serde(default)]
    pub quality: QualityConfig,

    #[serde(default)]
    pub comments: CommentsConfig,

    #[serde(default)]
    pub audit: RunConfig,
}

/// File discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Style-sheet extensions to audit, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from the audit.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamingConfig {
    /// Prefixes that mark a color variable as role-based (`--text-`, `--bg-`, ...).
    #[serde(default = "default_role_prefixes")]
    pub role_prefixes: Vec<String>,

    /// Globally shared theme tokens exempt from the literal-color-name rule.
    #[serde(default = "default_shared_tokens")]
    pub shared_tokens: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            role_prefixes: default_role_prefixes(),
            shared_tokens: default_shared_tokens(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorConfig {
    /// Minimum WCAG contrast ratio between text and background.
    #[serde(default = "default_min_contrast")]
    pub min_contrast: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            min_contrast: default_min_contrast(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponsiveConfig {
    /// Standard breakpoints in px.
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<f64>,

    /// Distance in px within which a breakpoint counts as standard.
    #[serde(default = "default_breakpoint_tolerance")]
    pub tolerance: f64,

    /// Two breakpoints closer than this (and further than `tolerance`) are near-duplicates.
    #[serde(default = "default_near_duplicate_range")]
    pub near_duplicate_range: f64,

    /// Minimum touch target size in px.
    #[serde(default = "default_min_touch_target")]
    pub min_touch_target: f64,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            tolerance: default_breakpoint_tolerance(),
            near_duplicate_range: default_near_duplicate_range(),
            min_touch_target: default_min_touch_target(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityConfig {
    /// Highest specificity a utility class selector may have.
    #[serde(default = "default_max_utility_specificity")]
    pub max_utility_specificity: u32,

    /// Maximum compound selectors in one selector.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_utility_specificity: default_max_utility_specificity(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentsConfig {
    /// Minimum length of the file header comment text.
    #[serde(default = "default_min_header_length")]
    pub min_header_length: usize,

    /// Files longer than this need section separators.
    #[serde(default = "default_separator_min_lines")]
    pub separator_min_lines: usize,

    /// Files with at least this many top-level blocks need section separators.
    #[serde(default = "default_separator_min_blocks")]
    pub separator_min_blocks: usize,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            min_header_length: default_min_header_length(),
            separator_min_lines: default_separator_min_lines(),
            separator_min_blocks: default_separator_min_blocks(),
        }
    }
}

/// Run-level settings, `[audit]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    /// Process files in parallel.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

const fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["css".to_string(), "scss".to_string(), "less".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
        "**/*.min.css".to_string(),
    ]
}

fn default_role_prefixes() -> Vec<String> {
    ["--text-", "--bg-", "--border-", "--accent-", "--surface-", "--shadow-", "--focus-"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_shared_tokens() -> Vec<String> {
    [
        "--white",
        "--black",
        "--color-white",
        "--color-black",
        "--color-primary",
        "--color-secondary",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

const fn default_min_contrast() -> f64 {
    4.5
}

fn default_breakpoints() -> Vec<f64> {
    vec![480.0, 640.0, 768.0, 1024.0, 1280.0, 1536.0]
}

const fn default_breakpoint_tolerance() -> f64 {
    2.0
}

const fn default_near_duplicate_range() -> f64 {
    20.0
}

const fn default_min_touch_target() -> f64 {
    44.0
}

const fn default_max_utility_specificity() -> u32 {
    20
}

const fn default_max_nesting_depth() -> usize {
    3
}

const fn default_min_header_length() -> usize {
    20
}

const fn default_separator_min_lines() -> usize {
    100
}

const fn default_separator_min_blocks() -> usize {
    5
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
