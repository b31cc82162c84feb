use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::issue::Severity;
use crate::output::{ExportFormat, PlanFormat};
use crate::report::GroupBy;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Lowest severity that makes the audit exit with code 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    #[default]
    Critical,
    Moderate,
    Minor,
    /// Always exit 0 when the audit itself succeeds
    Never,
}

impl FailOn {
    /// Severity threshold, `None` when the audit never fails on issues.
    #[must_use]
    pub const fn threshold(self) -> Option<Severity> {
        match self {
            Self::Critical => Some(Severity::Critical),
            Self::Moderate => Some(Severity::Moderate),
            Self::Minor => Some(Severity::Minor),
            Self::Never => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "style-audit")]
#[command(author, version, about = "Audit style sheets for consistency, theming and accessibility")]
#[command(long_about = "Audits CSS, SCSS and Less files for naming, theming, spacing, motion,\n\
    responsiveness, quality and documentation problems, and plans the fixes.\n\n\
    Exit codes:\n  \
    0 - Audit passed\n  \
    1 - Issues at or above the --fail-on severity found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit the style sheets under a path
    Audit(AuditArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Project root or single style sheet to audit
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report format [possible values: text, markdown, html, json]
    #[arg(short, long, default_value = "text")]
    pub format: ExportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also render the fix plan
    #[arg(long)]
    pub plan: bool,

    /// Fix plan format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub plan_format: PlanFormat,

    /// Write the fix plan to a file (implies --plan)
    #[arg(long)]
    pub plan_output: Option<PathBuf>,

    /// Grouping of the detailed report [possible values: category, severity, file]
    #[arg(long, default_value = "category")]
    pub group_by: GroupBy,

    /// Fail when an issue of this severity or worse is found
    #[arg(long, value_enum, default_value = "critical")]
    pub fail_on: FailOn,

    /// Process files one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
