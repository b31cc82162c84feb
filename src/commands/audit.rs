use crate::audit::{AuditOutcome, Auditor, FileDiagnostic, ProgressPhase};
use crate::cli::{AuditArgs, Cli};
use crate::config::AuditConfig;
use crate::output::{AuditProgress, export_report, render_plan};
use crate::report::{AuditReport, FixPlan};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED, Result};

use super::context::{color_choice_to_mode, load_config, project_dir, write_output};

#[must_use]
pub fn run_audit(args: &AuditArgs, cli: &Cli) -> i32 {
    match run_audit_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs an audit and writes the report (and optionally the fix plan).
///
/// # Errors
/// Returns an error if the configuration is invalid, the path cannot be scanned, the
/// run is cancelled, or an output file cannot be written.
pub fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    let root = dunce::canonicalize(&args.path).unwrap_or_else(|_| args.path.clone());

    let mut config = load_config(cli.config.as_deref(), cli.no_config, &project_dir(&root))?;
    apply_cli_overrides(&mut config, args);

    let progress = AuditProgress::new(cli.quiet);
    let on_progress = |phase: ProgressPhase, processed: usize, total: usize, message: &str| {
        progress.update(phase, processed, total, message);
    };
    let outcome = Auditor::new(config).run(&root, &on_progress);
    progress.finish();

    let (report, plan, diagnostics) = match outcome {
        AuditOutcome::Success {
            report,
            plan,
            diagnostics,
        } => (report, plan, diagnostics),
        AuditOutcome::Failure { error } => return Err(error),
    };

    report_diagnostics(&diagnostics, cli.quiet);
    write_results(args, cli, &report, &plan)?;

    Ok(exit_code(&report, args))
}

pub(crate) fn apply_cli_overrides(config: &mut AuditConfig, args: &AuditArgs) {
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.sequential {
        config.audit.parallel = false;
    }
}

fn report_diagnostics(diagnostics: &[FileDiagnostic], quiet: bool) {
    if quiet {
        return;
    }
    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
}

fn write_results(args: &AuditArgs, cli: &Cli, report: &AuditReport, plan: &FixPlan) -> Result<()> {
    let rendered = export_report(
        args.format,
        report,
        args.group_by,
        color_choice_to_mode(cli.color),
    )?;
    write_output(args.output.as_deref(), &rendered, cli.quiet)?;

    if args.plan || args.plan_output.is_some() {
        let rendered_plan = render_plan(args.plan_format, plan)?;
        if args.plan_output.is_none() && args.output.is_none() && !cli.quiet {
            println!();
        }
        write_output(args.plan_output.as_deref(), &rendered_plan, cli.quiet)?;
    }
    Ok(())
}

/// `EXIT_THRESHOLD_EXCEEDED` when an issue at or above the `--fail-on` severity exists.
pub(crate) fn exit_code(report: &AuditReport, args: &AuditArgs) -> i32 {
    let Some(threshold) = args.fail_on.threshold() else {
        return EXIT_SUCCESS;
    };
    if report.summary.has_at_least(threshold) {
        EXIT_THRESHOLD_EXCEEDED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
