use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;

use super::{
    AuditOutcome, CancellationToken, DiagnosticKind, FileDiagnostic, FileReader, ProgressCallback,
    ProgressPhase, RealFileReader,
};
use crate::checker::CheckerSet;
use crate::collector::IssueCollector;
use crate::config::AuditConfig;
use crate::error::{Result, StyleAuditError};
use crate::issue::Issue;
use crate::model::StyleSheet;
use crate::output::display_path;
use crate::parser::{CssParser, StyleSheetParser};
use crate::report::{AuditReport, FixPlan};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};

/// A parsed file waiting for the checkers.
struct ParsedFile {
    display: String,
    sheet: StyleSheet,
    content: String,
}

/// Outcome of one file in one phase, kept in input order.
enum Step<T> {
    Done(T),
    Failed(FileDiagnostic),
    Skipped,
}

/// Runs the full audit pipeline for a project root.
pub struct Auditor {
    config: AuditConfig,
    checkers: CheckerSet,
    parser: Box<dyn StyleSheetParser>,
    reader: Box<dyn FileReader>,
    cancellation: CancellationToken,
}

impl Auditor {
    #[must_use]
    pub fn new(config: AuditConfig) -> Self {
        let checkers = CheckerSet::standard(&config);
        Self {
            config,
            checkers,
            parser: Box::new(CssParser::new()),
            reader: Box::new(RealFileReader),
            cancellation: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_checkers(mut self, checkers: CheckerSet) -> Self {
        self.checkers = checkers;
        self
    }

    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn StyleSheetParser>) -> Self {
        self.parser = parser;
        self
    }

    #[must_use]
    pub fn with_reader(mut self, reader: Box<dyn FileReader>) -> Self {
        self.reader = reader;
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Audit every style sheet under `root`.
    ///
    /// Never panics on bad input: scan failures and cancellation become
    /// [`AuditOutcome::Failure`], per-file problems become diagnostics.
    #[must_use]
    pub fn run(&self, root: &Path, progress: ProgressCallback<'_>) -> AuditOutcome {
        let span = tracing::info_span!("audit", root = %root.display());
        let _guard = span.enter();

        let result = self.discover(root, progress).and_then(|files| {
            let base = if root.is_file() { root.parent() } else { Some(root) };
            self.audit_files(base, &files, progress)
        });
        match result {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(%error, "audit failed");
                AuditOutcome::Failure { error }
            }
        }
    }

    fn discover(&self, root: &Path, progress: ProgressCallback<'_>) -> Result<Vec<PathBuf>> {
        progress(ProgressPhase::Discovery, 0, 0, "Discovering style sheets");
        let scanner_config = &self.config.scanner;
        let filter = GlobFilter::new(&scanner_config.extensions, &scanner_config.exclude)?;
        let files = DirectoryScanner::with_gitignore(filter, scanner_config.gitignore).scan(root)?;
        tracing::info!(files = files.len(), "discovery finished");
        progress(
            ProgressPhase::Discovery,
            0,
            files.len(),
            &format!("Found {} style sheet(s)", files.len()),
        );
        Ok(files)
    }

    /// Audit an explicit file list. Paths in the report are shown relative to `base`.
    ///
    /// # Errors
    /// Returns [`StyleAuditError::Cancelled`] when the cancellation token fires.
    pub fn audit_files(
        &self,
        base: Option<&Path>,
        files: &[PathBuf],
        progress: ProgressCallback<'_>,
    ) -> Result<AuditOutcome> {
        let total = files.len();
        let mut diagnostics = Vec::new();

        progress(ProgressPhase::Parsing, 0, total, "Parsing style sheets");
        let parsed = self.each_file(files, ProgressPhase::Parsing, progress, |path| {
            self.parse_file(base, path)
        })?;
        let sheets: Vec<ParsedFile> = keep_done(parsed, &mut diagnostics);

        progress(ProgressPhase::Checking, 0, total, "Running checkers");
        let checked = self.each_file(&sheets, ProgressPhase::Checking, progress, |file| {
            Step::Done(self.check_file(file))
        })?;
        let mut collector = IssueCollector::new();
        for (issues, failures) in keep_done(checked, &mut diagnostics) {
            collector.extend(issues);
            diagnostics.extend(failures);
        }

        progress(ProgressPhase::Reporting, total, total, "Building report");
        let report = AuditReport::new(&collector, total);
        let plan = FixPlan::from_issues(collector.issues());
        tracing::info!(
            issues = collector.len(),
            diagnostics = diagnostics.len(),
            "audit finished"
        );
        Ok(AuditOutcome::Success {
            report,
            plan,
            diagnostics,
        })
    }

    /// Apply `work` to every item, in parallel unless disabled, keeping input order.
    ///
    /// Progress calls are serialized, so `processed` only ever grows, and workers run
    /// inside the caller's span.
    fn each_file<T, R, F>(
        &self,
        items: &[T],
        phase: ProgressPhase,
        progress: ProgressCallback<'_>,
        work: F,
    ) -> Result<Vec<Step<R>>>
    where
        T: Sync + Describe,
        R: Send,
        F: Fn(&T) -> Step<R> + Sync,
    {
        let total = items.len();
        let processed = Mutex::new(0_usize);
        let span = tracing::Span::current();
        let run_one = |item: &T| {
            let _entered = span.enter();
            if self.cancellation.is_cancelled() {
                return Step::Skipped;
            }
            let step = work(item);
            let mut done = processed.lock().unwrap_or_else(PoisonError::into_inner);
            *done += 1;
            progress(phase, *done, total, &item.describe());
            step
        };

        let steps: Vec<Step<R>> = if self.config.audit.parallel {
            items.par_iter().map(run_one).collect()
        } else {
            items.iter().map(run_one).collect()
        };

        if self.cancellation.is_cancelled() {
            return Err(StyleAuditError::Cancelled {
                processed: processed.into_inner().unwrap_or_else(PoisonError::into_inner),
                total,
            });
        }
        Ok(steps)
    }

    fn parse_file(&self, base: Option<&Path>, path: &Path) -> Step<ParsedFile> {
        let shown = display_path(path, base);
        let content = match self.reader.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %shown, error = %e, "cannot read file");
                return Step::Failed(FileDiagnostic {
                    path: shown,
                    kind: DiagnosticKind::Read,
                    message: e.to_string(),
                });
            }
        };

        match self.parser.parse(Path::new(&shown), &content) {
            Ok(sheet) => {
                tracing::debug!(file = %shown, classes = sheet.classes.len(), "parsed");
                Step::Done(ParsedFile {
                    display: shown,
                    sheet,
                    content,
                })
            }
            Err(e) => {
                tracing::warn!(file = %shown, error = %e, "cannot parse file");
                Step::Failed(FileDiagnostic {
                    path: shown,
                    kind: DiagnosticKind::Parse,
                    message: e.to_string(),
                })
            }
        }
    }

    /// Run every checker on one file. A panicking checker loses its own issues only.
    fn check_file(&self, file: &ParsedFile) -> (Vec<Issue>, Vec<FileDiagnostic>) {
        let mut issues = Vec::new();
        let mut failures = Vec::new();
        for checker in self.checkers.iter() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                checker.check(&file.sheet, Some(&file.content))
            }));
            match result {
                Ok(found) => issues.extend(found),
                Err(payload) => {
                    let message = format!(
                        "checker '{}' panicked: {}",
                        checker.name(),
                        panic_message(payload.as_ref())
                    );
                    tracing::error!(file = %file.display, "{message}");
                    failures.push(FileDiagnostic {
                        path: file.display.clone(),
                        kind: DiagnosticKind::Checker,
                        message,
                    });
                }
            }
        }
        (issues, failures)
    }
}

/// Short label shown next to the progress bar.
trait Describe {
    fn describe(&self) -> String;
}

impl Describe for PathBuf {
    fn describe(&self) -> String {
        self.file_name()
            .map_or_else(|| self.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

impl Describe for ParsedFile {
    fn describe(&self) -> String {
        self.display.clone()
    }
}

fn keep_done<T>(steps: Vec<Step<T>>, diagnostics: &mut Vec<FileDiagnostic>) -> Vec<T> {
    let mut done = Vec::with_capacity(steps.len());
    for step in steps {
        match step {
            Step::Done(value) => done.push(value),
            Step::Failed(diagnostic) => diagnostics.push(diagnostic),
            Step::Skipped => {}
        }
    }
    done
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
