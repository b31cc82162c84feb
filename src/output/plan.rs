use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::report::{FixPlan, FixTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for PlanFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown plan format: {s}")),
        }
    }
}

#[derive(Serialize)]
struct JsonPlan<'a> {
    estimated_effort: &'a str,
    total_minutes: usize,
    priority_order: Vec<&'a str>,
    tasks: Vec<JsonTask<'a>>,
}

#[derive(Serialize)]
struct JsonTask<'a> {
    id: &'a str,
    title: &'a str,
    priority: usize,
    severity: &'static str,
    category: &'static str,
    estimated_time: &'a str,
    estimated_minutes: usize,
    description: &'a str,
    issues: Vec<JsonTaskIssue<'a>>,
}

#[derive(Serialize)]
struct JsonTaskIssue<'a> {
    rule: &'a str,
    file: String,
    line: usize,
    column: usize,
    message: &'a str,
}

fn convert_task(task: &FixTask) -> JsonTask<'_> {
    JsonTask {
        id: &task.id,
        title: &task.title,
        priority: task.priority,
        severity: task.severity.label(),
        category: task.category.label(),
        estimated_time: &task.estimated_time,
        estimated_minutes: task.estimated_minutes,
        description: &task.description,
        issues: task
            .related_issues
            .iter()
            .map(|issue| JsonTaskIssue {
                rule: &issue.rule,
                file: issue.file_key(),
                line: issue.location.line,
                column: issue.location.column,
                message: &issue.message,
            })
            .collect(),
    }
}

fn render_text(plan: &FixPlan) -> String {
    let mut output = String::new();
    writeln!(output, "Fix Plan ({} tasks, {})", plan.tasks.len(), plan.estimated_effort).ok();
    if plan.is_empty() {
        writeln!(output, "\nNothing to fix.").ok();
        return output;
    }
    for (idx, task) in plan.tasks.iter().enumerate() {
        writeln!(output).ok();
        writeln!(output, "{}. {}", idx + 1, task.title).ok();
        writeln!(
            output,
            "   Priority: {} | Estimated time: {} | Id: {}",
            task.priority, task.estimated_time, task.id
        )
        .ok();
        for line in task.description.lines() {
            if line.is_empty() {
                continue;
            }
            writeln!(output, "   {line}").ok();
        }
    }
    output
}

/// Render the plan's tasks in priority order.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_plan(format: PlanFormat, plan: &FixPlan) -> Result<String> {
    match format {
        PlanFormat::Text => Ok(render_text(plan)),
        PlanFormat::Json => {
            let output = JsonPlan {
                estimated_effort: &plan.estimated_effort,
                total_minutes: plan.total_minutes,
                priority_order: plan.priority_order(),
                tasks: plan.tasks.iter().map(convert_task).collect(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
