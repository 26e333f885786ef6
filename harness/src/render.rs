//! Console rendering for run reports.

use std::fmt::Write;

use crate::runner::{RunReport, StepReport};

/// `START-> LEFT-> DOWN-> GOAL`.
#[must_use]
pub fn render_path<S: AsRef<str>>(moves: &[S]) -> String {
    let mut out = String::new();
    for label in moves {
        out.push_str(label.as_ref());
        out.push_str("-> ");
    }
    out.push_str("GOAL");
    out
}

/// Each step's label followed by its grid.
#[must_use]
pub fn render_steps(steps: &[StepReport]) -> String {
    let mut out = String::new();
    for step in steps {
        let _ = writeln!(out, "{}", step.label);
        let _ = writeln!(out, "{}", step.grid);
    }
    out
}

/// Start and goal grids, outcome, path and timing.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Start state:\n{}", report.start);
    let _ = writeln!(out, "Goal state:\n{}", report.goal);

    let strategy = match report.heuristic {
        Some(kind) => format!("{} ({kind})", report.strategy),
        None => report.strategy.to_string(),
    };
    match report.depth {
        Some(depth) => {
            let _ = writeln!(out, "{strategy} found a solution");
            if let Some(limit) = report.depth_limit {
                let _ = writeln!(out, "Depth limit: {limit}");
            }
            let _ = writeln!(out, "Cost & depth: {depth}");
        }
        None => {
            let _ = writeln!(out, "{strategy} found no solution ({})", report.termination);
        }
    }
    let _ = writeln!(out, "Nodes expanded: {}", report.nodes_expanded);

    if report.solved {
        let _ = writeln!(out, "\n{}\n", render_path(&report.moves));
    }
    if !report.steps.is_empty() {
        out.push_str(&render_steps(&report.steps));
    }
    let _ = writeln!(out, "Time: {} us", report.elapsed_micros);
    out
}
