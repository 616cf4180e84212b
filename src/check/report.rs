//! Check report accumulation and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::{plural_count, plural_s};

use super::diagnostics::{Category, Diagnostic, RunResult, Severity};

/// Ordered diagnostic accumulation for one run.
///
/// Constructed fresh per run, threaded through each check, and inspected
/// once at the end to decide overall success. Diagnostics are append-only.
#[derive(Debug, Default)]
pub struct CheckReport {
    diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recoverable discrepancy (fails the run).
    pub fn recoverable(
        &mut self,
        category: Category,
        source: Option<&str>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.push(Severity::Recoverable, category, source, target, reason);
    }

    /// Record an advisory discrepancy (reported only).
    pub fn advisory(
        &mut self,
        category: Category,
        source: Option<&str>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.push(Severity::Advisory, category, source, target, reason);
    }

    fn push(
        &mut self,
        severity: Severity,
        category: Category,
        source: Option<&str>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            category,
            source: source.map(str::to_string),
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Recoverable count for one category.
    pub fn recoverable_count(&self, category: Category) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == category && d.severity == Severity::Recoverable)
            .count()
    }

    /// Derive the aggregate outcome from the diagnostic sequence.
    pub fn result(&self) -> RunResult {
        let mut result = RunResult::default();
        for diagnostic in &self.diagnostics {
            match diagnostic.severity {
                Severity::Recoverable => {
                    result.recoverable += 1;
                    *result.by_category.entry(diagnostic.category).or_default() += 1;
                }
                Severity::Advisory => result.advisory += 1,
            }
        }
        result.success = result.recoverable == 0;
        result
    }

    /// Print all diagnostics grouped by category, then by source document.
    pub fn print(&self) {
        for category in Category::ALL {
            self.print_section(category);
        }
    }

    fn print_section(&self, category: Category) {
        let entries: Vec<&Diagnostic> = self
            .diagnostics
            .iter()
            .filter(|d| d.category == category)
            .collect();
        if entries.is_empty() {
            return;
        }

        // Group by source; diagnostics without one go under the bare category
        let mut grouped: BTreeMap<&str, Vec<&Diagnostic>> = BTreeMap::new();
        for diagnostic in entries.iter().copied() {
            grouped
                .entry(diagnostic.source.as_deref().unwrap_or(""))
                .or_default()
                .push(diagnostic);
        }

        eprintln!();
        eprintln!(
            "{} {}",
            category.label().red().bold(),
            format!("({})", plural_count(entries.len(), "issue")).dimmed()
        );

        for (source, diagnostics) in grouped {
            if !source.is_empty() {
                eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            }
            for diagnostic in diagnostics {
                let arrow = match diagnostic.severity {
                    Severity::Recoverable => "→".red().to_string(),
                    Severity::Advisory => "→".yellow().to_string(),
                };
                eprintln!("{} {} {}", arrow, diagnostic.target, diagnostic.reason.dimmed());
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result();
        if result.recoverable == 0 && result.advisory == 0 {
            write!(f, "{}", "all checks passed".green())
        } else if result.recoverable == 0 {
            write!(
                f,
                "{} ({})",
                "all checks passed".green(),
                plural_count(result.advisory, "warning").yellow()
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                result.recoverable.to_string().red().bold(),
                format!("error{}", plural_s(result.recoverable)).dimmed()
            )
        }
    }
}
