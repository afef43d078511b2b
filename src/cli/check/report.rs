//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::seo::Violation;
use crate::utils::plural_s;

/// Violations found per route, ordered by route.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub routes: BTreeMap<String, Vec<Violation>>,
}

impl CheckReport {
    /// Record the violations of one route; an empty list is ignored.
    pub fn add(&mut self, route: String, violations: Vec<Violation>) {
        if !violations.is_empty() {
            self.routes.entry(route).or_default().extend(violations);
        }
    }

    /// Count of routes with at least one violation.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Total violation count.
    pub fn violation_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Print every failing route with its violations to stderr.
    pub fn print(&self) {
        if self.routes.is_empty() {
            return;
        }
        eprintln!();

        let route_count = self.route_count();
        let violation_count = self.violation_count();
        eprintln!(
            "{} {}",
            "routes".red().bold(),
            format!(
                "({route_count} route{}, {violation_count} violation{})",
                plural_s(route_count),
                plural_s(violation_count)
            )
            .dimmed()
        );

        for (route, violations) in &self.routes {
            eprintln!("{}{}{}", "[".dimmed(), route.cyan(), "]".dimmed());
            for violation in violations {
                eprintln!("{} {}", "→".red(), violation);
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.violation_count();

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("violation{}", plural_s(total)).dimmed()
            )
        }
    }
}
