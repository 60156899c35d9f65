//! Output formatting.
//!
//! The report is built in memory and written once at the end of a run, so a
//! failed run leaves no partial output behind.

use crate::domain::FlightRequest;
use crate::planner::RankedPath;

/// Written instead of any results when there are no routes or no requests.
pub const NO_VIABLE_PLAN: &str = "No flight plan viable.";

/// Lines of the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
    /// False only for the bare "no viable plan" message.
    newline_terminated: bool,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            newline_terminated: true,
        }
    }

    /// The report written when there is nothing to plan.
    ///
    /// Renders as exactly [`NO_VIABLE_PLAN`], with no trailing newline.
    pub fn no_viable_plan() -> Self {
        Self {
            lines: vec![NO_VIABLE_PLAN.to_string()],
            newline_terminated: false,
        }
    }

    /// Append the block for one request.
    ///
    /// `index` is 1-based. The block ends with a blank separator line.
    pub fn push_request(&mut self, index: usize, request: &FlightRequest, paths: &[RankedPath<'_>]) {
        self.lines.push(format!(
            "Flight {}: {}, {} ({})",
            index,
            request.source,
            request.destination,
            request.preference.label()
        ));

        if paths.is_empty() {
            self.lines.push(format!(
                "No direct path from {} to {}.",
                request.source, request.destination
            ));
        }

        for (n, path) in paths.iter().enumerate() {
            self.lines.push(format_path(n + 1, path));
        }

        self.lines.push(String::new());
    }

    /// The report's lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render as file contents.
    ///
    /// Request blocks have every line newline-terminated.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.newline_terminated && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// Format one ranked path, e.g. `Path 1: A -> B. Time: 60 Cost: 100.00`.
pub fn format_path(n: usize, path: &RankedPath<'_>) -> String {
    let cities: Vec<&str> = path.cities.iter().map(|c| c.as_str()).collect();
    format!(
        "Path {n}: {}. Time: {} Cost: {:.2}",
        cities.join(" -> "),
        path.duration,
        path.cost
    )
}
