//! Range grouping for neighbour-count conditions.
//!
//! A set like `{1, 2, 3, 5}` becomes `((sum >= 1 && sum <= 3) || sum == 5)`
//! instead of one equality test per value.

use tracing::trace;

/// Maximal run of consecutive integers, both ends inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Smallest value in the run.
    pub start: i32,
    /// Largest value in the run.
    pub end: i32,
}

impl Run {
    /// Run holding a single value.
    pub fn single(value: i32) -> Self {
        Self { start: value, end: value }
    }

    /// Whether the run covers more than one value.
    pub fn is_range(&self) -> bool {
        self.end > self.start
    }

    /// Boundary test against `variable`.
    pub fn to_glsl(&self, variable: &str) -> String {
        if self.is_range() {
            format!(
                "({var} >= {} && {var} <= {})",
                self.start,
                self.end,
                var = variable
            )
        } else {
            format!("{} == {}", variable, self.start)
        }
    }
}

/// Sort, de-duplicate and split `values` into maximal runs.
pub fn group_runs(values: &[i32]) -> Vec<Run> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let runs = sorted.into_iter().fold(Vec::<Run>::new(), |mut runs, value| {
        match runs.last_mut() {
            // i64 so that i32::MAX can't overflow the adjacency check
            Some(run) if i64::from(run.end) + 1 == i64::from(value) => run.end = value,
            _ => runs.push(Run::single(value)),
        }
        runs
    });

    trace!(values = values.len(), runs = runs.len(), "grouped neighbour counts");
    runs
}

/// Join clauses with `||`, parenthesizing only when there is more than one.
///
/// No clauses at all yields `false`.
pub(crate) fn join_clauses(clauses: Vec<String>) -> String {
    match clauses.len() {
        0 => "false".to_string(),
        1 => clauses.into_iter().next().unwrap_or_default(),
        _ => format!("({})", clauses.join(" || ")),
    }
}

/// Boundary expression that is true exactly for the values in `values`.
///
/// An empty set compiles to `false`.
pub fn equality_check(values: &[i32], variable: &str) -> String {
    let clauses = group_runs(values)
        .iter()
        .map(|run| run.to_glsl(variable))
        .collect();
    join_clauses(clauses)
}
