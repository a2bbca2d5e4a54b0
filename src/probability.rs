//! Probability-gated neighbour-count conditions.
//!
//! Used by the stochastic family: each neighbour count carries the chance
//! that the transition fires. Runs of adjacent counts with the same chance
//! share one boundary test, zero-chance counts disappear, and partial chances
//! are gated on the positional `rand` function emitted by
//! [`crate::shader_utils::RANDOM_GLSL`].

use std::collections::BTreeMap;

use crate::format::print_float;
use crate::range::{join_clauses, Run};

/// Run of adjacent neighbour counts sharing one probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityRun {
    /// Covered neighbour counts.
    pub run: Run,
    /// Chance that the transition fires for any count in `run`.
    pub probability: f64,
}

impl ProbabilityRun {
    /// Clause for this run, or `None` when it can never fire.
    pub fn to_glsl(&self, sum_variable: &str, position_variable: &str) -> Option<String> {
        if self.probability == 1.0 {
            return Some(self.run.to_glsl(sum_variable));
        }
        if self.probability <= 0.0 || self.probability.is_nan() {
            return None;
        }

        let bounds = if self.run.is_range() {
            format!(
                "{var} >= {} && {var} <= {}",
                self.run.start,
                self.run.end,
                var = sum_variable
            )
        } else {
            format!("{} == {}", sum_variable, self.run.start)
        };

        Some(format!(
            "({} && rand({}, 1.) < {})",
            bounds,
            position_variable,
            print_float(self.probability)
        ))
    }
}

/// Group `probabilities` into runs, walking keys in ascending order.
///
/// Two keys share a run only if they are adjacent and their probabilities are
/// identical.
pub fn group_probabilities(probabilities: &BTreeMap<i32, f64>) -> Vec<ProbabilityRun> {
    probabilities
        .iter()
        .fold(Vec::<ProbabilityRun>::new(), |mut runs, (&value, &probability)| {
            match runs.last_mut() {
                Some(last)
                    if i64::from(last.run.end) + 1 == i64::from(value)
                        && last.probability == probability =>
                {
                    last.run.end = value
                }
                _ => runs.push(ProbabilityRun {
                    run: Run::single(value),
                    probability,
                }),
            }
            runs
        })
}

/// Condition that fires with the configured chance for each neighbour count.
///
/// A mapping where nothing can fire compiles to `false`.
pub fn probability_check(
    probabilities: &BTreeMap<i32, f64>,
    sum_variable: &str,
    position_variable: &str,
) -> String {
    let clauses = group_probabilities(probabilities)
        .iter()
        .filter_map(|run| run.to_glsl(sum_variable, position_variable))
        .collect();
    join_clauses(clauses)
}
