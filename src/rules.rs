//! Cellular automaton rule families.
//!
//! Each [`Rule`] compiles to an `int process(currentValue, position)` GLSL
//! routine, preceded by whichever helpers it calls (`getNeighbourhood`,
//! `getNeighbourhoodCond`, `rand`). The voxel lookup (`getVoxel`) is emitted
//! separately by [`crate::boundary::OutOfBound`].
//!
//! # Families
//!
//! | Format | Counts | Condition |
//! |--------|--------|-----------|
//! | `life`, `extended-life` | nonzero neighbours | birth / survival sets |
//! | `extended-stochastic` | nonzero neighbours | per-count probabilities |
//! | `generations`, `extended-generations` | neighbours in state 1 | birth / survival sets, decay |
//! | `vote` | nonzero neighbours + self | vote set |
//! | `luky` | nonzero neighbours | inclusive bounds |
//! | `nluky` | neighbours in state 1 | inclusive bounds, two-phase decay |
//! | `cyclic` | neighbours in the next state | threshold |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GenerateError;
use crate::neighbourhood::{get_neighbourhood_cond_glsl, get_neighbourhood_glsl};
use crate::probability::probability_check;
use crate::range::equality_check;
use crate::shader_utils::RANDOM_GLSL;

/// The nine `ruleFormat` tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleFormat {
    Life,
    ExtendedLife,
    ExtendedStochastic,
    Generations,
    ExtendedGenerations,
    Vote,
    Luky,
    Nluky,
    Cyclic,
}

impl RuleFormat {
    /// All formats, in declaration order.
    pub const ALL: [RuleFormat; 9] = [
        RuleFormat::Life,
        RuleFormat::ExtendedLife,
        RuleFormat::ExtendedStochastic,
        RuleFormat::Generations,
        RuleFormat::ExtendedGenerations,
        RuleFormat::Vote,
        RuleFormat::Luky,
        RuleFormat::Nluky,
        RuleFormat::Cyclic,
    ];

    /// The tag as written in rule descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleFormat::Life => "life",
            RuleFormat::ExtendedLife => "extended-life",
            RuleFormat::ExtendedStochastic => "extended-stochastic",
            RuleFormat::Generations => "generations",
            RuleFormat::ExtendedGenerations => "extended-generations",
            RuleFormat::Vote => "vote",
            RuleFormat::Luky => "luky",
            RuleFormat::Nluky => "nluky",
            RuleFormat::Cyclic => "cyclic",
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleFormat {
    type Err = GenerateError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        RuleFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == tag)
            .ok_or_else(|| GenerateError::UnsupportedRuleFormat(tag.to_string()))
    }
}

/// Birth and survival sets for the life-like families.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifeParams {
    /// Neighbour counts that bring a dead voxel to life.
    pub birth: Vec<i32>,
    /// Neighbour counts that keep a live voxel alive.
    pub survival: Vec<i32>,
}

/// Per-count probabilities for the stochastic family.
///
/// Counts missing from a map, or mapped to 0, never fire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StochasticParams {
    pub birth: BTreeMap<i32, f64>,
    pub survival: BTreeMap<i32, f64>,
}

/// Birth and survival sets plus the length of the decay cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationsParams {
    pub birth: Vec<i32>,
    pub survival: Vec<i32>,
    /// Total number of states, dead included.
    pub state_count: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoteParams {
    /// Totals (neighbours + self) that produce a live voxel.
    pub vote: Vec<i32>,
}

/// Inclusive birth and survival bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LukyParams {
    pub low_survival: i32,
    pub high_survival: i32,
    pub low_birth: i32,
    pub high_birth: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NlukyParams {
    pub state_count: i32,
    pub low_survival: i32,
    pub high_survival: i32,
    pub low_birth: i32,
    pub high_birth: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CyclicParams {
    pub state_count: i32,
    /// Minimum neighbours in the next state.
    pub threshold: i32,
    /// Excited and refractory voxels (state > 0) advance unconditionally.
    pub greenberg_hastings_model: bool,
}

/// A cellular automaton rule.
///
/// Parameters are not validated: an empty set compiles to `false`, odd
/// state counts flow into the emitted arithmetic unchanged.
///
/// # Example
///
/// ```
/// use voxel_automata_shader::rules::Rule;
///
/// let rule = Rule::life(vec![3], vec![2, 3]);
/// let glsl = rule.to_glsl(&[]);
/// assert!(glsl.contains("currentValue == 0 && sum == 3"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Totalistic life-like rule with an aging counter.
    ///
    /// A dead voxel is born when the count of nonzero neighbours is in
    /// `birth`, a live one survives when the count is in `survival`. Either
    /// way the new value is `1 + int(sum * clamp(iArgs[0], 0, 1))`, so denser
    /// neighbourhoods produce higher values.
    Life(LifeParams),

    /// Same as [`Rule::Life`], for rules written in the extended notation.
    ExtendedLife(LifeParams),

    /// Life-like rule where each neighbour count fires with a probability.
    ///
    /// Partial probabilities are tested against `rand(position, 1.)`.
    ExtendedStochastic(StochasticParams),

    /// Generations rule: live voxels decay through `state_count` phases.
    ///
    /// Only neighbours in state exactly 1 are counted. A voxel in state 1
    /// that fails survival, or any voxel in a later state, advances to
    /// `(currentValue + 1) mod state_count`.
    Generations(GenerationsParams),

    /// Same as [`Rule::Generations`], for rules written in the extended notation.
    ExtendedGenerations(GenerationsParams),

    /// Majority vote: the voxel itself counts as one of its neighbours.
    Vote(VoteParams),

    /// Life-like rule with inclusive bounds instead of sets.
    Luky(LukyParams),

    /// Generations-like rule with inclusive bounds and two decay phases.
    ///
    /// Decay uses a cycle of `2 + 2 * state_count` phases: a voxel in state 1
    /// that fails survival jumps to phase 2, later phases advance by 2.
    Nluky(NlukyParams),

    /// Cyclic automaton: a voxel advances when enough neighbours are
    /// already in its next state.
    Cyclic(CyclicParams),
}

fn parse_params<T: DeserializeOwned>(format: RuleFormat, params: Value) -> Result<T, GenerateError> {
    serde_json::from_value(params).map_err(|source| GenerateError::InvalidParameters {
        format: format.to_string(),
        source,
    })
}

fn params_json<T: Serialize>(params: &T) -> Value {
    // plain data structs with string-convertible map keys always serialize
    serde_json::to_value(params).unwrap_or(Value::Null)
}

impl Rule {
    /// Life rule from birth and survival counts, e.g. B3/S23.
    pub fn life(birth: Vec<i32>, survival: Vec<i32>) -> Self {
        Rule::Life(LifeParams { birth, survival })
    }

    /// Generations rule, e.g. Brian's Brain is `generations(vec![2], vec![], 3)`.
    pub fn generations(birth: Vec<i32>, survival: Vec<i32>, state_count: i32) -> Self {
        Rule::Generations(GenerationsParams {
            birth,
            survival,
            state_count,
        })
    }

    /// Cyclic rule.
    pub fn cyclic(state_count: i32, threshold: i32, greenberg_hastings_model: bool) -> Self {
        Rule::Cyclic(CyclicParams {
            state_count,
            threshold,
            greenberg_hastings_model,
        })
    }

    /// Build the rule for `format` from its JSON parameters.
    ///
    /// Unknown keys are ignored and missing ones take their defaults.
    pub fn from_params(format: RuleFormat, params: Value) -> Result<Self, GenerateError> {
        Ok(match format {
            RuleFormat::Life => Rule::Life(parse_params(format, params)?),
            RuleFormat::ExtendedLife => Rule::ExtendedLife(parse_params(format, params)?),
            RuleFormat::ExtendedStochastic => Rule::ExtendedStochastic(parse_params(format, params)?),
            RuleFormat::Generations => Rule::Generations(parse_params(format, params)?),
            RuleFormat::ExtendedGenerations => Rule::ExtendedGenerations(parse_params(format, params)?),
            RuleFormat::Vote => Rule::Vote(parse_params(format, params)?),
            RuleFormat::Luky => Rule::Luky(parse_params(format, params)?),
            RuleFormat::Nluky => Rule::Nluky(parse_params(format, params)?),
            RuleFormat::Cyclic => Rule::Cyclic(parse_params(format, params)?),
        })
    }

    /// Parameters as a JSON object, without the format tag.
    pub fn to_params(&self) -> Value {
        match self {
            Rule::Life(params) | Rule::ExtendedLife(params) => params_json(params),
            Rule::ExtendedStochastic(params) => params_json(params),
            Rule::Generations(params) | Rule::ExtendedGenerations(params) => params_json(params),
            Rule::Vote(params) => params_json(params),
            Rule::Luky(params) => params_json(params),
            Rule::Nluky(params) => params_json(params),
            Rule::Cyclic(params) => params_json(params),
        }
    }

    /// Format tag of this rule.
    pub fn format(&self) -> RuleFormat {
        match self {
            Rule::Life(_) => RuleFormat::Life,
            Rule::ExtendedLife(_) => RuleFormat::ExtendedLife,
            Rule::ExtendedStochastic(_) => RuleFormat::ExtendedStochastic,
            Rule::Generations(_) => RuleFormat::Generations,
            Rule::ExtendedGenerations(_) => RuleFormat::ExtendedGenerations,
            Rule::Vote(_) => RuleFormat::Vote,
            Rule::Luky(_) => RuleFormat::Luky,
            Rule::Nluky(_) => RuleFormat::Nluky,
            Rule::Cyclic(_) => RuleFormat::Cyclic,
        }
    }

    /// Whether the emitted code calls the `rand` helper.
    pub fn requires_random(&self) -> bool {
        matches!(self, Rule::ExtendedStochastic(_))
    }

    /// Emit the helpers and `process` routine for this rule, preceded by
    /// `rand` when [`Rule::requires_random`] holds.
    pub fn to_glsl(&self, neighbourhood: &[Vec3]) -> String {
        let process = self.process_glsl(neighbourhood);
        if self.requires_random() {
            [RANDOM_GLSL, "", process.as_str()].join("\n")
        } else {
            process
        }
    }

    fn process_glsl(&self, neighbourhood: &[Vec3]) -> String {
        match self {
            Rule::Life(LifeParams { birth, survival })
            | Rule::ExtendedLife(LifeParams { birth, survival }) => {
                life_glsl(
                    neighbourhood,
                    &equality_check(birth, "sum"),
                    &equality_check(survival, "sum"),
                )
            }

            Rule::ExtendedStochastic(StochasticParams { birth, survival }) => life_glsl(
                neighbourhood,
                &probability_check(birth, "sum", "position"),
                &probability_check(survival, "sum", "position"),
            ),

            Rule::Generations(GenerationsParams {
                birth,
                survival,
                state_count,
            })
            | Rule::ExtendedGenerations(GenerationsParams {
                birth,
                survival,
                state_count,
            }) => format!(
                r#"{helpers}

int process(const in int currentValue, const in vec3 position) {{
  int sum = getNeighbourhoodCond(position, 1);
  if (currentValue == 0 && {birth}) {{
    return 1;
  }} else if (currentValue == 1 && {survival}) {{
    return 1;
  }} else if (currentValue > 0) {{
    return int(mod(float(currentValue + 1), {state_count}));
  }}
  return 0;
}}"#,
                helpers = get_neighbourhood_cond_glsl(neighbourhood),
                birth = equality_check(birth, "sum"),
                survival = equality_check(survival, "sum"),
                state_count = state_count,
            ),

            Rule::Vote(VoteParams { vote }) => format!(
                r#"{helpers}

int process(const in int currentValue, const in vec3 position) {{
  int sum = getNeighbourhood(position) + (currentValue > 0 ? 1 : 0);
  float sumAdd = clamp(iArgs[0], 0., 1.);
  if ({vote}) {{
    return 1 + int(float(sum) * sumAdd);
  }}
  return 0;
}}"#,
                helpers = get_neighbourhood_glsl(neighbourhood),
                vote = equality_check(vote, "sum"),
            ),

            Rule::Luky(LukyParams {
                low_survival,
                high_survival,
                low_birth,
                high_birth,
            }) => life_glsl(
                neighbourhood,
                &format!("sum >= {} && sum <= {}", low_birth, high_birth),
                &format!("sum >= {} && sum <= {}", low_survival, high_survival),
            ),

            Rule::Nluky(NlukyParams {
                state_count,
                low_survival,
                high_survival,
                low_birth,
                high_birth,
            }) => {
                let cycle = 2 + 2 * i64::from(*state_count);
                // a zero-length cycle (state_count = -1) has no phase 2
                let decay_phase = 2_i64.checked_rem(cycle).unwrap_or(0);
                format!(
                    r#"{helpers}

int process(const in int currentValue, const in vec3 position) {{
  int sum = getNeighbourhoodCond(position, 1);
  if (currentValue == 0 && sum >= {low_birth} && sum <= {high_birth}) {{
    return 1;
  }} else if (currentValue == 1 && sum >= {low_survival} && sum <= {high_survival}) {{
    return 1;
  }} else if (currentValue == 1) {{
    return {decay_phase};
  }} else if (currentValue >= 2) {{
    return int(mod(float(currentValue + 2), {cycle}));
  }}
  return 0;
}}"#,
                    helpers = get_neighbourhood_cond_glsl(neighbourhood),
                    low_birth = low_birth,
                    high_birth = high_birth,
                    low_survival = low_survival,
                    high_survival = high_survival,
                    decay_phase = decay_phase,
                    cycle = cycle,
                )
            }

            Rule::Cyclic(CyclicParams {
                state_count,
                threshold,
                greenberg_hastings_model,
            }) => format!(
                r#"{helpers}

int process(const in int currentValue, const in vec3 position) {{
  int nextValue = int(mod(float(currentValue + 1), {state_count}));
  int sum = getNeighbourhoodCond(position, nextValue);
  if (sum >= {threshold}{excited}) {{
    return nextValue;
  }}
  return currentValue;
}}"#,
                helpers = get_neighbourhood_cond_glsl(neighbourhood),
                state_count = state_count,
                threshold = threshold,
                excited = if *greenberg_hastings_model {
                    " || currentValue > 0"
                } else {
                    ""
                },
            ),
        }
    }
}

/// Life-shaped `process`: birth from 0, survival while nonzero, value grows
/// with local density.
fn life_glsl(neighbourhood: &[Vec3], birth: &str, survival: &str) -> String {
    format!(
        r#"{helpers}

int process(const in int currentValue, const in vec3 position) {{
  int sum = getNeighbourhood(position);
  float sumAdd = clamp(iArgs[0], 0., 1.);
  if (currentValue == 0 && {birth}) {{
    return 1 + int(float(sum) * sumAdd);
  }} else if (currentValue > 0 && {survival}) {{
    return 1 + int(float(sum) * sumAdd);
  }}
  return 0;
}}"#,
        helpers = get_neighbourhood_glsl(neighbourhood),
        birth = birth,
        survival = survival,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(glsl: &str) -> &str {
        let start = glsl.find("int process(").expect("process routine");
        &glsl[start..]
    }

    fn nluky(state_count: i32) -> Rule {
        Rule::Nluky(NlukyParams {
            state_count,
            low_survival: 1,
            high_survival: 2,
            low_birth: 3,
            high_birth: 4,
        })
    }

    #[test]
    fn test_format_round_trip() {
        for format in RuleFormat::ALL {
            assert_eq!(format.as_str().parse::<RuleFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_format() {
        let err = "unknown".parse::<RuleFormat>().unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedRuleFormat(ref tag) if tag == "unknown"));
    }

    #[test]
    fn test_life_conditions() {
        let glsl = Rule::life(vec![3], vec![2, 3]).to_glsl(&[Vec3::X]);
        assert!(glsl.starts_with("int getNeighbourhood (const in vec3 currentPos) {"));
        assert!(glsl.contains("  if (currentValue == 0 && sum == 3) {"));
        assert!(glsl.contains("  } else if (currentValue > 0 && (sum >= 2 && sum <= 3)) {"));
        assert_eq!(glsl.matches("return 1 + int(float(sum) * sumAdd);").count(), 2);
        assert!(!glsl.contains("rand("));
    }

    #[test]
    fn test_extended_life_matches_life() {
        let params = LifeParams {
            birth: vec![5, 6],
            survival: vec![4],
        };
        assert_eq!(
            Rule::Life(params.clone()).to_glsl(&[Vec3::Y]),
            Rule::ExtendedLife(params).to_glsl(&[Vec3::Y])
        );
    }

    #[test]
    fn test_life_empty_birth_is_false() {
        let glsl = Rule::life(vec![], vec![2]).to_glsl(&[]);
        assert!(glsl.contains("if (currentValue == 0 && false) {"));
    }

    #[test]
    fn test_stochastic_includes_random() {
        let rule = Rule::ExtendedStochastic(StochasticParams {
            birth: [(3, 0.5)].into_iter().collect(),
            survival: [(2, 1.0), (3, 1.0)].into_iter().collect(),
        });
        assert!(rule.requires_random());
        let glsl = rule.to_glsl(&[]);
        assert!(glsl.starts_with(RANDOM_GLSL));
        assert!(glsl.contains("if (currentValue == 0 && (sum == 3 && rand(position, 1.) < 0.5)) {"));
        assert!(glsl.contains("} else if (currentValue > 0 && (sum >= 2 && sum <= 3)) {"));
    }

    #[test]
    fn test_only_stochastic_emits_random() {
        for format in RuleFormat::ALL {
            let rule = Rule::from_params(format, serde_json::json!({})).unwrap();
            let glsl = rule.to_glsl(&[Vec3::X]);
            assert_eq!(rule.requires_random(), format == RuleFormat::ExtendedStochastic);
            assert_eq!(glsl.contains("float rand(vec3 co"), rule.requires_random(), "{}", format);
        }
    }

    #[test]
    fn test_generations_decay() {
        let glsl = Rule::generations(vec![2], vec![], 4).to_glsl(&[Vec3::Z]);
        assert!(glsl.starts_with("int getNeighbourhoodCond"));
        let process = body(&glsl);
        assert!(process.contains("int sum = getNeighbourhoodCond(position, 1);"));
        assert!(process.contains("if (currentValue == 0 && sum == 2) {"));
        assert!(process.contains("} else if (currentValue == 1 && false) {"));
        assert!(process.contains("return int(mod(float(currentValue + 1), 4));"));
    }

    #[test]
    fn test_vote_counts_self() {
        let glsl = Rule::Vote(VoteParams { vote: vec![5, 6, 7, 8, 9] }).to_glsl(&[]);
        assert!(glsl.contains("int sum = getNeighbourhood(position) + (currentValue > 0 ? 1 : 0);"));
        assert!(glsl.contains("if ((sum >= 5 && sum <= 9)) {"));
        assert!(!glsl.contains("currentValue == 0"));
    }

    #[test]
    fn test_luky_bounds() {
        let glsl = Rule::Luky(LukyParams {
            low_survival: 2,
            high_survival: 4,
            low_birth: 3,
            high_birth: 3,
        })
        .to_glsl(&[]);
        assert!(glsl.contains("if (currentValue == 0 && sum >= 3 && sum <= 3) {"));
        assert!(glsl.contains("} else if (currentValue > 0 && sum >= 2 && sum <= 4) {"));
    }

    #[test]
    fn test_nluky_phases() {
        let glsl = nluky(3).to_glsl(&[]);
        assert!(glsl.contains("if (currentValue == 0 && sum >= 3 && sum <= 4) {"));
        assert!(glsl.contains("} else if (currentValue == 1 && sum >= 1 && sum <= 2) {"));
        assert!(glsl.contains("  } else if (currentValue == 1) {\n    return 2;"));
        assert!(glsl.contains("return int(mod(float(currentValue + 2), 8));"));
    }

    #[test]
    fn test_nluky_degenerate_cycle() {
        let zero = nluky(0).to_glsl(&[]);
        assert!(zero.contains("  } else if (currentValue == 1) {\n    return 0;"));

        let empty_cycle = nluky(-1).to_glsl(&[]);
        assert!(empty_cycle.contains("  } else if (currentValue == 1) {\n    return 0;"));
        assert!(empty_cycle.contains("return int(mod(float(currentValue + 2), 0));"));
    }

    #[test]
    fn test_cyclic_threshold() {
        let glsl = Rule::cyclic(3, 2, false).to_glsl(&[]);
        assert!(glsl.contains("int nextValue = int(mod(float(currentValue + 1), 3));"));
        assert!(glsl.contains("int sum = getNeighbourhoodCond(position, nextValue);"));
        assert!(glsl.contains("  if (sum >= 2) {"));
        assert!(glsl.contains("  return currentValue;"));
    }

    #[test]
    fn test_cyclic_greenberg_hastings() {
        let glsl = Rule::cyclic(5, 1, true).to_glsl(&[]);
        assert!(glsl.contains("  if (sum >= 1 || currentValue > 0) {"));
    }

    #[test]
    fn test_single_process_routine() {
        let rules = [
            Rule::life(vec![3], vec![2, 3]),
            Rule::generations(vec![2], vec![3], 5),
            Rule::Vote(VoteParams { vote: vec![4] }),
            Rule::cyclic(4, 3, true),
            nluky(2),
        ];
        for rule in rules {
            assert_eq!(rule.to_glsl(&[Vec3::X]).matches("int process(").count(), 1);
        }
    }

    #[test]
    fn test_from_params() {
        let rule = Rule::from_params(
            RuleFormat::Cyclic,
            json!({"stateCount": 4, "threshold": 2, "greenbergHastingsModel": true}),
        )
        .unwrap();
        assert_eq!(rule, Rule::cyclic(4, 2, true));

        let rule = Rule::from_params(RuleFormat::ExtendedLife, json!({"birth": [3]})).unwrap();
        assert_eq!(
            rule,
            Rule::ExtendedLife(LifeParams {
                birth: vec![3],
                survival: vec![]
            })
        );
    }

    #[test]
    fn test_from_params_probabilities() {
        let rule = Rule::from_params(
            RuleFormat::ExtendedStochastic,
            json!({"birth": {"3": 0.5, "2": 1}, "survival": {}}),
        )
        .unwrap();
        match rule {
            Rule::ExtendedStochastic(params) => {
                assert_eq!(params.birth.into_iter().collect::<Vec<_>>(), vec![(2, 1.0), (3, 0.5)]);
                assert!(params.survival.is_empty());
            }
            other => panic!("unexpected rule {:?}", other),
        }
    }

    #[test]
    fn test_from_params_wrong_shape() {
        let err = Rule::from_params(RuleFormat::Vote, json!({"vote": "5-9"})).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameters { ref format, .. } if format == "vote"));
    }

    #[test]
    fn test_to_params_round_trip() {
        let rule = Rule::generations(vec![2], vec![3, 4], 6);
        let params = rule.to_params();
        assert_eq!(params["stateCount"], json!(6));
        assert_eq!(Rule::from_params(rule.format(), params).unwrap(), rule);
    }
}
