//! Serializable rule descriptors and shader configurations.
//!
//! A configuration file bundles everything one shader needs:
//!
//! ```json
//! {
//!   "rule": { "ruleFormat": "life", "ruleString": "B3/S23", "birth": [3], "survival": [2, 3] },
//!   "neighbourhood": [[-1, -1, 0], [0, -1, 0], [1, -1, 0]],
//!   "outOfBoundValue": "wrap"
//! }
//! ```

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::boundary::OutOfBound;
use crate::error::{ConfigError, GenerateError};
use crate::rules::{Rule, RuleFormat};
use crate::shader::VoxelShader;

/// Rule as written by a rule-string parser: a format tag, the rule
/// notation, and the family's parameters as loose JSON.
///
/// The tag is only checked when the descriptor is compiled, so descriptors
/// with unknown formats still load and round-trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDescriptor {
    /// One of the nine family tags, e.g. `"extended-generations"`.
    pub rule_format: String,
    /// Rule notation, e.g. `"B3/S23"`. Only used in the header.
    #[serde(default)]
    pub rule_string: String,
    /// Family parameters (`birth`, `survival`, `stateCount`, ...).
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl RuleDescriptor {
    /// Descriptor for an already typed rule.
    pub fn from_rule(rule: &Rule, rule_string: impl Into<String>) -> Self {
        let params = match rule.to_params() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            rule_format: rule.format().to_string(),
            rule_string: rule_string.into(),
            params,
        }
    }

    /// Parse a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve the format tag and parameters into a typed [`Rule`].
    pub fn to_rule(&self) -> Result<Rule, GenerateError> {
        let format: RuleFormat = self.rule_format.parse()?;
        Rule::from_params(format, Value::Object(self.params.clone()))
    }
}

/// Everything needed to generate one shader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShaderConfig {
    pub rule: RuleDescriptor,
    /// Offsets as `[x, y, z]` arrays, in emission order.
    #[serde(default)]
    pub neighbourhood: Vec<Vec3>,
    /// `"wrap"`, `"clamp"` or a literal; absent means `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of_bound_value: Option<OutOfBound>,
}

impl ShaderConfig {
    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the typed shader, failing on an unknown rule format.
    pub fn to_shader(&self) -> Result<VoxelShader, GenerateError> {
        Ok(VoxelShader::new(self.rule.to_rule()?)
            .with_rule_string(self.rule.rule_string.clone())
            .with_neighbourhood(self.neighbourhood.clone())
            .with_out_of_bound(self.out_of_bound_value.clone().unwrap_or_default()))
    }

    /// Generate the shader source.
    pub fn to_glsl(&self) -> Result<String, GenerateError> {
        Ok(self.to_shader()?.to_glsl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFE_CONFIG: &str = r#"{
        "rule": { "ruleFormat": "life", "ruleString": "B3/S23", "birth": [3], "survival": [2, 3] },
        "neighbourhood": [[-1, 0, 0], [1, 0, 0], [0, 0.5, 0]],
        "outOfBoundValue": "wrap"
    }"#;

    #[test]
    fn test_descriptor_keeps_params() {
        let descriptor =
            RuleDescriptor::from_json(r#"{"ruleFormat": "vote", "ruleString": "V5-9", "vote": [5, 6]}"#)
                .unwrap();
        assert_eq!(descriptor.rule_format, "vote");
        assert_eq!(descriptor.rule_string, "V5-9");
        assert_eq!(descriptor.params["vote"], serde_json::json!([5, 6]));
        assert!(!descriptor.params.contains_key("ruleFormat"));
    }

    #[test]
    fn test_descriptor_unknown_format() {
        let descriptor = RuleDescriptor::from_json(r#"{"ruleFormat": "unknown"}"#).unwrap();
        let err = descriptor.to_rule().unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedRuleFormat(ref tag) if tag == "unknown"));
    }

    #[test]
    fn test_descriptor_from_rule() {
        let rule = Rule::cyclic(4, 2, false);
        let descriptor = RuleDescriptor::from_rule(&rule, "R1/T2/C4/NM");
        assert_eq!(descriptor.rule_format, "cyclic");
        assert_eq!(descriptor.to_rule().unwrap(), rule);
    }

    #[test]
    fn test_config_from_json() {
        let config = ShaderConfig::from_json(LIFE_CONFIG).unwrap();
        assert_eq!(config.neighbourhood.len(), 3);
        assert_eq!(config.neighbourhood[2], Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(config.out_of_bound_value, Some(OutOfBound::Wrap));

        let glsl = config.to_glsl().unwrap();
        assert!(glsl.contains(" * Rule : B3/S23\n"));
        assert!(glsl.contains("vec3(0, 0.5, 0)"));
        assert!(glsl.contains("mod((currentPos + add), iVolumeSize)"));
    }

    #[test]
    fn test_config_defaults() {
        let config = ShaderConfig::from_json(r#"{"rule": {"ruleFormat": "vote"}}"#).unwrap();
        assert!(config.neighbourhood.is_empty());
        assert!(config.out_of_bound_value.is_none());
        let shader = config.to_shader().unwrap();
        assert_eq!(shader.out_of_bound(), &OutOfBound::default());
    }

    #[test]
    fn test_config_invalid_json() {
        let err = ShaderConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_config_save_and_load() {
        let config = ShaderConfig::from_json(LIFE_CONFIG).unwrap();
        let path = std::env::temp_dir().join(format!(
            "voxel-automata-shader-config-{}.json",
            std::process::id()
        ));
        config.save(&path).unwrap();
        let loaded = ShaderConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShaderConfig::load("/nonexistent/voxel-automata-shader.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
