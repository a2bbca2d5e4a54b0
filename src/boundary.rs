//! Out-of-bound policies and the `getVoxel` lookup they produce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a neighbour read outside the volume sees.
///
/// Deserializes from `"wrap"`, `"clamp"`, or any other string or number,
/// which becomes a literal sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOutOfBound", into = "String")]
pub enum OutOfBound {
    /// Toroidal volume: positions are taken modulo the volume size.
    Wrap,
    /// Positions are clamped to the nearest voxel inside the volume.
    Clamp,
    /// Reads outside the volume return this GLSL expression verbatim.
    Value(String),
}

impl Default for OutOfBound {
    fn default() -> Self {
        OutOfBound::Value("0".to_string())
    }
}

impl From<&str> for OutOfBound {
    fn from(tag: &str) -> Self {
        match tag {
            "wrap" => OutOfBound::Wrap,
            "clamp" => OutOfBound::Clamp,
            other => OutOfBound::Value(other.to_string()),
        }
    }
}

impl From<i32> for OutOfBound {
    fn from(value: i32) -> Self {
        OutOfBound::Value(value.to_string())
    }
}

impl fmt::Display for OutOfBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfBound::Wrap => f.write_str("wrap"),
            OutOfBound::Clamp => f.write_str("clamp"),
            OutOfBound::Value(value) => f.write_str(value),
        }
    }
}

impl From<OutOfBound> for String {
    fn from(policy: OutOfBound) -> Self {
        policy.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOutOfBound {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawOutOfBound> for OutOfBound {
    fn from(raw: RawOutOfBound) -> Self {
        match raw {
            RawOutOfBound::Text(text) => OutOfBound::from(text.as_str()),
            RawOutOfBound::Number(number) => OutOfBound::Value(number.to_string()),
        }
    }
}

impl OutOfBound {
    /// Emit `int getVoxel(const in vec3 currentPos, const in vec3 add)`.
    pub fn to_glsl(&self) -> String {
        match self {
            OutOfBound::Wrap => [
                "int getVoxel(const in vec3 currentPos, const in vec3 add) {",
                "  vec3 voxelPos = mod((currentPos + add), iVolumeSize);",
                "  return int(voxel(voxelPos));",
                "}",
            ]
            .join("\n"),
            OutOfBound::Clamp => [
                "int getVoxel(const in vec3 currentPos, const in vec3 add) {",
                "  vec3 voxelPos = (currentPos + add) ;",
                "  voxelPos = clamp(voxelPos, vec3(0.), iVolumeSize - vec3(1.));",
                "  return int(voxel(voxelPos));",
                "}",
            ]
            .join("\n"),
            OutOfBound::Value(value) => [
                "int getVoxel(const in vec3 currentPos, const in vec3 add) {".to_string(),
                "  vec3 voxelPos = (currentPos + add) ;".to_string(),
                "  if(voxelPos.x < 0. || voxelPos.y < 0. || voxelPos.z < 0. || voxelPos.x >= iVolumeSize.x || voxelPos.y >= iVolumeSize.y || voxelPos.z >= iVolumeSize.z) {".to_string(),
                format!("    return {};", value),
                "  } else {".to_string(),
                "    return int(voxel(voxelPos));".to_string(),
                "  }".to_string(),
                "}".to_string(),
            ]
            .join("\n"),
        }
    }
}
