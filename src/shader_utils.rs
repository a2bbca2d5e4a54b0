//! Fixed GLSL blocks shared by every generated shader.
//!
//! MagicaVoxel voxel shaders get their inputs from the host, so the uniforms
//! are only documented in comments. The blocks here are emitted verbatim.
//!
//! # Host inputs
//!
//! - `iVolumeSize: vec3` - volume size [1-126]
//! - `iColorIndex: float` - current color index [1-255]
//! - `iMirror`, `iAxis: vec3` - mirror and axis modes
//! - `iFrame`, `iNumFrames`, `iIter: float` - frame counters
//! - `iRand: vec4` - random numbers, re-rolled by the host
//! - `iArgs: float[8]` - user arguments
//! - `voxel(vec3) -> float` - built-in sampler
//!
//! # Emitted helpers
//!
//! - `rand(vec3 co, float seed) -> float` - positional pseudo-random in [0, 1)
//! - `map(vec3 v) -> float` - entry point called once per voxel

/// Target named in the header comment.
pub const SHADER_TARGET: &str = "Voxel Shader for MagicaVoxel 0.98.2";

/// Console usage, host uniforms and built-in functions.
pub const HOST_API_GLSL: &str = r#"// console command
// 'xs -n [iterations] shadername' : e.g. 'xs -n 20 shadername'

// shader inputs
// uniform vec3    iVolumeSize;    // volume size [1-126]
// uniform float   iColorIndex;    // current color index [1-255]
// uniform vec3    iMirror;        // current mirror mode [0-1]
// uniform vec3    iAxis;          // current axis mode [0-1]
// uniform float   iFrame;         // current frame
// uniform float   iNumFrames;     // total number of frames
// uniform float   iIter;          // current frame
// uniform vec4    iRand;          // random numbers
// uniform float   iArgs[8];       // user args

// built-in functions
// float voxel(vec3 v);"#;

/// Positional pseudo-random function, seeded by `iRand.x`.
///
/// The formula is part of the automaton's behavior: changing a single
/// constant changes which voxels fire for a given host seed.
pub const RANDOM_GLSL: &str = r#"float rand(vec3 co, float seed) {
  co = co + vec3(fract(sin(dot(vec2(iRand.x * 4. * 5.9898, seed * 78.5453), vec2(12.9898,78.233))) * 43758.5453));
  return fract(sin(dot(co.xy + vec2(length(co.yz) * 24.0316), vec2(12.9898,78.233)) + dot(co.yz + vec2(length(co.zx) * 24.0316), vec2(12.9898,78.233)) + dot(co.zx + vec2(length(co.xy) * 24.0316), vec2(12.9898,78.233))) * 43758.5453);
}"#;

/// Entry point: read the voxel, run `process`, hand the state back.
pub const MAP_GLSL: &str = r#"float map(vec3 v) {
  int currentValue = int(voxel(v));
  return float(process(currentValue, v));
}"#;

/// Header comment naming the tool, the rule and the boundary policy.
pub fn header_comment(rule_format: &str, rule_string: &str, out_of_bound: &str) -> String {
    [
        "/**".to_string(),
        format!(
            " * {} generated by {} {}",
            SHADER_TARGET,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ),
        " * ".to_string(),
        format!(" * Rule format : {}", rule_format),
        format!(" * Rule : {}", rule_string),
        format!(" * Out of bound value : {}", out_of_bound),
        " */".to_string(),
    ]
    .join("\n")
}
