//! # voxel-automata-shader
//!
//! Compile 3D cellular automaton rules into MagicaVoxel voxel shaders.
//!
//! Given a rule (family, birth/survival counts, state count...), a
//! neighbourhood and an out-of-bound policy, this crate emits the GLSL that
//! MagicaVoxel runs once per voxel per iteration (`xs -n 20 shadername`). The
//! automaton is never simulated here; the output is plain source text.
//!
//! ## Quick Start
//!
//! ```
//! use voxel_automata_shader::prelude::*;
//!
//! // 3D life variant 4/4 on a Moore neighbourhood, toroidal volume
//! let glsl = VoxelShader::new(Rule::life(vec![4], vec![4]))
//!     .with_rule_string("B4/S4")
//!     .with_neighbourhood(moore(1))
//!     .with_out_of_bound(OutOfBound::Wrap)
//!     .to_glsl();
//!
//! assert!(glsl.contains("int process(const in int currentValue, const in vec3 position)"));
//! ```
//!
//! Descriptors coming from a rule-string parser, or from a JSON file, go
//! through [`generate`] or [`ShaderConfig`]:
//!
//! ```
//! use voxel_automata_shader::{generate, RuleDescriptor};
//!
//! let rule = RuleDescriptor::from_json(
//!     r#"{"ruleFormat": "cyclic", "ruleString": "R1/T3/C3", "stateCount": 3, "threshold": 3}"#,
//! ).unwrap();
//! let glsl = generate(&rule, &[], None).unwrap();
//! assert!(glsl.contains("if (sum >= 3) {"));
//! ```
//!
//! ## Rule Families
//!
//! | Format | Rule |
//! |--------|------|
//! | `life`, `extended-life` | [`Rule::Life`], [`Rule::ExtendedLife`] |
//! | `extended-stochastic` | [`Rule::ExtendedStochastic`] |
//! | `generations`, `extended-generations` | [`Rule::Generations`], [`Rule::ExtendedGenerations`] |
//! | `vote` | [`Rule::Vote`] |
//! | `luky`, `nluky` | [`Rule::Luky`], [`Rule::Nluky`] |
//! | `cyclic` | [`Rule::Cyclic`] |
//!
//! ## Host Contract
//!
//! The emitted code reads `iVolumeSize`, `iArgs[0]` and `iRand` and calls
//! the built-in `voxel(vec3)`. MagicaVoxel provides them; they are only
//! documented in the generated comments, see [`shader_utils::HOST_API_GLSL`].

pub mod boundary;
pub mod config;
pub mod error;
pub mod format;
pub mod neighbourhood;
pub mod probability;
pub mod range;
pub mod rules;
mod shader;
pub mod shader_utils;

use tracing::debug;

pub use boundary::OutOfBound;
pub use config::{RuleDescriptor, ShaderConfig};
pub use error::{ConfigError, GenerateError};
pub use glam::Vec3;
pub use rules::{Rule, RuleFormat};
pub use shader::VoxelShader;

/// Generate the voxel shader for a rule descriptor.
///
/// `out_of_bound_value` defaults to a `0` sentinel. Fails only when the
/// descriptor's format tag is unknown (or its parameters have the wrong
/// JSON shape), in which case no text is produced.
pub fn generate(
    rule: &RuleDescriptor,
    neighbourhood: &[Vec3],
    out_of_bound_value: Option<&OutOfBound>,
) -> Result<String, GenerateError> {
    let typed = rule.to_rule().map_err(|e| {
        debug!(rule_format = %rule.rule_format, error = %e, "rejected rule descriptor");
        e
    })?;

    Ok(VoxelShader::new(typed)
        .with_rule_string(rule.rule_string.clone())
        .with_neighbourhood(neighbourhood)
        .with_out_of_bound(out_of_bound_value.cloned().unwrap_or_default())
        .to_glsl())
}

/// Convenient re-exports for common usage.
///
/// ```
/// use voxel_automata_shader::prelude::*;
/// ```
pub mod prelude {
    pub use crate::boundary::OutOfBound;
    pub use crate::config::{RuleDescriptor, ShaderConfig};
    pub use crate::error::{ConfigError, GenerateError};
    pub use crate::neighbourhood::{moore, von_neumann};
    pub use crate::rules::{
        CyclicParams, GenerationsParams, LifeParams, LukyParams, NlukyParams, Rule, RuleFormat,
        StochasticParams, VoteParams,
    };
    pub use crate::shader::VoxelShader;
    pub use crate::{generate, Vec3};
}
