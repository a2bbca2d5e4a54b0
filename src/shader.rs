//! Assembly of the complete voxel shader.

use glam::Vec3;
use tracing::debug;

use crate::boundary::OutOfBound;
use crate::rules::Rule;
use crate::shader_utils::{header_comment, HOST_API_GLSL, MAP_GLSL};

/// Builder for a MagicaVoxel voxel shader running one automaton step.
///
/// # Example
///
/// ```
/// use voxel_automata_shader::prelude::*;
///
/// let glsl = VoxelShader::new(Rule::life(vec![4], vec![4]))
///     .with_rule_string("4/4")
///     .with_neighbourhood(moore(1))
///     .with_out_of_bound(OutOfBound::Wrap)
///     .to_glsl();
///
/// assert!(glsl.contains("float map(vec3 v)"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelShader {
    rule: Rule,
    rule_string: String,
    neighbourhood: Vec<Vec3>,
    out_of_bound: OutOfBound,
}

impl VoxelShader {
    /// Shader for `rule` with an empty neighbourhood and a `0` sentinel.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            rule_string: String::new(),
            neighbourhood: Vec::new(),
            out_of_bound: OutOfBound::default(),
        }
    }

    /// Rule notation shown in the header comment.
    pub fn with_rule_string(mut self, rule_string: impl Into<String>) -> Self {
        self.rule_string = rule_string.into();
        self
    }

    /// Offsets sampled around each voxel, in emission order.
    pub fn with_neighbourhood(mut self, neighbourhood: impl Into<Vec<Vec3>>) -> Self {
        self.neighbourhood = neighbourhood.into();
        self
    }

    /// Policy for neighbour reads outside the volume.
    pub fn with_out_of_bound(mut self, out_of_bound: impl Into<OutOfBound>) -> Self {
        self.out_of_bound = out_of_bound.into();
        self
    }

    /// Get the neighbourhood offsets.
    pub fn neighbourhood(&self) -> &[Vec3] {
        &self.neighbourhood
    }

    /// Get the out-of-bound policy.
    pub fn out_of_bound(&self) -> &OutOfBound {
        &self.out_of_bound
    }

    /// Generate the shader source.
    ///
    /// Sections, separated by blank lines: header comment, host inputs,
    /// `getVoxel`, the rule's helpers and `process`, and the `map` entry point.
    pub fn to_glsl(&self) -> String {
        let format = self.rule.format();
        let glsl = [
            header_comment(
                format.as_str(),
                &self.rule_string,
                &self.out_of_bound.to_string(),
            ),
            String::new(),
            HOST_API_GLSL.to_string(),
            String::new(),
            self.out_of_bound.to_glsl(),
            String::new(),
            self.rule.to_glsl(&self.neighbourhood),
            String::new(),
            MAP_GLSL.to_string(),
        ]
        .join("\n");

        debug!(
            rule_format = %format,
            neighbours = self.neighbourhood.len(),
            out_of_bound = %self.out_of_bound,
            bytes = glsl.len(),
            "generated voxel shader"
        );
        glsl
    }
}
