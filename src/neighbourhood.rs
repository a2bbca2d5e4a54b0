//! Neighbourhood sampling routines.
//!
//! A neighbourhood is an ordered list of offsets relative to the current
//! voxel. Offsets are neither de-duplicated nor validated: a repeated offset
//! is sampled, and counted, twice.

use glam::Vec3;

use crate::format::print_float;

/// Moore neighbourhood: every offset within Chebyshev distance `range`.
///
/// The origin is excluded. Offsets are ordered by z, then y, then x.
///
/// ```
/// use voxel_automata_shader::neighbourhood::moore;
///
/// assert_eq!(moore(1).len(), 26);
/// ```
pub fn moore(range: u32) -> Vec<Vec3> {
    offsets_within(range, |x, y, z| (x.abs().max(y.abs()).max(z.abs()) as u32) <= range)
}

/// Von Neumann neighbourhood: every offset within Manhattan distance `range`.
///
/// The origin is excluded. Offsets are ordered by z, then y, then x.
pub fn von_neumann(range: u32) -> Vec<Vec3> {
    offsets_within(range, |x, y, z| ((x.abs() + y.abs() + z.abs()) as u32) <= range)
}

fn offsets_within(range: u32, keep: impl Fn(i32, i32, i32) -> bool) -> Vec<Vec3> {
    let r = range as i32;
    let mut offsets = Vec::new();
    for z in -r..=r {
        for y in -r..=r {
            for x in -r..=r {
                if (x, y, z) != (0, 0, 0) && keep(x, y, z) {
                    offsets.push(Vec3::new(x as f32, y as f32, z as f32));
                }
            }
        }
    }
    offsets
}

fn offset_literal(offset: Vec3) -> String {
    format!(
        "vec3({}, {}, {})",
        print_float(offset.x),
        print_float(offset.y),
        print_float(offset.z)
    )
}

fn sum_routine(signature: &str, neighbourhood: &[Vec3], test: &str) -> String {
    let mut lines = vec![
        format!("{} {{", signature),
        "  int sum = 0;".to_string(),
        String::new(),
    ];

    lines.extend(neighbourhood.iter().map(|&offset| {
        format!(
            "  sum += getVoxel(currentPos, {}) {} ? 1 : 0;",
            offset_literal(offset),
            test
        )
    }));

    lines.extend(["".to_string(), "  return sum;".to_string(), "}".to_string()]);
    lines.join("\n")
}

/// Emit `getNeighbourhood`, counting neighbours in any nonzero state.
pub fn get_neighbourhood_glsl(neighbourhood: &[Vec3]) -> String {
    sum_routine(
        "int getNeighbourhood (const in vec3 currentPos)",
        neighbourhood,
        "> 0",
    )
}

/// Emit `getNeighbourhoodCond`, counting neighbours exactly in `desiredValue`.
pub fn get_neighbourhood_cond_glsl(neighbourhood: &[Vec3]) -> String {
    sum_routine(
        "int getNeighbourhoodCond (const in vec3 currentPos, const in int desiredValue)",
        neighbourhood,
        "== desiredValue",
    )
}
