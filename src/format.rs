//! Numeric literals for emitted GLSL.

use std::fmt::Display;

/// Render a number as GLSL literal text.
///
/// Integer-valued inputs lose their fractional part (`2`, `-3`, `0`), anything
/// else keeps its shortest round-trip decimal form (`0.5`, `0.125`).
///
/// ```
/// use voxel_automata_shader::format::print_float;
///
/// assert_eq!(print_float(2.0_f32), "2");
/// assert_eq!(print_float(0.5_f64), "0.5");
/// assert_eq!(print_float(-3), "-3");
/// ```
pub fn print_float<T>(value: T) -> String
where
    T: Into<f64> + Display + Copy,
{
    let v: f64 = value.into();
    if v.is_finite() && v.fract() == 0.0 {
        // -0.0 would otherwise print as "-0"
        if v == 0.0 {
            return "0".to_string();
        }
        format!("{:.0}", v)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(print_float(2.0_f64), "2");
        assert_eq!(print_float(-3.0_f64), "-3");
        assert_eq!(print_float(0.0_f64), "0");
        assert_eq!(print_float(-0.0_f32), "0");
        assert_eq!(print_float(26_i32), "26");
        assert_eq!(print_float(150.0_f32), "150");
    }

    #[test]
    fn test_fractions_keep_precision() {
        assert_eq!(print_float(0.5_f64), "0.5");
        assert_eq!(print_float(-1.5_f32), "-1.5");
        assert_eq!(print_float(0.1_f32), "0.1");
        assert_eq!(print_float(0.123456789_f64), "0.123456789");
    }
}
