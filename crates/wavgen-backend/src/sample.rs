//! Sample values flowing from the generators to the writer.

/// Full-scale integer amplitude, 2^31 - 1.
pub const MAX_LEVEL: i32 = i32::MAX;

/// A single sample after generation or format conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// 32-bit integer domain.
    Int(i32),
    /// Normalised float domain, nominally `[-1.0, 1.0]`.
    Float(f32),
}

impl Sample {
    /// Integer view of the sample.
    pub fn as_i32(self) -> i32 {
        match self {
            Sample::Int(v) => v,
            Sample::Float(f) => (f as f64 * MAX_LEVEL as f64) as i32,
        }
    }

    /// Float view of the sample.
    pub fn as_f32(self) -> f32 {
        match self {
            Sample::Int(v) => int_to_float(v),
            Sample::Float(f) => f,
        }
    }
}

impl Default for Sample {
    fn default() -> Self {
        Sample::Int(0)
    }
}

/// Converts an integer sample to float by dividing by full scale.
pub fn int_to_float(value: i32) -> f32 {
    value as f32 / MAX_LEVEL as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale_maps_to_one() {
        assert_eq!(int_to_float(MAX_LEVEL), 1.0);
        assert_eq!(int_to_float(0), 0.0);
        assert!((int_to_float(-MAX_LEVEL) + 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_views() {
        assert_eq!(Sample::Int(7).as_i32(), 7);
        assert_eq!(Sample::Float(0.0).as_i32(), 0);
        assert_eq!(Sample::Float(0.5).as_f32(), 0.5);
    }
}
