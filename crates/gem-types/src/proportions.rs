use serde::{Deserialize, Serialize};

/// Proportion parameters for a round brilliant cut, in girdle-radius units.
///
/// Immutable input to the geometry builder. Finite-but-degenerate values
/// (e.g. `table_ratio >= 1`) are clamped by the builder; NaN/infinity is a
/// precondition violation and is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionSpec {
    /// Table diameter as a fraction of the girdle diameter, in (0, 1).
    pub table_ratio: f64,
    /// Crown height above the girdle plane.
    pub crown_height: f64,
    /// Girdle radius; the overall scale of the stone.
    pub girdle_radius: f64,
    /// Pavilion depth below the girdle plane.
    pub pavilion_depth: f64,
    /// Culet facet scale. Carried for the scene adapter; the fixed topology
    /// always ends in a culet point.
    pub culet_size: f64,
}

impl ProportionSpec {
    pub fn new(
        table_ratio: f64,
        crown_height: f64,
        girdle_radius: f64,
        pavilion_depth: f64,
        culet_size: f64,
    ) -> Self {
        Self {
            table_ratio,
            crown_height,
            girdle_radius,
            pavilion_depth,
            culet_size,
        }
    }

    /// Name/value pairs in declaration order, for finiteness checks and
    /// diagnostics.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("table_ratio", self.table_ratio),
            ("crown_height", self.crown_height),
            ("girdle_radius", self.girdle_radius),
            ("pavilion_depth", self.pavilion_depth),
            ("culet_size", self.culet_size),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }
}

impl Default for ProportionSpec {
    /// An ideal-cut reference stone at unit girdle radius.
    fn default() -> Self {
        Self {
            table_ratio: 0.56,
            crown_height: 0.16,
            girdle_radius: 1.0,
            pavilion_depth: 0.43,
            culet_size: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_finite() {
        assert!(ProportionSpec::default().is_finite());
    }

    #[test]
    fn test_nan_detected() {
        let mut spec = ProportionSpec::default();
        spec.pavilion_depth = f64::NAN;
        assert!(!spec.is_finite());
        spec.pavilion_depth = f64::INFINITY;
        assert!(!spec.is_finite());
    }
}
