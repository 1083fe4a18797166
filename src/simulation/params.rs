use serde::{Deserialize, Serialize};

/// Field configuration, supplied at dish construction and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Side length of the square simulation field.
    pub field_size: f64,
    /// Light falloff constant: intensity is `1 / (1 + d / light_falloff)`
    /// at distance `d` from the field center.
    pub light_falloff: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            field_size: 1000.,
            light_falloff: 200.,
        }
    }
}
