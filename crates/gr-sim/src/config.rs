//! Scenario configuration value.

use gr_city::TrafficLevel;
use gr_core::Coord;
use gr_learn::Hyperparameters;

/// Everything needed to rebuild one routing scenario.
///
/// With the `serde` feature this deserializes from JSON; every field except
/// the dimensions and the two endpoints may be omitted.
///
/// ```json
/// {
///   "name": "downtown",
///   "width": 12, "height": 10,
///   "start": { "x": 1, "y": 1 },
///   "destination": { "x": 9, "y": 7 },
///   "traffic": "medium",
///   "seed": 7,
///   "hyperparameters": { "episodes": 2000 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Label used in logs and output rows.
    #[cfg_attr(feature = "serde", serde(default = "default_name"))]
    pub name:            String,
    pub width:           u32,
    pub height:          u32,
    pub start:           Coord,
    pub destination:     Coord,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traffic:         TrafficLevel,
    /// Root seed; traffic placement and training draw from separate child
    /// streams of it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed:            u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hyperparameters: Hyperparameters,
}

#[cfg(feature = "serde")]
fn default_name() -> String {
    "scenario".to_owned()
}

impl ScenarioConfig {
    /// A traffic-free scenario with seed 0 and default hyperparameters.
    pub fn new(
        name:        impl Into<String>,
        width:       u32,
        height:      u32,
        start:       Coord,
        destination: Coord,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            start,
            destination,
            traffic:         TrafficLevel::None,
            seed:            0,
            hyperparameters: Hyperparameters::default(),
        }
    }
}
