use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical event classification derived from an EPCIS business step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Identifiers assigned to new material (also the fallback for unknown steps)
    Commissioning,
    /// Inputs consumed to produce new output (manufacturing)
    Transformation,
    /// Items packed into a larger unit
    Packing,
    /// Material leaving a location
    Shipping,
    /// Material arriving at a location
    Receiving,
    /// Inspection, storage, or retail sighting with no change to the material
    Observation,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Commissioning,
        EventType::Transformation,
        EventType::Packing,
        EventType::Shipping,
        EventType::Receiving,
        EventType::Observation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Commissioning => "commissioning",
            EventType::Transformation => "transformation",
            EventType::Packing => "packing",
            EventType::Shipping => "shipping",
            EventType::Receiving => "receiving",
            EventType::Observation => "observation",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
