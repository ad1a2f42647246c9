use ohmage_parser::{Configuration, ResistorSpec};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Resistor {
    pub name: String,
    /// Resistance in ohms. No range validation: non-positive values are
    /// accepted, and a zero-valued parallel resistor drives the equivalent
    /// resistance to the unbounded sentinel.
    pub resistance: f64,
    pub config: Configuration,
}

impl Resistor {
    pub fn new(name: impl Into<String>, resistance: f64, config: Configuration) -> Self {
        Self {
            name: name.into(),
            resistance,
            config,
        }
    }

    pub fn from_spec(spec: &ResistorSpec) -> Self {
        Self {
            name: spec.name.clone(),
            resistance: spec.resistance.get_value(),
            config: spec.config,
        }
    }
}
