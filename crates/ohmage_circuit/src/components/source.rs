use ohmage_parser::VoltageSourceSpec;
use serde::Serialize;

/// Ideal source supplying a fixed voltage.
#[derive(Debug, Clone, Serialize)]
pub struct VoltageSource {
    pub name: String,
    /// Voltage in volts.
    pub voltage: f64,
}

impl VoltageSource {
    pub fn new(name: impl Into<String>, voltage: f64) -> Self {
        Self {
            name: name.into(),
            voltage,
        }
    }

    pub fn from_spec(spec: &VoltageSourceSpec) -> Self {
        Self {
            name: spec.name.clone(),
            voltage: spec.voltage.get_value(),
        }
    }
}
