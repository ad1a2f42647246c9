mod resistor;
mod source;

pub use resistor::Resistor;
pub use source::VoltageSource;

use ohmage_parser::ElementSpec;
use serde::Serialize;

/// A circuit component. Partitioning and the source scan pattern-match on
/// the variant instead of inspecting runtime types.
#[derive(Debug, Clone, Serialize)]
pub enum Component {
    Resistor(Resistor),
    VoltageSource(VoltageSource),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Resistor(r) => &r.name,
            Component::VoltageSource(v) => &v.name,
        }
    }

    pub fn from_spec(spec: &ElementSpec) -> Self {
        match spec {
            ElementSpec::Resistor(r) => Component::Resistor(Resistor::from_spec(r)),
            ElementSpec::VoltageSource(v) => {
                Component::VoltageSource(VoltageSource::from_spec(v))
            }
        }
    }
}
