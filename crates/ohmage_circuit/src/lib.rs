pub mod chart;
pub mod circuit;
pub mod components;
pub mod error;

pub use circuit::{Circuit, OperatingPoint};
pub use components::{Component, Resistor, VoltageSource};
pub use error::CircuitError;

// the parser owns the netlist vocabulary shared by both crates
pub use ohmage_parser::Configuration;
