use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitError {
    #[error("no voltage source in the circuit")]
    NoVoltageSource,
}
