use ohmage_parser::{Configuration, Deck};
use serde::Serialize;

use crate::components::Component;
use crate::error::CircuitError;

/// Ordered sequence of components. Insertion order is preserved and is the
/// only structural relationship between components; there is no topology
/// graph.
#[derive(Debug, Default)]
pub struct Circuit {
    components: Vec<Component>,
}

/// Derived quantities for the whole circuit, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct OperatingPoint {
    pub total_resistance: f64,
    pub current: f64,
    pub voltages: Vec<(String, f64)>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a parsed deck into a circuit, preserving file order.
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            components: deck.elements.iter().map(Component::from_spec).collect(),
        }
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Equivalent resistance of the circuit: sum of series-tagged
    /// resistances plus the reciprocal-sum equivalent of the parallel
    /// bucket. A flat bucket-sum heuristic over tagged resistors, not
    /// topology-graph analysis.
    ///
    /// An empty parallel bucket contributes 0.0. A zero-valued parallel
    /// resistor, or a reciprocal sum of exactly zero, yields
    /// `f64::INFINITY` (unbounded resistance) instead of a division error.
    pub fn total_resistance(&self) -> f64 {
        let mut series_sum = 0.0;
        let mut reciprocal_sum = 0.0;
        let mut parallel_count = 0usize;
        let mut zero_valued = false;

        for component in &self.components {
            let Component::Resistor(r) = component else {
                continue;
            };
            match r.config {
                Configuration::Series => series_sum += r.resistance,
                Configuration::Parallel => {
                    parallel_count += 1;
                    if r.resistance == 0.0 {
                        zero_valued = true;
                    } else {
                        reciprocal_sum += r.resistance.recip();
                    }
                }
            }
        }

        let parallel_total = if parallel_count == 0 {
            0.0
        } else if zero_valued || reciprocal_sum == 0.0 {
            f64::INFINITY
        } else {
            reciprocal_sum.recip()
        };

        series_sum + parallel_total
    }

    /// Current through the circuit from the first voltage source in
    /// insertion order. When the equivalent resistance is not strictly
    /// positive the current is defined as 0.0 rather than an error.
    pub fn calculate_current(&self) -> Result<f64, CircuitError> {
        let source = self
            .components
            .iter()
            .find_map(|component| match component {
                Component::VoltageSource(v) => Some(v),
                _ => None,
            })
            .ok_or(CircuitError::NoVoltageSource)?;

        let total_resistance = self.total_resistance();
        if total_resistance > 0.0 {
            Ok(source.voltage / total_resistance)
        } else {
            Ok(0.0)
        }
    }

    /// Per-component (label, voltage) pairs in insertion order: a source
    /// contributes its own voltage, a resistor its Ohm's-law drop at the
    /// given current.
    pub fn component_voltages(&self, current: f64) -> Vec<(String, f64)> {
        self.components
            .iter()
            .map(|component| match component {
                Component::VoltageSource(v) => (v.name.clone(), v.voltage),
                Component::Resistor(r) => (r.name.clone(), current * r.resistance),
            })
            .collect()
    }

    pub fn operating_point(&self) -> Result<OperatingPoint, CircuitError> {
        let current = self.calculate_current()?;
        Ok(OperatingPoint {
            total_resistance: self.total_resistance(),
            current,
            voltages: self.component_voltages(current),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Resistor, VoltageSource};
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn series(name: &str, ohms: f64) -> Component {
        Component::Resistor(Resistor::new(name, ohms, Configuration::Series))
    }

    fn parallel(name: &str, ohms: f64) -> Component {
        Component::Resistor(Resistor::new(name, ohms, Configuration::Parallel))
    }

    fn source(name: &str, volts: f64) -> Component {
        Component::VoltageSource(VoltageSource::new(name, volts))
    }

    fn circuit_of(components: Vec<Component>) -> Circuit {
        let mut circuit = Circuit::new();
        for c in components {
            circuit.add_component(c);
        }
        circuit
    }

    #[test]
    fn series_resistors_add_directly() {
        let circuit = circuit_of(vec![
            series("R1", 1.0),
            series("R2", 2.5),
            series("R3", 10.0),
        ]);
        assert_relative_eq!(circuit.total_resistance(), 13.5);
    }

    #[test]
    fn parallel_resistors_combine_reciprocally() {
        let circuit = circuit_of(vec![
            parallel("R1", 6.0),
            parallel("R2", 3.0),
            parallel("R3", 2.0),
        ]);
        // 1 / (1/6 + 1/3 + 1/2) = 1
        assert_relative_eq!(circuit.total_resistance(), 1.0);
    }

    #[rstest]
    // VoltageSource(10), R(5, series), R(5, series)
    #[case(vec![source("V1", 10.0), series("R1", 5.0), series("R2", 5.0)], 10.0, 1.0)]
    // VoltageSource(12), R(4, parallel), R(4, parallel)
    #[case(vec![source("V1", 12.0), parallel("R1", 4.0), parallel("R2", 4.0)], 2.0, 6.0)]
    // VoltageSource(9), R(3, series), R(6, parallel), R(6, parallel)
    #[case(
        vec![source("V1", 9.0), series("R1", 3.0), parallel("R2", 6.0), parallel("R3", 6.0)],
        6.0,
        1.5
    )]
    fn computes_resistance_and_current(
        #[case] components: Vec<Component>,
        #[case] expected_resistance: f64,
        #[case] expected_current: f64,
    ) {
        let circuit = circuit_of(components);
        assert_relative_eq!(circuit.total_resistance(), expected_resistance);
        assert_relative_eq!(circuit.calculate_current().unwrap(), expected_current);
    }

    #[test]
    fn empty_circuit_has_zero_resistance_and_no_source() {
        let circuit = Circuit::new();
        assert_eq!(circuit.total_resistance(), 0.0);
        assert_eq!(
            circuit.calculate_current(),
            Err(CircuitError::NoVoltageSource)
        );
    }

    #[test]
    fn no_source_error_display() {
        insta::assert_snapshot!(
            CircuitError::NoVoltageSource.to_string(),
            @"no voltage source in the circuit"
        );
    }

    #[test]
    fn source_with_zero_resistance_yields_zero_current() {
        let circuit = circuit_of(vec![source("V1", 10.0)]);
        assert_eq!(circuit.total_resistance(), 0.0);
        assert_eq!(circuit.calculate_current().unwrap(), 0.0);
    }

    #[test]
    fn zero_valued_parallel_resistor_is_unbounded() {
        let circuit = circuit_of(vec![source("V1", 10.0), parallel("R1", 0.0)]);
        assert_eq!(circuit.total_resistance(), f64::INFINITY);
        assert_eq!(circuit.calculate_current().unwrap(), 0.0);
    }

    #[test]
    fn only_the_first_source_is_consulted() {
        let circuit = circuit_of(vec![
            source("V1", 10.0),
            source("V2", 100.0),
            series("R1", 5.0),
        ]);
        assert_relative_eq!(circuit.calculate_current().unwrap(), 2.0);
    }

    #[test]
    fn recalculation_is_idempotent_and_appends_are_allowed_after_it() {
        let mut circuit = circuit_of(vec![source("V1", 10.0), series("R1", 5.0)]);
        let first = circuit.calculate_current().unwrap();
        assert_eq!(circuit.calculate_current().unwrap(), first);
        assert_eq!(circuit.total_resistance(), circuit.total_resistance());

        circuit.add_component(series("R2", 5.0));
        assert_relative_eq!(circuit.calculate_current().unwrap(), 1.0);
    }

    #[test]
    fn component_voltages_follow_insertion_order() {
        let circuit = circuit_of(vec![
            source("V1", 10.0),
            series("R1", 5.0),
            series("R2", 5.0),
        ]);
        let current = circuit.calculate_current().unwrap();
        let voltages = circuit.component_voltages(current);
        assert_eq!(
            voltages,
            vec![
                ("V1".to_string(), 10.0),
                ("R1".to_string(), 5.0),
                ("R2".to_string(), 5.0),
            ]
        );
    }

    #[test]
    fn operating_point_debug_output() {
        let circuit = circuit_of(vec![source("V1", 10.0), series("R1", 10.0)]);
        let op = circuit.operating_point().unwrap();
        insta::assert_debug_snapshot!(op, @r#"
        OperatingPoint {
            total_resistance: 10.0,
            current: 1.0,
            voltages: [
                (
                    "V1",
                    10.0,
                ),
                (
                    "R1",
                    10.0,
                ),
            ],
        }
        "#);
    }

    #[test]
    fn operating_point_serializes_to_json() {
        let circuit = circuit_of(vec![source("V1", 12.0), parallel("R1", 4.0)]);
        let op = circuit.operating_point().unwrap();
        let json = serde_json::to_value(&op).expect("serializes");
        assert_eq!(json["total_resistance"], 4.0);
        assert_eq!(json["current"], 3.0);
        assert_eq!(json["voltages"][1][0], "R1");
    }
}
