use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use ohmage_circuit::{Circuit, Component, Configuration, Resistor, VoltageSource};

/// Interactive driver: prompts for voltage sources, then resistors, and
/// builds the circuit in input order. Components are named `V1..Vn` /
/// `R1..Rn` so chart labels stay distinct. Malformed input fails the
/// driver; there is no validation-and-retry layer.
pub fn run_prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Circuit> {
    let mut circuit = Circuit::new();

    let num_sources: usize = ask(input, out, "Enter the number of voltage sources: ")?
        .parse()
        .context("the number of voltage sources must be a whole number")?;
    for i in 1..=num_sources {
        let line = ask(
            input,
            out,
            &format!("Enter the voltage for voltage source {i} (in volts): "),
        )?;
        let voltage: f64 = line
            .parse()
            .with_context(|| format!("invalid voltage '{line}'"))?;
        circuit.add_component(Component::VoltageSource(VoltageSource::new(
            format!("V{i}"),
            voltage,
        )));
    }

    let num_resistors: usize = ask(input, out, "Enter the number of resistors: ")?
        .parse()
        .context("the number of resistors must be a whole number")?;
    for i in 1..=num_resistors {
        let line = ask(
            input,
            out,
            &format!("Enter the resistance for resistor {i} (in ohms): "),
        )?;
        let resistance: f64 = line
            .parse()
            .with_context(|| format!("invalid resistance '{line}'"))?;
        let answer = ask(
            input,
            out,
            "Is this resistor in series or parallel? (Enter 'series' or 'parallel'): ",
        )?;
        let config: Configuration = answer.parse()?;
        circuit.add_component(Component::Resistor(Resistor::new(
            format!("R{i}"),
            resistance,
            config,
        )));
    }

    Ok(circuit)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> Result<(Circuit, String)> {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        let circuit = run_prompt(&mut input, &mut out)?;
        Ok((circuit, String::from_utf8(out).expect("prompts are utf-8")))
    }

    #[test]
    fn builds_the_scripted_circuit() {
        let (circuit, transcript) = run("1\n10\n2\n5\nseries\n5\nSeries\n").expect("prompt run");

        assert_eq!(circuit.components().len(), 3);
        assert_eq!(circuit.total_resistance(), 10.0);
        assert_eq!(circuit.calculate_current().unwrap(), 1.0);

        assert!(transcript.contains("Enter the number of voltage sources: "));
        assert!(transcript.contains("Enter the voltage for voltage source 1 (in volts): "));
        assert!(transcript.contains("Enter the resistance for resistor 2 (in ohms): "));
        assert!(
            transcript
                .contains("Is this resistor in series or parallel? (Enter 'series' or 'parallel'): ")
        );
    }

    #[test]
    fn zero_counts_build_an_empty_circuit() {
        let (circuit, _) = run("0\n0\n").expect("prompt run");
        assert!(circuit.components().is_empty());
    }

    #[test]
    fn answers_are_trimmed_and_case_insensitive() {
        let (circuit, _) = run("0\n1\n4\n  PARALLEL \n").expect("prompt run");
        assert_eq!(circuit.total_resistance(), 4.0);
    }

    #[test]
    fn unknown_configuration_fails_the_driver() {
        let err = run("0\n1\n4\ndiagonal\n").unwrap_err();
        assert!(err.to_string().contains("unknown configuration 'diagonal'"));
    }

    #[test]
    fn malformed_count_fails_the_driver() {
        let err = run("three\n").unwrap_err();
        assert!(
            err.to_string()
                .contains("the number of voltage sources must be a whole number")
        );
    }

    #[test]
    fn truncated_input_fails_the_driver() {
        let err = run("1\n").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
