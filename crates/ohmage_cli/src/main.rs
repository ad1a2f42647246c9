use std::fs;
use std::io::{self, IsTerminal};

use clap::Parser;
use ohmage_circuit::chart::ChartSink;
use ohmage_circuit::{Circuit, CircuitError};
use ohmage_parser::Span;

mod prompt;
mod sink;
mod tui;

#[derive(Parser, Debug)]
#[command(name = "ohmage_cli", about = "Ohmage DC circuit calculator", version)]
struct Args {
    /// Build the circuit from interactive prompts
    #[arg(long)]
    interactive: bool,

    /// Print the operating point as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the voltage bar chart
    #[arg(long)]
    no_chart: bool,

    /// Input circuit file
    #[arg(value_name = "CIRCUIT", required_unless_present = "interactive")]
    circuit: Option<String>,
}

fn main() {
    let args = Args::parse();

    let circuit = if args.interactive {
        let stdin = io::stdin();
        match prompt::run_prompt(&mut stdin.lock(), &mut io::stdout()) {
            Ok(circuit) => circuit,
            Err(e) => {
                eprintln!("Input error: {e:#}");
                std::process::exit(1);
            }
        }
    } else {
        let path = args.circuit.as_deref().unwrap_or_else(|| {
            eprintln!("Missing <circuit> argument");
            std::process::exit(1);
        });
        let input = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        });
        match ohmage_parser::parse(&input) {
            Ok(deck) => Circuit::from_deck(&deck),
            Err(e) => {
                eprintln!("Parse error: {}", e);
                if let Some(span) = e.error_span() {
                    eprintln!();
                    render_error_snippet(&input, span);
                }
                std::process::exit(2);
            }
        }
    };

    let op = match circuit.operating_point() {
        Ok(op) => op,
        Err(CircuitError::NoVoltageSource) => {
            // non-fatal: nothing current-dependent to report
            eprintln!("No voltage source in the circuit.");
            return;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&op) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode JSON: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Total Current in the Circuit: {} A", op.current);

    if args.no_chart {
        return;
    }

    let rendered = if io::stdout().is_terminal() {
        tui::TuiChart.render(&op.voltages)
    } else {
        sink::TextChart::new(io::stdout()).render(&op.voltages)
    };
    if let Err(e) = rendered {
        // try to gracefully restore terminal
        let _ = tui::term::restore_terminal();
        eprintln!("Chart error: {}", e);
        std::process::exit(1);
    }
}

fn render_error_snippet(src: &str, span: Span) {
    if span.start >= src.len() {
        return;
    }
    let line_start = src[..span.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = src[span.start..]
        .find('\n')
        .map(|i| span.start + i)
        .unwrap_or(src.len());
    let end = span.end.min(line_end.saturating_sub(1)).max(span.start);

    let line = &src[line_start..line_end];
    let col = src[line_start..span.start].chars().count();
    let width = src[span.start..=end].chars().count().max(1);
    let line_no = src[..line_start].chars().filter(|&c| c == '\n').count() + 1;

    eprintln!("{:>4} | {}", line_no, line);
    let underline = "~".repeat(width);
    eprintln!(
        "     | {:space$}\x1b[31m{}\x1b[0m",
        "",
        underline,
        space = col
    );
}
