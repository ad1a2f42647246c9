use std::io::{self, Write};

use ohmage_circuit::chart::{CHART_TITLE, ChartSink, X_AXIS_LABEL, Y_AXIS_LABEL};

const BAR_WIDTH: usize = 40;

/// Plain-text bar chart for non-interactive output: one row per component
/// with the voltage and a bar proportional to the largest magnitude.
pub struct TextChart<W: Write> {
    out: W,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ChartSink for TextChart<W> {
    fn render(&mut self, voltages: &[(String, f64)]) -> io::Result<()> {
        let label_width = voltages
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(X_AXIS_LABEL.len());
        let max = voltages
            .iter()
            .map(|(_, v)| v.abs())
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);

        writeln!(self.out, "{CHART_TITLE}")?;
        writeln!(self.out, "{:<label_width$}  {}", X_AXIS_LABEL, Y_AXIS_LABEL)?;
        for (name, voltage) in voltages {
            let bar_len = if max > 0.0 && voltage.is_finite() {
                ((voltage.abs() / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{:<label_width$}  {:>10.3}  {}",
                name,
                voltage,
                "█".repeat(bar_len)
            )?;
        }
        Ok(())
    }
}
