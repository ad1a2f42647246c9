pub mod chart;
pub mod term;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ohmage_circuit::chart::{CHART_TITLE, ChartSink, X_AXIS_LABEL, Y_AXIS_LABEL};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::tui::chart::VoltageChart;

/// Full-screen bar chart; closes on any key press.
pub struct TuiChart;

impl ChartSink for TuiChart {
    fn render(&mut self, voltages: &[(String, f64)]) -> io::Result<()> {
        let mut terminal = term::setup_terminal()?;
        let drawn = draw_until_key(&mut terminal, voltages);
        let restored = term::restore_terminal();
        drawn.and(restored)
    }
}

fn draw_until_key(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    voltages: &[(String, f64)],
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            VoltageChart {
                title: CHART_TITLE,
                x_label: X_AXIS_LABEL,
                y_label: Y_AXIS_LABEL,
                voltages,
            }
            .render(f, f.area());
        })?;

        // redraw on resize; any key press closes the chart
        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
