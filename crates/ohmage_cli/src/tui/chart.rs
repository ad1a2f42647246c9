use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

/// Bar heights are quantized to this many steps of the largest value.
const BAR_RESOLUTION: f64 = 1000.0;

pub struct VoltageChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub voltages: &'a [(String, f64)],
}

impl VoltageChart<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let [y_label_row, chart_area, x_label_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(Paragraph::new(self.y_label), y_label_row);

        let max = self
            .voltages
            .iter()
            .map(|(_, v)| v.abs())
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);

        let bars: Vec<Bar> = self
            .voltages
            .iter()
            .map(|(name, voltage)| {
                let height = if max > 0.0 && voltage.is_finite() && *voltage > 0.0 {
                    ((voltage / max) * BAR_RESOLUTION).round() as u64
                } else {
                    // negative and non-finite voltages render as an empty
                    // bar; the text value still shows the real number
                    0
                };
                Bar::default()
                    .value(height)
                    .text_value(format!("{}V", format_si(*voltage)))
                    .label(Line::from(name.as_str()))
                    .style(Style::default().fg(Color::Blue))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title),
            )
            .bar_width(bar_width(chart_area, self.voltages.len()))
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars));
        f.render_widget(chart, chart_area);

        f.render_widget(Paragraph::new(self.x_label).centered(), x_label_row);
    }
}

fn bar_width(area: Rect, bars: usize) -> u16 {
    let bars = bars.max(1) as u16;
    let inner = area.width.saturating_sub(2);
    (inner.saturating_sub(bars - 1) / bars).clamp(3, 12)
}

pub fn format_si(x: f64) -> String {
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let ax = x.abs();
    if ax == 0.0 {
        return "0".to_string();
    }
    let (scale, prefix) = if ax >= 1e9 {
        (1e-9, "G")
    } else if ax >= 1e6 {
        (1e-6, "M")
    } else if ax >= 1e3 {
        (1e-3, "k")
    } else if ax >= 1.0 {
        (1.0, "")
    } else if ax >= 1e-3 {
        (1e3, "m")
    } else if ax >= 1e-6 {
        (1e6, "µ")
    } else if ax >= 1e-9 {
        (1e9, "n")
    } else {
        (1e12, "p")
    };
    format!("{:.3}{}", x * scale, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_si_magnitudes() {
        assert_eq!(format_si(0.0), "0");
        assert_eq!(format_si(5.0), "5.000");
        assert_eq!(format_si(1500.0), "1.500k");
        assert_eq!(format_si(2_000_000.0), "2.000M");
        assert_eq!(format_si(0.012), "12.000m");
        assert_eq!(format_si(-0.5), "-500.000m");
        assert_eq!(format_si(f64::INFINITY), "inf");
    }

    #[test]
    fn bar_width_shrinks_with_more_bars() {
        let area = Rect::new(0, 0, 42, 10);
        assert_eq!(bar_width(area, 3), 12);
        assert!(bar_width(area, 8) < bar_width(area, 3));
        assert_eq!(bar_width(area, 100), 3);
    }
}
