//! Output boundary: text rendering of trajectories.
//!
//! Produces a single line chart with labeled axes ("Time (h)" and
//! "H2 (% mass)") plus a summary block reporting the final yield and the
//! chosen parameters. Yield and concentration are printed to two decimals.

use crate::simulation::SimulationParameters;
use crate::trajectory::Trajectory;
use std::fmt::Write;

/// Chart title.
pub const TITLE: &str = "Hydrogen release kinetics";
/// Horizontal axis label.
pub const X_LABEL: &str = "Time (h)";
/// Vertical axis label.
pub const Y_LABEL: &str = "H2 (% mass)";
/// Legend entry for the yield series.
pub const LEGEND: &str = "H2 generation";

const MARKER: char = '•';
const GUTTER: usize = 10;

/// Chart canvas size in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle { width: 64, height: 16 }
    }
}

/// Formats an axis tick compactly: fixed notation in the usual range, scientific otherwise.
fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if (0.01..1000.0).contains(&magnitude) {
        format!("{:.2}", value)
    } else {
        format!("{:.2e}", value)
    }
}

/// Renders the trajectory as a text line chart.
///
/// The vertical axis spans zero to the largest yield (or 1 for a flat zero
/// curve); each column samples the interpolated yield at its time.
pub fn render_chart(trajectory: &Trajectory, style: ChartStyle) -> String {
    let width = style.width.max(2);
    let height = style.height.max(2);

    let t_max = trajectory.duration().unwrap_or(0.0);
    let y_peak = trajectory.yields().iter().copied().fold(0.0_f64, f64::max);
    let y_max = if y_peak > 0.0 { y_peak } else { 1.0 };

    let mut canvas = vec![vec![' '; width]; height];
    for col in 0..width {
        let t = (t_max * col as f64 / (width - 1) as f64).min(t_max);
        if let Some(y) = trajectory.yield_at(t) {
            let level = ((y / y_max).clamp(0.0, 1.0) * (height - 1) as f64).round() as usize;
            canvas[height - 1 - level][col] = MARKER;
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{:>gutter$}", Y_LABEL, gutter = GUTTER + Y_LABEL.len() / 2);

    for (row, cells) in canvas.iter().enumerate() {
        let label = if row == 0 {
            format_tick(y_max)
        } else if row == height / 2 {
            format_tick(y_max * (height - 1 - row) as f64 / (height - 1) as f64)
        } else {
            String::new()
        };
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{:>gutter$} │{}", label, line.trim_end(), gutter = GUTTER);
    }

    let _ = writeln!(out, "{:>gutter$} └{}", format_tick(0.0), "─".repeat(width), gutter = GUTTER);

    // Tick labels at start, middle and end of the time axis
    let mut ticks = vec![' '; width + 1];
    for (position, value) in [(0, 0.0), (width / 2, t_max / 2.0), (width, t_max)] {
        let text = format_tick(value);
        let start = position.saturating_sub(text.chars().count() / 2).min(width + 1 - text.chars().count().min(width + 1));
        for (offset, ch) in text.chars().enumerate() {
            if let Some(cell) = ticks.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }
    let tick_line: String = ticks.iter().collect();
    let _ = writeln!(out, "{:>gutter$}  {}", "", tick_line.trim_end(), gutter = GUTTER);
    let _ = writeln!(out, "{:>pad$}", X_LABEL, pad = GUTTER + 2 + width / 2 + X_LABEL.len() / 2);
    let _ = writeln!(out, "{:>gutter$}  {} {}", "", MARKER, LEGEND, gutter = GUTTER);
    out
}

/// Formats the summary block for one run.
pub fn summary(params: &SimulationParameters, trajectory: &Trajectory) -> String {
    let final_yield = trajectory.final_yield().unwrap_or(0.0);
    format!(
        "Final H2 yield: {:.2} % mass\nTemperature: {} °C\nNaOH: {:.2} M\nSurface area: {} cm²",
        final_yield, params.temperature, params.concentration, params.surface_area
    )
}

/// Chart followed by the summary block.
pub fn render_report(params: &SimulationParameters, trajectory: &Trajectory, style: ChartStyle) -> String {
    format!("{}\n{}\n", render_chart(trajectory, style), summary(params, trajectory))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Trajectory {
        let times: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let yields: Vec<f64> = times.iter().map(|t| t * 0.5).collect();
        Trajectory::new(times, yields)
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(2.5), "2.50");
        assert_eq!(format_tick(0.000231), "2.31e-4");
        assert_eq!(format_tick(12345.0), "1.23e4");
    }

    #[test]
    fn test_chart_labels() {
        let chart = render_chart(&ramp(), ChartStyle::default());
        assert!(chart.starts_with(TITLE));
        assert!(chart.contains(X_LABEL));
        assert!(chart.contains(Y_LABEL));
        assert!(chart.contains(LEGEND));
        // Peak yield labels the top row
        assert!(chart.contains("5.00 │"));
        assert!(chart.contains("10.00"));
    }

    #[test]
    fn test_chart_dimensions() {
        let style = ChartStyle { width: 40, height: 10 };
        let chart = render_chart(&ramp(), style);
        let plot_rows = chart.lines().filter(|line| line.contains('│')).count();
        assert_eq!(plot_rows, 10);
        let markers = chart.lines().filter(|line| line.contains('│')).map(|line| line.matches(MARKER).count()).sum::<usize>();
        assert_eq!(markers, 40);
    }

    #[test]
    fn test_chart_curve_rises_left_to_right() {
        let style = ChartStyle { width: 20, height: 8 };
        let chart = render_chart(&ramp(), style);
        let rows: Vec<&str> = chart.lines().filter(|line| line.contains('│')).collect();

        // Start of the ramp sits on the bottom row, end on the top row
        let top: Vec<char> = rows[0].chars().collect();
        let bottom: Vec<char> = rows[rows.len() - 1].chars().collect();
        assert_eq!(top.last(), Some(&MARKER));
        let bottom_marker = bottom.iter().position(|c| *c == MARKER).unwrap();
        let top_marker = top.iter().position(|c| *c == MARKER).unwrap();
        assert!(bottom_marker < top_marker);
    }

    #[test]
    fn test_flat_chart_does_not_divide_by_zero() {
        let flat = Trajectory::new(vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]);
        let chart = render_chart(&flat, ChartStyle::default());
        assert!(chart.contains(MARKER));
        assert!(!chart.contains("NaN"));
    }

    #[test]
    fn test_summary_format() {
        let params = SimulationParameters::new(25.0, 0.5, 200.0, 10.0);
        let trajectory = Trajectory::new(vec![0.0, 10.0], vec![0.0, 1.23456]);
        let text = summary(&params, &trajectory);

        assert_eq!(
            text,
            "Final H2 yield: 1.23 % mass\nTemperature: 25 °C\nNaOH: 0.50 M\nSurface area: 200 cm²"
        );
    }

    #[test]
    fn test_report_contains_chart_and_summary() {
        let params = SimulationParameters::default();
        let report = render_report(&params, &ramp(), ChartStyle::default());
        assert!(report.contains(TITLE));
        assert!(report.contains("Final H2 yield: 5.00 % mass"));
    }
}
