//! Yield-versus-time trajectories.
//!
//! A [`Trajectory`] is the output of one simulation run: parallel sequences
//! of time points (h) and hydrogen yields (% mass). It is rebuilt on every
//! parameter change and never cached.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// CSV column headers.
pub const CSV_HEADER: &str = "time_h,h2_percent_mass";

/// Parallel time and yield sequences of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    times: Vec<f64>,
    yields: Vec<f64>,
}

impl Trajectory {
    /// Builds a trajectory from parallel sequences.
    ///
    /// Both sequences come from the same integration run, so a length
    /// mismatch is a programming error.
    pub(crate) fn new(times: Vec<f64>, yields: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), yields.len(), "time and yield lengths differ");
        Trajectory { times, yields }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns whether the trajectory has no points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time points (h).
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Yields (% mass), one per time point.
    pub fn yields(&self) -> &[f64] {
        &self.yields
    }

    /// Yield at the last time point.
    pub fn final_yield(&self) -> Option<f64> {
        self.yields.last().copied()
    }

    /// Final time point (h).
    pub fn duration(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Iterates over `(time, yield)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.yields.iter().copied())
    }

    /// Linearly interpolated yield at time `t`.
    ///
    /// Returns `None` outside the simulated time span or for a non-finite `t`.
    pub fn yield_at(&self, t: f64) -> Option<f64> {
        if !t.is_finite() {
            return None;
        }
        let first = *self.times.first()?;
        let last = *self.times.last()?;
        if t < first || t > last {
            return None;
        }

        // First index with times[i] >= t
        let i = self.times.partition_point(|&ti| ti < t);
        if self.times[i] == t || i == 0 {
            return Some(self.yields[i]);
        }

        let (t0, t1) = (self.times[i - 1], self.times[i]);
        let (y0, y1) = (self.yields[i - 1], self.yields[i]);
        Some(y0 + (y1 - y0) * (t - t0) / (t1 - t0))
    }

    /// Writes the trajectory as CSV with a header row.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", CSV_HEADER)?;
        for (t, h2) in self.points() {
            writeln!(writer, "{},{}", t, h2)?;
        }
        Ok(())
    }

    /// Renders the trajectory as a CSV string.
    pub fn to_csv(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_csv(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        Trajectory::new(vec![0.0, 1.0, 2.0, 4.0], vec![0.0, 1.0, 1.5, 2.0])
    }

    #[test]
    fn test_accessors() {
        let trajectory = sample();
        assert_eq!(trajectory.len(), 4);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.final_yield(), Some(2.0));
        assert_eq!(trajectory.duration(), Some(4.0));
        assert_eq!(trajectory.points().nth(2), Some((2.0, 1.5)));
    }

    #[test]
    fn test_empty() {
        let trajectory = Trajectory::new(Vec::new(), Vec::new());
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.final_yield(), None);
        assert_eq!(trajectory.yield_at(0.0), None);
    }

    #[test]
    fn test_yield_at_interpolates() {
        let trajectory = sample();
        assert_eq!(trajectory.yield_at(0.0), Some(0.0));
        assert_eq!(trajectory.yield_at(1.0), Some(1.0));
        assert!((trajectory.yield_at(0.5).unwrap() - 0.5).abs() < 1e-12);
        assert!((trajectory.yield_at(3.0).unwrap() - 1.75).abs() < 1e-12);
        assert_eq!(trajectory.yield_at(4.0), Some(2.0));
    }

    #[test]
    fn test_yield_at_out_of_range() {
        let trajectory = sample();
        assert_eq!(trajectory.yield_at(-0.1), None);
        assert_eq!(trajectory.yield_at(f64::NAN), None);
        assert_eq!(trajectory.yield_at(4.1), None);
    }

    #[test]
    fn test_csv_export() {
        let csv = sample().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "time_h,h2_percent_mass");
        assert_eq!(lines[1], "0,0");
        assert_eq!(lines[3], "2,1.5");
    }

    #[test]
    fn test_json_export() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"times\""));
        assert!(json.contains("\"yields\""));

        let parsed: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
