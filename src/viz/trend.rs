//! Straight-line trend fitting for the chart overlay.
//!
//! The chart builder hands this module the in-range points and gets back a
//! `slope`/`intercept` pair to draw; the builders themselves carry no
//! numerical code.

/// A fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// X span the overlay is drawn across (the in-range years).
    pub x_min: f64,
    pub x_max: f64,
}

impl TrendLine {
    /// Evaluate the fitted line at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Ordinary least-squares fit over `(x, y)` points.
///
/// Returns `None` when fewer than two points are given or all x values
/// coincide (vertical data has no finite slope).
pub fn fit_line(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in points {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let x_min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    Some(TrendLine {
        slope,
        intercept,
        x_min,
        x_max,
    })
}
