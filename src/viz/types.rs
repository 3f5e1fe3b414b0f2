//! Public option types for the visualization module.

/// Options for the Kaya time-series chart.
///
/// All fields have permissive defaults: the highlight starts at 1980, stops
/// at the newest year in the data, the y-axis label comes from the variable
/// lookup table, and neither log scaling nor the trend overlay is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KayaChartOptions {
    /// First year of the highlighted range (default 1980).
    pub start_year: Option<i32>,
    /// Last year of the highlighted range (default: newest year present).
    pub stop_year: Option<i32>,
    /// Explicit y-axis label; overrides the variable lookup table.
    pub y_label: Option<String>,
    /// Base-10 logarithmic y axis. All plotted values must be strictly
    /// positive; violations surface from the rendering layer.
    pub log_scale: bool,
    /// Overlay a straight-line fit computed over the in-range bucket only.
    pub trend_line: bool,
}
