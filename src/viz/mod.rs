//! Visualization: render Kaya time-series charts and fuel-mix donut charts
//! to **SVG** or **PNG**.
//!
//! - Time series: connected line + point markers, two-tone range highlight
//!   (dark accent inside the selected range, lighter accent outside),
//!   optional base-10 log y axis, optional straight-line trend overlay
//!   fitted to the in-range bucket only
//! - Fuel mix: donut ring for the most recent year, fixed fuel palette,
//!   right-hand legend panel with per-fuel quads/percentage labels

pub mod legend;
pub mod text;
pub mod trend;
pub mod types;
pub mod util;

pub use trend::TrendLine;
pub use types::KayaChartOptions;

use crate::fuel::{Wedge, bucket_latest_year};
use crate::models::{FuelMixRecord, KayaRecord, RangeTag, Variable, axis_label_for};
use crate::range::tag_range;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use legend::draw_legend_panel;
use trend::fit_line;
use util::{fuel_color, range_color};

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// A built, renderable time-series chart: the per-bucket data mappings plus
/// the resolved styling decisions. Building is pure and infallible;
/// rendering happens in [`KayaChart::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct KayaChart {
    /// Resolved y-axis label (blank for unrecognized variables with no
    /// explicit override).
    pub y_label: String,
    /// `(bucket, points)` in draw order: Pre and Post first, InRange last so
    /// the dark accent sits on top at the boundary years.
    pub buckets: Vec<(RangeTag, Vec<(f64, f64)>)>,
    /// Base-10 log y axis requested.
    pub log_scale: bool,
    /// Straight-line fit over the in-range bucket, when requested and
    /// enough in-range points exist.
    pub trend: Option<TrendLine>,
}

/// Build the time-series chart for `variable` (one of `P G E F g e f ef`).
///
/// Tags the series into pre/in-range/post buckets, resolves the y-axis
/// label (explicit override, else table lookup, else blank), and — when
/// `opts.trend_line` is set — fits a line to the in-range bucket. An
/// unrecognized variable degrades to a blank label and empty buckets rather
/// than failing.
pub fn build_kaya_chart(
    records: &[KayaRecord],
    variable: &str,
    opts: &KayaChartOptions,
) -> KayaChart {
    let y_label = opts
        .y_label
        .clone()
        .unwrap_or_else(|| axis_label_for(variable).to_string());

    let var = Variable::parse(variable);
    let tagged = tag_range(records, opts.start_year, opts.stop_year);

    let bucket = |tag: RangeTag| -> Vec<(f64, f64)> {
        let Some(var) = var else { return Vec::new() };
        tagged
            .iter()
            .filter(|t| t.tag == tag)
            .map(|t| (t.record.year as f64, var.value(&t.record)))
            .collect()
    };

    let pre = bucket(RangeTag::Pre);
    let post = bucket(RangeTag::Post);
    let in_range = bucket(RangeTag::InRange);

    let trend = if opts.trend_line {
        fit_line(&in_range)
    } else {
        None
    };

    KayaChart {
        y_label,
        buckets: vec![
            (RangeTag::Pre, pre),
            (RangeTag::Post, post),
            (RangeTag::InRange, in_range),
        ],
        log_scale: opts.log_scale,
        trend,
    }
}

impl KayaChart {
    /// Render to `path`; `.svg` selects the SVG backend, anything else the
    /// bitmap backend (PNG).
    pub fn render<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        ensure_fonts_registered();
        let path = path.as_ref();
        let path_string = path.to_string_lossy().into_owned();

        if path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
            draw_kaya_chart(root, self)?;
        } else {
            let root =
                BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
            draw_kaya_chart(root, self)?;
        }
        Ok(())
    }
}

/// Convenience: build and render in one call.
pub fn plot_kaya<P: AsRef<Path>>(
    records: &[KayaRecord],
    variable: &str,
    opts: &KayaChartOptions,
    path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    build_kaya_chart(records, variable, opts).render(path, width, height)
}

fn draw_kaya_chart<DB>(root: DrawingArea<DB, Shift>, chart: &KayaChart) -> Result<()>
where
    DB: DrawingBackend,
{
    let points: Vec<(f64, f64)> = chart
        .buckets
        .iter()
        .flat_map(|(_, pts)| pts.iter().copied())
        .collect();
    if points.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let (mut x_min, mut x_max) = (
        points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min),
        points
            .iter()
            .map(|(x, _)| *x)
            .fold(f64::NEG_INFINITY, f64::max),
    );
    if (x_max - x_min).abs() < f64::EPSILON {
        x_min -= 1.0;
        x_max += 1.0;
    }
    let (mut y_min, mut y_max) = (
        points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min),
        points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::NEG_INFINITY, f64::max),
    );
    if (y_max - y_min).abs() < f64::EPSILON {
        // Keep the padded range positive so a flat series still log-scales.
        if chart.log_scale {
            y_min /= 2.0;
            y_max *= 2.0;
        } else {
            y_min -= 1.0;
            y_max += 1.0;
        }
    }

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| (x.round() as i32).to_string();
    let x_label_count = ((x_max - x_min) as usize + 1).min(12);

    if chart.log_scale {
        let mut ctx = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 56)
            .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())
            .map_err(|e| anyhow!("{:?}", e))?;
        ctx.configure_mesh()
            .x_desc("Year")
            .y_desc(chart.y_label.as_str())
            .x_labels(x_label_count)
            .x_label_formatter(&x_label_fmt)
            .label_style((FontFamily::SansSerif, 12))
            .axis_desc_style((FontFamily::SansSerif, 16))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
        draw_tagged_series(&mut ctx, chart)?;
    } else {
        let mut ctx = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 56)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| anyhow!("{:?}", e))?;
        ctx.configure_mesh()
            .x_desc("Year")
            .y_desc(chart.y_label.as_str())
            .x_labels(x_label_count)
            .x_label_formatter(&x_label_fmt)
            .label_style((FontFamily::SansSerif, 12))
            .axis_desc_style((FontFamily::SansSerif, 16))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
        draw_tagged_series(&mut ctx, chart)?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Draw the per-bucket line + marker series and the optional trend overlay.
/// No series labels are registered: the color mapping carries no legend.
fn draw_tagged_series<'a, DB, Y>(
    ctx: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    chart: &KayaChart,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64>,
{
    for (tag, pts) in &chart.buckets {
        if pts.is_empty() {
            continue;
        }
        let color = range_color(*tag);
        let style = ShapeStyle {
            color: color.to_rgba(),
            filled: false,
            stroke_width: 2,
        };
        ctx.draw_series(LineSeries::new(pts.clone(), style))
            .map_err(|e| anyhow!("{:?}", e))?;
        ctx.draw_series(
            pts.iter()
                .map(|(x, y)| Circle::new((*x, *y), 3, color.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    if let Some(fit) = &chart.trend {
        let style = ShapeStyle {
            color: util::TREND_COLOR.to_rgba(),
            filled: false,
            stroke_width: 2,
        };
        let ends = [
            (fit.x_min, fit.y_at(fit.x_min)),
            (fit.x_max, fit.y_at(fit.x_max)),
        ];
        ctx.draw_series(LineSeries::new(ends, style))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// A built, renderable fuel-mix donut: the wedge intervals for the most
/// recent year in the input, in fuel-name order.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelMixChart {
    pub wedges: Vec<Wedge>,
}

/// Build the donut chart for the most recent year in `records`.
pub fn build_fuel_mix_chart(records: &[FuelMixRecord]) -> FuelMixChart {
    FuelMixChart {
        wedges: bucket_latest_year(records),
    }
}

impl FuelMixChart {
    /// Render to `path`; `.svg` selects the SVG backend, anything else the
    /// bitmap backend (PNG).
    pub fn render<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        ensure_fonts_registered();
        let path = path.as_ref();
        let path_string = path.to_string_lossy().into_owned();

        if path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
            draw_fuel_mix_chart(root, self)?;
        } else {
            let root =
                BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
            draw_fuel_mix_chart(root, self)?;
        }
        Ok(())
    }
}

/// Convenience: build and render in one call.
pub fn plot_fuel_mix<P: AsRef<Path>>(
    records: &[FuelMixRecord],
    path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    build_fuel_mix_chart(records).render(path, width, height)
}

/// Donut band radii relative to the plot panel's smaller dimension.
const OUTER_RADIUS_FRAC: f64 = 0.40;
const INNER_RADIUS_FRAC: f64 = 0.55; // of the outer radius

fn draw_fuel_mix_chart<DB>(root: DrawingArea<DB, Shift>, chart: &FuelMixChart) -> Result<()>
where
    DB: DrawingBackend,
{
    if chart.wedges.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    // Donut panel on the left, legend panel on the right. No cartesian
    // axes, ticks, or gridlines: the panel is a plain drawing area.
    let (plot_area, legend_area) = root.split_horizontally((68).percent_width());
    plot_area.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (w_u32, h_u32) = plot_area.dim_in_pixel();
    let cx = w_u32 as i32 / 2;
    let cy = h_u32 as i32 / 2;
    let outer_r = OUTER_RADIUS_FRAC * f64::from(w_u32.min(h_u32));
    let inner_r = INNER_RADIUS_FRAC * outer_r;

    // The last wedge's qmax is the year's total quads (contiguous intervals
    // from zero).
    let total = chart.wedges.last().map(|w| w.qmax).unwrap_or(0.0);
    if total > 0.0 {
        for wedge in &chart.wedges {
            let start_deg = -90.0 + 360.0 * wedge.qmin / total;
            let sweep_deg = 360.0 * (wedge.qmax - wedge.qmin) / total;
            draw_donut_segment(
                &plot_area,
                (cx, cy),
                outer_r,
                inner_r,
                start_deg,
                sweep_deg,
                fuel_color(&wedge.fuel),
            )?;
        }
    }

    let items: Vec<(String, RGBColor)> = chart
        .wedges
        .iter()
        .map(|w| (w.label.clone(), fuel_color(&w.fuel)))
        .collect();
    draw_legend_panel(&legend_area, &items)?;

    plot_area.present().map_err(|e| anyhow!("{:?}", e))?;
    legend_area.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Draw one annular wedge as a closed polygon: the outer arc forward, then
/// the inner arc reversed.
fn draw_donut_segment<DB>(
    area: &DrawingArea<DB, Shift>,
    center: (i32, i32),
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    sweep_angle: f64,
    color: RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let num_points = 100;
    let mut points = Vec::with_capacity(2 * (num_points + 1));

    for i in 0..=num_points {
        let angle = start_angle + sweep_angle * i as f64 / num_points as f64;
        let rad = angle.to_radians();
        let x = center.0 + (outer_radius * rad.cos()) as i32;
        let y = center.1 + (outer_radius * rad.sin()) as i32;
        points.push((x, y));
    }
    for i in (0..=num_points).rev() {
        let angle = start_angle + sweep_angle * i as f64 / num_points as f64;
        let rad = angle.to_radians();
        let x = center.0 + (inner_radius * rad.cos()) as i32;
        let y = center.1 + (inner_radius * rad.sin()) as i32;
        points.push((x, y));
    }

    area.draw(&Polygon::new(points, color.filled()))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
