//! Fuel-mix bucketing: reduce a multi-year fuel dataset to its most recent
//! year and compute cumulative wedge boundaries for donut rendering.

use crate::models::FuelMixRecord;

/// One donut wedge: a fuel's interval `[qmin, qmax)` on the cumulative
/// quads axis, plus its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub fuel: String,
    pub quads: f64,
    pub pct: f64,
    /// Cumulative quads of all fuels sorted before this one.
    pub qmin: f64,
    /// `qmin + quads`.
    pub qmax: f64,
    /// `"{fuel}: {quads:.2} quads ({pct:.1}%)"`, used as the legend entry.
    pub label: String,
}

/// Legend text for one fuel.
pub fn wedge_label(fuel: &str, quads: f64, pct: f64) -> String {
    format!("{fuel}: {quads:.2} quads ({pct:.1}%)")
}

/// Restrict `records` to the most recent year present, sort by fuel name
/// (lexicographic ascending), and compute running cumulative quads.
///
/// Single-year input is already filtered; the max-year restriction is then a
/// no-op pass rather than a separate branch. The resulting `[qmin, qmax)`
/// intervals partition `[0, total_quads)` contiguously: each wedge starts
/// where the previous one ended and widths sum to the year's total quads.
pub fn bucket_latest_year(records: &[FuelMixRecord]) -> Vec<Wedge> {
    let Some(latest) = records.iter().map(|r| r.year).max() else {
        return Vec::new();
    };

    let mut rows: Vec<&FuelMixRecord> = records.iter().filter(|r| r.year == latest).collect();
    rows.sort_by(|a, b| a.fuel.cmp(&b.fuel));

    let mut wedges = Vec::with_capacity(rows.len());
    let mut cum = 0.0f64;
    for r in rows {
        let qmin = cum;
        cum += r.quads;
        wedges.push(Wedge {
            fuel: r.fuel.clone(),
            quads: r.quads,
            pct: r.pct,
            qmin,
            qmax: cum,
            label: wedge_label(&r.fuel, r.quads, r.pct),
        });
    }
    wedges
}
