//! kayaviz
//!
//! A lightweight Rust library for visualizing Kaya-identity energy/economy
//! data: time-series charts of population, GDP, energy use, emissions, and
//! derived intensity ratios, plus fuel-mix donut charts.
//!
//! ### Features
//! - Line-and-point charts of any of the eight Kaya variables, with a
//!   highlighted date range, optional log scaling, and an optional linear
//!   trend fitted to the highlighted years
//! - Donut charts of a fuel mix for the most recent year in a dataset,
//!   with per-fuel quads/percentage legend labels
//! - SVG and PNG output
//!
//! ### Example
//! ```no_run
//! use kayaviz::{KayaChartOptions, KayaRecord};
//!
//! let data: Vec<KayaRecord> = load_records();
//! let opts = KayaChartOptions {
//!     start_year: Some(1990),
//!     trend_line: true,
//!     ..Default::default()
//! };
//! kayaviz::viz::plot_kaya(&data, "P", &opts, "population.svg", 1000, 600)?;
//! # fn load_records() -> Vec<kayaviz::KayaRecord> { Vec::new() }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod fuel;
pub mod models;
pub mod range;
pub mod viz;

pub use fuel::{Wedge, bucket_latest_year};
pub use models::{FuelMixRecord, KayaRecord, RangeTag, Variable, axis_label_for};
pub use range::{DEFAULT_START_YEAR, TaggedRecord, tag_range};
pub use viz::{
    FuelMixChart, KayaChart, KayaChartOptions, build_fuel_mix_chart, build_kaya_chart,
    plot_fuel_mix, plot_kaya,
};
