//! Utility functions for visualization: the fixed color palettes.

use crate::models::RangeTag;
use plotters::prelude::*;

/// Dark accent for the highlighted (in-range) segment.
pub const IN_RANGE_COLOR: RGBColor = RGBColor(0, 0, 139); // dark blue (#00008B)

/// Shared lighter accent for the pre-/post-range segments.
pub const OUT_OF_RANGE_COLOR: RGBColor = RGBColor(100, 149, 237); // cornflower (#6495ED)

/// Trend overlay stroke.
pub const TREND_COLOR: RGBColor = RGBColor(198, 89, 17); // burnt orange (#C65911)

/// Series color for a range bucket. Pre and Post share one accent; only the
/// in-range bucket gets the dark one, so the chart reads as a two-tone
/// highlight rather than a three-color legend.
#[inline]
pub fn range_color(tag: RangeTag) -> RGBColor {
    match tag {
        RangeTag::InRange => IN_RANGE_COLOR,
        RangeTag::Pre | RangeTag::Post => OUT_OF_RANGE_COLOR,
    }
}

/// Fixed fuel palette (Office chart hues), keyed by category name.
pub const FUEL_PALETTE: [(&str, RGBColor); 6] = [
    ("Coal", RGBColor(99, 99, 99)),         // dark gray  (#636363)
    ("Natural Gas", RGBColor(237, 125, 49)), // orange     (#ED7D31)
    ("Oil", RGBColor(158, 72, 14)),         // dark orange(#9E480E)
    ("Nuclear", RGBColor(255, 192, 0)),     // gold       (#FFC000)
    ("Renewables", RGBColor(112, 173, 71)), // green      (#70AD47)
    ("Total", RGBColor(68, 114, 196)),      // blue       (#4472C4)
];

/// Neutral fallback for fuels outside the fixed palette.
pub const FUEL_FALLBACK_COLOR: RGBColor = RGBColor(165, 165, 165); // gray (#A5A5A5)

/// Wedge color for a fuel name; palette lookup with a neutral fallback.
pub fn fuel_color(fuel: &str) -> RGBColor {
    FUEL_PALETTE
        .iter()
        .find(|(name, _)| *name == fuel)
        .map(|(_, c)| *c)
        .unwrap_or(FUEL_FALLBACK_COLOR)
}
