//! Legend panel drawing for the fuel-mix donut.
//!
//! Single-column panel on the right of the plot, one color swatch plus one
//! generated fuel label per entry.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::truncate_to_width;

/// Draw a right-hand legend panel listing `items` top to bottom.
///
/// Labels too wide for the panel are truncated with an ellipsis rather than
/// wrapped; donut legends carry one compact line per fuel.
pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBColor)],
) -> Result<()> {
    legend_area
        .fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w_u32, h_u32) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;
    let h = h_u32 as i32;

    let font_px: u32 = 14;
    let line_h: i32 = font_px as i32 + 2;
    let row_gap: i32 = 6;
    let pad_x: i32 = 6;
    let swatch: i32 = 12;

    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Left, VPos::Center));

    // Vertically center the whole block in the panel.
    let block_h = items.len() as i32 * (line_h + row_gap) - row_gap;
    let mut y = ((h - block_h) / 2).max(pad_x);

    let text_x = pad_x + swatch + 10;
    let max_text_w = (w - text_x - pad_x).max(40) as u32;

    for (label, color) in items {
        let center_y = y + line_h / 2;
        legend_area
            .draw(&Rectangle::new(
                [
                    (pad_x, center_y - swatch / 2),
                    (pad_x + swatch, center_y + swatch / 2),
                ],
                color.filled(),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let text = truncate_to_width(label, font_px, max_text_w);
        legend_area
            .draw(&Text::new(text, (text_x, center_y), label_style.clone()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        y += line_h + row_gap;
    }
    Ok(())
}
