//! Temporal range tagging: split a Kaya time series into pre-range,
//! in-range, and post-range buckets for differential chart styling.

use crate::models::{KayaRecord, RangeTag};

/// Default highlight start when the caller gives none.
pub const DEFAULT_START_YEAR: i32 = 1980;

/// A record paired with its range bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRecord {
    pub record: KayaRecord,
    pub tag: RangeTag,
}

/// Resolve `(start_year, stop_year)` from optional bounds: start defaults to
/// [`DEFAULT_START_YEAR`], stop to the maximum year present in `records`.
pub fn resolve_bounds(
    records: &[KayaRecord],
    start_year: Option<i32>,
    stop_year: Option<i32>,
) -> (i32, i32) {
    let start = start_year.unwrap_or(DEFAULT_START_YEAR);
    let stop = stop_year.unwrap_or_else(|| {
        records
            .iter()
            .map(|r| r.year)
            .max()
            .unwrap_or(DEFAULT_START_YEAR)
    });
    (start, stop)
}

/// Tag every record with its bucket relative to `(start_year, stop_year)`.
///
/// The output is the concatenation of three independent filter passes
/// (Pre, Post, InRange), so a record exactly at `start_year` appears both as
/// `Pre` and `InRange`, and one at `stop_year` as `Post` and `InRange`.
/// Output length is therefore the sum of the three filter counts and may
/// exceed the input length. The input is never mutated.
///
/// An inverted pair (`start_year > stop_year`) is not an error: the InRange
/// bucket comes out empty and Pre/Post may overlap.
pub fn tag_range(
    records: &[KayaRecord],
    start_year: Option<i32>,
    stop_year: Option<i32>,
) -> Vec<TaggedRecord> {
    let (start, stop) = resolve_bounds(records, start_year, stop_year);

    let tagged = |tag: RangeTag, keep: &dyn Fn(i32) -> bool| -> Vec<TaggedRecord> {
        records
            .iter()
            .filter(|r| keep(r.year))
            .map(|r| TaggedRecord {
                record: r.clone(),
                tag,
            })
            .collect()
    };

    let mut out = tagged(RangeTag::Pre, &|y| y <= start);
    out.extend(tagged(RangeTag::Post, &|y| y >= stop));
    out.extend(tagged(RangeTag::InRange, &|y| y >= start && y <= stop));
    out
}
