use kayaviz::models::{KayaRecord, RangeTag};
use kayaviz::range::{DEFAULT_START_YEAR, tag_range};

fn record(year: i32) -> KayaRecord {
    KayaRecord {
        year,
        population: 1.0,
        gdp: 2.0,
        energy: 3.0,
        emissions: 4.0,
        gdp_per_capita: 2.0,
        energy_intensity: 1.5,
        carbon_intensity_energy: 1.33,
        carbon_intensity_economy: 2.0,
    }
}

fn series(years: impl IntoIterator<Item = i32>) -> Vec<KayaRecord> {
    years.into_iter().map(record).collect()
}

fn years_with_tag(tagged: &[kayaviz::TaggedRecord], tag: RangeTag) -> Vec<i32> {
    tagged
        .iter()
        .filter(|t| t.tag == tag)
        .map(|t| t.record.year)
        .collect()
}

#[test]
fn interior_rows_land_in_exactly_one_bucket() {
    let data = series(1995..=2005);
    let tagged = tag_range(&data, Some(1998), Some(2002));

    assert_eq!(years_with_tag(&tagged, RangeTag::Pre), vec![1995, 1996, 1997, 1998]);
    assert_eq!(years_with_tag(&tagged, RangeTag::Post), vec![2002, 2003, 2004, 2005]);
    assert_eq!(
        years_with_tag(&tagged, RangeTag::InRange),
        vec![1998, 1999, 2000, 2001, 2002]
    );

    // Strictly interior years appear exactly once across all buckets.
    for y in [1999, 2000, 2001] {
        let n = tagged.iter().filter(|t| t.record.year == y).count();
        assert_eq!(n, 1, "year {y} duplicated");
    }
    for y in [1995, 1996, 1997, 2003, 2004, 2005] {
        let n = tagged.iter().filter(|t| t.record.year == y).count();
        assert_eq!(n, 1, "year {y} duplicated");
    }
}

#[test]
fn boundary_rows_appear_in_two_buckets() {
    let data = series(1995..=2005);
    let tagged = tag_range(&data, Some(1998), Some(2002));

    let start_tags: Vec<RangeTag> = tagged
        .iter()
        .filter(|t| t.record.year == 1998)
        .map(|t| t.tag)
        .collect();
    assert_eq!(start_tags, vec![RangeTag::Pre, RangeTag::InRange]);

    let stop_tags: Vec<RangeTag> = tagged
        .iter()
        .filter(|t| t.record.year == 2002)
        .map(|t| t.tag)
        .collect();
    assert_eq!(stop_tags, vec![RangeTag::Post, RangeTag::InRange]);

    // Output length is the sum of the three filter counts: 11 input rows
    // plus the two duplicated boundary rows.
    assert_eq!(tagged.len(), 13);
}

#[test]
fn default_bounds_are_1980_and_max_year() {
    let data = series([1975, 1980, 1990, 2000, 2010]);
    let tagged = tag_range(&data, None, None);

    assert_eq!(DEFAULT_START_YEAR, 1980);
    assert_eq!(years_with_tag(&tagged, RangeTag::Pre), vec![1975, 1980]);
    // Stop defaults to the max year present, so only that row is Post.
    assert_eq!(years_with_tag(&tagged, RangeTag::Post), vec![2010]);
    assert_eq!(
        years_with_tag(&tagged, RangeTag::InRange),
        vec![1980, 1990, 2000, 2010]
    );
}

#[test]
fn inverted_range_is_defined_and_nonfailing() {
    let data = series(2000..=2004);
    let tagged = tag_range(&data, Some(2003), Some(2001));

    assert!(years_with_tag(&tagged, RangeTag::InRange).is_empty());
    // Pre and Post overlap over the inverted span.
    assert_eq!(years_with_tag(&tagged, RangeTag::Pre), vec![2000, 2001, 2002, 2003]);
    assert_eq!(years_with_tag(&tagged, RangeTag::Post), vec![2001, 2002, 2003, 2004]);
}

#[test]
fn input_is_not_mutated_and_tagging_is_deterministic() {
    let data = series(1990..=1995);
    let before = data.clone();
    let a = tag_range(&data, Some(1991), Some(1994));
    let b = tag_range(&data, Some(1991), Some(1994));
    assert_eq!(data, before);
    assert_eq!(a, b);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(tag_range(&[], None, None).is_empty());
}
