use kayaviz::models::{FuelMixRecord, KayaRecord, RangeTag};
use kayaviz::viz::{KayaChartOptions, build_fuel_mix_chart, build_kaya_chart};

fn record(year: i32, scale: f64) -> KayaRecord {
    KayaRecord {
        year,
        population: 0.3 + 0.01 * scale,
        gdp: 5.0 + scale,
        energy: 70.0 + 2.0 * scale,
        emissions: 4500.0 + 50.0 * scale,
        gdp_per_capita: 20.0 + scale,
        energy_intensity: 14.0 - 0.1 * scale,
        carbon_intensity_energy: 64.0 - 0.2 * scale,
        carbon_intensity_economy: 900.0 - 5.0 * scale,
    }
}

fn series(years: impl IntoIterator<Item = i32>) -> Vec<KayaRecord> {
    years
        .into_iter()
        .enumerate()
        .map(|(i, y)| record(y, i as f64))
        .collect()
}

fn bucket<'a>(
    chart: &'a kayaviz::KayaChart,
    tag: RangeTag,
) -> &'a [(f64, f64)] {
    chart
        .buckets
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, pts)| pts.as_slice())
        .unwrap()
}

#[test]
fn label_comes_from_the_lookup_table() {
    let data = series(2000..=2010);
    let chart = build_kaya_chart(&data, "P", &KayaChartOptions::default());
    assert_eq!(chart.y_label, "Population (billions)");

    let chart = build_kaya_chart(&data, "ef", &KayaChartOptions::default());
    assert_eq!(
        chart.y_label,
        "Emissions intensity of economy (tonnes CO2 per $ million)"
    );
}

#[test]
fn explicit_label_overrides_the_table() {
    let data = series(2000..=2010);
    let opts = KayaChartOptions {
        y_label: Some("People (billions)".into()),
        ..Default::default()
    };
    let chart = build_kaya_chart(&data, "P", &opts);
    assert_eq!(chart.y_label, "People (billions)");
}

#[test]
fn unrecognized_variable_degrades_to_blank_label_and_empty_series() {
    let data = series(2000..=2010);
    let chart = build_kaya_chart(&data, "bogus", &KayaChartOptions::default());
    assert_eq!(chart.y_label, "");
    assert!(chart.buckets.iter().all(|(_, pts)| pts.is_empty()));
}

#[test]
fn buckets_carry_the_selected_variable() {
    let data = series(1995..=2005);
    let opts = KayaChartOptions {
        start_year: Some(1998),
        stop_year: Some(2002),
        ..Default::default()
    };
    let chart = build_kaya_chart(&data, "E", &opts);

    let in_range = bucket(&chart, RangeTag::InRange);
    assert_eq!(in_range.len(), 5);
    assert_eq!(in_range[0].0, 1998.0);
    // energy of the 1998 row (index 3 in the fixture)
    assert_eq!(in_range[0].1, 70.0 + 2.0 * 3.0);
}

#[test]
fn trend_fits_only_the_in_range_bucket() {
    // Flat outside the range, steep inside: a full-series fit would have a
    // much smaller slope.
    let mut data = Vec::new();
    for y in 1990..=1994 {
        let mut r = record(y, 0.0);
        r.energy = 50.0;
        data.push(r);
    }
    for (i, y) in (1995..=2000).enumerate() {
        let mut r = record(y, 0.0);
        r.energy = 50.0 + 10.0 * i as f64;
        data.push(r);
    }
    let opts = KayaChartOptions {
        start_year: Some(1995),
        stop_year: Some(2000),
        trend_line: true,
        ..Default::default()
    };
    let chart = build_kaya_chart(&data, "E", &opts);
    let fit = chart.trend.expect("trend requested");

    assert_eq!(fit.x_min, 1995.0);
    assert_eq!(fit.x_max, 2000.0);
    assert!((fit.slope - 10.0).abs() < 1e-9);
}

#[test]
fn trend_absent_when_not_requested_or_underdetermined() {
    let data = series(1990..=2000);
    let chart = build_kaya_chart(&data, "E", &KayaChartOptions::default());
    assert!(chart.trend.is_none());

    // One in-range point is not enough for a fit.
    let opts = KayaChartOptions {
        start_year: Some(1995),
        stop_year: Some(1995),
        trend_line: true,
        ..Default::default()
    };
    let chart = build_kaya_chart(&data, "E", &opts);
    assert!(chart.trend.is_none());
}

#[test]
fn log_scale_flag_is_carried_through() {
    let data = series(2000..=2010);
    let opts = KayaChartOptions {
        log_scale: true,
        ..Default::default()
    };
    assert!(build_kaya_chart(&data, "G", &opts).log_scale);
    assert!(!build_kaya_chart(&data, "G", &KayaChartOptions::default()).log_scale);
}

#[test]
fn building_twice_yields_identical_charts() {
    let data = series(1990..=2010);
    let opts = KayaChartOptions {
        start_year: Some(1995),
        stop_year: Some(2005),
        trend_line: true,
        ..Default::default()
    };
    let a = build_kaya_chart(&data, "F", &opts);
    let b = build_kaya_chart(&data, "F", &opts);
    assert_eq!(a, b);

    let fuel = vec![
        FuelMixRecord {
            year: 2020,
            fuel: "Coal".into(),
            quads: 10.0,
            pct: 40.0,
        },
        FuelMixRecord {
            year: 2020,
            fuel: "Oil".into(),
            quads: 15.0,
            pct: 60.0,
        },
    ];
    assert_eq!(build_fuel_mix_chart(&fuel), build_fuel_mix_chart(&fuel));
}
