use popline::models::DataSet;
use popline::stats::series_summary;

#[test]
fn even_length_series_averages_the_middle_pair() {
    let d = DataSet::from_pairs([(2018, 1), (2019, 2), (2020, 3), (2021, 4)]).unwrap();
    let s = series_summary(&d);
    assert_eq!(s.count, 4);
    assert_eq!(s.min, 1);
    assert_eq!(s.max, 4);
    assert!((s.mean - 2.5).abs() < 1e-9);
    assert!((s.median - 2.5).abs() < 1e-9);
    assert_eq!(s.growth, 3);
    assert!((s.growth_pct - 300.0).abs() < 1e-9);
}

#[test]
fn odd_length_series_takes_the_middle_value() {
    let d = DataSet::from_pairs([(2019, 10), (2020, 30), (2021, 20)]).unwrap();
    let s = series_summary(&d);
    assert_eq!(s.median, 20.0);
    assert_eq!(s.min, 10);
    assert_eq!(s.max, 30);
    assert_eq!(s.growth, 10);
    assert!((s.growth_pct - 100.0).abs() < 1e-9);
}

#[test]
fn growth_tracks_first_and_last_not_min_and_max() {
    let d = DataSet::from_pairs([(1999, 11_250), (2006, 12_500), (2011, 10_000)]).unwrap();
    let s = series_summary(&d);
    assert_eq!(s.start_year, 1999);
    assert_eq!(s.end_year, 2011);
    assert_eq!(s.growth, -1_250);
    assert!(s.growth_pct < 0.0);
}
