use popline::chart::{Channel, MarkKind, build_chart_spec};
use popline::models::DataSet;

fn scenario() -> DataSet {
    DataSet::from_pairs([(1968, 8_949), (1975, 9_550), (1990, 10_100), (2021, 16_000)]).unwrap()
}

#[test]
fn ordinal_axis_has_one_labeled_tick_per_year() {
    let spec = build_chart_spec(&scenario()).unwrap();
    assert_eq!(spec.x.channel, Channel::Ordinal);
    let labels: Vec<&str> = spec.x.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["1968", "1975", "1990", "2021"]);
}

#[test]
fn quantitative_axis_styles_its_tick_labels() {
    let spec = build_chart_spec(&scenario()).unwrap();
    assert_eq!(spec.y.channel, Channel::Quantitative);
    assert_eq!(spec.y.domain, [8_949, 16_000]);
    assert!(!spec.y.scientific_notation);
    let top = spec.y.ticks.last().unwrap();
    assert_eq!(top.value, 16_000);
    assert_eq!(top.label, "16 000");
    for tick in &spec.y.ticks {
        assert!(!tick.label.contains('e'), "no scientific notation: {}", tick.label);
    }
}

#[test]
fn tooltips_pair_styled_year_and_population() {
    let spec = build_chart_spec(&scenario()).unwrap();
    assert_eq!(spec.tooltips.len(), 4);
    assert_eq!(spec.tooltips[0].year, "1968");
    assert_eq!(spec.tooltips[0].population, "8 949");
    assert_eq!(spec.tooltips[3].year, "2021");
    assert_eq!(spec.tooltips[3].population, "16 000");
}

#[test]
fn mark_carries_the_series_style_constants() {
    let spec = build_chart_spec(&scenario()).unwrap();
    assert_eq!(spec.mark.kind, MarkKind::Line);
    assert_eq!(spec.mark.color, "#3B825C");
    assert!(spec.mark.point_filled);
    assert!(spec.mark.point_size > 0);
}

#[test]
fn serialization_is_byte_identical_for_the_same_series() {
    let a = serde_json::to_vec(&build_chart_spec(&scenario()).unwrap()).unwrap();
    let b = serde_json::to_vec(&build_chart_spec(&scenario()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn building_a_spec_leaves_the_series_untouched() {
    let d = scenario();
    let before = d.clone();
    let _ = build_chart_spec(&d).unwrap();
    assert_eq!(d, before);
}
