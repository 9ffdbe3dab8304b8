use kumo_charts::api::SeriesType;
use kumo_charts::docs::demos::{
    MINUTE_MS, legend_showcase_markup, palette_table, read_latency_legend,
};
use kumo_charts::docs::{BUILD_INFO, DemoName, build_series_data, demo_chart};
use kumo_charts::render::LegendVariant;

const END_MS: f64 = 1_700_000_000_000.0;

#[test]
fn series_data_is_reproducible_and_ends_at_end_time() {
    let first = build_series_data(1, 30, MINUTE_MS, 1.0, END_MS);
    let second = build_series_data(1, 30, MINUTE_MS, 1.0, END_MS);

    assert_eq!(first, second);
    assert_eq!(first.len(), 30);
    assert_eq!(first.last().map(|p| p.time), Some(END_MS));
    assert_eq!(first[0].time, END_MS - 29.0 * MINUTE_MS);
    assert!(first.windows(2).all(|w| w[1].time - w[0].time == MINUTE_MS));
}

#[test]
fn series_values_follow_seed_baseline() {
    for point in build_series_data(2, 50, MINUTE_MS, 1.0, END_MS) {
        // 30 + 2 * 15, plus up to 7.35 of trend and 4 of noise either way.
        assert!(point.value >= 56.0 && point.value <= 71.4, "{}", point.value);
    }
    let scaled = build_series_data(0, 5, MINUTE_MS, 0.5, END_MS);
    assert!(scaled.iter().all(|p| p.value < 20.0));
}

#[test]
fn demo_names_parse_from_slugs() {
    for demo in DemoName::ALL {
        assert_eq!(demo.to_string().parse::<DemoName>().expect("slug"), demo);
    }
    assert!("missing".parse::<DemoName>().is_err());
}

#[test]
fn incomplete_demo_dashes_the_tail() {
    let chart = demo_chart(DemoName::IncompleteData, false, END_MS);
    let dashed: Vec<bool> = chart.option.series.iter().map(|s| s.is_dashed()).collect();
    assert_eq!(dashed, [false, true]);
    assert_eq!(chart.option.series[1].data.len(), 5);
}

#[test]
fn range_selection_demo_enables_brush() {
    let chart = demo_chart(DemoName::TimeRangeSelection, false, END_MS);
    assert!(chart.option.brush.is_some());
    assert!(demo_chart(DemoName::BasicLine, false, END_MS).option.brush.is_none());
}

#[test]
fn stacked_bar_demo_uses_categorical_colors() {
    let chart = demo_chart(DemoName::StackedBar, true, END_MS);
    assert_eq!(chart.option.series.len(), 3);
    assert!(chart.option.series.iter().all(|s| s.kind == SeriesType::Bar));
    assert_eq!(chart.option.series[0].color.as_deref(), Some("#086FFFE6"));
}

#[test]
fn pie_demos_use_their_own_heights() {
    let pie = demo_chart(DemoName::Pie, false, END_MS);
    assert_eq!(pie.height, 400);
    assert_eq!(pie.option.series[0].data.len(), 5);

    let preview = demo_chart(DemoName::PiePreview, false, END_MS);
    assert_eq!(preview.height, 160);
    assert_eq!(preview.option.series[0].data.len(), 3);
}

#[test]
fn latency_legend_follows_theme() {
    let legend = read_latency_legend(true);
    let names: Vec<&str> = legend.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["P99", "P95", "P75", "P50"]);
    assert_eq!(legend[0].color, "#FC574AE6");
    assert!(legend.iter().all(|i| i.unit.as_deref() == Some("ms")));
}

#[test]
fn legend_showcase_has_active_and_inactive_sections() {
    let html = legend_showcase_markup(LegendVariant::Large, false);
    assert!(html.contains("Active State"));
    assert!(html.contains("Inactive State"));
    assert_eq!(html.matches(">Requests</span>").count(), 2);
}

#[test]
fn palette_table_covers_every_color() {
    let table = palette_table();
    assert_eq!(table.semantic.len(), 6);
    assert_eq!(table.categorical.len(), 10);
    assert_eq!(table.semantic[0].name, "Attention");
    assert_eq!(table.semantic[0].dark, "#FC574AE6");
}

#[test]
fn build_info_carries_package_version() {
    assert_eq!(BUILD_INFO.library_version, env!("CARGO_PKG_VERSION"));
    assert!(!BUILD_INFO.commit_hash.is_empty());
    assert!(!BUILD_INFO.build_date.is_empty());
}
