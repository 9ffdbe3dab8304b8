use chrono::Utc;
use kumo_charts::api::{TooltipFormatter, TooltipParam, dedup_by_series_name, format_timestamp};

fn boundary_params() -> Vec<TooltipParam> {
    // The solid and dashed entries of one series both hit the shared sample.
    vec![
        TooltipParam::new("Requests", 120_000.0, 42.0),
        TooltipParam::new("Requests", 120_000.0, 42.0),
        TooltipParam::new("Errors", 120_000.0, 3.5),
    ]
}

#[test]
fn dedup_keeps_first_entry_per_series() {
    let params = boundary_params();
    let unique = dedup_by_series_name(&params);
    let names: Vec<&str> = unique.iter().map(|p| p.series_name.as_str()).collect();
    assert_eq!(names, ["Requests", "Errors"]);
}

#[test]
fn formatted_tooltip_lists_each_series_once() {
    let html = TooltipFormatter::DedupBySeriesName.format_in(&boundary_params(), &Utc);

    assert!(html.starts_with(
        "<div style=\"font-weight:600;margin-bottom:4px;\">1970-01-01 00:02:00</div>"
    ));
    assert_eq!(html.matches("Requests").count(), 1);
    assert!(html.contains(" Requests: <strong>42</strong><br/> Errors: <strong>3.5</strong>"));
}

#[test]
fn missing_value_renders_placeholder() {
    let params = vec![TooltipParam {
        series_name: "Latency".to_owned(),
        marker: "<span></span>".to_owned(),
        value: None,
        axis_value: Some(0.0),
    }];
    let html = TooltipFormatter::DedupBySeriesName.format_in(&params, &Utc);
    assert!(html.contains("<span></span> Latency: <strong>-</strong>"));
    assert!(html.contains("1970-01-01 00:00:00"));
}

#[test]
fn series_names_are_escaped() {
    let params = vec![TooltipParam::new("<b>P99</b>", 0.0, 1.0)];
    let html = TooltipFormatter::DedupBySeriesName.format_in(&params, &Utc);
    assert!(html.contains("&lt;b&gt;P99&lt;/b&gt;"));
}

#[test]
fn empty_params_produce_empty_tooltip() {
    assert_eq!(TooltipFormatter::DedupBySeriesName.format_in(&[], &Utc), "");
}

#[test]
fn timestamps_format_as_date_and_time() {
    assert_eq!(
        format_timestamp(1_700_000_000_000.0, &Utc).as_deref(),
        Some("2023-11-14 22:13:20")
    );
    assert_eq!(format_timestamp(f64::NAN, &Utc), None);
}

#[test]
fn formatter_serializes_by_name() {
    let json = serde_json::to_value(TooltipFormatter::DedupBySeriesName).expect("serialize");
    assert_eq!(json, "dedupBySeriesName");
}
