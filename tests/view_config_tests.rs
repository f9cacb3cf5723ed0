use linechart_rs::api::{
    DEFAULT_LABEL_PROPERTY, LINE_CHART_VIEW_TYPE, LineChartViewConfig, ViewOptionKind,
    line_chart_registration,
};
use linechart_rs::core::{AggregationMethod, PropertyId};

#[test]
fn missing_keys_fall_back_to_defaults() {
    let config = LineChartViewConfig::from_json_str("{}").expect("parse empty config");

    assert_eq!(config, LineChartViewConfig::default());
    assert!(config.show_points);
    assert!(!config.fill_area);
    assert_eq!(config.aggregation_method, AggregationMethod::Avg);
    assert_eq!(config.label_property().as_str(), DEFAULT_LABEL_PROPERTY);
}

#[test]
fn camel_case_keys_are_read() {
    let input = r#"{
        "xAxisLabelProperty": "note.date",
        "yMin": "0",
        "yMax": "100",
        "fillArea": true,
        "showPoints": false,
        "aggregationMethod": "max",
        "order": ["note.score", "file.name"],
        "displayNames": {"note.score": "Score"}
    }"#;
    let config = LineChartViewConfig::from_json_str(input).expect("parse config");

    assert_eq!(config.label_property(), PropertyId::new("note.date"));
    assert_eq!(config.y_min_bound(), Some(0.0));
    assert_eq!(config.y_max_bound(), Some(100.0));
    assert!(config.fill_area);
    assert!(!config.show_points);
    assert_eq!(config.aggregation_method, AggregationMethod::Max);
    let series: Vec<&str> = config.series_properties().map(PropertyId::as_str).collect();
    assert_eq!(series, vec!["note.score"]);
    assert_eq!(config.display_name(&PropertyId::new("note.score")), "Score");
}

#[test]
fn unknown_aggregation_method_is_a_config_error() {
    let error = LineChartViewConfig::from_json_str(r#"{"aggregationMethod": "median"}"#)
        .expect_err("unknown method");
    assert!(error.to_string().contains("view config"));
}

#[test]
fn json_round_trip_preserves_selection_order() {
    let config = LineChartViewConfig::new()
        .with_property("note.b")
        .with_property("note.a")
        .with_display_name("note.a", "Alpha")
        .with_value_bounds("-5", "")
        .with_aggregation_method(AggregationMethod::Count);

    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"aggregationMethod\": \"count\""));
    let restored = LineChartViewConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
    let order: Vec<&str> = restored.order.iter().map(PropertyId::as_str).collect();
    assert_eq!(order, vec!["note.b", "note.a"]);
}

#[test]
fn blank_rename_and_blank_label_property_fall_back() {
    let config = LineChartViewConfig::new()
        .with_label_property("")
        .with_display_name("note.mood", "   ");

    assert_eq!(config.label_property().as_str(), DEFAULT_LABEL_PROPERTY);
    assert_eq!(config.display_name(&PropertyId::new("note.mood")), "mood");
}

#[test]
fn registration_lists_every_option() {
    let registration = line_chart_registration();

    assert_eq!(registration.view_type, LINE_CHART_VIEW_TYPE);
    assert_eq!(registration.name, "Line Chart");
    let keys: Vec<&str> = registration
        .options
        .iter()
        .map(|option| option.key.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "xAxisLabelProperty",
            "yMin",
            "yMax",
            "fillArea",
            "showPoints",
            "aggregationMethod"
        ]
    );

    let ViewOptionKind::Dropdown { default, options } = &registration.options[5].kind else {
        panic!("aggregation option should be a dropdown");
    };
    assert_eq!(default, "avg");
    let values: Vec<&str> = options.iter().map(|(value, _)| value.as_str()).collect();
    assert_eq!(values, vec!["avg", "sum", "min", "max", "count"]);
}

#[test]
fn registration_json_uses_tagged_option_kinds() {
    let json = line_chart_registration()
        .to_json_pretty()
        .expect("serialize registration");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let options = value["options"].as_array().expect("options array");
    assert_eq!(options[0]["type"], "property");
    assert_eq!(options[1]["type"], "text");
    assert_eq!(options[4]["type"], "toggle");
    assert_eq!(options[4]["default"], true);
    assert_eq!(options[5]["type"], "dropdown");
    assert!(options[3].get("description").is_none());
    assert_eq!(options[0]["displayName"], "X axis label property");
}
