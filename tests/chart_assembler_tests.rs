use linechart_rs::api::{
    GROUPED_X_AXIS_TITLE, LINE_COLORS, LineChartViewConfig, MULTI_SERIES_Y_AXIS_TITLE,
    ViewMessage, palette_color, plan_chart,
};
use linechart_rs::core::{Entry, Group, ProjectionMode, PropertyValue, QueryResult};
use linechart_rs::render::{ChartDescription, Color, ThemeColors};

fn flat_result() -> QueryResult {
    QueryResult::flat(vec![
        Entry::new("b.md")
            .with_property("note.score", 4.0)
            .with_property("note.mood", PropertyValue::Null),
        Entry::new("a.md")
            .with_property("note.score", 2.0)
            .with_property("note.mood", 8.0),
    ])
}

fn single_series_config() -> LineChartViewConfig {
    LineChartViewConfig::new().with_property("note.score")
}

#[test]
fn lower_bound_only_keeps_upper_bound_automatic() {
    let config = single_series_config().with_value_bounds("0", "");
    let plan = plan_chart(&flat_result(), &config, ThemeColors::default()).expect("plan");

    assert_eq!(plan.description.y_axis.min, Some(0.0));
    assert_eq!(plan.description.y_axis.max, None);
}

#[test]
fn unparseable_bounds_fall_back_to_auto() {
    let config = single_series_config().with_value_bounds("low", " 120 units");
    let plan = plan_chart(&flat_result(), &config, ThemeColors::default()).expect("plan");

    assert_eq!(plan.description.y_axis.min, None);
    assert_eq!(plan.description.y_axis.max, Some(120.0));
}

#[test]
fn categories_follow_sorted_points_and_values_keep_nulls() {
    let config = single_series_config().with_property("note.mood");
    let plan = plan_chart(&flat_result(), &config, ThemeColors::default()).expect("plan");
    let description = &plan.description;

    assert_eq!(description.categories, vec!["a.md", "b.md"]);
    assert_eq!(description.datasets.len(), 2);
    assert_eq!(description.datasets[0].values, vec![Some(2.0), Some(4.0)]);
    assert_eq!(description.datasets[1].values, vec![Some(8.0), None]);
    assert!(description.datasets.iter().all(|dataset| dataset.span_gaps));
}

#[test]
fn axis_titles_depend_on_mode_and_series_count() {
    let config = single_series_config()
        .with_display_name("note.score", "Score")
        .with_label_property("note.day")
        .with_display_name("note.day", "Day");
    let plan = plan_chart(&flat_result(), &config, ThemeColors::default()).expect("plan");
    assert_eq!(plan.description.x_axis.title, "Day");
    assert_eq!(plan.description.y_axis.title, "Score");

    let multi = config.clone().with_property("note.mood");
    let plan = plan_chart(&flat_result(), &multi, ThemeColors::default()).expect("plan");
    assert_eq!(plan.description.y_axis.title, MULTI_SERIES_Y_AXIS_TITLE);

    let grouped = QueryResult::new(vec![Group::keyed(
        "G",
        vec![Entry::new("a.md").with_property("note.score", 1.0)],
    )]);
    let plan = plan_chart(&grouped, &config, ThemeColors::default()).expect("plan");
    assert_eq!(plan.description.mode, ProjectionMode::Grouped);
    assert_eq!(plan.description.x_axis.title, GROUPED_X_AXIS_TITLE);
}

#[test]
fn default_label_property_title_uses_property_name() {
    let plan =
        plan_chart(&flat_result(), &single_series_config(), ThemeColors::default()).expect("plan");
    assert_eq!(plan.description.x_axis.title, "name");
}

#[test]
fn colors_cycle_through_palette() {
    assert_eq!(palette_color(0).to_hex(), "#8b5cf6");
    assert_eq!(palette_color(7).to_hex(), "#84cc16");
    assert_eq!(palette_color(8), LINE_COLORS[0]);
    assert_eq!(palette_color(9), LINE_COLORS[1]);
}

#[test]
fn fill_and_point_options_shape_datasets() {
    let config = single_series_config()
        .with_fill_area(true)
        .with_show_points(false);
    let plan = plan_chart(&flat_result(), &config, ThemeColors::default()).expect("plan");
    let dataset = &plan.description.datasets[0];

    assert!(dataset.fill);
    assert_eq!(dataset.background_color.to_hex(), "#8b5cf633");
    assert_eq!(dataset.point_radius, 0.0);
    assert_eq!(dataset.point_hover_radius, 4.0);

    let plan =
        plan_chart(&flat_result(), &single_series_config(), ThemeColors::default()).expect("plan");
    let dataset = &plan.description.datasets[0];
    assert!(!dataset.fill);
    assert_eq!(dataset.background_color, Color::TRANSPARENT);
    assert_eq!(dataset.point_radius, 4.0);
    assert_eq!(dataset.point_hover_radius, 6.0);
}

#[test]
fn overlay_targets_hide_tick_labels() {
    let plan =
        plan_chart(&flat_result(), &single_series_config(), ThemeColors::default()).expect("plan");
    assert!(!plan.description.x_axis.ticks_visible);

    let grouped = QueryResult::new(vec![
        Group::keyed("A", vec![Entry::new("a.md").with_property("note.score", 1.0)]),
        Group::keyed("B", vec![Entry::new("b.md").with_property("note.score", 2.0)]),
    ]);
    let plan =
        plan_chart(&grouped, &single_series_config(), ThemeColors::default()).expect("plan");
    assert!(plan.description.x_axis.ticks_visible);
}

#[test]
fn theme_colors_pass_through() {
    let theme = ThemeColors {
        text: Color::from_hex("#dadada").expect("text color"),
        grid: Color::from_hex("#333").expect("grid color"),
    };
    let plan = plan_chart(&flat_result(), &single_series_config(), theme).expect("plan");
    assert_eq!(plan.description.theme, theme);
}

#[test]
fn missing_series_is_reported() {
    let config = LineChartViewConfig::new().with_property("file.name");
    let message = plan_chart(&flat_result(), &config, ThemeColors::default())
        .expect_err("no plottable series");
    assert_eq!(message, ViewMessage::MissingConfiguration);
}

#[test]
fn empty_projection_is_reported() {
    let config = LineChartViewConfig::new().with_property("note.absent");
    let message = plan_chart(&flat_result(), &config, ThemeColors::default())
        .expect_err("no values");
    assert_eq!(message, ViewMessage::EmptyProjection);
    assert!(message.text().starts_with("No valid data points"));
}

#[test]
fn description_json_contract_round_trip() {
    let plan =
        plan_chart(&flat_result(), &single_series_config(), ThemeColors::default()).expect("plan");

    let contract = plan
        .description
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    let restored = ChartDescription::from_json_compat_str(&contract).expect("parse contract");
    assert_eq!(restored, plan.description);

    let bare = plan.description.to_json_pretty().expect("serialize bare");
    let restored = ChartDescription::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored, plan.description);
}

#[test]
fn description_json_rejects_unknown_schema() {
    let input = r#"{"schema_version": 7, "chart": {}}"#;
    assert!(ChartDescription::from_json_compat_str(input).is_err());
}
