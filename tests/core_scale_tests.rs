use approx::assert_relative_eq;
use linechart_rs::core::{CategoryScale, LinearScale, ValueDomainTuning, resolve_value_domain};

#[test]
fn linear_scale_maps_onto_inverted_range() {
    let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("valid scale");

    assert_relative_eq!(scale.domain_to_pixel(5.0).expect("map"), 50.0);
    assert_relative_eq!(scale.domain_to_pixel(10.0).expect("map"), 0.0);
    assert_relative_eq!(scale.pixel_to_domain(25.0).expect("invert"), 7.5);
}

#[test]
fn linear_scale_rejects_degenerate_input() {
    assert!(LinearScale::new((1.0, 1.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 100.0)).is_err());

    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
}

#[test]
fn category_scale_places_points_on_edges() {
    let scale = CategoryScale::new((0.0, 300.0), 4).expect("valid scale");

    assert_relative_eq!(scale.step(), 100.0);
    assert_eq!(scale.pixel_for_index(0), Some(0.0));
    assert_eq!(scale.pixel_for_index(3), Some(300.0));
    assert_eq!(scale.pixel_for_index(4), None);
}

#[test]
fn single_category_is_centered() {
    let scale = CategoryScale::new((50.0, 150.0), 1).expect("valid scale");
    assert_eq!(scale.pixel_for_index(0), Some(100.0));
    assert_eq!(scale.nearest_index(10.0), Some(0));
}

#[test]
fn nearest_index_rounds_and_clamps() {
    let scale = CategoryScale::new((0.0, 100.0), 3).expect("valid scale");

    assert_eq!(scale.nearest_index(-20.0), Some(0));
    assert_eq!(scale.nearest_index(30.0), Some(1));
    assert_eq!(scale.nearest_index(74.0), Some(1));
    assert_eq!(scale.nearest_index(140.0), Some(2));
    assert_eq!(scale.nearest_index(f64::NAN), None);

    let empty = CategoryScale::new((0.0, 100.0), 0).expect("valid scale");
    assert_eq!(empty.nearest_index(50.0), None);
}

#[test]
fn auto_domain_pads_data_extent() {
    let tuning = ValueDomainTuning::default();

    let (min, max) = resolve_value_domain(None, None, [0.0, 10.0], tuning).expect("domain");
    assert_relative_eq!(min, -0.5);
    assert_relative_eq!(max, 10.5);

    let (min, max) = resolve_value_domain(None, None, [5.0], tuning).expect("domain");
    assert_relative_eq!(min, 4.5);
    assert_relative_eq!(max, 5.5);

    let (min, max) = resolve_value_domain(None, None, [], tuning).expect("domain");
    assert_relative_eq!(min, -0.05);
    assert_relative_eq!(max, 1.05);
}

#[test]
fn fixed_bounds_win_over_data() {
    let tuning = ValueDomainTuning::default();

    let (min, max) = resolve_value_domain(Some(0.0), None, [2.0, 4.0], tuning).expect("domain");
    assert_relative_eq!(min, 0.0);
    assert_relative_eq!(max, 4.1);

    let (min, max) =
        resolve_value_domain(Some(0.0), Some(100.0), [2.0, 4.0], tuning).expect("domain");
    assert_relative_eq!(min, 0.0);
    assert_relative_eq!(max, 100.0);
}

#[test]
fn one_sided_bound_beyond_data_keeps_a_positive_span() {
    let tuning = ValueDomainTuning::default();

    let (min, max) = resolve_value_domain(Some(10.0), None, [1.0, 2.0], tuning).expect("domain");
    assert_relative_eq!(min, 10.0);
    assert_relative_eq!(max, 11.0);

    let (min, max) = resolve_value_domain(None, Some(-4.0), [1.0, 2.0], tuning).expect("domain");
    assert_relative_eq!(min, -5.0);
    assert_relative_eq!(max, -4.0);
}

#[test]
fn inverted_fixed_bounds_are_rejected() {
    let result = resolve_value_domain(Some(5.0), Some(1.0), [2.0], ValueDomainTuning::default());
    assert!(result.is_err());
}

#[test]
fn extreme_data_still_yields_a_drawable_domain() {
    let tuning = ValueDomainTuning::default();
    let cases: [&[f64]; 5] = [
        &[1e16],
        &[1e16, 1e16],
        &[1e308, -1e308],
        &[f64::MAX, f64::MIN],
        &[f64::MAX],
    ];

    for values in cases {
        let (min, max) =
            resolve_value_domain(None, None, values.iter().copied(), tuning).expect("domain");
        assert!(min.is_finite() && max.is_finite(), "{values:?}");
        assert!(min < max, "{values:?} gave {min}..{max}");

        let scale = LinearScale::new((min, max), (400.0, 0.0)).expect("scale");
        for &value in values {
            let pixel = scale.domain_to_pixel(value).expect("pixel");
            assert!((0.0..=400.0).contains(&pixel), "{value} mapped to {pixel}");
        }
    }
}

#[test]
fn full_range_scale_inverts_without_overflow() {
    let scale = LinearScale::new((f64::MIN, f64::MAX), (0.0, 100.0)).expect("scale");
    assert_relative_eq!(scale.domain_to_pixel(0.0).expect("pixel"), 50.0);
    assert_relative_eq!(scale.pixel_to_domain(100.0).expect("value"), f64::MAX);
    assert_relative_eq!(scale.pixel_to_domain(50.0).expect("value"), 0.0);
}

#[test]
fn fixed_bound_at_the_float_limit_is_rejected() {
    let tuning = ValueDomainTuning::default();
    assert!(resolve_value_domain(Some(f64::MAX), None, [1.0], tuning).is_err());
    assert!(resolve_value_domain(Some(f64::INFINITY), None, [1.0], tuning).is_err());
}
