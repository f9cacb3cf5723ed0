use approx::assert_relative_eq;
use linechart_rs::core::{
    CategoryScale, LinearScale, project_line_segments, project_line_vertices,
};

fn scales(count: usize) -> (CategoryScale, LinearScale) {
    let x = CategoryScale::new((0.0, 200.0), count).expect("category scale");
    let y = LinearScale::new((0.0, 4.0), (400.0, 0.0)).expect("value scale");
    (x, y)
}

#[test]
fn vertices_skip_null_values() {
    let (x, y) = scales(3);
    let vertices = project_line_vertices(&[Some(1.0), None, Some(3.0)], x, y).expect("project");

    assert_eq!(vertices.len(), 2);
    assert_eq!(vertices[0].index, 0);
    assert_relative_eq!(vertices[0].x, 0.0);
    assert_relative_eq!(vertices[0].y, 300.0);
    assert_eq!(vertices[1].index, 2);
    assert_relative_eq!(vertices[1].x, 200.0);
    assert_relative_eq!(vertices[1].y, 100.0);
}

#[test]
fn span_gaps_bridges_missing_values() {
    let (x, y) = scales(3);
    let values = [Some(1.0), None, Some(3.0)];

    let bridged = project_line_segments(&values, x, y, true).expect("project");
    assert_eq!(bridged.len(), 1);
    assert_relative_eq!(bridged[0].x1, 0.0);
    assert_relative_eq!(bridged[0].x2, 200.0);

    let broken = project_line_segments(&values, x, y, false).expect("project");
    assert!(broken.is_empty());
}

#[test]
fn contiguous_values_form_one_segment_per_pair() {
    let (x, y) = scales(5);
    let values = [Some(0.0), Some(1.0), Some(2.0), None, Some(4.0)];

    assert_eq!(
        project_line_segments(&values, x, y, false)
            .expect("project")
            .len(),
        2
    );
    assert_eq!(
        project_line_segments(&values, x, y, true)
            .expect("project")
            .len(),
        3
    );
}

#[test]
fn values_beyond_category_count_are_ignored() {
    let (x, y) = scales(2);
    let vertices =
        project_line_vertices(&[Some(1.0), Some(2.0), Some(3.0)], x, y).expect("project");
    assert_eq!(vertices.len(), 2);
}
