use approx::assert_relative_eq;
use gridmesh2d::math::Point;
use gridmesh2d::shape::Polygon;
use gridmesh2d::transformation::triangulate;

fn nonconvex() -> Vec<Point<f32>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(20.0, 10.0),
        Point::new(20.0, 0.0),
        Point::new(10.0, -10.0),
        Point::new(10.0, 0.0),
    ]
}

#[test]
fn concave_notch_is_not_meshed() {
    let outer = nonconvex();
    let trim = vec![
        Point::new(12.25, 7.25),
        Point::new(17.25, 7.25),
        Point::new(17.25, 2.25),
        Point::new(12.25, 2.25),
    ];
    let mesh = triangulate(&outer, 0.5, &[trim.clone()]).unwrap();
    let outer = Polygon::new(outer).unwrap();
    let trim = Polygon::new(trim).unwrap();

    assert!(mesh.num_triangles() > 0);

    for tri in mesh.triangles() {
        let center = tri.center();
        assert!(outer.contains_point(&center, 0.0));
        assert!(!trim.contains_point(&center, 0.0));
    }

    // 250 for the outer polygon, minus the 5x5 trimmed square. The trimmed square isn't
    // aligned with the grid so its edges are only approximated by the centroid test.
    assert_relative_eq!(mesh.area(), 225.0, epsilon = 4.5);
}

#[test]
fn unused_vertices_are_kept() {
    let mesh = triangulate(&nonconvex(), 1.0, &[]).unwrap();
    let used = mesh.used_vertices();

    assert_eq!(used.len(), mesh.vertices().len());
    assert!(mesh
        .simplices()
        .iter()
        .flatten()
        .all(|i| (*i as usize) < mesh.vertices().len()));
}
