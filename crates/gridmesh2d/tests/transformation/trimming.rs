use approx::assert_relative_eq;
use gridmesh2d::math::Point;
use gridmesh2d::shape::Polygon;
use gridmesh2d::transformation::{triangulate, triangulate_with_options, MeshOptions};

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point<f32>> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

#[test]
fn interior_hole_removes_triangles() {
    let outer = rect(0.0, 0.0, 10.0, 10.0);
    let hole = rect(3.0, 3.0, 7.0, 7.0);

    let full = triangulate(&outer, 1.0, &[]).unwrap();
    let holed = triangulate(&outer, 1.0, &[hole.clone()]).unwrap();

    assert!(holed.num_triangles() < full.num_triangles());
    assert_relative_eq!(holed.area(), 84.0, epsilon = 1.0e-3);

    let hole = Polygon::new(hole).unwrap();

    for tri in holed.triangles() {
        assert!(!hole.contains_point(&tri.center(), 0.0));
    }
}

#[test]
fn every_hole_counts() {
    let outer = rect(0.0, 0.0, 20.0, 10.0);
    let holes = vec![rect(2.0, 2.0, 6.0, 8.0), rect(12.0, 2.0, 18.0, 6.0)];

    let one = triangulate(&outer, 0.5, &holes[..1]).unwrap();
    let two = triangulate(&outer, 0.5, &holes).unwrap();

    assert!(two.num_triangles() < one.num_triangles());
    assert_relative_eq!(one.area(), 200.0 - 24.0, epsilon = 1.0e-2);
    assert_relative_eq!(two.area(), 200.0 - 24.0 - 24.0, epsilon = 1.0e-2);
}

#[test]
fn hole_corners_are_mesh_vertices() {
    let outer = rect(0.0, 0.0, 10.0, 10.0);
    let hole = rect(3.0, 3.0, 7.0, 7.0);
    let mesh = triangulate(&outer, 1.0, &[hole.clone()]).unwrap();
    let used = mesh.used_vertices();

    for corner in &hole {
        let id = mesh.vertices().iter().position(|pt| pt == corner).unwrap();
        assert!(used[id]);
    }
}

#[test]
fn erosion_options_change_the_interior_sampling() {
    let outer = rect(0.0, 0.0, 10.0, 10.0);
    let default = triangulate(&outer, 1.0, &[]).unwrap();
    let loose = triangulate_with_options(
        &outer,
        1.0,
        &[],
        &MeshOptions {
            outer_erosion: 2.5,
            ..MeshOptions::default()
        },
    )
    .unwrap();

    assert!(loose.vertices().len() < default.vertices().len());
    assert_relative_eq!(loose.area(), 100.0, epsilon = 1.0e-3);
}
