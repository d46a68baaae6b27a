extern crate nalgebra as na;

use gridmesh2d::transformation;
use na::Point2;

fn main() {
    let outer = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 10.0),
        Point2::new(20.0, 10.0),
        Point2::new(20.0, 0.0),
        Point2::new(10.0, -10.0),
        Point2::new(10.0, 0.0),
    ];
    let trim = vec![
        Point2::new(12.25, 7.25),
        Point2::new(17.25, 7.25),
        Point2::new(17.25, 2.25),
        Point2::new(12.25, 2.25),
    ];

    // Mesh the non-convex polygon with a square hole.
    let mesh = transformation::triangulate(&outer, 0.5, &[trim]).unwrap();
    let aabb = mesh.aabb();

    println!(
        "{} vertices, {} triangles, area: {}",
        mesh.vertices().len(),
        mesh.num_triangles(),
        mesh.area()
    );
    println!("bounds: {} -> {}", aabb.mins, aabb.maxs);

    assert!(mesh.num_triangles() > 0);
}
