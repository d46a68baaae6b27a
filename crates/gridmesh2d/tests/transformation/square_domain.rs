use approx::assert_relative_eq;
use gridmesh2d::bounding_volume::Aabb;
use gridmesh2d::math::Point;
use gridmesh2d::shape::PolygonError;
use gridmesh2d::transformation::{triangulate, BoundaryId, MeshError};

fn square() -> Vec<Point<f32>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

#[test]
fn square_covers_its_area() {
    let mesh = triangulate(&square(), 5.0, &[]).unwrap();
    let bounds = Aabb::from_points_ref(&square());

    assert!(mesh.num_triangles() > 0);
    assert_relative_eq!(mesh.area(), 100.0, epsilon = 1.0e-3);

    for tri in mesh.triangles() {
        assert!(bounds.contains_local_point(&tri.a));
        assert!(bounds.contains_local_point(&tri.b));
        assert!(bounds.contains_local_point(&tri.c));
    }
}

#[test]
fn finer_mesh_sizes_give_more_triangles() {
    let coarse = triangulate(&square(), 5.0, &[]).unwrap();
    let fine = triangulate(&square(), 0.5, &[]).unwrap();

    assert!(fine.num_triangles() > coarse.num_triangles());
    assert_relative_eq!(fine.area(), 100.0, epsilon = 1.0e-2);

    // Every sampled point of a convex domain is used by the mesh.
    assert!(fine.used_vertices().into_iter().all(|used| used));
}

#[test]
fn triangles_are_counter_clockwise() {
    let mesh = triangulate(&square(), 1.0, &[]).unwrap();

    for tri in mesh.triangles() {
        assert!(tri.signed_area() > 0.0);
    }
}

#[test]
fn triangulate_is_deterministic() {
    let mesh1 = triangulate(&square(), 0.7, &[]).unwrap();
    let mesh2 = triangulate(&square(), 0.7, &[]).unwrap();

    assert_eq!(mesh1.vertices(), mesh2.vertices());
    assert_eq!(mesh1.simplices(), mesh2.simplices());
}

#[test]
fn two_point_outer_boundary_is_invalid() {
    let outer = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];

    assert_eq!(
        triangulate(&outer, 1.0, &[]).unwrap_err(),
        MeshError::InvalidPolygon {
            boundary: BoundaryId::Outer,
            error: PolygonError::TooFewVertices(2),
        }
    );
}

#[test]
fn zero_mesh_size_is_invalid() {
    assert!(matches!(
        triangulate(&square(), 0.0, &[]),
        Err(MeshError::InvalidParameter { .. })
    ));
    assert!(matches!(
        triangulate(&square(), -2.0, &[]),
        Err(MeshError::InvalidParameter { .. })
    ));
}

#[test]
fn tiny_mesh_size_fails_cleanly() {
    assert_eq!(
        triangulate(&square(), 1.0e-30, &[]).unwrap_err(),
        MeshError::InvalidParameter {
            name: "mesh_size",
            value: 1.0e-30,
        }
    );
}
