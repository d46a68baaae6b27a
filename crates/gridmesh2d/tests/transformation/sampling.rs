use gridmesh2d::math::{Point, Real};
use gridmesh2d::shape::Polygon;
use gridmesh2d::transformation::{
    edge_sample_count, sample_boundaries, sample_interior, sample_polygon_edges, MeshOptions,
};

fn nonconvex() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(20.0, 10.0),
        Point::new(20.0, 0.0),
        Point::new(10.0, -10.0),
        Point::new(10.0, 0.0),
    ])
    .unwrap()
}

#[test]
fn edge_samples_match_edge_counts() {
    let polygon = nonconvex();

    for mesh_size in [0.3, 0.5, 1.0, 2.5, 40.0] {
        let expected: usize = polygon
            .segments()
            .map(|seg| edge_sample_count(&seg.a, &seg.b, mesh_size))
            .sum();
        let samples = sample_polygon_edges(&polygon, mesh_size).unwrap();

        assert_eq!(samples.len(), expected);

        for pt in &samples {
            assert!(polygon.distance_to_boundary(pt) < 1.0e-4);
        }
    }
}

#[test]
fn boundary_samples_are_unique() {
    let polygon = nonconvex();
    let samples = sample_boundaries(&polygon, &[], 0.5).unwrap();

    for (i, a) in samples.iter().enumerate() {
        assert!(samples[i + 1..].iter().all(|b| a != b));
    }

    for vtx in polygon.vertices() {
        assert!(samples.contains(vtx));
    }
}

#[test]
fn interior_samples_respect_erosion() {
    let outer = nonconvex();
    let trim = Polygon::new(vec![
        Point::new(12.25, 7.25),
        Point::new(17.25, 7.25),
        Point::new(17.25, 2.25),
        Point::new(12.25, 2.25),
    ])
    .unwrap();

    for mesh_size in [0.5 as Real, 0.75, 1.0] {
        let pts = sample_interior(
            &outer,
            core::slice::from_ref(&trim),
            mesh_size,
            &MeshOptions::default(),
        )
        .unwrap();

        assert!(!pts.is_empty());

        for pt in &pts {
            assert!(outer.contains_point(pt, 0.0));
            assert!(outer.distance_to_boundary(pt) >= mesh_size);
            assert!(!trim.contains_point(pt, -mesh_size));
        }
    }
}
