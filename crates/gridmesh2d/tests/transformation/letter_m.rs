use gridmesh2d::math::Point;
use gridmesh2d::shape::Polygon;
use gridmesh2d::transformation::triangulate;

#[test]
fn letter_m_cut_out_of_a_rectangle() {
    let background = vec![
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let trims = vec![
        vec![
            Point::new(2.5, 0.0),
            Point::new(2.5, 8.0),
            Point::new(8.0, 4.0),
            Point::new(12.0, 4.0),
            Point::new(17.5, 8.0),
            Point::new(17.5, 0.0),
        ],
        vec![
            Point::new(2.5, 10.0),
            Point::new(10.0, 5.0),
            Point::new(17.5, 10.0),
        ],
    ];

    let mesh = triangulate(&background, 0.5, &trims).unwrap();
    let trims: Vec<_> = trims
        .into_iter()
        .map(|pts| Polygon::new(pts).unwrap())
        .collect();
    let domain_area = 200.0 - trims[0].signed_area().abs() - trims[1].signed_area().abs();

    assert!(mesh.num_triangles() > 0);
    assert!(mesh.area() < 200.0);
    // Centroid classification approximates the slanted edges of the letter.
    assert!((mesh.area() - domain_area).abs() < 0.1 * domain_area);

    for tri in mesh.triangles() {
        let center = tri.center();
        assert!(trims.iter().all(|trim| !trim.contains_point(&center, 0.0)));
    }
}
