extern crate nalgebra as na;

use gridmesh2d::transformation::{self, MeshError};
use na::Point2;

fn main() -> Result<(), MeshError> {
    let background = vec![
        Point2::new(0.0, 0.0),
        Point2::new(20.0, 0.0),
        Point2::new(20.0, 10.0),
        Point2::new(0.0, 10.0),
    ];
    // The letter "M" is what remains after cutting these two pieces out.
    let trims = vec![
        vec![
            Point2::new(2.5, 0.0),
            Point2::new(2.5, 8.0),
            Point2::new(8.0, 4.0),
            Point2::new(12.0, 4.0),
            Point2::new(17.5, 8.0),
            Point2::new(17.5, 0.0),
        ],
        vec![
            Point2::new(2.5, 10.0),
            Point2::new(10.0, 5.0),
            Point2::new(17.5, 10.0),
        ],
    ];

    let mesh = transformation::triangulate(&background, 0.5, &trims)?;
    let unused = mesh.used_vertices().iter().filter(|used| !**used).count();

    println!(
        "{} triangles over {} vertices ({} unused), area: {}",
        mesh.num_triangles(),
        mesh.vertices().len(),
        unused,
        mesh.area()
    );

    for (i, [a, b, c]) in mesh.simplices().iter().take(5).enumerate() {
        println!("triangle {}: {} {} {}", i, a, b, c);
    }

    Ok(())
}
