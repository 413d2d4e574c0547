//! Load points from a file and find the nearest one to a query point.
//!
//! `cargo run --example nearest_neighbor -- demos/data/circle10.txt 0.81 0.3`
use kdtree2d::io::load_points;
use kdtree2d::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/data/circle10.txt".to_string());
    let x: f64 = args.next().as_deref().unwrap_or("0.5").parse()?;
    let y: f64 = args.next().as_deref().unwrap_or("0.5").parse()?;
    let query = Point::try_new(x, y)?;

    let points = load_points(&path)?;
    let tree = KdTree::from_points(points.iter().copied())?;
    let mut brute = PointSet::with_capacity(points.len());
    for &point in &points {
        brute.insert(point)?;
    }

    println!("Loaded {} points from {} (tree height {})", tree.len(), path, tree.height());
    match tree.nearest_with_distance(query) {
        Some((point, distance)) => println!("Nearest to {query}: {point} at distance {distance:.6}"),
        None => println!("No points loaded"),
    }
    if let Some(point) = brute.nearest(query) {
        println!("Brute force agrees on distance: {}", point.distance_to(query));
    }
    Ok(())
}
