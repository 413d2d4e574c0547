//! Load points from a file and list the ones inside a rectangle.
//!
//! `cargo run --example range_search -- demos/data/circle10.txt 0.0 0.0 0.6 0.6`
use kdtree2d::io::load_points;
use kdtree2d::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/data/circle10.txt".to_string());
    let mut bounds = [0.0, 0.0, 0.6, 0.6];
    for bound in bounds.iter_mut() {
        if let Some(arg) = args.next() {
            *bound = arg.parse()?;
        }
    }
    let [xmin, ymin, xmax, ymax] = bounds;
    let rect = Rect::new(xmin, ymin, xmax, ymax)?;

    let tree = KdTree::from_points(load_points(&path)?)?;
    let mut found = tree.range(&rect);
    found.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));

    println!("{} of {} points lie in {rect}:", found.len(), tree.len());
    for point in found {
        println!("  {point}");
    }
    Ok(())
}
