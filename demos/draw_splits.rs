//! Render a tree's points and splitting lines as SVG.
//!
//! `cargo run --example draw_splits -- demos/data/circle10.txt > splits.svg`
use std::fmt::Write as _;

use kdtree2d::io::load_points;
use kdtree2d::prelude::*;
use tracing_subscriber::EnvFilter;

const SIZE: f64 = 512.0;

/// Canvas that accumulates SVG elements; y grows upwards like the unit square
#[derive(Debug)]
struct SvgCanvas {
    body: String,
}

impl SvgCanvas {
    fn new() -> Self {
        Self { body: String::new() }
    }

    fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SIZE}\" height=\"{SIZE}\">\n\
             <rect width=\"{SIZE}\" height=\"{SIZE}\" fill=\"white\" stroke=\"black\"/>\n{}</svg>\n",
            self.body
        )
    }
}

fn screen(p: Point) -> (f64, f64) {
    (p.x() * SIZE, (1.0 - p.y()) * SIZE)
}

impl Canvas for SvgCanvas {
    fn point(&mut self, p: Point) {
        let (cx, cy) = screen(p);
        let _ = writeln!(self.body, "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"3\" fill=\"black\"/>");
    }

    fn segment(&mut self, from: Point, to: Point, axis: Axis) {
        let (x1, y1) = screen(from);
        let (x2, y2) = screen(to);
        let color = match axis {
            Axis::X => "red",
            Axis::Y => "blue",
        };
        let _ = writeln!(
            self.body,
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\"/>"
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "demos/data/circle10.txt".to_string());
    let tree = KdTree::from_points(load_points(&path)?)?;

    let mut canvas = SvgCanvas::new();
    tree.draw(&mut canvas);
    print!("{}", canvas.finish());
    Ok(())
}
