//! Profiling benchmark: build time and range queries at different coverage levels

use kdtree2d::{KdTree, Point, Rect};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random query rectangle with sides UP TO `max_size`
/// Coordinate space: the unit square
fn add_random_rect<R: Rng>(rng: &mut R, rects: &mut Vec<Rect>, max_size: f64) {
    let xmin = rng.random_range(0.0..=(1.0 - max_size));
    let ymin = rng.random_range(0.0..=(1.0 - max_size));
    let width = rng.random_range(0.0..=max_size);
    let height = rng.random_range(0.0..=max_size);

    if let Ok(rect) = Rect::new(xmin, ymin, xmin + width, ymin + height) {
        rects.push(rect);
    }
}

/// Run every query in `rects` and print the elapsed time
fn bench_range(tree: &KdTree, rects: &[Rect], label: &str) {
    let mut results = Vec::new();
    let mut found = 0usize;
    let start = Instant::now();

    for rect in rects {
        results.clear();
        tree.range_into(rect, &mut results);
        found += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "range ({label:>5} coverage) - {} queries: {:>12.2}ms ({found} points)",
        rects.len(),
        elapsed.as_secs_f64() * 1000.0
    );
}

fn main() {
    println!("kdtree2d Profiling Benchmark");
    println!("============================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let points: Vec<Point> = (0..num_items)
        .map(|_| Point::new(rng.random_range(0.0..=1.0), rng.random_range(0.0..=1.0)))
        .collect();

    let build_start = Instant::now();
    let mut tree = KdTree::with_capacity(num_items);
    for &point in &points {
        if let Err(err) = tree.insert(point) {
            eprintln!("skipping {point}: {err}");
        }
    }
    let build_total = build_start.elapsed();

    println!("build tree {} items: {:>12.2}ms", tree.len(), build_total.as_secs_f64() * 1000.0);
    println!("tree height: {}\n", tree.height());

    let mut rects_100 = Vec::new(); // 100% coverage: full space
    let mut rects_10 = Vec::new(); // 10% coverage
    let mut rects_1 = Vec::new(); // 1% coverage
    let mut rects_001 = Vec::new(); // 0.01% coverage

    for _ in 0..num_tests {
        rects_100.push(Rect::UNIT);
        add_random_rect(&mut rng, &mut rects_10, 0.1_f64.sqrt());
        add_random_rect(&mut rng, &mut rects_1, 0.1);
        add_random_rect(&mut rng, &mut rects_001, 0.01);
    }

    bench_range(&tree, &rects_100[..10], "100%");
    bench_range(&tree, &rects_10, "10%");
    bench_range(&tree, &rects_1, "1%");
    bench_range(&tree, &rects_001, "0.01%");

    // Sorted input: no rebalancing, so this is the worst case
    let chain_items = 20_000;
    let chain_start = Instant::now();
    let mut chain = KdTree::with_capacity(chain_items);
    for i in 0..chain_items {
        let v = i as f64 / chain_items as f64;
        if let Err(err) = chain.insert(Point::new(v, v)) {
            eprintln!("skipping ({v}, {v}): {err}");
        }
    }
    let chain_total = chain_start.elapsed();
    println!(
        "\nbuild sorted chain {} items: {:>12.2}ms (height {})",
        chain.len(),
        chain_total.as_secs_f64() * 1000.0,
        chain.height()
    );
}
