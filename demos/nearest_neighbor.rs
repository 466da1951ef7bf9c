//! Example demonstrating the point index end to end.
//!
//! Builds a balanced 2-D tree, runs nearest-neighbor queries, inserts a new
//! point, and renders the tree structure as an ASCII grid.

use std::fmt;

use kd_index::kdtree::KdTree;
use kd_index::render::render_grid;
use kd_index::KdPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point2 {
    x: f64,
    y: f64,
}

impl Point2 {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl KdPoint for Point2 {
    type Value = f64;

    fn dims(&self) -> usize {
        2
    }

    fn value(&self, dim: usize) -> f64 {
        match dim {
            0 => self.x,
            _ => self.y,
        }
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.x, self.y)
    }
}

fn main() {
    println!("=== k-d Point Index Example ===\n");

    let points = vec![
        Point2::new(5.0, 4.0),
        Point2::new(2.0, 6.0),
        Point2::new(13.0, 3.0),
        Point2::new(3.0, 1.0),
        Point2::new(10.0, 2.0),
        Point2::new(8.0, 7.0),
    ];

    // The comparator supplies both ordering (sign) and per-axis distance
    // (squared magnitude); coordinate subtraction gives Euclidean behavior.
    let mut tree = KdTree::build(points, |a: &Point2, b: &Point2, dim: usize| {
        a.value(dim) - b.value(dim)
    })
    .expect("points share one dimension count");

    println!(
        "1. Built a balanced tree with {} points (height {}):\n",
        tree.size(),
        tree.height()
    );
    println!("{}", render_grid(&tree));

    println!("2. Nearest-neighbor queries:");
    for query in [
        Point2::new(9.0, 4.0),
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 1.0),
    ] {
        if let Some(found) = tree.nearest(&query) {
            println!("  nearest to {query} -> {found}");
        }
    }

    println!("\n3. Inserting <1,1> and querying it back:");
    tree.insert(Point2::new(1.0, 1.0))
        .expect("dimension count matches the tree");
    if let Some(found) = tree.nearest(&Point2::new(1.0, 1.0)) {
        println!("  nearest to <1,1> -> {found}");
    }

    println!("\n4. Tree after insertion ({} points):\n", tree.size());
    println!("{}", render_grid(&tree));

    println!("5. Depth-first traversal:");
    tree.for_each(|node, depth| {
        println!("  depth {}: {}", depth, node.point());
    });
}
