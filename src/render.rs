//! ASCII rendering of a tree's structure.
//!
//! A read-only consumer of the public traversal surface, useful for
//! debugging and demos. Nodes are laid out level by level on a grid of
//! `2^height - 1` columns, each node centered over its subtree, each cell
//! padded to the widest rendered point.

use std::fmt::Display;

use crate::kdtree::{KdTree, Node};
use crate::point::KdPoint;
use crate::r#type::DeltaNum;

/// Renders the tree as an ASCII grid, one row per level.
///
/// Returns an empty string for an empty tree. The grid is `2^height - 1`
/// cells wide, so this is intended for small trees.
pub fn render_grid<P, N, C>(tree: &KdTree<P, N, C>) -> String
where
    P: KdPoint + Display,
    N: DeltaNum,
    C: Fn(&P, &P, usize) -> N,
{
    let Some(root) = tree.root() else {
        return String::new();
    };

    let height = tree.height();
    let cols = (1usize << height) - 1;
    let mut grid = vec![vec![String::new(); cols]; height];
    fill_cells(root, 0, cols, 0, &mut grid);

    let width = grid
        .iter()
        .flatten()
        .map(|cell| cell.len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in &grid {
        for cell in row {
            out.push_str(cell);
            for _ in cell.len()..width {
                out.push(' ');
            }
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

/// Writes `node`'s rendering into the cell centered between columns `left`
/// and `right`, then descends into the halves on either side of it.
fn fill_cells<P: Display>(
    node: &Node<P>,
    left: usize,
    right: usize,
    row: usize,
    grid: &mut [Vec<String>],
) {
    let mid = (left + right) / 2;
    grid[row][mid] = node.point().to_string();

    if let Some(child) = node.left() {
        fill_cells(child, left, mid, row + 1, grid);
    }
    if let Some(child) = node.right() {
        fill_cells(child, mid + 1, right, row + 1, grid);
    }
}
