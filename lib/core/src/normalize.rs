use crate::graph::Node;

/// Fixed scale reduction applied to both axes.
pub const REDUCER: f64 = 2.0;

/// Rescales node coordinates into a top-left-origin rendering space.
///
/// Subtracts the per-axis minimum over the given subset, divides by
/// [`REDUCER`], then flips the vertical axis around its new maximum. Applied
/// in place; purely cosmetic and not a geographic projection. Deterministic
/// for identical input.
pub fn normalize(nodes: &mut [Node]) {
    if nodes.is_empty() {
        return;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for node in nodes.iter() {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
    }

    for node in nodes.iter_mut() {
        node.x = (node.x - min_x) / REDUCER;
        node.y = (node.y - min_y) / REDUCER;
    }

    let mut max_y = f64::NEG_INFINITY;
    for node in nodes.iter() {
        max_y = max_y.max(node.y);
    }
    for node in nodes.iter_mut() {
        node.y = max_y - node.y;
    }
}
