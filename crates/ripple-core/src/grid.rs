//! Uniform 1D grid with fixed point positions.

/// A uniform one-dimensional grid of `N + 1` points `x_i = i * dx`.
///
/// Positions are computed once at construction and never change; a
/// different geometry requires a new grid.
///
/// # Examples
///
/// ```
/// use ripple_core::Grid1D;
///
/// let grid = Grid1D::new(4, 1.0);
/// assert_eq!(grid.positions(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(grid.nearest_index(2.4), 2);
/// assert_eq!(grid.nearest_index(-7.0), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid1D {
    dx: f64,
    positions: Vec<f64>,
}

impl Grid1D {
    /// Build the grid for `grid_count` cells of width `dx`.
    ///
    /// # Panics
    ///
    /// Panics if `grid_count` is zero.
    pub fn new(grid_count: usize, dx: f64) -> Self {
        assert!(grid_count > 0, "Grid1D needs at least one cell");
        let positions = (0..=grid_count).map(|i| i as f64 * dx).collect();
        Self { dx, positions }
    }

    /// Number of points, `N + 1`.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always returns `false`; construction rejects `grid_count == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of cells, `N`.
    pub fn grid_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Grid spacing.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Point positions in ascending order.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Position of the last point.
    pub fn extent(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }

    /// Index of the point closest to `x`.
    ///
    /// Scans in ascending order and keeps the first minimum, so a
    /// coordinate exactly halfway between two points resolves to the
    /// smaller index. Coordinates outside the domain resolve to the
    /// nearest endpoint. A non-finite coordinate resolves to 0.
    pub fn nearest_index(&self, x: f64) -> usize {
        let mut best = 0;
        let mut best_dist = (self.positions[0] - x).abs();
        for (i, &p) in self.positions.iter().enumerate().skip(1) {
            let dist = (p - x).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }
}
