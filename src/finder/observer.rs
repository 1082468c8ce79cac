use crate::{path::Cost, Point};

/// Receives progress events from a running search, e.g. to animate it.
///
/// All methods default to doing nothing. `()` is the observer that ignores everything.
///
/// ```
/// use hazard_pathfinding::{finder::SearchObserver, FinderConfig, Grid, IdaStarFinder, Point};
///
/// #[derive(Default)]
/// struct Trail(Vec<Point>);
///
/// impl SearchObserver for Trail {
///     fn on_visit(&mut self, point: Point, _g: f64, _f: f64, _depth: usize) {
///         self.0.push(point);
///     }
/// }
///
/// let grid = Grid::new(3, 1).unwrap();
/// let mut trail = Trail::default();
/// IdaStarFinder::new(FinderConfig::default())
///     .search_observed((0, 0), (2, 0), &grid, &mut trail)
///     .unwrap();
/// assert_eq!(trail.0, vec![(0, 0), (1, 0), (2, 0)]);
/// ```
pub trait SearchObserver {
	/// A new deepening iteration starts with the given cutoff
	fn on_iteration(&mut self, _iteration: usize, _cutoff: Cost) {}
	/// A Node is entered with accumulated cost `g` and estimate `f`
	fn on_visit(&mut self, _point: Point, _g: Cost, _f: Cost, _depth: usize) {}
	/// A Node was rejected because `f` exceeded the current cutoff
	fn on_prune(&mut self, _point: Point, _f: Cost) {}
	/// The search leaves an expanded Node without having found the goal
	fn on_backtrack(&mut self, _point: Point) {}
	/// The goal was reached at `depth`
	fn on_goal(&mut self, _point: Point, _depth: usize) {}
}

impl SearchObserver for () {}
