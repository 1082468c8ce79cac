//! The [Iterative Deepening A*](https://en.wikipedia.org/wiki/Iterative_deepening_A*) search.

mod config;
pub use self::config::{FinderConfig, StepCost};

mod observer;
pub use self::observer::SearchObserver;

mod report;
pub use self::report::{RecursionStats, SearchOutcome, SearchReport, SearchStats};

use crate::{
	heuristic::{Heuristic, NamedHeuristic},
	path::{Cost, Path},
	Grid, GridError, Node, Point, UnknownHeuristic,
};
use hashbrown::HashSet;
use log::{debug, trace, warn};
use std::time::{Duration, Instant};

/// Finds Paths on a [`Grid`] using Iterative Deepening A*.
///
/// Every iteration is a depth-first search that gives up on any branch whose estimate
/// `f = g + weight * h` exceeds the current cutoff. The smallest estimate that was cut off
/// becomes the cutoff of the next iteration, until the goal is found, the Grid is exhausted or
/// the time limit runs out.
///
/// Only the Grid's orthogonal, walkable Neighbors are considered. A search never modifies the
/// Grid, so one Grid can be searched any number of times, also from several threads.
///
/// With [`Manhattan`](crate::heuristic::Manhattan), a weight of `1` and
/// [`StepCost::Uniform`], the Path is a shortest one. Other Heuristics may overestimate and
/// trade that guarantee for avoiding water.
///
/// ## Examples
/// ```
/// use hazard_pathfinding::{FinderConfig, Grid, IdaStarFinder};
///
/// let grid = Grid::new(3, 3).unwrap();
/// let finder = IdaStarFinder::new(FinderConfig::default());
///
/// let path = finder.find_path((0, 0), (2, 2), &grid).unwrap();
/// assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
/// ```
///
/// Unreachable goals give an empty Path, invalid coordinates an error:
/// ```
/// # use hazard_pathfinding::{FinderConfig, Grid, GridError, IdaStarFinder};
/// let mut grid = Grid::new(3, 3).unwrap();
/// for y in 0..3 {
///     grid.set_walkable_at(1, y, false);
/// }
/// let finder = IdaStarFinder::new(FinderConfig::default());
///
/// assert!(finder.find_path((0, 0), (2, 2), &grid).unwrap().is_empty());
/// assert!(matches!(
///     finder.find_path((0, 0), (3, 0), &grid),
///     Err(GridError::OutOfBounds { x: 3, y: 0, .. })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct IdaStarFinder<H = NamedHeuristic> {
	heuristic: H,
	config: FinderConfig,
	heuristic_fallback: Option<UnknownHeuristic>,
}

impl IdaStarFinder<NamedHeuristic> {
	/// Creates a Finder using the Manhattan Heuristic
	pub fn new(config: FinderConfig) -> IdaStarFinder<NamedHeuristic> {
		IdaStarFinder::with_heuristic(NamedHeuristic::Manhattan, config)
	}

	/// Creates a Finder using the Heuristic registered as `name`.
	///
	/// Unknown names fall back to Manhattan. The fallback is logged as a warning and reported
	/// in every [`SearchReport::heuristic_fallback`].
	///
	/// ```
	/// # use hazard_pathfinding::{FinderConfig, Grid, IdaStarFinder};
	/// # use hazard_pathfinding::heuristic::NamedHeuristic;
	/// let finder = IdaStarFinder::from_heuristic_name("dijkstra", FinderConfig::default());
	/// assert_eq!(*finder.heuristic(), NamedHeuristic::Manhattan);
	///
	/// let grid = Grid::new(2, 2).unwrap();
	/// let report = finder.search((0, 0), (1, 1), &grid).unwrap();
	/// assert_eq!(report.heuristic_fallback.unwrap().name, "dijkstra");
	/// ```
	pub fn from_heuristic_name(name: &str, config: FinderConfig) -> IdaStarFinder<NamedHeuristic> {
		match NamedHeuristic::lookup(name) {
			Ok(heuristic) => IdaStarFinder::with_heuristic(heuristic, config),
			Err(err) => {
				warn!("{}; falling back to {}", err, NamedHeuristic::Manhattan.name());
				IdaStarFinder {
					heuristic_fallback: Some(err),
					..IdaStarFinder::new(config)
				}
			}
		}
	}
}

impl Default for IdaStarFinder<NamedHeuristic> {
	fn default() -> IdaStarFinder<NamedHeuristic> {
		IdaStarFinder::new(FinderConfig::default())
	}
}

impl<H: Heuristic> IdaStarFinder<H> {
	/// Creates a Finder with any [`Heuristic`], including closures
	/// `Fn(&Node, &Node) -> f64`.
	pub fn with_heuristic(heuristic: H, config: FinderConfig) -> IdaStarFinder<H> {
		IdaStarFinder {
			heuristic,
			config,
			heuristic_fallback: None,
		}
	}

	/// The Heuristic in use
	pub fn heuristic(&self) -> &H {
		&self.heuristic
	}

	/// The options this Finder was created with
	pub fn config(&self) -> &FinderConfig {
		&self.config
	}

	/// Finds a Path from `start` to `goal`, both inclusive.
	///
	/// Returns an empty Vec if there is no Path or if the time limit ran out before one was
	/// found. Use [`search`](IdaStarFinder::search) to tell the two apart.
	///
	/// ## Errors
	/// [`GridError::OutOfBounds`] if `start` or `goal` is outside of the Grid.
	pub fn find_path(&self, start: Point, goal: Point, grid: &Grid) -> Result<Vec<Point>, GridError> {
		Ok(self.search(start, goal, grid)?.outcome.into_points())
	}

	/// Like [`find_path`](IdaStarFinder::find_path), but returns the whole [`SearchReport`].
	pub fn search(&self, start: Point, goal: Point, grid: &Grid) -> Result<SearchReport, GridError> {
		self.search_observed(start, goal, grid, &mut ())
	}

	/// Like [`search`](IdaStarFinder::search), reporting progress to `observer`.
	pub fn search_observed<O: SearchObserver>(
		&self,
		start: Point,
		goal: Point,
		grid: &Grid,
		observer: &mut O,
	) -> Result<SearchReport, GridError> {
		let start_node = grid.try_node_at(start.0, start.1)?;
		let goal_node = grid.try_node_at(goal.0, goal.1)?;

		let mut search = Search {
			grid,
			goal: goal_node,
			heuristic: &self.heuristic,
			observer,
			weight: self.config.effective_weight(),
			config: &self.config,
			started: Instant::now(),
			timed_out: false,
			branch: Vec::new(),
			on_branch: HashSet::new(),
			goal_cost: 0.0,
			stats: SearchStats::default(),
			recursion: self.config.track_recursion.then(RecursionStats::default),
		};

		let mut cutoff = self.heuristic.estimate(start_node, goal_node);

		let outcome = loop {
			let iteration = search.stats.iterations;
			search.stats.iterations += 1;
			search.stats.final_cutoff = cutoff;
			debug!("IDA* iteration {} with cutoff {}", iteration, cutoff);
			search.observer.on_iteration(iteration, cutoff);

			search.branch.clear();
			search.on_branch.clear();

			match search.probe(start_node, 0.0, cutoff, 0) {
				Probe::Goal => {
					let steps = std::mem::take(&mut search.branch);
					break SearchOutcome::Found(Path::new(steps, search.goal_cost));
				}
				Probe::Bound(bound) if bound == Cost::INFINITY => {
					break if search.timed_out {
						SearchOutcome::TimedOut
					} else {
						SearchOutcome::Unreachable
					};
				}
				Probe::Bound(bound) => cutoff = bound,
			}
		};

		search.stats.elapsed = search.started.elapsed();
		debug!(
			"IDA* from {:?} to {:?}: {} after {} iteration(s), {} node(s) in {:?}",
			start,
			goal,
			outcome,
			search.stats.iterations,
			search.stats.nodes_visited,
			search.stats.elapsed
		);

		Ok(SearchReport {
			outcome,
			stats: search.stats,
			recursion: search.recursion,
			heuristic_fallback: self.heuristic_fallback.clone(),
		})
	}

	/// Runs [`find_path`](IdaStarFinder::find_path) for every `(start, goal)` pair.
	///
	/// The searches are independent and, with the `parallel` feature, run on the rayon thread
	/// pool. Results are in the order of `queries`.
	pub fn find_paths(
		&self,
		queries: &[(Point, Point)],
		grid: &Grid,
	) -> Vec<Result<Vec<Point>, GridError>>
	where
		H: Sync,
	{
		#[cfg(feature = "parallel")]
		{
			use rayon::prelude::*;
			queries
				.par_iter()
				.map(|&(start, goal)| self.find_path(start, goal, grid))
				.collect()
		}
		#[cfg(not(feature = "parallel"))]
		{
			queries
				.iter()
				.map(|&(start, goal)| self.find_path(start, goal, grid))
				.collect()
		}
	}
}

/// The result of probing a single Node.
enum Probe {
	/// the goal was reached, `Search::branch` holds the route
	Goal,
	/// the smallest estimate that exceeded the cutoff, `INFINITY` if nothing did
	Bound(Cost),
}

/// The state of one call to `search_observed`. Nothing in here outlives that call.
struct Search<'a, H, O> {
	grid: &'a Grid,
	goal: &'a Node,
	heuristic: &'a H,
	observer: &'a mut O,
	weight: f64,
	config: &'a FinderConfig,
	started: Instant,
	timed_out: bool,
	branch: Vec<Point>,
	on_branch: HashSet<Point>,
	goal_cost: Cost,
	stats: SearchStats,
	recursion: Option<RecursionStats>,
}

impl<'a, H: Heuristic, O: SearchObserver> Search<'a, H, O> {
	fn out_of_time(&self) -> bool {
		self.config
			.time_limit
			.map_or(false, |limit: Duration| self.started.elapsed() > limit)
	}

	fn probe(&mut self, node: &'a Node, g: Cost, cutoff: Cost, depth: usize) -> Probe {
		self.stats.nodes_visited += 1;

		if self.timed_out || self.out_of_time() {
			self.timed_out = true;
			return Probe::Bound(Cost::INFINITY);
		}
		if self.config.max_depth.map_or(false, |max| depth > max) {
			return Probe::Bound(Cost::INFINITY);
		}

		let point = node.pos();
		let f = g + self.heuristic.estimate(node, self.goal) * self.weight;
		if f > cutoff {
			self.observer.on_prune(point, f);
			return Probe::Bound(f);
		}

		if let Some(recursion) = &mut self.recursion {
			recursion.max_depth = recursion.max_depth.max(depth);
			trace!("visit {:?} g={} f={} depth={}", point, g, f, depth);
		}
		self.observer.on_visit(point, g, f, depth);

		self.branch.push(point);
		self.on_branch.insert(point);

		if point == self.goal.pos() {
			self.goal_cost = g;
			self.observer.on_goal(point, depth);
			return Probe::Goal;
		}

		let grid = self.grid;
		let mut min = Cost::INFINITY;
		for neighbor in grid.neighbors(point) {
			if self.on_branch.contains(&neighbor.pos()) {
				if let Some(recursion) = &mut self.recursion {
					recursion.branch_skips += 1;
				}
				continue;
			}
			let step = self.config.step_cost.cost(node, neighbor);
			match self.probe(neighbor, g + step, cutoff, depth + 1) {
				Probe::Goal => return Probe::Goal,
				Probe::Bound(bound) => min = min.min(bound),
			}
		}

		self.branch.pop();
		self.on_branch.remove(&point);
		if let Some(recursion) = &mut self.recursion {
			recursion.backtracks += 1;
		}
		self.observer.on_backtrack(point);

		Probe::Bound(min)
	}
}
