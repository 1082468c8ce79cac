use crate::{
	path::{Cost, Path},
	Point, UnknownHeuristic,
};
use std::{fmt, time::Duration};

/// How a search ended
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
	/// The goal was reached
	Found(Path<Point>),
	/// Every branch was exhausted without reaching the goal.
	///
	/// Either there is no Path, or every Path is longer than
	/// [`FinderConfig::max_depth`](crate::FinderConfig::max_depth) allows.
	Unreachable,
	/// The time limit ran out before a Path was found
	TimedOut,
}

impl SearchOutcome {
	/// The Path, if one was found
	pub fn path(&self) -> Option<&Path<Point>> {
		match self {
			SearchOutcome::Found(path) => Some(path),
			_ => None,
		}
	}

	/// Whether a Path was found
	pub fn is_found(&self) -> bool {
		matches!(self, SearchOutcome::Found(_))
	}

	/// The Points of the Path, or an empty Vec for both [`Unreachable`](SearchOutcome::Unreachable)
	/// and [`TimedOut`](SearchOutcome::TimedOut)
	pub fn into_points(self) -> Vec<Point> {
		match self {
			SearchOutcome::Found(path) => path.to_vec(),
			_ => Vec::new(),
		}
	}
}

impl fmt::Display for SearchOutcome {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			SearchOutcome::Found(path) => write!(fmt, "found {}", path),
			SearchOutcome::Unreachable => write!(fmt, "unreachable"),
			SearchOutcome::TimedOut => write!(fmt, "timed out"),
		}
	}
}

/// Counters collected by every search
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
	/// Number of deepening iterations, including the last one
	pub iterations: usize,
	/// Number of Nodes probed over all iterations, including the ones cut off
	pub nodes_visited: usize,
	/// The cutoff of the last iteration
	pub final_cutoff: Cost,
	/// Wall-clock time of the whole search
	pub elapsed: Duration,
}

/// Extra counters, only collected with
/// [`FinderConfig::track_recursion`](crate::FinderConfig::track_recursion)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecursionStats {
	/// The deepest Node expanded within the cutoff
	pub max_depth: usize,
	/// Neighbors skipped because they were already on the current branch
	pub branch_skips: usize,
	/// Expanded Nodes that were left without reaching the goal
	pub backtracks: usize,
}

/// Everything a search returns
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
	/// How the search ended
	pub outcome: SearchOutcome,
	/// Basic counters
	pub stats: SearchStats,
	/// Recursion counters, `None` unless tracking was enabled
	pub recursion: Option<RecursionStats>,
	/// Set if the Finder was created with an unknown Heuristic name and uses Manhattan instead
	pub heuristic_fallback: Option<UnknownHeuristic>,
}
