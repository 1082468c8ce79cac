//! Heuristics estimating how expensive it is to reach the goal.
//!
//! The free functions ([`manhattan`], [`safest_route`], [`enhanced`]) are the plain formulas.
//! The [`Heuristic`] trait is what [`IdaStarFinder`](crate::IdaStarFinder) calls during a search:
//! it is given the Node currently being looked at and the goal Node.
//!
//! Only [`Manhattan`] is admissible for 4-directional unit-cost movement. [`SafestRoute`] and
//! [`Enhanced`] also look at the water level and time of the current Node and can overestimate
//! the remaining cost, so a search using them may return a Path that is not the cheapest one.
//! That is the price for steering around hazards.
//!
//! Any `Fn(&Node, &Node) -> f64` can be used as a custom Heuristic:
//! ```
//! use hazard_pathfinding::{heuristic::Heuristic, Node};
//!
//! let chebyshev = |node: &Node, goal: &Node| {
//!     let dx = node.x().abs_diff(goal.x());
//!     let dy = node.y().abs_diff(goal.y());
//!     dx.max(dy) as f64
//! };
//! assert_eq!(chebyshev.estimate(&Node::new(0, 0, true), &Node::new(3, 1, true)), 3.0);
//! ```

use crate::{Node, UnknownHeuristic};
use std::str::FromStr;

/// `dx + dy`
pub fn manhattan(dx: f64, dy: f64) -> f64 {
	dx + dy
}

/// `|water_level * time|`. A hazard estimate, not a distance.
pub fn safest_route(water_level: f64, time: f64) -> f64 {
	(water_level * time).abs()
}

/// `w1 * manhattan(dx, dy) + w2 * safest_route(water_level, time)`
pub fn enhanced(dx: f64, dy: f64, water_level: f64, time: f64, w1: f64, w2: f64) -> f64 {
	w1 * manhattan(dx, dy) + w2 * safest_route(water_level, time)
}

/// Estimates the remaining cost from `node` to `goal`.
///
/// Implementations must return a finite, non-negative number.
pub trait Heuristic {
	/// The estimate for reaching `goal` from `node`
	fn estimate(&self, node: &Node, goal: &Node) -> f64;
}

impl<F: Fn(&Node, &Node) -> f64> Heuristic for F {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		self(node, goal)
	}
}

fn deltas(node: &Node, goal: &Node) -> (f64, f64) {
	(
		node.x().abs_diff(goal.x()) as f64,
		node.y().abs_diff(goal.y()) as f64,
	)
}

/// The Manhattan distance. The default Heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		let (dx, dy) = deltas(node, goal);
		manhattan(dx, dy)
	}
}

/// The hazard of the current Node, ignoring the distance to the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafestRoute;

impl Heuristic for SafestRoute {
	fn estimate(&self, node: &Node, _goal: &Node) -> f64 {
		safest_route(node.water_level() as f64, node.time() as f64)
	}
}

/// A weighted sum of [`Manhattan`] and [`SafestRoute`].
///
/// ```
/// # use hazard_pathfinding::heuristic::{Enhanced, Heuristic};
/// # use hazard_pathfinding::Node;
/// let mut node = Node::new(0, 0, true);
/// node.set_water_level_and_time(2, 4);
/// let goal = Node::new(3, 3, true);
///
/// // 0.5 * 6 + 0.5 * 8
/// assert_eq!(Enhanced::default().estimate(&node, &goal), 7.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enhanced {
	/// weight of the distance term (defaults to `0.5`)
	pub distance_weight: f64,
	/// weight of the hazard term (defaults to `0.5`)
	pub hazard_weight: f64,
}

impl Default for Enhanced {
	fn default() -> Enhanced {
		Enhanced {
			distance_weight: 0.5,
			hazard_weight: 0.5,
		}
	}
}

impl Heuristic for Enhanced {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		let (dx, dy) = deltas(node, goal);
		enhanced(
			dx,
			dy,
			node.water_level() as f64,
			node.time() as f64,
			self.distance_weight,
			self.hazard_weight,
		)
	}
}

/// The built-in Heuristics, selectable by name.
///
/// ```
/// # use hazard_pathfinding::heuristic::NamedHeuristic;
/// assert_eq!(NamedHeuristic::lookup("safestRoute"), Ok(NamedHeuristic::SafestRoute));
/// assert_eq!(NamedHeuristic::lookup("Manhattan"), Ok(NamedHeuristic::Manhattan));
/// assert!(NamedHeuristic::lookup("euclidean").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum NamedHeuristic {
	/// See [`Manhattan`]
	#[default]
	Manhattan,
	/// See [`SafestRoute`]
	SafestRoute,
	/// See [`Enhanced`]
	Enhanced(Enhanced),
}

impl NamedHeuristic {
	/// The registered names
	pub const NAMES: [&'static str; 3] = ["manhattan", "safestRoute", "enhanced"];

	/// Finds a Heuristic by name.
	///
	/// Case and underscores are ignored, so `safest_route` and `SafestRoute` both work.
	/// `enhancedheuristic` is accepted as an alias of `enhanced`.
	pub fn lookup(name: &str) -> Result<NamedHeuristic, UnknownHeuristic> {
		let normalized: String = name
			.trim()
			.chars()
			.filter(|c| *c != '_' && *c != '-')
			.map(|c| c.to_ascii_lowercase())
			.collect();
		match normalized.as_str() {
			"manhattan" => Ok(NamedHeuristic::Manhattan),
			"safestroute" => Ok(NamedHeuristic::SafestRoute),
			"enhanced" | "enhancedheuristic" => Ok(NamedHeuristic::Enhanced(Enhanced::default())),
			_ => Err(UnknownHeuristic {
				name: name.to_owned(),
			}),
		}
	}

	/// The canonical name of this Heuristic
	pub fn name(&self) -> &'static str {
		match self {
			NamedHeuristic::Manhattan => Self::NAMES[0],
			NamedHeuristic::SafestRoute => Self::NAMES[1],
			NamedHeuristic::Enhanced(_) => Self::NAMES[2],
		}
	}
}

impl FromStr for NamedHeuristic {
	type Err = UnknownHeuristic;
	fn from_str(name: &str) -> Result<NamedHeuristic, UnknownHeuristic> {
		NamedHeuristic::lookup(name)
	}
}

impl Heuristic for NamedHeuristic {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		match self {
			NamedHeuristic::Manhattan => Manhattan.estimate(node, goal),
			NamedHeuristic::SafestRoute => SafestRoute.estimate(node, goal),
			NamedHeuristic::Enhanced(enhanced) => enhanced.estimate(node, goal),
		}
	}
}
