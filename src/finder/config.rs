use crate::{path::Cost, Node};
use std::time::Duration;

/// How expensive a single step between two adjacent Nodes is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepCost {
	/// Every step costs `1`.
	#[default]
	Uniform,
	/// A step costs `distance * water_level + time` of the Node it enters, where `distance` is
	/// `1` for orthogonal steps and `√2` otherwise.
	///
	/// Dry Nodes cost nothing to enter, so the search prefers them over flooded ones even when
	/// that means a longer walk.
	WaterAware,
}

impl StepCost {
	/// The Cost of stepping from `from` onto the adjacent `to`
	pub fn cost(self, from: &Node, to: &Node) -> Cost {
		match self {
			StepCost::Uniform => 1.0,
			StepCost::WaterAware => {
				let distance = if from.x() == to.x() || from.y() == to.y() {
					1.0
				} else {
					std::f64::consts::SQRT_2
				};
				distance * to.water_level() as f64 + to.time() as f64
			}
		}
	}
}

/// Options for configuring the [`IdaStarFinder`](crate::IdaStarFinder)
///
/// Default options:
/// ```
/// # use hazard_pathfinding::{FinderConfig, StepCost};
/// assert_eq!(
/// 	FinderConfig {
/// 		weight: 1.0,
/// 		track_recursion: false,
/// 		time_limit: None,
/// 		step_cost: StepCost::Uniform,
/// 		max_depth: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinderConfig {
	/// Multiplier on the Heuristic (defaults to `1`).
	///
	/// A larger weight finds Paths faster at the cost of optimality. Values below `1` (and `NaN`)
	/// are treated as `1`, since they would slow the growth of the cutoff between iterations.
	pub weight: f64,
	/// `true`: collect [`RecursionStats`](crate::finder::RecursionStats) and log every visited
	/// Node on the `trace` level.
	///
	/// `false` (default): only the basic [`SearchStats`](crate::finder::SearchStats).
	///
	/// This never changes the resulting Path.
	pub track_recursion: bool,
	/// Wall-clock budget for a single search (defaults to `None` = unlimited).
	///
	/// Once it is exceeded, every pending branch is abandoned and the search ends without a Path.
	pub time_limit: Option<Duration>,
	/// The Cost of a single step (defaults to [`StepCost::Uniform`])
	pub step_cost: StepCost,
	/// Branches deeper than this are treated as dead ends (defaults to `None` = unlimited).
	///
	/// A goal that can only be reached deeper than this ends as
	/// [`SearchOutcome::Unreachable`](crate::finder::SearchOutcome::Unreachable).
	pub max_depth: Option<usize>,
}

impl FinderConfig {
	/// The default options as a constant
	pub const DEFAULT: FinderConfig = FinderConfig {
		weight: 1.0,
		track_recursion: false,
		time_limit: None,
		step_cost: StepCost::Uniform,
		max_depth: None,
	};

	/// an example FinderConfig that charges for entering flooded Nodes
	///
	/// Values:
	/// ```
	/// # use hazard_pathfinding::{FinderConfig, StepCost};
	/// assert_eq!(
	/// 	FinderConfig {
	/// 		weight: 1.0,
	/// 		track_recursion: false,
	/// 		time_limit: None,
	/// 		step_cost: StepCost::WaterAware,
	/// 		max_depth: None,
	/// 	},
	/// 	FinderConfig::WATER_AWARE
	/// );
	/// ```
	pub const WATER_AWARE: FinderConfig = FinderConfig {
		step_cost: StepCost::WaterAware,
		..FinderConfig::DEFAULT
	};

	/// Sets the time limit from seconds.
	///
	/// Zero, negative, NaN and values too large for a [`Duration`] mean unlimited.
	///
	/// ```
	/// # use hazard_pathfinding::FinderConfig;
	/// # use std::time::Duration;
	/// let config = FinderConfig::default().with_time_limit_secs(0.5);
	/// assert_eq!(config.time_limit, Some(Duration::from_millis(500)));
	///
	/// let config = config.with_time_limit_secs(-1.0);
	/// assert_eq!(config.time_limit, None);
	/// ```
	pub fn with_time_limit_secs(self, seconds: f64) -> FinderConfig {
		let time_limit = if seconds > 0.0 {
			Duration::try_from_secs_f64(seconds).ok()
		} else {
			None
		};
		FinderConfig { time_limit, ..self }
	}

	/// The weight the search actually uses: never below `1`
	pub fn effective_weight(&self) -> f64 {
		if self.weight >= 1.0 {
			self.weight
		} else {
			1.0
		}
	}
}

impl Default for FinderConfig {
	fn default() -> FinderConfig {
		FinderConfig::DEFAULT
	}
}
