#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths on Grids where water can make Tiles impassable.
//!
//! ## Introduction
//! Every Tile of a [`Grid`] is a [`Node`] that is either walkable or not. In addition to that,
//! each Node has a water level and a time, describing how severe a flood at that Tile is and
//! for how long it holds. Setting both together derives the walkability from a fixed policy
//! (see [`water_allows_walking`]), so a Grid can model a flood on top of plain walls.
//!
//! Paths are searched with [Iterative Deepening A*](https://en.wikipedia.org/wiki/Iterative_deepening_A*)
//! ([`IdaStarFinder`]): a series of depth-first searches, each bounded by a cutoff on the
//! estimated total cost, which is raised after every unsuccessful iteration. Apart from the Path
//! itself, the search keeps only the current branch in memory.
//!
//! Movement is always 4-directional. The estimate comes from a [`Heuristic`](heuristic::Heuristic):
//! plain Manhattan distance (the default), a hazard-only estimate or a weighted mix of both.
//! Only the Manhattan distance guarantees shortest Paths, **the hazard-aware Heuristics may
//! return longer Paths** in exchange for keeping away from water.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use hazard_pathfinding::prelude::*;
//!
//! // true = walkable, false = wall
//! let matrix = [
//!     [true, false, true, true, true],
//!     [true, false, true, false, true],
//!     [true, true, true, false, true],
//!     [true, false, true, true, true],
//!     [true, true, true, false, true],
//! ];
//! let mut grid = Grid::with_matrix(5, 5, &matrix).unwrap();
//!
//! // a level 4 flood is never walkable
//! grid.set_water_level_and_time(2, 3, 4, 1);
//! assert!(!grid.is_walkable_at(2, 3));
//! ```
//!
//! ### Pathfinding
//! ```
//! # use hazard_pathfinding::prelude::*;
//! # let matrix = [
//! #     [true, false, true, true, true],
//! #     [true, false, true, false, true],
//! #     [true, true, true, false, true],
//! #     [true, false, true, true, true],
//! #     [true, true, true, false, true],
//! # ];
//! # let mut grid = Grid::with_matrix(5, 5, &matrix).unwrap();
//! # grid.set_water_level_and_time(2, 3, 4, 1);
//! let finder = IdaStarFinder::new(FinderConfig::default());
//!
//! let path = finder.find_path((0, 0), (4, 4), &grid).unwrap();
//! assert_eq!(
//!     path,
//!     vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0),
//!          (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4)],
//! );
//! ```
//! An empty Path means that the goal cannot be reached (or that the time limit ran out).
//! [`IdaStarFinder::search`] tells those apart and also reports some statistics.
//!
//! ### Configuration
//! The [`FinderConfig`] controls the weight of the Heuristic, a time limit, a depth limit and
//! how expensive each step is. [`FinderConfig::WATER_AWARE`] charges for entering flooded
//! Tiles, so the search walks around water whenever possible:
//! ```
//! use hazard_pathfinding::{heuristic::Enhanced, prelude::*};
//!
//! let mut grid = Grid::new(3, 2).unwrap();
//! grid.set_water_level_and_time(1, 0, 2, 4);
//!
//! let finder = IdaStarFinder::with_heuristic(
//!     Enhanced::default(),
//!     FinderConfig::WATER_AWARE.with_time_limit_secs(1.0),
//! );
//! let report = finder.search((0, 0), (2, 0), &grid).unwrap();
//! assert!(!report.outcome.into_points().contains(&(1, 0)));
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

mod dir;

mod error;
pub use self::error::{GridError, UnknownHeuristic};

mod node;
pub use self::node::{water_allows_walking, Node};

mod grid;
pub use self::grid::Grid;

pub mod heuristic;

mod path;
pub use self::path::{Cost, Path};

pub mod finder;
pub use self::finder::{FinderConfig, IdaStarFinder, StepCost};

/// The commonly used types
pub mod prelude {
	pub use crate::{
		finder::{SearchObserver, SearchOutcome},
		heuristic::NamedHeuristic,
		FinderConfig, Grid, GridError, IdaStarFinder, Node, Point, StepCost,
	};
}
