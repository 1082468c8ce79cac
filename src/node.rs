use crate::Point;

/// A single Cell of a [`Grid`](crate::Grid).
///
/// Besides the plain walkable flag, every Node carries a water level and a time. The two can
/// be applied together with [`set_water_level_and_time`](Node::set_water_level_and_time), which
/// derives `walkable` from them (see [`water_allows_walking`]). Setting `walkable` directly
/// afterwards is allowed and overrides the derived value until the next update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
	x: usize,
	y: usize,
	/// Whether the search may enter this Node
	pub walkable: bool,
	water_level: u32,
	time: u32,
}

impl Node {
	/// Creates a dry Node at `(x, y)`.
	pub fn new(x: usize, y: usize, walkable: bool) -> Node {
		Node {
			x,
			y,
			walkable,
			water_level: 0,
			time: 0,
		}
	}

	/// The x coordinate (column)
	pub fn x(&self) -> usize {
		self.x
	}
	/// The y coordinate (row)
	pub fn y(&self) -> usize {
		self.y
	}
	/// The position as `(x, y)`
	pub fn pos(&self) -> Point {
		(self.x, self.y)
	}
	/// The hazard severity tier of this Node
	pub fn water_level(&self) -> u32 {
		self.water_level
	}
	/// How long the hazard at this Node holds
	pub fn time(&self) -> u32 {
		self.time
	}

	/// Sets water level and time together and recomputes `walkable` from them.
	///
	/// ```
	/// # use hazard_pathfinding::Node;
	/// let mut node = Node::new(0, 0, true);
	/// node.set_water_level_and_time(3, 7);
	/// assert!(!node.walkable);
	/// node.set_water_level_and_time(3, 6);
	/// assert!(node.walkable);
	/// ```
	pub fn set_water_level_and_time(&mut self, water_level: u32, time: u32) {
		self.water_level = water_level;
		self.time = time;
		self.walkable = water_allows_walking(water_level, time);
	}
}

/// The walkability policy for water levels.
///
/// | water level | time | walkable |
/// |---|---|---|
/// | 0 | 0 | yes |
/// | 2 | ≤ 5 | yes |
/// | 3 | ≤ 6 | yes |
/// | 4 | any | no |
/// | anything else | | no |
pub fn water_allows_walking(water_level: u32, time: u32) -> bool {
	match water_level {
		0 => time == 0,
		2 => time <= 5,
		3 => time <= 6,
		_ => false,
	}
}
