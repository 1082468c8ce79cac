use crate::Point;

/// The 4 orthogonal directions, in the order the Grid reports Neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
	UP = 0,
	RIGHT = 1,
	DOWN = 2,
	LEFT = 3,
}
pub use self::Dir::*;

const UNIT_CIRCLE: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Dir {
	/// North, East, South, West
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
		[UP, RIGHT, DOWN, LEFT].iter().copied()
	}
	pub fn num(self) -> usize {
		self as usize
	}

	/// The Point one step in this direction, or `None` if that leaves a `w x h` Grid.
	pub fn step(self, pos: Point, (w, h): (usize, usize)) -> Option<Point> {
		let diff = UNIT_CIRCLE[self.num()];
		if (pos.0 == 0 && diff.0 < 0)
			|| (pos.1 == 0 && diff.1 < 0)
			|| (pos.0 + 1 >= w && diff.0 > 0)
			|| (pos.1 + 1 >= h && diff.1 > 0)
		{
			None
		} else {
			Some((
				(pos.0 as isize + diff.0) as usize,
				(pos.1 as isize + diff.1) as usize,
			))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn step_test() {
		let pos = (1, 3);
		assert_eq!(UP.step(pos, (5, 5)), Some((1, 2)));
		assert_eq!(RIGHT.step(pos, (5, 5)), Some((2, 3)));
		assert_eq!(DOWN.step(pos, (5, 4)), None);
		assert_eq!(LEFT.step((0, 3), (5, 5)), None);
	}

	#[test]
	fn order_is_clockwise_from_north() {
		let steps: Vec<_> = Dir::all().filter_map(|d| d.step((1, 1), (3, 3))).collect();
		assert_eq!(steps, vec![(1, 0), (2, 1), (1, 2), (0, 1)]);
	}
}
