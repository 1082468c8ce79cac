use crate::{dir::Dir, GridError, Node, Point};

/// A dense, row-major Grid of [`Node`]s.
///
/// Every `(x, y)` with `x < width` and `y < height` maps to exactly one Node.
///
/// ## Examples
/// ```
/// use hazard_pathfinding::Grid;
///
/// // true = walkable
/// let matrix = [
///     [true, false, true],
///     [true, false, true],
///     [true, true, true],
/// ];
/// let mut grid = Grid::with_matrix(3, 3, &matrix).unwrap();
///
/// assert!(!grid.is_walkable_at(1, 0));
/// assert!(!grid.is_walkable_at(3, 0)); // outside
///
/// grid.set_water_level_and_time(0, 2, 4, 1);
/// assert!(!grid.is_walkable_at(0, 2));
///
/// let neighbors: Vec<_> = grid.neighbors((1, 2)).map(|n| n.pos()).collect();
/// assert_eq!(neighbors, vec![(2, 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
	width: usize,
	height: usize,
	nodes: Vec<Node>,
}

impl Grid {
	/// Creates a `width x height` Grid where every Node is walkable.
	pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
		if width == 0 || height == 0 {
			return Err(GridError::EmptyGrid { width, height });
		}
		let nodes = (0..height)
			.flat_map(|y| (0..width).map(move |x| Node::new(x, y, true)))
			.collect();
		Ok(Grid {
			width,
			height,
			nodes,
		})
	}

	/// Creates a Grid from a walkability matrix indexed as `matrix[row][column]`.
	///
	/// The matrix must have exactly `height` rows of `width` entries each.
	pub fn with_matrix<R: AsRef<[bool]>>(
		width: usize,
		height: usize,
		matrix: &[R],
	) -> Result<Grid, GridError> {
		let size_error = |columns| GridError::MatrixSize {
			width,
			height,
			rows: matrix.len(),
			columns,
		};
		if matrix.len() != height {
			let columns = matrix.first().map_or(0, |row| row.as_ref().len());
			return Err(size_error(columns));
		}
		if let Some(row) = matrix.iter().find(|row| row.as_ref().len() != width) {
			return Err(size_error(row.as_ref().len()));
		}

		let mut grid = Grid::new(width, height)?;
		for (node, &walkable) in grid
			.nodes
			.iter_mut()
			.zip(matrix.iter().flat_map(|row| row.as_ref().iter()))
		{
			node.walkable = walkable;
		}
		Ok(grid)
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}
	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}
	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// `x < width && y < height`
	pub fn is_inside(&self, x: usize, y: usize) -> bool {
		x < self.width && y < self.height
	}

	fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
		if self.is_inside(x, y) {
			Ok(x + y * self.width)
		} else {
			Err(GridError::OutOfBounds {
				x,
				y,
				width: self.width,
				height: self.height,
			})
		}
	}

	fn index_or_panic(&self, x: usize, y: usize) -> usize {
		match self.index(x, y) {
			Ok(index) => index,
			Err(err) => panic!("{}", err),
		}
	}

	/// Returns the Node at `(x, y)`.
	///
	/// ## Panics
	/// If `(x, y)` is not inside the Grid. Use [`try_node_at`](Grid::try_node_at) to check instead.
	pub fn node_at(&self, x: usize, y: usize) -> &Node {
		&self.nodes[self.index_or_panic(x, y)]
	}

	/// Returns the Node at `(x, y)` or [`GridError::OutOfBounds`].
	pub fn try_node_at(&self, x: usize, y: usize) -> Result<&Node, GridError> {
		self.index(x, y).map(|index| &self.nodes[index])
	}

	/// Whether `(x, y)` is inside the Grid and walkable. Never fails.
	pub fn is_walkable_at(&self, x: usize, y: usize) -> bool {
		self.try_node_at(x, y).map_or(false, |node| node.walkable)
	}

	/// Marks the Node at `(x, y)` as walkable or solid.
	///
	/// ## Panics
	/// If `(x, y)` is not inside the Grid.
	pub fn set_walkable_at(&mut self, x: usize, y: usize, walkable: bool) {
		let index = self.index_or_panic(x, y);
		self.nodes[index].walkable = walkable;
	}

	/// Applies [`Node::set_water_level_and_time`] to the Node at `(x, y)`.
	///
	/// ## Panics
	/// If `(x, y)` is not inside the Grid.
	pub fn set_water_level_and_time(&mut self, x: usize, y: usize, water_level: u32, time: u32) {
		let index = self.index_or_panic(x, y);
		self.nodes[index].set_water_level_and_time(water_level, time);
	}

	/// The walkable orthogonal Neighbors of `point`, in the order North, East, South, West.
	///
	/// `point` itself does not have to be walkable.
	///
	/// ## Panics
	/// If `point` is not inside the Grid.
	pub fn neighbors(&self, point: Point) -> impl Iterator<Item = &Node> + '_ {
		self.index_or_panic(point.0, point.1);
		let size = self.size();
		Dir::all()
			.filter_map(move |dir| dir.step(point, size))
			.map(move |(x, y)| &self.nodes[x + y * self.width])
			.filter(|node| node.walkable)
	}

	/// All Nodes in row-major order
	pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
		self.nodes.iter()
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::Grid;
	use crate::{GridError, Node};
	use serde::{de::Error, Deserialize, Deserializer};

	#[derive(Deserialize)]
	struct RawGrid {
		width: usize,
		height: usize,
		nodes: Vec<Node>,
	}

	impl RawGrid {
		fn into_grid(self) -> Result<Grid, GridError> {
			let mut grid = Grid::new(self.width, self.height)?;
			if self.nodes.len() != grid.nodes.len() {
				return Err(GridError::MatrixSize {
					width: self.width,
					height: self.height,
					rows: self.nodes.len() / self.width,
					columns: self.width,
				});
			}
			for (slot, node) in grid.nodes.iter_mut().zip(self.nodes) {
				if slot.pos() != node.pos() {
					return Err(GridError::OutOfBounds {
						x: node.x(),
						y: node.y(),
						width: self.width,
						height: self.height,
					});
				}
				*slot = node;
			}
			Ok(grid)
		}
	}

	/// Rejects data whose Nodes don't cover the Grid exactly once in row-major order.
	impl<'de> Deserialize<'de> for Grid {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
			RawGrid::deserialize(deserializer)?
				.into_grid()
				.map_err(D::Error::custom)
		}
	}
}
