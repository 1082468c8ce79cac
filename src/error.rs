use thiserror::Error;

/// Errors from building or indexing a [`Grid`](crate::Grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
	/// A coordinate outside of `[0, width) x [0, height)` was passed to an accessor or to a search.
	#[error("({x}, {y}) is outside of the {width}x{height} Grid")]
	OutOfBounds {
		/// the offending x coordinate
		x: usize,
		/// the offending y coordinate
		y: usize,
		/// width of the Grid
		width: usize,
		/// height of the Grid
		height: usize,
	},
	/// A Grid needs at least one column and one row.
	#[error("a Grid must not be empty (got {width}x{height})")]
	EmptyGrid {
		/// requested width
		width: usize,
		/// requested height
		height: usize,
	},
	/// A walkability matrix did not match the requested Grid size.
	#[error("walkability matrix is {rows} rows of {columns} columns, expected {height} rows of {width} columns")]
	MatrixSize {
		/// requested width
		width: usize,
		/// requested height
		height: usize,
		/// rows in the matrix
		rows: usize,
		/// columns of the first offending row (or of the first row if only the row count is off)
		columns: usize,
	},
}

/// A Heuristic name that is not part of the registry.
///
/// See [`NamedHeuristic::lookup`](crate::heuristic::NamedHeuristic::lookup).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown heuristic {name:?}, expected one of manhattan, safestRoute, enhanced")]
pub struct UnknownHeuristic {
	/// the name as it was given
	pub name: String,
}
