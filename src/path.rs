use std::sync::Arc;

/// The Cost of walking along a Path
pub type Cost = f64;

/// A Path found by a search, from start to goal inclusive.
///
/// Cloning a Path is cheap, since the steps are shared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
}

impl<P> Path<P> {
	/// Creates a Path from its steps and total Cost
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
		}
	}

	/// The accumulated step Cost from start to goal
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of Points, including start and goal
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// Whether there are no Points
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns an Iterator over the Points of the Path
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}

	/// The Points of the Path
	pub fn as_slice(&self) -> &[P] {
		&self.path
	}
}

impl<P: Clone> Path<P> {
	/// Copies the Points into a Vec
	pub fn to_vec(&self) -> Vec<P> {
		self.path.to_vec()
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		*self.path == **rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		*self.path == **rhs
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Path;

	#[test]
	fn index() {
		let path = Path::new(vec![(0, 0), (1, 0), (1, 1)], 2.0);

		assert_eq!(path[0], (0, 0));
		assert_eq!(path[2], (1, 1));
		assert_eq!(path, vec![(0, 0), (1, 0), (1, 1)]);
	}

	#[test]
	fn display() {
		let path = Path::new(vec![(0, 0), (1, 0)], 1.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 1]: (0, 0) -> (1, 0)");
	}

	#[test]
	fn display_empty() {
		let path = Path::new(Vec::<(usize, usize)>::new(), 0.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}
}
