// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::VecDeque;


const LOWEST: u8 = 0;
const HIGHEST: u8 = 25;


/// Elevations are `0` (`a`) through `25` (`z`). Steps may descend any amount
/// but climb at most `MAX_CLIMB`.
struct Heightmap<const MAX_CLIMB: u8 = 1> {
	elevations: Vec<u8>,
	width: usize,
	start: usize,
	target: usize,
	/// Per position, the adjacent positions it can step to (up, down, right, left).
	edges: Vec<Vec<usize>>,
}

impl<const MAX_CLIMB: u8> Heightmap<MAX_CLIMB> {
	fn new(elevations: Vec<u8>, width: usize, start: usize, target: usize) -> Self {
		let mut heightmap = Heightmap { elevations, width, start, target, edges: vec![] };
		heightmap.edges = (0..heightmap.elevations.len())
			.map(|pos| heightmap.adjacent_positions(pos)
				.filter(|&adj| heightmap.can_step(pos, adj))
				.collect())
			.collect();
		heightmap
	}

	#[cfg(test)]
	fn position(&self, [column, row]: [usize; 2]) -> Option<usize> {
		(column < self.width && row < self.elevations.len() / self.width)
			.then(|| row * self.width + column)
	}

	fn adjacent_positions(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (w, len) = (self.width, self.elevations.len());
		let up = (pos >= w).then(|| pos - w);
		let down = (pos + w < len).then(|| pos + w);
		let right = (pos % w < w - 1).then(|| pos + 1);
		let left = (pos % w > 0).then(|| pos - 1);
		[up, down, right, left].into_iter().flatten()
	}

	fn can_step(&self, from: usize, to: usize) -> bool {
		self.elevations[to] <= self.elevations[from].saturating_add(MAX_CLIMB)
	}

	fn search(&self) -> Search {
		Search::new(self.elevations.len())
	}

	/// Breadth-first search from `from` along `edges` (either [`Self::edges`]
	/// or their reverse), until a position satisfying `is_goal` is dequeued.
	/// Returns the number of steps to that position.
	fn find_steps(
		&self,
		search: &mut Search,
		edges: &[Vec<usize>],
		from: usize,
		is_goal: impl Fn(usize) -> bool,
	) -> Option<usize> {
		search.reset();
		search.visited[from] = true;
		search.frontier.push_back(from);

		while let Some(pos) = search.frontier.pop_front() {

			#[cfg(LOGGING)]
			println!("{},{}: {}",
				pos % self.width,
				pos / self.width,
				(b'a' + self.elevations[pos]) as char);

			if is_goal(pos) { return Some(search.steps_to(pos)) }

			for &next in &edges[pos] {
				if search.visited[next] { continue }
				search.visited[next] = true;
				search.parents[next] = Some(pos);
				search.frontier.push_back(next);
			}
		}

		None
	}

	fn shortest_path(&self, search: &mut Search, from: usize, to: usize) -> Option<usize> {
		self.find_steps(search, &self.edges, from, |pos| pos == to)
	}

	fn shortest_path_from_start(&self) -> Option<usize> {
		self.shortest_path(&mut self.search(), self.start, self.target)
	}

	fn lowest_positions(&self) -> impl Iterator<Item = usize> + '_ {
		self.elevations.iter()
			.enumerate()
			.filter_map(|(pos, &e)| (e == LOWEST).then_some(pos))
	}

	/// Searches from every lowest position in turn, reusing one [`Search`].
	fn shortest_path_from_any_lowest(&self) -> Option<usize> {
		let mut search = self.search();
		self.lowest_positions()
			.filter_map(|from| self.shortest_path(&mut search, from, self.target))
			.min()
	}

	/// Same result as [`Self::shortest_path_from_any_lowest`], but with a
	/// single search backwards from the target.
	fn shortest_path_from_any_lowest_reversed(&self) -> Option<usize> {
		let mut reversed_edges = vec![vec![]; self.edges.len()];
		for (from, tos) in self.edges.iter().enumerate() {
			for &to in tos { reversed_edges[to].push(from) }
		}
		self.find_steps(&mut self.search(), &reversed_edges, self.target,
			|pos| self.elevations[pos] == LOWEST)
	}
}


/// Visited flags and back-pointers of one search over a [`Heightmap`].
struct Search {
	visited: Vec<bool>,
	parents: Vec<Option<usize>>,
	frontier: VecDeque<usize>,
}

impl Search {
	fn new(len: usize) -> Self {
		Search { visited: vec![false; len], parents: vec![None; len], frontier: VecDeque::new() }
	}

	fn reset(&mut self) {
		self.visited.fill(false);
		self.parents.fill(None);
		self.frontier.clear();
	}

	fn steps_to(&self, pos: usize) -> usize {
		std::iter::successors(self.parents[pos], |&parent| self.parents[parent]).count()
	}
}


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub(crate) struct Steps(Option<usize>);

impl std::fmt::Display for Steps {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.0 {
			Some(steps) => write!(f, "{steps}"),
			None => f.write_str("unreachable"),
		}
	}
}


fn input_heightmap_from_str<const MAX_CLIMB: u8>(s: &str) -> Heightmap<MAX_CLIMB> {
	s.parse().unwrap()
}

fn input_heightmap() -> Heightmap {
	input_heightmap_from_str(include_str!("day12.txt"))
}


fn part1_impl<const MAX_CLIMB: u8>(input_heightmap: Heightmap<MAX_CLIMB>) -> Option<usize> {
	input_heightmap.shortest_path_from_start()
}

pub(crate) fn part1() -> Steps {
	Steps(part1_impl(input_heightmap()))
}


fn part2_impl<const MAX_CLIMB: u8>(input_heightmap: Heightmap<MAX_CLIMB>) -> Option<usize> {
	input_heightmap.shortest_path_from_any_lowest_reversed()
}

pub(crate) fn part2() -> Steps {
	Steps(part2_impl(input_heightmap()))
}


mod parsing {
	use std::str::FromStr;
	use super::{Heightmap, LOWEST, HIGHEST};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HeightmapError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateStart { line: usize, column: usize },
		DuplicateTarget { line: usize, column: usize },
		NoStart,
		NoTarget,
	}

	impl<const MAX_CLIMB: u8> FromStr for Heightmap<MAX_CLIMB> {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use HeightmapError::*;

			let mut elevations = vec![];
			let mut width = None;
			let mut start = None;
			let mut target = None;

			for (l, line) in s.lines().enumerate() {
				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len =>
						return Err(LineLen { line: l + 1, len, found: line.len() }),
					_ => (),
				}

				for (c, b) in line.bytes().enumerate() {
					macro_rules! set_once {
						( $which:ident, $which_err:ident, $elevation:expr ) => { {
							if $which.is_some() { return Err($which_err {
								line: l + 1, column: c + 1 }) }
							$which = Some(elevations.len());
							$elevation
						} }
					}

					elevations.push(match b {
						b'S' => set_once!(start, DuplicateStart, LOWEST),
						b'E' => set_once!(target, DuplicateTarget, HIGHEST),
						b'a'..=b'z' => b - b'a',
						found => return Err(InvalidByte { line: l + 1, column: c + 1, found }),
					});
				}
			}

			let width = width.filter(|&w| w > 0).ok_or(Empty)?;
			Ok(Heightmap::new(
				elevations,
				width,
				start.ok_or(NoStart)?,
				target.ok_or(NoTarget)?,
			))
		}
	}
}


#[cfg(test)]
mod tests {
	use super::{*, parsing::HeightmapError};

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	// Every cell lies on the one climbable route, `a` through `y`, then along the `z`s.
	const RAMP: &str = indoc::indoc! { "
		Sbcdef
		lkjihg
		mnopqr
		xwvuts
		yzzzzE
	" };

	const WALLED_OFF: &str = indoc::indoc! { "
		Sbcc
		zzzz
		zzzE
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_heightmap_from_str::<1>(INPUT)), Some(31));
		assert_eq!(part1(), Steps(Some(63)));
		assert_eq!(part2_impl(input_heightmap_from_str::<1>(INPUT)), Some(29));
		assert_eq!(part2(), Steps(Some(57)));
	}

	#[test]
	fn positions() {
		let heightmap = input_heightmap_from_str::<1>(INPUT);
		assert_eq!(heightmap.position([0, 0]), Some(heightmap.start));
		assert_eq!(heightmap.position([5, 2]), Some(heightmap.target));
		assert_eq!(heightmap.position([8, 0]), None);
		assert_eq!(heightmap.position([0, 5]), None);
	}

	#[test]
	fn same_start_and_target() {
		let heightmap = input_heightmap_from_str::<1>(INPUT);
		let mut search = heightmap.search();
		assert_eq!(heightmap.shortest_path(&mut search, heightmap.start, heightmap.start), Some(0));
		assert_eq!(heightmap.shortest_path(&mut search, heightmap.target, heightmap.target), Some(0));
	}

	#[test]
	fn unreachable() {
		let heightmap = input_heightmap_from_str::<1>(WALLED_OFF);
		assert_eq!(heightmap.shortest_path_from_start(), None);
		assert_eq!(heightmap.shortest_path_from_any_lowest(), None);
		assert_eq!(heightmap.shortest_path_from_any_lowest_reversed(), None);
		assert_eq!(Steps(None).to_string(), "unreachable");
		assert_eq!(Steps(Some(0)).to_string(), "0");
	}

	#[test]
	fn edges_are_directed() {
		let heightmap = input_heightmap_from_str::<1>(indoc::indoc! { "
			Sz
			Ea
		" });
		let (high, low) = (heightmap.position([1, 0]).unwrap(), heightmap.position([1, 1]).unwrap());
		assert!(heightmap.edges[high].contains(&low));
		assert!(!heightmap.edges[low].contains(&high));
		assert!(heightmap.edges[heightmap.start].is_empty());
		assert_eq!(heightmap.edges[heightmap.target], vec![heightmap.start, low]);
	}

	#[test]
	fn edge_order() {
		let heightmap = input_heightmap_from_str::<1>(indoc::indoc! { "
			aaa
			aSa
			aaE
		" });
		let center = heightmap.start;
		assert_eq!(heightmap.edges[center], vec![center - 3, center + 3, center + 1, center - 1]);
	}

	#[test]
	fn looser_climbing() {
		let strict = part1_impl(input_heightmap_from_str::<1>(INPUT)).unwrap();
		let loose = part1_impl(input_heightmap_from_str::<2>(INPUT)).unwrap();
		assert!(loose <= strict);
		assert_eq!(loose, 27);

		const CLIFF: &str = "Sbcdxz\nbbcdEz";
		assert_eq!(part1_impl(input_heightmap_from_str::<1>(CLIFF)), None);
		assert_eq!(part1_impl(input_heightmap_from_str::<2>(CLIFF)), None);
		assert_eq!(part1_impl(input_heightmap_from_str::<25>(CLIFF)), Some(5));
	}

	#[test]
	fn any_lowest() {
		for input in [INPUT, RAMP, include_str!("day12.txt")] {
			let heightmap = input_heightmap_from_str::<1>(input);
			let from_any = heightmap.shortest_path_from_any_lowest();
			assert_eq!(from_any, heightmap.shortest_path_from_any_lowest_reversed());
			assert!(from_any <= heightmap.shortest_path_from_start());
		}
	}

	#[test]
	fn ramp() {
		let heightmap = input_heightmap_from_str::<1>(RAMP);
		let steps = heightmap.elevations.len() - 1;
		assert_eq!(heightmap.shortest_path_from_start(), Some(steps));
		assert_eq!(heightmap.shortest_path_from_any_lowest(), Some(steps));
		assert_eq!(part2_impl(input_heightmap_from_str::<1>(RAMP)), Some(29));
	}

	#[test]
	fn malformed() {
		macro_rules! assert_err { ( $s:expr, $pat:pat ) => {
			assert!(matches!($s.parse::<Heightmap>(), Err($pat)))
		} }
		assert_err!("", HeightmapError::Empty);
		assert_err!("\n", HeightmapError::Empty);
		assert_err!("Sab\nEa", HeightmapError::LineLen { line: 2, len: 3, found: 2 });
		assert_err!("Sab\nE?c", HeightmapError::InvalidByte { line: 2, column: 2, found: b'?' });
		assert_err!("SaS\nEaa", HeightmapError::DuplicateStart { line: 1, column: 3 });
		assert_err!("Sab\nEaE", HeightmapError::DuplicateTarget { line: 2, column: 3 });
		assert_err!("aab\nEaa", HeightmapError::NoStart);
		assert_err!("Sab\naaa", HeightmapError::NoTarget);
	}
}
