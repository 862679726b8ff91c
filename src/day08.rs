// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Direction { Up, Down, Right, Left }

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Right, Direction::Left];

impl Direction {
	fn delta(self) -> [isize; 2] {
		use Direction::*;
		match self { Up => [0, -1], Down => [0, 1], Right => [1, 0], Left => [-1, 0] }
	}
}


struct Forest {
	heights: Vec<u8>,
	width: usize,
}

impl Forest {
	/// Returns an [`Iterator`] over the heights of the trees seen from `pos`
	/// looking in `direction`, nearest first, up to the edge.
	fn line_of_sight(&self, pos: usize, direction: Direction) -> impl Iterator<Item = u8> + '_ {
		let [dx, dy] = direction.delta();
		let (w, h) = (self.width as isize, (self.heights.len() / self.width) as isize);
		let (x, y) = (pos as isize % w, pos as isize / w);
		(1..)
			.map(move |i| (x + dx * i, y + dy * i))
			.take_while(move |(x, y)| (0..w).contains(x) && (0..h).contains(y))
			.map(move |(x, y)| self.heights[(y * w + x) as usize])
	}

	fn is_visible(&self, pos: usize) -> bool {
		let height = self.heights[pos];
		DIRECTIONS.into_iter()
			.any(|d| self.line_of_sight(pos, d).all(|h| h < height))
	}

	fn scenic_score(&self, pos: usize) -> usize {
		let height = self.heights[pos];
		DIRECTIONS.into_iter()
			.map(|d| {
				let mut distance = 0;
				for h in self.line_of_sight(pos, d) {
					distance += 1;
					if h >= height { break }
				}
				distance
			})
			.product()
	}
}


fn input_forest_from_str(s: &str) -> Forest {
	s.parse().unwrap()
}

fn input_forest() -> Forest {
	input_forest_from_str(include_str!("day08.txt"))
}


fn part1_impl(input_forest: Forest) -> usize {
	(0..input_forest.heights.len())
		.filter(|&pos| input_forest.is_visible(pos))
		.count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_forest())
}


fn part2_impl(input_forest: Forest) -> usize {
	(0..input_forest.heights.len())
		.map(|pos| input_forest.scenic_score(pos))
		.max().unwrap()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_forest())
}


mod parsing {
	use std::str::FromStr;
	use super::Forest;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ForestError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Forest {
		type Err = ForestError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut width = None;
			for (l, line) in s.lines().enumerate() {
				let len = *width.get_or_insert(line.len());
				if line.len() != len {
					return Err(ForestError::LineLen { line: l + 1, len, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_digit() {
						return Err(ForestError::InvalidByte { line: l + 1, column: c + 1, found: b })
					}
					heights.push(b - b'0');
				}
			}
			match width {
				Some(width) if width > 0 => Ok(Forest { heights, width }),
				_ => Err(ForestError::Empty),
			}
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };
	assert_eq!(part1_impl(input_forest_from_str(INPUT)), 21);
	assert_eq!(part1(), 671);
	assert_eq!(part2_impl(input_forest_from_str(INPUT)), 8);
	assert_eq!(part2(), 379392);

	let forest = input_forest_from_str(INPUT);
	assert_eq!(forest.scenic_score(7), 4);
	assert_eq!(forest.scenic_score(0), 0);
	assert!(!forest.is_visible(12));
	assert!("123\n12".parse::<Forest>().is_err());
	assert!("1a3".parse::<Forest>().is_err());
}
