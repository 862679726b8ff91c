// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(Clone, Copy)]
enum Direction { Right, Left, Up, Down }

impl Direction {
	fn delta(self) -> [isize; 2] {
		use Direction::*;
		match self { Right => [1, 0], Left => [-1, 0], Up => [0, 1], Down => [0, -1] }
	}
}

struct Motion {
	direction: Direction,
	steps: usize,
}


struct Rope<const KNOTS: usize>([[isize; 2]; KNOTS]);

impl<const KNOTS: usize> Rope<KNOTS> {
	fn tail(&self) -> [isize; 2] {
		self.0[KNOTS - 1]
	}

	fn step(&mut self, direction: Direction) {
		let [dx, dy] = direction.delta();
		self.0[0][0] += dx;
		self.0[0][1] += dy;
		for k in 1..KNOTS {
			let [hx, hy] = self.0[k - 1];
			let knot = &mut self.0[k];
			if (hx - knot[0]).abs() <= 1 && (hy - knot[1]).abs() <= 1 { break }
			knot[0] += (hx - knot[0]).signum();
			knot[1] += (hy - knot[1]).signum();
		}
	}
}


fn input_motions_from_str(s: &str) -> Vec<Motion> {
	parsing::try_motions_from_str(s).unwrap()
}

fn input_motions() -> Vec<Motion> {
	input_motions_from_str(include_str!("day09.txt"))
}


fn part1and2_impl<const KNOTS: usize>(input_motions: Vec<Motion>) -> usize {
	let mut rope = Rope([[0; 2]; KNOTS]);
	let mut visited = HashSet::from([rope.tail()]);
	for Motion { direction, steps } in input_motions {
		for _ in 0..steps {
			rope.step(direction);
			visited.insert(rope.tail());
		}

		#[cfg(LOGGING)]
		println!("{:?}", rope.0);
	}
	visited.len()
}


fn part1_impl(input_motions: Vec<Motion>) -> usize {
	part1and2_impl::<2>(input_motions)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_motions())
}


fn part2_impl(input_motions: Vec<Motion>) -> usize {
	part1and2_impl::<10>(input_motions)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_motions())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Direction, Motion};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MotionError {
		Format,
		Direction(String),
		Steps(ParseIntError),
	}

	impl FromStr for Motion {
		type Err = MotionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (direction, steps) = s.split_once(' ').ok_or(MotionError::Format)?;
			let direction = match direction {
				"R" => Direction::Right,
				"L" => Direction::Left,
				"U" => Direction::Up,
				"D" => Direction::Down,
				found => return Err(MotionError::Direction(found.to_owned())),
			};
			let steps = steps.parse().map_err(MotionError::Steps)?;
			Ok(Motion { direction, steps })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MotionsError { line: usize, source: MotionError }

	pub(super) fn try_motions_from_str(s: &str) -> Result<Vec<Motion>, MotionsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MotionsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc::indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];
	assert_eq!(part1_impl(input_motions_from_str(INPUTS[0])), 13);
	assert_eq!(part1(), 14028);
	assert_eq!(part2_impl(input_motions_from_str(INPUTS[0])), 1);
	assert_eq!(part2_impl(input_motions_from_str(INPUTS[1])), 36);
	assert_eq!(part2(), 8479);

	assert!(parsing::try_motions_from_str("R 1\nX 2").is_err());
}
