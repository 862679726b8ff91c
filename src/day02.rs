// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Shape { Rock, Paper, Scissors }

impl Shape {
	fn score(self) -> u32 {
		self as u32 + 1
	}

	fn beats(self) -> Self {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	fn beaten_by(self) -> Self {
		self.beats().beats()
	}
}


#[derive(Clone, Copy)]
enum Outcome { Loss, Draw, Win }

impl Outcome {
	fn of(ours: Shape, theirs: Shape) -> Self {
		if ours == theirs { Outcome::Draw }
		else if ours.beats() == theirs { Outcome::Win }
		else { Outcome::Loss }
	}

	fn score(self) -> u32 {
		3 * self as u32
	}
}


/// The second column of the strategy guide; its meaning differs between parts.
#[derive(Clone, Copy)]
enum Column { X, Y, Z }

struct Round {
	theirs: Shape,
	column: Column,
}


fn input_rounds_from_str(s: &str) -> Vec<Round> {
	parsing::try_rounds_from_str(s).unwrap()
}

fn input_rounds() -> Vec<Round> {
	input_rounds_from_str(include_str!("day02.txt"))
}


fn part1and2_impl(input_rounds: Vec<Round>, strategy: fn(Shape, Column) -> Shape) -> u32 {
	input_rounds.into_iter()
		.map(|Round { theirs, column }| {
			let ours = strategy(theirs, column);
			ours.score() + Outcome::of(ours, theirs).score()
		})
		.sum()
}


fn part1_impl(input_rounds: Vec<Round>) -> u32 {
	part1and2_impl(input_rounds, |_, column| match column {
		Column::X => Shape::Rock,
		Column::Y => Shape::Paper,
		Column::Z => Shape::Scissors,
	})
}

pub(crate) fn part1() -> u32 {
	part1_impl(input_rounds())
}


fn part2_impl(input_rounds: Vec<Round>) -> u32 {
	part1and2_impl(input_rounds, |theirs, column| match column {
		Column::X => theirs.beats(),
		Column::Y => theirs,
		Column::Z => theirs.beaten_by(),
	})
}

pub(crate) fn part2() -> u32 {
	part2_impl(input_rounds())
}


mod parsing {
	use super::{Column, Round, Shape};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundError {
		Len(usize),
		Shape(u8),
		Separator(u8),
		Column(u8),
	}

	impl TryFrom<&str> for Round {
		type Error = RoundError;
		fn try_from(s: &str) -> Result<Self, Self::Error> {
			let &[theirs, separator, column] = s.as_bytes() else {
				return Err(RoundError::Len(s.len()))
			};
			let theirs = match theirs {
				b'A' => Shape::Rock,
				b'B' => Shape::Paper,
				b'C' => Shape::Scissors,
				found => return Err(RoundError::Shape(found)),
			};
			if separator != b' ' { return Err(RoundError::Separator(separator)) }
			let column = match column {
				b'X' => Column::X,
				b'Y' => Column::Y,
				b'Z' => Column::Z,
				found => return Err(RoundError::Column(found)),
			};
			Ok(Round { theirs, column })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RoundsError { line: usize, source: RoundError }

	pub(super) fn try_rounds_from_str(s: &str) -> Result<Vec<Round>, RoundsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| Round::try_from(line)
				.map_err(|e| RoundsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1_impl(input_rounds_from_str(INPUT)), 15);
	assert_eq!(part1(), 12502);
	assert_eq!(part2_impl(input_rounds_from_str(INPUT)), 12);
	assert_eq!(part2(), 12418);

	assert_eq!(Shape::Rock.beaten_by(), Shape::Paper);
	assert!(parsing::try_rounds_from_str("A Y\nD X").is_err());
}
