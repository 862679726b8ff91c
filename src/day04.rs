// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


type Sections = RangeInclusive<u32>;

struct Pair([Sections; 2]);

impl Pair {
	fn one_contains_other(&self) -> bool {
		let [l, r] = &self.0;
		l.contains(r.start()) && l.contains(r.end())
			|| r.contains(l.start()) && r.contains(l.end())
	}

	fn overlaps(&self) -> bool {
		let [l, r] = &self.0;
		l.start() <= r.end() && r.start() <= l.end()
	}
}


fn input_pairs_from_str(s: &str) -> Vec<Pair> {
	parsing::try_pairs_from_str(s).unwrap()
}

fn input_pairs() -> Vec<Pair> {
	input_pairs_from_str(include_str!("day04.txt"))
}


fn part1and2_impl(input_pairs: Vec<Pair>, predicate: fn(&Pair) -> bool) -> usize {
	input_pairs.iter().filter(|pair| predicate(pair)).count()
}


fn part1_impl(input_pairs: Vec<Pair>) -> usize {
	part1and2_impl(input_pairs, Pair::one_contains_other)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_pairs())
}


fn part2_impl(input_pairs: Vec<Pair>) -> usize {
	part1and2_impl(input_pairs, Pair::overlaps)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_pairs())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Pair, Sections};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SectionsError {
		Format,
		Start(ParseIntError),
		End(ParseIntError),
		Reversed { start: u32, end: u32 },
	}

	fn try_sections_from_str(s: &str) -> Result<Sections, SectionsError> {
		let (start, end) = s.split_once('-').ok_or(SectionsError::Format)?;
		let start = start.parse().map_err(SectionsError::Start)?;
		let end = end.parse().map_err(SectionsError::End)?;
		if start > end { return Err(SectionsError::Reversed { start, end }) }
		Ok(start..=end)
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairError {
		Format,
		Left(SectionsError),
		Right(SectionsError),
	}

	impl FromStr for Pair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (l, r) = s.split_once(',').ok_or(PairError::Format)?;
			Ok(Pair([
				try_sections_from_str(l).map_err(PairError::Left)?,
				try_sections_from_str(r).map_err(PairError::Right)?,
			]))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct PairsError { line: usize, source: PairError }

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<Pair>, PairsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| PairsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1_impl(input_pairs_from_str(INPUT)), 2);
	assert_eq!(part1(), 319);
	assert_eq!(part2_impl(input_pairs_from_str(INPUT)), 4);
	assert_eq!(part2(), 578);

	assert!(parsing::try_pairs_from_str("4-2,1-1").is_err());
	assert!(parsing::try_pairs_from_str("1-2;3-4").is_err());
}
