// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Total calories carried per elf, in input order.
fn input_totals_from_str(s: &str) -> Vec<u64> {
	parsing::try_totals_from_str(s).unwrap()
}

fn input_totals() -> Vec<u64> {
	input_totals_from_str(include_str!("day01.txt"))
}


fn part1_impl(input_totals: Vec<u64>) -> u64 {
	input_totals.into_iter().max().unwrap()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_totals())
}


fn part2_impl(input_totals: Vec<u64>) -> u64 {
	use itertools::Itertools as _;
	input_totals.into_iter().sorted().rev().take(3).sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_totals())
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TotalsError {
		Empty,
		EmptyInventory { line: usize },
		Calories { line: usize, source: ParseIntError },
	}

	pub(super) fn try_totals_from_str(s: &str) -> Result<Vec<u64>, TotalsError> {
		let mut totals = vec![];
		let mut total = None;
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() {
				totals.push(total.take().ok_or(TotalsError::EmptyInventory { line: l + 1 })?);
				continue
			}
			let calories: u64 = line.parse()
				.map_err(|e| TotalsError::Calories { line: l + 1, source: e })?;
			*total.get_or_insert(0) += calories;
		}
		totals.extend(total);
		if totals.is_empty() { return Err(TotalsError::Empty) }
		Ok(totals)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	assert_eq!(part1_impl(input_totals_from_str(INPUT)), 24000);
	assert_eq!(part1(), 85445);
	assert_eq!(part2_impl(input_totals_from_str(INPUT)), 45000);
	assert_eq!(part2(), 242199);

	assert!(matches!(parsing::try_totals_from_str(""), Err(parsing::TotalsError::Empty)));
	assert!(matches!(parsing::try_totals_from_str("1\n\n\n2"),
		Err(parsing::TotalsError::EmptyInventory { line: 3 })));
	assert!(matches!(parsing::try_totals_from_str("1\nx"),
		Err(parsing::TotalsError::Calories { line: 2, .. })));
}
