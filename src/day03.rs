// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Priorities of item bytes: `a` through `z` are 1 through 26, `A` through
/// `Z` are 27 through 52, anything else is not an item (0).
struct Priorities([u8; 128]);

impl Priorities {
	const fn new() -> Self {
		let mut table = [0; 128];
		let mut i = 0;
		while i < 26 {
			table[b'a' as usize + i] = i as u8 + 1;
			table[b'A' as usize + i] = i as u8 + 27;
			i += 1;
		}
		Priorities(table)
	}

	fn get(&self, item: u8) -> Option<u8> {
		self.0.get(item as usize).copied().filter(|&p| p > 0)
	}
}

const PRIORITIES: Priorities = Priorities::new();


/// Items as bit sets, bit `n` set for an item of priority `n`.
struct Rucksack([u64; 2]);

impl Rucksack {
	fn items(&self) -> u64 {
		self.0[0] | self.0[1]
	}

	fn shared_priority(&self) -> Option<u32> {
		single_priority(self.0[0] & self.0[1])
	}
}

fn single_priority(items: u64) -> Option<u32> {
	(items.count_ones() == 1).then_some(items.trailing_zeros())
}


fn input_rucksacks_from_str(s: &str) -> Vec<Rucksack> {
	parsing::try_rucksacks_from_str(s, &PRIORITIES).unwrap()
}

fn input_rucksacks() -> Vec<Rucksack> {
	input_rucksacks_from_str(include_str!("day03.txt"))
}


fn part1_impl(input_rucksacks: Vec<Rucksack>) -> u32 {
	input_rucksacks.iter()
		.map(|r| r.shared_priority().unwrap())
		.sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(input_rucksacks())
}


fn part2_impl(input_rucksacks: Vec<Rucksack>) -> u32 {
	use itertools::Itertools as _;
	assert_eq!(input_rucksacks.len() % 3, 0);
	input_rucksacks.iter()
		.tuples()
		.map(|(r0, r1, r2)| single_priority(r0.items() & r1.items() & r2.items()).unwrap())
		.sum()
}

pub(crate) fn part2() -> u32 {
	part2_impl(input_rucksacks())
}


mod parsing {
	use super::{Priorities, Rucksack};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksackError {
		OddLen(usize),
		InvalidItem { column: usize, found: u8 },
		SharedItems(u32),
	}

	fn try_rucksack_from_str(s: &str, priorities: &Priorities) -> Result<Rucksack, RucksackError> {
		if s.len() % 2 != 0 { return Err(RucksackError::OddLen(s.len())) }
		let mut compartments = [0; 2];
		for (c, b) in s.bytes().enumerate() {
			let priority = priorities.get(b)
				.ok_or(RucksackError::InvalidItem { column: c + 1, found: b })?;
			compartments[c * 2 / s.len()] |= 1 << priority;
		}
		let rucksack = Rucksack(compartments);
		match (compartments[0] & compartments[1]).count_ones() {
			1 => Ok(rucksack),
			n => Err(RucksackError::SharedItems(n)),
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RucksacksError { line: usize, source: RucksackError }

	pub(super) fn try_rucksacks_from_str(s: &str, priorities: &Priorities)
	-> Result<Vec<Rucksack>, RucksacksError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| try_rucksack_from_str(line, priorities)
				.map_err(|e| RucksacksError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(part1_impl(input_rucksacks_from_str(INPUT)), 157);
	assert_eq!(part1(), 7769);
	assert_eq!(part2_impl(input_rucksacks_from_str(INPUT)), 70);
	assert_eq!(part2(), 2627);

	assert_eq!(PRIORITIES.get(b'a'), Some(1));
	assert_eq!(PRIORITIES.get(b'Z'), Some(52));
	assert_eq!(PRIORITIES.get(b'1'), None);
	assert_eq!(PRIORITIES.get(0xff), None);
	assert!(parsing::try_rucksacks_from_str("abc", &PRIORITIES).is_err());
	assert!(parsing::try_rucksacks_from_str("abcd", &PRIORITIES).is_err());
	assert!(parsing::try_rucksacks_from_str("ab-a", &PRIORITIES).is_err());
}
