// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Crate labels per stack, bottom to top.
#[cfg_attr(test, derive(Debug))]
struct Stacks(Vec<Vec<u8>>);

#[cfg_attr(test, derive(Debug))]
struct Step {
	num_crates: usize,
	from_stack: usize,
	to_stack: usize,
}

#[derive(Clone, Copy)]
enum CrateMover {
	/// Moves crates one at a time
	Model9000,
	/// Moves crates all at once
	Model9001,
}

#[allow(dead_code)]
#[derive(Debug)]
struct StackUnderflowError { step: usize, num_crates: usize, found: usize }

impl Stacks {
	fn operate(&mut self, mover: CrateMover, step: &Step) -> Result<(), usize> {
		let from = &mut self.0[step.from_stack];
		let at = from.len().checked_sub(step.num_crates).ok_or(from.len())?;
		let mut crates = from.split_off(at);
		if matches!(mover, CrateMover::Model9000) { crates.reverse() }
		self.0[step.to_stack].extend(crates);
		Ok(())
	}

	fn top_crates(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last())
			.map(|&c| c as char)
			.collect()
	}
}


fn input_from_str(s: &str) -> (Stacks, Vec<Step>) {
	parsing::try_stacks_and_steps_from_str(s).unwrap()
}

fn input() -> (Stacks, Vec<Step>) {
	input_from_str(include_str!("day05.txt"))
}


fn part1and2_impl(input: (Stacks, Vec<Step>), mover: CrateMover) -> String {
	let (mut stacks, steps) = input;
	for (i, step) in steps.iter().enumerate() {
		stacks.operate(mover, step)
			.map_err(|found| StackUnderflowError { step: i + 1, num_crates: step.num_crates, found })
			.unwrap();
	}
	stacks.top_crates()
}


fn part1_impl(input: (Stacks, Vec<Step>)) -> String {
	part1and2_impl(input, CrateMover::Model9000)
}

pub(crate) fn part1() -> String {
	part1_impl(input())
}


fn part2_impl(input: (Stacks, Vec<Step>)) -> String {
	part1and2_impl(input, CrateMover::Model9001)
}

pub(crate) fn part2() -> String {
	part2_impl(input())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Stacks, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StacksError {
		NoLabels,
		Label { column: usize, found: u8 },
		Crate { line: usize, column: usize },
		TooWide { line: usize },
	}

	/// Parses a drawing like `[A]     [C]` rows above a ` 1   2   3 ` label row.
	fn try_stacks_from_lines(lines: &[&str]) -> Result<Stacks, StacksError> {
		let (labels, rows) = lines.split_last().ok_or(StacksError::NoLabels)?;
		let num_stacks = (labels.trim_end().len() + 2) / 4;
		if num_stacks == 0 { return Err(StacksError::NoLabels) }
		for (i, label) in labels.bytes().enumerate() {
			let expected = match i % 4 {
				1 if i / 4 < num_stacks => Some(b'1' + (i / 4) as u8),
				_ => None,
			};
			if expected.map_or(label != b' ', |e| label != e) {
				return Err(StacksError::Label { column: i + 1, found: label })
			}
		}

		let mut stacks = vec![vec![]; num_stacks];
		for (l, row) in rows.iter().enumerate().rev() {
			if row.trim_end().len() > num_stacks * 4 - 1 {
				return Err(StacksError::TooWide { line: l + 1 })
			}
			for (s, cell) in row.as_bytes().chunks(4).enumerate() {
				match cell {
					[b' ', b' ', b' ', ..] => continue,
					[b'[', label, b']', ..] if label.is_ascii_uppercase() => {
						let stack: &mut Vec<u8> = &mut stacks[s];
						if stack.len() < rows.len() - 1 - l {
							return Err(StacksError::Crate { line: l + 1, column: s * 4 + 1 })
						}
						stack.push(*label)
					}
					_ => return Err(StacksError::Crate { line: l + 1, column: s * 4 + 1 }),
				}
			}
		}
		Ok(Stacks(stacks))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StepError {
		Format,
		NumCrates(ParseIntError),
		FromStack(ParseIntError),
		ToStack(ParseIntError),
		SameStack,
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.strip_prefix("move ").ok_or(StepError::Format)?;
			let (num_crates, s) = s.split_once(" from ").ok_or(StepError::Format)?;
			let (from_stack, to_stack) = s.split_once(" to ").ok_or(StepError::Format)?;
			let num_crates = num_crates.parse().map_err(StepError::NumCrates)?;
			let from_stack = from_stack.parse::<std::num::NonZeroUsize>().map_err(StepError::FromStack)?;
			let to_stack = to_stack.parse::<std::num::NonZeroUsize>().map_err(StepError::ToStack)?;
			if from_stack == to_stack { return Err(StepError::SameStack) }
			Ok(Step { num_crates, from_stack: from_stack.get() - 1, to_stack: to_stack.get() - 1 })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InputError {
		NoBlank,
		Stacks(StacksError),
		Step { line: usize, source: StepError },
		StackOutOfRange { line: usize, stack: usize },
	}

	pub(super) fn try_stacks_and_steps_from_str(s: &str) -> Result<(Stacks, Vec<Step>), InputError> {
		let lines = s.lines().collect::<Vec<_>>();
		let blank = lines.iter().position(|line| line.is_empty()).ok_or(InputError::NoBlank)?;
		let stacks = try_stacks_from_lines(&lines[..blank]).map_err(InputError::Stacks)?;

		let steps = lines[blank + 1..].iter()
			.enumerate()
			.map(|(l, line)| {
				let line_no = blank + l + 2;
				let step: Step = line.parse()
					.map_err(|e| InputError::Step { line: line_no, source: e })?;
				if let Some(&stack) = [step.from_stack, step.to_stack].iter()
						.find(|&&s| s >= stacks.0.len()) {
					return Err(InputError::StackOutOfRange { line: line_no, stack: stack + 1 })
				}
				Ok(step)
			})
			.collect::<Result<_, _>>()?;

		Ok((stacks, steps))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };
	assert_eq!(part1_impl(input_from_str(INPUT)), "CMZ");
	assert_eq!(part1(), "XWLRAZKUH");
	assert_eq!(part2_impl(input_from_str(INPUT)), "MCD");
	assert_eq!(part2(), "XRHLAZZUH");

	let (mut stacks, _) = input_from_str(INPUT);
	let step = Step { num_crates: 4, from_stack: 0, to_stack: 1 };
	assert_eq!(stacks.operate(CrateMover::Model9001, &step), Err(2));
	assert!(parsing::try_stacks_and_steps_from_str("[A]\n 1 \n\nmove 1 from 1 to 2").is_err());
	assert!(parsing::try_stacks_and_steps_from_str("    [A]\n 1   2 \n\nmove 1 from 2 to 1").is_ok());
	assert!(parsing::try_stacks_and_steps_from_str("[A]    \n    [B]\n 1   2 \n\nmove 1 from 2 to 1").is_err());
}
