// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::fmt::{Display, Write};
use itertools::Either;


const SIGNAL_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];
const CRT_WIDTH: usize = 40;


#[derive(Clone, Copy)]
enum Instruction {
	Noop,
	Addx(i32),
}

/// Yields the value of the X register *during* each cycle, starting at 1.
fn register_values(instructions: &[Instruction]) -> impl Iterator<Item = i32> + '_ {
	instructions.iter()
		.scan(1, |x, &instruction| {
			let during = *x;
			Some(match instruction {
				Instruction::Noop => Either::Left(std::iter::once(during)),
				Instruction::Addx(value) => {
					*x += value;
					Either::Right([during; 2].into_iter())
				}
			})
		})
		.flatten()
}


/// Sprite positions per cycle; a pixel is lit when the three-wide sprite
/// covers the column being drawn.
struct Crt(Vec<i32>);

impl Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (y, row) in self.0.chunks(CRT_WIDTH).enumerate() {
			if y > 0 { f.write_char('\n')? }
			for (x, &sprite) in row.iter().enumerate() {
				f.write_char(if (sprite - x as i32).abs() <= 1 { '#' } else { '.' })?
			}
		}
		Ok(())
	}
}


fn input_instructions_from_str(s: &str) -> Vec<Instruction> {
	parsing::try_instructions_from_str(s).unwrap()
}

fn input_instructions() -> Vec<Instruction> {
	input_instructions_from_str(include_str!("day10.txt"))
}


fn part1_impl(input_instructions: Vec<Instruction>) -> i32 {
	register_values(&input_instructions)
		.enumerate()
		.filter(|&(i, _)| SIGNAL_CYCLES.contains(&(i + 1)))
		.map(|(i, x)| (i + 1) as i32 * x)
		.sum()
}

pub(crate) fn part1() -> i32 {
	part1_impl(input_instructions())
}


fn part2_impl(input_instructions: Vec<Instruction>) -> String {
	let crt = Crt(register_values(&input_instructions).collect());

	#[cfg(LOGGING)]
	println!("{:?}", crt.0);

	crt.to_string()
}

pub(crate) fn part2() -> String {
	part2_impl(input_instructions())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instruction;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InstructionError {
		Unknown(String),
		Value(ParseIntError),
	}

	impl FromStr for Instruction {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.split_once(' ') {
				None if s == "noop" => Ok(Instruction::Noop),
				Some(("addx", value)) => value.parse()
					.map(Instruction::Addx)
					.map_err(InstructionError::Value),
				_ => Err(InstructionError::Unknown(s.to_owned())),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct InstructionsError { line: usize, source: InstructionError }

	pub(super) fn try_instructions_from_str(s: &str) -> Result<Vec<Instruction>, InstructionsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstructionsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		noop
		addx 3
		addx -5
	" };
	let instructions = input_instructions_from_str(INPUT);
	assert_eq!(register_values(&instructions).collect::<Vec<_>>(), [1, 1, 1, 4, 4]);
	assert_eq!(part2_impl(instructions), "#####");

	assert_eq!(part1(), 13780);
	assert_eq!(part2(), indoc::indoc! { "
		####..#...###....##....##.........#....#
		.....##..###.##............####..##.....
		##..####.##..###.##...##..###.####..#..#
		.####......#..#....#.##.....######.##...
		##...........#..#.##...####..#..........
		...##..##.######..###...#.....####.##...
	" }.trim_end_matches('\n'));

	assert!(parsing::try_instructions_from_str("addx\n").is_err());
	assert!(parsing::try_instructions_from_str("addx x").is_err());
	assert!(parsing::try_instructions_from_str("nop").is_err());
}
