// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Operand { Old, Num(u64) }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Operation { Add(Operand), Mul(Operand) }

#[cfg_attr(test, derive(Debug))]
struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	divisor: u64,
	/// Targets if divisible, and if not.
	targets: [usize; 2],
}

#[derive(Clone, Copy)]
enum Relief {
	DivideByThree,
	Modulo(u64),
}

impl Operation {
	fn apply(self, old: u64, relief: Relief) -> u64 {
		use num_modular::ModularCoreOps as _;
		let operand = |operand| match operand { Operand::Old => old, Operand::Num(n) => n };
		match (self, relief) {
			(Operation::Add(rhs), Relief::DivideByThree) => (old + operand(rhs)) / 3,
			(Operation::Mul(rhs), Relief::DivideByThree) => old * operand(rhs) / 3,
			(Operation::Add(rhs), Relief::Modulo(m)) => old.addm(operand(rhs), &m),
			(Operation::Mul(rhs), Relief::Modulo(m)) => old.mulm(operand(rhs), &m),
		}
	}
}


fn input_monkeys_from_str(s: &str) -> Vec<Monkey> {
	parsing::try_monkeys_from_str(s).unwrap()
}

fn input_monkeys() -> Vec<Monkey> {
	input_monkeys_from_str(include_str!("day11.txt"))
}


fn part1and2_impl(mut monkeys: Vec<Monkey>, rounds: usize, relief: Relief) -> u64 {
	let mut inspections = vec![0_u64; monkeys.len()];
	for _round in 0..rounds {
		for m in 0..monkeys.len() {
			let items = std::mem::take(&mut monkeys[m].items);
			inspections[m] += items.len() as u64;
			let Monkey { operation, divisor, targets, .. } = monkeys[m];
			for item in items {
				let worry = operation.apply(item, relief);
				let target = targets[if worry % divisor == 0 { 0 } else { 1 }];
				monkeys[target].items.push(worry);
			}
		}

		#[cfg(LOGGING)]
		println!("After round {}: {:?}", _round + 1, inspections);
	}
	inspections.into_iter().sorted().rev().take(2).product()
}


fn part1_impl(input_monkeys: Vec<Monkey>) -> u64 {
	part1and2_impl(input_monkeys, 20, Relief::DivideByThree)
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_monkeys())
}


fn part2_impl(input_monkeys: Vec<Monkey>) -> u64 {
	let modulus = input_monkeys.iter()
		.map(|monkey| monkey.divisor)
		.fold(1, num_integer::lcm);
	part1and2_impl(input_monkeys, 10_000, Relief::Modulo(modulus))
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_monkeys())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Monkey, Operand, Operation};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeyErrorKind {
		Missing(&'static str),
		Format(&'static str),
		Id { found: usize },
		Int(ParseIntError),
		ZeroDivisor,
		Target { found: usize },
		Trailing,
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MonkeyError { monkey: usize, kind: MonkeyErrorKind }

	fn try_operation_from_str(s: &str) -> Result<Operation, MonkeyErrorKind> {
		let operand = match s.get(2..) {
			Some("old") => Operand::Old,
			Some(n) => Operand::Num(n.parse().map_err(MonkeyErrorKind::Int)?),
			None => return Err(MonkeyErrorKind::Format("operation")),
		};
		match s.get(..2) {
			Some("+ ") => Ok(Operation::Add(operand)),
			Some("* ") => Ok(Operation::Mul(operand)),
			_ => Err(MonkeyErrorKind::Format("operation")),
		}
	}

	fn try_monkey_from_str(id: usize, s: &str) -> Result<Monkey, MonkeyErrorKind> {
		use MonkeyErrorKind::*;

		let mut lines = s.lines();
		let mut field = |name: &'static str, prefix: &str| lines.next()
			.ok_or(Missing(name))?
			.strip_prefix(prefix)
			.ok_or(Format(name));

		let found = field("header", "Monkey ")?
			.strip_suffix(':').ok_or(Format("header"))?
			.parse().map_err(Int)?;
		if found != id { return Err(Id { found }) }

		let items = field("items", "  Starting items: ")?;
		let items = if items.is_empty() { vec![] } else {
			items.split(", ").map(str::parse).collect::<Result<_, _>>().map_err(Int)?
		};
		let operation = try_operation_from_str(field("operation", "  Operation: new = old ")?)?;
		let divisor = field("test", "  Test: divisible by ")?.parse().map_err(Int)?;
		if divisor == 0 { return Err(ZeroDivisor) }
		let if_true = field("if true", "    If true: throw to monkey ")?.parse().map_err(Int)?;
		let if_false = field("if false", "    If false: throw to monkey ")?.parse().map_err(Int)?;
		if lines.next().is_some() { return Err(Trailing) }

		Ok(Monkey { items, operation, divisor, targets: [if_true, if_false] })
	}

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeyError> {
		let monkeys = s.trim_end_matches('\n')
			.split("\n\n")
			.enumerate()
			.map(|(m, s)| try_monkey_from_str(m, s)
				.map_err(|kind| MonkeyError { monkey: m, kind }))
			.collect::<Result<Vec<_>, _>>()?;
		for (m, monkey) in monkeys.iter().enumerate() {
			if let Some(&found) = monkey.targets.iter().find(|&&t| t == m || t >= monkeys.len()) {
				return Err(MonkeyError { monkey: m, kind: MonkeyErrorKind::Target { found } })
			}
		}
		Ok(monkeys)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };
	assert_eq!(part1_impl(input_monkeys_from_str(INPUT)), 10605);
	assert_eq!(part1(), 90662);
	assert_eq!(part2_impl(input_monkeys_from_str(INPUT)), 2713310158);
	assert_eq!(part2(), 136214879320);

	let monkeys = input_monkeys_from_str(INPUT);
	assert_eq!(monkeys[2].operation, Operation::Mul(Operand::Old));
	assert_eq!(monkeys[1].targets, [2, 0]);
	assert_eq!(Operation::Mul(Operand::Num(19)).apply(79, Relief::DivideByThree), 500);
	assert_eq!(Operation::Add(Operand::Old).apply(7, Relief::Modulo(10)), 4);

	let self_target = INPUT.replacen("If true: throw to monkey 2", "If true: throw to monkey 0", 1);
	assert!(parsing::try_monkeys_from_str(&self_target).is_err());
	let out_of_range = INPUT.replacen("monkey 3", "monkey 4", 1);
	assert!(parsing::try_monkeys_from_str(&out_of_range).is_err());
	let misnumbered = INPUT.replacen("Monkey 1:", "Monkey 7:", 1);
	assert!(parsing::try_monkeys_from_str(&misnumbered).is_err());
}
