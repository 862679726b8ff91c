// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn print_answer(day: &str, part: u8, answer: impl std::fmt::Display) {
	let answer = answer.to_string();
	if answer.contains('\n') {
		println!("Day {day}, part {part}:\n{answer}")
	} else {
		println!("Day {day}, part {part}: {answer}")
	}
}

/// Declares the `dayNN` modules and a `main` running the days named on the
/// command line (e.g. `advent22 5 12`), or all of them if none are named.
macro_rules! days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	fn main() {
		let days = std::env::args().skip(1).collect::<Vec<_>>();
		let selected = |day: &str| days.is_empty() || days.iter()
			.any(|d| d.trim_start_matches('0') == day.trim_start_matches('0'));

		$( if selected(stringify!($day)) {
			print_answer(stringify!($day), 1, [<day $day>]::part1());
			print_answer(stringify!($day), 2, [<day $day>]::part2());
		} )+
	}
} } }

days!(01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12);
