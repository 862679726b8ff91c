// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const START_OF_PACKET_LEN: usize = 4;
const START_OF_MESSAGE_LEN: usize = 14;


/// Lowercase ASCII letters only.
struct Signal<'s>(&'s [u8]);

impl Signal<'_> {
	/// Returns the number of characters up to and including the first `N`
	/// consecutive distinct ones.
	fn marker_end<const N: usize>(&self) -> Option<usize> {
		self.0.windows(N)
			.position(|window| window.iter()
				.fold(0_u32, |seen, b| seen | 1 << (b - b'a'))
				.count_ones() as usize == N)
			.map(|p| p + N)
	}
}


fn input_signal_from_str(s: &str) -> Signal<'_> {
	Signal::try_from(s).unwrap()
}

fn input_signal() -> Signal<'static> {
	input_signal_from_str(include_str!("day06.txt"))
}


fn part1_impl(input_signal: Signal) -> usize {
	input_signal.marker_end::<START_OF_PACKET_LEN>().unwrap()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_signal())
}


fn part2_impl(input_signal: Signal) -> usize {
	input_signal.marker_end::<START_OF_MESSAGE_LEN>().unwrap()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_signal())
}


mod parsing {
	use super::Signal;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SignalError {
		Empty,
		InvalidByte { column: usize, found: u8 },
	}

	impl<'s> TryFrom<&'s str> for Signal<'s> {
		type Error = SignalError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			let s = s.trim_end_matches('\n');
			if s.is_empty() { return Err(SignalError::Empty) }
			if let Some(c) = s.bytes().position(|b| !b.is_ascii_lowercase()) {
				return Err(SignalError::InvalidByte { column: c + 1, found: s.as_bytes()[c] })
			}
			Ok(Signal(s.as_bytes()))
		}
	}
}


#[test]
fn tests() {
	const INPUTS: [(&str, usize, usize); 5] = [
		("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
		("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
		("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
		("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
		("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
	];
	for (input, packet, message) in INPUTS {
		assert_eq!(part1_impl(input_signal_from_str(input)), packet);
		assert_eq!(part2_impl(input_signal_from_str(input)), message);
	}
	assert_eq!(part1(), 13);
	assert_eq!(part2(), 1514);

	assert_eq!(input_signal_from_str("abcabc").marker_end::<4>(), None);
	assert!(Signal::try_from("abC").is_err());
	assert!(Signal::try_from("\n").is_err());
}
