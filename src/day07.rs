// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const DISK_SPACE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;
const SMALL_DIR_MAX_SIZE: u64 = 100_000;


#[cfg_attr(test, derive(Debug))]
struct Dir<'s> {
	name: &'s str,
	parent: Option<usize>,
	subdirs: Vec<usize>,
	files: Vec<(&'s str, u64)>,
}

impl<'s> Dir<'s> {
	fn new(name: &'s str, parent: Option<usize>) -> Self {
		Dir { name, parent, subdirs: vec![], files: vec![] }
	}
}

/// Directories in order of discovery, starting with the root. A directory
/// always comes after its parent.
struct Filesystem<'s>(Vec<Dir<'s>>);

impl Filesystem<'_> {
	/// Returns total sizes, including those of subdirectories, indexed like
	/// the directories themselves.
	fn dir_sizes(&self) -> Vec<u64> {
		let mut sizes = self.0.iter()
			.map(|dir| dir.files.iter().map(|&(_, size)| size).sum())
			.collect::<Vec<u64>>();
		for (d, dir) in self.0.iter().enumerate().rev() {
			if let Some(parent) = dir.parent { sizes[parent] += sizes[d] }
		}
		sizes
	}
}


fn input_filesystem_from_str(s: &str) -> Filesystem<'_> {
	parsing::try_filesystem_from_str(s).unwrap()
}

fn input_filesystem() -> Filesystem<'static> {
	input_filesystem_from_str(include_str!("day07.txt"))
}


fn part1_impl(input_filesystem: Filesystem) -> u64 {
	input_filesystem.dir_sizes().into_iter()
		.filter(|&size| size <= SMALL_DIR_MAX_SIZE)
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_filesystem())
}


fn part2_impl(input_filesystem: Filesystem) -> u64 {
	let sizes = input_filesystem.dir_sizes();
	let free = DISK_SPACE.saturating_sub(sizes[0]);
	let to_free = SPACE_NEEDED.saturating_sub(free);
	sizes.into_iter()
		.filter(|&size| size >= to_free)
		.min().unwrap()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_filesystem())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Dir, Filesystem};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LineErrorKind<'s> {
		NoCurrentDir,
		AboveRoot,
		DirNotFound(&'s str),
		InvalidCommand(&'s str),
		InvalidListing,
		FileSize(ParseIntError),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LineError<'s> { line: usize, kind: LineErrorKind<'s> }

	pub(super) fn try_filesystem_from_str<'s>(s: &'s str) -> Result<Filesystem<'s>, LineError<'s>> {
		use LineErrorKind::*;

		let mut dirs = vec![Dir::new("/", None)];
		let mut cwd: Option<usize> = None;

		for (l, line) in s.lines().enumerate() {
			let err = |kind| LineError { line: l + 1, kind };

			if let Some(command) = line.strip_prefix("$ ") {
				match command.strip_prefix("cd ") {
					Some("/") => cwd = Some(0),
					Some("..") => {
						let dir: &Dir = &dirs[cwd.ok_or(err(NoCurrentDir))?];
						cwd = Some(dir.parent.ok_or(err(AboveRoot))?);
					}
					Some(name) => {
						let dir: &Dir = &dirs[cwd.ok_or(err(NoCurrentDir))?];
						cwd = Some(dir.subdirs.iter().copied()
							.find(|&d| dirs[d].name == name)
							.ok_or(err(DirNotFound(name)))?);
					}
					None if command == "ls" => { cwd.ok_or(err(NoCurrentDir))?; }
					None => return Err(err(InvalidCommand(command))),
				}
				continue
			}

			let c = cwd.ok_or(err(NoCurrentDir))?;
			let (prefix, name) = line.split_once(' ').ok_or(err(InvalidListing))?;
			if prefix == "dir" {
				if dirs[c].subdirs.iter().any(|&d| dirs[d].name == name) { continue }
				dirs.push(Dir::new(name, Some(c)));
				let d = dirs.len() - 1;
				dirs[c].subdirs.push(d);
			} else {
				let size = prefix.parse().map_err(|e| err(FileSize(e)))?;
				if dirs[c].files.iter().any(|&(n, _)| n == name) { continue }
				dirs[c].files.push((name, size));
			}
		}

		Ok(Filesystem(dirs))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };
	assert_eq!(part1_impl(input_filesystem_from_str(INPUT)), 95437);
	assert_eq!(part1(), 471924);
	assert_eq!(part2_impl(input_filesystem_from_str(INPUT)), 24933642);
	assert_eq!(part2(), 16247978);

	// Listing a directory twice does not count its contents twice
	let relisted = format!("{INPUT}$ cd /\n$ ls\ndir a\n14848514 b.txt\n");
	assert_eq!(input_filesystem_from_str(&relisted).dir_sizes(),
		input_filesystem_from_str(INPUT).dir_sizes());

	assert!(parsing::try_filesystem_from_str("$ ls").is_err());
	assert!(parsing::try_filesystem_from_str("$ cd /\n$ cd ..").is_err());
	assert!(parsing::try_filesystem_from_str("$ cd /\n$ cd a").is_err());
	assert!(parsing::try_filesystem_from_str("$ cd /\n$ rm -rf").is_err());
}
