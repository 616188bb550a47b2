use std::collections::HashSet;

use clap::{Parser, ValueEnum};
use itertools::Itertools;

use aoclib::cli::{init_logging, InputArgs};
use aoclib::input::open_lines;

trait Priority {
    fn priority(&self) -> anyhow::Result<u32>;
}

impl Priority for char {
    fn priority(&self) -> anyhow::Result<u32> {
        if self.is_ascii_lowercase() {
            Ok((*self as u32) - ('a' as u32) + 1)
        } else if self.is_ascii_uppercase() {
            Ok((*self as u32) - ('A' as u32) + 27)
        } else {
            anyhow::bail!("no priority for {:?}", self)
        }
    }
}

/// Characters present in every one of `items`, without duplicates.
fn common_items(items: &[&str]) -> HashSet<char> {
    let mut sets = items.iter().map(|e| e.chars().collect::<HashSet<_>>());
    let first = match sets.next() {
        Some(first) => first,
        None => return HashSet::new(),
    };
    sets.fold(first, |a, b| a.intersection(&b).cloned().collect())
}

fn score_group(items: &[&str]) -> anyhow::Result<u32> {
    let common = common_items(items);
    log::debug!("common items {:?}", common);
    common.iter().map(|c| c.priority()).sum()
}

/// How lines are grouped before intersecting.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Grouping {
    /// Three consecutive lines form a group
    Triples,
    /// Each line is a group of its two halves
    Halves,
}

fn total_priority<I>(lines: I, grouping: Grouping) -> anyhow::Result<u32>
where
    I: Iterator<Item = anyhow::Result<String>>,
{
    itertools::process_results(lines, |lines| -> anyhow::Result<u32> {
        match grouping {
            Grouping::Triples => {
                let mut triples = lines.tuples::<(String, String, String)>();
                let mut total = 0;
                for (i, (a, b, c)) in triples.by_ref().enumerate() {
                    total += score_group(&[a.as_str(), b.as_str(), c.as_str()]).map_err(|e| {
                        e.context(format!("invalid group on lines {}-{}", i * 3 + 1, i * 3 + 3))
                    })?;
                }
                let leftover = triples.into_buffer().count();
                if leftover != 0 {
                    log::warn!("ignoring {} trailing line(s) of an incomplete group", leftover);
                }
                Ok(total)
            }
            Grouping::Halves => lines
                .enumerate()
                .map(|(i, line)| {
                    let midpoint = line.len() / 2;
                    if line.len() % 2 != 0 || !line.is_char_boundary(midpoint) {
                        anyhow::bail!("line {} cannot be split into equal halves", i + 1);
                    }
                    let (first, second) = line.split_at(midpoint);
                    score_group(&[first, second])
                        .map_err(|e| e.context(format!("invalid line {}", i + 1)))
                })
                .sum(),
        }
    })?
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    /// Intersect the two halves of each line
    Part1,
    /// Intersect groups of three lines
    Part2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,
    #[arg(short, long, value_enum, default_value_t = Mode::Part2)]
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.input.verbose);
    let grouping = match args.mode {
        Mode::Part1 => Grouping::Halves,
        Mode::Part2 => Grouping::Triples,
    };
    let res = total_priority(open_lines(&args.input.input)?, grouping)?;
    println!("Total priority: {}", res);
    Ok(())
}
