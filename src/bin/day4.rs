use std::ops::RangeInclusive;

use clap::Parser;
use nom::{
    bytes::complete::tag,
    combinator::{all_consuming, map},
    sequence::separated_pair,
    IResult,
};

use aoclib::cli::{init_logging, InputArgs};
use aoclib::input::open_lines;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment(RangeInclusive<u32>);

impl From<RangeInclusive<u32>> for Assignment {
    fn from(r: RangeInclusive<u32>) -> Self {
        Self(r)
    }
}

impl Assignment {
    fn fully_contains(&self, other: &Self) -> bool {
        self.0.contains(other.0.start()) && self.0.contains(other.0.end())
    }

    /// Either range starts inside the other.
    fn overlaps(&self, other: &Self) -> bool {
        self.0.contains(other.0.start()) || other.0.contains(self.0.start())
    }
}

fn parse_assignment(s: &str) -> IResult<&str, Assignment> {
    map(
        separated_pair(
            nom::character::complete::u32,
            tag("-"),
            nom::character::complete::u32,
        ),
        |(start, end)| Assignment::from(start..=end),
    )(s)
}

fn parse_pair(s: &str) -> IResult<&str, (Assignment, Assignment)> {
    all_consuming(separated_pair(parse_assignment, tag(","), parse_assignment))(s)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Counts {
    contains: usize,
    overlaps: usize,
}

fn count_pairs<I>(lines: I) -> anyhow::Result<Counts>
where
    I: Iterator<Item = anyhow::Result<String>>,
{
    let mut counts = Counts::default();
    for (lineno, line) in lines.enumerate() {
        let line = line?;
        let (_, (first, second)) = parse_pair(line.trim())
            .map_err(|e| anyhow::anyhow!("invalid line {}: {:?}", lineno + 1, e))?;
        if first.fully_contains(&second) || second.fully_contains(&first) {
            counts.contains += 1;
        }
        if first.overlaps(&second) {
            log::debug!("{:?} overlaps {:?}", first.0, second.0);
            counts.overlaps += 1;
        }
    }
    Ok(counts)
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.input.verbose);
    let counts = count_pairs(open_lines(&args.input.input)?)?;
    println!("Contains count: {}", counts.contains);
    println!("Overlap count: {}", counts.overlaps);
    Ok(())
}
