use clap::{Parser, ValueEnum};
use derive_more::Display;

use aoclib::cli::{init_logging, InputArgs};
use aoclib::input::open_lines;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    fn score(&self) -> u32 {
        match self {
            Outcome::Win => 6,
            Outcome::Tie => 3,
            Outcome::Loss => 0,
        }
    }

    fn from_you_should(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'X' => Outcome::Loss,
            'Y' => Outcome::Tie,
            'Z' => Outcome::Win,
            other => anyhow::bail!("unexpected outcome {:?}", other),
        })
    }
}

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
enum Rps {
    Rock,
    Paper,
    Scissors,
}

impl Rps {
    fn from_they_play(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'A' => Rps::Rock,
            'B' => Rps::Paper,
            'C' => Rps::Scissors,
            other => anyhow::bail!("unexpected opponent move {:?}", other),
        })
    }

    fn from_you_play(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'X' => Rps::Rock,
            'Y' => Rps::Paper,
            'Z' => Rps::Scissors,
            other => anyhow::bail!("unexpected move {:?}", other),
        })
    }

    fn score(&self) -> u32 {
        match self {
            Rps::Rock => 1,
            Rps::Paper => 2,
            Rps::Scissors => 3,
        }
    }

    fn beats(&self) -> Rps {
        match self {
            Rps::Rock => Rps::Scissors,
            Rps::Paper => Rps::Rock,
            Rps::Scissors => Rps::Paper,
        }
    }

    fn is_beaten_by(&self) -> Rps {
        match self {
            Rps::Rock => Rps::Paper,
            Rps::Paper => Rps::Scissors,
            Rps::Scissors => Rps::Rock,
        }
    }

    fn play(&self, other: &Rps) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats() == *other {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    fn to_reach(&self, outcome: Outcome) -> Rps {
        match outcome {
            Outcome::Win => self.is_beaten_by(),
            Outcome::Tie => *self,
            Outcome::Loss => self.beats(),
        }
    }
}

/// How the second column of a round is read.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Column {
    /// The outcome to aim for
    Outcome,
    /// The move to play
    Move,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct Round {
    they_play: Rps,
    you_play: Rps,
}

impl Round {
    fn parse(line: &str, column: Column) -> anyhow::Result<Self> {
        let (lhs, rhs) = line
            .split_once(' ')
            .ok_or_else(|| anyhow::anyhow!("expected two columns in {:?}", line))?;
        let they = single_char(lhs)?;
        let second = single_char(rhs)?;
        let they_play = Rps::from_they_play(they)?;
        let you_play = match column {
            Column::Outcome => they_play.to_reach(Outcome::from_you_should(second)?),
            Column::Move => Rps::from_you_play(second)?,
        };
        Ok(Round {
            they_play,
            you_play,
        })
    }

    fn score(&self) -> u32 {
        let outcome = self.you_play.play(&self.they_play);
        let score = self.you_play.score() + outcome.score();
        log::debug!(
            "they play {}, you play {}, outcome: {}; score: {}",
            self.they_play,
            self.you_play,
            outcome,
            score
        );
        score
    }
}

fn single_char(s: &str) -> anyhow::Result<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("expected a single character, got {:?}", s),
    }
}

fn total_score<I>(lines: I, column: Column) -> anyhow::Result<u32>
where
    I: Iterator<Item = anyhow::Result<String>>,
{
    let mut total = 0;
    for (lineno, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let round = Round::parse(line, column)
            .map_err(|e| e.context(format!("invalid round on line {}", lineno + 1)))?;
        total += round.score();
    }
    Ok(total)
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    /// Second column is your move
    Part1,
    /// Second column is the outcome to aim for
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
    let column = match args.mode {
        Mode::Part1 => Column::Move,
        Mode::Part2 => Column::Outcome,
    };
    let total = total_score(open_lines(&args.input.input)?, column)?;
    println!("Total points: {}", total);
    Ok(())
}
