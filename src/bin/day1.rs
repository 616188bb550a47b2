use clap::Parser;

use aoclib::cli::{init_logging, InputArgs};
use aoclib::input::open_lines;

type GroupId = u32;

/// The `N` largest group totals seen so far, largest first.
///
/// A new total goes after any retained total it merely ties with, so equal
/// totals keep the order they were handed in.
#[derive(Debug)]
struct Best<const N: usize> {
    inner: [Option<(GroupId, i64)>; N],
}

impl<const N: usize> Best<N> {
    fn new() -> Self {
        Best { inner: [None; N] }
    }

    fn handle(&mut self, group_id: GroupId, total: i64) {
        let insert_index = self.inner.iter().position(|i| match i {
            None => true,
            Some((_, v)) => *v < total,
        });
        if let Some(index) = insert_index {
            // backshift everything below the insertion point, dropping the last
            for source in (index..(N - 1)).rev() {
                self.inner[source + 1] = self.inner[source]
            }
            self.inner[index] = Some((group_id, total));
        }
    }

    fn retained(&self) -> impl Iterator<Item = (GroupId, i64)> + '_ {
        self.inner.iter().flatten().copied()
    }

    fn total(&self) -> anyhow::Result<i64> {
        self.retained().try_fold(0i64, |acc, (group_id, v)| {
            acc.checked_add(v)
                .ok_or_else(|| anyhow::anyhow!("top total overflows at group {}", group_id))
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum MalformedLine {
    /// A line that is neither blank nor an integer closes the group, like a blank line.
    EndsGroup,
    Fatal,
}

fn top_groups<I>(lines: I, malformed: MalformedLine) -> anyhow::Result<Best<3>>
where
    I: Iterator<Item = anyhow::Result<String>>,
{
    let mut best = Best::<3>::new();
    let mut acc = 0i64;
    let mut current: GroupId = 1;
    let mut pending = false;

    for (lineno, line) in lines.enumerate() {
        let line = line?;
        let val = line.trim();
        let parsed = if val.is_empty() {
            None
        } else {
            match val.parse::<i64>() {
                Ok(v) => Some(v),
                Err(e) if malformed == MalformedLine::Fatal => {
                    anyhow::bail!("line {}: invalid value {:?}: {}", lineno + 1, val, e)
                }
                Err(_) => {
                    log::warn!(
                        "line {}: {:?} is not a number, treating it as a group separator",
                        lineno + 1,
                        val
                    );
                    None
                }
            }
        };
        match parsed {
            Some(v) => {
                acc = acc.checked_add(v).ok_or_else(|| {
                    anyhow::anyhow!("line {}: group {} total overflows", lineno + 1, current)
                })?;
                pending = true;
            }
            None => {
                log::debug!("group {} closed with total {}", current, acc);
                best.handle(current, acc);
                acc = 0;
                current += 1;
                pending = false;
            }
        }
    }
    if pending {
        log::debug!("group {} closed with total {}", current, acc);
        best.handle(current, acc);
    }
    Ok(best)
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,
    /// Fail on lines that are neither blank nor an integer
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.input.verbose);
    let malformed = if args.strict {
        MalformedLine::Fatal
    } else {
        MalformedLine::EndsGroup
    };
    let best = top_groups(open_lines(&args.input.input)?, malformed)?;
    for (group_id, total) in best.retained() {
        log::debug!("kept group {} with total {}", group_id, total);
    }
    println!("Top 3 total: {}", best.total()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{top_groups, Best, MalformedLine};

    fn lines(s: &str) -> impl Iterator<Item = anyhow::Result<String>> + '_ {
        s.lines().map(|l| Ok(l.to_owned()))
    }

    fn run(s: &str) -> i64 {
        top_groups(lines(s), MalformedLine::EndsGroup)
            .unwrap()
            .total()
            .unwrap()
    }

    #[test]
    fn test_three_groups() {
        assert_eq!(run("1\n2\n\n10\n\n5\n5\n5"), 28);
    }

    #[test]
    fn test_fewer_than_three_groups() {
        assert_eq!(run("1\n2\n\n10"), 13);
        assert_eq!(run("7"), 7);
        assert_eq!(run(""), 0);
    }

    #[test]
    fn test_four_groups_keeps_top_three() {
        assert_eq!(run("1\n\n20\n\n3\n4\n\n100\n"), 127);
    }

    #[test]
    fn test_sample() {
        let input = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";
        assert_eq!(run(input), 45000);
    }

    #[test]
    fn test_malformed_line_ends_group() {
        assert_eq!(run("1\n2\nabc\n10\n\n5"), 18);
        assert_eq!(run("1\n2\nabc\n10\n\n5"), run("1\n2\n\n10\n\n5"));
    }

    #[test]
    fn test_malformed_line_strict() {
        let res = top_groups(lines("1\n2\nabc\n10"), MalformedLine::Fatal);
        let err = res.unwrap_err();
        assert!(format!("{}", err).contains("line 3"));
        assert_eq!(
            top_groups(lines("1\n\n2"), MalformedLine::Fatal)
                .unwrap()
                .total()
                .unwrap(),
            3
        );
    }

    #[test]
    fn test_read_error_propagates() {
        let source = vec![Ok("1".to_owned()), Err(anyhow::anyhow!("boom"))];
        assert!(top_groups(source.into_iter(), MalformedLine::EndsGroup).is_err());
    }

    #[test]
    fn test_best_ties_keep_insertion_order() {
        let mut best = Best::<3>::new();
        best.handle(1, 5);
        best.handle(2, 9);
        best.handle(3, 5);
        best.handle(4, 5);
        let kept = best.retained().collect::<Vec<_>>();
        assert_eq!(kept, vec![(2, 9), (1, 5), (3, 5)]);
        assert_eq!(best.total().unwrap(), 19);
    }

    #[test]
    fn test_group_overflow_is_an_error() {
        let err = top_groups(lines("9223372036854775807\n1"), MalformedLine::EndsGroup)
            .unwrap_err();
        assert!(format!("{}", err).contains("line 2"));
        let best = top_groups(lines("9223372036854775807\n\n1"), MalformedLine::EndsGroup)
            .unwrap();
        assert!(best.total().is_err());
        assert_eq!(run("9223372036854775807\n\n-1"), 9223372036854775806);
    }

    #[test]
    fn test_best_descending() {
        let mut best = Best::<3>::new();
        for (id, v) in [1, 4, 2, 8, 3].into_iter().enumerate() {
            best.handle(id as u32, v);
        }
        let values = best.retained().map(|(_, v)| v).collect::<Vec<_>>();
        assert_eq!(values, vec![8, 4, 3]);
    }
}
