use std::collections::VecDeque;
use std::path::Path;

use clap::Parser;

use aoclib::cli::{init_logging, InputArgs};
use aoclib::input::read_first_line;

const START_OF_PACKET_LEN: usize = 4;
const START_OF_MESSAGE_LEN: usize = 14;

/// The most recent `size` characters of the stream, oldest first.
struct Window {
    chars: VecDeque<char>,
    size: usize,
    seen: bit_set::BitSet,
}

impl Window {
    fn new(size: usize) -> Self {
        Self {
            chars: VecDeque::with_capacity(size + 1),
            size,
            seen: bit_set::BitSet::with_capacity(256),
        }
    }

    fn push(&mut self, c: char) {
        self.chars.push_back(c);
        if self.chars.len() > self.size {
            self.chars.pop_front();
        }
    }

    fn is_full(&self) -> bool {
        self.chars.len() == self.size
    }

    fn is_unique(&mut self) -> bool {
        self.seen.clear();
        for c in &self.chars {
            self.seen.insert(*c as usize);
        }
        self.seen.len() == self.chars.len()
    }
}

/// 1-based position of the last character of the first window of `size`
/// pairwise distinct characters.
fn find_marker(line: &str, size: usize) -> Option<usize> {
    debug_assert!(size > 0);
    let mut window = Window::new(size);
    for (i, c) in line.chars().enumerate() {
        window.push(c);
        if window.is_full() && window.is_unique() {
            log::debug!("{} distinct characters ending at {}", size, i + 1);
            return Some(i + 1);
        }
    }
    None
}

/// Packet and message marker positions for the first line of `path`, which
/// is scanned exactly as read.
fn scan_file<P: AsRef<Path>>(path: P) -> anyhow::Result<(Option<usize>, Option<usize>)> {
    let line = read_first_line(path)?;
    Ok((
        find_marker(&line, START_OF_PACKET_LEN),
        find_marker(&line, START_OF_MESSAGE_LEN),
    ))
}

fn sentinel(found: Option<usize>) -> i64 {
    found.map_or(-1, |p| p as i64)
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
    let (packet, message) = scan_file(&args.input.input)?;
    println!("Data sync start: {}", sentinel(packet));
    println!("Message sync start: {}", sentinel(message));
    Ok(())
}
