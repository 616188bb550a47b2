use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

/// Lazily yields the lines of a reader with the line terminator stripped.
///
/// The source is finite and cannot be rewound; once it has returned `None`
/// (or an error) it keeps returning `None`.
#[derive(Debug)]
pub struct LineSource<R: BufRead> {
    reader: R,
    buffer: String,
    done: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = anyhow::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let line = self.buffer.trim_end_matches(&['\n', '\r'][..]);
                Some(Ok(line.to_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(anyhow::Error::new(e).context("failed reading input")))
            }
        }
    }
}

pub fn open_lines<P: AsRef<Path>>(path: P) -> anyhow::Result<LineSource<BufReader<File>>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
    log::debug!("reading {}", path.display());
    Ok(LineSource::new(BufReader::new(file)))
}

/// First line of the file, or an empty string if the file is empty.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    open_lines(path)?.next().unwrap_or_else(|| Ok(String::new()))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::{open_lines, read_first_line, LineSource};

    #[test]
    fn test_strips_terminators() {
        let lines = LineSource::new(Cursor::new("a\r\nb\n\nc"))
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(LineSource::new(Cursor::new("")).count(), 0);
    }

    #[test]
    fn test_not_restartable() {
        let mut source = LineSource::new(Cursor::new("x\n"));
        assert_eq!(source.next().unwrap().unwrap(), "x");
        assert!(source.next().is_none());
        assert!(source.next().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut source = LineSource::new(Cursor::new(vec![0xffu8, 0xfe, b'\n']));
        assert!(source.next().unwrap().is_err());
        assert!(source.next().is_none());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1000\n2000\n\n3000").unwrap();
        let lines = open_lines(file.path())
            .unwrap()
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines, vec!["1000", "2000", "", "3000"]);
        assert_eq!(read_first_line(file.path()).unwrap(), "1000");
    }

    #[test]
    fn test_first_line_of_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(read_first_line(file.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = open_lines(&missing).unwrap_err();
        assert!(format!("{}", err).contains("nope.txt"));
    }
}
