//! Line-oriented readers for the document and the keyword list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordscopeError};

/// Lines of a text file, in file order.
///
/// Read failures are reported as [`WordscopeError::InputRead`] naming the
/// file and the 1-based line number.
pub struct LineReader<R> {
    path: PathBuf,
    reader: R,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new<P: AsRef<Path>>(path: P, reader: R) -> Self {
        LineReader {
            path: path.as_ref().to_path_buf(),
            reader,
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut line = String::new();
        self.line_number += 1;
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(WordscopeError::input_read(format!(
                    "{} line {}: {e}",
                    self.path.display(),
                    self.line_number
                ))))
            }
        }
    }
}

/// Open `path` and iterate over its lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<LineReader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| WordscopeError::from_open(path, e))?;
    Ok(LineReader::new(path, BufReader::new(file)))
}
