use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod bed;
pub mod maf;

pub const COMMENT_PREFIX: char = '#';

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {} line {line}: {msg}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        msg: String,
    },
}

impl InputError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(path: &Path, line: usize, msg: impl Into<String>) -> Self {
        InputError::Malformed {
            path: path.to_path_buf(),
            line,
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub data: usize,
    pub comments: usize,
    pub blank: usize,
}

pub fn open_text(path: &Path) -> Result<BufReader<File>, InputError> {
    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    Ok(BufReader::new(file))
}

/// Feeds every non-comment line to `on_line` together with its 1-based line
/// number. Whitespace-only lines are dropped only when `skip_blank` is set;
/// otherwise they reach `on_line` like any other record. The file handle is
/// closed on every return path.
pub fn read_data_lines<F>(
    path: &Path,
    skip_blank: bool,
    mut on_line: F,
) -> Result<LineStats, InputError>
where
    F: FnMut(usize, &str) -> Result<(), InputError>,
{
    let mut reader = open_text(path)?;
    let mut buf = String::new();
    let mut stats = LineStats::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| InputError::io(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.starts_with(COMMENT_PREFIX) {
            stats.comments += 1;
            continue;
        }
        if skip_blank && line.trim().is_empty() {
            stats.blank += 1;
            continue;
        }
        stats.data += 1;
        on_line(line_no, line)?;
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
