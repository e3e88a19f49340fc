use crate::bench::{Error, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads titles from `reader`, one per line. Surrounding whitespace is trimmed and blank lines
/// are skipped.
pub fn parse_titles<R>(reader: R) -> Result<Vec<String>>
where
    R: BufRead,
{
    let mut titles = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let title = line.trim();
        if !title.is_empty() {
            titles.push(title.to_string());
        }
    }
    Ok(titles)
}

/// Reads titles from the file at `path`. See `parse_titles`.
pub fn read_titles<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let titles = parse_titles(BufReader::new(File::open(path)?))?;
    debug!("read {} titles from {}", titles.len(), path.display());
    Ok(titles)
}

/// The two record streams every tree is timed against.
#[derive(Clone, Debug, PartialEq)]
pub struct Library {
    pub unsorted: Vec<String>,
    pub sorted: Vec<String>,
}

impl Library {
    /// Loads both streams. If `sorted_path` does not exist, the sorted stream is derived by
    /// sorting the unsorted one.
    pub fn load<P, Q>(unsorted_path: P, sorted_path: Q) -> Result<Library>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let unsorted_path = unsorted_path.as_ref();
        let sorted_path = sorted_path.as_ref();

        let unsorted = read_titles(unsorted_path)?;
        if unsorted.is_empty() {
            return Err(Error::EmptyLibrary(unsorted_path.to_path_buf()));
        }

        let sorted = if sorted_path.exists() {
            let sorted = read_titles(sorted_path)?;
            if sorted.is_empty() {
                return Err(Error::EmptyLibrary(sorted_path.to_path_buf()));
            }
            sorted
        } else {
            warn!(
                "{} does not exist, sorting {} instead",
                sorted_path.display(),
                unsorted_path.display(),
            );
            let mut sorted = unsorted.clone();
            sorted.sort();
            sorted
        };

        Ok(Library { unsorted, sorted })
    }
}
