//! Driver that loads a library of book titles and times every set on the same records.
//!
//! Each record stream (the library as given, and the library in sorted order) is inserted into a
//! fresh `BinarySet`, `AvlSet`, and `RedBlackSet`. The driver then times a single search and a
//! single removal on each, and collects the results into a `Report`.

mod config;
mod library;
mod report;

pub use self::config::{Config, Format};
pub use self::library::{parse_titles, read_titles, Library};
pub use self::report::{measure, Report, StreamReport, Timing, TraversalDump};

use crate::avl_tree::AvlSet;
use crate::binary_tree::BinarySet;
use crate::red_black_tree::RedBlackSet;
use log::info;
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::result;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    JsonError(serde_json::Error),
    EmptyLibrary(PathBuf),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::JsonError(error) => Some(error),
            Error::EmptyLibrary(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::JsonError(error) => write!(f, "{}", error),
            Error::EmptyLibrary(path) => write!(f, "no titles found in {}", path.display()),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Times every set against one stream of records.
pub fn run_stream(stream: &'static str, titles: &[String], config: &Config) -> StreamReport {
    info!("inserting {} {} records into every tree", titles.len(), stream);
    let search_key = config.search_key.clone();
    let remove_key = config.remove_key.clone();

    let (binary, binary_dump) =
        measure::<BinarySet<String>>(titles, &search_key, &remove_key, config.show);
    let (avl, avl_dump) = measure::<AvlSet<String>>(titles, &search_key, &remove_key, config.show);
    let (red_black, red_black_dump) =
        measure::<RedBlackSet<String>>(titles, &search_key, &remove_key, config.show);

    let traversals = config.show.map(|_| {
        vec![binary_dump, avl_dump, red_black_dump]
            .into_iter()
            .flatten()
            .collect()
    });

    StreamReport {
        stream,
        records: titles.len(),
        search_key,
        remove_key,
        timings: vec![binary, avl, red_black],
        traversals,
    }
}

/// Loads the library named by `config` and times every set on the unsorted and sorted streams.
pub fn run(config: &Config) -> Result<Report> {
    let library = Library::load(&config.unsorted_path, &config.sorted_path)?;
    let streams = vec![
        run_stream("unsorted", &library.unsorted, config),
        run_stream("sorted", &library.sorted, config),
    ];
    info!("finished timing {} streams", streams.len());
    Ok(Report { streams })
}
